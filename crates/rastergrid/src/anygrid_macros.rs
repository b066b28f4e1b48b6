//! Bridges between the runtime element type of a raster and the typed `ndarray` code paths.
//!
//! The element type of a raster is only known after resolving its encoding, these macros
//! expand a single generic expression into one match arm per [`crate::ArrayDataType`].

/// Evaluate `$expr` on the typed array inside an [`crate::AnyArray`], the result is returned as is.
///
/// ```ignore
/// let values: Vec<f64> = dispatch_any_array!(&grid, arr, arr.iter().map(|v| v.as_f64()).collect());
/// ```
#[macro_export]
macro_rules! dispatch_any_array {
    ($array:expr, $var:ident, $expr:expr) => {
        match $array {
            $crate::AnyArray::U8($var) => $expr,
            $crate::AnyArray::U16($var) => $expr,
            $crate::AnyArray::U32($var) => $expr,
            $crate::AnyArray::U64($var) => $expr,
            $crate::AnyArray::I8($var) => $expr,
            $crate::AnyArray::I16($var) => $expr,
            $crate::AnyArray::I32($var) => $expr,
            $crate::AnyArray::I64($var) => $expr,
            $crate::AnyArray::F32($var) => $expr,
            $crate::AnyArray::F64($var) => $expr,
        }
    };
}

/// Transform the typed array inside an [`crate::AnyArray`] while keeping its element type.
/// The dimension of the produced array may differ, e.g. flattening a grid.
#[macro_export]
macro_rules! apply_to_any_array {
    ($array:expr, $var:ident, $expr:expr) => {
        match $array {
            $crate::AnyArray::U8($var) => $crate::AnyArray::U8($expr),
            $crate::AnyArray::U16($var) => $crate::AnyArray::U16($expr),
            $crate::AnyArray::U32($var) => $crate::AnyArray::U32($expr),
            $crate::AnyArray::U64($var) => $crate::AnyArray::U64($expr),
            $crate::AnyArray::I8($var) => $crate::AnyArray::I8($expr),
            $crate::AnyArray::I16($var) => $crate::AnyArray::I16($expr),
            $crate::AnyArray::I32($var) => $crate::AnyArray::I32($expr),
            $crate::AnyArray::I64($var) => $crate::AnyArray::I64($expr),
            $crate::AnyArray::F32($var) => $crate::AnyArray::F32($expr),
            $crate::AnyArray::F64($var) => $crate::AnyArray::F64($expr),
        }
    };
}

/// Evaluate `$expr` with `$t` aliased to the primitive type of a runtime [`crate::ArrayDataType`].
///
/// ```ignore
/// let exact = dispatch_datatype_nowrap!(native_type, T, inf::cast::is_exact::<T>(nodata));
/// dispatch_datatype_nowrap!(native_type, N, write_rows::<N, T, S>(grid, raster)?);
/// ```
#[macro_export]
macro_rules! dispatch_datatype_nowrap {
    (@arm $t:ident, $prim:ty, $expr:expr) => {{
        type $t = $prim;
        $expr
    }};
    ($data_type:expr, $t:ident, $expr:expr) => {
        match $data_type {
            $crate::ArrayDataType::Uint8 => $crate::dispatch_datatype_nowrap!(@arm $t, u8, $expr),
            $crate::ArrayDataType::Uint16 => $crate::dispatch_datatype_nowrap!(@arm $t, u16, $expr),
            $crate::ArrayDataType::Uint32 => $crate::dispatch_datatype_nowrap!(@arm $t, u32, $expr),
            $crate::ArrayDataType::Uint64 => $crate::dispatch_datatype_nowrap!(@arm $t, u64, $expr),
            $crate::ArrayDataType::Int8 => $crate::dispatch_datatype_nowrap!(@arm $t, i8, $expr),
            $crate::ArrayDataType::Int16 => $crate::dispatch_datatype_nowrap!(@arm $t, i16, $expr),
            $crate::ArrayDataType::Int32 => $crate::dispatch_datatype_nowrap!(@arm $t, i32, $expr),
            $crate::ArrayDataType::Int64 => $crate::dispatch_datatype_nowrap!(@arm $t, i64, $expr),
            $crate::ArrayDataType::Float32 => $crate::dispatch_datatype_nowrap!(@arm $t, f32, $expr),
            $crate::ArrayDataType::Float64 => $crate::dispatch_datatype_nowrap!(@arm $t, f64, $expr),
        }
    };
}

/// Like [`dispatch_datatype_nowrap!`] for expressions that produce a typed `ndarray::Array`,
/// the array is wrapped in the matching [`crate::AnyArray`] variant.
///
/// ```ignore
/// let grid: AnyGrid = dispatch_datatype!(native_type, T, read_rows::<T>(raster)?);
/// ```
#[macro_export]
macro_rules! dispatch_datatype {
    ($data_type:expr, $t:ident, $expr:expr) => {
        $crate::dispatch_datatype_nowrap!($data_type, $t, $crate::AnyArray::from($expr))
    };
}

#[cfg(test)]
mod tests {
    use ndarray::Array1;

    use crate::{AnyFlat, ArrayDataType, GridNum};

    const ALL_TYPES: [ArrayDataType; 10] = [
        ArrayDataType::Int8,
        ArrayDataType::Uint8,
        ArrayDataType::Int16,
        ArrayDataType::Uint16,
        ArrayDataType::Int32,
        ArrayDataType::Uint32,
        ArrayDataType::Int64,
        ArrayDataType::Uint64,
        ArrayDataType::Float32,
        ArrayDataType::Float64,
    ];

    #[test]
    fn datatype_binds_matching_primitive() {
        for data_type in ALL_TYPES {
            assert_eq!(crate::dispatch_datatype_nowrap!(data_type, T, T::TYPE), data_type);
            assert_eq!(
                crate::dispatch_datatype_nowrap!(data_type, T, std::mem::size_of::<T>()),
                data_type.size_in_bytes()
            );
        }
    }

    #[test]
    fn datatype_wraps_in_matching_variant() {
        for data_type in ALL_TYPES {
            let flat: AnyFlat = crate::dispatch_datatype!(data_type, T, Array1::<T>::from_elem(3, T::from_f64(7.0)));
            assert_eq!(flat.data_type(), data_type);
            assert_eq!(flat.to_f64_vec(), vec![7.0; 3]);
        }
    }
}
