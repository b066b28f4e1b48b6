use ndarray::{Array, Array1, Dimension, Ix1, Ix2};

use crate::{ArrayDataType, Error, GridNum, RasterSize, Result};

/// Type erased `ndarray::Array`
/// The element type of a raster is only known at runtime, so reads produce one of these variants.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyArray<D: Dimension> {
    U8(Array<u8, D>),
    U16(Array<u16, D>),
    U32(Array<u32, D>),
    U64(Array<u64, D>),
    I8(Array<i8, D>),
    I16(Array<i16, D>),
    I32(Array<i32, D>),
    I64(Array<i64, D>),
    F32(Array<f32, D>),
    F64(Array<f64, D>),
}

/// Type erased two dimensional grid with shape (rows, columns)
pub type AnyGrid = AnyArray<Ix2>;
/// Type erased row-major flattened grid
pub type AnyFlat = AnyArray<Ix1>;

impl<D: Dimension> AnyArray<D> {
    /// Number of elements
    pub fn len(&self) -> usize {
        crate::dispatch_any_array!(self, arr, arr.len())
    }

    pub fn is_empty(&self) -> bool {
        crate::dispatch_any_array!(self, arr, arr.is_empty())
    }

    pub fn data_type(&self) -> ArrayDataType {
        match self {
            AnyArray::U8(_) => ArrayDataType::Uint8,
            AnyArray::U16(_) => ArrayDataType::Uint16,
            AnyArray::U32(_) => ArrayDataType::Uint32,
            AnyArray::U64(_) => ArrayDataType::Uint64,
            AnyArray::I8(_) => ArrayDataType::Int8,
            AnyArray::I16(_) => ArrayDataType::Int16,
            AnyArray::I32(_) => ArrayDataType::Int32,
            AnyArray::I64(_) => ArrayDataType::Int64,
            AnyArray::F32(_) => ArrayDataType::Float32,
            AnyArray::F64(_) => ArrayDataType::Float64,
        }
    }

    pub fn shape(&self) -> &[usize] {
        crate::dispatch_any_array!(self, arr, arr.shape())
    }

    /// Cast the array values to the destination type, returning a new array.
    /// Conversion follows `as` cast semantics, see [`GridNum::cast_from`].
    pub fn cast<T: GridNum>(&self) -> Array<T, D> {
        crate::dispatch_any_array!(self, arr, arr.mapv(T::cast_from))
    }

    /// Cast the array values to the destination type, consuming self.
    /// The buffer is reused when the element type already matches.
    pub fn into_cast<T: GridNum>(self) -> Array<T, D> {
        crate::dispatch_any_array!(self, arr, arr.mapv_into_any(T::cast_from))
    }

    /// Copy of the values in logical (row-major) order converted to f64
    pub fn to_f64_vec(&self) -> Vec<f64> {
        crate::dispatch_any_array!(self, arr, arr.iter().map(|v| v.as_f64()).collect())
    }
}

impl AnyGrid {
    pub fn size(&self) -> RasterSize {
        let shape = self.shape();
        RasterSize::with_rows_cols(shape[0], shape[1])
    }

    pub fn rows(&self) -> usize {
        self.size().rows
    }

    pub fn columns(&self) -> usize {
        self.size().cols
    }

    /// Serialize the grid into a one dimensional sequence in row-major order
    pub fn flatten(self) -> AnyFlat {
        crate::apply_to_any_array!(self, arr, arr.iter().copied().collect::<Array1<_>>())
    }
}

macro_rules! impl_any_array_conversions {
    ( $data_type:ty, $variant:ident ) => {
        impl<D: Dimension> From<Array<$data_type, D>> for AnyArray<D> {
            fn from(array: Array<$data_type, D>) -> Self {
                AnyArray::$variant(array)
            }
        }

        impl<D: Dimension> TryFrom<AnyArray<D>> for Array<$data_type, D> {
            type Error = Error;

            fn try_from(value: AnyArray<D>) -> Result<Self> {
                match value {
                    AnyArray::$variant(array) => Ok(array),
                    other => Err(Error::InvalidArgument(format!(
                        "Expected {} array, got {}",
                        stringify!($data_type),
                        other.data_type()
                    ))),
                }
            }
        }

        impl<'a, D: Dimension> TryFrom<&'a AnyArray<D>> for &'a Array<$data_type, D> {
            type Error = Error;

            fn try_from(value: &'a AnyArray<D>) -> Result<Self> {
                match value {
                    AnyArray::$variant(array) => Ok(array),
                    other => Err(Error::InvalidArgument(format!(
                        "Expected {} array, got {}",
                        stringify!($data_type),
                        other.data_type()
                    ))),
                }
            }
        }
    };
}

impl_any_array_conversions!(u8, U8);
impl_any_array_conversions!(i8, I8);
impl_any_array_conversions!(u16, U16);
impl_any_array_conversions!(i16, I16);
impl_any_array_conversions!(u32, U32);
impl_any_array_conversions!(i32, I32);
impl_any_array_conversions!(u64, U64);
impl_any_array_conversions!(i64, I64);
impl_any_array_conversions!(f32, F32);
impl_any_array_conversions!(f64, F64);
