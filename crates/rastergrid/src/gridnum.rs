use crate::ArrayDataType;

// Type requirements for the elements of a grid
pub trait GridNum:
    Copy
    + num::Zero
    + num::NumCast
    + PartialEq
    + PartialOrd
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
    const TYPE: ArrayDataType;
    const IS_SIGNED: bool;

    fn as_u8(self) -> u8;
    fn as_u16(self) -> u16;
    fn as_u32(self) -> u32;
    fn as_u64(self) -> u64;
    fn as_i8(self) -> i8;
    fn as_i16(self) -> i16;
    fn as_i32(self) -> i32;
    fn as_i64(self) -> i64;
    fn as_f32(self) -> f32;
    fn as_f64(self) -> f64;

    /// Numeric conversion from another grid element type with the semantics of an `as` cast:
    /// integers wrap or truncate, floats saturate when converted to integers and NaN becomes 0.
    fn cast_from<U: GridNum>(value: U) -> Self;

    #[inline]
    fn from_f64(value: f64) -> Self {
        Self::cast_from(value)
    }
}

macro_rules! as_primitive_impl {
    ( $( $method:ident => $t:ty ),* ) => {
        $(
            #[inline]
            #[allow(clippy::unnecessary_cast, clippy::cast_lossless)]
            fn $method(self) -> $t {
                self as $t
            }
        )*
    };
}

macro_rules! gridnum_impl {
    ($t:ty, $data_type:ident, $signed:expr, $as_self:ident) => {
        impl GridNum for $t {
            const TYPE: ArrayDataType = ArrayDataType::$data_type;
            const IS_SIGNED: bool = $signed;

            as_primitive_impl!(
                as_u8 => u8,
                as_u16 => u16,
                as_u32 => u32,
                as_u64 => u64,
                as_i8 => i8,
                as_i16 => i16,
                as_i32 => i32,
                as_i64 => i64,
                as_f32 => f32,
                as_f64 => f64
            );

            #[inline]
            fn cast_from<U: GridNum>(value: U) -> Self {
                value.$as_self()
            }
        }
    };
}

gridnum_impl!(i8, Int8, true, as_i8);
gridnum_impl!(i16, Int16, true, as_i16);
gridnum_impl!(i32, Int32, true, as_i32);
gridnum_impl!(i64, Int64, true, as_i64);
gridnum_impl!(u8, Uint8, false, as_u8);
gridnum_impl!(u16, Uint16, false, as_u16);
gridnum_impl!(u32, Uint32, false, as_u32);
gridnum_impl!(u64, Uint64, false, as_u64);
gridnum_impl!(f32, Float32, true, as_f32);
gridnum_impl!(f64, Float64, true, as_f64);


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_semantics() {
        assert_eq!(u8::cast_from(300i32), 44);
        assert_eq!(u8::cast_from(300.7f64), 255);
        assert_eq!(u8::cast_from(-5.0f32), 0);
        assert_eq!(i16::cast_from(3.9f64), 3);
        assert_eq!(i16::cast_from(-3.9f64), -3);
        assert_eq!(i32::cast_from(f64::NAN), 0);
        assert_eq!(i8::cast_from(200u8), -56);
        assert_eq!(f32::cast_from(16_777_217i64), 16_777_216.0);
        assert!(f32::cast_from(f64::NAN).is_nan());
        assert_eq!(u64::cast_from(u64::MAX), u64::MAX);
    }
}
