use num::{NumCast, ToPrimitive};

/// Convert a f64 value to the given numerical type only if the conversion is lossless.
/// Returns None when the value is out of range, has a fractional part that would be truncated
/// or is NaN for an integer type.
pub fn exact<T: NumCast + ToPrimitive>(v: f64) -> Option<T> {
    let x: T = NumCast::from(v)?;
    let roundtrip = x.to_f64()?;
    if roundtrip == v || (roundtrip.is_nan() && v.is_nan()) {
        Some(x)
    } else {
        None
    }
}

/// Check if a f64 value can be represented exactly in the given numerical type.
pub fn is_exact<T: NumCast + ToPrimitive>(v: f64) -> bool {
    exact::<T>(v).is_some()
}
