use ndarray::{ArrayBase, DataMut, Dimension};

/// Trait for grid element types that can represent a missing value.
/// Grids have no sentinel concept of their own, NaN is used to mark cells that contained the
/// raster nodata value. Only floating point types can hold NaN, so integer types do not implement this trait.
pub trait Nodata: num::Float {
    const NODATA: Self;

    #[inline]
    fn is_nodata(self) -> bool {
        self.is_nan()
    }

    /// For importing raster data with a sentinel nodata value
    #[inline]
    fn init_nodata(&mut self, nodata: Self) {
        if *self == nodata {
            *self = Self::NODATA;
        }
    }

    /// For exporting the data to a raster that expects the sentinel nodata value
    #[inline]
    fn restore_nodata(&mut self, nodata: Self) {
        if self.is_nodata() {
            *self = nodata;
        }
    }
}

impl Nodata for f32 {
    const NODATA: f32 = f32::NAN;
}

impl Nodata for f64 {
    const NODATA: f64 = f64::NAN;
}

/// Replace all the values that exactly match the nodata sentinel with NaN.
pub fn init_nodata<T, S, D>(data: &mut ArrayBase<S, D>, nodata: T)
where
    T: Nodata,
    S: DataMut<Elem = T>,
    D: Dimension,
{
    if nodata.is_nan() {
        // the sentinel is already NaN, nothing to substitute
        return;
    }

    data.iter_mut().for_each(|v| v.init_nodata(nodata));
}

/// Replace all NaN values with the nodata sentinel.
/// Use this before writing a grid that was read with nodata normalization back to a raster.
pub fn restore_nodata<T, S, D>(data: &mut ArrayBase<S, D>, nodata: T)
where
    T: Nodata,
    S: DataMut<Elem = T>,
    D: Dimension,
{
    if nodata.is_nan() {
        return;
    }

    data.iter_mut().for_each(|v| v.restore_nodata(nodata));
}

/// Count the cells that contain nodata (NaN)
pub fn nodata_count<T, S, D>(data: &ArrayBase<S, D>) -> usize
where
    T: Nodata,
    S: ndarray::Data<Elem = T>,
    D: Dimension,
{
    data.iter().filter(|v| v.is_nodata()).count()
}
