//! Read the full contents of a raster into a grid.
//!
//! A read resolves the element type of the raster, copies every row into a freshly allocated grid
//! and optionally normalizes the nodata sentinel to NaN. Normalization always produces a `f64` grid,
//! the sentinel replacement is a separate pass over the populated grid so the comparison is done on the
//! converted values.

use ndarray::Array2;

use crate::{
    AnyFlat, AnyGrid, ArrayDataType, Error, GridNum, RasterHandle, Result, encoding::resolve_raster_data_type, nodata,
};

/// Options that control how a raster is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadOptions {
    /// Replace the raster nodata value with NaN, the grid will be of type `f64`
    pub normalize_nodata: bool,
}

impl ReadOptions {
    /// Read the raster values as stored, in the native element type
    pub fn raw() -> Self {
        ReadOptions { normalize_nodata: false }
    }

    pub fn with_normalize_nodata(self, normalize_nodata: bool) -> Self {
        ReadOptions { normalize_nodata }
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions { normalize_nodata: true }
    }
}

/// Read the full raster into a grid with shape (rows, columns).
/// When `normalize_nodata` is true the result is a `f64` grid with nodata cells set to NaN,
/// otherwise the grid has the native element type of the raster.
pub fn read_grid(raster: &impl RasterHandle, normalize_nodata: bool) -> Result<AnyGrid> {
    read_grid_with_options(raster, &ReadOptions::default().with_normalize_nodata(normalize_nodata))
}

pub fn read_grid_with_options(raster: &impl RasterHandle, options: &ReadOptions) -> Result<AnyGrid> {
    let native_type = resolve_raster_data_type(raster)?;
    let configs = raster.configs();

    let grid = if options.normalize_nodata {
        warn_if_nodata_not_representable(native_type, configs.nodata);

        let mut grid = read_rows::<f64>(raster)?;
        nodata::init_nodata(&mut grid, configs.nodata);
        AnyGrid::F64(grid)
    } else {
        crate::dispatch_datatype!(native_type, T, read_rows::<T>(raster)?)
    };

    log::debug!(
        "Read raster {} ({native_type}) into {} grid",
        configs.size(),
        grid.data_type()
    );

    Ok(grid)
}

/// Read the full raster and convert it to a grid of the requested element type.
/// Normalized nodata cells are NaN, so normalizing requires a floating point element type.
pub fn read_grid_as<T: GridNum>(raster: &impl RasterHandle, normalize_nodata: bool) -> Result<Array2<T>> {
    if normalize_nodata && T::TYPE.is_integer() {
        return Err(Error::InvalidArgument(format!(
            "Nodata normalization requires a floating point grid, {} can not hold NaN",
            T::TYPE
        )));
    }

    Ok(read_grid(raster, normalize_nodata)?.into_cast::<T>())
}

/// Read the full raster as a flat sequence in row-major order.
/// The values and element type are identical to [`read_grid`].
pub fn read_flat(raster: &impl RasterHandle, normalize_nodata: bool) -> Result<AnyFlat> {
    Ok(read_grid(raster, normalize_nodata)?.flatten())
}

pub fn read_flat_with_options(raster: &impl RasterHandle, options: &ReadOptions) -> Result<AnyFlat> {
    Ok(read_grid_with_options(raster, options)?.flatten())
}

fn read_rows<T: GridNum>(raster: &impl RasterHandle) -> Result<Array2<T>> {
    let size = raster.size();
    let mut grid = Array2::<T>::zeros(size.shape());

    for (row_index, mut row) in grid.rows_mut().into_iter().enumerate() {
        let values = raster.get_row_data(row_index)?;
        if values.len() != size.cols {
            return Err(Error::RowLength {
                row: row_index,
                expected: size.cols,
                actual: values.len(),
            });
        }

        row.iter_mut().zip(values).for_each(|(cell, v)| *cell = T::from_f64(v));
    }

    Ok(grid)
}

/// Only cells that exactly match the nodata value are normalized.
/// A nodata value that does not fit the native element type can never occur in a correctly encoded raster.
fn warn_if_nodata_not_representable(native_type: ArrayDataType, nodata: f64) {
    if nodata.is_nan() {
        return;
    }

    if !crate::dispatch_datatype_nowrap!(native_type, T, inf::cast::is_exact::<T>(nodata)) {
        log::warn!("Nodata value {nodata} is not representable as {native_type}, only exact matches are normalized");
    }
}
