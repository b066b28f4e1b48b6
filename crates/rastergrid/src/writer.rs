//! Write the contents of a grid into an existing raster.
//!
//! The grid dimensions must match the raster exactly, the raster is never resized.
//! Every cell is converted to the native element type of the raster before it is handed to the storage,
//! so the stored values are those the raster can represent. NaN cells are not replaced by the nodata
//! value of the raster, use [`crate::nodata::restore_nodata`] on the grid before writing when needed.

use ndarray::{ArrayBase, Data, Ix2};

use crate::{AnyGrid, Error, GridNum, RasterHandle, RasterSize, Result, encoding::resolve_raster_data_type};

/// Write the grid into the raster, row by row.
/// Validation errors are reported before any row is written.
pub fn write_grid(grid: &AnyGrid, raster: &mut impl RasterHandle) -> Result<()> {
    crate::dispatch_any_array!(grid, arr, write_array(arr, raster))
}

/// Write a typed grid (or grid view) into the raster.
pub fn write_array<T, S>(grid: &ArrayBase<S, Ix2>, raster: &mut impl RasterHandle) -> Result<()>
where
    T: GridNum,
    S: Data<Elem = T>,
{
    let grid_size = RasterSize::from(grid.dim());
    let raster_size = raster.size();
    if grid_size != raster_size {
        return Err(Error::ShapeMismatch {
            grid: grid_size,
            raster: raster_size,
        });
    }

    let native_type = resolve_raster_data_type(&*raster)?;
    crate::dispatch_datatype_nowrap!(native_type, N, write_rows::<N, T, S>(grid, raster)?);

    log::debug!("Wrote {} grid into raster {raster_size} ({native_type})", T::TYPE);
    Ok(())
}

fn write_rows<N, T, S>(grid: &ArrayBase<S, Ix2>, raster: &mut impl RasterHandle) -> Result<()>
where
    N: GridNum,
    T: GridNum,
    S: Data<Elem = T>,
{
    let mut values = Vec::with_capacity(grid.ncols());
    for (row_index, row) in grid.rows().into_iter().enumerate() {
        values.clear();
        values.extend(row.iter().map(|&v| N::cast_from(v).as_f64()));
        raster.set_row_data(row_index, &values)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};

    use super::*;
    use crate::{
        ElementEncoding, MemoryRaster, RasterConfigs, nodata,
        reader::read_grid,
        testutils::{NOD, compare_fp_vectors, scenario_raster},
    };

    #[test]
    fn raw_read_write_roundtrip() -> Result<()> {
        for encoding in ElementEncoding::ALL {
            let source = MemoryRaster::from_rows(encoding, NOD, &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
            let mut target = MemoryRaster::new(RasterConfigs::new(2, 3, encoding, NOD));

            let grid = read_grid(&source, false)?;
            write_grid(&grid, &mut target)?;
            assert_eq!(target.as_slice(), source.as_slice(), "{encoding}");
        }

        Ok(())
    }

    #[test]
    fn write_scenario_raw() -> Result<()> {
        let source = scenario_raster();
        let mut target = MemoryRaster::new(source.configs().clone());

        write_grid(&read_grid(&source, false)?, &mut target)?;
        assert_eq!(target.as_slice(), &[1.0, NOD, 3.0, 4.0]);
        Ok(())
    }

    #[test]
    fn write_converts_to_native_type() -> Result<()> {
        let mut raster = MemoryRaster::new(RasterConfigs::new(1, 4, ElementEncoding::I16, NOD));

        write_array(&array![[1.7, -2.9, 40000.0, -40000.0]], &mut raster)?;
        assert_eq!(raster.as_slice(), &[1.0, -2.0, 32767.0, -32768.0]);
        Ok(())
    }

    #[test]
    fn write_integer_grid_to_float_raster() -> Result<()> {
        let mut raster = MemoryRaster::new(RasterConfigs::new(2, 2, ElementEncoding::F32, NOD));

        write_grid(&AnyGrid::from(array![[1u8, 2], [3, 255]]), &mut raster)?;
        assert_eq!(raster.as_slice(), &[1.0, 2.0, 3.0, 255.0]);
        Ok(())
    }

    #[test]
    fn write_float_raster_rounds_to_f32() -> Result<()> {
        let mut raster = MemoryRaster::new(RasterConfigs::new(1, 1, ElementEncoding::F32, NOD));

        write_array(&array![[0.1f64]], &mut raster)?;
        assert_eq!(raster.as_slice(), &[f64::from(0.1f32)]);
        Ok(())
    }

    #[test]
    fn shape_mismatch_leaves_raster_untouched() {
        let mut raster = MemoryRaster::new(RasterConfigs::new(2, 2, ElementEncoding::F64, NOD));

        let grid = AnyGrid::from(Array2::<f64>::ones((3, 2)));
        match write_grid(&grid, &mut raster) {
            Err(Error::ShapeMismatch { grid, raster }) => {
                assert_eq!(grid, RasterSize::with_rows_cols(3, 2));
                assert_eq!(raster, RasterSize::with_rows_cols(2, 2));
            }
            other => panic!("Unexpected result: {other:?}"),
        }

        let transposed = Array2::<f64>::ones((2, 3));
        assert!(matches!(
            write_array(&transposed, &mut raster),
            Err(Error::ShapeMismatch { .. })
        ));
        assert_eq!(raster.as_slice(), &[NOD; 4]);
    }

    #[test]
    fn unknown_encoding_leaves_raster_untouched() {
        let mut raster = MemoryRaster::new(RasterConfigs::with_data_type_tag(1, 2, "RasterDataType.CF32", NOD));

        assert!(matches!(
            write_array(&array![[1.0, 2.0]], &mut raster),
            Err(Error::TypeMapping { .. })
        ));
        assert_eq!(raster.as_slice(), &[NOD; 2]);
    }

    #[test]
    fn nan_is_not_replaced_by_nodata() -> Result<()> {
        let mut raster = MemoryRaster::new(RasterConfigs::new(1, 2, ElementEncoding::F64, NOD));

        write_array(&array![[f64::NAN, 2.0]], &mut raster)?;
        assert!(compare_fp_vectors(raster.as_slice(), &[f64::NAN, 2.0]));
        Ok(())
    }

    #[test]
    fn restore_nodata_before_writing() -> Result<()> {
        let source = scenario_raster();
        let mut target = MemoryRaster::new(source.configs().clone());

        let mut grid: Array2<f64> = read_grid(&source, true)?.try_into()?;
        assert_eq!(nodata::nodata_count(&grid), 1);
        nodata::restore_nodata(&mut grid, source.configs().nodata);

        write_array(&grid, &mut target)?;
        assert_eq!(target.as_slice(), source.as_slice());
        Ok(())
    }

    #[test]
    fn write_array_view() -> Result<()> {
        let mut raster = MemoryRaster::new(RasterConfigs::new(2, 2, ElementEncoding::I32, NOD));

        let grid = array![[1, 2], [3, 4]];
        write_array(&grid.t(), &mut raster)?;
        assert_eq!(raster.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
        Ok(())
    }

    #[test]
    fn write_empty_grid() -> Result<()> {
        let mut raster = MemoryRaster::new(RasterConfigs::new(0, 3, ElementEncoding::U8, NOD));
        write_grid(&AnyGrid::from(Array2::<u8>::zeros((0, 3))), &mut raster)?;
        assert!(raster.as_slice().is_empty());
        Ok(())
    }
}
