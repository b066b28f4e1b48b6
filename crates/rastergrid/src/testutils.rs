use approx::relative_eq;

use crate::{ElementEncoding, MemoryRaster};

pub const NOD: f64 = -9999.0;

/// Compare floating point values, NaN values are considered equal to each other
pub fn compare_fp_vectors(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b.iter()).all(|(a, b)| {
            if a.is_nan() || b.is_nan() {
                return a.is_nan() && b.is_nan();
            }

            relative_eq!(a, b)
        })
}

/// 2x2 float raster with a single nodata cell
pub fn scenario_raster() -> MemoryRaster {
    MemoryRaster::from_rows(ElementEncoding::F32, NOD, &[[1.0, NOD], [3.0, 4.0]]).expect("Failed to create test raster")
}
