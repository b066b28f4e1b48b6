use thiserror::Error;

use crate::RasterSize;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported raster data type: '{tag}'")]
    TypeMapping { tag: String },
    #[error("Grid dimensions do not match the raster: grid {grid} <-> raster {raster}")]
    ShapeMismatch { grid: RasterSize, raster: RasterSize },
    #[error("Row {row} contains {actual} values, expected {expected}")]
    RowLength { row: usize, expected: usize, actual: usize },
    #[error("Row index {row} out of range (raster has {rows} rows)")]
    RowIndexOutOfRange { row: usize, rows: usize },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Raster(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an error reported by a foreign [`crate::RasterHandle`] implementation.
    pub fn raster(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Raster(Box::new(err))
    }
}
