//! Bridge between row based raster storage and in-memory grids.
//!
//! A raster is read into a two dimensional [`AnyGrid`] (or a flattened [`AnyFlat`]) whose element type
//! follows from the raster encoding, and grids are written back into existing rasters of the same dimensions.

#![warn(clippy::unwrap_used)]

pub type Result<T = ()> = std::result::Result<T, Error>;

mod anygrid_macros;

mod anygrid;
mod arraydatatype;
pub mod encoding;
mod error;
mod gridnum;
mod memoryraster;
pub mod nodata;
mod rasterhandle;
mod rastersize;
pub mod reader;
pub mod writer;

#[cfg(test)]
mod testutils;

#[doc(inline)]
pub use anygrid::{AnyArray, AnyFlat, AnyGrid};
#[doc(inline)]
pub use arraydatatype::ArrayDataType;
#[doc(inline)]
pub use encoding::{ElementEncoding, resolve};
#[doc(inline)]
pub use error::Error;
pub use gridnum::GridNum;
#[doc(inline)]
pub use memoryraster::MemoryRaster;
pub use nodata::Nodata;
#[doc(inline)]
pub use rasterhandle::{RasterConfigs, RasterHandle};
#[doc(inline)]
pub use rastersize::RasterSize;
pub use reader::{ReadOptions, read_flat, read_flat_with_options, read_grid, read_grid_as, read_grid_with_options};
pub use writer::{write_array, write_grid};
