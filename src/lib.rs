//! Raster to grid adapter.
//!
//! Re-exports the [`rastergrid`] crate, which reads rasters into grids and writes grids back into rasters,
//! together with the numeric helpers from [`inf`].

pub use inf;
pub use rastergrid;

#[doc(inline)]
pub use rastergrid::*;
