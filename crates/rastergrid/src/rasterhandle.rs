use crate::{ElementEncoding, RasterSize, Result};

/// Raster metadata as reported by the storage engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterConfigs {
    pub rows: usize,
    pub columns: usize,
    /// Element encoding tag (e.g. `RasterDataType.F32`)
    pub data_type: String,
    /// The nodata sentinel in the native value domain of the raster
    pub nodata: f64,
}

impl RasterConfigs {
    pub fn new(rows: usize, columns: usize, encoding: ElementEncoding, nodata: f64) -> Self {
        Self::with_data_type_tag(rows, columns, encoding.to_string(), nodata)
    }

    /// Configs with an arbitrary encoding tag, the tag is only validated when the raster is read or written.
    pub fn with_data_type_tag(rows: usize, columns: usize, data_type: impl Into<String>, nodata: f64) -> Self {
        RasterConfigs {
            rows,
            columns,
            data_type: data_type.into(),
            nodata,
        }
    }

    pub fn size(&self) -> RasterSize {
        RasterSize::with_rows_cols(self.rows, self.columns)
    }

    /// The parsed encoding, None for unknown tags
    pub fn encoding(&self) -> Option<ElementEncoding> {
        ElementEncoding::from_tag(&self.data_type)
    }
}

/// Row based access to a raster owned by a storage engine.
///
/// Row indices are zero based. Values are exchanged as `f64` regardless of the element encoding,
/// the storage engine is responsible for converting them to and from its native representation.
/// Errors reported by an implementation are propagated unmodified to the caller of the read and write operations,
/// implementations outside of this crate can wrap their own errors with [`crate::Error::raster`].
pub trait RasterHandle {
    fn configs(&self) -> &RasterConfigs;

    fn get_row_data(&self, row: usize) -> Result<Vec<f64>>;

    fn set_row_data(&mut self, row: usize, data: &[f64]) -> Result<()>;

    fn size(&self) -> RasterSize {
        self.configs().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configs_from_encoding() {
        let configs = RasterConfigs::new(3, 4, ElementEncoding::I16, -9999.0);
        assert_eq!(configs.data_type, "RasterDataType.I16");
        assert_eq!(configs.encoding(), Some(ElementEncoding::I16));
        assert_eq!(configs.size(), RasterSize::with_rows_cols(3, 4));
    }

    #[test]
    fn configs_with_unknown_tag() {
        let configs = RasterConfigs::with_data_type_tag(1, 1, "RasterDataType.Complex", 0.0);
        assert_eq!(configs.encoding(), None);
    }
}
