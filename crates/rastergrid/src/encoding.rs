//! Mapping of raster element encodings to grid element types.
//!
//! Raster storage reports its element encoding as a tag (e.g. `RasterDataType.F32`).
//! Every known tag maps to exactly one [`ArrayDataType`], unknown tags resolve to `None`.
//!
//! The packed color encodings (`RGB24`, `RGBA32`, `RGB48`) are mapped to the unsigned integer type
//! of a single channel. The channel grouping is not reconstructed, callers that need the individual
//! channels have to unpack the values themselves.

use std::str::FromStr;

use crate::{ArrayDataType, Error, RasterHandle, Result};

const TAG_PREFIX: &str = "RasterDataType.";

/// The storage encoding of a raster cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementEncoding {
    F64,
    F32,
    I64,
    U64,
    RGB48,
    I32,
    U32,
    RGB24,
    RGBA32,
    I16,
    U16,
    I8,
    U8,
}

impl ElementEncoding {
    pub const ALL: [ElementEncoding; 13] = [
        Self::F64,
        Self::F32,
        Self::I64,
        Self::U64,
        Self::RGB48,
        Self::I32,
        Self::U32,
        Self::RGB24,
        Self::RGBA32,
        Self::I16,
        Self::U16,
        Self::I8,
        Self::U8,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::F64 => "F64",
            Self::F32 => "F32",
            Self::I64 => "I64",
            Self::U64 => "U64",
            Self::RGB48 => "RGB48",
            Self::I32 => "I32",
            Self::U32 => "U32",
            Self::RGB24 => "RGB24",
            Self::RGBA32 => "RGBA32",
            Self::I16 => "I16",
            Self::U16 => "U16",
            Self::I8 => "I8",
            Self::U8 => "U8",
        }
    }

    /// Parse a qualified encoding tag (`RasterDataType.F32`), the match is exact.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.strip_prefix(TAG_PREFIX).and_then(Self::from_name)
    }

    /// Lookup by the bare encoding name (`F32`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|enc| enc.name() == name)
    }

    /// The grid element type used for this encoding
    pub fn data_type(&self) -> ArrayDataType {
        match self {
            Self::F64 => ArrayDataType::Float64,
            Self::F32 => ArrayDataType::Float32,
            Self::I64 => ArrayDataType::Int64,
            Self::U64 => ArrayDataType::Uint64,
            Self::RGB48 => ArrayDataType::Uint16,
            Self::I32 => ArrayDataType::Int32,
            Self::U32 => ArrayDataType::Uint32,
            Self::RGB24 => ArrayDataType::Uint8,
            Self::RGBA32 => ArrayDataType::Uint8,
            Self::I16 => ArrayDataType::Int16,
            Self::U16 => ArrayDataType::Uint16,
            Self::I8 => ArrayDataType::Int8,
            Self::U8 => ArrayDataType::Uint8,
        }
    }

    /// The scalar encoding that stores values of the given element type
    pub fn for_data_type(data_type: ArrayDataType) -> Self {
        match data_type {
            ArrayDataType::Int8 => Self::I8,
            ArrayDataType::Uint8 => Self::U8,
            ArrayDataType::Int16 => Self::I16,
            ArrayDataType::Uint16 => Self::U16,
            ArrayDataType::Int32 => Self::I32,
            ArrayDataType::Uint32 => Self::U32,
            ArrayDataType::Int64 => Self::I64,
            ArrayDataType::Uint64 => Self::U64,
            ArrayDataType::Float32 => Self::F32,
            ArrayDataType::Float64 => Self::F64,
        }
    }

    pub fn is_packed_color(&self) -> bool {
        matches!(self, Self::RGB24 | Self::RGBA32 | Self::RGB48)
    }

    /// Number of channels packed in a single cell
    pub fn channel_count(&self) -> usize {
        match self {
            Self::RGB24 | Self::RGB48 => 3,
            Self::RGBA32 => 4,
            _ => 1,
        }
    }
}

impl std::fmt::Display for ElementEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{TAG_PREFIX}{}", self.name())
    }
}

impl FromStr for ElementEncoding {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        Self::from_tag(tag).ok_or_else(|| Error::TypeMapping { tag: tag.to_string() })
    }
}

impl From<ElementEncoding> for ArrayDataType {
    fn from(encoding: ElementEncoding) -> Self {
        encoding.data_type()
    }
}

/// Resolve an encoding tag to the grid element type, `None` for unknown tags.
pub fn resolve(tag: &str) -> Option<ArrayDataType> {
    ElementEncoding::from_tag(tag).map(|enc| enc.data_type())
}

/// Resolve the encoding of a raster
pub fn resolve_raster_encoding(raster: &impl RasterHandle) -> Result<ElementEncoding> {
    let encoding: ElementEncoding = raster.configs().data_type.parse()?;
    if encoding.is_packed_color() {
        log::warn!(
            "{encoding} packs {} channels per cell, values are exposed as {} without channel grouping",
            encoding.channel_count(),
            encoding.data_type()
        );
    }

    Ok(encoding)
}

/// Resolve the grid element type of a raster, fails with [`Error::TypeMapping`] for unknown encodings.
pub fn resolve_raster_data_type(raster: &impl RasterHandle) -> Result<ArrayDataType> {
    Ok(resolve_raster_encoding(raster)?.data_type())
}
