/// The homogeneous element type of a grid.
/// Every raster encoding resolves to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ArrayDataType {
    Int8 = 0,
    Uint8 = 1,
    Int16 = 2,
    Uint16 = 3,
    Int32 = 4,
    Uint32 = 5,
    Int64 = 6,
    Uint64 = 7,
    Float32 = 8,
    Float64 = 9,
}

impl ArrayDataType {
    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Uint8 => "uint8",
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    pub fn is_integer(&self) -> bool {
        !self.is_floating_point()
    }

    pub fn is_signed(&self) -> bool {
        !matches!(self, Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64)
    }

    pub fn size_in_bytes(&self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Int64 | Self::Uint64 | Self::Float64 => 8,
        }
    }
}

impl std::fmt::Display for ArrayDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_properties() {
        assert!(ArrayDataType::Float32.is_floating_point());
        assert!(ArrayDataType::Float64.is_floating_point());
        assert!(ArrayDataType::Uint64.is_integer());
        assert!(!ArrayDataType::Uint16.is_signed());
        assert!(ArrayDataType::Int8.is_signed());
        assert!(ArrayDataType::Float32.is_signed());
        assert_eq!(ArrayDataType::Int16.size_in_bytes(), 2);
        assert_eq!(ArrayDataType::Float64.size_in_bytes(), 8);
        assert_eq!(ArrayDataType::Uint32.to_string(), "uint32");
    }
}
