use std::fmt;

/// Buffer binding targets used by this crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferTarget {
    Array,
    ElementArray,
    Uniform,
}

impl BufferTarget {
    pub const fn as_gl(self) -> u32 {
        match self {
            BufferTarget::Array => 0x8892,
            BufferTarget::ElementArray => 0x8893,
            BufferTarget::Uniform => 0x8A11,
        }
    }
}

/// Buffer usage hint passed to `buffer_data`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BufferUsage {
    StaticDraw,
    #[default]
    DynamicDraw,
    StreamDraw,
}

impl BufferUsage {
    pub const fn as_gl(self) -> u32 {
        match self {
            BufferUsage::StaticDraw => 0x88E4,
            BufferUsage::DynamicDraw => 0x88E8,
            BufferUsage::StreamDraw => 0x88E0,
        }
    }
}

/// Component type of vertex and index data.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DataType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    HalfFloat,
    Float,
}

impl DataType {
    /// Bytes per component.
    pub const fn byte_size(self) -> u32 {
        match self {
            DataType::Byte | DataType::UnsignedByte => 1,
            DataType::Short | DataType::UnsignedShort | DataType::HalfFloat => 2,
            DataType::Int | DataType::UnsignedInt | DataType::Float => 4,
        }
    }

    pub const fn as_gl(self) -> u32 {
        match self {
            DataType::Byte => 0x1400,
            DataType::UnsignedByte => 0x1401,
            DataType::Short => 0x1402,
            DataType::UnsignedShort => 0x1403,
            DataType::Int => 0x1404,
            DataType::UnsignedInt => 0x1405,
            DataType::Float => 0x1406,
            DataType::HalfFloat => 0x140B,
        }
    }

    pub const fn from_gl(value: u32) -> Option<Self> {
        Some(match value {
            0x1400 => DataType::Byte,
            0x1401 => DataType::UnsignedByte,
            0x1402 => DataType::Short,
            0x1403 => DataType::UnsignedShort,
            0x1404 => DataType::Int,
            0x1405 => DataType::UnsignedInt,
            0x1406 => DataType::Float,
            0x140B => DataType::HalfFloat,
            _ => return None,
        })
    }

    /// Whether the type can be used for indexed drawing.
    pub const fn is_index_type(self) -> bool {
        matches!(
            self,
            DataType::UnsignedByte | DataType::UnsignedShort | DataType::UnsignedInt
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Byte => "BYTE",
            DataType::UnsignedByte => "UNSIGNED_BYTE",
            DataType::Short => "SHORT",
            DataType::UnsignedShort => "UNSIGNED_SHORT",
            DataType::Int => "INT",
            DataType::UnsignedInt => "UNSIGNED_INT",
            DataType::HalfFloat => "HALF_FLOAT",
            DataType::Float => "FLOAT",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DataType; 8] = [
        DataType::Byte,
        DataType::UnsignedByte,
        DataType::Short,
        DataType::UnsignedShort,
        DataType::Int,
        DataType::UnsignedInt,
        DataType::HalfFloat,
        DataType::Float,
    ];

    #[test]
    fn byte_sizes_match_gl_table() {
        assert_eq!(DataType::UnsignedByte.byte_size(), 1);
        assert_eq!(DataType::Short.byte_size(), 2);
        assert_eq!(DataType::HalfFloat.byte_size(), 2);
        assert_eq!(DataType::Float.byte_size(), 4);
        assert_eq!(DataType::UnsignedInt.byte_size(), 4);
    }

    #[test]
    fn gl_enum_lookup_is_consistent() {
        for ty in ALL {
            assert_eq!(DataType::from_gl(ty.as_gl()), Some(ty));
        }
        assert_eq!(DataType::from_gl(0x8B50), None);
    }

    #[test]
    fn only_unsigned_integers_index() {
        let index_types: Vec<_> = ALL.into_iter().filter(|t| t.is_index_type()).collect();
        assert_eq!(
            index_types,
            [DataType::UnsignedByte, DataType::UnsignedShort, DataType::UnsignedInt]
        );
    }

    #[test]
    fn default_usage_is_dynamic() {
        assert_eq!(BufferUsage::default(), BufferUsage::DynamicDraw);
        assert_eq!(BufferUsage::default().as_gl(), 0x88E8);
    }
}
