use crate::context::DataType;

/// Shape of one attribute as stored in a buffer.
///
/// Matrix attributes occupy `num_columns` consecutive attribute locations,
/// one column each. Columns are interleaved per item.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeFormat {
    pub data_type: DataType,
    /// Components per column (1..=4).
    pub item_size: u32,
    pub num_columns: u32,
}

impl AttributeFormat {
    /// A scalar or vector attribute occupying one location.
    pub const fn vector(data_type: DataType, item_size: u32) -> Self {
        Self {
            data_type,
            item_size,
            num_columns: 1,
        }
    }

    /// A `columns` x `rows` matrix attribute, stored column-major.
    pub const fn matrix(data_type: DataType, columns: u32, rows: u32) -> Self {
        Self {
            data_type,
            item_size: rows,
            num_columns: columns,
        }
    }

    /// Components making up one item (all columns).
    pub const fn components_per_item(&self) -> u32 {
        self.item_size * self.num_columns
    }

    /// Bytes between consecutive items.
    pub const fn stride(&self) -> u32 {
        self.num_columns * self.item_size * self.data_type.byte_size()
    }

    /// Byte offset of `column` within an item.
    pub const fn column_offset(&self, column: u32) -> u32 {
        column * self.item_size * self.data_type.byte_size()
    }
}

/// Primitive topology used to turn a primitive count into an index count.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Topology {
    Points,
    Lines,
    #[default]
    Triangles,
}

impl Topology {
    pub const fn indices_per_primitive(self) -> u32 {
        match self {
            Topology::Points => 1,
            Topology::Lines => 2,
            Topology::Triangles => 3,
        }
    }

    pub const fn as_gl(self) -> u32 {
        match self {
            Topology::Points => 0x0000,
            Topology::Lines => 0x0001,
            Topology::Triangles => 0x0004,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_float_stride() {
        let f = AttributeFormat::vector(DataType::Float, 3);
        assert_eq!(f.stride(), 12);
        assert_eq!(f.column_offset(0), 0);
        assert_eq!(f.components_per_item(), 3);
    }

    #[test]
    fn mat4_columns_are_sixteen_bytes_apart() {
        let f = AttributeFormat::matrix(DataType::Float, 4, 4);
        assert_eq!(f.stride(), 64);
        let offsets: Vec<u32> = (0..4).map(|c| f.column_offset(c)).collect();
        assert_eq!(offsets, [0, 16, 32, 48]);
    }

    #[test]
    fn normalized_bytes_use_one_byte_components() {
        let f = AttributeFormat::vector(DataType::UnsignedByte, 4);
        assert_eq!(f.stride(), 4);
    }

    #[test]
    fn mat3x2_uses_rows_as_item_size() {
        let f = AttributeFormat::matrix(DataType::HalfFloat, 3, 2);
        assert_eq!(f.item_size, 2);
        assert_eq!(f.num_columns, 3);
        assert_eq!(f.stride(), 12);
        assert_eq!(f.column_offset(2), 8);
    }

    #[test]
    fn topology_index_counts() {
        assert_eq!(Topology::default(), Topology::Triangles);
        assert_eq!(Topology::Triangles.indices_per_primitive(), 3);
        assert_eq!(Topology::Lines.indices_per_primitive(), 2);
        assert_eq!(Topology::Points.indices_per_primitive(), 1);
    }
}
