use thiserror::Error;

use crate::context::DataType;
use crate::uniform::UniformType;
use crate::vertex::Topology;

pub type Result<T> = std::result::Result<T, GlError>;

/// Errors reported by uniform buffer and vertex array operations.
///
/// Device-side failures are not reinterpreted; they surface as `Device` with
/// the message the context produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlError {
    #[error("unsupported type {ty} for uniform buffer field {index}")]
    UnsupportedUniformType { index: usize, ty: UniformType },

    #[error("uniform field index {index} out of range (layout has {len} fields)")]
    InvalidUniformIndex { index: usize, len: usize },

    #[error("uniform field {index} expects {expected} components, got {actual}")]
    UniformLengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("vertex data of {len} components is not a multiple of {components_per_item}")]
    VertexDataMisaligned {
        len: usize,
        components_per_item: usize,
    },

    #[error("{data_type} components are {expected} bytes, data elements are {actual} bytes")]
    ComponentSizeMismatch {
        data_type: DataType,
        expected: usize,
        actual: usize,
    },

    #[error("{0} is not a valid index type")]
    InvalidIndexType(DataType),

    #[error("{topology:?} needs {expected} indices per item, index buffer holds {actual}")]
    TopologyMismatch {
        topology: Topology,
        expected: u32,
        actual: u32,
    },

    #[error("index buffers cannot feed vertex attributes")]
    IndexBufferAsAttribute,

    #[error("{0} overflows the range the graphics context accepts")]
    Overflow(&'static str),

    #[error("vertex array has been deleted")]
    VertexArrayDeleted,

    #[error("buffer has been deleted")]
    BufferDeleted,

    #[error("graphics context error: {0}")]
    Device(String),
}
