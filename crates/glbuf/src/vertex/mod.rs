//! Vertex buffers and vertex array objects.
//!
//! A `VertexBuffer` describes its data explicitly (component type, components
//! per column, column count, item count); `VertexArray` turns those
//! descriptions into attribute pointer state and tracks what a draw call needs.

mod array;
mod buffer;
mod format;

pub use array::{AttributeKind, DrawParams, VertexArray};
pub use buffer::VertexBuffer;
pub use format::{AttributeFormat, Topology};
