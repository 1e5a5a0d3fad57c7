//! glbuf: uniform buffers and vertex arrays over a WebGL2/GLES3 context.
//!
//! The crate owns two small pieces of bookkeeping on top of raw context calls:
//! - `uniform`: std140-style packing of float/vec2/vec4/mat4 fields into one
//!   uniform block, with a CPU shadow copy that is uploaded on demand
//! - `vertex`: attaching per-vertex and per-instance buffers to a vertex array
//!   and tracking the parameters needed to draw it
//!
//! All device access goes through the `context::GraphicsContext` trait.

pub mod context;
pub mod error;
pub mod logging;
pub mod uniform;
pub mod vertex;

pub use context::{AppState, BufferTarget, BufferUsage, DataType, GraphicsContext};
pub use error::{GlError, Result};
pub use uniform::{UniformBuffer, UniformLayout, UniformType, UniformValue};
pub use vertex::{AttributeFormat, AttributeKind, DrawParams, Topology, VertexArray, VertexBuffer};
