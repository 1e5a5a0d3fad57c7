//! Uniform buffers with std140-style packing.
//!
//! Convention:
//! - offsets and sizes are in 4-byte float units, not bytes
//! - only float, vec2, vec4 and mat4 fields are supported

mod buffer;
mod layout;

pub use buffer::{UniformBuffer, UniformValue};
pub use layout::{UniformField, UniformLayout, UniformType};
