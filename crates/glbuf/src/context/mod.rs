//! The seam between this crate and a live graphics context.
//!
//! This module is responsible for:
//! - the `GraphicsContext` trait, the only way the crate touches the device
//! - typed wrappers for the GL enums the crate passes through
//! - `AppState`, the tracked "currently bound vertex array" slot
//!
//! `recording::RecordingContext` is a headless implementation that logs calls
//! instead of issuing them. With the `glow` feature, `glow::Context`
//! implements the trait directly.

mod state;
mod types;

#[cfg(feature = "glow")]
mod glow;
pub mod recording;

use std::fmt::Debug;

pub use state::AppState;
pub use types::{BufferTarget, BufferUsage, DataType};

/// Minimal subset of the WebGL2 / GLES3 API needed for uniform buffers and
/// vertex arrays.
///
/// Methods take `&self`: a GL context is a state machine behind a shared
/// handle, and callers are expected to issue commands from a single thread.
/// Handle creation may fail; other calls report errors through the context's
/// own error mechanism and are not checked here.
pub trait GraphicsContext {
    type Buffer: Clone + PartialEq + Debug;
    type VertexArray: Clone + PartialEq + Debug;

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<&Self::Buffer>);
    fn bind_buffer_base(&self, target: BufferTarget, index: u32, buffer: Option<&Self::Buffer>);

    /// Allocates `size` bytes of uninitialized storage for the buffer bound to `target`.
    fn buffer_data_size(&self, target: BufferTarget, size: i32, usage: BufferUsage);
    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage);
    fn buffer_sub_data(&self, target: BufferTarget, offset: i32, data: &[u8]);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    fn bind_vertex_array(&self, vertex_array: Option<&Self::VertexArray>);

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: DataType,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn vertex_attrib_pointer_i32(
        &self,
        index: u32,
        size: i32,
        data_type: DataType,
        stride: i32,
        offset: i32,
    );
    fn vertex_attrib_divisor(&self, index: u32, divisor: u32);
    fn enable_vertex_attrib_array(&self, index: u32);
}
