//! `GraphicsContext` for `glow::Context`.
//!
//! `glow` marks every GL entry point `unsafe` because it cannot prove a
//! context is current on the calling thread. Implementing the safe trait
//! moves that obligation to whoever constructed the `glow::Context`: it must
//! stay current on the thread that uses it for as long as it is used here.

use ::glow::HasContext;

use super::{BufferTarget, BufferUsage, DataType, GraphicsContext};

impl GraphicsContext for ::glow::Context {
    type Buffer = ::glow::Buffer;
    type VertexArray = ::glow::VertexArray;

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<&Self::Buffer>) {
        unsafe { HasContext::bind_buffer(self, target.as_gl(), buffer.copied()) }
    }

    fn bind_buffer_base(&self, target: BufferTarget, index: u32, buffer: Option<&Self::Buffer>) {
        unsafe { HasContext::bind_buffer_base(self, target.as_gl(), index, buffer.copied()) }
    }

    fn buffer_data_size(&self, target: BufferTarget, size: i32, usage: BufferUsage) {
        unsafe { HasContext::buffer_data_size(self, target.as_gl(), size, usage.as_gl()) }
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        unsafe { HasContext::buffer_data_u8_slice(self, target.as_gl(), data, usage.as_gl()) }
    }

    fn buffer_sub_data(&self, target: BufferTarget, offset: i32, data: &[u8]) {
        unsafe { HasContext::buffer_sub_data_u8_slice(self, target.as_gl(), offset, data) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<&Self::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array.copied()) }
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: DataType,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self,
                index,
                size,
                data_type.as_gl(),
                normalized,
                stride,
                offset,
            )
        }
    }

    fn vertex_attrib_pointer_i32(
        &self,
        index: u32,
        size: i32,
        data_type: DataType,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            HasContext::vertex_attrib_pointer_i32(self, index, size, data_type.as_gl(), stride, offset)
        }
    }

    fn vertex_attrib_divisor(&self, index: u32, divisor: u32) {
        unsafe { HasContext::vertex_attrib_divisor(self, index, divisor) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }
}
