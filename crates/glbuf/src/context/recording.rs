//! Headless `GraphicsContext` that records calls instead of issuing them.
//!
//! Besides the call log it keeps just enough state to make uploads
//! observable: which buffer is bound to each target, and the bytes stored in
//! each buffer.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{BufferTarget, BufferUsage, DataType, GraphicsContext};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BufferId(pub u32);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VertexArrayId(pub u32);

/// One recorded context call.
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateBuffer(BufferId),
    DeleteBuffer(BufferId),
    BindBuffer {
        target: BufferTarget,
        buffer: Option<BufferId>,
    },
    BindBufferBase {
        target: BufferTarget,
        index: u32,
        buffer: Option<BufferId>,
    },
    BufferDataSize {
        target: BufferTarget,
        size: i32,
        usage: BufferUsage,
    },
    BufferData {
        target: BufferTarget,
        len: usize,
        usage: BufferUsage,
    },
    BufferSubData {
        target: BufferTarget,
        offset: i32,
        len: usize,
    },
    CreateVertexArray(VertexArrayId),
    DeleteVertexArray(VertexArrayId),
    BindVertexArray(Option<VertexArrayId>),
    VertexAttribPointerF32 {
        index: u32,
        size: i32,
        data_type: DataType,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    VertexAttribPointerI32 {
        index: u32,
        size: i32,
        data_type: DataType,
        stride: i32,
        offset: i32,
    },
    VertexAttribDivisor {
        index: u32,
        divisor: u32,
    },
    EnableVertexAttribArray(u32),
}

#[derive(Debug, Default)]
pub struct RecordingContext {
    calls: RefCell<Vec<GlCall>>,
    next_id: Cell<u32>,
    fail_creates: Cell<bool>,
    bound: RefCell<HashMap<BufferTarget, BufferId>>,
    contents: RefCell<HashMap<BufferId, Vec<u8>>>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call recorded so far.
    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|&c| pred(c)).count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Makes subsequent handle creation fail, as a lost context would.
    pub fn set_fail_creates(&self, fail: bool) {
        self.fail_creates.set(fail);
    }

    /// Bytes currently stored in `buffer`, or `None` if it was never allocated.
    pub fn buffer_contents(&self, buffer: BufferId) -> Option<Vec<u8>> {
        self.contents.borrow().get(&buffer).cloned()
    }

    pub fn bound_buffer(&self, target: BufferTarget) -> Option<BufferId> {
        self.bound.borrow().get(&target).copied()
    }

    fn record(&self, call: GlCall) {
        log::trace!("gl: {call:?}");
        self.calls.borrow_mut().push(call);
    }

    fn next_id(&self) -> Result<u32, String> {
        if self.fail_creates.get() {
            return Err("context lost".into());
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        Ok(id)
    }

    fn set_bound(&self, target: BufferTarget, buffer: Option<BufferId>) {
        let mut bound = self.bound.borrow_mut();
        match buffer {
            Some(b) => bound.insert(target, b),
            None => bound.remove(&target),
        };
    }

    fn with_bound_contents(&self, target: BufferTarget, f: impl FnOnce(&mut Vec<u8>)) {
        let Some(buffer) = self.bound_buffer(target) else {
            log::warn!("gl: no buffer bound to {target:?}");
            return;
        };
        f(self.contents.borrow_mut().entry(buffer).or_default());
    }
}

impl GraphicsContext for RecordingContext {
    type Buffer = BufferId;
    type VertexArray = VertexArrayId;

    fn create_buffer(&self) -> Result<BufferId, String> {
        let id = BufferId(self.next_id()?);
        self.record(GlCall::CreateBuffer(id));
        Ok(id)
    }

    fn delete_buffer(&self, buffer: BufferId) {
        self.record(GlCall::DeleteBuffer(buffer));
        self.contents.borrow_mut().remove(&buffer);
        self.bound.borrow_mut().retain(|_, b| *b != buffer);
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<&BufferId>) {
        let buffer = buffer.copied();
        self.record(GlCall::BindBuffer { target, buffer });
        self.set_bound(target, buffer);
    }

    fn bind_buffer_base(&self, target: BufferTarget, index: u32, buffer: Option<&BufferId>) {
        let buffer = buffer.copied();
        self.record(GlCall::BindBufferBase { target, index, buffer });
        // Indexed binds also replace the generic binding point.
        self.set_bound(target, buffer);
    }

    fn buffer_data_size(&self, target: BufferTarget, size: i32, usage: BufferUsage) {
        self.record(GlCall::BufferDataSize { target, size, usage });
        let len = usize::try_from(size).unwrap_or(0);
        self.with_bound_contents(target, |bytes| *bytes = vec![0; len]);
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        self.record(GlCall::BufferData {
            target,
            len: data.len(),
            usage,
        });
        self.with_bound_contents(target, |bytes| *bytes = data.to_vec());
    }

    fn buffer_sub_data(&self, target: BufferTarget, offset: i32, data: &[u8]) {
        self.record(GlCall::BufferSubData {
            target,
            offset,
            len: data.len(),
        });
        self.with_bound_contents(target, |bytes| {
            let start = usize::try_from(offset).unwrap_or(usize::MAX);
            match start.checked_add(data.len()) {
                Some(end) if end <= bytes.len() => bytes[start..end].copy_from_slice(data),
                _ => log::warn!("gl: buffer_sub_data out of range ({offset} + {})", data.len()),
            }
        });
    }

    fn create_vertex_array(&self) -> Result<VertexArrayId, String> {
        let id = VertexArrayId(self.next_id()?);
        self.record(GlCall::CreateVertexArray(id));
        Ok(id)
    }

    fn delete_vertex_array(&self, vertex_array: VertexArrayId) {
        self.record(GlCall::DeleteVertexArray(vertex_array));
    }

    fn bind_vertex_array(&self, vertex_array: Option<&VertexArrayId>) {
        self.record(GlCall::BindVertexArray(vertex_array.copied()));
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
        self.record(GlCall::VertexAttribPointerF32 {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    fn vertex_attrib_pointer_i32(
        &self,
        index: u32,
        size: i32,
        data_type: DataType,
        stride: i32,
        offset: i32,
    ) {
        self.record(GlCall::VertexAttribPointerI32 {
            index,
            size,
            data_type,
            stride,
            offset,
        });
    }

    fn vertex_attrib_divisor(&self, index: u32, divisor: u32) {
        self.record(GlCall::VertexAttribDivisor { index, divisor });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique() {
        let gl = RecordingContext::new();
        let a = gl.create_buffer().unwrap();
        let b = gl.create_buffer().unwrap();
        let v = gl.create_vertex_array().unwrap();
        assert_ne!(a, b);
        assert_ne!(a.0, v.0);
    }

    #[test]
    fn failing_creates_report_error() {
        let gl = RecordingContext::new();
        gl.set_fail_creates(true);
        assert!(gl.create_buffer().is_err());
        assert!(gl.create_vertex_array().is_err());
        assert!(gl.calls().is_empty());
    }

    #[test]
    fn sub_data_writes_into_bound_buffer() {
        let gl = RecordingContext::new();
        let buf = gl.create_buffer().unwrap();
        gl.bind_buffer(BufferTarget::Array, Some(&buf));
        gl.buffer_data_size(BufferTarget::Array, 4, BufferUsage::StaticDraw);
        gl.buffer_sub_data(BufferTarget::Array, 1, &[7, 8]);
        assert_eq!(gl.buffer_contents(buf), Some(vec![0, 7, 8, 0]));
    }

    #[test]
    fn sub_data_out_of_range_is_ignored() {
        let gl = RecordingContext::new();
        let buf = gl.create_buffer().unwrap();
        gl.bind_buffer(BufferTarget::Array, Some(&buf));
        gl.buffer_data(BufferTarget::Array, &[1, 2], BufferUsage::StaticDraw);
        gl.buffer_sub_data(BufferTarget::Array, 1, &[9, 9]);
        assert_eq!(gl.buffer_contents(buf), Some(vec![1, 2]));
    }

    #[test]
    fn unbinding_clears_target() {
        let gl = RecordingContext::new();
        let buf = gl.create_buffer().unwrap();
        gl.bind_buffer_base(BufferTarget::Uniform, 0, Some(&buf));
        assert_eq!(gl.bound_buffer(BufferTarget::Uniform), Some(buf));
        gl.bind_buffer_base(BufferTarget::Uniform, 0, None);
        assert_eq!(gl.bound_buffer(BufferTarget::Uniform), None);
    }
}
