use crate::context::{AppState, DataType, GraphicsContext};
use crate::error::{GlError, Result};

use super::{Topology, VertexBuffer};

/// How an attached buffer feeds its attribute locations.
///
/// `integer` refers to the attribute type in the shader, not to the buffer
/// data. `normalized` maps integer data to [0, 1] / [-1, 1] for float
/// attributes and is ignored when `integer` is set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct AttributeKind {
    pub instanced: bool,
    pub integer: bool,
    pub normalized: bool,
}

impl AttributeKind {
    pub const VERTEX: Self = Self { instanced: false, integer: false, normalized: false };
    pub const INSTANCE: Self = Self { instanced: true, integer: false, normalized: false };
    pub const VERTEX_INTEGER: Self = Self { instanced: false, integer: true, normalized: false };
    pub const INSTANCE_INTEGER: Self = Self { instanced: true, integer: true, normalized: false };
    pub const VERTEX_NORMALIZED: Self = Self { instanced: false, integer: false, normalized: true };
    pub const INSTANCE_NORMALIZED: Self = Self { instanced: true, integer: false, normalized: true };
}

/// Everything a draw call needs from a vertex array.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawParams {
    pub topology: Topology,
    /// Vertex count for array draws, index count for indexed draws.
    pub num_elements: u32,
    /// Set for indexed draws.
    pub index_type: Option<DataType>,
    /// Set for instanced draws.
    pub num_instances: Option<u32>,
}

/// A vertex array object and its draw parameters.
///
/// Every operation takes the shared `AppState` so the tracked binding stays
/// in sync with the device.
pub struct VertexArray<C: GraphicsContext> {
    vertex_array: Option<C::VertexArray>,
    num_elements: u32,
    index_type: Option<DataType>,
    instanced: bool,
    num_instances: u32,
    topology: Topology,
}

impl<C: GraphicsContext> VertexArray<C> {
    pub fn new(gl: &C) -> Result<Self> {
        let vertex_array = gl.create_vertex_array().map_err(GlError::Device)?;
        log::debug!("vertex array created: {vertex_array:?}");

        Ok(Self {
            vertex_array: Some(vertex_array),
            num_elements: 0,
            index_type: None,
            instanced: false,
            num_instances: 0,
            topology: Topology::default(),
        })
    }

    pub fn vertex_attribute_buffer(
        &mut self,
        gl: &C,
        state: &mut AppState<C>,
        location: u32,
        buffer: &VertexBuffer<C>,
    ) -> Result<&mut Self> {
        self.attribute_buffer(gl, state, location, buffer, AttributeKind::VERTEX)
    }

    pub fn instance_attribute_buffer(
        &mut self,
        gl: &C,
        state: &mut AppState<C>,
        location: u32,
        buffer: &VertexBuffer<C>,
    ) -> Result<&mut Self> {
        self.attribute_buffer(gl, state, location, buffer, AttributeKind::INSTANCE)
    }

    pub fn vertex_integer_attribute_buffer(
        &mut self,
        gl: &C,
        state: &mut AppState<C>,
        location: u32,
        buffer: &VertexBuffer<C>,
    ) -> Result<&mut Self> {
        self.attribute_buffer(gl, state, location, buffer, AttributeKind::VERTEX_INTEGER)
    }

    pub fn instance_integer_attribute_buffer(
        &mut self,
        gl: &C,
        state: &mut AppState<C>,
        location: u32,
        buffer: &VertexBuffer<C>,
    ) -> Result<&mut Self> {
        self.attribute_buffer(gl, state, location, buffer, AttributeKind::INSTANCE_INTEGER)
    }

    pub fn vertex_normalized_attribute_buffer(
        &mut self,
        gl: &C,
        state: &mut AppState<C>,
        location: u32,
        buffer: &VertexBuffer<C>,
    ) -> Result<&mut Self> {
        self.attribute_buffer(gl, state, location, buffer, AttributeKind::VERTEX_NORMALIZED)
    }

    pub fn instance_normalized_attribute_buffer(
        &mut self,
        gl: &C,
        state: &mut AppState<C>,
        location: u32,
        buffer: &VertexBuffer<C>,
    ) -> Result<&mut Self> {
        self.attribute_buffer(gl, state, location, buffer, AttributeKind::INSTANCE_NORMALIZED)
    }

    /// Points locations `location..location + num_columns` at `buffer`.
    ///
    /// The first per-vertex buffer attached fixes the element count; each
    /// per-instance buffer replaces the instance count. Leaves no vertex
    /// array bound. Index buffers are rejected.
    pub fn attribute_buffer(
        &mut self,
        gl: &C,
        state: &mut AppState<C>,
        location: u32,
        buffer: &VertexBuffer<C>,
        kind: AttributeKind,
    ) -> Result<&mut Self> {
        if buffer.is_index_buffer() {
            return Err(GlError::IndexBufferAsAttribute);
        }
        let vertex_array = self.vertex_array.as_ref().ok_or(GlError::VertexArrayDeleted)?;
        let handle = buffer.handle().ok_or(GlError::BufferDeleted)?;
        let target = buffer.target();
        let format = buffer.format();
        let stride = format.stride() as i32;

        location
            .checked_add(format.num_columns.saturating_sub(1))
            .ok_or(GlError::Overflow("attribute location"))?;

        gl.bind_vertex_array(Some(vertex_array));
        gl.bind_buffer(target, Some(handle));

        for column in 0..format.num_columns {
            let index = location + column;
            let offset = format.column_offset(column) as i32;
            let size = format.item_size as i32;

            if kind.integer {
                gl.vertex_attrib_pointer_i32(index, size, format.data_type, stride, offset);
            } else {
                gl.vertex_attrib_pointer_f32(
                    index,
                    size,
                    format.data_type,
                    kind.normalized,
                    stride,
                    offset,
                );
            }

            if kind.instanced {
                gl.vertex_attrib_divisor(index, 1);
            }

            gl.enable_vertex_attrib_array(index);
        }

        gl.bind_vertex_array(None);
        gl.bind_buffer(target, None);
        state.invalidate();

        self.instanced |= kind.instanced;
        if kind.instanced {
            self.num_instances = buffer.num_items();
        } else if self.num_elements == 0 {
            self.num_elements = buffer.num_items();
        }

        log::trace!(
            "attribute buffer at location {location}: {} column(s), {kind:?}",
            format.num_columns
        );
        Ok(self)
    }

    /// Attaches an index buffer, switching the array to indexed drawing.
    ///
    /// `topology` must match the indices per item the buffer was built with.
    /// The element count becomes the buffer's total index count regardless of
    /// earlier attribute attachments.
    pub fn index_buffer(
        &mut self,
        gl: &C,
        state: &mut AppState<C>,
        buffer: &VertexBuffer<C>,
        topology: Topology,
    ) -> Result<&mut Self> {
        let data_type = buffer.data_type();
        if !buffer.is_index_buffer() || !data_type.is_index_type() {
            return Err(GlError::InvalidIndexType(data_type));
        }

        let per_item = buffer.format().item_size;
        if per_item != topology.indices_per_primitive() {
            return Err(GlError::TopologyMismatch {
                topology,
                expected: topology.indices_per_primitive(),
                actual: per_item,
            });
        }
        let num_elements = buffer
            .num_items()
            .checked_mul(per_item)
            .ok_or(GlError::Overflow("index count"))?;

        let vertex_array = self.vertex_array.as_ref().ok_or(GlError::VertexArrayDeleted)?;
        let handle = buffer.handle().ok_or(GlError::BufferDeleted)?;

        gl.bind_vertex_array(Some(vertex_array));
        gl.bind_buffer(buffer.target(), Some(handle));

        // Unbind the vertex array first so it keeps the element buffer binding.
        gl.bind_vertex_array(None);
        gl.bind_buffer(buffer.target(), None);
        state.invalidate();

        self.num_elements = num_elements;
        self.index_type = Some(data_type);
        self.topology = topology;

        log::trace!("index buffer attached: {} indices of {data_type}", self.num_elements);
        Ok(self)
    }

    /// Sets the topology used for non-indexed draws.
    pub fn set_topology(&mut self, topology: Topology) -> &mut Self {
        self.topology = topology;
        self
    }

    /// Makes this the active vertex array, skipping the device call if
    /// `state` says it already is.
    pub fn bind(&self, gl: &C, state: &mut AppState<C>) -> Result<()> {
        let vertex_array = self.vertex_array.as_ref().ok_or(GlError::VertexArrayDeleted)?;
        if state.is_vertex_array_bound(vertex_array) {
            return Ok(());
        }

        gl.bind_vertex_array(Some(vertex_array));
        state.set_vertex_array(Some(vertex_array.clone()));
        Ok(())
    }

    /// Deletes the device vertex array and leaves none bound.
    ///
    /// Safe to call repeatedly; later calls only unbind.
    pub fn delete(&mut self, gl: &C, state: &mut AppState<C>) {
        if let Some(vertex_array) = self.vertex_array.take() {
            gl.delete_vertex_array(vertex_array);
            log::debug!("vertex array deleted");
        }
        gl.bind_vertex_array(None);
        state.invalidate();
    }

    pub fn draw_params(&self) -> DrawParams {
        DrawParams {
            topology: self.topology,
            num_elements: self.num_elements,
            index_type: self.index_type,
            num_instances: self.instanced.then_some(self.num_instances),
        }
    }

    pub fn handle(&self) -> Option<&C::VertexArray> {
        self.vertex_array.as_ref()
    }

    pub fn num_elements(&self) -> u32 {
        self.num_elements
    }

    pub fn num_instances(&self) -> u32 {
        self.num_instances
    }

    pub fn index_type(&self) -> Option<DataType> {
        self.index_type
    }

    pub fn is_indexed(&self) -> bool {
        self.index_type.is_some()
    }

    pub fn is_instanced(&self) -> bool {
        self.instanced
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }
}

impl<C: GraphicsContext> std::fmt::Debug for VertexArray<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexArray")
            .field("vertex_array", &self.vertex_array)
            .field("draw", &self.draw_params())
            .finish()
    }
}
