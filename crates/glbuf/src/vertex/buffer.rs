use bytemuck::Pod;

use crate::context::{AppState, BufferTarget, BufferUsage, DataType, GraphicsContext};
use crate::error::{GlError, Result};

use super::{AttributeFormat, Topology};

/// A device buffer plus the metadata needed to bind it as attribute or index data.
pub struct VertexBuffer<C: GraphicsContext> {
    buffer: Option<C::Buffer>,
    target: BufferTarget,
    format: AttributeFormat,
    num_items: u32,
}

impl<C: GraphicsContext> VertexBuffer<C> {
    /// Uploads attribute data to a new `ARRAY_BUFFER`.
    ///
    /// `data` is a flat slice of components whose element size must match
    /// `format.data_type`. The item count is derived from the slice length.
    pub fn new<T: Pod>(
        gl: &C,
        format: AttributeFormat,
        data: &[T],
        usage: BufferUsage,
    ) -> Result<Self> {
        let num_items = item_count(format, data)?;
        let buffer = upload(gl, BufferTarget::Array, data, usage)?;

        log::debug!(
            "vertex buffer created: {num_items} items of {}x{} {}",
            format.num_columns,
            format.item_size,
            format.data_type
        );

        Ok(Self {
            buffer: Some(buffer),
            target: BufferTarget::Array,
            format,
            num_items,
        })
    }

    /// Uploads index data to a new `ELEMENT_ARRAY_BUFFER`.
    ///
    /// Items are primitives: each holds `topology.indices_per_primitive()`
    /// indices. Binding an element buffer changes whichever vertex array is
    /// bound, so any bound vertex array is unbound first.
    pub fn index<T: Pod>(
        gl: &C,
        state: &mut AppState<C>,
        data_type: DataType,
        topology: Topology,
        data: &[T],
        usage: BufferUsage,
    ) -> Result<Self> {
        if !data_type.is_index_type() {
            return Err(GlError::InvalidIndexType(data_type));
        }

        let format = AttributeFormat::vector(data_type, topology.indices_per_primitive());
        let num_items = item_count(format, data)?;

        if state.vertex_array().is_some() {
            gl.bind_vertex_array(None);
            state.invalidate();
        }
        let buffer = upload(gl, BufferTarget::ElementArray, data, usage)?;

        log::debug!("index buffer created: {num_items} {topology:?} of {data_type}");

        Ok(Self {
            buffer: Some(buffer),
            target: BufferTarget::ElementArray,
            format,
            num_items,
        })
    }

    /// Wraps a buffer that was created and filled elsewhere.
    pub fn from_raw(
        buffer: C::Buffer,
        target: BufferTarget,
        format: AttributeFormat,
        num_items: u32,
    ) -> Self {
        Self {
            buffer: Some(buffer),
            target,
            format,
            num_items,
        }
    }

    /// Releases the device buffer. Safe to call more than once.
    pub fn delete(&mut self, gl: &C) {
        if let Some(buffer) = self.buffer.take() {
            gl.delete_buffer(buffer);
        }
    }

    pub fn handle(&self) -> Option<&C::Buffer> {
        self.buffer.as_ref()
    }

    pub fn target(&self) -> BufferTarget {
        self.target
    }

    pub fn format(&self) -> AttributeFormat {
        self.format
    }

    pub fn data_type(&self) -> DataType {
        self.format.data_type
    }

    pub fn num_items(&self) -> u32 {
        self.num_items
    }

    pub fn is_index_buffer(&self) -> bool {
        self.target == BufferTarget::ElementArray
    }
}

impl<C: GraphicsContext> std::fmt::Debug for VertexBuffer<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexBuffer")
            .field("buffer", &self.buffer)
            .field("target", &self.target)
            .field("format", &self.format)
            .field("num_items", &self.num_items)
            .finish()
    }
}

fn item_count<T: Pod>(format: AttributeFormat, data: &[T]) -> Result<u32> {
    let expected = format.data_type.byte_size() as usize;
    let actual = std::mem::size_of::<T>();
    if expected != actual {
        return Err(GlError::ComponentSizeMismatch {
            data_type: format.data_type,
            expected,
            actual,
        });
    }

    let per_item = format.components_per_item() as usize;
    if per_item == 0 || data.len() % per_item != 0 {
        return Err(GlError::VertexDataMisaligned {
            len: data.len(),
            components_per_item: per_item,
        });
    }

    u32::try_from(data.len() / per_item).map_err(|_| GlError::Overflow("vertex item count"))
}

fn upload<C: GraphicsContext, T: Pod>(
    gl: &C,
    target: BufferTarget,
    data: &[T],
    usage: BufferUsage,
) -> Result<C::Buffer> {
    let buffer = gl.create_buffer().map_err(GlError::Device)?;
    gl.bind_buffer(target, Some(&buffer));
    gl.buffer_data(target, bytemuck::cast_slice(data), usage);
    gl.bind_buffer(target, None);
    Ok(buffer)
}
