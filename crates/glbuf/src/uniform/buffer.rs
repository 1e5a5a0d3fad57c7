use crate::context::{BufferTarget, BufferUsage, GraphicsContext};
use crate::error::{GlError, Result};

use super::{UniformLayout, UniformType};

/// Value written into one uniform field.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue<'a> {
    Scalar(f32),
    /// Components in field order; column-major for matrices.
    Components(&'a [f32]),
}

impl From<f32> for UniformValue<'_> {
    fn from(value: f32) -> Self {
        UniformValue::Scalar(value)
    }
}

impl<'a> From<&'a [f32]> for UniformValue<'a> {
    fn from(value: &'a [f32]) -> Self {
        UniformValue::Components(value)
    }
}

impl<'a, const N: usize> From<&'a [f32; N]> for UniformValue<'a> {
    fn from(value: &'a [f32; N]) -> Self {
        UniformValue::Components(value)
    }
}

/// A uniform block backed by one device buffer and a CPU shadow copy.
///
/// `set` only touches the shadow copy; `update` uploads all of it.
pub struct UniformBuffer<C: GraphicsContext> {
    buffer: Option<C::Buffer>,
    layout: UniformLayout,
    data: Vec<f32>,
    usage: BufferUsage,
}

impl<C: GraphicsContext> UniformBuffer<C> {
    /// Packs `types` and allocates a zeroed device buffer of the packed size.
    ///
    /// Layout errors are reported before any device call is made.
    pub fn new(gl: &C, types: &[UniformType], usage: BufferUsage) -> Result<Self> {
        let layout = UniformLayout::new(types)?;
        Self::with_layout(gl, layout, usage)
    }

    pub fn with_layout(gl: &C, layout: UniformLayout, usage: BufferUsage) -> Result<Self> {
        let byte_len = block_byte_len(layout.byte_size())?;
        let buffer = gl.create_buffer().map_err(GlError::Device)?;

        gl.bind_buffer_base(BufferTarget::Uniform, 0, Some(&buffer));
        gl.buffer_data_size(BufferTarget::Uniform, byte_len, usage);
        gl.bind_buffer_base(BufferTarget::Uniform, 0, None);

        log::debug!(
            "uniform buffer created: {} fields, {} bytes, {:?}",
            layout.len(),
            layout.byte_size(),
            usage
        );

        Ok(Self {
            buffer: Some(buffer),
            data: vec![0.0; layout.size()],
            layout,
            usage,
        })
    }

    /// Writes `value` into field `index` of the shadow copy.
    ///
    /// The component count must equal the field size (1, 2, 4 or 16).
    pub fn set<'v>(&mut self, index: usize, value: impl Into<UniformValue<'v>>) -> Result<&mut Self> {
        let field = *self.layout.field(index).ok_or(GlError::InvalidUniformIndex {
            index,
            len: self.layout.len(),
        })?;

        let scalar;
        let values = match value.into() {
            UniformValue::Scalar(v) => {
                scalar = [v];
                &scalar[..]
            }
            UniformValue::Components(c) => c,
        };

        if values.len() != field.size {
            return Err(GlError::UniformLengthMismatch {
                index,
                expected: field.size,
                actual: values.len(),
            });
        }

        self.data[field.offset..field.offset + field.size].copy_from_slice(values);
        Ok(self)
    }

    /// Uploads the whole shadow copy, then unbinds binding point 0.
    pub fn update(&self, gl: &C) -> Result<()> {
        let buffer = self.buffer.as_ref().ok_or(GlError::BufferDeleted)?;

        gl.bind_buffer_base(BufferTarget::Uniform, 0, Some(buffer));
        gl.buffer_sub_data(BufferTarget::Uniform, 0, bytemuck::cast_slice(&self.data));
        gl.bind_buffer_base(BufferTarget::Uniform, 0, None);

        log::trace!("uniform buffer uploaded ({} bytes)", self.byte_size());
        Ok(())
    }

    /// Attaches the buffer to uniform block binding point `base`.
    ///
    /// The binding is left in place for subsequent draws.
    pub fn bind(&self, gl: &C, base: u32) -> Result<()> {
        let buffer = self.buffer.as_ref().ok_or(GlError::BufferDeleted)?;
        gl.bind_buffer_base(BufferTarget::Uniform, base, Some(buffer));
        log::trace!("uniform buffer bound to base {base}");
        Ok(())
    }

    /// Releases the device buffer. Safe to call more than once.
    pub fn delete(&mut self, gl: &C) {
        if let Some(buffer) = self.buffer.take() {
            gl.delete_buffer(buffer);
            log::debug!("uniform buffer deleted");
        }
    }

    pub fn layout(&self) -> &UniformLayout {
        &self.layout
    }

    /// Shadow copy, `size()` floats long.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.layout.size()
    }

    pub fn byte_size(&self) -> usize {
        self.layout.byte_size()
    }

    pub fn usage(&self) -> BufferUsage {
        self.usage
    }

    pub fn handle(&self) -> Option<&C::Buffer> {
        self.buffer.as_ref()
    }
}

impl<C: GraphicsContext> std::fmt::Debug for UniformBuffer<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniformBuffer")
            .field("buffer", &self.buffer)
            .field("layout", &self.layout)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

/// Allocation size as `GLsizeiptr`, which WebGL caps at `i32::MAX`.
fn block_byte_len(bytes: usize) -> Result<i32> {
    i32::try_from(bytes).map_err(|_| GlError::Overflow("uniform block size"))
}
