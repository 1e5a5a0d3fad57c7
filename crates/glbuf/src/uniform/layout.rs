use std::fmt;

use crate::error::{GlError, Result};

/// Field type tag of a uniform block member.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UniformType {
    Float,
    Vec2,
    Vec4,
    Mat4,
    /// Any other GL uniform type enum; rejected by `UniformLayout::new`.
    Other(u32),
}

impl UniformType {
    pub const fn from_gl(value: u32) -> Self {
        match value {
            0x1406 => UniformType::Float,
            0x8B50 => UniformType::Vec2,
            0x8B52 => UniformType::Vec4,
            0x8B5C => UniformType::Mat4,
            other => UniformType::Other(other),
        }
    }

    pub const fn as_gl(self) -> u32 {
        match self {
            UniformType::Float => 0x1406,
            UniformType::Vec2 => 0x8B50,
            UniformType::Vec4 => 0x8B52,
            UniformType::Mat4 => 0x8B5C,
            UniformType::Other(value) => value,
        }
    }

    /// `(alignment, size)` in floats, or `None` for unsupported types.
    const fn packing(self) -> Option<(usize, usize)> {
        match self {
            UniformType::Float => Some((1, 1)),
            UniformType::Vec2 => Some((2, 2)),
            UniformType::Vec4 => Some((4, 4)),
            UniformType::Mat4 => Some((4, 16)),
            UniformType::Other(_) => None,
        }
    }
}

impl fmt::Display for UniformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniformType::Float => f.write_str("float"),
            UniformType::Vec2 => f.write_str("vec2"),
            UniformType::Vec4 => f.write_str("vec4"),
            UniformType::Mat4 => f.write_str("mat4"),
            UniformType::Other(value) => write!(f, "0x{value:04X}"),
        }
    }
}

/// Placement of one field inside the block.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UniformField {
    pub ty: UniformType,
    /// Offset in floats from the start of the block.
    pub offset: usize,
    /// Number of floats the field occupies.
    pub size: usize,
}

/// Packed layout of a uniform block.
///
/// Each field starts at the first offset at or after the running cursor that
/// is a multiple of its alignment (1 for float, 2 for vec2, 4 for vec4/mat4).
/// The total is padded to a multiple of 4 floats.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UniformLayout {
    fields: Vec<UniformField>,
    size: usize,
}

impl UniformLayout {
    /// Packs `types` in order.
    ///
    /// Fails on the first unsupported type; no partial layout is produced.
    pub fn new(types: &[UniformType]) -> Result<Self> {
        let mut fields = Vec::with_capacity(types.len());
        let mut size: usize = 0;

        for (index, &ty) in types.iter().enumerate() {
            let Some((align, field_size)) = ty.packing() else {
                log::warn!("uniform layout rejected: field {index} has unsupported type {ty}");
                return Err(GlError::UnsupportedUniformType { index, ty });
            };

            size = size.next_multiple_of(align);
            fields.push(UniformField {
                ty,
                offset: size,
                size: field_size,
            });
            size += field_size;
        }

        Ok(Self {
            fields,
            size: size.next_multiple_of(4),
        })
    }

    pub fn fields(&self) -> &[UniformField] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&UniformField> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total size in floats (always a multiple of 4).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn byte_size(&self) -> usize {
        self.size * std::mem::size_of::<f32>()
    }
}

#[cfg(test)]
mod tests {
    use super::UniformType::*;
    use super::*;

    fn offsets(types: &[UniformType]) -> (Vec<usize>, usize) {
        let layout = UniformLayout::new(types).unwrap();
        (layout.fields().iter().map(|f| f.offset).collect(), layout.size())
    }

    // ── packing ───────────────────────────────────────────────────────────

    #[test]
    fn float_vec2_vec4() {
        assert_eq!(offsets(&[Float, Vec2, Vec4]), (vec![0, 2, 4], 8));
    }

    #[test]
    fn float_float_vec4() {
        assert_eq!(offsets(&[Float, Float, Vec4]), (vec![0, 1, 4], 8));
    }

    #[test]
    fn mat4_then_float_pads_total() {
        assert_eq!(offsets(&[Mat4, Float]), (vec![0, 16], 20));
    }

    #[test]
    fn vec2_after_odd_cursor_aligns_to_two() {
        assert_eq!(offsets(&[Float, Float, Float, Vec2]), (vec![0, 1, 2, 4], 8));
    }

    #[test]
    fn consecutive_scalars_pack_tightly() {
        assert_eq!(offsets(&[Float, Float, Float, Float, Float]), (vec![0, 1, 2, 3, 4], 8));
    }

    #[test]
    fn mat4_after_scalar_aligns_to_four() {
        assert_eq!(offsets(&[Float, Mat4, Vec2]), (vec![0, 4, 20], 24));
    }

    #[test]
    fn empty_layout_is_zero_sized() {
        let layout = UniformLayout::new(&[]).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.size(), 0);
    }

    #[test]
    fn every_offset_honors_alignment_and_total_is_padded() {
        let types = [Vec2, Float, Mat4, Float, Vec2, Vec4, Float, Float, Vec2];
        let layout = UniformLayout::new(&types).unwrap();
        let mut cursor = 0;
        for field in layout.fields() {
            let align = match field.ty {
                Float => 1,
                Vec2 => 2,
                _ => 4,
            };
            assert!(field.offset >= cursor);
            assert_eq!(field.offset % align, 0);
            assert!(field.offset - cursor < align, "offset is not the smallest aligned slot");
            cursor = field.offset + field.size;
        }
        assert_eq!(layout.size() % 4, 0);
        assert!(layout.size() >= cursor && layout.size() - cursor < 4);
        assert_eq!(layout.byte_size(), layout.size() * 4);
    }

    // ── rejection ─────────────────────────────────────────────────────────

    #[test]
    fn unsupported_type_fails_with_index() {
        let vec3 = UniformType::from_gl(0x8B51);
        let err = UniformLayout::new(&[Float, vec3, Vec4]).unwrap_err();
        assert_eq!(err, GlError::UnsupportedUniformType { index: 1, ty: Other(0x8B51) });
    }

    // ── gl enums ──────────────────────────────────────────────────────────

    #[test]
    fn gl_enums_map_to_tags() {
        assert_eq!(UniformType::from_gl(0x1406), Float);
        assert_eq!(UniformType::from_gl(0x8B5C), Mat4);
        assert_eq!(Vec2.as_gl(), 0x8B50);
        assert_eq!(Other(0x8B5B).to_string(), "0x8B5B");
    }
}
