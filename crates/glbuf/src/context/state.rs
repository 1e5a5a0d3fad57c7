use super::GraphicsContext;

/// Application-side mirror of context binding state.
///
/// Only the bound vertex array is tracked. Pass the same `AppState` to every
/// `VertexArray` operation on a given context so redundant binds can be
/// skipped.
pub struct AppState<C: GraphicsContext> {
    vertex_array: Option<C::VertexArray>,
}

impl<C: GraphicsContext> AppState<C> {
    pub fn new() -> Self {
        Self { vertex_array: None }
    }

    /// Vertex array currently believed to be bound, if any.
    pub fn vertex_array(&self) -> Option<&C::VertexArray> {
        self.vertex_array.as_ref()
    }

    pub(crate) fn is_vertex_array_bound(&self, vertex_array: &C::VertexArray) -> bool {
        self.vertex_array.as_ref() == Some(vertex_array)
    }

    pub(crate) fn set_vertex_array(&mut self, vertex_array: Option<C::VertexArray>) {
        self.vertex_array = vertex_array;
    }

    /// Forgets the tracked binding, forcing the next `bind` to hit the device.
    ///
    /// Call this after issuing raw vertex array binds outside this crate.
    pub fn invalidate(&mut self) {
        self.vertex_array = None;
    }
}

impl<C: GraphicsContext> Default for AppState<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: GraphicsContext> std::fmt::Debug for AppState<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("vertex_array", &self.vertex_array)
            .finish()
    }
}
