//! Traits for mesh types.

use crate::{Triangle, Vertex};

/// Trait for types that provide mesh topology information.
///
/// This is the read-only interface the quality analyzer uses for counts,
/// vertex lookups and leading triangles.
pub trait MeshTopology {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of faces.
    fn face_count(&self) -> usize;

    /// Check if the mesh is empty.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Get a vertex by index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Get the leading triangle of a face with resolved vertex positions.
    ///
    /// Returns `None` if the face index is out of bounds, the face has fewer
    /// than three corners, or a corner index is out of bounds.
    fn triangle(&self, face_index: usize) -> Option<Triangle>;
}
