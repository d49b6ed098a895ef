//! Mesh adjacency data structures.
//!
//! Provides edge-to-face and vertex-to-vertex lookups reconstructed from a
//! raw polygon face list.

use std::collections::BTreeMap;

use mesh_types::Face;
use tracing::warn;

use crate::error::{QualityError, QualityResult};

/// Adjacency information for a polygon mesh.
///
/// Provides lookups for:
/// - Faces incident to an edge (boundary, manifold and non-manifold edges)
/// - Vertices adjacent to a vertex (valence)
///
/// Edges are kept in ascending `(min, max)` order so that every pass walking
/// them reports issues in a stable order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshAdjacency {
    /// Maps edge (v0, v1) to the faces containing it, in face order. v0 <= v1.
    edge_to_faces: BTreeMap<(u32, u32), Vec<usize>>,
    /// Neighbours of each vertex in first-seen order, deduplicated.
    vertex_neighbors: Vec<Vec<u32>>,
    /// Faces ignored because they have fewer than three corners.
    skipped_faces: usize,
}

impl MeshAdjacency {
    /// Build adjacency information from a list of faces.
    ///
    /// Each face ring is walked pairwise, closing back to its first corner.
    /// Faces with fewer than three corners are not polygons and are skipped.
    /// Neighbour indices past `vertex_count` grow the neighbour table rather
    /// than panic; use [`MeshAdjacency::try_build`] to reject them instead.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_quality::MeshAdjacency;
    /// use mesh_types::Face;
    ///
    /// let faces = vec![Face::triangle(0, 1, 2), Face::triangle(1, 3, 2)];
    /// let adj = MeshAdjacency::build(&faces, 4);
    ///
    /// assert_eq!(adj.boundary_edge_count(), 4);
    /// assert_eq!(adj.valence(1), 3);
    /// ```
    #[must_use]
    pub fn build(faces: &[Face], vertex_count: usize) -> Self {
        let mut edge_to_faces: BTreeMap<(u32, u32), Vec<usize>> = BTreeMap::new();
        let mut vertex_neighbors: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
        let mut skipped_faces = 0;

        for (face_idx, face) in faces.iter().enumerate() {
            if !face.is_polygon() {
                skipped_faces += 1;
                continue;
            }

            for (a, b) in face.edges() {
                edge_to_faces
                    .entry(normalize_edge(a, b))
                    .or_default()
                    .push(face_idx);

                link(&mut vertex_neighbors, a, b);
                link(&mut vertex_neighbors, b, a);
            }
        }

        if skipped_faces > 0 {
            warn!(
                skipped_faces,
                "Skipped faces with fewer than three vertices during topology build"
            );
        }

        Self {
            edge_to_faces,
            vertex_neighbors,
            skipped_faces,
        }
    }

    /// Build adjacency after checking that every face index is in range.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::InvalidIndex`] for the first face corner that
    /// references a vertex at or past `vertex_count`.
    pub fn try_build(faces: &[Face], vertex_count: usize) -> QualityResult<Self> {
        validate_indices(faces, vertex_count)?;
        Ok(Self::build(faces, vertex_count))
    }

    /// Get faces incident to an edge, in either direction.
    ///
    /// Returns `None` if the edge doesn't exist in the mesh.
    #[must_use]
    pub fn faces_for_edge(&self, v0: u32, v1: u32) -> Option<&[usize]> {
        self.edge_to_faces
            .get(&normalize_edge(v0, v1))
            .map(Vec::as_slice)
    }

    /// Iterate over every edge with its incident faces, in ascending key order.
    pub fn edges(&self) -> impl Iterator<Item = ((u32, u32), &[usize])> + '_ {
        self.edge_to_faces
            .iter()
            .map(|(&edge, faces)| (edge, faces.as_slice()))
    }

    /// Neighbours of a vertex in first-seen order.
    ///
    /// Returns an empty slice for isolated or unknown vertices.
    #[must_use]
    pub fn neighbors(&self, v: usize) -> &[u32] {
        self.vertex_neighbors.get(v).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct vertices adjacent to `v`.
    #[must_use]
    pub fn valence(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Iterate over every vertex's neighbour list, indexed by vertex.
    pub fn vertex_neighbors(&self) -> impl Iterator<Item = (usize, &[u32])> + '_ {
        self.vertex_neighbors
            .iter()
            .enumerate()
            .map(|(v, n)| (v, n.as_slice()))
    }

    /// Count the number of boundary edges (exactly one incident face).
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_to_faces
            .values()
            .filter(|faces| faces.len() == 1)
            .count()
    }

    /// Count the number of non-manifold edges (more than two incident faces).
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_to_faces
            .values()
            .filter(|faces| faces.len() > 2)
            .count()
    }

    /// Check if the mesh is manifold (all edges have at most 2 incident faces).
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.edge_to_faces.values().all(|faces| faces.len() <= 2)
    }

    /// Check if the mesh is watertight (no boundary edges).
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        self.edge_to_faces.values().all(|faces| faces.len() >= 2)
    }

    /// Get the total number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_to_faces.len()
    }

    /// Get the number of vertex slots in the neighbour table.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_neighbors.len()
    }

    /// Number of faces skipped for having fewer than three corners.
    #[must_use]
    pub const fn skipped_faces(&self) -> usize {
        self.skipped_faces
    }
}

/// Check every face corner against the vertex count.
fn validate_indices(faces: &[Face], vertex_count: usize) -> QualityResult<()> {
    for (face_idx, face) in faces.iter().enumerate() {
        if let Some(&index) = face
            .vertices
            .iter()
            .find(|&&v| v as usize >= vertex_count)
        {
            warn!(face = face_idx, index, vertex_count, "Face references a missing vertex");
            return Err(QualityError::InvalidIndex {
                face: face_idx,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// Record `to` as a neighbour of `from` unless it is already present.
///
/// Membership is a linear scan, which is cheap at ordinary mesh valences.
fn link(vertex_neighbors: &mut Vec<Vec<u32>>, from: u32, to: u32) {
    let from = from as usize;
    if from >= vertex_neighbors.len() {
        vertex_neighbors.resize_with(from + 1, Vec::new);
    }
    let neighbors = &mut vertex_neighbors[from];
    if !neighbors.contains(&to) {
        neighbors.push(to);
    }
}

/// Normalize edge direction so v0 <= v1.
#[inline]
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}
