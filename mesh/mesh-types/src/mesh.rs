//! Named polygon mesh.

use crate::{Face, MeshTopology, Triangle, Vertex};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named polygon mesh.
///
/// Vertices and faces are stored separately, with faces referencing vertices
/// by 0-based index. Faces may have any number of corners; nothing here
/// checks that indices are in range (see `mesh_quality::MeshAdjacency::try_build`).
///
/// # Example
///
/// ```
/// use mesh_types::{PolygonMesh, Vertex, Face, MeshTopology};
///
/// let mut mesh = PolygonMesh::named("tri");
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push(Face::triangle(0, 1, 2));
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonMesh {
    /// Display name, e.g. the object or group name from the source file.
    pub name: String,

    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Polygon faces as indices into the vertex array.
    pub faces: Vec<Face>,
}

impl PolygonMesh {
    /// Create a new empty, unnamed mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a new empty mesh with a display name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{PolygonMesh, Vertex, Face, MeshTopology};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 1.0, 0.0),
    ///     Vertex::from_coords(0.0, 1.0, 0.0),
    /// ];
    /// let faces = vec![Face::new(vec![0, 1, 2, 3])];
    ///
    /// let mesh = PolygonMesh::from_parts("quad", vertices, faces);
    /// assert_eq!(mesh.name, "quad");
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[must_use]
    pub fn from_parts(name: impl Into<String>, vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self {
            name: name.into(),
            vertices,
            faces,
        }
    }

    /// Create a triangle mesh from raw coordinate and index data.
    ///
    /// Returns an empty mesh if either slice length is not a multiple of 3.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{PolygonMesh, MeshTopology};
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let indices = [0, 1, 2];
    ///
    /// let mesh = PolygonMesh::from_raw(&positions, &indices);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f32], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| Face::triangle(c[0], c[1], c[2]))
            .collect();

        Self {
            name: String::new(),
            vertices,
            faces,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Recompute vertex normals as the unweighted sum of the leading-triangle
    /// normals of every face touching the vertex, normalized.
    ///
    /// Vertices touched by no measurable face keep a zero normal. Indices
    /// out of range are ignored.
    pub fn compute_vertex_normals(&mut self) {
        let mut sums = vec![Vector3::<f32>::zeros(); self.vertices.len()];

        for face in &self.faces {
            let Some(tri) = self.leading_triangle_of(face) else {
                continue;
            };
            let n = tri.normal_unnormalized();
            let len = n.norm();
            if len <= f32::EPSILON {
                continue;
            }
            let n = n / len;
            for &v in &face.vertices {
                if let Some(sum) = sums.get_mut(v as usize) {
                    *sum += n;
                }
            }
        }

        for (vertex, sum) in self.vertices.iter_mut().zip(sums) {
            let len = sum.norm();
            vertex.normal = if len > f32::EPSILON {
                sum / len
            } else {
                Vector3::zeros()
            };
        }
    }

    fn leading_triangle_of(&self, face: &Face) -> Option<Triangle> {
        let [a, b, c] = face.leading_triangle()?;
        Some(Triangle::new(
            self.vertices.get(a as usize)?.position,
            self.vertices.get(b as usize)?.position,
            self.vertices.get(c as usize)?.position,
        ))
    }
}

impl MeshTopology for PolygonMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.leading_triangle_of(self.faces.get(face_index)?)
    }
}

/// Helper function to create a unit cube mesh.
///
/// Creates a cube from (0,0,0) to (1,1,1) as 12 CCW triangles with outward
/// vertex normals and planar UVs taken from the X/Y coordinates.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> PolygonMesh {
    let corners: [[f32; 3]; 8] = [
        [0.0, 0.0, 0.0], // 0
        [1.0, 0.0, 0.0], // 1
        [1.0, 1.0, 0.0], // 2
        [0.0, 1.0, 0.0], // 3
        [0.0, 0.0, 1.0], // 4
        [1.0, 0.0, 1.0], // 5
        [1.0, 1.0, 1.0], // 6
        [0.0, 1.0, 1.0], // 7
    ];

    let mut mesh = PolygonMesh::named("unit_cube");
    for [x, y, z] in corners {
        mesh.vertices.push(Vertex::from_coords(x, y, z).uv_at(x, y));
    }

    let faces: [[u32; 3]; 12] = [
        // Bottom (z=0)
        [0, 2, 1],
        [0, 3, 2],
        // Top (z=1)
        [4, 5, 6],
        [4, 6, 7],
        // Front (y=0)
        [0, 1, 5],
        [0, 5, 4],
        // Back (y=1)
        [3, 7, 6],
        [3, 6, 2],
        // Left (x=0)
        [0, 4, 7],
        [0, 7, 3],
        // Right (x=1)
        [1, 2, 6],
        [1, 6, 5],
    ];
    mesh.faces.extend(faces.into_iter().map(Face::from));

    mesh.compute_vertex_normals();
    mesh
}
