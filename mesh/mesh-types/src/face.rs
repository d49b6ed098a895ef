//! Polygon face type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon face referencing vertices by index.
///
/// `vertices` lists the corner indices in winding order (three or more for a
/// well-formed face). `tex_coords` runs parallel to it and holds the texture
/// coordinate index of each corner.
///
/// # Example
///
/// ```
/// use mesh_types::Face;
///
/// let quad = Face::new(vec![0, 1, 2, 3]);
/// assert_eq!(quad.len(), 4);
/// assert_eq!(quad.leading_triangle(), Some([0, 1, 2]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Corner vertex indices in winding order.
    pub vertices: Vec<u32>,
    /// Texture coordinate index per corner.
    pub tex_coords: Vec<u32>,
}

impl Face {
    /// Create a face whose texture coordinate indices mirror its vertex indices.
    #[must_use]
    pub fn new(vertices: Vec<u32>) -> Self {
        let tex_coords = vertices.clone();
        Self {
            vertices,
            tex_coords,
        }
    }

    /// Create a face with explicit texture coordinate indices.
    #[inline]
    #[must_use]
    pub const fn with_tex_coords(vertices: Vec<u32>, tex_coords: Vec<u32>) -> Self {
        Self {
            vertices,
            tex_coords,
        }
    }

    /// Create a triangle face.
    #[must_use]
    pub fn triangle(a: u32, b: u32, c: u32) -> Self {
        Self::new(vec![a, b, c])
    }

    /// Number of corners.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the face has no corners at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the face has at least three corners.
    #[inline]
    #[must_use]
    pub fn is_polygon(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// The first three corners, if the face has them.
    ///
    /// Polygons with more corners are not fan-triangulated; callers that
    /// measure a face measure this triangle only.
    #[must_use]
    pub fn leading_triangle(&self) -> Option<[u32; 3]> {
        match self.vertices.as_slice() {
            [a, b, c, ..] => Some([*a, *b, *c]),
            _ => None,
        }
    }

    /// Iterate the face's edges as `(from, to)` pairs, closing the ring.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Face;
    ///
    /// let edges: Vec<_> = Face::triangle(4, 5, 6).edges().collect();
    /// assert_eq!(edges, vec![(4, 5), (5, 6), (6, 4)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

impl From<[u32; 3]> for Face {
    fn from([a, b, c]: [u32; 3]) -> Self {
        Self::triangle(a, b, c)
    }
}

impl From<Vec<u32>> for Face {
    fn from(vertices: Vec<u32>) -> Self {
        Self::new(vertices)
    }
}
