//! Vertex type.

use nalgebra::{Point2, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mesh vertex: position, shading normal and texture coordinate.
///
/// Every vertex carries all three attributes. Meshes loaded without normals
/// or UVs simply keep the zero defaults, which the quality checks treat as
/// "not measurable" rather than as defects.
///
/// # Example
///
/// ```
/// use mesh_types::{Vertex, Point3};
///
/// // Create a vertex with just position
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
///
/// // Create from raw coordinates
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
///
/// assert_eq!(v1.position, v2.position);
/// assert_eq!(v1.normal.norm(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f32>,

    /// Shading normal. Not required to be unit length.
    pub normal: Vector3<f32>,

    /// Texture coordinate (U, V).
    pub uv: Point2<f32>,
}

impl Vertex {
    /// Create a new vertex with only position set.
    #[inline]
    #[must_use]
    pub fn new(position: Point3<f32>) -> Self {
        Self {
            position,
            normal: Vector3::zeros(),
            uv: Point2::origin(),
        }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.x, 1.0);
    /// assert_eq!(v.position.y, 2.0);
    /// assert_eq!(v.position.z, 3.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(x: f32, y: f32, z: f32) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex with position and shading normal.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Vertex, Point3, Vector3};
    ///
    /// let v = Vertex::with_normal(Point3::origin(), Vector3::z());
    /// assert_eq!(v.normal.z, 1.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_normal(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self {
            normal,
            ..Self::new(position)
        }
    }

    /// Create a vertex with every attribute set.
    #[inline]
    #[must_use]
    pub const fn with_attributes(
        position: Point3<f32>,
        normal: Vector3<f32>,
        uv: Point2<f32>,
    ) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Replace the texture coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Vertex;
    ///
    /// let v = Vertex::from_coords(0.0, 0.0, 0.0).uv_at(0.25, 0.75);
    /// assert_eq!(v.uv.x, 0.25);
    /// assert_eq!(v.uv.y, 0.75);
    /// ```
    #[inline]
    #[must_use]
    pub fn uv_at(mut self, u: f32, v: f32) -> Self {
        self.uv = Point2::new(u, v);
        self
    }

    /// Replace the shading normal.
    #[inline]
    #[must_use]
    pub fn normal_along(mut self, nx: f32, ny: f32, nz: f32) -> Self {
        self.normal = Vector3::new(nx, ny, nz);
        self
    }
}

impl From<Point3<f32>> for Vertex {
    fn from(position: Point3<f32>) -> Self {
        Self::new(position)
    }
}

impl From<[f32; 3]> for Vertex {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

impl From<(f32, f32, f32)> for Vertex {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::from_coords(x, y, z)
    }
}
