//! Polygon mesh types for quality analysis.
//!
//! This crate provides the input model consumed by `mesh-quality`:
//!
//! - [`Vertex`] - Position, shading normal and texture coordinate
//! - [`Face`] - A polygon as a ring of vertex indices plus texture indices
//! - [`PolygonMesh`] - A named mesh of vertices and polygon faces
//! - [`Triangle`] - A concrete triangle with vertex positions
//!
//! # Precision
//!
//! All coordinates are `f32`. Quality thresholds downstream are tuned for
//! single precision.
//!
//! # Winding
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//! Geometric normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Face, MeshTopology, PolygonMesh, Vertex};
//!
//! let mut mesh = PolygonMesh::named("triangle");
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
//! mesh.faces.push(Face::triangle(0, 1, 2));
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod face;
mod mesh;
mod traits;
mod triangle;
mod vertex;

// Re-export core types
pub use face::Face;
pub use mesh::{PolygonMesh, unit_cube};
pub use traits::MeshTopology;
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
