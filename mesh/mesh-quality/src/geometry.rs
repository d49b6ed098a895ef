//! Per-element geometric measurements.
//!
//! Every face measurement uses the face's leading triangle (its first three
//! corners). Polygons with more corners are not fan-triangulated, so a quad
//! is judged by one of its corners only.
//!
//! Near-zero denominators are guarded by [`EPSILON`] and replaced with a
//! defined fallback instead of producing NaN or infinity.

use mesh_types::{Face, MeshTopology, Point2, Point3, PolygonMesh, Triangle, Vector3};

/// Guard for divisions by lengths, areas and heights.
pub const EPSILON: f32 = 1e-6;

/// Area of the triangle spanned by three vertices.
///
/// # Example
///
/// ```
/// use mesh_quality::geometry::triangle_area;
/// use mesh_types::PolygonMesh;
///
/// let mesh = PolygonMesh::from_raw(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2]);
/// assert!((triangle_area(&mesh, [0, 1, 2]) - 0.5).abs() < 1e-6);
/// ```
#[must_use]
pub fn triangle_area(mesh: &PolygonMesh, corners: [u32; 3]) -> f32 {
    triangle(mesh, corners).area()
}

/// Euclidean distance between two vertex positions.
#[must_use]
pub fn distance(mesh: &PolygonMesh, a: u32, b: u32) -> f32 {
    (position(mesh, b) - position(mesh, a)).norm()
}

/// Longest edge divided by the shortest altitude.
///
/// The shortest altitude is the one dropped onto the longest edge,
/// `2 * area / longest`. A triangle whose area is at most [`EPSILON`] has
/// height 0, and a height of at most [`EPSILON`] yields `f32::MAX` as the
/// worst possible ratio.
///
/// # Example
///
/// ```
/// use mesh_quality::geometry::aspect_ratio;
/// use mesh_types::PolygonMesh;
///
/// let mesh = PolygonMesh::from_raw(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2]);
/// assert!((aspect_ratio(&mesh, [0, 1, 2]) - 2.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn aspect_ratio(mesh: &PolygonMesh, corners: [u32; 3]) -> f32 {
    let tri = triangle(mesh, corners);
    let longest = tri.max_edge_length();
    let area = tri.area();

    let min_height = if area > EPSILON {
        2.0 * area / longest
    } else {
        0.0
    };

    if min_height > EPSILON {
        longest / min_height
    } else {
        f32::MAX
    }
}

/// Unit geometric normal of three vertices, or `None` when the cross
/// product is shorter than [`EPSILON`].
#[must_use]
pub fn face_normal(mesh: &PolygonMesh, corners: [u32; 3]) -> Option<Vector3<f32>> {
    let n = triangle(mesh, corners).normal_unnormalized();
    let len = n.norm();
    (len > EPSILON).then(|| n / len)
}

/// Angle in degrees between the normals of two faces sharing the edge
/// `(s1, s2)`.
///
/// For each face the first corner that is not an endpoint of the shared edge
/// is taken as its apex (corner 0 if there is none) and the normal is
/// `(s2 - s1) x (apex - s1)`. Both normals are built from the same edge
/// direction, so two flat neighbours with apexes on opposite sides of the
/// edge measure 180 degrees, and a fold that lays one face back onto the
/// other (apexes on the same side) approaches 0. This is the angle between
/// the constructed normals, not the interior fold angle.
#[must_use]
pub fn dihedral_angle(mesh: &PolygonMesh, f1: usize, f2: usize, s1: u32, s2: u32) -> f32 {
    let n1 = apex_normal(mesh, &mesh.faces[f1], s1, s2);
    let n2 = apex_normal(mesh, &mesh.faces[f2], s1, s2);

    n1.dot(&n2).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Ratio between a face's 3D area and its texture-space area, at least 1.
///
/// The texture-space triangle is formed from the `uv` coordinates of the
/// face's first three vertices. Returns 0 ("not measurable") when the face
/// has fewer than three vertex or texture entries or when either area is
/// below [`EPSILON`].
#[must_use]
pub fn uv_stretch(mesh: &PolygonMesh, face: &Face) -> f32 {
    if face.tex_coords.len() < 3 {
        return 0.0;
    }
    let Some(corners) = face.leading_triangle() else {
        return 0.0;
    };

    let surface_area = triangle_area(mesh, corners);
    let uv_area = uv_area(mesh, corners);

    if surface_area < EPSILON || uv_area < EPSILON {
        return 0.0;
    }

    (surface_area / uv_area).max(uv_area / surface_area)
}

/// Unsigned area of the texture-space triangle of three vertices.
fn uv_area(mesh: &PolygonMesh, [a, b, c]: [u32; 3]) -> f32 {
    let t1 = uv(mesh, a);
    let t2 = uv(mesh, b);
    let t3 = uv(mesh, c);

    let e1 = t2 - t1;
    let e2 = t3 - t1;
    0.5 * e1.perp(&e2).abs()
}

fn apex_normal(mesh: &PolygonMesh, face: &Face, s1: u32, s2: u32) -> Vector3<f32> {
    let apex = face
        .vertices
        .iter()
        .copied()
        .find(|&v| v != s1 && v != s2)
        .unwrap_or(0);

    let origin = position(mesh, s1);
    let along = position(mesh, s2) - origin;
    let across = position(mesh, apex) - origin;

    let n = along.cross(&across);
    let len = n.norm();
    if len > EPSILON { n / len } else { n }
}

fn triangle(mesh: &PolygonMesh, [a, b, c]: [u32; 3]) -> Triangle {
    Triangle::new(position(mesh, a), position(mesh, b), position(mesh, c))
}

// Indices are checked when the topology is built; a missing vertex reads as
// the origin.
fn position(mesh: &PolygonMesh, index: u32) -> Point3<f32> {
    mesh.vertex(index as usize).map_or_else(Point3::origin, |v| v.position)
}

fn uv(mesh: &PolygonMesh, index: u32) -> Point2<f32> {
    mesh.vertex(index as usize).map_or_else(Point2::origin, |v| v.uv)
}
