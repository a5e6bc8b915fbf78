//! Geometry primitives for 3D rendering
use nalgebra::{Point3, Vector3};

use crate::fractal::Placement;

// Derived from f64 square roots, narrowed once.
pub(crate) const SQRT_3: f32 = 1.732_050_807_568_877_2_f64 as f32;
pub(crate) const SQRT_6: f32 = 2.449_489_742_783_178_f64 as f32;

/// The four corner displacements of a regular tetrahedron with edge length
/// `edge`, relative to its anchor vertex.
///
/// All six pairwise distances equal `edge`. The first corner is the anchor
/// itself, the next two span the base triangle in the XY plane, the last is
/// the apex.
pub fn corner_offsets(edge: f32) -> [Vector3<f32>; 4] {
    [
        Vector3::zeros(),
        Vector3::new(edge, 0.0, 0.0),
        Vector3::new(edge / 2.0, edge * SQRT_3 / 2.0, 0.0),
        Vector3::new(edge / 2.0, edge * SQRT_3 / 6.0, edge * SQRT_6 / 3.0),
    ]
}

/// Centroid of a regular tetrahedron with edge length `edge` anchored at the
/// origin. Used as the rotation pivot for the whole figure.
pub fn centroid(edge: f32) -> Point3<f32> {
    let offsets = corner_offsets(edge);
    let sum = offsets[0] + offsets[1] + offsets[2] + offsets[3];
    Point3::origin() + sum / 4.0
}

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Build a face from three points, all vertices sharing the face normal
    /// implied by the winding order.
    pub fn from_points(p0: Point3<f32>, p1: Point3<f32>, p2: Point3<f32>) -> Self {
        let normal = (p1 - p0).cross(&(p2 - p0)).normalize();
        Self::new(
            Vertex::new(p0, normal),
            Vertex::new(p1, normal),
            Vertex::new(p2, normal),
        )
    }

    /// Calculate the face normal from the triangle's vertices
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).normalize()
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Create a regular tetrahedron mesh with edge length `size`, anchored
    /// at the origin.
    pub fn tetrahedron(size: f32) -> Self {
        Self::tetrahedron_at(Point3::origin(), size)
    }

    /// Create a regular tetrahedron mesh anchored at `origin`.
    ///
    /// The anchor is the first corner vertex, not the centroid, matching the
    /// reference-vertex convention of fractal placements. Faces wind so that
    /// normals point outward.
    pub fn tetrahedron_at(origin: Point3<f32>, size: f32) -> Self {
        let [c0, c1, c2, c3] = corner_offsets(size).map(|offset| origin + offset);

        let mut mesh = Self::with_capacity(4);
        mesh.add_triangle(Triangle::from_points(c0, c2, c1));
        mesh.add_triangle(Triangle::from_points(c0, c1, c3));
        mesh.add_triangle(Triangle::from_points(c1, c2, c3));
        mesh.add_triangle(Triangle::from_points(c0, c3, c2));
        mesh
    }

    /// Instantiate the renderable mesh for one leaf placement.
    pub fn from_placement(placement: &Placement) -> Self {
        Self::tetrahedron_at(placement.position, placement.size)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_offsets_are_mutually_equidistant() {
        let offsets = corner_offsets(2.0);
        for i in 0..4 {
            for j in (i + 1)..4 {
                let d = (offsets[i] - offsets[j]).norm();
                assert!((d - 2.0).abs() < 1e-6, "corners {} and {}: {}", i, j, d);
            }
        }
    }

    #[test]
    fn first_corner_is_the_anchor() {
        assert_eq!(corner_offsets(1.0)[0], Vector3::zeros());
    }

    #[test]
    fn centroid_is_mean_of_corners() {
        let c = centroid(2.0);
        assert!((c.x - 1.0).abs() < 1e-6);
        assert!((c.y - 2.0 * SQRT_3 / 6.0).abs() < 1e-6);
        assert!((c.z - 2.0 * SQRT_6 / 12.0).abs() < 1e-6);
    }

    #[test]
    fn tetrahedron_has_four_faces_with_equal_edges() {
        let size = 1.5;
        let mesh = Mesh::tetrahedron(size);
        assert_eq!(mesh.triangles.len(), 4);

        for triangle in &mesh.triangles {
            for i in 0..3 {
                let a = triangle.vertices[i].position;
                let b = triangle.vertices[(i + 1) % 3].position;
                assert!(((a - b).norm() - size).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn tetrahedron_normals_point_outward() {
        let size = 1.0;
        let mesh = Mesh::tetrahedron(size);
        let center = centroid(size);

        for triangle in &mesh.triangles {
            let face_center = Point3::from(
                (triangle.vertices[0].position.coords
                    + triangle.vertices[1].position.coords
                    + triangle.vertices[2].position.coords)
                    / 3.0,
            );
            let outward = face_center - center;
            assert!(triangle.calculate_normal().dot(&outward) > 0.0);
        }
    }

    #[test]
    fn tetrahedron_at_translates_every_vertex() {
        let origin = Point3::new(1.0, -2.0, 3.0);
        let base = Mesh::tetrahedron(1.0);
        let moved = Mesh::tetrahedron_at(origin, 1.0);

        for (a, b) in base.triangles.iter().zip(&moved.triangles) {
            for (va, vb) in a.vertices.iter().zip(&b.vertices) {
                let shifted = va.position + origin.coords;
                assert!((vb.position - shifted).norm() < 1e-6);
            }
        }
    }
}
