//! # Cuboid Primitive
//!
//! Generates mesh for box shapes, flat shaded.

use crate::asset::MeshAsset;
use glam::DVec3;

/// Creates a cuboid mesh centered at the origin.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
///
/// # Returns
///
/// A flat-shaded mesh with 24 vertices (4 per face, so each face keeps its
/// own normal) and 12 triangles.
///
/// # Example
///
/// ```rust
/// use grammar_mesh::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::ONE);
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.index_count(), 36);
/// ```
pub fn create_cuboid(size: DVec3) -> MeshAsset {
    let half = size / 2.0;
    let mut mesh = MeshAsset::with_capacity(24, 12);

    // (normal, u tangent, v tangent) per face, with u x v = normal so the
    // shared corner ordering below winds counter-clockwise from outside.
    let faces = [
        (DVec3::X, DVec3::Y, DVec3::Z),
        (DVec3::NEG_X, DVec3::Z, DVec3::Y),
        (DVec3::Y, DVec3::Z, DVec3::X),
        (DVec3::NEG_Y, DVec3::X, DVec3::Z),
        (DVec3::Z, DVec3::X, DVec3::Y),
        (DVec3::NEG_Z, DVec3::Y, DVec3::X),
    ];

    for (normal, u, v) in faces {
        let center = normal * half;
        let eu = u * half;
        let ev = v * half;

        let i0 = mesh.add_vertex_with_normal(center - eu - ev, normal);
        let i1 = mesh.add_vertex_with_normal(center + eu - ev, normal);
        let i2 = mesh.add_vertex_with_normal(center + eu + ev, normal);
        let i3 = mesh.add_vertex_with_normal(center - eu + ev, normal);

        mesh.add_triangle(i0, i1, i2);
        mesh.add_triangle(i0, i2, i3);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_counts() {
        let mesh = create_cuboid(DVec3::ONE);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cuboid_is_centered() {
        let mesh = create_cuboid(DVec3::ONE);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::splat(-0.5));
        assert_eq!(max, DVec3::splat(0.5));
    }

    #[test]
    fn test_cuboid_nonuniform_size() {
        let mesh = create_cuboid(DVec3::new(2.0, 4.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_cuboid_normals_are_axis_aligned() {
        let mesh = create_cuboid(DVec3::ONE);
        for normal in mesh.normals() {
            assert!((normal.length() - 1.0).abs() < 1e-12);
            // Exactly one non-zero component per face normal.
            let nonzero = [normal.x, normal.y, normal.z]
                .iter()
                .filter(|c| c.abs() > 0.0)
                .count();
            assert_eq!(nonzero, 1);
        }
    }

    #[test]
    fn test_cuboid_winds_outward() {
        let mesh = create_cuboid(DVec3::ONE);
        for tri in mesh.triangles() {
            let v0 = mesh.positions()[tri[0] as usize];
            let v1 = mesh.positions()[tri[1] as usize];
            let v2 = mesh.positions()[tri[2] as usize];
            let face_normal = (v1 - v0).cross(v2 - v0);
            let centroid = (v0 + v1 + v2) / 3.0;
            assert!(face_normal.dot(centroid) > 0.0);
        }
    }
}
