//! # Cylinder and Cone Primitives
//!
//! Generates meshes for cylinder and cone shapes, oriented along the X axis
//! (the canonical axis convention for elongated shapes).

use crate::asset::MeshAsset;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a cylinder mesh along the X axis, centered at the origin.
///
/// # Arguments
///
/// * `radius` - Radius of both caps
/// * `height` - Extent along X, from `-height/2` to `height/2`
/// * `segments` - Number of segments around the circumference (clamped to a
///   minimum of 3)
///
/// # Returns
///
/// A mesh with a smooth-shaded side wall and flat caps. Cap rims duplicate
/// the side vertices so the cap normals stay flat.
///
/// # Example
///
/// ```rust
/// use grammar_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(0.5, 1.0, 8);
/// assert_eq!(mesh.vertex_count(), 4 * 8 + 2);
/// ```
pub fn create_cylinder(radius: f64, height: f64, segments: u32) -> MeshAsset {
    let segments = segments.max(MIN_SEGMENTS);
    let half = height / 2.0;
    let n = segments as usize;

    let mut mesh = MeshAsset::with_capacity(4 * n + 2, 4 * n);

    // Side wall: two rings sharing outward radial normals.
    let mut low = Vec::with_capacity(n);
    let mut high = Vec::with_capacity(n);
    for j in 0..segments {
        let theta = 2.0 * PI * j as f64 / segments as f64;
        let (sin, cos) = theta.sin_cos();
        let normal = DVec3::new(0.0, cos, sin);
        let rim = DVec3::new(0.0, radius * cos, radius * sin);
        low.push(mesh.add_vertex_with_normal(DVec3::new(-half, 0.0, 0.0) + rim, normal));
        high.push(mesh.add_vertex_with_normal(DVec3::new(half, 0.0, 0.0) + rim, normal));
    }
    for j in 0..n {
        let j_next = (j + 1) % n;
        mesh.add_triangle(low[j], high[j_next], high[j]);
        mesh.add_triangle(low[j], low[j_next], high[j_next]);
    }

    // Caps: dedicated rim vertices with axial normals, fanned from a center.
    for &sign in &[1.0, -1.0] {
        let normal = DVec3::new(sign, 0.0, 0.0);
        let center = mesh.add_vertex_with_normal(DVec3::new(sign * half, 0.0, 0.0), normal);
        let mut rim = Vec::with_capacity(n);
        for j in 0..segments {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            let (sin, cos) = theta.sin_cos();
            rim.push(mesh.add_vertex_with_normal(
                DVec3::new(sign * half, radius * cos, radius * sin),
                normal,
            ));
        }
        for j in 0..n {
            let j_next = (j + 1) % n;
            if sign > 0.0 {
                mesh.add_triangle(center, rim[j], rim[j_next]);
            } else {
                mesh.add_triangle(center, rim[j_next], rim[j]);
            }
        }
    }

    mesh
}

/// Creates a cone mesh along the X axis, base at `-height/2`, apex at
/// `height/2`.
///
/// The apex is duplicated per segment so each slant quad-strip column keeps
/// its own apex normal.
///
/// # Example
///
/// ```rust
/// use grammar_mesh::primitives::create_cone;
///
/// let mesh = create_cone(0.5, 1.0, 8);
/// assert_eq!(mesh.vertex_count(), 3 * 8 + 1);
/// ```
pub fn create_cone(radius: f64, height: f64, segments: u32) -> MeshAsset {
    let segments = segments.max(MIN_SEGMENTS);
    let half = height / 2.0;
    let n = segments as usize;

    let mut mesh = MeshAsset::with_capacity(3 * n + 1, 2 * n);

    // Slant wall ring at the base.
    let mut base = Vec::with_capacity(n);
    for j in 0..segments {
        let theta = 2.0 * PI * j as f64 / segments as f64;
        let (sin, cos) = theta.sin_cos();
        let normal = DVec3::new(radius, height * cos, height * sin).normalize();
        base.push(mesh.add_vertex_with_normal(
            DVec3::new(-half, radius * cos, radius * sin),
            normal,
        ));
    }

    // One apex vertex per segment, normal taken at the segment mid-angle.
    let mut apex = Vec::with_capacity(n);
    for j in 0..segments {
        let theta = 2.0 * PI * (j as f64 + 0.5) / segments as f64;
        let (sin, cos) = theta.sin_cos();
        let normal = DVec3::new(radius, height * cos, height * sin).normalize();
        apex.push(mesh.add_vertex_with_normal(DVec3::new(half, 0.0, 0.0), normal));
    }

    for j in 0..n {
        let j_next = (j + 1) % n;
        mesh.add_triangle(base[j], base[j_next], apex[j]);
    }

    // Base cap.
    let normal = DVec3::NEG_X;
    let center = mesh.add_vertex_with_normal(DVec3::new(-half, 0.0, 0.0), normal);
    for j in 0..n {
        let j_next = (j + 1) % n;
        mesh.add_triangle(center, base[j_next], base[j]);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_counts() {
        let mesh = create_cylinder(0.5, 1.0, 8);
        assert_eq!(mesh.vertex_count(), 34);
        assert_eq!(mesh.index_count(), 3 * 4 * 8);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cylinder_extends_along_x() {
        let mesh = create_cylinder(0.5, 1.0, 16);
        let (min, max) = mesh.bounding_box();
        assert!((min.x + 0.5).abs() < 1e-12);
        assert!((max.x - 0.5).abs() < 1e-12);
        assert!(max.y <= 0.5 + 1e-12);
        assert!(max.z <= 0.5 + 1e-12);
    }

    #[test]
    fn test_cylinder_side_normals_have_no_axial_component() {
        let mesh = create_cylinder(0.5, 1.0, 8);
        // The first 2n vertices belong to the side wall.
        for n in mesh.normals().iter().take(16) {
            assert!(n.x.abs() < 1e-12);
            assert!((n.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cylinder_clamps_segments() {
        let mesh = create_cylinder(0.5, 1.0, 0);
        assert_eq!(mesh.vertex_count(), 4 * 3 + 2);
    }

    #[test]
    fn test_cone_counts() {
        let mesh = create_cone(0.5, 1.0, 8);
        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(mesh.index_count(), 3 * 2 * 8);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cone_apex_at_positive_x() {
        let mesh = create_cone(0.5, 1.0, 8);
        let (min, max) = mesh.bounding_box();
        assert!((max.x - 0.5).abs() < 1e-12);
        assert!((min.x + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_cone_slant_normals_point_outward() {
        let mesh = create_cone(0.5, 1.0, 8);
        // Base ring vertices: normal should have positive radial dot product.
        for (v, n) in mesh.positions().iter().zip(mesh.normals()).take(8) {
            let radial = DVec3::new(0.0, v.y, v.z);
            assert!(n.dot(radial) > 0.0);
            assert!(n.x > 0.0);
        }
    }
}
