//! # Sphere Primitive
//!
//! Generates mesh for sphere shapes using latitude/longitude tessellation.

use crate::asset::MeshAsset;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere mesh using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `segments` - Number of segments around the circumference (clamped to a
///   minimum of 3)
///
/// # Returns
///
/// A mesh with smooth radial normals.
///
/// # Algorithm
///
/// - `num_rings = (segments + 1) / 2`
/// - Each ring at polar angle `phi = PI * (i + 0.5) / num_rings`
/// - No pole vertices - uses polygon caps
///
/// # Example
///
/// ```rust
/// use grammar_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(0.5, 16);
/// assert_eq!(mesh.vertex_count(), 8 * 16);
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> MeshAsset {
    let segments = segments.max(MIN_SEGMENTS);
    let num_rings = (segments + 1) / 2;

    let mut mesh = MeshAsset::with_capacity(
        (num_rings * segments) as usize,
        (2 * (segments - 2) + 2 * (num_rings - 1) * segments) as usize,
    );

    // Generate vertices for each ring
    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(num_rings as usize);

    for i in 0..num_rings {
        // Polar angle (0 = top, PI = bottom), offset by half a step so the
        // poles are capped with polygons instead of degenerate vertices.
        let phi = PI * (i as f64 + 0.5) / num_rings as f64;
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();

        let mut ring_indices = Vec::with_capacity(segments as usize);

        for j in 0..segments {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            let direction = DVec3::new(
                sin_phi * theta.cos(),
                sin_phi * theta.sin(),
                cos_phi,
            );
            let idx = mesh.add_vertex_with_normal(direction * radius, direction);
            ring_indices.push(idx);
        }

        rings.push(ring_indices);
    }

    // Top cap (first ring as polygon fan)
    let first_ring = &rings[0];
    for j in 1..segments - 1 {
        mesh.add_triangle(
            first_ring[0],
            first_ring[j as usize],
            first_ring[(j + 1) as usize],
        );
    }

    // Middle bands (quads between adjacent rings)
    for i in 0..num_rings - 1 {
        let ring_a = &rings[i as usize];
        let ring_b = &rings[(i + 1) as usize];

        for j in 0..segments {
            let j_next = (j + 1) % segments;

            let a0 = ring_a[j as usize];
            let a1 = ring_a[j_next as usize];
            let b0 = ring_b[j as usize];
            let b1 = ring_b[j_next as usize];

            mesh.add_triangle(a0, b0, b1);
            mesh.add_triangle(a0, b1, a1);
        }
    }

    // Bottom cap (last ring as polygon fan, reversed)
    let last_ring = &rings[(num_rings - 1) as usize];
    for j in 1..segments - 1 {
        mesh.add_triangle(
            last_ring[0],
            last_ring[(j + 1) as usize],
            last_ring[j as usize],
        );
    }

    mesh
}
