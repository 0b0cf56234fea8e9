//! # Torus Primitive
//!
//! Generates mesh for torus shapes with the ring axis along X.

use crate::asset::MeshAsset;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a torus mesh whose ring lies in the YZ plane (axis along X).
///
/// # Arguments
///
/// * `ring_radius` - Distance from the origin to the tube center
/// * `tube_radius` - Radius of the tube cross-section
/// * `radial_segments` - Segments around the tube cross-section (clamped to
///   a minimum of 3)
/// * `tube_segments` - Segments around the ring (clamped to a minimum of 3)
///
/// # Example
///
/// ```rust
/// use grammar_mesh::primitives::create_torus;
///
/// let mesh = create_torus(0.5, 0.1, 4, 8);
/// assert_eq!(mesh.vertex_count(), 4 * 8);
/// ```
pub fn create_torus(
    ring_radius: f64,
    tube_radius: f64,
    radial_segments: u32,
    tube_segments: u32,
) -> MeshAsset {
    let radial_segments = radial_segments.max(MIN_SEGMENTS) as usize;
    let tube_segments = tube_segments.max(MIN_SEGMENTS) as usize;

    let mut mesh = MeshAsset::with_capacity(
        radial_segments * tube_segments,
        2 * radial_segments * tube_segments,
    );

    for i in 0..tube_segments {
        let u = 2.0 * PI * i as f64 / tube_segments as f64;
        let (sin_u, cos_u) = u.sin_cos();
        for j in 0..radial_segments {
            let v = 2.0 * PI * j as f64 / radial_segments as f64;
            let (sin_v, cos_v) = v.sin_cos();

            let position = DVec3::new(
                tube_radius * sin_v,
                (ring_radius + tube_radius * cos_v) * cos_u,
                (ring_radius + tube_radius * cos_v) * sin_u,
            );
            let normal = DVec3::new(sin_v, cos_v * cos_u, cos_v * sin_u);
            mesh.add_vertex_with_normal(position, normal);
        }
    }

    let index = |i: usize, j: usize| {
        ((i % tube_segments) * radial_segments + (j % radial_segments)) as u32
    };

    for i in 0..tube_segments {
        for j in 0..radial_segments {
            let a = index(i, j);
            let b = index(i + 1, j);
            let c = index(i + 1, j + 1);
            let d = index(i, j + 1);
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(a, c, d);
        }
    }

    mesh
}
