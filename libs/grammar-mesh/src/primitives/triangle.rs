//! # Triangle Primitive
//!
//! A single flat triangle from three explicit corners.

use crate::asset::MeshAsset;
use glam::DVec3;

/// Creates a one-triangle mesh from explicit corner positions.
///
/// The face normal comes from the corner winding; a degenerate (zero-area)
/// triangle gets a +Z normal so the asset stays valid.
pub fn create_triangle(corners: [DVec3; 3]) -> MeshAsset {
    let normal = (corners[1] - corners[0])
        .cross(corners[2] - corners[0])
        .try_normalize()
        .unwrap_or(DVec3::Z);

    let mut mesh = MeshAsset::with_capacity(3, 1);
    let i0 = mesh.add_vertex_with_normal(corners[0], normal);
    let i1 = mesh.add_vertex_with_normal(corners[1], normal);
    let i2 = mesh.add_vertex_with_normal(corners[2], normal);
    mesh.add_triangle(i0, i1, i2);
    mesh
}
