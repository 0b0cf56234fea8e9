//! # Regular Polyhedra
//!
//! Flat-shaded tetrahedron, octahedron, dodecahedron, and icosahedron,
//! scaled so every corner sits on the circumscribed sphere.

use crate::asset::MeshAsset;
use glam::DVec3;

/// Golden ratio, used by the dodecahedron and icosahedron corner tables.
const PHI: f64 = 1.618_033_988_749_895;

/// Builds a flat-shaded polyhedron from a corner table and triangle list.
///
/// Corners are projected onto the circumscribed sphere of the given radius;
/// every triangle gets its own three vertices so faces stay flat.
fn build(corners: &[DVec3], triangles: &[[usize; 3]], radius: f64) -> MeshAsset {
    let mut mesh = MeshAsset::with_capacity(triangles.len() * 3, triangles.len());

    for tri in triangles {
        let v0 = corners[tri[0]].normalize() * radius;
        let v1 = corners[tri[1]].normalize() * radius;
        let v2 = corners[tri[2]].normalize() * radius;
        let normal = (v1 - v0)
            .cross(v2 - v0)
            .try_normalize()
            .unwrap_or(DVec3::Z);

        let i0 = mesh.add_vertex_with_normal(v0, normal);
        let i1 = mesh.add_vertex_with_normal(v1, normal);
        let i2 = mesh.add_vertex_with_normal(v2, normal);
        mesh.add_triangle(i0, i1, i2);
    }

    mesh
}

/// Creates a tetrahedron with the given circumscribed radius.
pub fn create_tetrahedron(radius: f64) -> MeshAsset {
    let corners = [
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(-1.0, -1.0, 1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(1.0, -1.0, -1.0),
    ];
    let triangles = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    build(&corners, &triangles, radius)
}

/// Creates an octahedron with the given circumscribed radius.
pub fn create_octahedron(radius: f64) -> MeshAsset {
    let corners = [
        DVec3::X,
        DVec3::NEG_X,
        DVec3::Y,
        DVec3::NEG_Y,
        DVec3::Z,
        DVec3::NEG_Z,
    ];
    let triangles = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    build(&corners, &triangles, radius)
}

/// Creates an icosahedron with the given circumscribed radius.
pub fn create_icosahedron(radius: f64) -> MeshAsset {
    let t = PHI;
    let corners = [
        DVec3::new(-1.0, t, 0.0),
        DVec3::new(1.0, t, 0.0),
        DVec3::new(-1.0, -t, 0.0),
        DVec3::new(1.0, -t, 0.0),
        DVec3::new(0.0, -1.0, t),
        DVec3::new(0.0, 1.0, t),
        DVec3::new(0.0, -1.0, -t),
        DVec3::new(0.0, 1.0, -t),
        DVec3::new(t, 0.0, -1.0),
        DVec3::new(t, 0.0, 1.0),
        DVec3::new(-t, 0.0, -1.0),
        DVec3::new(-t, 0.0, 1.0),
    ];
    let triangles = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    build(&corners, &triangles, radius)
}

/// Creates a dodecahedron with the given circumscribed radius.
///
/// Each pentagonal face is pre-triangulated into three triangles.
pub fn create_dodecahedron(radius: f64) -> MeshAsset {
    let t = PHI;
    let r = 1.0 / PHI;
    let corners = [
        DVec3::new(-1.0, -1.0, -1.0),
        DVec3::new(-1.0, -1.0, 1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(-1.0, 1.0, 1.0),
        DVec3::new(1.0, -1.0, -1.0),
        DVec3::new(1.0, -1.0, 1.0),
        DVec3::new(1.0, 1.0, -1.0),
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(0.0, -r, -t),
        DVec3::new(0.0, -r, t),
        DVec3::new(0.0, r, -t),
        DVec3::new(0.0, r, t),
        DVec3::new(-r, -t, 0.0),
        DVec3::new(-r, t, 0.0),
        DVec3::new(r, -t, 0.0),
        DVec3::new(r, t, 0.0),
        DVec3::new(-t, 0.0, -r),
        DVec3::new(t, 0.0, -r),
        DVec3::new(-t, 0.0, r),
        DVec3::new(t, 0.0, r),
    ];
    let triangles = [
        [3, 11, 7],
        [3, 7, 15],
        [3, 15, 13],
        [7, 19, 17],
        [7, 17, 6],
        [7, 6, 15],
        [17, 4, 8],
        [17, 8, 10],
        [17, 10, 6],
        [8, 0, 16],
        [8, 16, 2],
        [8, 2, 10],
        [0, 12, 1],
        [0, 1, 18],
        [0, 18, 16],
        [6, 10, 2],
        [6, 2, 13],
        [6, 13, 15],
        [2, 16, 18],
        [2, 18, 3],
        [2, 3, 13],
        [18, 1, 9],
        [18, 9, 11],
        [18, 11, 3],
        [4, 14, 12],
        [4, 12, 0],
        [4, 0, 8],
        [11, 9, 5],
        [11, 5, 19],
        [11, 19, 7],
        [19, 5, 14],
        [19, 14, 4],
        [19, 4, 17],
        [1, 12, 14],
        [1, 14, 5],
        [1, 5, 9],
    ];
    build(&corners, &triangles, radius)
}
