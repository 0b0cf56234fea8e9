//! # Primitives
//!
//! Mesh generation for the canonical shape library (box, sphere, cylinder,
//! cone, torus, regular polyhedra, raw triangles).
//!
//! All builders produce unit-sized geometry centered at the origin; instances
//! place them in world space through their transform. Cylinder, cone, and
//! torus are oriented along the X axis, which is part of the canonical
//! contract.

pub mod cuboid;
pub mod cylinder;
pub mod polyhedra;
pub mod sphere;
pub mod torus;
pub mod triangle;

pub use cuboid::create_cuboid;
pub use cylinder::{create_cone, create_cylinder};
pub use polyhedra::{
    create_dodecahedron, create_icosahedron, create_octahedron, create_tetrahedron,
};
pub use sphere::create_sphere;
pub use torus::create_torus;
pub use triangle::create_triangle;
