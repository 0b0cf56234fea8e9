//! # Mesh Assets
//!
//! Indexed triangle geometry shared by the primitive library, the creator
//! cache, and the composer.

use glam::DVec3;

/// An immutable chunk of indexed triangle geometry.
///
/// All geometry calculations use f64 internally. Export to f32 only happens
/// when the buffer compiler packs the final render buffers.
///
/// Cached assets are shared behind `Arc` and never mutated after
/// construction; composed assets are built, copied once, and dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshAsset {
    /// Vertex positions (f64 for precision)
    positions: Vec<DVec3>,
    /// Per-vertex unit normals, same length as `positions` once finished
    normals: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl MeshAsset {
    /// Creates an empty asset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an asset with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of indices (three per triangle).
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the asset holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex and returns its index. The normal is filled in later by
    /// [`compute_normals`](Self::compute_normals).
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Adds a vertex with an explicit unit normal and returns its index.
    pub fn add_vertex_with_normal(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Computes per-vertex normals by averaging the face normals of every
    /// triangle sharing the vertex. Replaces any explicit normals.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.positions.len()];

        for tri in &self.triangles {
            let v0 = self.positions[tri[0] as usize];
            let v1 = self.positions[tri[1] as usize];
            let v2 = self.positions[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = normals;
    }

    /// Validates the asset: every triangle index in range, normals present
    /// for every vertex, all normals finite.
    pub fn validate(&self) -> bool {
        if self.normals.len() != self.positions.len() {
            return false;
        }

        let vertex_count = self.positions.len() as u32;
        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }
        }

        self.normals.iter().all(|n| n.is_finite())
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; the origin twice for an empty asset.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.positions.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];
        for v in &self.positions[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }
}
