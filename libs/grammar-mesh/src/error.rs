//! # Compiler Errors
//!
//! Error types for the buffer compilation passes.
//!
//! Resolution-level anomalies (unknown labels, malformed numeric parameters)
//! are absorbed with defaults or no-ops and never surface here; only a
//! sizing/fill disagreement is fatal.

use thiserror::Error;

/// Errors that can occur while packing render buffers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// The fill pass produced more vertices than the sizing pass counted.
    #[error("vertex buffer overflow: writing {count} vertices into capacity {capacity}")]
    VertexOverflow { count: usize, capacity: usize },

    /// The fill pass produced more indices than the sizing pass counted.
    #[error("index buffer overflow: writing {count} indices into capacity {capacity}")]
    IndexOverflow { count: usize, capacity: usize },
}

impl MeshError {
    /// Creates a vertex overflow error.
    pub fn vertex_overflow(count: usize, capacity: usize) -> Self {
        Self::VertexOverflow { count, capacity }
    }

    /// Creates an index overflow error.
    pub fn index_overflow(count: usize, capacity: usize) -> Self {
        Self::IndexOverflow { count, capacity }
    }
}
