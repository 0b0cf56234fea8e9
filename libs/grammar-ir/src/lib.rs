//! # Grammar IR
//!
//! Boundary types between the shape-grammar interpreter and the geometry
//! compiler. The interpreter walks its derivation tree and emits one
//! [`Instance`] per generated leaf shape; the compiler consumes that stream
//! twice (sizing pass, fill pass) and never feeds anything back.
//!
//! ## Architecture
//!
//! ```text
//! grammar interpreter (external) → grammar-ir (Instance stream) → grammar-mesh (RenderBuffers)
//! ```
//!
//! The stream must be replayable: the compiler iterates the identical
//! sequence twice. A materialized `&[Instance]` slice satisfies this
//! trivially and is the only stream form the compiler accepts.

pub mod color;
pub mod instance;

pub use color::{BaseColor, ColorSequence, CyclingTint, Rgba};
pub use instance::Instance;
