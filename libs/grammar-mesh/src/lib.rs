//! # Grammar Mesh
//!
//! Two-pass geometry compiler for shape-grammar output. Consumes the typed,
//! transformed instance stream produced by the grammar interpreter and packs
//! it into one tightly packed renderable mesh: flat position/normal/color
//! attributes plus an index list.
//!
//! ## Architecture
//!
//! ```text
//! grammar interpreter (external) → grammar-ir (Instance stream) → grammar-mesh (RenderBuffers)
//! ```
//!
//! The compiler walks the stream twice. The sizing pass totals vertex and
//! index counts without writing geometry; storage is then allocated once;
//! the fill pass replays the identical stream through a fresh resolver and
//! copies every asset at an advancing cursor. Runs of composable labels
//! (`mesh`, `tube`) are stitched into continuous bands by a stateful
//! composer, which is why both passes must traverse the stream in identical
//! order.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DMat4;
//! use grammar_ir::Instance;
//!
//! let stream = vec![Instance::new("box", DMat4::IDENTITY)];
//! let mesh = grammar_mesh::compile(&stream).unwrap();
//! assert_eq!(mesh.object_count(), 1);
//! ```

pub mod asset;
pub mod compiler;
pub mod composer;
pub mod creator;
pub mod error;
pub mod library;
pub mod primitives;
pub mod resolver;

pub use asset::MeshAsset;
pub use compiler::{BufferCompiler, BuildOptions, RenderBuffers};
pub use composer::Composer;
pub use creator::{AssetKey, PrimitiveCreator};
pub use error::MeshError;
pub use library::{shape_kind, ShapeKind};
pub use resolver::{GeometryResolver, Resolution};

use grammar_ir::{BaseColor, Instance};

/// Compiles an instance stream with default options and per-instance base
/// colors.
///
/// This is the main entry point for callers that need no margins, no
/// dynamic-buffer hint, and no color variation service.
pub fn compile(instances: &[Instance]) -> Result<RenderBuffers, MeshError> {
    BufferCompiler::new().compile(instances, &mut BaseColor)
}
