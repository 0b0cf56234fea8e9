//! # Placement Instances
//!
//! One instance per leaf shape generated by the grammar walk, with fully
//! resolved parameters. Instances are immutable once constructed; the
//! compiler reads them and discards them.

use glam::DMat4;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// A single placement of a shape emitted by the grammar interpreter.
///
/// The shape itself is canonical and unit sized; `transform` places it in
/// world space. `param` carries the raw bracket text of the source token
/// (`label[param]`) and `options` the ordered colon options (`label:opt`);
/// both are shape specific and parsed by the compiler's creators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Shape-type token, e.g. `"box"`, `"sphere"`, `"mesh"`.
    pub label: String,
    /// Raw parameter text, empty when the source token carried none.
    pub param: String,
    /// Ordered option strings, e.g. a segment count override.
    pub options: Vec<String>,
    /// Affine placement of the unit canonical shape.
    pub transform: DMat4,
    /// Base RGBA color resolved by the grammar walk for this instance.
    pub color: Rgba,
}

impl Instance {
    /// Creates an instance with no parameter, no options, and opaque white.
    pub fn new(label: impl Into<String>, transform: DMat4) -> Self {
        Self {
            label: label.into(),
            param: String::new(),
            options: Vec::new(),
            transform,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// Sets the raw parameter text.
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    /// Appends one option string.
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Sets the base color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// True when the token carried neither parameter nor options, i.e. the
    /// instance asks for the canonical unit shape of its label.
    pub fn is_plain(&self) -> bool {
        self.param.is_empty() && self.options.is_empty()
    }
}
