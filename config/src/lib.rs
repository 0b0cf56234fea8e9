//! # Config Crate
//!
//! Centralized configuration constants for the grammar-mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS};
//!
//! // Clamp a user-supplied tessellation request the way the creators do.
//! let requested = 2u32;
//! let segments = if requested < MIN_SEGMENTS { DEFAULT_SEGMENTS } else { requested };
//! assert_eq!(segments, DEFAULT_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
