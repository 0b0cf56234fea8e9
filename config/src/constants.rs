//! # Configuration Constants
//!
//! Centralized constants for the grammar-mesh pipeline. Tessellation
//! defaults, cross-section profiles, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters
//! - **Canonical shapes**: Unit dimensions of the primitive library
//! - **Composition**: Cross-section profiles for continuous surfaces

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default tessellation segment count for shapes with angular resolution
/// (sphere, cylinder, cone, tube cross-sections).
///
/// Applied whenever an instance carries no segment option or the option
/// fails to parse.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let parsed: Option<u32> = None;
/// assert_eq!(parsed.unwrap_or(DEFAULT_SEGMENTS), 8);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 8;

/// Minimum accepted segment count.
///
/// Fewer than three segments cannot close a polygon; requests below this
/// fall back to [`DEFAULT_SEGMENTS`] rather than failing.
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// CANONICAL SHAPE CONSTANTS
// =============================================================================

/// Circumscribed radius of the unit-sized canonical shapes.
///
/// Canonical shapes fit a unit bounding volume centered at the origin, so
/// spheres, cylinder caps, and polyhedra all use radius 0.5.
pub const CANONICAL_RADIUS: f64 = 0.5;

/// Height of the canonical cylinder and cone, measured along their X axis.
pub const CANONICAL_HEIGHT: f64 = 1.0;

/// Default tube radius of the torus when the instance parameter omits it.
pub const DEFAULT_TORUS_TUBE_RADIUS: f64 = 0.1;

/// Default segment count around the torus tube cross-section.
pub const DEFAULT_TORUS_RADIAL_SEGMENTS: u32 = 4;

/// Default segment count around the torus ring.
pub const DEFAULT_TORUS_TUBE_SEGMENTS: u32 = 8;

// =============================================================================
// COMPOSITION CONSTANTS
// =============================================================================

/// Side count of the band cross-section stitched for `mesh` runs.
pub const BAND_SECTION_SIDES: u32 = 4;

/// Corner radius of the band cross-section profile.
///
/// The four corners of the diamond profile sit at half the diagonal of the
/// unit square cross-section, i.e. `1 / sqrt(2)` times the half-basis.
pub const BAND_SECTION_RADIUS: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Default side count of the circular cross-section stitched for `tube` runs.
pub const TUBE_SECTION_SIDES: u32 = 8;

/// Profile radius of the tube cross-section, matching the canonical
/// cylinder radius.
pub const TUBE_SECTION_RADIUS: f64 = 0.5;
