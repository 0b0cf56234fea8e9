//! # Shape Registry
//!
//! Closed mapping from shape labels to the small set of shape kinds the
//! resolver understands. Dispatching on an enum (instead of stringly-keyed
//! function tables) keeps the label set checkable in one place.

use crate::asset::MeshAsset;
use crate::primitives::{
    create_cuboid, create_dodecahedron, create_icosahedron, create_octahedron,
    create_tetrahedron,
};
use config::constants::CANONICAL_RADIUS;
use glam::DVec3;

/// Labels whose geometry is a fixed unit asset with no parametric variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalShape {
    Box,
    Tetra,
    Octa,
    Dodeca,
    Icosa,
}

/// Labels built by a creator function, cached by discretization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParametricShape {
    Sphere,
    Cylinder,
    Cone,
    Torus,
    Triangle,
}

/// Labels denoting a cross-section of a continuous stitched surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Square band profile (`mesh` runs).
    Band,
    /// Circular tube profile (`tube` runs).
    Tube,
}

/// What a recognized label resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// Shared unit asset.
    Canonical(CanonicalShape),
    /// Cached parametric builder; plain instances get the default key.
    Parametric(ParametricShape),
    /// Cross-section label handled by the composer.
    Section(SectionKind),
    /// Recognized label with no triangle geometry (handled by out-of-scope
    /// line/point pipelines).
    NonSolid,
}

/// Maps a label to its shape kind, or `None` for unknown labels.
///
/// Unknown labels are not an error: they contribute no geometry but still
/// advance the stream (and terminate composable runs).
pub fn shape_kind(label: &str) -> Option<ShapeKind> {
    match label {
        "box" => Some(ShapeKind::Canonical(CanonicalShape::Box)),
        "tetra" => Some(ShapeKind::Canonical(CanonicalShape::Tetra)),
        "octa" => Some(ShapeKind::Canonical(CanonicalShape::Octa)),
        "dodeca" => Some(ShapeKind::Canonical(CanonicalShape::Dodeca)),
        "icosa" => Some(ShapeKind::Canonical(CanonicalShape::Icosa)),
        "sphere" => Some(ShapeKind::Parametric(ParametricShape::Sphere)),
        "cylinder" => Some(ShapeKind::Parametric(ParametricShape::Cylinder)),
        "cone" => Some(ShapeKind::Parametric(ParametricShape::Cone)),
        "torus" => Some(ShapeKind::Parametric(ParametricShape::Torus)),
        "triangle" => Some(ShapeKind::Parametric(ParametricShape::Triangle)),
        "mesh" => Some(ShapeKind::Section(SectionKind::Band)),
        "tube" => Some(ShapeKind::Section(SectionKind::Tube)),
        "grid" | "line" | "point" => Some(ShapeKind::NonSolid),
        _ => None,
    }
}

/// Builds the shared unit asset for a canonical shape.
pub fn build_canonical(shape: CanonicalShape) -> MeshAsset {
    match shape {
        CanonicalShape::Box => create_cuboid(DVec3::ONE),
        CanonicalShape::Tetra => create_tetrahedron(CANONICAL_RADIUS),
        CanonicalShape::Octa => create_octahedron(CANONICAL_RADIUS),
        CanonicalShape::Dodeca => create_dodecahedron(CANONICAL_RADIUS),
        CanonicalShape::Icosa => create_icosahedron(CANONICAL_RADIUS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_resolve() {
        assert_eq!(
            shape_kind("box"),
            Some(ShapeKind::Canonical(CanonicalShape::Box))
        );
        assert_eq!(
            shape_kind("sphere"),
            Some(ShapeKind::Parametric(ParametricShape::Sphere))
        );
        assert_eq!(
            shape_kind("mesh"),
            Some(ShapeKind::Section(SectionKind::Band))
        );
        assert_eq!(
            shape_kind("tube"),
            Some(ShapeKind::Section(SectionKind::Tube))
        );
        assert_eq!(shape_kind("grid"), Some(ShapeKind::NonSolid));
    }

    #[test]
    fn test_unknown_label_resolves_to_none() {
        assert_eq!(shape_kind("widget"), None);
        assert_eq!(shape_kind(""), None);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(shape_kind("Box"), None);
    }

    #[test]
    fn test_canonical_assets_are_unit_sized() {
        for shape in [
            CanonicalShape::Box,
            CanonicalShape::Tetra,
            CanonicalShape::Octa,
            CanonicalShape::Dodeca,
            CanonicalShape::Icosa,
        ] {
            let asset = build_canonical(shape);
            let (min, max) = asset.bounding_box();
            assert!(min.cmpge(DVec3::splat(-0.51)).all(), "{shape:?} too large");
            assert!(max.cmple(DVec3::splat(0.51)).all(), "{shape:?} too large");
            assert!(asset.validate(), "{shape:?} invalid");
        }
    }
}
