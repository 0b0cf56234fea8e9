//! # Primitive Creator
//!
//! On-demand, cached construction of mesh assets. The cache is owned by one
//! compiler session; two instances with the same structured key always
//! resolve to the identical `Arc`, never a recomputed copy.

use std::collections::HashMap;
use std::sync::Arc;

use glam::DVec3;
use grammar_ir::Instance;

use crate::asset::MeshAsset;
use crate::library::{build_canonical, shape_kind, CanonicalShape, ParametricShape, ShapeKind};
use crate::primitives::{
    create_cone, create_cylinder, create_sphere, create_torus, create_triangle,
};
use config::constants::{
    CANONICAL_HEIGHT, CANONICAL_RADIUS, DEFAULT_SEGMENTS, DEFAULT_TORUS_RADIAL_SEGMENTS,
    DEFAULT_TORUS_TUBE_RADIUS, DEFAULT_TORUS_TUBE_SEGMENTS, MIN_SEGMENTS,
};

/// Discretization identity of a cached asset.
///
/// Segment-keyed shapes store the parsed, clamped segment count; torus and
/// triangle assets are identified by their raw parameter text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Canonical(CanonicalShape),
    Sphere { segments: u32 },
    Cylinder { segments: u32 },
    Cone { segments: u32 },
    Torus { param: String },
    Triangle { param: String },
}

/// Session-local asset cache and parameter parsing.
#[derive(Debug, Default)]
pub struct PrimitiveCreator {
    cache: HashMap<AssetKey, Arc<MeshAsset>>,
}

impl PrimitiveCreator {
    /// Creates a creator with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the discrete geometry for an instance, or `None` when its
    /// label contributes none (section labels, non-solid labels, unknown
    /// labels).
    pub fn resolve(&mut self, instance: &Instance) -> Option<Arc<MeshAsset>> {
        match shape_kind(&instance.label)? {
            ShapeKind::Canonical(shape) => {
                Some(self.cached(AssetKey::Canonical(shape), || build_canonical(shape)))
            }
            ShapeKind::Parametric(shape) => Some(self.parametric(shape, instance)),
            ShapeKind::Section(_) | ShapeKind::NonSolid => None,
        }
    }

    /// Number of distinct assets constructed so far.
    pub fn cached_asset_count(&self) -> usize {
        self.cache.len()
    }

    fn parametric(&mut self, shape: ParametricShape, instance: &Instance) -> Arc<MeshAsset> {
        match shape {
            ParametricShape::Sphere => {
                let segments = parse_segments(&instance.options, DEFAULT_SEGMENTS);
                self.cached(AssetKey::Sphere { segments }, || {
                    create_sphere(CANONICAL_RADIUS, segments)
                })
            }
            ParametricShape::Cylinder => {
                let segments = parse_segments(&instance.options, DEFAULT_SEGMENTS);
                self.cached(AssetKey::Cylinder { segments }, || {
                    create_cylinder(CANONICAL_RADIUS, CANONICAL_HEIGHT, segments)
                })
            }
            ParametricShape::Cone => {
                let segments = parse_segments(&instance.options, DEFAULT_SEGMENTS);
                self.cached(AssetKey::Cone { segments }, || {
                    create_cone(CANONICAL_RADIUS, CANONICAL_HEIGHT, segments)
                })
            }
            ParametricShape::Torus => {
                let param = instance.param.clone();
                self.cached(AssetKey::Torus { param }, || {
                    let (tube_radius, radial_segments, tube_segments) =
                        parse_torus_param(&instance.param);
                    create_torus(CANONICAL_RADIUS, tube_radius, radial_segments, tube_segments)
                })
            }
            ParametricShape::Triangle => {
                let param = instance.param.clone();
                self.cached(AssetKey::Triangle { param }, || {
                    create_triangle(parse_triangle_param(&instance.param))
                })
            }
        }
    }

    fn cached(&mut self, key: AssetKey, build: impl FnOnce() -> MeshAsset) -> Arc<MeshAsset> {
        if let Some(asset) = self.cache.get(&key) {
            return Arc::clone(asset);
        }
        log::trace!("building asset for {key:?}");
        let asset = Arc::new(build());
        self.cache.insert(key, Arc::clone(&asset));
        asset
    }
}

/// Parses a segment count from the first option string.
///
/// Fractional values truncate; absent, malformed, or sub-minimum values fall
/// back to the given default.
pub(crate) fn parse_segments(options: &[String], default: u32) -> u32 {
    let Some(value) = options.first().and_then(|opt| opt.trim().parse::<f64>().ok()) else {
        return default;
    };
    if !value.is_finite() || value < MIN_SEGMENTS as f64 {
        return default;
    }
    value as u32
}

/// Splits a parameter string on whitespace and `,;:` into f64 tokens;
/// unparseable tokens read as 0.
fn parse_numbers(param: &str) -> Vec<f64> {
    param
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';' || c == ':')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<f64>().unwrap_or(0.0))
        .collect()
}

/// Parses the torus parameter text: `tube_radius, radial_segments,
/// tube_segments`, each falling back to its default when absent or invalid.
fn parse_torus_param(param: &str) -> (f64, u32, u32) {
    let numbers = parse_numbers(param);

    let tube_radius = match numbers.first() {
        Some(&radius) if radius > 0.0 => radius,
        _ => DEFAULT_TORUS_TUBE_RADIUS,
    };
    let radial_segments = match numbers.get(1) {
        Some(&segments) if segments >= MIN_SEGMENTS as f64 => segments as u32,
        _ => DEFAULT_TORUS_RADIAL_SEGMENTS,
    };
    let tube_segments = match numbers.get(2) {
        Some(&segments) if segments >= MIN_SEGMENTS as f64 => segments as u32,
        _ => DEFAULT_TORUS_TUBE_SEGMENTS,
    };

    (tube_radius, radial_segments, tube_segments)
}

/// Parses nine corner coordinates for a raw triangle; missing values read
/// as 0, surplus values are ignored.
fn parse_triangle_param(param: &str) -> [DVec3; 3] {
    let mut coords = [0.0; 9];
    for (slot, value) in coords.iter_mut().zip(parse_numbers(param)) {
        *slot = value;
    }
    [
        DVec3::new(coords[0], coords[1], coords[2]),
        DVec3::new(coords[3], coords[4], coords[5]),
        DVec3::new(coords[6], coords[7], coords[8]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DMat4;

    fn plain(label: &str) -> Instance {
        Instance::new(label, DMat4::IDENTITY)
    }

    #[test]
    fn test_same_key_shares_the_asset() {
        let mut creator = PrimitiveCreator::new();
        let a = creator.resolve(&plain("sphere").with_option("16")).unwrap();
        let b = creator.resolve(&plain("sphere").with_option("16")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(creator.cached_asset_count(), 1);
    }

    #[test]
    fn test_different_segments_build_distinct_assets() {
        let mut creator = PrimitiveCreator::new();
        let a = creator.resolve(&plain("sphere").with_option("16")).unwrap();
        let b = creator.resolve(&plain("sphere").with_option("12")).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(creator.cached_asset_count(), 2);
    }

    #[test]
    fn test_plain_parametric_instance_uses_default_segments() {
        let mut creator = PrimitiveCreator::new();
        let plain_sphere = creator.resolve(&plain("sphere")).unwrap();
        let explicit = creator.resolve(&plain("sphere").with_option("8")).unwrap();
        assert!(Arc::ptr_eq(&plain_sphere, &explicit));
    }

    #[test]
    fn test_malformed_option_falls_back_to_default() {
        let mut creator = PrimitiveCreator::new();
        let garbage = creator
            .resolve(&plain("cylinder").with_option("lots"))
            .unwrap();
        let default = creator.resolve(&plain("cylinder")).unwrap();
        assert!(Arc::ptr_eq(&garbage, &default));
    }

    #[test]
    fn test_sub_minimum_segment_count_falls_back() {
        let mut creator = PrimitiveCreator::new();
        let two = creator.resolve(&plain("cone").with_option("2")).unwrap();
        let default = creator.resolve(&plain("cone")).unwrap();
        assert!(Arc::ptr_eq(&two, &default));
    }

    #[test]
    fn test_section_and_nonsolid_labels_have_no_discrete_geometry() {
        let mut creator = PrimitiveCreator::new();
        assert!(creator.resolve(&plain("mesh")).is_none());
        assert!(creator.resolve(&plain("tube")).is_none());
        assert!(creator.resolve(&plain("grid")).is_none());
    }

    #[test]
    fn test_unknown_label_has_no_geometry() {
        let mut creator = PrimitiveCreator::new();
        assert!(creator.resolve(&plain("widget")).is_none());
        assert_eq!(creator.cached_asset_count(), 0);
    }

    #[test]
    fn test_canonical_box_is_shared() {
        let mut creator = PrimitiveCreator::new();
        let a = creator.resolve(&plain("box")).unwrap();
        let b = creator.resolve(&plain("box")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.vertex_count(), 24);
    }

    #[test]
    fn test_parse_segments_truncates_fractions() {
        assert_eq!(parse_segments(&["16.7".to_string()], 8), 16);
    }

    #[test]
    fn test_parse_torus_param_defaults() {
        assert_eq!(parse_torus_param(""), (0.1, 4, 8));
        assert_eq!(parse_torus_param("0.25"), (0.25, 4, 8));
        assert_eq!(parse_torus_param("0.25,6,12"), (0.25, 6, 12));
        assert_eq!(parse_torus_param("0.25 2 2"), (0.25, 4, 8));
        assert_eq!(parse_torus_param("junk"), (0.1, 4, 8));
    }

    #[test]
    fn test_torus_cache_keys_on_raw_param() {
        let mut creator = PrimitiveCreator::new();
        let a = creator
            .resolve(&plain("torus").with_param("0.2,4,8"))
            .unwrap();
        let b = creator
            .resolve(&plain("torus").with_param("0.2,4,8"))
            .unwrap();
        // Equivalent but textually different params build separately.
        let c = creator
            .resolve(&plain("torus").with_param("0.2 4 8"))
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(*a, *c);
    }

    #[test]
    fn test_triangle_param_parsing() {
        let mut creator = PrimitiveCreator::new();
        let asset = creator
            .resolve(&plain("triangle").with_param("0,0,0 1,0,0 0,1,0"))
            .unwrap();
        assert_eq!(asset.vertex_count(), 3);
        assert_eq!(asset.positions()[1], DVec3::X);
        assert_eq!(asset.positions()[2], DVec3::Y);
    }
}
