//! # Geometry Resolver
//!
//! Per stream element, two independent resolutions may both fire: the
//! composer can flush the band of the *previous* run, and the element's own
//! label can resolve to a discrete asset. The resolver pairs each emitted
//! asset with a color drawn from the variation sequence, advancing it
//! exactly once per asset so both compiler passes observe the same colors.

use std::sync::Arc;

use grammar_ir::{ColorSequence, Instance, Rgba};

use crate::asset::MeshAsset;
use crate::composer::Composer;
use crate::creator::PrimitiveCreator;

/// Everything one stream element produced.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Band flushed from the previous composable run, already in world
    /// space.
    pub composed: Option<(MeshAsset, Rgba)>,
    /// Shared asset for this element's own label, placed by the element's
    /// transform.
    pub discrete: Option<(Arc<MeshAsset>, Rgba)>,
}

impl Resolution {
    /// Total vertices across both emissions.
    pub fn vertex_count(&self) -> usize {
        self.composed.as_ref().map_or(0, |(a, _)| a.vertex_count())
            + self.discrete.as_ref().map_or(0, |(a, _)| a.vertex_count())
    }

    /// Total indices across both emissions.
    pub fn index_count(&self) -> usize {
        self.composed.as_ref().map_or(0, |(a, _)| a.index_count())
            + self.discrete.as_ref().map_or(0, |(a, _)| a.index_count())
    }

    /// Number of emitted assets (0 to 2).
    pub fn object_count(&self) -> usize {
        usize::from(self.composed.is_some()) + usize::from(self.discrete.is_some())
    }
}

/// Coordinates the creator cache and the composer over one pass.
///
/// Both passes of a build construct a fresh resolver; the replayed stream
/// then resolves identically, which is what makes the sizing totals binding
/// for the fill pass.
#[derive(Debug)]
pub struct GeometryResolver {
    creator: PrimitiveCreator,
    composer: Composer,
    last_base_color: Rgba,
}

impl Default for GeometryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryResolver {
    /// Creates a resolver with an empty cache and an idle composer.
    pub fn new() -> Self {
        Self {
            creator: PrimitiveCreator::new(),
            composer: Composer::new(),
            last_base_color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// Resolves one stream element.
    pub fn resolve(
        &mut self,
        instance: &Instance,
        colors: &mut dyn ColorSequence,
    ) -> Resolution {
        self.last_base_color = instance.color;

        let composed = self
            .composer
            .advance(instance)
            .map(|asset| (asset, colors.advance(instance.color)));
        let discrete = self
            .creator
            .resolve(instance)
            .map(|asset| (asset, colors.advance(instance.color)));

        Resolution { composed, discrete }
    }

    /// Flushes the trailing composable run at the end of the stream.
    ///
    /// The band keeps the base color of the last stream element, the final
    /// section of the run.
    pub fn finish(&mut self, colors: &mut dyn ColorSequence) -> Option<(MeshAsset, Rgba)> {
        let base = self.last_base_color;
        self.composer
            .finish()
            .map(|asset| (asset, colors.advance(base)))
    }

    /// Number of distinct cached assets constructed during this pass.
    pub fn cached_asset_count(&self) -> usize {
        self.creator.cached_asset_count()
    }
}
