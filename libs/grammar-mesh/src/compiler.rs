//! # Buffer Compiler
//!
//! Drives the instance stream twice through the resolver: a sizing pass that
//! only sums asset sizes, then a fill pass that copies every asset into
//! storage allocated once from those totals. The passes must resolve
//! identically (the resolver is rebuilt and the color sequence reset for
//! each), so the sized bounds are binding; a fill write past them aborts the
//! build instead of growing or overwriting.

use glam::DMat4;
use grammar_ir::{ColorSequence, Instance, Rgba};
use serde::Serialize;

use crate::asset::MeshAsset;
use crate::error::MeshError;
use crate::resolver::GeometryResolver;

/// Build configuration.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Extra vertex capacity allocated beyond the sized total, for later
    /// in-place appends at the rendering boundary.
    pub vertex_margin: usize,
    /// Extra index capacity allocated beyond the sized total.
    pub index_margin: usize,
    /// Marks the buffers as frequently mutated. Consumed by the rendering
    /// boundary only; the compiler just carries it.
    pub dynamic: bool,
}

/// The packed, renderable result of a build.
///
/// Flat f32 attributes (3 position floats, 3 normal floats, 4 color floats
/// per vertex) plus a u32 index list. The scalar counts report the filled
/// totals; margins only enlarge capacity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderBuffers {
    positions: Vec<f32>,
    normals: Vec<f32>,
    colors: Vec<f32>,
    indices: Vec<u32>,
    vertex_count: usize,
    index_count: usize,
    object_count: usize,
    dynamic: bool,
}

impl RenderBuffers {
    /// Flat vertex positions, 3 floats per vertex.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat vertex normals, 3 floats per vertex.
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Flat vertex colors, RGBA, 4 floats per vertex.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Triangle indices into the vertex attributes.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices written by the fill pass.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of indices written by the fill pass.
    pub fn index_count(&self) -> usize {
        self.index_count
    }

    /// Number of assets copied by the fill pass.
    pub fn object_count(&self) -> usize {
        self.object_count
    }

    /// Allocated vertex capacity (filled count plus margin).
    pub fn vertex_capacity(&self) -> usize {
        self.positions.len() / 3
    }

    /// Allocated index capacity (filled count plus margin).
    pub fn index_capacity(&self) -> usize {
        self.indices.len()
    }

    /// Whether the rendering boundary should expect frequent mutation.
    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    fn allocate(totals: &StreamTotals, options: &BuildOptions) -> Self {
        let vertex_capacity = totals.vertices + options.vertex_margin;
        let index_capacity = totals.indices + options.index_margin;
        Self {
            positions: vec![0.0; vertex_capacity * 3],
            normals: vec![0.0; vertex_capacity * 3],
            colors: vec![0.0; vertex_capacity * 4],
            indices: vec![0; index_capacity],
            vertex_count: 0,
            index_count: 0,
            object_count: 0,
            dynamic: options.dynamic,
        }
    }

    /// Copies one asset at the cursor, transforming when a placement matrix
    /// is given (composed assets are already in world space).
    fn append(
        &mut self,
        asset: &MeshAsset,
        color: Rgba,
        transform: Option<&DMat4>,
        cursor: &mut WriteCursor,
    ) -> Result<(), MeshError> {
        let vertex_count = asset.vertex_count();
        let index_count = asset.index_count();

        if cursor.vertex + vertex_count > self.vertex_capacity() {
            return Err(MeshError::vertex_overflow(
                cursor.vertex + vertex_count,
                self.vertex_capacity(),
            ));
        }
        if cursor.index + index_count > self.index_capacity() {
            return Err(MeshError::index_overflow(
                cursor.index + index_count,
                self.index_capacity(),
            ));
        }

        // Normals use the inverse-transpose of the linear part so
        // non-uniform scale keeps them perpendicular.
        let normal_matrix = transform.map(|m| m.inverse().transpose());

        for (i, (&position, &normal)) in
            asset.positions().iter().zip(asset.normals()).enumerate()
        {
            let (p, n) = match (transform, &normal_matrix) {
                (Some(m), Some(nm)) => (
                    m.transform_point3(position),
                    nm.transform_vector3(normal).normalize_or_zero(),
                ),
                _ => (position, normal),
            };

            let v3 = (cursor.vertex + i) * 3;
            self.positions[v3] = p.x as f32;
            self.positions[v3 + 1] = p.y as f32;
            self.positions[v3 + 2] = p.z as f32;
            self.normals[v3] = n.x as f32;
            self.normals[v3 + 1] = n.y as f32;
            self.normals[v3 + 2] = n.z as f32;

            let v4 = (cursor.vertex + i) * 4;
            self.colors[v4..v4 + 4].copy_from_slice(&color);
        }

        let offset = cursor.vertex as u32;
        for tri in asset.triangles() {
            for &index in tri {
                self.indices[cursor.index] = index + offset;
                cursor.index += 1;
            }
        }

        cursor.vertex += vertex_count;
        cursor.objects += 1;
        Ok(())
    }
}

/// Totals accumulated by the sizing pass.
#[derive(Debug, Clone, Copy, Default)]
struct StreamTotals {
    vertices: usize,
    indices: usize,
    objects: usize,
}

impl StreamTotals {
    fn add_asset(&mut self, asset: &MeshAsset) {
        self.vertices += asset.vertex_count();
        self.indices += asset.index_count();
        self.objects += 1;
    }
}

/// Fill-pass write position.
#[derive(Debug, Default)]
struct WriteCursor {
    vertex: usize,
    index: usize,
    objects: usize,
}

/// Two-pass compiler from an instance stream to packed render buffers.
#[derive(Debug, Clone, Default)]
pub struct BufferCompiler {
    options: BuildOptions,
}

impl BufferCompiler {
    /// Creates a compiler with default options (no margins, static buffers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compiler with explicit options.
    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Compiles the stream into packed buffers.
    ///
    /// The stream is traversed twice and must replay identically; the slice
    /// input guarantees that. Fails only on a sizing/fill disagreement,
    /// which indicates resolver nondeterminism, never on stream content.
    pub fn compile<C: ColorSequence>(
        &self,
        instances: &[Instance],
        colors: &mut C,
    ) -> Result<RenderBuffers, MeshError> {
        let totals = Self::measure(instances, colors);
        log::debug!(
            "sized {} instances: {} vertices, {} indices, {} objects",
            instances.len(),
            totals.vertices,
            totals.indices,
            totals.objects
        );

        let mut buffers = RenderBuffers::allocate(&totals, &self.options);
        Self::fill(instances, colors, &mut buffers)?;
        Ok(buffers)
    }

    /// Sizing pass: totals only, no writes.
    fn measure<C: ColorSequence>(instances: &[Instance], colors: &mut C) -> StreamTotals {
        colors.reset();
        let mut resolver = GeometryResolver::new();
        let mut totals = StreamTotals::default();

        for instance in instances {
            let resolution = resolver.resolve(instance, colors);
            if let Some((asset, _)) = &resolution.composed {
                totals.add_asset(asset);
            }
            if let Some((asset, _)) = &resolution.discrete {
                totals.add_asset(asset);
            }
        }
        if let Some((asset, _)) = resolver.finish(colors) {
            totals.add_asset(&asset);
        }

        totals
    }

    /// Fill pass: replays the stream through a fresh resolver and copies
    /// each asset at the advancing cursor.
    fn fill<C: ColorSequence>(
        instances: &[Instance],
        colors: &mut C,
        buffers: &mut RenderBuffers,
    ) -> Result<(), MeshError> {
        colors.reset();
        let mut resolver = GeometryResolver::new();
        let mut cursor = WriteCursor::default();

        for instance in instances {
            let resolution = resolver.resolve(instance, colors);
            if let Some((asset, color)) = resolution.composed {
                buffers.append(&asset, color, None, &mut cursor)?;
            }
            if let Some((asset, color)) = resolution.discrete {
                buffers.append(&asset, color, Some(&instance.transform), &mut cursor)?;
            }
        }
        if let Some((asset, color)) = resolver.finish(colors) {
            buffers.append(&asset, color, None, &mut cursor)?;
        }

        buffers.vertex_count = cursor.vertex;
        buffers.index_count = cursor.index;
        buffers.object_count = cursor.objects;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DMat4, DVec3};
    use grammar_ir::BaseColor;

    fn at(label: &str, origin: DVec3) -> Instance {
        Instance::new(label, DMat4::from_translation(origin))
    }

    #[test]
    fn test_empty_stream_yields_empty_buffers() {
        let buffers = BufferCompiler::new().compile(&[], &mut BaseColor).unwrap();
        assert_eq!(buffers.vertex_count(), 0);
        assert_eq!(buffers.index_count(), 0);
        assert_eq!(buffers.object_count(), 0);
        assert!(buffers.positions().is_empty());
    }

    #[test]
    fn test_fill_writes_exactly_the_sized_counts() {
        let stream = vec![
            at("box", DVec3::ZERO),
            at("sphere", DVec3::X),
            at("widget", DVec3::Y),
        ];
        let buffers = BufferCompiler::new().compile(&stream, &mut BaseColor).unwrap();
        assert_eq!(buffers.vertex_count(), buffers.vertex_capacity());
        assert_eq!(buffers.index_count(), buffers.index_capacity());
        assert_eq!(buffers.positions().len(), buffers.vertex_count() * 3);
        assert_eq!(buffers.normals().len(), buffers.vertex_count() * 3);
        assert_eq!(buffers.colors().len(), buffers.vertex_count() * 4);
    }

    #[test]
    fn test_margins_enlarge_capacity_not_counts() {
        let stream = vec![at("box", DVec3::ZERO)];
        let compiler = BufferCompiler::with_options(BuildOptions {
            vertex_margin: 10,
            index_margin: 30,
            dynamic: true,
        });
        let buffers = compiler.compile(&stream, &mut BaseColor).unwrap();
        assert_eq!(buffers.vertex_count(), 24);
        assert_eq!(buffers.index_count(), 36);
        assert_eq!(buffers.vertex_capacity(), 34);
        assert_eq!(buffers.index_capacity(), 66);
        assert!(buffers.is_dynamic());
    }

    #[test]
    fn test_translation_applies_to_every_vertex() {
        let translation = DVec3::new(3.0, -2.0, 7.0);
        let stream = vec![at("box", DVec3::ZERO), at("box", translation)];
        let buffers = BufferCompiler::new().compile(&stream, &mut BaseColor).unwrap();

        let block = 24 * 3;
        for i in 0..24 {
            let a = DVec3::new(
                f64::from(buffers.positions()[i * 3]),
                f64::from(buffers.positions()[i * 3 + 1]),
                f64::from(buffers.positions()[i * 3 + 2]),
            );
            let b = DVec3::new(
                f64::from(buffers.positions()[block + i * 3]),
                f64::from(buffers.positions()[block + i * 3 + 1]),
                f64::from(buffers.positions()[block + i * 3 + 2]),
            );
            assert!((b - a - translation).length() < 1e-6);
        }
        // Translation leaves normals untouched.
        assert_eq!(
            &buffers.normals()[..block],
            &buffers.normals()[block..2 * block]
        );
    }

    #[test]
    fn test_uniform_scale_scales_every_vertex() {
        let scale = 2.5;
        let stream = vec![
            at("box", DVec3::ZERO),
            Instance::new("box", DMat4::from_scale(DVec3::splat(scale))),
        ];
        let buffers = BufferCompiler::new().compile(&stream, &mut BaseColor).unwrap();

        let block = 24 * 3;
        for i in 0..block {
            let canonical = f64::from(buffers.positions()[i]);
            let scaled = f64::from(buffers.positions()[block + i]);
            assert!((scaled - canonical * scale).abs() < 1e-6);
        }
    }

    #[test]
    fn test_second_asset_indices_are_rebased() {
        let stream = vec![at("box", DVec3::ZERO), at("box", DVec3::X)];
        let buffers = BufferCompiler::new().compile(&stream, &mut BaseColor).unwrap();

        let first = &buffers.indices()[..36];
        let second = &buffers.indices()[36..72];
        for (a, b) in first.iter().zip(second) {
            assert_eq!(b - a, 24);
        }
    }

    #[test]
    fn test_composed_assets_are_not_retransformed() {
        // Band corners are materialized in world space by the composer; the
        // fill pass must copy them without applying the instance transform
        // a second time.
        let stream = vec![at("mesh", DVec3::ZERO), at("mesh", DVec3::X)];
        let buffers = BufferCompiler::new().compile(&stream, &mut BaseColor).unwrap();

        let radius = config::constants::BAND_SECTION_RADIUS as f32;
        for chunk in buffers.positions().chunks(3) {
            assert!(chunk[0] >= -1e-6 && chunk[0] <= 1.0 + 1e-6);
            assert!(chunk[1].abs() <= radius + 1e-6);
            assert!(chunk[2].abs() <= radius + 1e-6);
        }
    }

    #[test]
    fn test_colors_fill_per_vertex() {
        let red = [1.0, 0.0, 0.0, 0.5];
        let stream = vec![at("box", DVec3::ZERO).with_color(red)];
        let buffers = BufferCompiler::new().compile(&stream, &mut BaseColor).unwrap();
        for chunk in buffers.colors().chunks(4) {
            assert_eq!(chunk, red);
        }
    }
}
