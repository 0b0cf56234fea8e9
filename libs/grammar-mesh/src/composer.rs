//! # Continuous-Surface Composer
//!
//! Some labels denote not a discrete shape but a cross-section of a
//! continuous surface: a run of consecutive same-label instances becomes one
//! stitched band of `run length - 1` segments. The composer accumulates one
//! frame per instance and emits the connecting skin when the run ends, on a
//! label change or at the end of the stream.
//!
//! The composer is order-dependent state. Both compiler passes traverse the
//! stream with a freshly reset composer so sizing and fill agree; it is
//! never shared across builds.

use glam::{DQuat, DVec3};
use grammar_ir::Instance;

use crate::asset::MeshAsset;
use crate::creator::parse_segments;
use crate::library::{shape_kind, SectionKind, ShapeKind};
use config::constants::{
    BAND_SECTION_RADIUS, BAND_SECTION_SIDES, TUBE_SECTION_RADIUS, TUBE_SECTION_SIDES,
};

/// Cross-section profile stitched along a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionProfile {
    /// Corners per cross-section.
    pub sides: u32,
    /// Profile radius as a factor of the instance's half-basis vectors.
    pub radius: f64,
}

impl SectionProfile {
    /// Resolves the profile for a run from its kind and the first
    /// instance's options.
    fn resolve(kind: SectionKind, options: &[String]) -> Self {
        match kind {
            SectionKind::Band => Self {
                sides: BAND_SECTION_SIDES,
                radius: BAND_SECTION_RADIUS,
            },
            SectionKind::Tube => Self {
                sides: parse_segments(options, TUBE_SECTION_SIDES),
                radius: TUBE_SECTION_RADIUS,
            },
        }
    }
}

/// Origin and orthogonal basis of one cross-section, extracted from the
/// instance transform, plus the rotation accumulated while aligning the
/// section to the run direction.
#[derive(Debug, Clone)]
struct SectionFrame {
    origin: DVec3,
    forward: DVec3,
    half_y: DVec3,
    half_z: DVec3,
    rotation: DQuat,
}

impl SectionFrame {
    fn from_instance(instance: &Instance, radius: f64) -> Self {
        let m = &instance.transform;
        let w = m.w_axis;
        Self {
            origin: DVec3::new(w.x, w.y, w.z) / w.w,
            forward: m.x_axis.truncate(),
            half_y: m.y_axis.truncate() * radius,
            half_z: m.z_axis.truncate() * radius,
            rotation: DQuat::IDENTITY,
        }
    }
}

/// One in-progress run of composable instances.
#[derive(Debug)]
struct Run {
    profile: SectionProfile,
    frame: SectionFrame,
    corners: Vec<DVec3>,
}

impl Run {
    fn begin(instance: &Instance, profile: SectionProfile) -> Self {
        Self {
            profile,
            frame: SectionFrame::from_instance(instance, profile.radius),
            corners: Vec::new(),
        }
    }

    /// Folds the next same-label instance into the run: aligns the stored
    /// frame's forward axis to the direction between origins, pushes the
    /// stored section's corners, and keeps the new frame (with the applied
    /// rotation) for the next step.
    fn extend(&mut self, instance: &Instance) {
        let next = SectionFrame::from_instance(instance, self.profile.radius);
        let rotation = match (
            (next.origin - self.frame.origin).try_normalize(),
            self.frame.forward.try_normalize(),
        ) {
            (Some(direction), Some(forward)) => DQuat::from_rotation_arc(forward, direction),
            // Coincident origins or a degenerate basis keep the previous
            // alignment.
            _ => self.frame.rotation,
        };
        self.push_section(rotation);
        self.frame = SectionFrame { rotation, ..next };
    }

    fn push_section(&mut self, rotation: DQuat) {
        let sides = self.profile.sides;
        for j in 0..sides {
            let theta = std::f64::consts::TAU * f64::from(j) / f64::from(sides);
            let offset = rotation * (self.frame.half_y * theta.cos() + self.frame.half_z * theta.sin());
            self.corners.push(self.frame.origin + offset);
        }
    }

    /// Closes the run: pushes the final section with its accumulated
    /// rotation and stitches the band. Runs of fewer than two sections
    /// yield nothing.
    fn into_band(mut self) -> Option<MeshAsset> {
        let rotation = self.frame.rotation;
        self.push_section(rotation);

        let sides = self.profile.sides as usize;
        let vmax = self.corners.len();
        if vmax < 2 * sides {
            return None;
        }

        let mut asset = MeshAsset::with_capacity(vmax * 2, (vmax - sides) * 2);

        // The corner stack is laid out twice: even profile edges index the
        // first copy, odd edges the second, so averaged normals stay crisp
        // across profile corners while smooth along the band.
        for &corner in &self.corners {
            asset.add_vertex(corner);
        }
        for &corner in &self.corners {
            asset.add_vertex(corner);
        }

        for section in (0..vmax - sides).step_by(sides) {
            for edge in 0..sides {
                let base = if edge % 2 == 0 { section } else { section + vmax };
                let next_edge = (edge + 1) % sides;
                let a = (base + edge) as u32;
                let b = (base + next_edge) as u32;
                let c = (base + next_edge + sides) as u32;
                let d = (base + edge + sides) as u32;
                asset.add_triangle(a, b, c);
                asset.add_triangle(a, c, d);
            }
        }

        asset.compute_normals();
        Some(asset)
    }
}

/// Stateful stitcher over the instance stream.
#[derive(Debug, Default)]
pub struct Composer {
    previous_label: Option<String>,
    run: Option<Run>,
}

impl Composer {
    /// Creates an idle composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next stream element.
    ///
    /// Returns the stitched band of the *previous* run when this instance's
    /// label ends it. A composable instance with a different predecessor
    /// label both flushes the old run and starts a new one.
    pub fn advance(&mut self, instance: &Instance) -> Option<MeshAsset> {
        let same_label = self.previous_label.as_deref() == Some(instance.label.as_str());
        self.previous_label = Some(instance.label.clone());

        if same_label {
            if let Some(run) = &mut self.run {
                run.extend(instance);
            }
            return None;
        }

        let flushed = self.run.take().and_then(Run::into_band);
        if let Some(ShapeKind::Section(kind)) = shape_kind(&instance.label) {
            let profile = SectionProfile::resolve(kind, &instance.options);
            self.run = Some(Run::begin(instance, profile));
        }
        flushed
    }

    /// Flushes the trailing run at the end of the stream and resets to idle.
    pub fn finish(&mut self) -> Option<MeshAsset> {
        self.previous_label = None;
        self.run.take().and_then(Run::into_band)
    }
}
