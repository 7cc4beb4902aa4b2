use std::f32::consts::{PI, TAU};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::data::palette::{
    Palette, BELL_PALETTE, CANDY_PALETTE, INNER_FILL_PALETTE, JEWEL_PALETTE, LIGHT_PALETTE,
    NEEDLE_PALETTE, ORNAMENT_PALETTE,
};
use crate::math::{Euler, Vec3};
use super::{ConeGeometry, InstanceRecord, ShapeVariant, SurfacePlacement};

/// Half-turns of the needle spiral over the full height
const NEEDLE_SPIRAL: f32 = 65.0;
/// Half-turns of the light string, looser than the needles
const LIGHT_SPIRAL: f32 = 34.0;
/// Inner fill stays inside the needle shell
const INNER_FILL_RADIUS: f32 = 0.9;
/// Share of geometric ornaments that are boxes
const BOX_THRESHOLD: f32 = 0.4;
/// Share of boxes that stay cubic; the rest become tall gifts
const CUBE_THRESHOLD: f32 = 0.5;

/// Shape family of a layer, selecting how its instances are sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Needles,
    InnerFill,
    Geometric,
    Candies,
    Bells,
    Ornaments,
    Lights,
}

/// How an instance is placed on or inside the cone
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sampling {
    /// Even by index, wound many times, thickening toward the base
    NeedleSpiral,
    /// Uniform random through the cone's volume
    InnerVolume,
    /// Even by index along a looser spiral
    LightSpiral,
    /// Random height inside `[min, min + span)`, random azimuth
    Band { min: f32, span: f32, offset: f32 },
}

/// Intrinsic orientation policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationPolicy {
    Zero,
    /// Each axis uniform in `[0, magnitude)`
    Random(f32),
}

/// Per-kind generation constants
#[derive(Debug, Clone, Copy)]
pub struct LayerProfile {
    /// Edge length of the scatter cube
    pub scatter_width: f32,
    pub scale_min: f32,
    pub scale_span: f32,
    pub sampling: Sampling,
    pub rotation: RotationPolicy,
    pub palette: Palette,
}

impl LayerKind {
    pub const ALL: [LayerKind; 7] = [
        LayerKind::Needles,
        LayerKind::InnerFill,
        LayerKind::Geometric,
        LayerKind::Candies,
        LayerKind::Bells,
        LayerKind::Ornaments,
        LayerKind::Lights,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LayerKind::Needles => "needles",
            LayerKind::InnerFill => "inner_needles",
            LayerKind::Geometric => "geometric",
            LayerKind::Candies => "candies",
            LayerKind::Bells => "bells",
            LayerKind::Ornaments => "ornaments",
            LayerKind::Lights => "lights",
        }
    }

    pub fn profile(&self) -> LayerProfile {
        match self {
            LayerKind::Needles => LayerProfile {
                scatter_width: 50.0,
                scale_min: 0.2,
                scale_span: 0.4,
                sampling: Sampling::NeedleSpiral,
                rotation: RotationPolicy::Random(PI),
                palette: NEEDLE_PALETTE,
            },
            LayerKind::InnerFill => LayerProfile {
                scatter_width: 40.0,
                scale_min: 0.35,
                scale_span: 0.5,
                sampling: Sampling::InnerVolume,
                rotation: RotationPolicy::Random(PI),
                palette: INNER_FILL_PALETTE,
            },
            LayerKind::Geometric => LayerProfile {
                scatter_width: 45.0,
                scale_min: 0.35,
                scale_span: 0.45,
                sampling: Sampling::Band { min: 0.1, span: 0.85, offset: 1.05 },
                rotation: RotationPolicy::Random(PI),
                palette: JEWEL_PALETTE,
            },
            LayerKind::Candies => LayerProfile {
                scatter_width: 40.0,
                scale_min: 0.3,
                scale_span: 0.2,
                sampling: Sampling::Band { min: 0.15, span: 0.75, offset: 1.02 },
                rotation: RotationPolicy::Random(1.0),
                palette: CANDY_PALETTE,
            },
            LayerKind::Bells => LayerProfile {
                scatter_width: 35.0,
                scale_min: 0.4,
                scale_span: 0.3,
                sampling: Sampling::Band { min: 0.2, span: 0.7, offset: 1.03 },
                rotation: RotationPolicy::Zero,
                palette: BELL_PALETTE,
            },
            LayerKind::Ornaments => LayerProfile {
                scatter_width: 40.0,
                scale_min: 0.2,
                scale_span: 0.4,
                sampling: Sampling::Band { min: 0.1, span: 0.85, offset: 1.01 },
                rotation: RotationPolicy::Zero,
                palette: ORNAMENT_PALETTE,
            },
            LayerKind::Lights => LayerProfile {
                scatter_width: 45.0,
                scale_min: 0.14,
                scale_span: 0.1,
                sampling: Sampling::LightSpiral,
                rotation: RotationPolicy::Zero,
                palette: LIGHT_PALETTE,
            },
        }
    }
}

/// Builds instance records for every layer kind
///
/// Unseeded by default so every session looks different; use
/// [`LayoutGenerator::with_seed`] for reproducible layouts.
pub struct LayoutGenerator {
    cone: ConeGeometry,
    rng: SmallRng,
}

impl LayoutGenerator {
    pub fn new(cone: ConeGeometry) -> Self {
        Self {
            cone,
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn cone(&self) -> &ConeGeometry {
        &self.cone
    }

    /// Generate `count` records for one layer; zero yields an empty layer
    pub fn generate_layer(&mut self, kind: LayerKind, count: usize) -> Vec<InstanceRecord> {
        let profile = kind.profile();
        let records: Vec<InstanceRecord> = (0..count)
            .map(|i| self.generate_instance(kind, &profile, i, count))
            .collect();

        log::debug!("generated {} {} instances", records.len(), kind.name());
        records
    }

    fn generate_instance(
        &mut self,
        kind: LayerKind,
        profile: &LayerProfile,
        index: usize,
        count: usize,
    ) -> InstanceRecord {
        let scatter_position = self.scatter(profile.scatter_width);
        let placement = self.placement(profile.sampling, index, count);
        let tree_position = self.cone.surface_position(&placement);
        let scale = profile.scale_min + self.roll() * profile.scale_span;

        let rotation = match profile.rotation {
            RotationPolicy::Zero => Euler::ZERO,
            RotationPolicy::Random(magnitude) => Euler::new(
                self.roll() * magnitude,
                self.roll() * magnitude,
                self.roll() * magnitude,
            ),
        };

        let color = profile.palette.pick(self.roll());
        let shape = match kind {
            LayerKind::Geometric => Some(self.shape_variant()),
            _ => None,
        };

        InstanceRecord {
            scatter_position,
            tree_position,
            placement,
            scale,
            rotation,
            color,
            shape,
        }
    }

    fn placement(&mut self, sampling: Sampling, index: usize, count: usize) -> SurfacePlacement {
        let even = index as f32 / count.max(1) as f32;

        match sampling {
            Sampling::NeedleSpiral => {
                let angle = even * PI * NEEDLE_SPIRAL + self.roll();
                let offset = 1.0 - (1.0 - even).powi(2);
                SurfacePlacement::new(even, angle, offset)
            }
            Sampling::InnerVolume => {
                let h = self.roll();
                // sqrt keeps the areal density uniform across the disk
                let offset = self.roll().sqrt() * INNER_FILL_RADIUS;
                let angle = self.roll() * TAU;
                SurfacePlacement::new(h, angle, offset)
            }
            Sampling::LightSpiral => SurfacePlacement::new(even, even * PI * LIGHT_SPIRAL, 1.05),
            Sampling::Band { min, span, offset } => {
                let h = min + self.roll() * span;
                let angle = self.roll() * TAU;
                SurfacePlacement::new(h, angle, offset)
            }
        }
    }

    fn shape_variant(&mut self) -> ShapeVariant {
        if self.roll() > BOX_THRESHOLD {
            let stretch = if self.roll() > CUBE_THRESHOLD {
                Vec3::ONE
            } else {
                Vec3::new(1.0, 1.4 + self.roll() * 1.2, 1.0)
            };
            ShapeVariant::Box { stretch }
        } else {
            ShapeVariant::Sphere
        }
    }

    fn scatter(&mut self, width: f32) -> Vec3 {
        Vec3::new(
            (self.roll() - 0.5) * width,
            (self.roll() - 0.5) * width,
            (self.roll() - 0.5) * width,
        )
    }

    fn roll(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}
