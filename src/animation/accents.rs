//! Single-mesh accents: the crown on top and the trunk core
//!
//! Both follow the commanded target rather than the eased progress, so they
//! switch as soon as the command lands.

use crate::layout::ConeGeometry;
use crate::math::{Euler, Vec3};
use super::motion::InstanceTransform;

/// Gap between the cone apex and the crown center
const CROWN_LIFT: f32 = 1.1;
const CROWN_SCALE: f32 = 0.55;
const TRUNK_OPACITY: f32 = 0.8;

/// Idle float parameters for the crown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            rotation_intensity: 0.15,
            float_intensity: 0.015,
        }
    }
}

/// The star above the apex
#[derive(Debug, Clone, Copy)]
pub struct Crown {
    pub position: Vec3,
    pub float: FloatParams,
}

impl Crown {
    pub fn new(cone: &ConeGeometry) -> Self {
        Self {
            position: cone.apex() + Vec3::new(0.0, CROWN_LIFT, 0.0),
            float: FloatParams::default(),
        }
    }

    /// Scaled by the raw target, so it pops in and out on command
    pub fn transform(&self, target: f32, time: f32) -> InstanceTransform {
        let t = time / 4.0 * self.float.speed;
        let rotation = Euler::new(
            t.cos() / 8.0 * self.float.rotation_intensity,
            t.sin() / 8.0 * self.float.rotation_intensity,
            t.sin() / 20.0 * self.float.rotation_intensity,
        );
        let lift = t.sin() / 10.0 * self.float.float_intensity;

        InstanceTransform {
            position: self.position + Vec3::new(0.0, lift, 0.0),
            rotation,
            scale: Vec3::splat(target * CROWN_SCALE),
        }
    }
}

/// The translucent core running up the middle of the tree
#[derive(Debug, Clone, Copy)]
pub struct Trunk {
    pub height: f32,
}

impl Trunk {
    pub fn new(cone: &ConeGeometry) -> Self {
        Self { height: cone.height }
    }

    pub fn opacity(&self, target: f32) -> f32 {
        TRUNK_OPACITY * target
    }

    pub fn transform(&self) -> InstanceTransform {
        InstanceTransform {
            position: Vec3::ZERO,
            rotation: Euler::ZERO,
            scale: Vec3::new(1.0, self.height, 1.0),
        }
    }
}
