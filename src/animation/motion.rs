//! Per-layer motion rules
//!
//! Each layer interpolates its instances between scatter and tree positions
//! and then layers a small time-driven perturbation on top.

use crate::layout::InstanceRecord;
use crate::math::{Euler, Vec3};

/// Transform written for one instance in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceTransform {
    pub position: Vec3,
    pub rotation: Euler,
    pub scale: Vec3,
}

/// Perturbation applied after the base interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Bob while scattered, slow spin once assembled; never fully vanishes
    Needle,
    /// Static at its intrinsic orientation
    InnerFill,
    /// Bob while scattered, constant spin
    Ornament,
    /// Scale pulses at high frequency
    Twinkle,
    CandySpin,
    /// Swings on Z once hung
    BellSwing,
    /// Dual-axis tumble with anisotropic scale
    BoxTumble,
    /// Faint bob once assembled
    SphereBob,
}

impl Motion {
    /// Compute the transform of instance `index` at progress `p` and time `time`
    pub fn transform(&self, record: &InstanceRecord, index: usize, p: f32, time: f32) -> InstanceTransform {
        let phase = index as f32;
        let base = record.scale * p;

        let mut t = InstanceTransform {
            position: record.scatter_position.lerp(&record.tree_position, p),
            rotation: Euler::ZERO,
            scale: Vec3::splat(base),
        };

        match self {
            Motion::Needle => {
                t.position.y += (1.0 - p) * (time + phase).sin() * 0.3;
                t.rotation = record.rotation.offset(0.0, p * time * 0.3, 0.0);
                t.scale = Vec3::splat(record.scale * (0.2 + p * 0.8));
            }
            Motion::InnerFill => {
                t.rotation = record.rotation;
            }
            Motion::Ornament => {
                t.position.y += (1.0 - p) * (time + phase).cos() * 0.5;
                t.rotation = Euler::yaw(time * 0.4);
            }
            Motion::Twinkle => {
                let twinkle = (time * 5.0 + phase).sin() * 0.5 + 0.5;
                t.scale = t.scale * (0.7 + twinkle * 0.5);
            }
            Motion::CandySpin => {
                t.rotation = record.rotation.offset(0.0, time * 0.5, 0.0);
            }
            Motion::BellSwing => {
                t.rotation = Euler::roll((time * 2.0 + phase).sin() * 0.3 * p);
            }
            Motion::BoxTumble => {
                t.rotation = record.rotation.offset(time * 0.2, time * 0.3, 0.0);
                t.scale = Vec3::splat(base).mul_elements(&record.stretch());
            }
            Motion::SphereBob => {
                t.position.y += (time + phase).sin() * 0.05 * p;
            }
        }

        t
    }
}
