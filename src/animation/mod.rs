//! Morph animation for the tree scene
//!
//! Drives the scatter/tree progress and the per-layer motion rules
//! applied on top of the interpolation.

mod morph;
mod motion;
mod accents;

pub use morph::{MorphState, SceneState, SMOOTHING};
pub use motion::{InstanceTransform, Motion};
pub use accents::{Crown, FloatParams, Trunk};
