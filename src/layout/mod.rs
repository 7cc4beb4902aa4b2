//! Layout generation for the decorative layers
//!
//! Produces, once per layer, the immutable instance records that the morph
//! animator interpolates between a scattered cloud and the tree's cone.

mod surface;
mod record;
mod generator;

pub use surface::{ConeGeometry, SurfacePlacement};
pub use record::{InstanceRecord, ShapeVariant};
pub use generator::{LayerKind, LayerProfile, LayoutGenerator, RotationPolicy, Sampling};
