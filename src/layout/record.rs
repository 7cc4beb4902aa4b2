use crate::data::Color;
use crate::math::{Euler, Vec3};
use super::SurfacePlacement;

/// Discrete shape tag for ornament layers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeVariant {
    /// Box with a per-axis scale; gift boxes are stretched along Y
    Box { stretch: Vec3 },
    Sphere,
}

impl ShapeVariant {
    pub fn is_box(&self) -> bool {
        matches!(self, ShapeVariant::Box { .. })
    }

    /// Anisotropic scale factor, `ONE` for spheres and cubes
    pub fn stretch(&self) -> Vec3 {
        match self {
            ShapeVariant::Box { stretch } => *stretch,
            ShapeVariant::Sphere => Vec3::ONE,
        }
    }
}

/// One decorative instance, immutable after generation
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceRecord {
    /// Resting position in the exploded configuration
    pub scatter_position: Vec3,
    /// Resting position on the assembled tree
    pub tree_position: Vec3,
    /// Cone coordinates `tree_position` was computed from
    pub placement: SurfacePlacement,
    pub scale: f32,
    pub rotation: Euler,
    pub color: Color,
    /// Only geometric ornaments carry a shape tag
    pub shape: Option<ShapeVariant>,
}

impl InstanceRecord {
    pub fn stretch(&self) -> Vec3 {
        self.shape.map(|s| s.stretch()).unwrap_or(Vec3::ONE)
    }
}
