use serde::{Serialize, Deserialize};

/// Intrinsic XYZ rotation angles in radians
///
/// Applied as `Rx * Ry * Rz`, the order instanced renderers use for
/// per-instance orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler {
    pub const ZERO: Euler = Euler { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotation about the vertical axis only
    pub const fn yaw(y: f32) -> Self {
        Self { x: 0.0, y, z: 0.0 }
    }

    /// Rotation about the Z axis only
    pub const fn roll(z: f32) -> Self {
        Self { x: 0.0, y: 0.0, z }
    }

    pub fn offset(&self, dx: f32, dy: f32, dz: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}
