use crate::math::Vec3;

/// Where on the cone an instance sits
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfacePlacement {
    /// 0.0 = apex, 1.0 = base
    pub height_ratio: f32,
    /// Azimuth in radians
    pub angle: f32,
    /// Radial factor applied to the cone radius at this height
    pub offset: f32,
}

impl SurfacePlacement {
    pub fn new(height_ratio: f32, angle: f32, offset: f32) -> Self {
        Self { height_ratio, angle, offset }
    }
}

/// The cone every layer is assembled onto, centered on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeGeometry {
    pub height: f32,
    pub radius: f32,
}

impl ConeGeometry {
    pub fn new(height: f32, radius: f32) -> Self {
        Self { height, radius }
    }

    /// Map a placement onto the cone
    ///
    /// `h = 0` lands on the apex at `height / 2`, `h = 1` on the base ring at
    /// `-height / 2`.
    pub fn surface_position(&self, placement: &SurfacePlacement) -> Vec3 {
        let h = placement.height_ratio;
        let y = (1.0 - h) * self.height - self.height / 2.0;
        let radius = h * self.radius * placement.offset;
        Vec3::new(placement.angle.cos() * radius, y, placement.angle.sin() * radius)
    }

    /// Position of the crown above the apex
    pub fn apex(&self) -> Vec3 {
        Vec3::new(0.0, self.height / 2.0, 0.0)
    }
}
