use super::{Euler, Vec3};

/// 4x4 instance matrix (column-major, ready for GPU upload)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Compose translation * rotation(XYZ) * scale
    pub fn from_trs(position: Vec3, rotation: Euler, scale: Vec3) -> Self {
        let (a, b) = (rotation.x.cos(), rotation.x.sin());
        let (c, d) = (rotation.y.cos(), rotation.y.sin());
        let (e, f) = (rotation.z.cos(), rotation.z.sin());

        let ae = a * e;
        let af = a * f;
        let be = b * e;
        let bf = b * f;

        Self {
            data: [
                c * e * scale.x,
                (af + be * d) * scale.x,
                (bf - ae * d) * scale.x,
                0.0,
                -c * f * scale.y,
                (ae - bf * d) * scale.y,
                (be + af * d) * scale.y,
                0.0,
                d * scale.z,
                -b * c * scale.z,
                a * c * scale.z,
                0.0,
                position.x,
                position.y,
                position.z,
                1.0,
            ],
        }
    }

    /// Transform a point (applies translation)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.data[0] * p.x + self.data[4] * p.y + self.data[8] * p.z + self.data[12],
            self.data[1] * p.x + self.data[5] * p.y + self.data[9] * p.z + self.data[13],
            self.data[2] * p.x + self.data[6] * p.y + self.data[10] * p.z + self.data[14],
        )
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}
