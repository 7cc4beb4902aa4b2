use crate::data::Color;
use crate::math::{Euler, Mat4, Vec3};

pub const FLOATS_PER_MATRIX: usize = 16;
pub const FLOATS_PER_COLOR: usize = 3;

/// Destination for per-instance transforms and colors
///
/// The instance index is the handle; the size is fixed when the sink is
/// created and every write is O(1).
pub trait InstanceSink {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set_transform(&mut self, index: usize, position: Vec3, rotation: Euler, scale: Vec3);

    fn set_color(&mut self, index: usize, color: Color);
}

/// Flat GPU-ready storage for one instanced layer
///
/// Format: one column-major 4x4 matrix (16 floats) and one RGB triple
/// (3 floats) per instance.
#[derive(Debug, Clone)]
pub struct InstanceBuffer {
    matrices: Vec<f32>,
    colors: Vec<f32>,
    needs_update: bool,
}

impl InstanceBuffer {
    pub fn new(count: usize) -> Self {
        let identity = Mat4::identity();
        let mut matrices = Vec::with_capacity(count * FLOATS_PER_MATRIX);
        for _ in 0..count {
            matrices.extend_from_slice(identity.as_slice());
        }

        Self {
            matrices,
            colors: vec![1.0; count * FLOATS_PER_COLOR],
            needs_update: false,
        }
    }

    /// Matrix data for upload
    pub fn matrices(&self) -> &[f32] {
        &self.matrices
    }

    /// Color data for upload
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn matrix(&self, index: usize) -> Option<Mat4> {
        let start = index * FLOATS_PER_MATRIX;
        let slice = self.matrices.get(start..start + FLOATS_PER_MATRIX)?;
        let mut data = [0.0f32; FLOATS_PER_MATRIX];
        data.copy_from_slice(slice);
        Some(Mat4 { data })
    }

    pub fn color(&self, index: usize) -> Option<Color> {
        let start = index * FLOATS_PER_COLOR;
        match self.colors.get(start..start + FLOATS_PER_COLOR)? {
            [r, g, b] => Some(Color::new(*r, *g, *b)),
            _ => None,
        }
    }

    /// Whether transforms changed since the consumer last uploaded them
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Called by the consumer after uploading
    pub fn mark_uploaded(&mut self) {
        self.needs_update = false;
    }
}

impl InstanceSink for InstanceBuffer {
    fn len(&self) -> usize {
        self.matrices.len() / FLOATS_PER_MATRIX
    }

    fn set_transform(&mut self, index: usize, position: Vec3, rotation: Euler, scale: Vec3) {
        let start = index * FLOATS_PER_MATRIX;
        if let Some(slot) = self.matrices.get_mut(start..start + FLOATS_PER_MATRIX) {
            let matrix = Mat4::from_trs(position, rotation, scale);
            slot.copy_from_slice(matrix.as_slice());
            self.needs_update = true;
        }
    }

    fn set_color(&mut self, index: usize, color: Color) {
        let start = index * FLOATS_PER_COLOR;
        if let Some(slot) = self.colors.get_mut(start..start + FLOATS_PER_COLOR) {
            slot.copy_from_slice(&color.to_array());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_layout() {
        let buffer = InstanceBuffer::new(5);
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.matrices().len(), 5 * FLOATS_PER_MATRIX);
        assert_eq!(buffer.colors().len(), 5 * FLOATS_PER_COLOR);
        assert_eq!(buffer.matrix(4), Some(Mat4::identity()));
        assert!(!buffer.needs_update());
    }

    #[test]
    fn test_set_transform() {
        let mut buffer = InstanceBuffer::new(3);
        buffer.set_transform(1, Vec3::new(1.0, 2.0, 3.0), Euler::ZERO, Vec3::splat(2.0));

        let m = buffer.matrix(1).unwrap();
        assert_eq!(m.translation(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.data[0], 2.0);
        assert_eq!(buffer.matrix(0), Some(Mat4::identity()));
        assert!(buffer.needs_update());

        buffer.mark_uploaded();
        assert!(!buffer.needs_update());
    }

    #[test]
    fn test_set_color() {
        let mut buffer = InstanceBuffer::new(2);
        buffer.set_color(1, Color::new(0.1, 0.2, 0.3));
        assert_eq!(buffer.color(1), Some(Color::new(0.1, 0.2, 0.3)));
        assert_eq!(&buffer.colors()[3..6], &[0.1f32, 0.2, 0.3]);
    }

    #[test]
    fn test_out_of_range_writes_ignored() {
        let mut buffer = InstanceBuffer::new(1);
        buffer.set_transform(4, Vec3::ONE, Euler::ZERO, Vec3::ONE);
        buffer.set_color(4, Color::new(0.0, 0.0, 0.0));
        assert!(!buffer.needs_update());
        assert_eq!(buffer.matrix(4), None);
        assert_eq!(buffer.color(4), None);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = InstanceBuffer::new(0);
        assert!(buffer.is_empty());
        assert!(buffer.matrices().is_empty());
    }
}
