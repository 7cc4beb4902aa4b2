use crate::animation::Motion;
use crate::layout::{InstanceRecord, LayerKind};
use super::sink::{InstanceBuffer, InstanceSink};

/// A fixed-size collection of same-kind instances sharing one motion rule
///
/// The record array and the buffer are sized once at creation; the instance
/// index is the handle into both.
#[derive(Debug, Clone)]
pub struct Layer {
    name: &'static str,
    kind: LayerKind,
    motion: Motion,
    records: Vec<InstanceRecord>,
    buffer: InstanceBuffer,
}

impl Layer {
    /// Create the layer and write its color table once
    pub fn new(name: &'static str, kind: LayerKind, motion: Motion, records: Vec<InstanceRecord>) -> Self {
        let mut buffer = InstanceBuffer::new(records.len());
        for (i, record) in records.iter().enumerate() {
            buffer.set_color(i, record.color);
        }

        Self {
            name,
            kind,
            motion,
            records,
            buffer,
        }
    }

    /// Recompute every instance transform for this frame
    pub fn update(&mut self, progress: f32, time: f32) {
        update_instances(&self.records, self.motion, progress, time, &mut self.buffer);
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn records(&self) -> &[InstanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn buffer(&self) -> &InstanceBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut InstanceBuffer {
        &mut self.buffer
    }
}

/// Write the interpolated transform of every record into `sink`
///
/// An empty record slice leaves the sink untouched.
pub fn update_instances<S: InstanceSink + ?Sized>(
    records: &[InstanceRecord],
    motion: Motion,
    progress: f32,
    time: f32,
    sink: &mut S,
) {
    for (i, record) in records.iter().enumerate() {
        let t = motion.transform(record, i, progress, time);
        sink.set_transform(i, t.position, t.rotation, t.scale);
    }
}
