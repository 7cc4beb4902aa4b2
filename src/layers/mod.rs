//! Instanced decorative layers and their render-out buffers

mod sink;
mod layer;

pub use sink::{InstanceBuffer, InstanceSink, FLOATS_PER_COLOR, FLOATS_PER_MATRIX};
pub use layer::{update_instances, Layer};
