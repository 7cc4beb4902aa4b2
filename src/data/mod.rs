pub mod config;
pub mod palette;

pub use config::{TreeConfig, LayerCounts};
pub use palette::{Color, Palette};
