//! Scene colors and weighted palettes
//!
//! Every layer draws its instance colors from one of the palettes below,
//! once, at generation time.

use serde::{Deserialize, Serialize};

/// Linear RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

pub const EMERALD: Color = Color::from_hex(0x50c878);
pub const DEEP_EMERALD: Color = Color::from_hex(0x0b4f2e);
pub const DARK_EMERALD: Color = Color::from_hex(0x021a11);
pub const GOLD: Color = Color::from_hex(0xd4af37);
pub const BRIGHT_GOLD: Color = Color::from_hex(0xffd700);
pub const SILVER: Color = Color::from_hex(0xc0c0c0);
pub const WHITE_GLOW: Color = Color::from_hex(0xfffaf0);
pub const RUBY: Color = Color::from_hex(0xe0115f);
pub const SAPPHIRE: Color = Color::from_hex(0x0f52ba);
pub const AMBER: Color = Color::from_hex(0xffbf00);
pub const AMETHYST: Color = Color::from_hex(0x9966cc);
pub const CANDY_RED: Color = Color::from_hex(0xd2042d);
pub const LIGHT_GLOW: Color = Color::from_hex(0xfff4d6);
pub const ROSE: Color = Color::from_hex(0xe91e63);
pub const FROZEN_CYAN: Color = Color::from_hex(0x00bcd4);

/// A fixed set of colors with relative draw weights
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    entries: &'static [(Color, f32)],
}

impl Palette {
    pub const fn new(entries: &'static [(Color, f32)]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.entries.iter().any(|(c, _)| c == color)
    }

    /// Pick a color for a uniform roll in [0, 1)
    pub fn pick(&self, roll: f32) -> Color {
        let total: f32 = self.entries.iter().map(|(_, w)| w).sum();
        let mut choice = roll.clamp(0.0, 1.0) * total;

        for (color, weight) in self.entries {
            if choice < *weight {
                return *color;
            }
            choice -= weight;
        }

        self.entries.last().map(|(c, _)| *c).unwrap_or_default()
    }
}

/// Surface needles: mostly emerald with a rare gold glint
pub const NEEDLE_PALETTE: Palette = Palette::new(&[(EMERALD, 0.96), (GOLD, 0.04)]);

pub const INNER_FILL_PALETTE: Palette = Palette::new(&[(DEEP_EMERALD, 1.0)]);

/// Jewel tones for the prominent geometric decorations
pub const JEWEL_PALETTE: Palette = Palette::new(&[
    (GOLD, 1.0),
    (BRIGHT_GOLD, 1.0),
    (EMERALD, 1.0),
    (SILVER, 1.0),
    (WHITE_GLOW, 1.0),
    (RUBY, 1.0),
    (SAPPHIRE, 1.0),
    (AMBER, 1.0),
    (AMETHYST, 1.0),
    (ROSE, 1.0),
    (FROZEN_CYAN, 1.0),
]);

pub const CANDY_PALETTE: Palette = Palette::new(&[(CANDY_RED, 0.5), (WHITE_GLOW, 0.5)]);

pub const BELL_PALETTE: Palette = Palette::new(&[(GOLD, 0.5), (BRIGHT_GOLD, 0.5)]);

pub const ORNAMENT_PALETTE: Palette = Palette::new(&[(GOLD, 0.8), (SILVER, 0.2)]);

pub const LIGHT_PALETTE: Palette = Palette::new(&[(LIGHT_GLOW, 1.0)]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex(0xff8000);
        assert!((c.r - 1.0).abs() < 0.001);
        assert!((c.g - 128.0 / 255.0).abs() < 0.001);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn test_weighted_pick_bias() {
        assert_eq!(NEEDLE_PALETTE.pick(0.0), EMERALD);
        assert_eq!(NEEDLE_PALETTE.pick(0.95), EMERALD);
        assert_eq!(NEEDLE_PALETTE.pick(0.97), GOLD);

        assert_eq!(ORNAMENT_PALETTE.pick(0.79), GOLD);
        assert_eq!(ORNAMENT_PALETTE.pick(0.81), SILVER);
    }

    #[test]
    fn test_uniform_pick_covers_palette() {
        assert_eq!(JEWEL_PALETTE.len(), 11);
        for i in 0..JEWEL_PALETTE.len() {
            let roll = (i as f32 + 0.5) / JEWEL_PALETTE.len() as f32;
            let color = JEWEL_PALETTE.pick(roll);
            assert_eq!(color, JEWEL_PALETTE.entries[i].0);
        }
    }

    #[test]
    fn test_pick_clamps_roll() {
        assert_eq!(CANDY_PALETTE.pick(-1.0), CANDY_RED);
        assert_eq!(CANDY_PALETTE.pick(1.0), WHITE_GLOW);
    }
}
