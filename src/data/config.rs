use serde::Deserialize;

pub const DEFAULT_HEIGHT: f32 = 12.0;
pub const DEFAULT_RADIUS: f32 = 5.0;

/// Tree geometry and per-layer densities, read once when the scene is built
///
/// Counts are signed so that malformed input can be clamped at the boundary
/// instead of failing; a missing count means an empty layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeConfig {
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default)]
    pub particle_count: i64,
    #[serde(default)]
    pub inner_needle_count: i64,
    #[serde(default)]
    pub geometric_count: i64,
    #[serde(default)]
    pub candy_count: i64,
    #[serde(default)]
    pub bell_count: i64,
    #[serde(default)]
    pub ornament_count: i64,
    #[serde(default)]
    pub light_count: i64,
}

fn default_height() -> f32 {
    DEFAULT_HEIGHT
}

fn default_radius() -> f32 {
    DEFAULT_RADIUS
}

/// Instance counts after clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerCounts {
    pub needles: usize,
    pub inner_needles: usize,
    pub geometric: usize,
    pub candies: usize,
    pub bells: usize,
    pub ornaments: usize,
    pub lights: usize,
}

impl LayerCounts {
    pub fn total(&self) -> usize {
        self.needles
            + self.inner_needles
            + self.geometric
            + self.candies
            + self.bells
            + self.ornaments
            + self.lights
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            radius: DEFAULT_RADIUS,
            particle_count: 4500,
            inner_needle_count: 3000,
            geometric_count: 260,
            candy_count: 90,
            bell_count: 70,
            ornament_count: 180,
            light_count: 420,
        }
    }
}

impl TreeConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: TreeConfig = serde_yaml::from_str(yaml)
            .map_err(|e| format!("Config parse error: {}", e))?;
        Ok(config.sanitized())
    }

    /// Cone height, never negative
    pub fn tree_height(&self) -> f32 {
        non_negative(self.height)
    }

    /// Cone base radius, never negative
    pub fn tree_radius(&self) -> f32 {
        non_negative(self.radius)
    }

    /// Clamp every count to zero or more
    pub fn counts(&self) -> LayerCounts {
        LayerCounts {
            needles: clamp_count(self.particle_count),
            inner_needles: clamp_count(self.inner_needle_count),
            geometric: clamp_count(self.geometric_count),
            candies: clamp_count(self.candy_count),
            bells: clamp_count(self.bell_count),
            ornaments: clamp_count(self.ornament_count),
            lights: clamp_count(self.light_count),
        }
    }

    /// Copy with geometry and counts clamped into range
    pub fn sanitized(&self) -> Self {
        let counts = self.counts();
        Self {
            height: self.tree_height(),
            radius: self.tree_radius(),
            particle_count: counts.needles as i64,
            inner_needle_count: counts.inner_needles as i64,
            geometric_count: counts.geometric as i64,
            candy_count: counts.candies as i64,
            bell_count: counts.bells as i64,
            ornament_count: counts.ornaments as i64,
            light_count: counts.lights as i64,
        }
    }
}

fn clamp_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
