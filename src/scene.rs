//! Scene controller
//!
//! Builds every decorative layer once from a [`TreeConfig`] and advances them
//! together, one call per rendered frame.

use crate::animation::{Crown, InstanceTransform, MorphState, Motion, SceneState, Trunk};
use crate::data::TreeConfig;
use crate::layers::Layer;
use crate::layout::{ConeGeometry, LayerKind, LayoutGenerator};

/// The assembled-or-scattered tree and all of its layers
pub struct TreeScene {
    cone: ConeGeometry,
    state: SceneState,
    layers: Vec<Layer>,
    crown: Crown,
    trunk: Trunk,
}

impl TreeScene {
    /// Build a scene with an unseeded layout
    pub fn new(config: &TreeConfig) -> Self {
        let cone = ConeGeometry::new(config.tree_height(), config.tree_radius());
        Self::with_generator(config, LayoutGenerator::new(cone))
    }

    /// Build a scene whose layout is reproducible for `seed`
    pub fn seeded(config: &TreeConfig, seed: u64) -> Self {
        let cone = ConeGeometry::new(config.tree_height(), config.tree_radius());
        Self::with_generator(config, LayoutGenerator::new(cone).with_seed(seed))
    }

    fn with_generator(config: &TreeConfig, mut generator: LayoutGenerator) -> Self {
        let cone = *generator.cone();
        let counts = config.counts();

        let (boxes, spheres): (Vec<_>, Vec<_>) = generator
            .generate_layer(LayerKind::Geometric, counts.geometric)
            .into_iter()
            .partition(|r| r.shape.map_or(false, |s| s.is_box()));

        let layers = vec![
            Layer::new("geometric_boxes", LayerKind::Geometric, Motion::BoxTumble, boxes),
            Layer::new("geometric_spheres", LayerKind::Geometric, Motion::SphereBob, spheres),
            Layer::new(
                "needles",
                LayerKind::Needles,
                Motion::Needle,
                generator.generate_layer(LayerKind::Needles, counts.needles),
            ),
            Layer::new(
                "inner_needles",
                LayerKind::InnerFill,
                Motion::InnerFill,
                generator.generate_layer(LayerKind::InnerFill, counts.inner_needles),
            ),
            Layer::new(
                "candies",
                LayerKind::Candies,
                Motion::CandySpin,
                generator.generate_layer(LayerKind::Candies, counts.candies),
            ),
            Layer::new(
                "bells",
                LayerKind::Bells,
                Motion::BellSwing,
                generator.generate_layer(LayerKind::Bells, counts.bells),
            ),
            Layer::new(
                "ornaments",
                LayerKind::Ornaments,
                Motion::Ornament,
                generator.generate_layer(LayerKind::Ornaments, counts.ornaments),
            ),
            Layer::new(
                "lights",
                LayerKind::Lights,
                Motion::Twinkle,
                generator.generate_layer(LayerKind::Lights, counts.lights),
            ),
        ];

        log::info!(
            "tree scene: {} instances across {} layers (height {}, radius {})",
            counts.total(),
            layers.len(),
            cone.height,
            cone.radius
        );

        Self {
            cone,
            state: SceneState::new(),
            layers,
            crown: Crown::new(&cone),
            trunk: Trunk::new(&cone),
        }
    }

    /// Step the morph and rewrite every layer's transforms
    pub fn advance(&mut self, dt: f32) {
        self.state.advance(dt);

        let progress = self.state.progress();
        let time = self.state.elapsed();
        for layer in &mut self.layers {
            layer.update(progress, time);
        }
    }

    /// Command a configuration; the change takes effect on the next advance
    pub fn set_state(&mut self, state: MorphState) {
        if self.state.set_state(state) {
            log::debug!("morph target -> {:?}", state);
        }
    }

    pub fn toggle(&mut self) -> MorphState {
        let state = self.state.toggle();
        log::debug!("morph target -> {:?}", state);
        state
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn cone(&self) -> &ConeGeometry {
        &self.cone
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name() == name)
    }

    /// Total instance count over all layers
    pub fn instance_count(&self) -> usize {
        self.layers.iter().map(|l| l.len()).sum()
    }

    /// Crown transform for the current target and clock
    pub fn crown_transform(&self) -> InstanceTransform {
        self.crown.transform(self.state.target(), self.state.elapsed())
    }

    pub fn trunk_transform(&self) -> InstanceTransform {
        self.trunk.transform()
    }

    pub fn trunk_opacity(&self) -> f32 {
        self.trunk.opacity(self.state.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::InstanceSink;
    use crate::math::Vec3;

    fn small_config() -> TreeConfig {
        TreeConfig {
            particle_count: 300,
            inner_needle_count: 200,
            geometric_count: 60,
            candy_count: 20,
            bell_count: 15,
            ornament_count: 30,
            light_count: 80,
            ..TreeConfig::default()
        }
    }

    #[test]
    fn test_scene_layers() {
        let scene = TreeScene::seeded(&small_config(), 11);
        assert_eq!(scene.layers().len(), 8);
        assert_eq!(scene.instance_count(), 300 + 200 + 60 + 20 + 15 + 30 + 80);

        let boxes = scene.layer("geometric_boxes").unwrap();
        let spheres = scene.layer("geometric_spheres").unwrap();
        assert_eq!(boxes.len() + spheres.len(), 60);
        assert!(boxes.records().iter().all(|r| r.shape.map_or(false, |s| s.is_box())));
        assert!(spheres.records().iter().all(|r| !r.shape.map_or(false, |s| s.is_box())));
    }

    #[test]
    fn test_advance_moves_toward_tree() {
        let mut scene = TreeScene::seeded(&small_config(), 11);
        scene.set_state(MorphState::TreeShape);
        for _ in 0..400 {
            scene.advance(1.0 / 60.0);
        }

        assert!(scene.state().progress() > 0.999);
        let inner = scene.layer("inner_needles").unwrap();
        for (i, record) in inner.records().iter().enumerate() {
            let translation = inner.buffer().matrix(i).unwrap().translation();
            assert!(translation.distance(&record.tree_position) < 0.05);
        }
    }

    #[test]
    fn test_scattered_start() {
        let mut scene = TreeScene::seeded(&small_config(), 11);
        scene.advance(1.0 / 60.0);

        assert_eq!(scene.state().progress(), 0.0);
        let candies = scene.layer("candies").unwrap();
        for (i, record) in candies.records().iter().enumerate() {
            let translation = candies.buffer().matrix(i).unwrap().translation();
            assert!(translation.distance(&record.scatter_position) < 1e-4);
        }
    }

    #[test]
    fn test_empty_layers_tolerated() {
        let config = TreeConfig::from_yaml("particleCount: 10\nlightCount: -5").unwrap();
        let mut scene = TreeScene::new(&config);

        let lights = scene.layer("lights").unwrap();
        assert!(lights.is_empty());
        assert!(lights.buffer().is_empty());

        scene.toggle();
        scene.advance(0.016);
        assert!(scene.layer("lights").unwrap().buffer().matrices().is_empty());
        assert_eq!(scene.layer("needles").unwrap().len(), 10);
    }

    #[test]
    fn test_crown_pops_with_target() {
        let mut scene = TreeScene::seeded(&small_config(), 11);
        assert_eq!(scene.crown_transform().scale, Vec3::ZERO);
        assert_eq!(scene.trunk_opacity(), 0.0);

        scene.set_state(MorphState::TreeShape);
        // Before any advance the crown is already at full size
        assert!((scene.crown_transform().scale.x - 0.55).abs() < 1e-6);
        assert!((scene.trunk_opacity() - 0.8).abs() < 1e-6);
        assert_eq!(scene.state().progress(), 0.0);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut scene = TreeScene::seeded(&small_config(), 11);
        assert_eq!(scene.toggle(), MorphState::TreeShape);
        for _ in 0..200 {
            scene.advance(1.0 / 60.0);
        }
        assert_eq!(scene.toggle(), MorphState::Scattered);
        for _ in 0..400 {
            scene.advance(1.0 / 60.0);
        }
        assert!(scene.state().progress() < 1e-3);
    }

    #[test]
    fn test_colors_stable_across_frames() {
        let mut scene = TreeScene::seeded(&small_config(), 11);
        let before: Vec<Vec<f32>> = scene.layers().iter().map(|l| l.buffer().colors().to_vec()).collect();

        scene.set_state(MorphState::TreeShape);
        for _ in 0..30 {
            scene.advance(1.0 / 60.0);
        }

        for (layer, colors) in scene.layers().iter().zip(before) {
            assert_eq!(layer.buffer().colors(), &colors[..]);
        }
    }
}
