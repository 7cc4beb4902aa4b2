use wasm_bindgen::prelude::*;

pub mod animation;
pub mod data;
pub mod layers;
pub mod layout;
pub mod math;
pub mod scene;

pub use animation::{MorphState, SceneState};
pub use data::TreeConfig;
pub use scene::TreeScene;

use layers::InstanceBuffer;
use math::Mat4;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Morph engine handle exposed to JavaScript
///
/// The page calls `advance` once per animation frame and uploads the layer
/// buffers whose `layer_needs_update` is set.
#[wasm_bindgen]
pub struct ChristmasTreeMorph {
    scene: TreeScene,
}

#[wasm_bindgen]
impl ChristmasTreeMorph {
    /// Create an engine with the default tree densities
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChristmasTreeMorph {
        Self {
            scene: TreeScene::new(&TreeConfig::default()),
        }
    }

    /// Create an engine from a YAML tree config
    #[wasm_bindgen]
    pub fn from_yaml(yaml: &str) -> Result<ChristmasTreeMorph, JsValue> {
        let scene = build_scene(yaml, None).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { scene })
    }

    /// Create an engine with a reproducible layout
    #[wasm_bindgen]
    pub fn from_yaml_seeded(yaml: &str, seed: u32) -> Result<ChristmasTreeMorph, JsValue> {
        let scene = build_scene(yaml, Some(seed as u64)).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { scene })
    }

    /// Advance one frame
    #[wasm_bindgen]
    pub fn advance(&mut self, dt: f32) {
        self.scene.advance(dt);
    }

    // === Command ===

    /// Assemble the tree (`true`) or scatter it (`false`)
    #[wasm_bindgen]
    pub fn set_assembled(&mut self, assembled: bool) {
        let state = if assembled {
            MorphState::TreeShape
        } else {
            MorphState::Scattered
        };
        self.scene.set_state(state);
    }

    /// Flip the target; returns whether the tree is now assembling
    #[wasm_bindgen]
    pub fn toggle(&mut self) -> bool {
        self.scene.toggle() == MorphState::TreeShape
    }

    #[wasm_bindgen]
    pub fn is_assembled(&self) -> bool {
        self.scene.state().state() == MorphState::TreeShape
    }

    /// Eased morph progress (0.0 = scattered, 1.0 = tree)
    #[wasm_bindgen]
    pub fn progress(&self) -> f32 {
        self.scene.state().progress()
    }

    /// Scene clock in seconds
    #[wasm_bindgen]
    pub fn elapsed(&self) -> f32 {
        self.scene.state().elapsed()
    }

    // === Render-out ===

    #[wasm_bindgen]
    pub fn layer_count(&self) -> usize {
        self.scene.layers().len()
    }

    #[wasm_bindgen]
    pub fn layer_name(&self, index: usize) -> Option<String> {
        self.scene.layers().get(index).map(|l| l.name().to_string())
    }

    /// Number of instances in a layer
    #[wasm_bindgen]
    pub fn layer_len(&self, index: usize) -> usize {
        self.scene.layers().get(index).map_or(0, |l| l.len())
    }

    /// Copy of a layer's instance matrices (16 floats per instance)
    #[wasm_bindgen]
    pub fn layer_matrices(&self, index: usize) -> Vec<f32> {
        self.buffer(index).map(|b| b.matrices().to_vec()).unwrap_or_default()
    }

    /// Zero-copy view of a layer's instance matrices
    ///
    /// Only valid until the next call into the engine; upload it immediately.
    #[wasm_bindgen]
    pub fn layer_matrices_view(&self, index: usize) -> js_sys::Float32Array {
        match self.buffer(index) {
            // Safety: the view is handed straight to JS and no Rust allocation
            // happens before the caller consumes it
            Some(buffer) => unsafe { js_sys::Float32Array::view(buffer.matrices()) },
            None => js_sys::Float32Array::new_with_length(0),
        }
    }

    /// A layer's instance colors (3 floats per instance), fixed at creation
    #[wasm_bindgen]
    pub fn layer_colors(&self, index: usize) -> Vec<f32> {
        self.buffer(index).map(|b| b.colors().to_vec()).unwrap_or_default()
    }

    #[wasm_bindgen]
    pub fn layer_needs_update(&self, index: usize) -> bool {
        self.buffer(index).map_or(false, |b| b.needs_update())
    }

    #[wasm_bindgen]
    pub fn mark_layer_uploaded(&mut self, index: usize) {
        if let Some(layer) = self.scene.layers_mut().get_mut(index) {
            layer.buffer_mut().mark_uploaded();
        }
    }

    /// Crown matrix; scaled by the raw command so it pops on toggle
    #[wasm_bindgen]
    pub fn crown_matrix(&self) -> Vec<f32> {
        let t = self.scene.crown_transform();
        Mat4::from_trs(t.position, t.rotation, t.scale).as_slice().to_vec()
    }

    #[wasm_bindgen]
    pub fn trunk_matrix(&self) -> Vec<f32> {
        let t = self.scene.trunk_transform();
        Mat4::from_trs(t.position, t.rotation, t.scale).as_slice().to_vec()
    }

    #[wasm_bindgen]
    pub fn trunk_opacity(&self) -> f32 {
        self.scene.trunk_opacity()
    }
}

impl ChristmasTreeMorph {
    fn buffer(&self, index: usize) -> Option<&InstanceBuffer> {
        self.scene.layers().get(index).map(|l| l.buffer())
    }

    pub fn scene(&self) -> &TreeScene {
        &self.scene
    }
}

impl Default for ChristmasTreeMorph {
    fn default() -> Self {
        Self::new()
    }
}

fn build_scene(yaml: &str, seed: Option<u64>) -> Result<TreeScene, String> {
    let config = TreeConfig::from_yaml(yaml)?;
    Ok(match seed {
        Some(seed) => TreeScene::seeded(&config, seed),
        None => TreeScene::new(&config),
    })
}
