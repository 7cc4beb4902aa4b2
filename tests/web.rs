//! Browser smoke tests for the JavaScript-facing engine
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use tree_morph::ChristmasTreeMorph;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_engine_from_yaml() {
    let engine = ChristmasTreeMorph::from_yaml("particleCount: 20\nbellCount: 4").unwrap();
    assert_eq!(engine.scene().instance_count(), 24);
}

#[wasm_bindgen_test]
fn test_invalid_yaml_rejected() {
    assert!(ChristmasTreeMorph::from_yaml("height: [").is_err());
}

#[wasm_bindgen_test]
fn test_matrices_view_matches_copy() {
    let mut engine = ChristmasTreeMorph::from_yaml_seeded("lightCount: 8", 9).unwrap();
    engine.set_assembled(true);
    engine.advance(0.016);

    for i in 0..engine.layer_count() {
        let copy = engine.layer_matrices(i);
        let view = engine.layer_matrices_view(i);
        assert_eq!(view.length() as usize, copy.len());
        assert_eq!(view.to_vec(), copy);
    }
}
