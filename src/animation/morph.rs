//! Scene-wide morph progress
//!
//! A single scalar eases toward the commanded configuration every frame.
//! The approach is exponential and never formally completes.

use serde::{Deserialize, Serialize};
use crate::math::lerp;

/// Fraction of the remaining distance covered per frame.
///
/// Applied once per `advance` call regardless of `dt`, so the morph speed
/// follows the frame rate.
pub const SMOOTHING: f32 = 0.04;

/// The two configurations the scene can be commanded into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MorphState {
    #[default]
    Scattered,
    TreeShape,
}

impl MorphState {
    /// Progress value this state pulls toward
    pub fn target(&self) -> f32 {
        match self {
            MorphState::Scattered => 0.0,
            MorphState::TreeShape => 1.0,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            MorphState::Scattered => MorphState::TreeShape,
            MorphState::TreeShape => MorphState::Scattered,
        }
    }
}

/// Progress, commanded state and scene clock for one scene
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    progress: f32,
    state: MorphState,
    elapsed: f32,
}

impl SceneState {
    /// Fully scattered, clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Command a configuration; returns whether the target changed
    pub fn set_state(&mut self, state: MorphState) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        true
    }

    pub fn toggle(&mut self) -> MorphState {
        self.state = self.state.toggled();
        self.state
    }

    /// Step the progress toward the target and the clock forward by `dt`
    pub fn advance(&mut self, dt: f32) {
        self.progress = lerp(self.progress, self.state.target(), SMOOTHING);
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn target(&self) -> f32 {
        self.state.target()
    }

    pub fn state(&self) -> MorphState {
        self.state
    }

    /// Seconds since the scene started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_starts_scattered() {
        let state = SceneState::new();
        assert_eq!(state.progress(), 0.0);
        assert_eq!(state.state(), MorphState::Scattered);
        assert_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_monotonic_toward_tree() {
        let mut state = SceneState::new();
        state.set_state(MorphState::TreeShape);

        let mut prev = state.progress();
        for _ in 0..500 {
            state.advance(FRAME);
            assert!(state.progress() >= prev);
            assert!(state.progress() <= 1.0);
            prev = state.progress();
        }
    }

    #[test]
    fn test_converges_after_100_frames() {
        let mut state = SceneState::new();
        state.set_state(MorphState::TreeShape);
        for _ in 0..100 {
            state.advance(FRAME);
        }

        let expected = 1.0 - (1.0 - SMOOTHING).powi(100);
        assert!(state.progress() >= expected - 1e-4);
        assert!(state.progress() > 0.98);
    }

    #[test]
    fn test_smoothing_ignores_dt() {
        let mut slow = SceneState::new();
        let mut fast = SceneState::new();
        slow.set_state(MorphState::TreeShape);
        fast.set_state(MorphState::TreeShape);

        slow.advance(0.5);
        fast.advance(0.001);
        assert_eq!(slow.progress(), fast.progress());
        assert!((slow.progress() - SMOOTHING).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip_without_jumps() {
        let mut state = SceneState::new();
        state.set_state(MorphState::TreeShape);

        let mut prev = state.progress();
        for frame in 0..600 {
            if frame == 300 {
                state.toggle();
            }
            state.advance(FRAME);
            let jump = (state.progress() - prev).abs();
            assert!(jump <= SMOOTHING * (state.target() - prev).abs() + 1e-6);
            prev = state.progress();
        }

        assert_eq!(state.state(), MorphState::Scattered);
        assert!(state.progress() < 1e-3);
    }

    #[test]
    fn test_held_target_no_oscillation() {
        let mut state = SceneState::new();
        for _ in 0..50 {
            state.advance(FRAME);
            assert_eq!(state.progress(), 0.0);
        }

        // Re-commanding the same state changes nothing
        assert!(!state.set_state(MorphState::Scattered));
        state.advance(FRAME);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_reverse_mid_transition() {
        let mut state = SceneState::new();
        state.set_state(MorphState::TreeShape);
        for _ in 0..20 {
            state.advance(FRAME);
        }
        let peak = state.progress();

        state.set_state(MorphState::Scattered);
        state.advance(FRAME);
        assert!(state.progress() < peak);
        assert!(state.progress() > 0.0);
    }

    #[test]
    fn test_clock_accumulates() {
        let mut state = SceneState::new();
        state.advance(0.25);
        state.advance(0.25);
        state.advance(f32::NAN);
        state.advance(-1.0);
        assert!((state.elapsed() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_state_serde_tags() {
        let state: MorphState = serde_yaml::from_str("TREE_SHAPE").unwrap();
        assert_eq!(state, MorphState::TreeShape);
        assert_eq!(serde_yaml::to_string(&MorphState::Scattered).unwrap().trim(), "SCATTERED");
    }
}
