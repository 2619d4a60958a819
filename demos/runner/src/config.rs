use serde::Deserialize;
use hop_engine::AssetError;

/// Tuning for the runner, read from `assets/runner.json`.
/// Every field falls back to the built-in value when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Terrain scroll in pixels per tick.
    pub scroll_speed: u32,
    pub player: PlayerTuning,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub start_x: i32,
    pub start_y: i32,
    /// Added to the vertical velocity every airborne tick.
    pub gravity: i32,
    /// Vertical velocity set by a jump (negative is up).
    pub jump_dy: i32,
    /// Ticks during which holding jump keeps re-applying `jump_dy`.
    pub jump_hold_ticks: u32,
    pub run_animation: String,
    pub jump_animation: String,
    pub fall_animation: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            scroll_speed: 6,
            player: PlayerTuning::default(),
        }
    }
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            start_x: 60,
            start_y: 15,
            gravity: 1,
            jump_dy: -10,
            jump_hold_ticks: 12,
            run_animation: "run".into(),
            jump_animation: "jump".into(),
            fall_animation: "fall".into(),
        }
    }
}

impl RunnerConfig {
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }
}
