//! Ghost Town - a single-screen dodge-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (masks, entities, game state)
//! - `assets`: Sprite loading, scaling, and mask derivation
//! - `render`: macroquad frame drawing
//! - `settings`: Runtime settings

pub mod assets;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz, the classic 20 ms frame wait)
    pub const SIM_DT: f32 = 0.02;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Playfield dimensions in pixels
    pub const FIELD_WIDTH: i32 = 600;
    pub const FIELD_HEIGHT: i32 = 400;

    /// Sprite edge lengths (all sprites are square)
    pub const PLAYER_SIZE: i32 = 60;
    pub const ENEMY_SIZE: i32 = 50;
    pub const ORB_SIZE: i32 = 40;
    pub const SHIELD_SIZE: i32 = 72;

    /// Enemy roster, fixed for the whole session
    pub const ROAMING_ENEMIES: usize = 3;
    pub const PLATFORM_ENEMIES: usize = 2;

    /// Starting life
    pub const START_LIFE: f32 = 3.0;
    /// Orbs banked before a shield activates
    pub const SHIELD_THRESHOLD: u32 = 3;
    /// Most power-ups on the field at once
    pub const MAX_ACTIVE_ORBS: usize = 3;
    /// Per-frame power-up spawn chance, percent
    pub const ORB_SPAWN_PERCENT: u32 = 3;
    /// Degrees a rotating power-up turns per frame
    pub const ROTATION_STEP_DEG: f32 = 3.0;

    /// Seconds the final frame is held after game over
    pub const GAME_OVER_HOLD_SECS: f32 = 2.0;
}
