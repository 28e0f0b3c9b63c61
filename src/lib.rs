//! Sky Stacker - a pendulum block-stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pendulum, landing, tower, camera, sway)
//! - `renderer`: Renderer-facing frame snapshots (no graphics API calls)
//! - `platform`: Frame clock and dt clamping
//! - `persistence`: JSON file store for settings and scores
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Largest dt a caller should feed into one update (paused/slow frames)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Smallest dt a caller should feed into one update
    pub const MIN_FRAME_DT: f32 = 0.0001;

    /// Block defaults (normalized world units)
    pub const BLOCK_WIDTH: f32 = 0.25;
    pub const BLOCK_HEIGHT: f32 = 0.25;
    /// Constant fall speed once dropped (no acceleration)
    pub const FALL_SPEED: f32 = 1.2;

    /// Hook position ON SCREEN; the world scrolls beneath it
    pub const HOOK_X: f32 = 0.0;
    pub const HOOK_Y: f32 = 0.9;
    /// Ground level (world space)
    pub const GROUND_Y: f32 = -0.95;

    /// Pendulum
    pub const ROPE_LENGTH: f32 = 0.75;
    pub const MAX_SWING_ANGLE: f32 = 1.0; // radians (~57 degrees)
    pub const GRAVITY: f32 = 9.81;
    /// Angular velocity given to every fresh block so it never hangs idle
    pub const INITIAL_SWING_SPEED: f32 = 2.0;

    /// Fraction of the block width allowed to hang over the block below
    pub const OVERHANG_LIMIT: f32 = 0.33;
    /// Overhang below this is a clean drop and adds no sway
    pub const OVERHANG_EPSILON: f32 = 0.01;

    /// Camera follow
    pub const CAMERA_SPEED: f32 = 3.0;
    /// Extra room kept between the tower top and the hanging block
    pub const CAMERA_MARGIN: f32 = 0.25;

    /// Tower sway feedback
    pub const SWAY_GAIN: f32 = 0.05;
    pub const SWAY_BASE_SPEED: f32 = 2.0;
    pub const SWAY_SPEED_GAIN: f32 = 3.0;
}

/// Horizontal extent `[left, right]` of a span centered at `x`
#[inline]
pub fn span(x: f32, width: f32) -> (f32, f32) {
    let half = width / 2.0;
    (x - half, x + half)
}
