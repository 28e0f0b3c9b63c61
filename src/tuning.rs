//! Data-driven game balance
//!
//! Every number the simulation reads lives here so balance can be tweaked
//! from a JSON document without recompiling. Fields missing from the
//! document keep their defaults from [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning values
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("overhang_limit must be in (0, 1] (got {0})")]
    OverhangLimit(f32),
    #[error("invalid tuning document: {0}")]
    Parse(String),
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub block_width: f32,
    pub block_height: f32,
    pub fall_speed: f32,

    pub hook_x: f32,
    pub hook_y: f32,
    pub ground_y: f32,

    pub rope_length: f32,
    pub max_swing_angle: f32,
    pub gravity: f32,
    pub initial_swing_speed: f32,

    pub overhang_limit: f32,
    pub overhang_epsilon: f32,

    pub camera_speed: f32,
    pub camera_margin: f32,

    pub sway_gain: f32,
    pub sway_base_speed: f32,
    pub sway_speed_gain: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            fall_speed: FALL_SPEED,

            hook_x: HOOK_X,
            hook_y: HOOK_Y,
            ground_y: GROUND_Y,

            rope_length: ROPE_LENGTH,
            max_swing_angle: MAX_SWING_ANGLE,
            gravity: GRAVITY,
            initial_swing_speed: INITIAL_SWING_SPEED,

            overhang_limit: OVERHANG_LIMIT,
            overhang_epsilon: OVERHANG_EPSILON,

            camera_speed: CAMERA_SPEED,
            camera_margin: CAMERA_MARGIN,

            sway_gain: SWAY_GAIN,
            sway_base_speed: SWAY_BASE_SPEED,
            sway_speed_gain: SWAY_SPEED_GAIN,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the values the simulation divides by or integrates with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("block_width", self.block_width),
            ("block_height", self.block_height),
            ("fall_speed", self.fall_speed),
            ("rope_length", self.rope_length),
            ("max_swing_angle", self.max_swing_angle),
            ("gravity", self.gravity),
            ("camera_speed", self.camera_speed),
        ];
        for (field, value) in positive {
            // Written this way so NaN is rejected too
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        if !(self.overhang_limit > 0.0 && self.overhang_limit <= 1.0) {
            return Err(TuningError::OverhangLimit(self.overhang_limit));
        }
        Ok(())
    }

    /// Distance the camera keeps between the tower top and the hook
    pub fn camera_clearance(&self) -> f32 {
        self.rope_length + self.block_height + self.camera_margin
    }

    /// Largest overhang a block of `width` may have and still be placed
    pub fn max_overhang(&self, width: f32) -> f32 {
        width * self.overhang_limit
    }
}
