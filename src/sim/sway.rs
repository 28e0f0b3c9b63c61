//! Tower sway feedback
//!
//! Sloppy drops make the whole tower wobble. The wobble is purely visual:
//! it offsets how placed blocks are drawn, never where they are for landing.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Accumulated instability of the tower
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sway {
    /// Lateral amplitude (only grows until restart)
    pub amplitude: f32,
    /// Oscillation phase (radians)
    pub phase: f32,
    /// Phase speed (radians/sec)
    pub speed: f32,
}

impl Sway {
    /// Feed in a placement error as a fraction of the allowed overhang
    pub fn add_error(&mut self, error_ratio: f32, tuning: &Tuning) {
        self.amplitude += error_ratio.max(0.0) * tuning.sway_gain;
        self.speed = tuning.sway_base_speed + self.amplitude * tuning.sway_speed_gain;
    }

    pub fn advance(&mut self, dt: f32) {
        if self.amplitude > 0.0 && dt > 0.0 {
            self.phase += self.speed * dt;
        }
    }

    /// Horizontal offset to draw placed blocks at this instant
    pub fn offset(&self) -> f32 {
        if self.amplitude > 0.0 {
            self.phase.sin() * self.amplitude
        } else {
            0.0
        }
    }
}
