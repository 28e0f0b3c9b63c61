//! Pendulum motion for the hanging block
//!
//! Undamped simple pendulum integrated with explicit Euler. A soft wall at
//! `±max_swing_angle` reflects the swing elastically, so amplitude never
//! decays and the block keeps swinging until it is dropped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Swing state of the current block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pendulum {
    /// Swing angle from vertical (radians, positive swings toward +x)
    pub angle: f32,
    /// Angular velocity (radians/sec)
    pub angular_vel: f32,
}

impl Pendulum {
    /// A fresh pendulum hanging straight down with a starting push
    pub fn new(initial_speed: f32) -> Self {
        Self {
            angle: 0.0,
            angular_vel: initial_speed,
        }
    }

    /// Advance the swing by `dt` seconds
    pub fn step(&mut self, dt: f32, tuning: &Tuning) {
        if !(dt > 0.0) {
            return;
        }

        let angular_accel = -(tuning.gravity / tuning.rope_length) * self.angle.sin();
        self.angular_vel += angular_accel * dt;
        self.angle += self.angular_vel * dt;

        let limit = tuning.max_swing_angle;
        if self.angle > limit {
            self.angle = limit;
            self.angular_vel = -self.angular_vel;
        } else if self.angle < -limit {
            self.angle = -limit;
            self.angular_vel = -self.angular_vel;
        }
    }

    /// Position of the block center for a rope hung from `pivot`
    pub fn bob_position(&self, pivot: Vec2, rope_length: f32) -> Vec2 {
        Vec2::new(
            pivot.x + rope_length * self.angle.sin(),
            pivot.y - rope_length * self.angle.cos(),
        )
    }
}
