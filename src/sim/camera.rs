//! Camera follow
//!
//! The hook stays fixed on screen while the world scrolls down beneath it.
//! The camera only ever moves up: once the tower grows close enough to the
//! hook it picks a new target and eases toward it exponentially.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Vertical scroll state (world units)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current vertical offset of the view
    pub offset: f32,
    /// Offset the camera is easing toward
    pub target: f32,
}

impl Camera {
    /// Pick a target for the current tower height and ease toward it
    pub fn update(&mut self, dt: f32, tower_top: Option<f32>, tuning: &Tuning) {
        self.target = match tower_top {
            Some(top) => {
                let desired = tuning.camera_clearance();
                let current = tuning.hook_y + self.offset - top;
                if current < desired {
                    top + desired - tuning.hook_y
                } else {
                    // Never back away once advanced
                    self.target.max(self.offset)
                }
            }
            None => 0.0,
        };

        if dt > 0.0 {
            let blend = (tuning.camera_speed * dt).min(1.0);
            self.offset += (self.target - self.offset) * blend;
        }
    }

    /// Hook position in world space for a hook fixed at `screen_y`
    #[inline]
    pub fn to_world_y(&self, screen_y: f32) -> f32 {
        screen_y + self.offset
    }

    /// World-space y as seen on screen
    #[inline]
    pub fn to_screen_y(&self, world_y: f32) -> f32 {
        world_y - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tower_stays_put() {
        let tuning = Tuning::default();
        let mut camera = Camera::default();
        camera.update(0.1, None, &tuning);
        assert_eq!(camera.offset, 0.0);
        assert_eq!(camera.target, 0.0);
    }

    #[test]
    fn test_short_tower_does_not_scroll() {
        let tuning = Tuning::default();
        let mut camera = Camera::default();
        // hook at 0.9, clearance 1.25: tower top below -0.35 needs no scroll
        camera.update(0.1, Some(-0.7), &tuning);
        assert_eq!(camera.target, 0.0);
        assert_eq!(camera.offset, 0.0);
    }

    #[test]
    fn test_tall_tower_eases_toward_target() {
        let tuning = Tuning::default();
        let mut camera = Camera::default();
        camera.update(0.1, Some(0.0), &tuning);
        let expected_target = 0.0 + tuning.camera_clearance() - tuning.hook_y;
        assert!((camera.target - expected_target).abs() < 1e-6);
        // Smoothed, never a jump
        assert!(camera.offset > 0.0 && camera.offset < camera.target);

        for _ in 0..200 {
            camera.update(0.05, Some(0.0), &tuning);
        }
        assert!((camera.offset - expected_target).abs() < 1e-3);
        assert!(camera.offset <= expected_target + 1e-6);
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let tuning = Tuning::default();
        let mut camera = Camera::default();
        camera.update(0.0, Some(0.5), &tuning);
        assert!(camera.target > 0.0);
        assert_eq!(camera.offset, 0.0);
    }
}
