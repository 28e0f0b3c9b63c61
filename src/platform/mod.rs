//! Platform abstraction layer
//!
//! Turns wall-clock frame times into dt values the simulation can digest.

use std::time::Instant;

use crate::consts::{MAX_FRAME_DT, MIN_FRAME_DT};

/// Clamp a raw frame time into `[min_dt, max_dt]`. NaN and negative values
/// become `min_dt`.
#[inline]
pub fn clamp_dt(raw: f32, min_dt: f32, max_dt: f32) -> f32 {
    if raw.is_nan() {
        return min_dt;
    }
    raw.clamp(min_dt, max_dt)
}

/// Measures time between frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    min_dt: f32,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MIN_FRAME_DT, MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(min_dt: f32, max_dt: f32) -> Self {
        Self {
            last: None,
            min_dt,
            max_dt: max_dt.max(min_dt),
        }
    }

    /// Clamped seconds since the previous call (min_dt on the first call)
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Same as `tick` with an explicit timestamp
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let raw = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => self.min_dt,
        };
        self.last = Some(now);
        clamp_dt(raw, self.min_dt, self.max_dt)
    }

    /// Forget the previous frame (after a pause or restart)
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_clamp_dt() {
        assert_eq!(clamp_dt(0.5, 0.001, 0.1), 0.1);
        assert_eq!(clamp_dt(0.0, 0.001, 0.1), 0.001);
        assert_eq!(clamp_dt(-3.0, 0.001, 0.1), 0.001);
        assert_eq!(clamp_dt(f32::NAN, 0.001, 0.1), 0.001);
        assert_eq!(clamp_dt(0.016, 0.001, 0.1), 0.016);
    }

    #[test]
    fn test_clock_measures_and_clamps() {
        let mut clock = FrameClock::default();
        let start = Instant::now();
        assert_eq!(clock.tick_at(start), MIN_FRAME_DT);

        let dt = clock.tick_at(start + Duration::from_millis(20));
        assert!((dt - 0.02).abs() < 1e-4);

        // A long stall is capped
        let dt = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(dt, MAX_FRAME_DT);

        clock.reset();
        assert_eq!(clock.tick_at(start + Duration::from_secs(6)), MIN_FRAME_DT);
    }
}
