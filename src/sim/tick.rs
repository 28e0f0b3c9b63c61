//! Per-frame simulation step
//!
//! Order within one update:
//!   1. Camera follows the tower
//!   2. Swinging block advances on its pendulum, or a falling block drops
//!      and is checked for landing
//!   3. Tower sway advances

use super::landing::{Landing, fall, resolve_landing};
use super::state::{GameEvent, GamePhase, GameState};

/// How close (in block widths) the swinging block must be to its landing
/// target before autoplay lets go
pub const AUTOPLAY_TOLERANCE: f32 = 0.1;

/// Edge-triggered commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Release the swinging block
    pub drop: bool,
    /// Start a fresh session
    pub restart: bool,
    /// Demo mode - drop automatically when lined up
    pub autoplay: bool,
}

/// Apply one tick of input, then advance the simulation by `dt`
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        state.restart();
    }

    if input.drop || (input.autoplay && autoplay_wants_drop(state)) {
        state.request_drop();
    }

    state.update(dt);
}

/// True when the swinging block sits over its landing spot
pub fn autoplay_wants_drop(state: &GameState) -> bool {
    if state.phase() != GamePhase::Active || state.is_falling() {
        return false;
    }
    let Some(block) = state.current_block() else {
        return false;
    };
    let target_x = state
        .tower()
        .top()
        .map_or(state.tuning.hook_x, |top| top.pos.x);
    (block.pos.x - target_x).abs() <= block.width * AUTOPLAY_TOLERANCE
}

impl GameState {
    /// Advance the session by `dt` seconds. Does nothing once the run has
    /// ended or for a non-positive `dt`.
    pub fn update(&mut self, dt: f32) {
        if self.phase == GamePhase::Ended {
            return;
        }
        if !(dt > 0.0) {
            log::trace!("Ignoring non-positive dt {dt}");
            return;
        }

        self.camera.update(dt, self.tower.top_height(), &self.tuning);

        if self.falling {
            self.update_falling(dt);
        } else {
            self.update_swinging(dt);
        }

        self.sway.advance(dt);
    }

    fn update_swinging(&mut self, dt: f32) {
        self.pendulum.step(dt, &self.tuning);
        let pos = self
            .pendulum
            .bob_position(self.hook_world_pos(), self.tuning.rope_length);
        if let Some(block) = self.current.as_mut() {
            block.pos = pos;
        }
    }

    fn update_falling(&mut self, dt: f32) {
        let Some(block) = self.current.as_mut() else {
            return;
        };
        fall(block, dt, self.tuning.fall_speed);

        match resolve_landing(block, &self.tower, &self.tuning) {
            Landing::Airborne => {}
            Landing::Placed {
                block,
                overhang,
                error_ratio,
            } => {
                self.tower.push(block);
                self.score += 1;
                if overhang > self.tuning.overhang_epsilon {
                    self.sway.add_error(error_ratio, &self.tuning);
                }
                self.events.push(GameEvent::BlockPlaced {
                    score: self.score,
                    overhang,
                });
                log::debug!(
                    "Placed block #{} at x={:.3} (overhang {:.3})",
                    self.score,
                    block.pos.x,
                    overhang
                );
                self.spawn_block();
            }
            Landing::Failed { block, cause } => {
                self.current = Some(block);
                self.end(cause);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Block;
    use crate::sim::landing::FailureCause;
    use glam::Vec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    /// Run until the current block resolves (placed or failed)
    fn drop_and_settle(state: &mut GameState) {
        assert!(state.request_drop());
        for _ in 0..2000 {
            if !state.is_falling() || state.is_ended() {
                return;
            }
            state.update(DT);
        }
        panic!("block never landed");
    }

    /// Session with one block on the ground at x=0, and the next block
    /// falling from directly above `x`
    fn state_with_falling_block_at(x: f32) -> GameState {
        let mut state = GameState::new(3);
        let ground_y = state.tuning.ground_y;
        state.tower.push(Block::new(
            Vec2::new(0.0, ground_y + 0.125),
            0.25,
            0.25,
            [1.0; 3],
        ));
        state.score = 1;
        if let Some(block) = state.current.as_mut() {
            block.pos.x = x;
        }
        state.falling = true;
        state
    }

    fn settle(state: &mut GameState) {
        for _ in 0..2000 {
            if !state.is_falling() || state.is_ended() {
                return;
            }
            state.update(DT);
        }
        panic!("block never landed");
    }

    #[test]
    fn test_first_block_always_lands() {
        let mut state = GameState::new(5);
        // Swing far off center before dropping
        for _ in 0..7 {
            state.update(DT);
        }
        assert!(state.current_block().unwrap().pos.x.abs() > 0.0);
        drop_and_settle(&mut state);

        assert_eq!(state.phase(), GamePhase::Active);
        assert_eq!(state.score(), 1);
        assert_eq!(state.tower().len(), 1);
        let placed = state.tower().blocks()[0];
        assert!((placed.bottom() - state.tuning.ground_y).abs() < 1e-5);
        // A fresh block is on the hook
        assert!(!state.is_falling());
        assert_eq!(state.pendulum().angle, 0.0);
    }

    #[test]
    fn test_total_miss_ends_game() {
        let mut state = state_with_falling_block_at(0.30);
        settle(&mut state);
        assert!(state.is_ended());
        assert_eq!(state.score(), 1);
        assert_eq!(state.tower().len(), 1);
        assert!(state.drain_events().contains(&GameEvent::GameOver {
            score: 1,
            cause: FailureCause::Miss
        }));
    }

    #[test]
    fn test_small_overhang_places_block() {
        let mut state = state_with_falling_block_at(0.05);
        settle(&mut state);
        assert_eq!(state.phase(), GamePhase::Active);
        assert_eq!(state.score(), 2);
        assert_eq!(state.tower().len(), 2);
        // 0.05 overhang is above the epsilon, so the tower starts swaying
        assert!(state.sway().amplitude > 0.0);

        let [below, above] = state.tower().blocks() else {
            panic!("expected two blocks");
        };
        assert!((above.bottom() - below.top()).abs() < 1e-5);
    }

    #[test]
    fn test_excess_overhang_ends_game() {
        let mut state = state_with_falling_block_at(0.15);
        settle(&mut state);
        assert!(state.is_ended());
        assert_eq!(state.score(), 1);
        assert_eq!(state.tower().len(), 1);
    }

    #[test]
    fn test_clean_drop_adds_no_sway() {
        let mut state = state_with_falling_block_at(0.005);
        settle(&mut state);
        assert_eq!(state.score(), 2);
        assert_eq!(state.sway().amplitude, 0.0);
    }

    #[test]
    fn test_update_is_noop_when_ended() {
        let mut state = state_with_falling_block_at(0.30);
        settle(&mut state);
        let camera = *state.camera();
        let block = *state.current_block().unwrap();
        state.update(DT);
        assert_eq!(*state.camera(), camera);
        assert_eq!(*state.current_block().unwrap(), block);
    }

    #[test]
    fn test_non_positive_dt_does_nothing() {
        let mut state = GameState::new(5);
        let before = *state.current_block().unwrap();
        state.update(0.0);
        state.update(-0.5);
        assert_eq!(*state.current_block().unwrap(), before);
        assert_eq!(state.pendulum().angle, 0.0);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = state_with_falling_block_at(0.05);
        settle(&mut state);
        state.sway.add_error(1.0, &state.tuning);
        state.camera.offset = 1.0;

        state.restart();
        assert_eq!(state.phase(), GamePhase::Active);
        assert_eq!(state.score(), 0);
        assert!(state.tower().is_empty());
        assert_eq!(*state.camera(), Default::default());
        assert_eq!(*state.sway(), Default::default());
        assert!(!state.is_falling());
        assert_eq!(state.pendulum().angle, 0.0);
        let block = state.current_block().unwrap();
        assert_eq!(block.pos.x, state.tuning.hook_x);
        let hang_y = state.tuning.hook_y - state.tuning.rope_length;
        assert!((block.pos.y - hang_y).abs() < 1e-6);
    }

    #[test]
    fn test_restart_via_tick_input_leaves_ended() {
        let mut state = state_with_falling_block_at(0.30);
        settle(&mut state);
        assert!(state.is_ended());
        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.phase(), GamePhase::Active);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_drop_via_tick_input() {
        let mut state = GameState::new(5);
        let input = TickInput {
            drop: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert!(state.is_falling());
    }

    #[test]
    fn test_autoplay_builds_and_camera_follows() {
        let mut state = GameState::new(11);
        let input = TickInput {
            autoplay: true,
            ..Default::default()
        };
        let mut last_target = state.camera().target;
        for _ in 0..60 * 60 {
            tick(&mut state, &input, DT);
            assert!(state.camera().target >= last_target);
            last_target = state.camera().target;
            if state.is_ended() {
                break;
            }
        }
        assert!(state.score() >= 5, "autoplay only scored {}", state.score());
        assert!(state.camera_offset() > 0.0);
    }

    proptest! {
        #[test]
        fn prop_session_invariants_hold_for_any_play(
            steps in proptest::collection::vec((0.0001f32..0.1, any::<bool>()), 1..600),
            seed in any::<u64>(),
        ) {
            let mut state = GameState::new(seed);
            let mut last_target = state.camera().target;
            let mut last_amplitude = state.sway().amplitude;
            let mut last_len = state.tower().len();
            for (dt, drop) in steps {
                let input = TickInput { drop, ..Default::default() };
                tick(&mut state, &input, dt);

                prop_assert!(state.pendulum().angle.abs() <= state.tuning.max_swing_angle);
                prop_assert!(state.camera().target >= last_target);
                prop_assert!(state.sway().amplitude >= last_amplitude);
                prop_assert!(state.tower().len() >= last_len);
                prop_assert_eq!(state.score(), state.tower().len() as u64);
                last_target = state.camera().target;
                last_amplitude = state.sway().amplitude;
                last_len = state.tower().len();
            }
        }
    }
}
