//! Game state and core simulation types
//!
//! One `GameState` is one play session. The presentation layer owns it and
//! drives it through `update`, `request_drop` and `restart`; everything it
//! needs to draw a frame is readable through accessors.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::block::Block;
use super::camera::Camera;
use super::landing::FailureCause;
use super::pendulum::Pendulum;
use super::sway::Sway;
use super::tower::Tower;
use crate::tuning::{Tuning, TuningError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Swinging, dropping and stacking
    Active,
    /// Run ended by a miss or excess overhang; only `restart` leaves it
    Ended,
}

/// Notable things that happened during an update, for sound, UI and the
/// score table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The current block was released
    Dropped,
    /// A block joined the tower
    BlockPlaced { score: u64, overhang: f32 },
    /// The run is over; `score` is final
    GameOver { score: u64, cause: FailureCause },
    /// State was reset to a fresh session
    Restarted,
}

/// Lowest value of any color channel for spawned blocks
pub const MIN_COLOR_CHANNEL: f32 = 0.3;

/// RNG state wrapper for serialization
///
/// Each draw uses a fresh PCG stream so the state is just two integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next draw; advances the stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }

    /// Random block color with every channel in [0.3, 1.0)
    pub fn next_color(&mut self) -> [f32; 3] {
        let mut rng = self.next_rng();
        [
            rng.random_range(MIN_COLOR_CHANNEL..1.0),
            rng.random_range(MIN_COLOR_CHANNEL..1.0),
            rng.random_range(MIN_COLOR_CHANNEL..1.0),
        ]
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state (block colors)
    pub rng_state: RngState,
    /// Balance values
    pub tuning: Tuning,
    pub(crate) phase: GamePhase,
    /// Successful placements this session
    pub(crate) score: u64,
    /// Block on the hook or in the air
    pub(crate) current: Option<Block>,
    /// True once the current block has been released
    pub(crate) falling: bool,
    pub(crate) pendulum: Pendulum,
    pub(crate) tower: Tower,
    pub(crate) camera: Camera,
    pub(crate) sway: Sway,
    /// Events since the last drain (not part of saved state)
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new session with the given balance values.
    /// Rejects tuning that would produce degenerate blocks or a NaN swing.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            pendulum: Pendulum::new(tuning.initial_swing_speed),
            tuning,
            phase: GamePhase::Active,
            score: 0,
            current: None,
            falling: false,
            tower: Tower::new(),
            camera: Camera::default(),
            sway: Sway::default(),
            events: Vec::new(),
        };

        state.spawn_block();

        state
    }

    /// Hang a fresh block from the hook, swinging from the center
    pub(crate) fn spawn_block(&mut self) {
        let color = self.rng_state.next_color();
        self.pendulum = Pendulum::new(self.tuning.initial_swing_speed);
        self.falling = false;

        let pos = self
            .pendulum
            .bob_position(self.hook_world_pos(), self.tuning.rope_length);
        self.current = Some(Block::new(
            pos,
            self.tuning.block_width,
            self.tuning.block_height,
            color,
        ));
    }

    /// Release the swinging block. Ignored while falling or after the run
    /// ended; returns whether the drop happened.
    pub fn request_drop(&mut self) -> bool {
        if self.phase != GamePhase::Active || self.falling || self.current.is_none() {
            return false;
        }
        self.falling = true;
        self.events.push(GameEvent::Dropped);
        log::debug!("Block dropped at x={:.3}", self.current.map_or(0.0, |b| b.pos.x));
        true
    }

    /// Throw away the session and start over with the same seed and tuning
    pub fn restart(&mut self) {
        self.rng_state = RngState::new(self.seed);
        self.phase = GamePhase::Active;
        self.score = 0;
        self.tower.clear();
        self.camera = Camera::default();
        self.sway = Sway::default();
        self.spawn_block();
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted (seed {})", self.seed);
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// The block on the hook or in the air
    pub fn current_block(&self) -> Option<&Block> {
        self.current.as_ref()
    }

    pub fn is_falling(&self) -> bool {
        self.falling
    }

    pub fn pendulum(&self) -> &Pendulum {
        &self.pendulum
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_offset(&self) -> f32 {
        self.camera.offset
    }

    pub fn sway(&self) -> &Sway {
        &self.sway
    }

    /// Lateral draw offset for placed blocks right now
    pub fn sway_offset(&self) -> f32 {
        self.sway.offset()
    }

    /// Hook position in world space (moves with the camera)
    pub fn hook_world_pos(&self) -> Vec2 {
        Vec2::new(self.tuning.hook_x, self.camera.to_world_y(self.tuning.hook_y))
    }

    /// Hook position on screen (fixed)
    pub fn hook_screen_pos(&self) -> Vec2 {
        Vec2::new(self.tuning.hook_x, self.tuning.hook_y)
    }

    /// End the run and tell whoever is listening
    pub(crate) fn end(&mut self, cause: FailureCause) {
        self.phase = GamePhase::Ended;
        self.events.push(GameEvent::GameOver {
            score: self.score,
            cause,
        });
        match cause {
            FailureCause::Miss => log::info!("Game over: missed the tower (score {})", self.score),
            FailureCause::Overhang {
                overhang,
                max_overhang,
            } => log::info!(
                "Game over: overhang {:.3} > {:.3} (score {})",
                overhang,
                max_overhang,
                self.score
            ),
        }
    }
}
