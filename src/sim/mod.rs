//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied dt only, no wall clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod block;
pub mod camera;
pub mod landing;
pub mod pendulum;
pub mod state;
pub mod sway;
pub mod tick;
pub mod tower;

pub use block::Block;
pub use camera::Camera;
pub use landing::{FailureCause, Landing, fall, resolve_landing};
pub use pendulum::Pendulum;
pub use state::{GameEvent, GamePhase, GameState, RngState};
pub use sway::Sway;
pub use tick::{TickInput, autoplay_wants_drop, tick};
pub use tower::Tower;
