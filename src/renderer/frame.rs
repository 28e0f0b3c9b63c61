//! Per-frame snapshot of everything the view layer draws

use glam::Vec2;

use super::instance::BlockInstance;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};

/// Rope from the hook to the top of the swinging block (screen space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rope {
    pub from: Vec2,
    pub to: Vec2,
}

impl Rope {
    pub fn length(&self) -> f32 {
        (self.to - self.from).length()
    }

    /// Rotation from vertical, for drawing a stretched quad
    pub fn angle(&self) -> f32 {
        let d = self.to - self.from;
        d.x.atan2(-d.y)
    }
}

/// Screen-space view of a session
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    /// Placed blocks, ground-most first, with sway applied
    pub tower: Vec<BlockInstance>,
    /// Block on the hook or in the air (never swayed)
    pub current: Option<BlockInstance>,
    /// Absent while the block is falling
    pub rope: Option<Rope>,
    pub hook: Vec2,
    /// Ground level on screen
    pub ground_y: f32,
    pub score: u64,
    pub phase: GamePhase,
}

impl FrameView {
    pub fn capture(state: &GameState, settings: &Settings) -> Self {
        let camera = state.camera();
        let scroll = Vec2::new(0.0, -camera.offset);
        let sway = if settings.effective_sway() {
            state.sway_offset()
        } else {
            0.0
        };

        let tower = state
            .tower()
            .blocks()
            .iter()
            .map(|b| BlockInstance::from_block(b, scroll + Vec2::new(sway, 0.0)))
            .collect();

        let current = state
            .current_block()
            .map(|b| BlockInstance::from_block(b, scroll));

        let hook = state.hook_screen_pos();
        let rope = match state.current_block() {
            Some(block) if !state.is_falling() && !state.is_ended() => Some(Rope {
                from: hook,
                to: Vec2::new(block.pos.x, camera.to_screen_y(block.top())),
            }),
            _ => None,
        };

        Self {
            tower,
            current,
            rope,
            hook,
            ground_y: camera.to_screen_y(state.tuning.ground_y),
            score: state.score(),
            phase: state.phase(),
        }
    }

    /// All block instances as raw bytes, tower first then the current block
    pub fn instance_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(
            (self.tower.len() + 1) * std::mem::size_of::<BlockInstance>(),
        );
        bytes.extend_from_slice(bytemuck::cast_slice(&self.tower));
        if let Some(current) = &self.current {
            bytes.extend_from_slice(bytemuck::bytes_of(current));
        }
        bytes
    }

    pub fn instance_count(&self) -> usize {
        self.tower.len() + usize::from(self.current.is_some())
    }
}
