//! Game settings and preferences
//!
//! Persisted separately from the score table as a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, MIN_FRAME_DT};
use crate::persistence::{self, StoreError};

/// Longest display name kept in the score table
pub const MAX_NAME_LEN: usize = 16;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name recorded with high scores
    pub player_name: String,

    // === Accessibility ===
    /// Reduced motion (draws the tower without sway)
    pub reduced_motion: bool,

    // === Frame timing ===
    /// Upper clamp for a frame's dt (slow or paused frames)
    pub max_frame_dt: f32,
    /// Lower clamp for a frame's dt (avoid zero-progress ticks)
    pub min_frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            reduced_motion: false,
            max_frame_dt: MAX_FRAME_DT,
            min_frame_dt: MIN_FRAME_DT,
        }
    }
}

impl Settings {
    /// Set the display name, trimmed and capped to `MAX_NAME_LEN` characters.
    /// Blank names fall back to the default.
    pub fn set_player_name(&mut self, name: &str) {
        let trimmed: String = name.trim().chars().take(MAX_NAME_LEN).collect();
        self.player_name = if trimmed.is_empty() {
            Self::default().player_name
        } else {
            trimmed
        };
    }

    /// Whether the renderer should apply tower sway
    pub fn effective_sway(&self) -> bool {
        !self.reduced_motion
    }

    /// Dt clamp bounds with the pair kept ordered and positive
    pub fn frame_dt_bounds(&self) -> (f32, f32) {
        let min = if self.min_frame_dt > 0.0 {
            self.min_frame_dt
        } else {
            MIN_FRAME_DT
        };
        let max = if self.max_frame_dt >= min {
            self.max_frame_dt
        } else {
            MAX_FRAME_DT.max(min)
        };
        (min, max)
    }

    /// Load settings from disk, or defaults if missing/corrupt
    pub fn load(path: &Path) -> Self {
        persistence::load_or_default(path, "settings")
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        persistence::save_json(path, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}
