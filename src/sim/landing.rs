//! Drop and landing resolution
//!
//! A dropped block falls at constant speed (terminal velocity, no
//! acceleration). When it reaches its resting height it is snapped flush and
//! judged against the block below:
//! - Empty tower: it lands on the ground, always accepted
//! - No horizontal overlap with the top block: total miss
//! - Overhang beyond `width * overhang_limit`: too sloppy, the run ends
//! - Otherwise placed, with the overhang reported as sway feedback

use serde::{Deserialize, Serialize};

use super::block::Block;
use super::tower::Tower;
use crate::tuning::Tuning;

/// Why a drop ended the run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FailureCause {
    /// The block missed the tower entirely
    Miss,
    /// The block landed but hung too far over the edge
    Overhang { overhang: f32, max_overhang: f32 },
}

/// Result of checking a falling block against the tower
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Landing {
    /// Still above its resting height
    Airborne,
    /// Came to rest and may join the tower
    Placed {
        /// Block snapped to its resting height
        block: Block,
        overhang: f32,
        /// Overhang as a fraction of the allowed maximum (0 on the ground)
        error_ratio: f32,
    },
    /// Came to rest in a losing position
    Failed { block: Block, cause: FailureCause },
}

/// Integrate a falling block downward by `dt` seconds
pub fn fall(block: &mut Block, dt: f32, fall_speed: f32) {
    if dt > 0.0 {
        block.pos.y -= fall_speed * dt;
    }
}

/// Check whether `falling` has reached its resting height and judge it
pub fn resolve_landing(falling: &Block, tower: &Tower, tuning: &Tuning) -> Landing {
    let Some(top) = tower.top() else {
        // First block: the ground accepts anything
        if falling.bottom() > tuning.ground_y {
            return Landing::Airborne;
        }
        let mut block = *falling;
        block.pos.y = tuning.ground_y + block.height / 2.0;
        return Landing::Placed {
            block,
            overhang: 0.0,
            error_ratio: 0.0,
        };
    };

    let target_y = top.top() + falling.height / 2.0;
    if falling.pos.y > target_y {
        return Landing::Airborne;
    }

    let mut block = *falling;
    block.pos.y = target_y;

    if !block.overlaps(top) {
        return Landing::Failed {
            block,
            cause: FailureCause::Miss,
        };
    }

    let overhang = block.total_overhang(top);
    let max_overhang = tuning.max_overhang(block.width);
    if overhang > max_overhang {
        return Landing::Failed {
            block,
            cause: FailureCause::Overhang {
                overhang,
                max_overhang,
            },
        };
    }

    Landing::Placed {
        block,
        overhang,
        error_ratio: overhang / max_overhang,
    }
}
