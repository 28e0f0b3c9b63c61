//! Block geometry
//!
//! A block is an axis-aligned rectangle described by its center, width and
//! height. Only horizontal extents matter for landing: blocks always come
//! to rest flush on top of the block below, so overlap and overhang are
//! measured along x.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::span;

/// A rectangular tower block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Center position (world space)
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Display color (r, g, b)
    pub color: [f32; 3],
}

impl Block {
    pub fn new(pos: Vec2, width: f32, height: f32, color: [f32; 3]) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "block sizes must be positive");
        Self {
            pos,
            width,
            height,
            color,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        span(self.pos.x, self.width).0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        span(self.pos.x, self.width).1
    }

    /// Y of the top face
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// Y of the bottom face
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.height / 2.0
    }

    /// True if the horizontal extents share interior. Touching edges do not
    /// count.
    pub fn overlaps(&self, other: &Block) -> bool {
        !(self.right() <= other.left() || other.right() <= self.left())
    }

    /// How far this block's left edge sticks out past `base`'s left edge
    pub fn left_overhang(&self, base: &Block) -> f32 {
        (base.left() - self.left()).max(0.0)
    }

    /// How far this block's right edge sticks out past `base`'s right edge
    pub fn right_overhang(&self, base: &Block) -> f32 {
        (self.right() - base.right()).max(0.0)
    }

    /// Unsupported material on both sides, summed
    pub fn total_overhang(&self, base: &Block) -> f32 {
        self.left_overhang(base) + self.right_overhang(base)
    }
}
