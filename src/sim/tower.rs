//! The stack of placed blocks

use serde::{Deserialize, Serialize};

use super::block::Block;

/// Placed blocks in stacking order (index 0 sits on the ground)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    blocks: Vec<Block>,
}

impl Tower {
    pub fn new() -> Self {
        Self::default()
    }

    /// The landing target for the next drop
    pub fn top(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Y of the tower's top face, if anything has been placed
    pub fn top_height(&self) -> Option<f32> {
        self.top().map(Block::top)
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
