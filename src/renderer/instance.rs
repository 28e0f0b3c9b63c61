//! Instance types for 2D block rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::Block;

/// One rectangle to draw, in screen space
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BlockInstance {
    pub center: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl BlockInstance {
    pub const fn new(center: [f32; 2], size: [f32; 2], color: [f32; 4]) -> Self {
        Self {
            center,
            size,
            color,
        }
    }

    /// Instance for `block` drawn with its center moved by `offset`
    pub fn from_block(block: &Block, offset: Vec2) -> Self {
        let [r, g, b] = block.color;
        Self::new(
            (block.pos + offset).to_array(),
            [block.width, block.height],
            [r, g, b, 1.0],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<BlockInstance>(), 8 * 4);
    }

    #[test]
    fn test_from_block_applies_offset() {
        let block = Block::new(Vec2::new(0.1, 0.5), 0.25, 0.25, [0.4, 0.5, 0.6]);
        let inst = BlockInstance::from_block(&block, Vec2::new(0.02, -0.5));
        assert!((inst.center[0] - 0.12).abs() < 1e-6);
        assert!(inst.center[1].abs() < 1e-6);
        assert_eq!(inst.size, [0.25, 0.25]);
        assert_eq!(inst.color, [0.4, 0.5, 0.6, 1.0]);
    }
}
