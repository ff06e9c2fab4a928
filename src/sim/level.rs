//! Level catalog and block layout generation
//!
//! Static per-level tuning plus the pure function that turns it into a
//! centered block grid. No RNG, no side effects: the same inputs always
//! produce the same layout.

use glam::Vec2;

use super::state::Block;
use crate::consts::{BLOCK_TOP_MARGIN, GAME_WIDTH};

/// Highest playable level; clearing it wins the game
pub const MAX_LEVEL: u32 = 3;

/// Immutable per-level tuning
#[derive(Debug, Clone, Copy)]
pub struct LevelConfig {
    pub rows: u32,
    pub blocks_per_row: u32,
    /// Cyclic by row
    pub palette: &'static [&'static str],
    /// Launch speed in pixels per tick
    pub ball_speed: f32,
}

const LEVELS: [LevelConfig; MAX_LEVEL as usize] = [
    LevelConfig {
        rows: 5,
        blocks_per_row: 8,
        palette: &["#9b87f5", "#7E69AB", "#6E59A5", "#D6BCFA", "#8B5CF6"],
        ball_speed: 5.0,
    },
    LevelConfig {
        rows: 6,
        blocks_per_row: 9,
        palette: &["#9b87f5", "#7E69AB", "#6E59A5", "#D6BCFA", "#8B5CF6", "#B45309"],
        ball_speed: 6.0,
    },
    LevelConfig {
        rows: 7,
        blocks_per_row: 10,
        palette: &[
            "#9b87f5", "#7E69AB", "#6E59A5", "#D6BCFA", "#8B5CF6", "#B45309", "#9D174D",
        ],
        ball_speed: 7.0,
    },
];

/// Resolve a level's config, falling back to level 1 for unknown levels
pub fn config_for(level: u32) -> &'static LevelConfig {
    level
        .checked_sub(1)
        .and_then(|i| LEVELS.get(i as usize))
        .unwrap_or(&LEVELS[0])
}

/// Build the block grid for a level
///
/// Blocks get sequential ids starting at 0, row-major. Each row is centered
/// horizontally on the board and colored by cycling the level palette.
pub fn layout_for(level: u32, block_width: f32, block_height: f32, gap: f32) -> Vec<Block> {
    let config = config_for(level);
    let mut blocks = Vec::with_capacity((config.rows * config.blocks_per_row) as usize);

    let row_span = config.blocks_per_row as f32 * (block_width + gap) - gap;
    let x_offset = (GAME_WIDTH - row_span) / 2.0;

    let mut id = 0;
    for row in 0..config.rows {
        let y = row as f32 * (block_height + gap) + BLOCK_TOP_MARGIN;
        let color = config.palette[row as usize % config.palette.len()];

        for col in 0..config.blocks_per_row {
            let x = col as f32 * (block_width + gap) + x_offset;
            blocks.push(Block {
                id,
                pos: Vec2::new(x, y),
                width: block_width,
                height: block_height,
                color: color.to_owned(),
                destroyed: false,
            });
            id += 1;
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BLOCK_GAP, BLOCK_HEIGHT, BLOCK_WIDTH};

    #[test]
    fn test_level_one_reference_layout() {
        let blocks = layout_for(1, BLOCK_WIDTH, BLOCK_HEIGHT, BLOCK_GAP);
        assert_eq!(blocks.len(), 40); // 5 rows x 8 columns
        assert!(blocks.iter().all(|b| !b.destroyed));

        // Sequential row-major ids
        for (i, block) in blocks.iter().enumerate() {
            assert_eq!(block.id, i as u32);
        }

        // First row sits at the top margin, rows step by height + gap
        assert_eq!(blocks[0].pos.y, BLOCK_TOP_MARGIN);
        assert_eq!(blocks[8].pos.y, BLOCK_TOP_MARGIN + BLOCK_HEIGHT + BLOCK_GAP);
    }

    #[test]
    fn test_rows_are_centered() {
        let blocks = layout_for(1, BLOCK_WIDTH, BLOCK_HEIGHT, BLOCK_GAP);
        let first = &blocks[0];
        let last = &blocks[7];
        let left_margin = first.pos.x;
        let right_margin = GAME_WIDTH - (last.pos.x + last.width);
        assert!((left_margin - right_margin).abs() < 0.001);
    }

    #[test]
    fn test_palette_cycles_by_row() {
        let config = config_for(3);
        let blocks = layout_for(3, BLOCK_WIDTH, BLOCK_HEIGHT, BLOCK_GAP);
        for block in &blocks {
            let row = (block.id / config.blocks_per_row) as usize;
            assert_eq!(block.color, config.palette[row % config.palette.len()]);
        }
    }

    #[test]
    fn test_unknown_level_falls_back_to_level_one() {
        let fallback = layout_for(99, BLOCK_WIDTH, BLOCK_HEIGHT, BLOCK_GAP);
        let level_one = layout_for(1, BLOCK_WIDTH, BLOCK_HEIGHT, BLOCK_GAP);
        assert_eq!(fallback.len(), level_one.len());
        assert_eq!(config_for(0).rows, config_for(1).rows);
        assert_eq!(config_for(99).ball_speed, 5.0);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = layout_for(2, BLOCK_WIDTH, BLOCK_HEIGHT, BLOCK_GAP);
        let b = layout_for(2, BLOCK_WIDTH, BLOCK_HEIGHT, BLOCK_GAP);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.color, y.color);
        }
    }
}
