//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, injected by the caller
//! - Stable block iteration order (layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{HitAxis, Rect, ball_rect_overlap, block_hit_axis, paddle_bounce};
pub use level::{LevelConfig, MAX_LEVEL, config_for, layout_for};
pub use state::{Ball, Block, Direction, GamePhase, GameState, Paddle};
pub use tick::advance;
