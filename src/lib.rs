//! Proof Breaker - a block-breaking arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `game`: Coordinating owner of the state, control surface, tick driver
//! - `proof`: Stubbed verification collaborator (commitment over a play summary)

pub mod game;
pub mod proof;
pub mod sim;

pub use game::Game;
pub use proof::{GameSummary, VerificationResult};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in seconds (~60 Hz)
    pub const TICK_DT: f32 = 0.016;
    /// Maximum catch-up steps per update to prevent spiral of death
    pub const MAX_CATCHUP_TICKS: u32 = 8;

    /// Board dimensions (pixels)
    pub const GAME_WIDTH: f32 = 600.0;
    pub const GAME_HEIGHT: f32 = 500.0;

    /// Paddle defaults - sits a fixed margin above the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    /// Horizontal step per move command (pixels)
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults - velocities are in pixels per tick
    pub const BALL_RADIUS: f32 = 8.0;

    /// Block grid defaults
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_GAP: f32 = 10.0;
    pub const BLOCK_TOP_MARGIN: f32 = 50.0;

    /// Cross-axis speed perturbation applied on wall bounces (fraction of speed)
    pub const WALL_BOUNCE_JITTER: f32 = 0.05;
    /// Minimum horizontal component after a vertical block bounce (fraction of speed)
    pub const MIN_HORIZONTAL_RATIO: f32 = 0.3;
    /// Extra randomized margin on top of the minimum horizontal component
    pub const HORIZONTAL_JITTER: f32 = 0.1;
}
