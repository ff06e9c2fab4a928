//! Game state and core simulation types
//!
//! Everything a renderer or test needs to observe lives in [`GameState`].
//! Mutation happens only inside the tick function and the control surface.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::level;
use crate::consts::*;

/// Current phase of a session
///
/// `GameOver` and `GameWon` are terminal until an explicit reset.
/// `LevelComplete` is transient, cleared by the advance-level call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Normal gameplay (ball may be docked or in play)
    #[default]
    InProgress,
    /// All blocks of a non-final level destroyed, awaiting advance
    LevelComplete,
    /// Out of lives
    GameOver,
    /// Final level cleared
    GameWon,
}

/// Paddle move commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// The player's paddle
///
/// `pos` is the top-left corner; y never changes after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                GAME_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
                GAME_HEIGHT - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN,
            ),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    /// Step horizontally by one move command, clamped to the board
    pub fn shift(&mut self, direction: Direction) {
        let step = match direction {
            Direction::Left => -PADDLE_SPEED,
            Direction::Right => PADDLE_SPEED,
        };
        self.pos.x = (self.pos.x + step).clamp(0.0, GAME_WIDTH - self.width);
    }
}

/// The ball
///
/// While docked (`in_play == false`) the ball rides the paddle center with
/// zero velocity. Velocity is in pixels per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub in_play: bool,
}

impl Ball {
    /// Create a ball docked on the given paddle
    pub fn docked_on(paddle: &Paddle) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            in_play: false,
        };
        ball.dock(paddle);
        ball
    }

    /// Re-dock on the paddle: zero velocity, centered just above it
    pub fn dock(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(paddle.center_x(), paddle.pos.y - self.radius);
        self.vel = Vec2::ZERO;
        self.in_play = false;
    }

    /// Keep a docked ball slaved to the paddle center
    pub fn follow(&mut self, paddle: &Paddle) {
        if !self.in_play {
            self.pos.x = paddle.center_x();
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A destructible block
///
/// `destroyed` is one-way for the block's lifetime; only a level load or a
/// full reset produces fresh blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Cosmetic, carried from the level palette
    pub color: String,
    pub destroyed: bool,
}

impl Block {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }
}

/// Complete game state (single source of truth, serializable snapshot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    /// Layout order, stable ids starting at 0 per level
    pub blocks: Vec<Block>,
    pub score: u32,
    pub lives: u8,
    /// Current level, 1-based
    pub level: u32,
    pub phase: GamePhase,
    /// Counts destroyed blocks across the session, plus manual triggers;
    /// never decreases within a session
    pub proof_count: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh session: level 1, full lives, zero score
    pub fn new() -> Self {
        let paddle = Paddle::default();
        let ball = Ball::docked_on(&paddle);
        Self {
            paddle,
            ball,
            blocks: level::layout_for(1, BLOCK_WIDTH, BLOCK_HEIGHT, BLOCK_GAP),
            score: 0,
            lives: 3,
            level: 1,
            phase: GamePhase::InProgress,
            proof_count: 0,
            time_ticks: 0,
        }
    }

    /// Swap in a level's fresh layout and re-center paddle and ball
    ///
    /// Score, lives and proof_count carry across levels.
    pub fn load_level(&mut self, level: u32) {
        self.level = level;
        self.blocks = level::layout_for(level, BLOCK_WIDTH, BLOCK_HEIGHT, BLOCK_GAP);
        self.paddle = Paddle::default();
        self.ball.dock(&self.paddle);
        self.phase = GamePhase::InProgress;
    }

    pub fn blocks_destroyed(&self) -> u32 {
        self.blocks.iter().filter(|b| b.destroyed).count() as u32
    }

    pub fn all_blocks_destroyed(&self) -> bool {
        self.blocks.iter().all(|b| b.destroyed)
    }
}
