//! Coordinating game owner: control surface and tick driver
//!
//! [`Game`] is the single owner of the authoritative [`GameState`] and the
//! seeded RNG that feeds the simulation's jitter. Every control call and
//! every tick is one whole transition on the state; observers only ever see
//! it between transitions. No global state, no locks: the caller's loop is
//! the scheduler, and stopping that loop stops everything.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{MAX_CATCHUP_TICKS, TICK_DT};
use crate::proof::GameSummary;
use crate::sim::level::{MAX_LEVEL, config_for};
use crate::sim::state::{Direction, GamePhase, GameState};
use crate::sim::tick::advance;

/// A running game session
#[derive(Debug)]
pub struct Game {
    state: GameState,
    rng: Pcg32,
    seed: u64,
    /// Fixed-step accumulator (seconds of unconsumed real time)
    accumulator: f32,
}

impl Game {
    /// Start a fresh session with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            accumulator: 0.0,
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned snapshot for renderers/observers
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Summary for the external proof-verification collaborator
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.state.score,
            blocks_destroyed: self.state.proof_count,
            game_won: self.state.phase == GamePhase::GameWon,
        }
    }

    /// Discard the session and start over at level 1 with full lives
    ///
    /// Always legal. Reseeds the RNG so a reset session replays identically.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.accumulator = 0.0;
        log::debug!("session reset (seed {})", self.seed);
    }

    /// Launch a docked ball
    ///
    /// Velocity is `(±speed, -speed)` with a random horizontal sign, speed
    /// taken from the current level's config. No-op if the ball is already
    /// in play or the session is not in progress.
    pub fn launch(&mut self) {
        if self.state.ball.in_play || self.state.phase != GamePhase::InProgress {
            return;
        }
        let speed = config_for(self.state.level).ball_speed;
        let dx = if self.rng.random_bool(0.5) { speed } else { -speed };
        self.state.ball.vel = glam::Vec2::new(dx, -speed);
        self.state.ball.in_play = true;
        log::debug!("ball launched at speed {speed}");
    }

    /// Step the paddle one increment left or right
    ///
    /// Clamped to the board; a docked ball rides along. No-op once the
    /// session has ended.
    pub fn move_paddle(&mut self, direction: Direction) {
        match self.state.phase {
            GamePhase::GameOver | GamePhase::GameWon => return,
            GamePhase::InProgress | GamePhase::LevelComplete => {}
        }
        self.state.paddle.shift(direction);
        self.state.ball.follow(&self.state.paddle);
    }

    /// Move on from a completed level
    ///
    /// Loads the next level's layout with re-centered paddle and docked
    /// ball. If no next level exists this falls through to `GameWon`; the
    /// tick's own max-level check should make that unreachable, but the
    /// call still has to handle it. No-op outside `LevelComplete`.
    pub fn advance_level(&mut self) {
        if self.state.phase != GamePhase::LevelComplete {
            return;
        }
        let next = self.state.level + 1;
        if next <= MAX_LEVEL {
            self.state.load_level(next);
            log::info!("advanced to level {next}");
        } else {
            self.state.phase = GamePhase::GameWon;
        }
    }

    /// User-invoked proof event, independent of the tick loop
    ///
    /// Counts only when at least one block has been destroyed; purely feeds
    /// the proof display, no gameplay effect.
    pub fn manual_proof_trigger(&mut self) {
        if self.state.blocks.iter().any(|b| b.destroyed) {
            self.state.proof_count += 1;
        }
    }

    /// Run simulation ticks for `dt` seconds of elapsed real time
    ///
    /// Fixed-step accumulator: consumes whole 16 ms steps, capped per call
    /// so a long stall cannot spiral. Returns the number of ticks run.
    pub fn update(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.min(0.1);

        let mut steps = 0;
        while self.accumulator >= TICK_DT && steps < MAX_CATCHUP_TICKS {
            advance(&mut self.state, &mut self.rng);
            self.accumulator -= TICK_DT;
            steps += 1;
        }
        steps
    }

    /// Drive exactly one tick, bypassing the accumulator
    ///
    /// The synchronous entry point tests and headless drivers use.
    pub fn tick(&mut self) {
        advance(&mut self.state, &mut self.rng);
    }
}
