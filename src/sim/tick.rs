//! Fixed timestep simulation tick
//!
//! One call to [`advance`] is one tick: a single Euler step of the ball plus
//! collision response, scoring and phase transitions. There is no
//! sub-stepping and no continuous collision detection; tunneling at extreme
//! speeds is a known, accepted limitation.

use glam::Vec2;
use rand::Rng;

use super::collision::{HitAxis, ball_rect_overlap, block_hit_axis, paddle_bounce};
use super::level::MAX_LEVEL;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Advance the game state by one fixed timestep
///
/// No-op while the ball is docked or the session is in a terminal or
/// level-complete phase; callers may invoke it unconditionally. The RNG is
/// injected so trajectories are reproducible under a fixed seed: it only
/// feeds the small anti-degeneracy nudges, never the core reflection math.
pub fn advance(state: &mut GameState, rng: &mut impl Rng) {
    if !state.ball.in_play || state.phase != GamePhase::InProgress {
        return;
    }

    state.time_ticks += 1;

    // Euler step: one tick = one unit of integration
    state.ball.pos += state.ball.vel;

    reflect_off_walls(state, rng);

    // Bottom edge is the failure boundary; a miss ends the tick early
    if state.ball.pos.y + state.ball.radius > GAME_HEIGHT {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("game over at score {}", state.score);
        }
        state.ball.dock(&state.paddle);
        return;
    }

    bounce_off_paddle(state);

    let destroyed_this_tick = collide_with_blocks(state, rng);

    // Flat bonus per tick regardless of how many blocks went down
    if destroyed_this_tick {
        state.score += 10;
    }

    if state.all_blocks_destroyed() {
        if state.level >= MAX_LEVEL {
            state.phase = GamePhase::GameWon;
            log::info!("final level cleared, score {}", state.score);
        } else {
            state.phase = GamePhase::LevelComplete;
            log::debug!("level {} cleared", state.level);
        }
    }
}

/// Reflect off the side and top walls
///
/// Each reflection nudges the *other* velocity component by up to ±5% of
/// the current speed. Purely an anti-degeneracy measure: without it the
/// ball settles into perfectly periodic bounce patterns.
fn reflect_off_walls(state: &mut GameState, rng: &mut impl Rng) {
    let r = state.ball.radius;
    let speed = state.ball.speed();

    if state.ball.pos.x - r < 0.0 || state.ball.pos.x + r > GAME_WIDTH {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.vel.y += rng.random_range(-WALL_BOUNCE_JITTER..=WALL_BOUNCE_JITTER) * speed;
    }

    if state.ball.pos.y - r < 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
        state.ball.vel.x += rng.random_range(-WALL_BOUNCE_JITTER..=WALL_BOUNCE_JITTER) * speed;
    }
}

/// Paddle deflection, gated on downward motion
///
/// The gate prevents repeated re-collision while the ball is embedded in
/// the paddle. It also means an upward-moving ball passes through; that
/// quirk is part of how the game plays and stays.
fn bounce_off_paddle(state: &mut GameState) {
    if state.ball.vel.y <= 0.0 {
        return;
    }
    if !ball_rect_overlap(state.ball.pos, state.ball.radius, &state.paddle.rect()) {
        return;
    }

    let hit_fraction = (state.ball.pos.x - state.paddle.left()) / state.paddle.width;
    state.ball.vel = paddle_bounce(hit_fraction, state.ball.speed());
}

/// Destroy every block overlapping the ball this tick and reflect
///
/// Simultaneous overlaps all apply: each destroyed block contributes its
/// own velocity change and the last one computed wins. Rare enough at one
/// block-height per tick of travel that no resolution order is imposed.
fn collide_with_blocks(state: &mut GameState, rng: &mut impl Rng) -> bool {
    let ball_pos = state.ball.pos;
    let ball_radius = state.ball.radius;
    let mut any_destroyed = false;

    for block in &mut state.blocks {
        if block.destroyed {
            continue;
        }
        if !ball_rect_overlap(ball_pos, ball_radius, &block.rect()) {
            continue;
        }

        block.destroyed = true;
        state.proof_count += 1;
        any_destroyed = true;

        match block_hit_axis(ball_pos, &block.rect()) {
            HitAxis::Horizontal => {
                state.ball.vel.x = -state.ball.vel.x;
            }
            HitAxis::Vertical => {
                state.ball.vel.y = -state.ball.vel.y;
                enforce_min_horizontal(&mut state.ball.vel, rng);
            }
        }
    }

    any_destroyed
}

/// Keep the ball from entering a perpetual vertical bounce
///
/// After a vertical reflection the horizontal component must be at least
/// 30% of the speed magnitude; if it is not, push it there with a small
/// randomized margin, keeping (or randomizing, when zero) its sign.
fn enforce_min_horizontal(vel: &mut Vec2, rng: &mut impl Rng) {
    let speed = vel.length();
    if vel.x.abs() >= MIN_HORIZONTAL_RATIO * speed {
        return;
    }

    let sign = if vel.x == 0.0 {
        if rng.random_bool(0.5) { 1.0 } else { -1.0 }
    } else {
        vel.x.signum()
    };
    let ratio = MIN_HORIZONTAL_RATIO + rng.random_range(0.0..HORIZONTAL_JITTER);
    vel.x = sign * ratio * speed;
}
