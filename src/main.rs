//! Headless demo driver
//!
//! Auto-plays a session with a naive tracking policy: launch, chase the
//! ball with the paddle, advance levels as they clear. Prints the final
//! play summary and the stubbed verification result as JSON. A renderer
//! would consume the same snapshots and control calls this loop does.

use proof_breaker::consts::PADDLE_SPEED;
use proof_breaker::sim::{Direction, GamePhase};
use proof_breaker::{Game, proof};

/// Safety cap so a pathological trajectory cannot loop forever
const MAX_TICKS: u64 = 200_000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("starting headless session (seed {seed})");

    let mut game = Game::new(seed);
    game.launch();

    for _ in 0..MAX_TICKS {
        match game.state().phase {
            GamePhase::GameOver | GamePhase::GameWon => break,
            GamePhase::LevelComplete => {
                game.advance_level();
                game.launch();
            }
            GamePhase::InProgress => {
                if !game.state().ball.in_play {
                    game.launch();
                }
            }
        }

        steer_toward_ball(&mut game);
        game.tick();
    }

    let state = game.state();
    log::info!(
        "finished: phase {:?}, level {}, score {}, lives {}, {} ticks",
        state.phase,
        state.level,
        state.score,
        state.lives,
        state.time_ticks
    );

    let summary = game.summary();
    let result = proof::verify(&summary);
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to encode verification result: {err}"),
    }
}

/// Issue at most one paddle move per tick, chasing the ball's x position
///
/// Mirrors the input poller of an interactive frontend: discrete move
/// commands interleaved with ticks, each applied atomically.
fn steer_toward_ball(game: &mut Game) {
    let ball_x = game.state().ball.pos.x;
    let paddle_x = game.state().paddle.center_x();

    if ball_x < paddle_x - PADDLE_SPEED {
        game.move_paddle(Direction::Left);
    } else if ball_x > paddle_x + PADDLE_SPEED {
        game.move_paddle(Direction::Right);
    }
}
