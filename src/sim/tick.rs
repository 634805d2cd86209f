//! Fixed timestep simulation tick
//!
//! Spawns, advances every falling shape, and resolves escapes and hits.

use super::spawn::spawn;
use super::state::{FallingShape, GameEvent, GamePhase, GameState, RemovalPolicy};
use crate::consts::{MAX_SPEED, SPEED_UP_EVERY};

/// Why a shape left play this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Escaped,
    Hit,
}

/// Advance the session by one tick. Does nothing unless a session is running.
///
/// `state.events` is reset first, so afterwards it holds only this tick's
/// events.
pub fn tick(state: &mut GameState) {
    state.events.clear();
    if !state.is_running() {
        return;
    }

    state.time_ticks += 1;
    spawn(state);

    let player = state.player.footprint();
    let mut i = 0;
    while i < state.shapes.len() {
        // Speed is re-read per shape: a speed-up earlier in the pass applies
        // to the shapes behind it.
        let speed = state.speed;
        let shape = &mut state.shapes[i];
        shape.fall(speed);

        let outcome = if shape.pos.y > state.field.y {
            Some(Outcome::Escaped)
        } else if shape.footprint().intersects(&player) {
            Some(Outcome::Hit)
        } else {
            None
        };

        let Some(outcome) = outcome else {
            i += 1;
            continue;
        };

        let shape = state.shapes.remove(i);
        match outcome {
            Outcome::Escaped => on_escaped(state, &shape),
            Outcome::Hit => on_hit(state, &shape),
        }

        // Remaining shapes stay put until the next start clears them
        if !state.is_running() {
            return;
        }
        if state.removal_policy == RemovalPolicy::SkipAfterRemoval {
            i += 1;
        }
    }
}

fn on_escaped(state: &mut GameState, shape: &FallingShape) {
    state.score += 1;
    state.events.push(GameEvent::Escaped {
        id: shape.id,
        score: state.score,
    });
    log::debug!("Shape #{} escaped, score {}", shape.id, state.score);

    if state.score.is_multiple_of(SPEED_UP_EVERY) && state.speed < MAX_SPEED {
        state.speed += 1;
        state.events.push(GameEvent::SpeedUp { speed: state.speed });
        log::info!("Score {}: fall speed now {}", state.score, state.speed);
    }
}

fn on_hit(state: &mut GameState, shape: &FallingShape) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::PlayerHit {
        id: shape.id,
        lives: state.lives,
    });
    log::debug!("Shape #{} hit the player, {} lives left", shape.id, state.lives);

    if state.lives == 0 {
        state.phase = GamePhase::Idle;
        state.events.push(GameEvent::GameOver {
            final_score: state.score,
        });
        log::info!("Game over! Final score: {}", state.score);
    }
}
