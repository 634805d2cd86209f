//! Idle/demo controller
//!
//! Picks one move per tick to keep the player clear of the most dangerous
//! shape. Used by the headless runner; deterministic for a given state.

use crate::consts::{FOOTPRINT, MOVE_STEP};
use crate::sim::{Command, FallingShape, GameState};

/// How far above the player (in ticks of fall) a shape counts as a threat
const LOOKAHEAD_TICKS: i32 = 20;

/// Choose the next command, or None if nothing needs dodging
pub fn choose(state: &GameState) -> Option<Command> {
    if !state.is_running() {
        return None;
    }

    let player = state.player.pos;
    let horizon = player.y - state.speed * LOOKAHEAD_TICKS - FOOTPRINT;

    // Lowest shape still above the player and within a step of its column
    let threat = state
        .shapes
        .iter()
        .filter(|s| s.pos.y + FOOTPRINT > horizon && s.pos.y < player.y + FOOTPRINT)
        .filter(|s| columns_close(s, player.x))
        .max_by_key(|s| s.pos.y)?;

    let max_x = (state.field.x - FOOTPRINT).max(0);
    let flee_left = threat.pos.x + FOOTPRINT / 2 >= player.x + FOOTPRINT / 2;
    let command = match (flee_left, player.x) {
        (true, 0) => Command::MoveRight,
        (false, x) if x >= max_x => Command::MoveLeft,
        (true, _) => Command::MoveLeft,
        (false, _) => Command::MoveRight,
    };
    Some(command)
}

fn columns_close(shape: &FallingShape, player_x: i32) -> bool {
    let margin = MOVE_STEP / 2;
    shape.pos.x < player_x + FOOTPRINT + margin && player_x < shape.pos.x + FOOTPRINT + margin
}
