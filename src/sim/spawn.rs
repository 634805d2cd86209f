//! Per-tick shape spawning

use rand::Rng;

use super::state::{FallingShape, GameEvent, GameState, ShapeKind};
use crate::spawn_range;

/// Roll the spawn odds once and, on a hit, append one new shape at the top of
/// the field. Returns the new shape's ID.
pub fn spawn(state: &mut GameState) -> Option<u32> {
    if !state.is_running() || state.spawn_odds == 0 {
        return None;
    }
    if state.rng.random_range(0..state.spawn_odds) != 0 {
        return None;
    }

    let x = state.rng.random_range(0..spawn_range(state.field.x));
    let kind = ShapeKind::ALL[state.rng.random_range(0..ShapeKind::ALL.len())];
    Some(spawn_at(state, kind, x))
}

/// Append a shape of the given kind at `(x, 0)`
pub fn spawn_at(state: &mut GameState, kind: ShapeKind, x: i32) -> u32 {
    let id = state.next_entity_id();
    state.shapes.push(FallingShape::new(id, kind, x, 0));
    state.events.push(GameEvent::Spawned { id, kind, x });
    log::debug!("Spawned {} #{} at x={}", kind.as_str(), id, x);
    id
}
