//! Adapter seams between the simulation and the outside world
//!
//! The simulation never draws or updates widgets itself. Once per frame it
//! hands positions to a [`RenderAdapter`], and once per tick (and at session
//! start) it pushes HUD values to a [`HudAdapter`]. Input arrives as
//! [`Command`](crate::sim::Command) values applied through
//! [`GameState::apply`].

use crate::consts::START_LIVES;
use crate::sim::{GameState, ShapeKind};

/// Receives one draw call per entity per frame
pub trait RenderAdapter {
    /// Filled player circle with its bounding box's top-left corner at (x, y)
    fn draw_player(&mut self, x: i32, y: i32);
    /// Filled 30x30 shape of the given kind at (x, y)
    fn draw_shape(&mut self, kind: ShapeKind, x: i32, y: i32);
}

/// Score/lives display
pub trait HudAdapter {
    fn set_score(&mut self, score: u32);
    fn set_lives(&mut self, lives: u32);
    fn set_life_bar(&mut self, value: u32, max: u32);
    /// Called exactly once when a session ends
    fn on_game_over(&mut self, final_score: u32);
}

/// Draw the player, then every shape in spawn order
pub fn draw_frame<R: RenderAdapter + ?Sized>(state: &GameState, render: &mut R) {
    render.draw_player(state.player.pos.x, state.player.pos.y);
    for shape in &state.shapes {
        render.draw_shape(shape.kind, shape.pos.x, shape.pos.y);
    }
}

/// Push current score and lives to the HUD
pub fn refresh_hud<H: HudAdapter + ?Sized>(state: &GameState, hud: &mut H) {
    hud.set_score(state.score);
    hud.set_lives(state.lives);
    hud.set_life_bar(state.life_bar(), START_LIVES);
}
