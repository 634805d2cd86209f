//! Falling Shapes - a single-screen dodge-the-shapes arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, per-tick update, session state)
//! - `ports`: Render/HUD adapter traits the simulation talks to
//! - `driver`: Fixed-period game loop owning the session
//! - `renderer`: Tessellates a frame into a vertex list
//! - `hud`, `highscores`: HUD values and the leaderboard
//! - `settings`: JSON configuration

pub mod autopilot;
pub mod driver;
pub mod highscores;
pub mod hud;
pub mod ports;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::GameLoop;
pub use highscores::HighScores;
pub use hud::Hud;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Default field dimensions
    pub const FIELD_WIDTH: i32 = 640;
    pub const FIELD_HEIGHT: i32 = 480;

    /// Every entity occupies a FOOTPRINT x FOOTPRINT box
    pub const FOOTPRINT: i32 = 30;

    /// Horizontal distance covered by one move command
    pub const MOVE_STEP: i32 = 20;
    /// Player sits this far above the bottom edge of the field
    pub const PLAYER_BOTTOM_OFFSET: i32 = 80;

    /// Session defaults
    pub const START_LIVES: u32 = 3;
    pub const START_SPEED: i32 = 2;
    /// Fall speed never exceeds this
    pub const MAX_SPEED: i32 = 11;
    /// Fall speed goes up by one every this many points
    pub const SPEED_UP_EVERY: u32 = 10;

    /// One spawn per SPAWN_ODDS ticks on average
    pub const SPAWN_ODDS: u32 = 12;

    /// Fixed tick period (milliseconds)
    pub const TICK_MS: u32 = 20;
    /// Maximum catch-up ticks per advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Exclusive upper bound for a spawn x coordinate (never below 1)
#[inline]
pub fn spawn_range(field_width: i32) -> i32 {
    (field_width - consts::FOOTPRINT).max(1)
}

/// Clamp a player x coordinate into `[0, field_width - FOOTPRINT]`
#[inline]
pub fn clamp_player_x(x: i32, field_width: i32) -> i32 {
    x.clamp(0, (field_width - consts::FOOTPRINT).max(0))
}
