//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Footprint;
pub use spawn::{spawn, spawn_at};
pub use state::{
    Command, FallingShape, GameEvent, GamePhase, GameState, PlayerMarker, RemovalPolicy,
    ShapeKind,
};
pub use tick::tick;
