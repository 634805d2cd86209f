//! Session state and entity types
//!
//! The session owns every entity. Nothing holds a reference back into it, so
//! input handling and ticking both go through `GameState` methods.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Footprint;
use crate::clamp_player_x;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session started yet, or the last one ended
    #[default]
    Idle,
    /// Active gameplay, ticks are being processed
    Running,
}

/// Falling shape variants. They differ only in how they are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Triangle];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }
}

/// Discrete commands delivered by the input side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Start,
}

/// How the update pass treats the slot vacated by a removed shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Every tracked shape is advanced and checked exactly once per tick
    #[default]
    Stable,
    /// The scan moves past the vacated slot, so the shape that slid into it
    /// sits out the rest of the tick
    SkipAfterRemoval,
}

/// Something that happened during a tick or command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    Spawned { id: u32, kind: ShapeKind, x: i32 },
    /// Shape left the bottom of the field; score is the new total
    Escaped { id: u32, score: u32 },
    SpeedUp { speed: i32 },
    /// Shape hit the player; lives is what remains
    PlayerHit { id: u32, lives: u32 },
    GameOver { final_score: u32 },
}

/// The player-controlled marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMarker {
    pub pos: IVec2,
}

impl PlayerMarker {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
        }
    }

    /// Horizontally centered, PLAYER_BOTTOM_OFFSET above the bottom edge
    pub fn home(field: IVec2) -> Self {
        Self::new(field.x / 2 - FOOTPRINT / 2, field.y - PLAYER_BOTTOM_OFFSET)
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::square(self.pos)
    }

    /// Shift horizontally by `dx`, then clamp into the field
    pub fn shift(&mut self, dx: i32, field_width: i32) {
        self.pos.x = clamp_player_x(self.pos.x + dx, field_width);
    }
}

/// A shape falling from the top of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallingShape {
    pub id: u32,
    pub kind: ShapeKind,
    pub pos: IVec2,
}

impl FallingShape {
    pub fn new(id: u32, kind: ShapeKind, x: i32, y: i32) -> Self {
        Self {
            id,
            kind,
            pos: IVec2::new(x, y),
        }
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::square(self.pos)
    }

    #[inline]
    pub fn fall(&mut self, speed: i32) {
        self.pos.y += speed;
    }
}

/// Complete session state (deterministic for a given seed and command sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG stream was created from
    pub seed: u64,
    /// Spawn RNG; survives restarts so consecutive sessions differ
    pub rng: Pcg32,
    /// Field width and height
    pub field: IVec2,
    pub phase: GamePhase,
    pub lives: u32,
    pub score: u32,
    /// Pixels every shape falls per tick
    pub speed: i32,
    pub player: PlayerMarker,
    /// Active shapes in spawn order
    pub shapes: Vec<FallingShape>,
    /// One spawn per `spawn_odds` ticks on average; 0 turns spawning off
    pub spawn_odds: u32,
    pub removal_policy: RemovalPolicy,
    /// Ticks processed in the current session
    pub time_ticks: u64,
    /// Events from the latest tick (plus any command since). Cleared at the
    /// start of every tick.
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle state on the default 640x480 field
    pub fn new(seed: u64) -> Self {
        Self::with_field(seed, FIELD_WIDTH, FIELD_HEIGHT)
    }

    pub fn with_field(seed: u64, width: i32, height: i32) -> Self {
        let field = IVec2::new(width, height);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field,
            phase: GamePhase::Idle,
            lives: START_LIVES,
            score: 0,
            speed: START_SPEED,
            player: PlayerMarker::home(field),
            shapes: Vec::new(),
            spawn_odds: SPAWN_ODDS,
            removal_policy: RemovalPolicy::default(),
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut state =
            Self::with_field(settings.seed, settings.field_width, settings.field_height);
        state.spawn_odds = settings.spawn_odds;
        state.removal_policy = settings.removal_policy;
        state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin a fresh session. Returns false (and changes nothing) if one is
    /// already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = GamePhase::Running;
        self.lives = START_LIVES;
        self.score = 0;
        self.speed = START_SPEED;
        self.player = PlayerMarker::home(self.field);
        self.player.shift(0, self.field.x);
        self.shapes.clear();
        self.time_ticks = 0;
        self.events.push(GameEvent::SessionStarted);
        log::info!(
            "Session started (seed {}, field {}x{})",
            self.seed,
            self.field.x,
            self.field.y
        );
        true
    }

    /// Apply one input command immediately. Moves are ignored while idle.
    /// Returns true if the command changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::MoveLeft | Command::MoveRight if !self.is_running() => false,
            Command::MoveLeft => self.move_player(-MOVE_STEP),
            Command::MoveRight => self.move_player(MOVE_STEP),
        }
    }

    fn move_player(&mut self, dx: i32) -> bool {
        let before = self.player.pos.x;
        self.player.shift(dx, self.field.x);
        self.player.pos.x != before
    }

    /// Life indicator value, capped at the starting lives scale
    pub fn life_bar(&self) -> u32 {
        self.lives.min(START_LIVES)
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}
