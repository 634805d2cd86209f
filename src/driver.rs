//! Fixed-period game loop
//!
//! Owns the single session value. Commands are applied the moment they
//! arrive; ticks run from accumulated wall time, and only while a session is
//! running.

use crate::consts::MAX_SUBSTEPS;
use crate::ports::{HudAdapter, RenderAdapter, draw_frame, refresh_hud};
use crate::settings::Settings;
use crate::sim::{Command, GameEvent, GameState, tick};

/// Game loop driver holding all session state
#[derive(Debug, Clone)]
pub struct GameLoop {
    pub state: GameState,
    tick_ms: u64,
    accumulator_ms: u64,
}

impl GameLoop {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::from_settings(settings),
            tick_ms: u64::from(settings.tick_ms.max(1)),
            accumulator_ms: 0,
        }
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Apply an input command. A successful start resets the clock and
    /// refreshes the HUD.
    pub fn command<H: HudAdapter + ?Sized>(&mut self, command: Command, hud: &mut H) -> bool {
        let changed = self.state.apply(command);
        if changed && command == Command::Start {
            self.accumulator_ms = 0;
            self.state.events.clear();
            refresh_hud(&self.state, hud);
        }
        changed
    }

    /// Feed elapsed wall time and run however many ticks are due.
    /// Returns the number of ticks run.
    pub fn advance<H: HudAdapter + ?Sized>(&mut self, elapsed_ms: u64, hud: &mut H) -> u32 {
        if !self.is_running() {
            self.accumulator_ms = 0;
            return 0;
        }

        self.accumulator_ms += elapsed_ms;
        let mut substeps = 0;
        while self.accumulator_ms >= self.tick_ms && substeps < MAX_SUBSTEPS {
            self.accumulator_ms -= self.tick_ms;
            substeps += 1;
            self.step(hud);
            if !self.is_running() {
                self.accumulator_ms = 0;
                return substeps;
            }
        }

        if self.accumulator_ms >= self.tick_ms {
            log::warn!(
                "Dropping {} ms of tick backlog after {} catch-up ticks",
                self.accumulator_ms,
                substeps
            );
            self.accumulator_ms = 0;
        }
        substeps
    }

    /// Run exactly one tick, notify the HUD, and return what happened
    pub fn step<H: HudAdapter + ?Sized>(&mut self, hud: &mut H) -> Vec<GameEvent> {
        tick(&mut self.state);
        let events: Vec<GameEvent> = self.state.drain_events().collect();
        for event in &events {
            if let GameEvent::GameOver { final_score } = *event {
                hud.on_game_over(final_score);
            }
        }
        refresh_hud(&self.state, hud);
        events
    }

    /// Hand the current frame to a renderer
    pub fn draw<R: RenderAdapter + ?Sized>(&self, render: &mut R) {
        draw_frame(&self.state, render);
    }
}
