//! End-to-end scenarios on the default 640x480 field

use falling_shapes::hud::Hud;
use falling_shapes::sim::{
    Command, FallingShape, Footprint, GameEvent, GamePhase, GameState, ShapeKind, spawn_at, tick,
};
use falling_shapes::{GameLoop, Settings};
use glam::IVec2;

fn quiet_state() -> GameState {
    let mut state = GameState::new(2024);
    state.spawn_odds = 0;
    state.start();
    state.events.clear();
    state
}

#[test]
fn single_shape_falls_off_the_bottom() {
    let mut state = quiet_state();
    spawn_at(&mut state, ShapeKind::Rectangle, 100);

    for _ in 0..240 {
        tick(&mut state);
    }
    assert_eq!(state.shapes[0].pos, IVec2::new(100, 480));
    assert_eq!(state.score, 0);

    // Exits once y exceeds the field height
    tick(&mut state);
    assert!(state.shapes.is_empty());
    assert_eq!(state.score, 1);
    assert_eq!(state.speed, 2);
}

#[test]
fn speed_climbs_every_ten_points_and_caps() {
    let mut state = quiet_state();
    let mut speeds = Vec::new();
    let mut speed_ups = 0;

    for n in 1..=120u32 {
        state
            .shapes
            .push(FallingShape::new(n, ShapeKind::Circle, 0, state.field.y));
        tick(&mut state);
        assert_eq!(state.score, n);
        if n.is_multiple_of(10) {
            speeds.push(state.speed);
        }
        speed_ups += state
            .drain_events()
            .filter(|e| matches!(e, GameEvent::SpeedUp { .. }))
            .count();
    }

    assert_eq!(speeds, vec![3, 4, 5, 6, 7, 8, 9, 10, 11, 11, 11, 11]);
    assert_eq!(speed_ups, 9);
}

#[test]
fn collision_footprints() {
    let player = Footprint::square(IVec2::new(300, 400));
    assert!(!Footprint::square(IVec2::new(300, 450)).intersects(&player));
    assert!(Footprint::square(IVec2::new(300, 410)).intersects(&player));

    let mut state = quiet_state();
    state.player.pos = IVec2::new(300, 400);
    state
        .shapes
        .push(FallingShape::new(1, ShapeKind::Triangle, 300, 408));
    tick(&mut state);
    assert_eq!(state.lives, 2);
    assert!(state.shapes.is_empty());
}

#[test]
fn three_hits_end_the_session() {
    let mut state = quiet_state();
    state.score = 23;
    let pos = state.player.pos;

    for expected in [2, 1, 0] {
        state
            .shapes
            .push(FallingShape::new(expected + 10, ShapeKind::Circle, pos.x, pos.y - 1));
        tick(&mut state);
        assert_eq!(state.lives, expected);
    }

    assert_eq!(state.phase, GamePhase::Idle);
    let overs: Vec<_> = state
        .drain_events()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .collect();
    assert_eq!(overs, vec![GameEvent::GameOver { final_score: 23 }]);
}

#[test]
fn restart_after_game_over_resets_everything() {
    let settings = Settings {
        spawn_odds: 0,
        ..Settings::default()
    };
    let mut game = GameLoop::new(&settings);
    let mut hud = Hud::new();
    game.command(Command::Start, &mut hud);

    game.command(Command::MoveLeft, &mut hud);
    game.state.score = 31;
    game.state.speed = 5;
    game.state.lives = 1;
    let pos = game.state.player.pos;
    game.state
        .shapes
        .push(FallingShape::new(1, ShapeKind::Rectangle, pos.x, pos.y - 1));
    game.state
        .shapes
        .push(FallingShape::new(2, ShapeKind::Rectangle, 500, 10));
    game.advance(settings.tick_ms as u64, &mut hud);

    assert!(!game.is_running());
    assert_eq!(hud.last_final_score, Some(31));
    // Moves do nothing between sessions
    assert!(!game.command(Command::MoveRight, &mut hud));

    assert!(game.command(Command::Start, &mut hud));
    assert_eq!(game.state.lives, 3);
    assert_eq!(game.state.score, 0);
    assert_eq!(game.state.speed, 2);
    assert!(game.state.shapes.is_empty());
    assert_eq!(game.state.player.pos.x, 640 / 2 - 15);
    assert_eq!((hud.score, hud.lives, hud.life_bar), (0, 3, 3));
}

#[test]
fn long_random_session_terminates() {
    let mut state = GameState::new(77);
    state.start();
    // Standing still in the middle eventually gets hit three times
    for _ in 0..200_000 {
        if !state.is_running() {
            break;
        }
        tick(&mut state);
    }
    assert_eq!(state.phase, GamePhase::Idle);
    assert_eq!(state.lives, 0);
}
