//! Falling Shapes entry point
//!
//! Runs a headless session driven by the autopilot: the same loop a windowed
//! front end would run, with a vertex-list renderer and a recording HUD.

use falling_shapes::renderer::FrameBuilder;
use falling_shapes::sim::Command;
use falling_shapes::{GameLoop, Hud, Settings, autopilot};

fn main() {
    env_logger::init();
    log::info!("Falling Shapes (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                eprintln!("falling-shapes: {e}");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let mut game = GameLoop::new(&settings);
    let mut hud = Hud::new();
    let mut frame = FrameBuilder::new();
    let frame_ms = game.tick_ms();

    game.command(Command::Start, &mut hud);
    for _ in 0..settings.demo_ticks {
        if !game.is_running() {
            break;
        }
        if let Some(command) = autopilot::choose(&game.state) {
            game.command(command, &mut hud);
        }
        game.advance(frame_ms, &mut hud);

        frame.clear();
        game.draw(&mut frame);
        log::trace!(
            "Frame {}: {} vertices, {} bytes, clear {:?}",
            game.state.time_ticks,
            frame.vertices().len(),
            frame.as_bytes().len(),
            frame.clear_color
        );
    }

    println!(
        "{}  {}  ({} ticks)",
        hud.score_label(),
        hud.lives_label(),
        game.state.time_ticks
    );
    match hud.last_final_score {
        Some(score) => println!("Game Over! Final Score: {score}"),
        None => println!("Tick limit reached, session still running"),
    }
    if let Some(best) = hud.high_scores.best() {
        println!("Best: {} (session {})", best.score, best.session);
    }
    match serde_json::to_string(&hud.high_scores) {
        Ok(json) => log::info!("High scores: {}", json),
        Err(e) => log::warn!("Could not serialize high scores: {}", e),
    }
}
