//! Headless demo host
//!
//! Drives the simulation with a wall-clock loop and a scripted pointer path,
//! logs a HUD line once per second, and prints the final snapshot as JSON.
//! The real presentation layer (canvas, DOM, input events) lives outside
//! this crate and talks to the sim through the same entry points used here.

use std::time::{Duration, Instant};

use cursor_dodge::consts::MAX_FRAME_DT;
use cursor_dodge::sim::{step, GameState, Mode};

const DEMO_ARENA_W: f64 = 800.0;
const DEMO_ARENA_H: f64 = 600.0;
/// Demo stops after this long even if the scripted pointer survives
const DEMO_TIME_LIMIT: f64 = 60.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5eed);

    let mut state = GameState::new(seed);
    state.resize(DEMO_ARENA_W, DEMO_ARENA_H);
    state.start();

    let mut last = Instant::now();
    let mut next_hud = 1.0;
    while state.mode == Mode::Playing && state.elapsed < DEMO_TIME_LIMIT {
        std::thread::sleep(Duration::from_millis(16));
        let now = Instant::now();
        let dt = (now - last).as_secs_f64().min(MAX_FRAME_DT);
        last = now;

        // Scripted pointer: a lissajous sweep around the arena
        let t = state.elapsed;
        state.set_pointer(
            DEMO_ARENA_W * 0.5 + DEMO_ARENA_W * 0.32 * (t * 0.9).sin(),
            DEMO_ARENA_H * 0.5 + DEMO_ARENA_H * 0.30 * (t * 1.3).cos(),
        );
        step(&mut state, dt);

        if state.elapsed >= next_hud {
            log::info!(
                "t={:.1}s lives={} dodged={} difficulty={:.2}",
                state.score,
                state.lives,
                state.dodges,
                state.difficulty
            );
            next_hud += 1.0;
        }
    }

    if let Some(summary) = &state.summary {
        log::info!("{summary}");
    }
    match state.snapshot().to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot encode failed: {err}"),
    }
}
