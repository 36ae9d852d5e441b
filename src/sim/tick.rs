//! Simulation step
//!
//! Advances one clamped time slice: timers, pointer lock, spawning, motion,
//! collision resolution, and dodge accounting, in that order. The host is
//! responsible for clamping frame deltas to `MAX_FRAME_DT`; externally
//! clocked stepping always uses `FIXED_DT`.

use super::spawn::spawn_projectile;
use super::state::{GameState, Mode};
use crate::consts::*;

/// Advance the session by `dt` seconds. No-op unless playing.
pub fn step(state: &mut GameState, dt: f64) {
    match state.mode {
        Mode::Playing => {}
        Mode::Menu | Mode::GameOver => return,
    }

    state.elapsed += dt;
    // Displayed score is the elapsed time rounded to one decimal
    state.score = (state.elapsed * 10.0).round() / 10.0;
    state.difficulty = (state.elapsed / DIFFICULTY_HORIZON).clamp(0.0, DIFFICULTY_MAX);

    // The cursor is the avatar: hard-lock to the pointer for crisp control,
    // then clamp into the arena (covers resize and offscreen pointers)
    if state.pointer.seen {
        state.player.pos = state.pointer.pos;
    }
    state.player.pos.x = state.player.pos.x.clamp(0.0, state.arena.w);
    state.player.pos.y = state.player.pos.y.clamp(0.0, state.arena.h);

    if state.player.invuln > 0.0 {
        state.player.invuln -= dt;
    }
    if state.shake > 0.0 {
        state.shake -= dt;
    }

    // Faster spawns as difficulty rises, floored so it stays playable.
    // The catch-up loop keeps the average rate under variable step sizes;
    // the host's dt clamp bounds how many spawns one step can emit.
    state.spawn_every = (SPAWN_EVERY_START - state.difficulty * SPAWN_EVERY_PER_DIFFICULTY)
        .clamp(SPAWN_EVERY_MIN, SPAWN_EVERY_MAX);
    state.spawn_clock += dt;
    while state.spawn_clock >= state.spawn_every {
        state.spawn_clock -= state.spawn_every;
        let projectile = spawn_projectile(state);
        state.projectiles.push(projectile);
    }

    // Integrate, then resolve each projectile exactly once: collision first,
    // bounds exit only for survivors, so no projectile counts as both.
    let mut i = 0;
    while i < state.projectiles.len() {
        {
            let it = &mut state.projectiles[i];
            it.age += dt;
            it.pos += it.vel * dt;
            it.rot += it.spin * dt;
            it.record_trail();
        }

        if state.player.invuln <= 0.0 {
            let it = &state.projectiles[i];
            if it.pos.distance(state.player.pos) <= it.radius + state.player.radius {
                state.lives = state.lives.saturating_sub(1);
                state.player.invuln = INVULN_DURATION;
                state.shake = SHAKE_DURATION;
                state.projectiles.remove(i);
                if state.lives == 0 {
                    let summary =
                        format!("survived {:.1}s, dodged {}", state.score, state.dodges);
                    log::info!("game over: {summary}");
                    state.summary = Some(summary);
                    state.mode = Mode::GameOver;
                }
                continue;
            }
        }

        let it = &state.projectiles[i];
        if it.pos.x < -DESPAWN_PAD
            || it.pos.x > state.arena.w + DESPAWN_PAD
            || it.pos.y < -DESPAWN_PAD
            || it.pos.y > state.arena.h + DESPAWN_PAD
        {
            state.dodges += 1;
            state.projectiles.remove(i);
            continue;
        }

        i += 1;
    }
}

/// Deterministically fast-forward by `ms` using fixed 1/60 s steps.
///
/// Switches the session to externally clocked mode (the host should stop its
/// own ticking). Non-positive or tiny durations are normalized to a single
/// step rather than rejected.
pub fn advance_time(state: &mut GameState, ms: f64) {
    state.externally_clocked = true;
    let steps = (ms / (1000.0 / 60.0)).round().max(1.0) as u64;
    for _ in 0..steps {
        step(state, FIXED_DT);
    }
}
