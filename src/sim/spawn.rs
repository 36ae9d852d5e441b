//! Projectile spawning
//!
//! Each spawn consumes a fixed sequence of RNG draws (edge, axis coordinate,
//! radius, speed, jitter x, jitter y, kind, color, rotation, spin) so a
//! seeded session replays identically.

use glam::DVec2;

use super::state::{GameState, Projectile, ProjectileKind, PALETTE};
use crate::consts::*;

/// Direction from `from` toward `to`; falls back to a unit vector when the
/// points coincide so velocity never goes NaN.
pub fn aim_dir(from: DVec2, to: DVec2) -> DVec2 {
    (to - from).try_normalize().unwrap_or(DVec2::X)
}

/// Build one projectile just outside a uniformly chosen arena edge, aimed at
/// the player's current position plus jitter. The caller inserts it into the
/// live set; the only side effect here is advancing the RNG stream.
pub fn spawn_projectile(state: &mut GameState) -> Projectile {
    let id = state.next_entity_id();
    let (w, h) = (state.arena.w, state.arena.h);
    let player_pos = state.player.pos;
    let difficulty = state.difficulty;
    let rng = &mut state.rng;

    // 0 left, 1 right, 2 top, 3 bottom
    let side = (rng.next_f64() * 4.0) as u32;
    let pos = match side {
        0 => DVec2::new(-SPAWN_MARGIN, rng.range(0.0, h)),
        1 => DVec2::new(w + SPAWN_MARGIN, rng.range(0.0, h)),
        2 => DVec2::new(rng.range(0.0, w), -SPAWN_MARGIN),
        _ => DVec2::new(rng.range(0.0, w), h + SPAWN_MARGIN),
    };

    let radius = rng.range(PROJECTILE_RADIUS_MIN, PROJECTILE_RADIUS_MAX);
    let speed = rng.range(PROJECTILE_SPEED_MIN, PROJECTILE_SPEED_MAX)
        + difficulty * SPEED_PER_DIFFICULTY;

    let target = player_pos
        + DVec2::new(
            rng.range(-AIM_JITTER, AIM_JITTER),
            rng.range(-AIM_JITTER, AIM_JITTER),
        );
    let vel = aim_dir(pos, target) * speed;

    let kind = *rng.choose(&ProjectileKind::ALL);
    let color = *rng.choose(&PALETTE);
    let rot = rng.range(0.0, std::f64::consts::TAU);
    let spin = rng.range(-SPIN_MAX, SPIN_MAX);

    Projectile {
        id,
        pos,
        vel,
        radius,
        kind,
        color,
        rot,
        spin,
        age: 0.0,
        trail: Vec::new(),
    }
}
