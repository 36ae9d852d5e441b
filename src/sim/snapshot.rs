//! Read-only state snapshots
//!
//! The one-way surface the presentation adapter consumes each frame, also
//! serializable as flat JSON for automated inspection. Values are rounded so
//! dumps stay stable and small: positions to one decimal, radii and
//! velocities to integers, countdowns to two decimals.

use serde::Serialize;

use super::state::GameState;

/// Coordinate convention documented in every snapshot
pub const COORD_CONVENTION: &str = "origin top-left; +x right; +y down; units = arena units";

/// Snapshots list at most this many projectiles
pub const SNAPSHOT_MAX_ITEMS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasView {
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub invuln_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemView {
    pub x: f64,
    pub y: f64,
    pub r: i64,
    pub vx: i64,
    pub vy: i64,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Flat, rounded view of a session at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub coord: &'static str,
    pub mode: &'static str,
    pub canvas: CanvasView,
    pub player: PlayerView,
    pub lives: u8,
    pub time_s: f64,
    pub dodged: u32,
    pub difficulty: f64,
    pub items: Vec<ItemView>,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn round1(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

impl GameState {
    /// Capture a read-only snapshot for rendering or inspection
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            coord: COORD_CONVENTION,
            mode: self.mode.as_str(),
            canvas: CanvasView {
                w: self.arena.w,
                h: self.arena.h,
            },
            player: PlayerView {
                x: round1(self.player.pos.x),
                y: round1(self.player.pos.y),
                r: self.player.radius,
                invuln_s: round2(self.player.invuln.max(0.0)),
            },
            lives: self.lives,
            time_s: round1(self.score),
            dodged: self.dodges,
            difficulty: round2(self.difficulty),
            items: self
                .projectiles
                .iter()
                .take(SNAPSHOT_MAX_ITEMS)
                .map(|it| ItemView {
                    x: round1(it.pos.x),
                    y: round1(it.pos.y),
                    r: it.radius.round() as i64,
                    vx: it.vel.x.round() as i64,
                    vy: it.vel.y.round() as i64,
                    kind: it.kind.as_str(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Projectile, ProjectileKind, PALETTE};
    use glam::DVec2;

    fn test_projectile(id: u32, pos: DVec2, vel: DVec2) -> Projectile {
        Projectile {
            id,
            pos,
            vel,
            radius: 15.6,
            kind: ProjectileKind::Dart,
            color: PALETTE[2],
            rot: 0.0,
            spin: 0.0,
            age: 0.0,
            trail: Vec::new(),
        }
    }

    #[test]
    fn test_snapshot_rounding() {
        let mut state = GameState::new(1);
        state.resize(800.0, 600.0);
        state.start();
        state.player.pos = DVec2::new(123.456, 99.94);
        state.player.invuln = 0.9012;
        state.difficulty = 1.2345;
        state.score = 4.9;
        state.projectiles.push(test_projectile(
            1,
            DVec2::new(10.04, -3.37),
            DVec2::new(250.7, -119.2),
        ));

        let snap = state.snapshot();
        assert_eq!(snap.mode, "playing");
        assert_eq!(snap.player.x, 123.5);
        assert_eq!(snap.player.y, 99.9);
        assert_eq!(snap.player.invuln_s, 0.9);
        assert_eq!(snap.time_s, 4.9);
        assert_eq!(snap.difficulty, 1.23);
        let item = &snap.items[0];
        assert_eq!((item.x, item.y), (10.0, -3.4));
        assert_eq!((item.r, item.vx, item.vy), (16, 251, -119));
        assert_eq!(item.kind, "dart");
    }

    #[test]
    fn test_negative_invuln_reads_zero() {
        let mut state = GameState::new(1);
        state.player.invuln = -0.2;
        assert_eq!(state.snapshot().player.invuln_s, 0.0);
    }

    #[test]
    fn test_items_capped() {
        let mut state = GameState::new(1);
        state.resize(800.0, 600.0);
        for id in 0..30 {
            state
                .projectiles
                .push(test_projectile(id, DVec2::ZERO, DVec2::ZERO));
        }
        assert_eq!(state.snapshot().items.len(), SNAPSHOT_MAX_ITEMS);
    }

    #[test]
    fn test_json_shape() {
        let mut state = GameState::new(1);
        state.resize(800.0, 600.0);
        let json = state.snapshot().to_json().unwrap();
        assert!(json.contains("\"coord\":\"origin top-left; +x right; +y down"));
        assert!(json.contains("\"mode\":\"menu\""));
        assert!(json.contains("\"lives\":3"));
        assert!(json.contains("\"items\":[]"));
    }
}
