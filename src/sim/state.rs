//! Session state and core simulation types
//!
//! One [`GameState`] owns everything a run needs, so independent sessions can
//! run side by side (tests drive several at once to check determinism).

use glam::DVec2;

use super::rng::GameRng;
use crate::consts::*;

/// Current mode of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Title/menu screen, nothing simulated
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended; summary available until the next reset
    GameOver,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Menu => "menu",
            Mode::Playing => "playing",
            Mode::GameOver => "gameover",
        }
    }
}

/// Playable region, origin top-left, +x right, +y down.
/// Updated by the host on viewport resize; the sim only reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub w: f64,
    pub h: f64,
}

/// Latest pointer sample in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub pos: DVec2,
    /// False until the first pointer event; until then the player rests at
    /// its resize-time default position
    pub seen: bool,
}

/// The player's avatar. Position follows the pointer, clamped to the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: DVec2,
    pub radius: f64,
    /// Seconds of post-hit immunity remaining (>0 means immune)
    pub invuln: f64,
}

/// Cosmetic projectile shape tag; no gameplay difference between variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    Orb,
    Block,
    Dart,
}

impl ProjectileKind {
    pub const ALL: [ProjectileKind; 3] =
        [ProjectileKind::Orb, ProjectileKind::Block, ProjectileKind::Dart];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectileKind::Orb => "orb",
            ProjectileKind::Block => "block",
            ProjectileKind::Dart => "dart",
        }
    }
}

/// Cosmetic projectile colors, picked uniformly at spawn
pub const PALETTE: [&str; 4] = ["#66e3ff", "#ff5cbe", "#ffe56a", "#7bff9d"];

/// Maximum trail positions kept per projectile
pub const TRAIL_LENGTH: usize = 8;

/// A projectile flying across the arena
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub pos: DVec2,
    /// Units per second
    pub vel: DVec2,
    pub radius: f64,
    pub kind: ProjectileKind,
    /// Cosmetic fill color from [`PALETTE`]
    pub color: &'static str,
    /// Cosmetic rotation (radians) and angular speed (radians/sec)
    pub rot: f64,
    pub spin: f64,
    /// Seconds since spawn
    pub age: f64,
    /// Recent positions for trail rendering, most recent last
    pub trail: Vec<DVec2>,
}

impl Projectile {
    /// Record current position to the trail, evicting the oldest entry
    pub fn record_trail(&mut self) {
        self.trail.push(self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.remove(0);
        }
    }
}

/// Complete session state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u32,
    /// RNG stream shared by spawning and cosmetics
    pub rng: GameRng,
    pub mode: Mode,
    pub arena: Arena,
    /// Seconds in the current run
    pub elapsed: f64,
    /// Elapsed time rounded to one decimal; the displayed score
    pub score: f64,
    /// Difficulty scalar in [0, DIFFICULTY_MAX]
    pub difficulty: f64,
    pub lives: u8,
    /// Projectiles that left the arena without hitting the player
    pub dodges: u32,
    /// Screen shake countdown (cosmetic, read by the renderer)
    pub shake: f64,
    pub spawn_clock: f64,
    pub spawn_every: f64,
    pub player: Player,
    pub pointer: Pointer,
    /// Live projectiles; insertion order, pruned in place by the step
    pub projectiles: Vec<Projectile>,
    /// When set, the host suspends its own ticking and time only advances
    /// through `advance_time`
    pub externally_clocked: bool,
    /// Game-over summary, kept through `dismiss` until the next reset
    pub summary: Option<String>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh session in the menu. Call `resize` before `start`.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: GameRng::new(seed),
            mode: Mode::Menu,
            arena: Arena { w: 0.0, h: 0.0 },
            elapsed: 0.0,
            score: 0.0,
            difficulty: 0.0,
            lives: START_LIVES,
            dodges: 0,
            shake: 0.0,
            spawn_clock: 0.0,
            spawn_every: SPAWN_EVERY_START,
            player: Player {
                pos: DVec2::ZERO,
                radius: PLAYER_RADIUS,
                invuln: 0.0,
            },
            pointer: Pointer {
                pos: DVec2::ZERO,
                seen: false,
            },
            projectiles: Vec::new(),
            externally_clocked: false,
            summary: None,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Host viewport changed. Until a pointer has been seen the player (and
    /// the pointer default) sit at the arena's resting spot.
    pub fn resize(&mut self, w: f64, h: f64) {
        self.arena = Arena { w, h };
        if !self.pointer.seen {
            self.player.pos = DVec2::new(w * 0.5, h * 0.6);
            self.pointer.pos = self.player.pos;
        }
    }

    /// Latest pointer position, absolute arena coordinates
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.pos = DVec2::new(x, y);
        self.pointer.seen = true;
    }

    /// Begin (or restart) a run. Valid from every mode; while already
    /// playing it acts as an immediate reset-and-continue.
    pub fn start(&mut self) {
        self.reset();
    }

    /// Reset all mutable world fields and enter `Playing`. The RNG stream
    /// keeps running; reproduce a run by constructing a fresh session.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.score = 0.0;
        self.difficulty = 0.0;
        self.lives = START_LIVES;
        self.dodges = 0;
        self.shake = 0.0;
        self.spawn_clock = 0.0;
        self.spawn_every = SPAWN_EVERY_START;
        self.player.invuln = 0.0;
        self.projectiles.clear();
        self.summary = None;
        self.mode = Mode::Playing;
        log::info!(
            "run started (seed {}, arena {}x{})",
            self.seed,
            self.arena.w,
            self.arena.h
        );
    }

    /// Leave the game-over screen for the menu. The summary stays readable
    /// until the next reset overwrites it.
    pub fn dismiss(&mut self) {
        match self.mode {
            Mode::GameOver => self.mode = Mode::Menu,
            Mode::Menu | Mode::Playing => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_in_menu() {
        let state = GameState::new(1);
        assert_eq!(state.mode, Mode::Menu);
        assert_eq!(state.lives, START_LIVES);
        assert!(state.projectiles.is_empty());
        assert!(!state.pointer.seen);
    }

    #[test]
    fn test_reset_clears_world() {
        let mut state = GameState::new(1);
        state.resize(800.0, 600.0);
        state.start();
        state.elapsed = 12.0;
        state.lives = 1;
        state.dodges = 9;
        state.player.invuln = 0.5;
        state.summary = Some("old".into());
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            radius: 10.0,
            kind: ProjectileKind::Orb,
            color: PALETTE[0],
            rot: 0.0,
            spin: 0.0,
            age: 0.0,
            trail: Vec::new(),
        });

        state.reset();
        assert_eq!(state.mode, Mode::Playing);
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.dodges, 0);
        assert_eq!(state.player.invuln, 0.0);
        assert!(state.projectiles.is_empty());
        assert!(state.summary.is_none());
    }

    #[test]
    fn test_dismiss_only_from_gameover() {
        let mut state = GameState::new(1);
        state.dismiss();
        assert_eq!(state.mode, Mode::Menu);

        state.start();
        state.dismiss();
        assert_eq!(state.mode, Mode::Playing);

        state.mode = Mode::GameOver;
        state.summary = Some("survived 3.2s, dodged 4".into());
        state.dismiss();
        assert_eq!(state.mode, Mode::Menu);
        // Summary stays for the menu to show
        assert!(state.summary.is_some());
    }

    #[test]
    fn test_resize_centers_player_until_pointer_seen() {
        let mut state = GameState::new(1);
        state.resize(800.0, 600.0);
        assert_eq!(state.player.pos, DVec2::new(400.0, 360.0));

        state.set_pointer(100.0, 100.0);
        state.resize(1000.0, 500.0);
        // Pointer has been seen; resize no longer repositions
        assert_eq!(state.player.pos, DVec2::new(400.0, 360.0));
    }

    #[test]
    fn test_trail_capped() {
        let mut p = Projectile {
            id: 1,
            pos: DVec2::ZERO,
            vel: DVec2::new(1.0, 0.0),
            radius: 10.0,
            kind: ProjectileKind::Dart,
            color: PALETTE[1],
            rot: 0.0,
            spin: 0.0,
            age: 0.0,
            trail: Vec::new(),
        };
        for i in 0..20 {
            p.pos = DVec2::new(f64::from(i), 0.0);
            p.record_trail();
        }
        assert_eq!(p.trail.len(), TRAIL_LENGTH);
        // Most recent last, oldest evicted
        assert_eq!(p.trail.last().unwrap().x, 19.0);
        assert_eq!(p.trail[0].x, 12.0);
    }
}
