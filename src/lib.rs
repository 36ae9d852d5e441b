//! Cursor Dodge - a pointer-controlled dodge-the-projectiles game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, session
//!   state machine)
//!
//! Rendering and input wiring live outside this crate. A host feeds pointer
//! positions and lifecycle commands in, drives `step` with a clamped frame
//! delta, and reads a [`sim::Snapshot`] back out once per frame.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed timestep for externally clocked stepping (60 Hz)
    pub const FIXED_DT: f64 = 1.0 / 60.0;
    /// Maximum frame delta fed to the simulation; longer pauses are clamped
    /// so a backgrounded host cannot tunnel projectiles or spawn-flood
    pub const MAX_FRAME_DT: f64 = 0.05;

    /// Player defaults
    pub const PLAYER_RADIUS: f64 = 18.0;
    pub const START_LIVES: u8 = 3;
    /// Grace period after taking a hit (seconds)
    pub const INVULN_DURATION: f64 = 0.95;
    /// Screen shake countdown surfaced to the renderer (seconds)
    pub const SHAKE_DURATION: f64 = 0.25;

    /// Projectiles spawn this far outside the arena edge
    pub const SPAWN_MARGIN: f64 = 60.0;
    /// A projectile past the arena plus this pad counts as dodged
    pub const DESPAWN_PAD: f64 = 140.0;

    /// Spawn interval curve: starts here, shrinks with difficulty
    pub const SPAWN_EVERY_START: f64 = 0.85;
    pub const SPAWN_EVERY_MIN: f64 = 0.24;
    pub const SPAWN_EVERY_MAX: f64 = 1.0;
    pub const SPAWN_EVERY_PER_DIFFICULTY: f64 = 0.12;

    /// Seconds of play per unit of difficulty
    pub const DIFFICULTY_HORIZON: f64 = 18.0;
    pub const DIFFICULTY_MAX: f64 = 5.0;

    /// Projectile tuning
    pub const PROJECTILE_RADIUS_MIN: f64 = 10.0;
    pub const PROJECTILE_RADIUS_MAX: f64 = 22.0;
    pub const PROJECTILE_SPEED_MIN: f64 = 220.0;
    pub const PROJECTILE_SPEED_MAX: f64 = 360.0;
    /// Additive speed bonus per unit of difficulty
    pub const SPEED_PER_DIFFICULTY: f64 = 55.0;
    /// Aim offset applied to the player position on each axis, so
    /// projectiles are dodgeable rather than perfectly homing
    pub const AIM_JITTER: f64 = 90.0;
    /// Angular speed range for cosmetic spin (radians/sec)
    pub const SPIN_MAX: f64 = 5.0;
}
