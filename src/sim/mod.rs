//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clamped timesteps only (the host never passes a raw frame delta)
//! - Seeded RNG only, with a fixed draw order per spawn
//! - No rendering or platform dependencies
//!
//! State is owned by [`GameState`] and mutated only through [`step`],
//! [`advance_time`], and the session entry points (`start`/`reset`/`dismiss`/
//! `set_pointer`/`resize`). Hosts read state through [`Snapshot`].

pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use rng::GameRng;
pub use snapshot::Snapshot;
pub use spawn::spawn_projectile;
pub use state::{Arena, GameState, Mode, Player, Pointer, Projectile, ProjectileKind, PALETTE};
pub use tick::{advance_time, step};
