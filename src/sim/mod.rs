//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-driven ticks only, one per frame, never re-entered
//! - Seeded RNG only
//! - Timed effects are explicit expiry timestamps, not callbacks
//! - No rendering, audio, or platform dependencies

pub mod clones;
pub mod collision;
pub mod config;
pub mod geometry;
pub mod level;
pub mod pickups;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use config::{ConfigError, LevelConfig, LevelTable};
pub use geometry::Aabb;
pub use session::{InputAction, Simulation};
pub use state::{
    ActiveEffects, Actor, Enemy, GameEvent, GamePhase, GameState, Pickup, PickupKind, Pipe,
    PositionHistory, Sound,
};
pub use tick::{TickInput, TickReport, tick};
