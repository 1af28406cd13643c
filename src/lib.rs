//! Featherfall - a side-scrolling obstacle-dodging simulation core
//!
//! The crate is the game's brain only: the host owns the render loop, audio
//! and input devices, calls [`sim::Simulation::tick`] once per frame with a
//! wall-clock timestamp, and translates the returned [`sim::GameEvent`]s into
//! sounds and visuals.
//!
//! Core module:
//! - `sim`: Deterministic simulation (spawning, collisions, clones, levels)

pub mod sim;

pub use sim::{GameEvent, GamePhase, GameState, InputAction, Simulation, TickReport};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas coordinate space, y grows downward)
    pub const CANVAS_WIDTH: f32 = 1500.0;
    pub const CANVAS_HEIGHT: f32 = 800.0;

    /// Actor sprite size (primary and clones share it)
    pub const ACTOR_WIDTH: f32 = 34.0;
    pub const ACTOR_HEIGHT: f32 = 24.0;
    /// Primary's resting x at game start
    pub const ACTOR_START_X: f32 = 50.0;
    /// Canonical safe x used when a clone is promoted to primary
    pub const ACTOR_SAFE_X: f32 = 80.0;
    /// Velocity applied by a flap (upward, so negative)
    pub const FLAP_VELOCITY: f32 = -6.0;
    /// Per-tick vertical step while free movement is active
    pub const FREE_MOVE_STEP: f32 = 4.0;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_MIN_HEIGHT: f32 = 50.0;
    /// Oscillating pipes modulate their gap top by up to this many pixels
    pub const PIPE_OSC_AMPLITUDE: f32 = 50.0;
    /// Angular frequency for gap oscillation (radians per millisecond)
    pub const PIPE_OSC_FREQ: f32 = 0.001;
    /// Uniform jitter added to the spawn interval (milliseconds)
    pub const SPAWN_JITTER_MS: f64 = 500.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 34.0;
    pub const ENEMY_HEIGHT: f32 = 24.0;
    pub const ENEMY_SPEED: f32 = 5.0;
    /// Probability of an enemy riding along with a pipe spawn
    pub const ENEMY_SPAWN_PROB: f64 = 0.8;
    /// Enemies enter this far past the right edge
    pub const ENEMY_SPAWN_LEAD: f32 = 100.0;

    /// Pickup defaults
    pub const PICKUP_SIZE: f32 = 40.0;
    /// Per-tick Bernoulli probability for each pickup kind
    pub const PICKUP_SPAWN_PROB: f64 = 5e-4;
    /// Invulnerability + speed boost duration (milliseconds)
    pub const INVULN_DURATION_MS: f64 = 3000.0;
    /// Pipe-speed multiplier while invulnerable
    pub const INVULN_SPEED_MULT: f32 = 5.0;

    /// Lives and clones
    pub const START_LIVES: u32 = 1;
    pub const MAX_LIVES: u32 = 3;
    pub const MAX_CLONES: usize = 2;
    /// Horizontal spacing between the primary and each trailing clone
    pub const CLONE_SPACING: f32 = 30.0;
    /// History samples of delay added per clone slot
    pub const CLONE_DELAY_STEP: usize = 5;
    /// Position history ring buffer capacity
    pub const HISTORY_CAPACITY: usize = 15;
    /// Pipes within this distance of a freshly promoted primary are purged
    pub const PROMOTION_CLEAR_RADIUS: f32 = 100.0;

    /// Level transition interstitial duration (milliseconds)
    pub const TRANSITION_DURATION_MS: f64 = 1000.0;
}
