//! Game state and core simulation types
//!
//! All state that must survive between ticks lives here. Components mutate it
//! through [`GameState`]'s methods; the host only ever sees the snapshot a
//! tick returns.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Timed level-up interstitial; motion and collisions suspended
    Transitioning,
    /// Lives exhausted (terminal)
    GameOver,
    /// Final level's score requirement reached (terminal)
    Completed,
}

/// Sound cue requests surfaced to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    Flap,
    Point,
    Hit,
    Die,
    Swoosh,
}

/// Side-effect requests emitted by a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(Sound),
    PipeSpawned,
    EnemySpawned,
    PickupSpawned(PickupKind),
    PickupCollected(PickupKind),
    CloneAdded,
    /// A clone absorbed a hit meant for the primary
    CloneSacrificed,
    /// A clone was hit directly
    CloneLost,
    LifeLost,
    LevelUp(u32),
    GameOver,
    Completed,
}

/// A controllable entity. The primary lives in [`GameState::player`]; clones
/// in [`GameState::clones`], so role-specific rules are field lookups rather
/// than identity checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity (positive = falling)
    pub vel_y: f32,
    /// Free-movement power-up: gravity off, direct vertical control on
    pub free_movement: bool,
}

impl Actor {
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, CANVAS_HEIGHT / 2.0),
            vel_y: 0.0,
            free_movement: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT))
    }

    /// Integrate one tick of gravity, unless free movement suspends it
    pub fn apply_gravity(&mut self, gravity: f32) {
        if !self.free_movement {
            self.vel_y += gravity;
            self.pos.y += self.vel_y;
        }
    }

    pub fn flap(&mut self) {
        self.vel_y = FLAP_VELOCITY;
    }

    /// Direct vertical step; only honored while free movement is active
    pub fn move_up(&mut self) {
        if self.free_movement {
            self.pos.y = (self.pos.y - FREE_MOVE_STEP).max(0.0);
        }
    }

    pub fn move_down(&mut self) {
        if self.free_movement {
            self.pos.y = (self.pos.y + FREE_MOVE_STEP).min(CANVAS_HEIGHT - ACTOR_HEIGHT);
        }
    }

    /// Back to the vertical center with no motion and no power-up
    pub fn reset(&mut self) {
        self.pos.y = CANVAS_HEIGHT / 2.0;
        self.vel_y = 0.0;
        self.free_movement = false;
    }
}

/// A gated barrier scrolling in from the right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    pub x: f32,
    /// Current gap top edge (modulated when the level oscillates)
    pub gap_top: f32,
    /// Gap top at spawn time, the oscillation baseline
    pub initial_gap_top: f32,
    /// Vertical gap size
    pub gap: f32,
    /// Phase offset so pipes don't oscillate in lockstep
    pub oscillation_phase: f32,
    /// Set once the primary has scored this pipe
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_top: f32, gap: f32, oscillation_phase: f32) -> Self {
        Self {
            x,
            gap_top,
            initial_gap_top: gap_top,
            gap,
            oscillation_phase,
            passed: false,
        }
    }

    /// Horizontal center, the scoring line
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + PIPE_WIDTH / 2.0
    }

    pub fn is_off_screen(&self) -> bool {
        self.x < -PIPE_WIDTH
    }
}

/// A roaming hazard with its own leftward speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub speed: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self { pos, speed }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT))
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.x + ENEMY_WIDTH < 0.0
    }
}

/// Pickup kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Extra life, capped at [`MAX_LIVES`]
    Life,
    /// Timed global invulnerability + pipe speed boost
    InvulnerabilitySpeed,
    /// Adds a trailing clone actor
    ClonePower,
    /// Free vertical movement for the primary
    FreeMovementPower,
}

impl PickupKind {
    /// Collision box size; the clone pickup uses the actor sprite size
    pub fn size(&self) -> Vec2 {
        match self {
            PickupKind::ClonePower => Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT),
            _ => Vec2::new(PICKUP_SIZE, PICKUP_SIZE),
        }
    }
}

/// A collectible drifting left with the obstacle stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    pub pos: Vec2,
}

impl Pickup {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.kind.size())
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.x < -self.kind.size().x
    }
}

/// One recorded primary sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistorySample {
    pub pos: Vec2,
    pub vel_y: f32,
}

/// Bounded ring buffer of the primary's recent samples, newest first.
/// Clones replay these at a fixed delay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionHistory {
    samples: VecDeque<HistorySample>,
}

impl PositionHistory {
    pub fn push(&mut self, pos: Vec2, vel_y: f32) {
        self.samples.push_front(HistorySample { pos, vel_y });
        if self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_back();
        }
    }

    /// Sample `delay` ticks in the past, if recorded
    pub fn sample(&self, delay: usize) -> Option<HistorySample> {
        self.samples.get(delay).copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Timed global effects, expired by timestamp comparison in the tick loop
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    /// While set, collisions are suppressed and pipe speed is multiplied.
    /// Re-acquisition overwrites (restarts) the window; the multiplier is
    /// applied to the level's base speed, so it never stacks.
    pub invuln_expires_at_ms: Option<f64>,
}

impl ActiveEffects {
    pub fn is_invulnerable(&self, now_ms: f64) -> bool {
        self.invuln_expires_at_ms.is_some_and(|t| now_ms < t)
    }

    /// Drop the record once its window has passed; true if it just ended
    pub fn expire(&mut self, now_ms: f64) -> bool {
        if self.invuln_expires_at_ms.is_some_and(|t| now_ms >= t) {
            self.invuln_expires_at_ms = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.invuln_expires_at_ms = None;
    }

    /// Pipe speed with the boost applied while the effect runs. Anchored to
    /// the level's base speed, so repeated pickups cannot compound it.
    pub fn pipe_speed(&self, base: f32, now_ms: f64) -> f32 {
        if self.is_invulnerable(now_ms) {
            base * INVULN_SPEED_MULT
        } else {
            base
        }
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG stream; all randomness flows through it
    pub rng: Pcg32,
    /// Monotone run score
    pub score: u32,
    /// Best score across runs of this state (persistence is the host's job)
    pub high_score: u32,
    pub lives: u32,
    /// 1-based level number
    pub current_level: u32,
    /// Level at which the last life was lost; `reset_to_last_lost_level`
    /// resumes here
    pub last_lost_level: u32,
    pub phase: GamePhase,
    /// Timestamp the current transition began (valid while Transitioning)
    pub transition_started_at_ms: f64,
    pub effects: ActiveEffects,
    pub player: Actor,
    /// Trailing clones in spawn order
    pub clones: Vec<Actor>,
    pub pipes: Vec<Pipe>,
    pub enemies: Vec<Enemy>,
    pub pickups: Vec<Pickup>,
    pub history: PositionHistory,
    /// Timestamp of the last pipe spawn; 0 means not yet armed
    pub last_pipe_ms: f64,
    /// Events produced this tick, drained into the tick report
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            high_score: 0,
            lives: START_LIVES,
            current_level: 1,
            last_lost_level: 1,
            phase: GamePhase::Playing,
            transition_started_at_ms: 0.0,
            effects: ActiveEffects::default(),
            player: Actor::new(ACTOR_START_X),
            clones: Vec::new(),
            pipes: Vec::new(),
            enemies: Vec::new(),
            pickups: Vec::new(),
            history: PositionHistory::default(),
            last_pipe_ms: 0.0,
            events: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Full reset to level 1 with nothing carried over. The RNG keeps its
    /// stream so consecutive runs differ; `last_lost_level` is preserved for
    /// [`GameState::reset_to_last_lost_level`]'s sake.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.current_level = 1;
        self.phase = GamePhase::Playing;
        self.transition_started_at_ms = 0.0;
        self.effects.clear();
        self.player = Actor::new(ACTOR_START_X);
        self.clones.clear();
        self.pipes.clear();
        self.enemies.clear();
        self.pickups.clear();
        self.history.clear();
        self.last_pipe_ms = 0.0;
    }

    /// Reset, then resume at the level where the last life was lost
    pub fn reset_to_last_lost_level(&mut self) {
        let resume = self.last_lost_level;
        self.reset();
        self.current_level = resume;
    }

    /// Clear the current level's obstacle/pickup/effect state and re-center
    /// the primary. Score, level and clones-to-come are untouched; used after
    /// a life loss and at level transitions.
    pub fn reset_current_level(&mut self) {
        self.pipes.clear();
        self.enemies.clear();
        self.pickups.clear();
        self.clones.clear();
        self.history.clear();
        self.effects.clear();
        self.player.reset();
        self.last_pipe_ms = 0.0;
    }

    /// Whether any terminal phase has been reached
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::Completed)
    }
}
