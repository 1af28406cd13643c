//! Host-facing simulation handle
//!
//! [`Simulation`] owns the state and the level table and turns edge-triggered
//! host input into the level-triggered [`TickInput`] the pipeline consumes.
//! Inputs queue up between ticks and are consumed by the next one.

use serde::{Deserialize, Serialize};

use super::config::{ConfigError, LevelTable};
use super::state::GameState;
use super::tick::{self, TickInput, TickReport};

/// A single input action from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputAction {
    Flap,
    MoveUp,
    MoveDown,
}

/// A complete, self-contained run of the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    levels: LevelTable,
    state: GameState,
    #[serde(skip)]
    pending: TickInput,
}

impl Simulation {
    /// Build a simulation over a validated level table. The seed fixes the
    /// whole run: replaying the same inputs at the same timestamps reproduces
    /// it exactly.
    pub fn new(levels: LevelTable, seed: u64) -> Self {
        log::debug!("new simulation, seed {seed}, {} levels", levels.max_level());
        Self {
            levels,
            state: GameState::new(seed),
            pending: TickInput::default(),
        }
    }

    /// Build a simulation from raw level configs, validating them first
    pub fn from_levels(
        levels: Vec<super::config::LevelConfig>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(LevelTable::new(levels)?, seed))
    }

    /// Queue an input for the next tick
    pub fn handle_input(&mut self, action: InputAction) {
        match action {
            InputAction::Flap => self.pending.flap = true,
            InputAction::MoveUp => self.pending.move_up = true,
            InputAction::MoveDown => self.pending.move_down = true,
        }
    }

    /// Advance one frame at the given timestamp, consuming queued input
    pub fn tick(&mut self, now_ms: f64) -> TickReport {
        let input = std::mem::take(&mut self.pending);
        tick::tick(&mut self.state, &self.levels, input, now_ms)
    }

    /// Restart from level 1 with a fresh board
    pub fn reset(&mut self) {
        self.pending = TickInput::default();
        self.state.reset();
    }

    /// Restart at the level where the last life was lost
    pub fn reset_to_last_lost_level(&mut self) {
        self.pending = TickInput::default();
        self.state.reset_to_last_lost_level();
    }

    /// Read-only view of the full state, for rendering or persistence
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }
}
