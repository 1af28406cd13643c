//! The per-tick update pipeline
//!
//! One call to [`tick`] advances the whole simulation by a single frame. The
//! host supplies the inputs held this frame and a monotonic timestamp in
//! milliseconds; everything else is derived from [`GameState`]. Given the same
//! seed, inputs and timestamps, two runs produce identical states.

use serde::{Deserialize, Serialize};

use super::clones;
use super::collision;
use super::config::LevelTable;
use super::level;
use super::pickups;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState, Sound};

/// Inputs held during one tick
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Flap impulse (also the promoted-clone control)
    pub flap: bool,
    /// Move straight up (free movement only)
    pub move_up: bool,
    /// Move straight down (free movement only)
    pub move_down: bool,
}

/// Snapshot handed back after each tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickReport {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub phase: GamePhase,
    /// Side effects produced this tick, in order
    pub events: Vec<GameEvent>,
}

/// Advance the simulation by one frame
pub fn tick(
    state: &mut GameState,
    levels: &LevelTable,
    input: TickInput,
    now_ms: f64,
) -> TickReport {
    // Terminal phases freeze the world; only reset calls leave them
    if state.is_over() {
        return report(state);
    }

    level::update_transition(state, now_ms);
    if state.phase == GamePhase::Transitioning {
        return report(state);
    }

    let cfg = *levels.get(state.current_level);

    if input.flap {
        state.player.flap();
        state.push_event(GameEvent::Sound(Sound::Flap));
    }
    if input.move_up {
        state.player.move_up();
    }
    if input.move_down {
        state.player.move_down();
    }

    // Record before integrating so clones replay pre-gravity samples
    clones::record_history(state);
    state.player.apply_gravity(cfg.gravity);
    clones::update_clones(state, cfg.gravity);

    spawn::spawn_obstacles(state, now_ms, &cfg);
    spawn::advance_obstacles(state, now_ms, &cfg);
    pickups::update_pickups(state, now_ms, &cfg);

    collision::score_passed_pipes(state);
    collision::resolve_hits(state, now_ms);
    if !state.is_over() {
        pickups::check_acquisition(state, now_ms);
        level::check_level_progress(state, levels, now_ms);
    }

    state.effects.expire(now_ms);

    report(state)
}

fn report(state: &mut GameState) -> TickReport {
    TickReport {
        score: state.score,
        lives: state.lives,
        level: state.current_level,
        phase: state.phase,
        events: std::mem::take(&mut state.events),
    }
}
