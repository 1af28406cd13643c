//! Level progression state machine
//!
//! Playing -> Transitioning -> Playing for each level-up; the final level's
//! threshold ends the run in the terminal Completed phase instead. During a
//! transition all motion and collision work is suspended by the tick loop.

use super::config::LevelTable;
use super::state::{GameEvent, GamePhase, GameState, Sound};
use crate::consts::TRANSITION_DURATION_MS;

/// Check the current level's score threshold and advance if it is met.
/// The level number bumps immediately so the interstitial can display the
/// upcoming level; gameplay resumes when the transition times out.
pub fn check_level_progress(state: &mut GameState, levels: &LevelTable, now_ms: f64) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let required = levels.get(state.current_level).required_score;
    if state.score < required {
        return;
    }

    if state.current_level >= levels.max_level() {
        state.high_score = state.high_score.max(state.score);
        state.phase = GamePhase::Completed;
        state.push_event(GameEvent::Completed);
        log::info!("run completed with score {}", state.score);
    } else {
        state.current_level += 1;
        state.phase = GamePhase::Transitioning;
        state.transition_started_at_ms = now_ms;
        state.push_event(GameEvent::Sound(Sound::Swoosh));
        state.push_event(GameEvent::LevelUp(state.current_level));
        log::info!("advancing to level {}", state.current_level);
    }
}

/// Finish a pending transition once its window elapses: the board is cleared
/// for the new level and play resumes
pub fn update_transition(state: &mut GameState, now_ms: f64) {
    if state.phase != GamePhase::Transitioning {
        return;
    }
    if now_ms - state.transition_started_at_ms >= TRANSITION_DURATION_MS {
        state.reset_current_level();
        state.phase = GamePhase::Playing;
    }
}
