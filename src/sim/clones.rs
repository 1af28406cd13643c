//! Actor pool and clone coordination
//!
//! Clones trail the primary by replaying its position history at a per-slot
//! delay. While the ring buffer is still filling after a spawn, a clone
//! free-falls like any other actor until its delayed sample exists.

use super::state::{Actor, GameEvent, GameState, Sound};
use crate::consts::*;

/// Record the primary's sample for this tick. Call before moving it.
pub fn record_history(state: &mut GameState) {
    let (pos, vel_y) = (state.player.pos, state.player.vel_y);
    state.history.push(pos, vel_y);
}

/// Position each clone from the delayed history, or integrate gravity while
/// the buffer is still short of its delay
pub fn update_clones(state: &mut GameState, gravity: f32) {
    let player_x = state.player.pos.x;
    let history_len = state.history.len();
    for (i, clone) in state.clones.iter_mut().enumerate() {
        let delay = (i + 1) * CLONE_DELAY_STEP;
        if history_len > delay {
            let sample = state
                .history
                .sample(delay)
                .expect("len checked above");
            clone.pos.x = player_x - CLONE_SPACING * (i + 1) as f32;
            clone.pos.y = sample.pos.y;
            clone.vel_y = sample.vel_y;
        } else {
            clone.apply_gravity(gravity);
        }
    }
}

/// Add a trailing clone behind the existing ones; refuses at the cap
pub fn add_clone(state: &mut GameState) -> bool {
    if state.clones.len() >= MAX_CLONES {
        return false;
    }
    let slot = state.clones.len() + 1;
    let mut clone = Actor::new(state.player.pos.x - CLONE_SPACING * slot as f32);
    clone.pos.y = state.player.pos.y;
    state.clones.push(clone);
    state.push_event(GameEvent::CloneAdded);
    state.push_event(GameEvent::Sound(Sound::Point));
    log::debug!("clone added, {} active", state.clones.len());
    true
}

/// Remove the clone at `index` and close the spacing gap it leaves
pub fn remove_clone(state: &mut GameState, index: usize) -> bool {
    if index >= state.clones.len() {
        return false;
    }
    state.clones.remove(index);
    let player_x = state.player.pos.x;
    for (i, clone) in state.clones.iter_mut().enumerate() {
        clone.pos.x = player_x - CLONE_SPACING * (i + 1) as f32;
    }
    true
}

/// The earliest-spawned clone becomes the primary at the canonical safe
/// position. Pipes near the new primary are purged so it cannot be re-hit on
/// the very next tick. Returns false when no clone is available.
pub fn promote_clone(state: &mut GameState) -> bool {
    if state.clones.is_empty() {
        return false;
    }
    let mut promoted = state.clones.remove(0);
    promoted.pos.x = ACTOR_SAFE_X;
    promoted.pos.y = CANVAS_HEIGHT / 2.0;
    promoted.vel_y = 0.0;
    promoted.free_movement = false;
    state.player = promoted;

    for (i, clone) in state.clones.iter_mut().enumerate() {
        clone.pos.x = ACTOR_SAFE_X - CLONE_SPACING * (i + 1) as f32;
        clone.pos.y = CANVAS_HEIGHT / 2.0;
        clone.vel_y = 0.0;
    }

    let player_x = state.player.pos.x;
    state
        .pipes
        .retain(|p| p.x < player_x - PROMOTION_CLEAR_RADIUS || p.x > player_x + PROMOTION_CLEAR_RADIUS);

    log::debug!("clone promoted, {} remaining", state.clones.len());
    true
}
