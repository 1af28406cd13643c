//! Collision resolution and scoring
//!
//! Scoring and hit detection are separate passes over the obstacle list:
//! a pipe can award its point on the same tick it (or anything else) lands a
//! hit, and scoring keeps firing while invulnerability suppresses hits.

use super::clones;
use super::geometry::{span_outside_gap, spans_overlap_x};
use super::state::{Actor, Enemy, GameEvent, GamePhase, GameState, Pipe, Sound};
use crate::consts::*;

/// Primary-only scoring pass: the first tick the pipe's horizontal center is
/// behind the actor's leading edge, exactly one point per pipe
pub fn score_passed_pipes(state: &mut GameState) {
    let player_x = state.player.pos.x;
    let mut scored = 0u32;
    for pipe in &mut state.pipes {
        if !pipe.passed && player_x + ACTOR_WIDTH > pipe.center_x() && player_x < pipe.x + PIPE_WIDTH
        {
            pipe.passed = true;
            scored += 1;
        }
    }
    if scored > 0 {
        state.score += scored;
        state.push_event(GameEvent::Sound(Sound::Point));
    }
}

/// Whether an actor is hit by any pipe, enemy, or the screen bounds.
/// Boundary collision is waived for the primary while free movement is on.
fn actor_hit(actor: &Actor, is_primary: bool, pipes: &[Pipe], enemies: &[Enemy]) -> bool {
    for pipe in pipes {
        if spans_overlap_x(actor.pos.x, ACTOR_WIDTH, pipe.x, PIPE_WIDTH)
            && span_outside_gap(actor.pos.y, ACTOR_HEIGHT, pipe.gap_top, pipe.gap)
        {
            return true;
        }
    }

    let actor_box = actor.aabb();
    for enemy in enemies {
        if actor_box.overlaps(&enemy.aabb()) {
            return true;
        }
    }

    let boundary_immune = is_primary && actor.free_movement;
    if !boundary_immune && (actor.pos.y < 0.0 || actor.pos.y + ACTOR_HEIGHT > CANVAS_HEIGHT) {
        return true;
    }

    false
}

/// Test every live actor against every obstacle and arbitrate the outcome.
/// One resolution action per actor per tick; invulnerability gates the whole
/// pass (scoring runs separately).
pub fn resolve_hits(state: &mut GameState, now_ms: f64) {
    if state.effects.is_invulnerable(now_ms) {
        return;
    }

    // Primary first: a clone absorbs the hit if one exists
    if actor_hit(&state.player, true, &state.pipes, &state.enemies) {
        state.push_event(GameEvent::Sound(Sound::Hit));
        if clones::promote_clone(state) {
            state.push_event(GameEvent::CloneSacrificed);
        } else {
            handle_player_hit(state);
            // A life loss resets the level; nothing left for clones to hit
            return;
        }
    }

    // Clones in spawn order, each tested at most once
    let mut hit_indices: Vec<usize> = Vec::new();
    for (i, clone) in state.clones.iter().enumerate() {
        if actor_hit(clone, false, &state.pipes, &state.enemies) {
            hit_indices.push(i);
        }
    }
    for i in hit_indices.into_iter().rev() {
        clones::remove_clone(state, i);
        state.push_event(GameEvent::Sound(Sound::Hit));
        state.push_event(GameEvent::CloneLost);
    }
}

/// Primary hit with no clone left to spend
fn handle_player_hit(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.last_lost_level = state.current_level;
    state.push_event(GameEvent::LifeLost);

    if state.lives > 0 {
        log::info!(
            "life lost, {} remaining, retrying level {}",
            state.lives,
            state.current_level
        );
        state.reset_current_level();
    } else {
        state.high_score = state.high_score.max(state.score);
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::Sound(Sound::Die));
        state.push_event(GameEvent::GameOver);
        log::info!("game over at level {}, score {}", state.current_level, state.score);
    }
}
