//! Pickup generation and effect application
//!
//! Each pickup kind is an independent per-tick Bernoulli trial, not an
//! interval spawner. Only the primary collects; clones fly straight through.
//! Timed effects are written as expiry timestamps and unwound by the tick
//! loop's expiry check, never by a scheduled callback.

use glam::Vec2;
use rand::Rng;

use super::clones;
use super::config::LevelConfig;
use super::state::{GameEvent, GameState, Pickup, PickupKind, Sound};
use crate::consts::*;

/// Scroll pickups with the obstacle stream, drop off-screen ones, and roll
/// the per-kind spawn trials
pub fn update_pickups(state: &mut GameState, now_ms: f64, cfg: &LevelConfig) {
    let speed = state.effects.pipe_speed(cfg.pipe_speed, now_ms);
    for pickup in &mut state.pickups {
        pickup.pos.x -= speed;
    }
    state.pickups.retain(|p| !p.is_off_screen());

    // Fixed kind order keeps the RNG stream stable
    for kind in [
        PickupKind::Life,
        PickupKind::InvulnerabilitySpeed,
        PickupKind::ClonePower,
        PickupKind::FreeMovementPower,
    ] {
        if state.rng.random_bool(PICKUP_SPAWN_PROB) {
            let pos = spawn_position(state, kind);
            state.pickups.push(Pickup { kind, pos });
            state.push_event(GameEvent::PickupSpawned(kind));
            log::debug!("pickup spawned: {kind:?}");
        }
    }
}

/// Life and invulnerability appear anywhere on-screen; the actor-shaped
/// pickups enter from the right edge like obstacles do
fn spawn_position(state: &mut GameState, kind: PickupKind) -> Vec2 {
    let size = kind.size();
    match kind {
        PickupKind::Life | PickupKind::InvulnerabilitySpeed => Vec2::new(
            state.rng.random_range(size.x..CANVAS_WIDTH - size.x),
            state.rng.random_range(size.y..CANVAS_HEIGHT - size.y),
        ),
        PickupKind::ClonePower | PickupKind::FreeMovementPower => Vec2::new(
            CANVAS_WIDTH,
            state.rng.random_range(size.y..CANVAS_HEIGHT - size.y),
        ),
    }
}

/// Detect primary/pickup overlap and apply the collected effects
pub fn check_acquisition(state: &mut GameState, now_ms: f64) {
    let player_box = state.player.aabb();
    let mut collected = Vec::new();
    state.pickups.retain(|p| {
        if p.aabb().overlaps(&player_box) {
            collected.push(p.kind);
            false
        } else {
            true
        }
    });

    for kind in collected {
        state.push_event(GameEvent::PickupCollected(kind));
        apply_effect(state, kind, now_ms);
    }
}

fn apply_effect(state: &mut GameState, kind: PickupKind, now_ms: f64) {
    match kind {
        PickupKind::Life => {
            if state.lives < MAX_LIVES {
                state.lives += 1;
                log::info!("extra life collected, lives = {}", state.lives);
            }
        }
        PickupKind::InvulnerabilitySpeed => {
            // Re-acquisition restarts the window; the speed multiplier is
            // derived from the base speed each tick, so nothing stacks
            state.effects.invuln_expires_at_ms = Some(now_ms + INVULN_DURATION_MS);
            state.push_event(GameEvent::Sound(Sound::Point));
            log::info!("invulnerability + speed boost for {INVULN_DURATION_MS} ms");
        }
        PickupKind::ClonePower => {
            // Silently dropped at the clone cap
            clones::add_clone(state);
        }
        PickupKind::FreeMovementPower => {
            state.player.free_movement = true;
            state.push_event(GameEvent::Sound(Sound::Point));
            log::info!("free movement enabled");
        }
    }
}
