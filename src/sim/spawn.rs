//! Obstacle generation and advancement
//!
//! Pipes spawn on a jittered interval so the spacing never becomes a
//! learnable rhythm; enemies ride along with a fixed probability. Everything
//! scrolls left at the level's speed and is dropped once fully off-screen.

use glam::Vec2;
use rand::Rng;

use super::config::LevelConfig;
use super::state::{Enemy, GameEvent, GameState, Pipe};
use crate::consts::*;

/// Spawn new obstacles when the jittered interval has elapsed
pub fn spawn_obstacles(state: &mut GameState, now_ms: f64, cfg: &LevelConfig) {
    let jitter: f64 = state.rng.random_range(0.0..SPAWN_JITTER_MS);
    let due = state.last_pipe_ms == 0.0
        || now_ms - state.last_pipe_ms >= cfg.spawn_interval_ms + jitter;
    if !due {
        return;
    }

    let max_gap_top = CANVAS_HEIGHT - cfg.gap_size - PIPE_MIN_HEIGHT;
    let gap_top = state.rng.random_range(PIPE_MIN_HEIGHT..=max_gap_top);
    let phase = state.rng.random_range(0.0..std::f32::consts::TAU);
    state
        .pipes
        .push(Pipe::new(CANVAS_WIDTH, gap_top, cfg.gap_size, phase));
    state.push_event(GameEvent::PipeSpawned);
    log::debug!("pipe spawned at gap_top {gap_top:.0}");

    if state.rng.random_bool(ENEMY_SPAWN_PROB) {
        let padding = ENEMY_HEIGHT / 2.0;
        let y = state
            .rng
            .random_range(padding..CANVAS_HEIGHT - ENEMY_HEIGHT - padding);
        state.enemies.push(Enemy::new(
            Vec2::new(CANVAS_WIDTH + ENEMY_SPAWN_LEAD, y),
            ENEMY_SPEED,
        ));
        state.push_event(GameEvent::EnemySpawned);
    }

    state.last_pipe_ms = now_ms;
}

/// Scroll obstacles left, oscillate gaps, and drop off-screen instances
pub fn advance_obstacles(state: &mut GameState, now_ms: f64, cfg: &LevelConfig) {
    let speed = state.effects.pipe_speed(cfg.pipe_speed, now_ms);

    for pipe in &mut state.pipes {
        pipe.x -= speed;
        if cfg.oscillation != 0.0 {
            // Height modulation only; never moves the pipe or its passed flag
            let wave = (now_ms as f32 * PIPE_OSC_FREQ + pipe.oscillation_phase).sin();
            pipe.gap_top = pipe.initial_gap_top + wave * PIPE_OSC_AMPLITUDE * cfg.oscillation;
        }
    }
    state.pipes.retain(|p| !p.is_off_screen());

    for enemy in &mut state.enemies {
        enemy.pos.x -= enemy.speed;
    }
    state.enemies.retain(|e| !e.is_off_screen());
}
