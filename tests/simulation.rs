//! End-to-end scenarios driven through the public `Simulation` handle

use featherfall::consts::*;
use featherfall::sim::{
    GameEvent, GamePhase, InputAction, LevelConfig, LevelTable, Simulation, Sound,
};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn short_table(required_score: u32, levels: usize) -> LevelTable {
    let cfg = LevelConfig {
        pipe_speed: 2.0,
        spawn_interval_ms: 2000.0,
        gravity: 0.25,
        gap_size: 250.0,
        required_score,
        oscillation: 0.0,
    };
    LevelTable::new(vec![cfg; levels]).unwrap()
}

/// Drive `sim` with a gap-seeking autopilot for up to `frames` ticks,
/// restarting after any game over. Returns the highest level reached and
/// whether a run completed; the attempts share one RNG stream so retries see
/// fresh obstacle layouts.
fn autopilot(sim: &mut Simulation, frames: u32) -> (u32, bool) {
    let mut best_level = 1;
    for frame in 0..frames {
        let state = sim.state();
        let target = state
            .pipes
            .iter()
            .filter(|p| p.x + PIPE_WIDTH > state.player.pos.x)
            .min_by(|a, b| a.x.total_cmp(&b.x))
            .map(|p| p.gap_top + p.gap / 2.0)
            .unwrap_or(CANVAS_HEIGHT / 2.0);
        if state.player.pos.y + ACTOR_HEIGHT / 2.0 > target && state.player.vel_y >= 0.0 {
            sim.handle_input(InputAction::Flap);
        }
        let report = sim.tick(frame as f64 * FRAME_MS);
        best_level = best_level.max(report.level);
        match report.phase {
            GamePhase::Completed => return (best_level, true),
            GamePhase::GameOver => sim.reset(),
            _ => {}
        }
    }
    (best_level, false)
}

#[test]
fn test_idle_run_falls_to_the_floor_and_ends() {
    let mut sim = Simulation::new(LevelTable::default(), 3);
    let mut ended = false;
    for frame in 0..2000u32 {
        let report = sim.tick(frame as f64 * FRAME_MS);
        if report.phase == GamePhase::GameOver {
            assert_eq!(report.lives, 0);
            assert!(report.events.contains(&GameEvent::Sound(Sound::Die)));
            ended = true;
            break;
        }
    }
    assert!(ended, "an unpiloted actor must fall out of bounds");
}

#[test]
fn test_autopilot_scores_and_levels_up() {
    // One level-up needs two pipe passes; a generous gap keeps the autopilot
    // reliable and the restart loop absorbs unlucky enemy spawns
    let mut sim = Simulation::new(short_table(2, 3), 11);
    let (best_level, completed) = autopilot(&mut sim, 60_000);
    assert!(
        best_level > 1 || completed,
        "expected at least one level-up, best level {best_level}"
    );
}

#[test]
fn test_completing_the_final_level_is_terminal() {
    let mut sim = Simulation::new(short_table(1, 1), 5);
    let (_, completed) = autopilot(&mut sim, 60_000);
    assert!(completed, "a single one-point level should complete");
    assert_eq!(sim.state().phase, GamePhase::Completed);
    let score = sim.state().score;
    assert_eq!(sim.state().high_score, score);

    // Ticks past the end change nothing
    let report = sim.tick(2_000_000.0);
    assert_eq!(report.phase, GamePhase::Completed);
    assert_eq!(report.score, score);
}

#[test]
fn test_score_is_monotone_across_a_run() {
    let mut sim = Simulation::new(LevelTable::default(), 21);
    let mut last_score = 0;
    for frame in 0..10_000u32 {
        if frame % 25 == 0 {
            sim.handle_input(InputAction::Flap);
        }
        let report = sim.tick(frame as f64 * FRAME_MS);
        assert!(report.score >= last_score, "score regressed at frame {frame}");
        last_score = report.score;
        if report.phase != GamePhase::Playing && report.phase != GamePhase::Transitioning {
            break;
        }
    }
}

#[test]
fn test_reset_to_last_lost_level_resumes_there() {
    let mut sim = Simulation::new(short_table(100, 1), 1);
    // Let the run die, then resume
    let mut end = 0;
    for frame in 0..5000u32 {
        let report = sim.tick(frame as f64 * FRAME_MS);
        if report.phase == GamePhase::GameOver {
            end = frame;
            break;
        }
    }
    assert_eq!(sim.state().phase, GamePhase::GameOver);
    assert_eq!(sim.state().last_lost_level, 1);

    sim.reset_to_last_lost_level();
    assert_eq!(sim.state().phase, GamePhase::Playing);
    assert_eq!(sim.state().lives, START_LIVES);
    assert_eq!(sim.state().score, 0);

    // The resumed run ticks normally
    let report = sim.tick((end + 1) as f64 * FRAME_MS);
    assert_eq!(report.phase, GamePhase::Playing);
}

#[test]
fn test_two_sims_with_same_seed_agree() {
    let mut a = Simulation::new(LevelTable::default(), 99);
    let mut b = Simulation::new(LevelTable::default(), 99);
    for frame in 0..2000u32 {
        if frame % 30 == 0 {
            a.handle_input(InputAction::Flap);
            b.handle_input(InputAction::Flap);
        }
        let now = frame as f64 * FRAME_MS;
        let ra = a.tick(now);
        let rb = b.tick(now);
        assert_eq!(ra.score, rb.score);
        assert_eq!(ra.phase, rb.phase);
        assert_eq!(ra.events, rb.events);
    }
    assert_eq!(
        serde_json::to_string(a.state()).unwrap(),
        serde_json::to_string(b.state()).unwrap()
    );
}

#[test]
fn test_state_round_trips_through_serde() {
    let mut sim = Simulation::new(LevelTable::default(), 5);
    for frame in 0..500u32 {
        if frame % 30 == 0 {
            sim.handle_input(InputAction::Flap);
        }
        sim.tick(frame as f64 * FRAME_MS);
    }
    let json = serde_json::to_string(&sim).unwrap();
    let mut restored: Simulation = serde_json::from_str(&json).unwrap();

    // Both copies continue identically from the snapshot
    for frame in 500..1000u32 {
        let now = frame as f64 * FRAME_MS;
        let ra = sim.tick(now);
        let rb = restored.tick(now);
        assert_eq!(ra.score, rb.score);
        assert_eq!(ra.phase, rb.phase);
    }
}
