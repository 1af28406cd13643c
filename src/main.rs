//! Headless demo runner
//!
//! Drives the simulation at a nominal 60 Hz with a naive autopilot that flaps
//! whenever the actor drops below the nearest gap, then prints the outcome.
//! Useful for eyeballing difficulty tuning and log output without a renderer.

use featherfall::consts::{ACTOR_HEIGHT, CANVAS_HEIGHT, PIPE_WIDTH};
use featherfall::sim::{GameEvent, GamePhase, InputAction, LevelTable, Simulation};

const FRAME_MS: f64 = 1000.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 120; // two simulated minutes

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xFEA7);
    let mut sim = Simulation::new(LevelTable::default(), seed);
    log::info!("running headless with seed {seed}");

    let mut frames = 0u32;
    while frames < MAX_FRAMES {
        if autopilot_should_flap(&sim) {
            sim.handle_input(InputAction::Flap);
        }
        let report = sim.tick(frames as f64 * FRAME_MS);
        for event in &report.events {
            match event {
                GameEvent::LevelUp(level) => log::info!("level up -> {level}"),
                GameEvent::LifeLost => log::info!("life lost ({} left)", report.lives),
                GameEvent::PickupCollected(kind) => log::debug!("picked up {kind:?}"),
                _ => {}
            }
        }
        if matches!(report.phase, GamePhase::GameOver | GamePhase::Completed) {
            println!(
                "{:?} after {frames} frames: score {}, level {}",
                report.phase, report.score, report.level
            );
            return;
        }
        frames += 1;
    }
    let report_state = sim.state();
    println!(
        "still flying after {MAX_FRAMES} frames: score {}, level {}",
        report_state.score, report_state.current_level
    );
}

/// Flap when falling below the nearest upcoming gap's center
fn autopilot_should_flap(sim: &Simulation) -> bool {
    let state = sim.state();
    let target = state
        .pipes
        .iter()
        .filter(|p| p.x + PIPE_WIDTH > state.player.pos.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|p| p.gap_top + p.gap / 2.0)
        .unwrap_or(CANVAS_HEIGHT / 2.0);
    state.player.pos.y + ACTOR_HEIGHT / 2.0 > target && state.player.vel_y >= 0.0
}
