//! Main simulation runner.
//!
//! Every run is a real `Session` driven by the `AutoPilot`, so results match
//! what a player going through the same rooms would see.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::autopilot::AutoPilot;
use super::config::SimConfig;
use super::report::SimReport;
use super::stats::RunStats;
use crate::character::{Character, ClassKind};
use crate::core::{Session, SessionState};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize * config.classes.len());

    for (class_idx, &class) in config.classes.iter().enumerate() {
        for run_idx in 0..config.num_runs {
            // One RNG per run so any single run can be replayed from the seed
            let offset = class_idx as u64 * config.num_runs as u64 + run_idx as u64;
            let mut rng = match config.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(offset)),
                None => ChaCha8Rng::from_entropy(),
            };

            let Some(stats) = simulate_single_run(class, config, &mut rng) else {
                tracing::warn!(class = class.name(), "class is not playable; skipped");
                break;
            };

            tracing::info!(
                class = class.name(),
                run = run_idx + 1,
                end = ?stats.end,
                level = stats.final_level,
                encounters = stats.encounters,
                "run finished"
            );
            all_runs.push(stats);
        }
    }

    SimReport::from_runs(config, all_runs)
}

/// Plays one session to its end (or the exploration cap).
pub fn simulate_single_run(class: ClassKind, config: &SimConfig, rng: &mut impl Rng) -> Option<RunStats> {
    let player = Character::new_player(class.name(), class)?;
    let mut session = Session::new(player, rng);
    let mut pilot = AutoPilot::default();
    let mut stats = RunStats::new(class);

    while session.state() == SessionState::Exploring && stats.explores < config.max_explores_per_run {
        pilot.prepare(&mut session);
        match session.explore(&mut pilot, rng) {
            Ok(report) => stats.record_explore(&report),
            Err(err) => {
                tracing::warn!(%err, "exploration refused");
                break;
            }
        }
    }

    if session.state() == SessionState::BossAwaits {
        pilot.prepare(&mut session);
        if let Ok(report) = session.confront_boss(&mut pilot, rng) {
            stats.record_boss(&report);
        }
    }

    Some(stats.finish(&session))
}
