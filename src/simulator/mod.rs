//! Balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of full sessions per class with the `AutoPilot` and
//! aggregates win rates, where runs die, loot rates and fight lengths.
//! Runs go through `Session`, so results match real gameplay behavior.

mod autopilot;
mod config;
mod report;
mod runner;
mod stats;

pub use autopilot::AutoPilot;
pub use config::{SimConfig, SimConfigError};
pub use report::{ClassSummary, SimReport};
pub use runner::{run_simulation, simulate_single_run};
pub use stats::{RunEnd, RunStats};
