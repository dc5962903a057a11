//! Simulation report generation.

use serde::Serialize;

use super::config::SimConfig;
use super::stats::{RunEnd, RunStats};
use crate::character::ClassKind;
use crate::core::constants::STAGE_COUNT;

/// Aggregates for one class.
#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    pub class: ClassKind,
    pub runs: u32,
    pub wins: u32,
    pub timed_out: u32,
    /// Deaths per stage; the last slot counts deaths to the final boss.
    pub deaths_by_stage: Vec<u32>,
    pub avg_final_level: f64,
    pub avg_encounters: f64,
    pub avg_rounds_per_encounter: f64,
    pub loot_drop_rate: f64,
    pub boss_attempts: u32,
    pub boss_wins: u32,
}

impl ClassSummary {
    fn from_runs(class: ClassKind, runs: &[&RunStats]) -> Self {
        let count = runs.len().max(1) as f64;
        let mut deaths_by_stage = vec![0u32; STAGE_COUNT as usize + 1];
        for run in runs {
            match run.end {
                RunEnd::DiedOnStage(stage) => {
                    let slot = (stage.clamp(1, STAGE_COUNT) - 1) as usize;
                    deaths_by_stage[slot] += 1;
                }
                RunEnd::DiedToBoss => deaths_by_stage[STAGE_COUNT as usize] += 1,
                RunEnd::Won | RunEnd::TimedOut => {}
            }
        }

        let encounters: u32 = runs.iter().map(|r| r.encounters).sum();
        let rounds: u64 = runs.iter().map(|r| r.rounds).sum();
        let loot_attempts: u32 = runs.iter().map(|r| r.loot_attempts).sum();
        let loot_drops: u32 = runs.iter().map(|r| r.loot_drops).sum();

        Self {
            class,
            runs: runs.len() as u32,
            wins: runs.iter().filter(|r| r.won()).count() as u32,
            timed_out: runs.iter().filter(|r| r.end == RunEnd::TimedOut).count() as u32,
            deaths_by_stage,
            avg_final_level: runs.iter().map(|r| r.final_level as f64).sum::<f64>() / count,
            avg_encounters: encounters as f64 / count,
            avg_rounds_per_encounter: if encounters > 0 {
                rounds as f64 / encounters as f64
            } else {
                0.0
            },
            loot_drop_rate: if loot_attempts > 0 {
                loot_drops as f64 / loot_attempts as f64
            } else {
                0.0
            },
            boss_attempts: runs.iter().filter(|r| r.boss_fought).count() as u32,
            boss_wins: runs.iter().filter(|r| r.boss_fought && r.won()).count() as u32,
        }
    }

    pub fn win_rate(&self) -> f64 {
        ratio(self.wins, self.runs)
    }

    pub fn boss_win_rate(&self) -> f64 {
        ratio(self.boss_wins, self.boss_attempts)
    }
}

fn ratio(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub runs_per_class: u32,
    pub seed: Option<u64>,
    pub max_explores_per_run: u32,
    pub classes: Vec<ClassSummary>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub runs: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let classes = config
            .classes
            .iter()
            .filter_map(|&class| {
                let of_class: Vec<&RunStats> = runs.iter().filter(|r| r.class == class).collect();
                (!of_class.is_empty()).then(|| ClassSummary::from_runs(class, &of_class))
            })
            .collect();

        Self {
            runs_per_class: config.num_runs,
            seed: config.seed,
            max_explores_per_run: config.max_explores_per_run,
            classes,
            runs,
        }
    }

    pub fn summary(&self, class: ClassKind) -> Option<&ClassSummary> {
        self.classes.iter().find(|s| s.class == class)
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs per class: {}   Max explores: {}   Seed: {}\n\n",
            self.runs_per_class,
            self.max_explores_per_run,
            self.seed.map_or_else(|| "random".to_string(), |s| s.to_string())
        ));

        for summary in &self.classes {
            report.push_str(&format!(
                "── {} ─────────────────────────────────────────────────────\n",
                summary.class.name().to_uppercase()
            ));
            report.push_str(&format!(
                "  Wins:                {} / {} ({:.1}%)\n",
                summary.wins,
                summary.runs,
                summary.win_rate() * 100.0
            ));
            report.push_str(&format!("  Timed Out:           {}\n", summary.timed_out));
            report.push_str(&format!("  Avg Final Level:     {:.1}\n", summary.avg_final_level));
            report.push_str(&format!("  Avg Encounters:      {:.1}\n", summary.avg_encounters));
            report.push_str(&format!(
                "  Avg Rounds/Fight:    {:.1}\n",
                summary.avg_rounds_per_encounter
            ));
            report.push_str(&format!(
                "  Loot Drop Rate:      {:.1}%\n",
                summary.loot_drop_rate * 100.0
            ));
            report.push_str(&format!(
                "  Boss Win Rate:       {:.1}% ({} fights)\n",
                summary.boss_win_rate() * 100.0,
                summary.boss_attempts
            ));

            report.push_str("  Deaths:");
            for (slot, deaths) in summary.deaths_by_stage.iter().enumerate() {
                if slot < STAGE_COUNT as usize {
                    report.push_str(&format!("  stage {}: {}", slot + 1, deaths));
                } else {
                    report.push_str(&format!("  boss: {}", deaths));
                }
            }
            report.push_str("\n\n");
        }

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        for summary in &self.classes {
            let rating = match summary.win_rate() {
                r if r > 0.9 => "TOO EASY - Rarely loses",
                r if r > 0.5 => "GOOD - Challenging but fair",
                r if r > 0.2 => "HARD - Most runs fall short",
                _ => "TOO HARD - Almost never wins",
            };
            report.push_str(&format!("  {:8} {}\n", summary.class.name(), rating));
            if summary.boss_attempts > 0 && summary.boss_win_rate() < 0.25 {
                report.push_str(&format!(
                    "  ⚠️  {} rarely beats the final boss ({:.1}%)\n",
                    summary.class.name(),
                    summary.boss_win_rate() * 100.0
                ));
            }
            if summary.timed_out * 10 > summary.runs {
                report.push_str(&format!(
                    "  ⚠️  {} often runs out of explorations - missions too slow?\n",
                    summary.class.name()
                ));
            }
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
