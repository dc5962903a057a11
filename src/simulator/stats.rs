//! Per-run statistics collected from session reports.

use serde::Serialize;

use crate::character::ClassKind;
use crate::core::{BossReport, ExploreReport, Session, SessionState};

/// Where a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunEnd {
    Won,
    /// Died on this stage (room effect or encounter).
    DiedOnStage(u32),
    DiedToBoss,
    /// Ran out of explorations.
    TimedOut,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub class: ClassKind,
    pub end: RunEnd,
    pub final_level: u32,
    pub final_stage: u32,
    pub explores: u32,
    pub encounters: u32,
    pub rounds: u64,
    pub loot_attempts: u32,
    pub loot_drops: u32,
    pub boss_fought: bool,
}

impl RunStats {
    pub fn new(class: ClassKind) -> Self {
        Self {
            class,
            end: RunEnd::TimedOut,
            final_level: 1,
            final_stage: 1,
            explores: 0,
            encounters: 0,
            rounds: 0,
            loot_attempts: 0,
            loot_drops: 0,
            boss_fought: false,
        }
    }

    pub fn record_explore(&mut self, report: &ExploreReport) {
        self.explores += 1;
        if let Some(encounter) = &report.encounter {
            self.encounters += 1;
            self.rounds += encounter.rounds as u64;
            if let Some(rewards) = &encounter.rewards {
                self.loot_attempts += 1;
                if rewards.loot.is_some() {
                    self.loot_drops += 1;
                }
            }
        }
        if report.state == SessionState::Fallen {
            self.end = RunEnd::DiedOnStage(report.stage);
        }
    }

    pub fn record_boss(&mut self, report: &BossReport) {
        self.boss_fought = true;
        self.encounters += 1;
        self.rounds += report.encounter.rounds as u64;
        self.end = match report.state {
            SessionState::Victorious => RunEnd::Won,
            _ => RunEnd::DiedToBoss,
        };
    }

    pub fn finish(mut self, session: &Session) -> Self {
        self.final_level = session.player().level;
        self.final_stage = session.stage();
        self
    }

    pub fn won(&self) -> bool {
        self.end == RunEnd::Won
    }
}
