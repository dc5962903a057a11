use serde::{Deserialize, Serialize};

use super::types::{Mission, MissionProgress, MissionReward};
use crate::character::Character;

/// Holds the single active mission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionTracker {
    active: Option<Mission>,
    claimed: bool,
}

impl MissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active mission. Returns the one it replaced.
    pub fn assign(&mut self, mission: Mission) -> Option<Mission> {
        tracing::info!(title = %mission.title, target = mission.target.name(), "mission assigned");
        self.claimed = false;
        self.active.replace(mission)
    }

    pub fn active(&self) -> Option<&Mission> {
        self.active.as_ref()
    }

    /// Counts a defeat towards the active mission when the archetype matches.
    /// Progress never passes the required count.
    pub fn notify_defeat(&mut self, defeated: &Character) -> MissionProgress {
        let Some(mission) = self.active.as_mut() else {
            return MissionProgress::NoMission;
        };
        if mission.is_complete() || defeated.archetype() != Some(mission.target) {
            return MissionProgress::Unchanged;
        }

        mission.progress += 1;
        if mission.is_complete() {
            tracing::info!(title = %mission.title, "mission complete");
            MissionProgress::Completed {
                title: mission.title.clone(),
            }
        } else {
            tracing::debug!(
                title = %mission.title,
                progress = mission.progress,
                required = mission.required,
                "mission progress"
            );
            MissionProgress::Advanced {
                progress: mission.progress,
                required: mission.required,
            }
        }
    }

    /// True when an active mission has reached its count.
    pub fn is_complete(&self) -> bool {
        self.active.as_ref().is_some_and(Mission::is_complete)
    }

    /// Hands out the reward of a completed mission, once.
    pub fn claim_reward(&mut self) -> Option<MissionReward> {
        if self.claimed || !self.is_complete() {
            return None;
        }
        let mission = self.active.as_ref()?;
        self.claimed = true;
        Some(MissionReward {
            title: mission.title.clone(),
            xp: mission.xp_reward,
            item: mission.reward.clone(),
        })
    }
}
