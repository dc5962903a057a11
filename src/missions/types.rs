use serde::{Deserialize, Serialize};

use crate::character::Archetype;
use crate::items::{Item, Potion, Weapon};

/// A kill-count objective against one archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub title: String,
    pub description: String,
    pub target: Archetype,
    pub required: u32,
    pub progress: u32,
    pub xp_reward: u64,
    pub reward: Item,
}

impl Mission {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        target: Archetype,
        required: u32,
        xp_reward: u64,
        reward: Item,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            target,
            required,
            progress: 0,
            xp_reward,
            reward,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= self.required
    }

    pub fn remaining(&self) -> u32 {
        self.required.saturating_sub(self.progress)
    }
}

/// What a defeat did to the active mission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissionProgress {
    #[default]
    NoMission,
    /// Wrong archetype, or the mission was already complete.
    Unchanged,
    Advanced { progress: u32, required: u32 },
    /// This defeat finished the mission.
    Completed { title: String },
}

impl MissionProgress {
    pub fn counted(&self) -> bool {
        matches!(
            self,
            MissionProgress::Advanced { .. } | MissionProgress::Completed { .. }
        )
    }
}

/// Payout of a completed mission. Handed out once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionReward {
    pub title: String,
    pub xp: u64,
    pub item: Item,
}

/// The mission that gates `stage`, if the stage has one.
pub fn stage_mission(stage: u32) -> Option<Mission> {
    let mission = match stage {
        1 => Mission::new(
            "Tunnel Sweep",
            "Clear the tunnels of 2 Orcs.",
            Archetype::Orc,
            2,
            50,
            Item::Potion(Potion::health("Vital Potion", 50)),
        ),
        2 => Mission::new(
            "Exorcism",
            "Banish 2 Specters from the crypt.",
            Archetype::Specter,
            2,
            100,
            Item::Potion(Potion::health("Greater Elixir", 100)),
        ),
        3 => Mission::new(
            "The Royal Guard",
            "Defeat 3 Knights of the fallen guard.",
            Archetype::Knight,
            3,
            200,
            Item::Weapon(Weapon::new("Blade of Light", 15)),
        ),
        _ => return None,
    };
    Some(mission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::STAGE_COUNT;

    #[test]
    fn test_every_stage_has_a_mission() {
        for stage in 1..=STAGE_COUNT {
            let mission = stage_mission(stage).unwrap();
            assert_eq!(mission.progress, 0);
            assert!(mission.required > 0);
        }
        assert!(stage_mission(0).is_none());
        assert!(stage_mission(STAGE_COUNT + 1).is_none());
    }

    #[test]
    fn test_stage_targets() {
        assert_eq!(stage_mission(1).unwrap().target, Archetype::Orc);
        assert_eq!(stage_mission(2).unwrap().target, Archetype::Specter);
        let guard = stage_mission(3).unwrap();
        assert_eq!(guard.target, Archetype::Knight);
        assert_eq!(guard.remaining(), 3);
        assert!(matches!(guard.reward, Item::Weapon(ref w) if w.bonus_damage == 15));
    }
}
