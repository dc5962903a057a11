//! Room data structures.

use serde::{Deserialize, Serialize};

/// Difficulty tier of a room, fixed by the stage number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Stage 1 is Easy, stage 2 Medium, anything later Hard.
    pub fn for_stage(stage: u32) -> Self {
        match stage {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Environmental effect applied to whoever enters the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomEffect {
    /// Drains mana or energy.
    Frost,
    /// Chips away at health.
    Fog,
    /// Restores health.
    Blessing,
    Neutral,
}

impl RoomEffect {
    pub const ALL: [RoomEffect; 4] = [
        RoomEffect::Frost,
        RoomEffect::Fog,
        RoomEffect::Blessing,
        RoomEffect::Neutral,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            RoomEffect::Frost => "A grave-cold chill that freezes your reserves.",
            RoomEffect::Fog => "Poisonous vapours that eat at your skin.",
            RoomEffect::Blessing => "A ray of celestial light that mends your wounds.",
            RoomEffect::Neutral => "A cold stone chamber with no apparent dangers.",
        }
    }
}

/// A room on one stage of the descent. Immutable once rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub stage: u32,
    pub difficulty: Difficulty,
    /// Baseline level for enemies spawned here.
    pub suggested_level: u32,
    pub effect: RoomEffect,
}

impl Room {
    pub fn description(&self) -> &'static str {
        self.effect.description()
    }
}

/// What entering a room did to a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOutcome {
    /// Frost took this much mana or energy.
    Drained { amount: u32 },
    /// Fog dealt this much damage.
    Damaged { amount: u32 },
    /// Blessing restored this much health.
    Healed { amount: u32 },
    /// Nothing happened (neutral room, or frost on a class without a pool).
    Unaffected,
}
