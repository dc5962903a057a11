//! Room rolling, environmental effects, and enemy spawning.

use super::types::{Difficulty, EffectOutcome, Room, RoomEffect};
use crate::character::{Archetype, Character, Class};
use crate::core::constants::*;
use rand::Rng;

/// One row of a spawn table: roll below `threshold` spawns `name` at
/// `suggested_level + level_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTier {
    pub threshold: f64,
    pub name: &'static str,
    pub archetype: Archetype,
    pub level_offset: u32,
}

const EASY_SPAWNS: [SpawnTier; 3] = [
    SpawnTier { threshold: 0.05, name: "Orc Commander (Mini-Boss)", archetype: Archetype::Orc, level_offset: 2 },
    SpawnTier { threshold: 0.20, name: "Weak Specter", archetype: Archetype::Specter, level_offset: 1 },
    SpawnTier { threshold: 1.0, name: "Orc Grunt", archetype: Archetype::Orc, level_offset: 0 },
];

const MEDIUM_SPAWNS: [SpawnTier; 3] = [
    SpawnTier { threshold: 0.15, name: "Spectral Knight (Mini-Boss)", archetype: Archetype::Knight, level_offset: 2 },
    SpawnTier { threshold: 0.50, name: "Stalking Specter", archetype: Archetype::Specter, level_offset: 1 },
    SpawnTier { threshold: 1.0, name: "Orc Warrior", archetype: Archetype::Orc, level_offset: 0 },
];

const HARD_SPAWNS: [SpawnTier; 3] = [
    SpawnTier { threshold: 0.30, name: "Lord of Shadows (Boss)", archetype: Archetype::Knight, level_offset: 3 },
    SpawnTier { threshold: 0.80, name: "Elite Specter", archetype: Archetype::Specter, level_offset: 2 },
    SpawnTier { threshold: 1.0, name: "Orc Berserker", archetype: Archetype::Orc, level_offset: 1 },
];

/// The spawn table for a difficulty, ordered by ascending threshold.
pub fn spawn_table(difficulty: Difficulty) -> &'static [SpawnTier; 3] {
    match difficulty {
        Difficulty::Easy => &EASY_SPAWNS,
        Difficulty::Medium => &MEDIUM_SPAWNS,
        Difficulty::Hard => &HARD_SPAWNS,
    }
}

/// Picks the tier for a roll in [0, 1).
pub fn tier_for_roll(difficulty: Difficulty, roll: f64) -> &'static SpawnTier {
    let table = spawn_table(difficulty);
    table
        .iter()
        .find(|tier| roll < tier.threshold)
        .unwrap_or(&table[table.len() - 1])
}

/// Suggested enemy level for a difficulty at a given player level.
pub fn suggested_level(difficulty: Difficulty, player_level: u32) -> u32 {
    match difficulty {
        Difficulty::Easy => player_level.saturating_sub(EASY_LEVEL_OFFSET).max(1),
        Difficulty::Medium => player_level.max(1),
        Difficulty::Hard => player_level.max(1) + HARD_LEVEL_OFFSET,
    }
}

/// Rolls the environmental effect: four equally likely outcomes.
pub fn roll_effect(rng: &mut impl Rng) -> RoomEffect {
    let index = (rng.gen::<f64>() * RoomEffect::ALL.len() as f64) as usize;
    RoomEffect::ALL[index.min(RoomEffect::ALL.len() - 1)]
}

/// Builds the room for `stage` given the player's current level.
pub fn choose_room(stage: u32, player_level: u32, rng: &mut impl Rng) -> Room {
    let difficulty = Difficulty::for_stage(stage);
    let room = Room {
        stage,
        difficulty,
        suggested_level: suggested_level(difficulty, player_level),
        effect: roll_effect(rng),
    };
    tracing::debug!(
        stage,
        difficulty = difficulty.name(),
        suggested_level = room.suggested_level,
        effect = ?room.effect,
        "room rolled"
    );
    room
}

impl Room {
    pub fn new(stage: u32, player_level: u32, rng: &mut impl Rng) -> Self {
        choose_room(stage, player_level, rng)
    }

    /// Applies the room's environmental effect to `character`.
    pub fn apply_effect(&self, character: &mut Character) -> EffectOutcome {
        apply_effect(self.effect, character)
    }

    /// Spawns an enemy from this room's spawn table with one fresh roll.
    pub fn generate_enemy(&self, rng: &mut impl Rng) -> Character {
        let tier = tier_for_roll(self.difficulty, rng.gen::<f64>());
        let enemy = Character::enemy(tier.name, self.suggested_level + tier.level_offset, tier.archetype);
        tracing::debug!(name = %enemy.name, level = enemy.level, "enemy spawned");
        enemy
    }
}

/// Applies an environmental effect. Dead characters are unaffected.
pub fn apply_effect(effect: RoomEffect, character: &mut Character) -> EffectOutcome {
    if !character.is_alive() {
        return EffectOutcome::Unaffected;
    }

    let outcome = match effect {
        RoomEffect::Frost => match &mut character.class {
            Class::Caster { mana: pool } | Class::Duelist { energy: pool, .. } => {
                let drained = -pool.add(-(FROST_DRAIN as i64));
                EffectOutcome::Drained {
                    amount: drained as u32,
                }
            }
            _ => EffectOutcome::Unaffected,
        },
        RoomEffect::Fog => EffectOutcome::Damaged {
            amount: character.receive_damage(FOG_DAMAGE as f64),
        },
        RoomEffect::Blessing => EffectOutcome::Healed {
            amount: character.heal(BLESSING_HEAL),
        },
        RoomEffect::Neutral => EffectOutcome::Unaffected,
    };

    tracing::debug!(name = %character.name, ?effect, ?outcome, "room effect applied");
    outcome
}
