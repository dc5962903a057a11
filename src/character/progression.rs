//! Resting, levelling and experience.

use super::types::{Character, Class};
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// What a rest restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RestOutcome {
    pub health_restored: u32,
    /// Mana or energy refilled (0 for classes without a pool).
    pub resource_restored: u32,
}

/// Snapshot of a character right after gaining a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub level: u32,
    pub max_health: u32,
    /// New max of the class pool, if the class has one.
    pub resource_max: Option<u32>,
}

/// Experience needed to advance from `level` to `level + 1`.
pub fn xp_for_next_level(level: u32) -> u64 {
    XP_PER_LEVEL_STEP * level.max(1) as u64
}

/// Rests: restores a bounded slice of health, and refills the class pool.
/// Dead characters do not rest.
pub fn rest(character: &mut Character) -> RestOutcome {
    if !character.is_alive() {
        return RestOutcome::default();
    }

    let slice = ((character.health.max() as f64 * REST_HEAL_FRACTION).round() as u32).max(1);
    let health_restored = character.heal(slice);

    let resource_restored = character.resource_mut().map_or(0, |pool| pool.fill());

    tracing::debug!(
        name = %character.name,
        health_restored,
        resource_restored,
        "rested"
    );

    RestOutcome {
        health_restored,
        resource_restored,
    }
}

/// Levels a living character up by one.
///
/// The class-independent part runs first (level, health, defense, refill);
/// class growth is applied after so its own refill is the last word.
pub fn level_up(character: &mut Character) -> Option<LevelUp> {
    if !character.is_alive() {
        return None;
    }

    character.level += 1;
    character.health.grow_max(LEVEL_UP_HEALTH);
    character.health.fill();
    character.defense += LEVEL_UP_DEFENSE;

    let class_health = match &mut character.class {
        Class::Caster { mana } => {
            mana.grow_max(CASTER_LEVEL_UP_MANA);
            mana.fill();
            CASTER_LEVEL_UP_HEALTH
        }
        Class::Duelist { energy, .. } => {
            energy.grow_max(DUELIST_LEVEL_UP_ENERGY);
            energy.fill();
            DUELIST_LEVEL_UP_HEALTH
        }
        Class::Bruiser { .. } | Class::Enemy(_) | Class::Boss(_) => 0,
    };
    if class_health > 0 {
        character.health.grow_max(class_health);
        character.health.fill();
    }

    let result = LevelUp {
        level: character.level,
        max_health: character.health.max(),
        resource_max: character.resource().map(|pool| pool.max()),
    };
    tracing::info!(
        name = %character.name,
        level = result.level,
        max_health = result.max_health,
        "level up"
    );
    Some(result)
}

/// Banks experience and levels up as many times as the total allows.
pub fn gain_experience(character: &mut Character, amount: u64) -> Vec<LevelUp> {
    let mut level_ups = Vec::new();
    if !character.is_alive() {
        return level_ups;
    }

    character.experience += amount;
    while character.experience >= xp_for_next_level(character.level) {
        character.experience -= xp_for_next_level(character.level);
        match level_up(character) {
            Some(up) => level_ups.push(up),
            None => break,
        }
    }
    level_ups
}

impl Character {
    pub fn rest(&mut self) -> RestOutcome {
        rest(self)
    }

    pub fn level_up(&mut self) -> Option<LevelUp> {
        level_up(self)
    }

    pub fn gain_experience(&mut self, amount: u64) -> Vec<LevelUp> {
        gain_experience(self, amount)
    }
}
