//! Balance constants shared by the engine, the session and the simulator.
//!
//! Change once, test everywhere.

// =============================================================================
// PLAYER CLASSES
// =============================================================================

pub const CASTER_BASE_HEALTH: u32 = 80;
pub const CASTER_BASE_DEFENSE: u32 = 1;
pub const CASTER_BASE_MANA: u32 = 100;

pub const DUELIST_BASE_HEALTH: u32 = 100;
pub const DUELIST_BASE_DEFENSE: u32 = 3;
pub const DUELIST_DEFAULT_ENERGY: u32 = 100;
pub const DUELIST_STARTER_WEAPON: &str = "Rusty Dagger";
pub const DUELIST_STARTER_WEAPON_BONUS: u32 = 4;

pub const BRUISER_BASE_HEALTH: u32 = 120;
pub const BRUISER_BASE_DEFENSE: u32 = 5;
pub const BRUISER_STARTER_WEAPON: &str = "Bastard Sword";
pub const BRUISER_STARTER_WEAPON_BONUS: u32 = 5;

// =============================================================================
// ATTACK FORMULAS
// =============================================================================

/// Mana spent per spell.
pub const SPELL_MANA_COST: u32 = 10;
/// Spell damage = SPELL_BASE_DAMAGE + SPELL_DAMAGE_PER_LEVEL * level.
pub const SPELL_BASE_DAMAGE: u32 = 35;
pub const SPELL_DAMAGE_PER_LEVEL: u32 = 5;
/// Out-of-mana staff strike = STAFF_BASE_DAMAGE + level.
pub const STAFF_BASE_DAMAGE: u32 = 2;

/// Energy spent per dual strike.
pub const DUAL_STRIKE_ENERGY_COST: u32 = 10;
pub const DUAL_STRIKE_DAMAGE_PER_LEVEL: u32 = 5;

/// Bruiser swing = weapon bonus + BRUISER_BASE_DAMAGE + BRUISER_DAMAGE_PER_LEVEL * level.
pub const BRUISER_BASE_DAMAGE: u32 = 8;
pub const BRUISER_DAMAGE_PER_LEVEL: u32 = 4;

pub const ENEMY_HIT_CHANCE: f64 = 0.85;
/// Damage variance factor is uniform in [MIN, MIN + SPREAD).
pub const ENEMY_DAMAGE_FACTOR_MIN: f64 = 0.9;
pub const ENEMY_DAMAGE_FACTOR_SPREAD: f64 = 0.2;

pub const BOSS_EMPOWERED_CHANCE: f64 = 0.20;
/// Empowered strike base per level. Deliberately not the standard enemy base (6 + 4 * level).
pub const BOSS_EMPOWERED_BASE_PER_LEVEL: u32 = 4;
pub const BOSS_EMPOWERED_MULTIPLIER: f64 = 1.5;

// =============================================================================
// ENEMIES
// =============================================================================

pub const ENEMY_BASE_HEALTH: u32 = 40;
pub const ENEMY_HEALTH_PER_LEVEL: u32 = 25;
pub const ENEMY_BASE_DEFENSE: u32 = 2;
pub const ENEMY_DEFENSE_PER_LEVEL: u32 = 1;
pub const ENEMY_BASE_DAMAGE: u32 = 6;
pub const ENEMY_DAMAGE_PER_LEVEL: u32 = 4;
pub const ENEMY_XP_PER_LEVEL: u64 = 20;
pub const BOSS_HEALTH_MULTIPLIER: u32 = 2;

/// Opponents at or below this fraction of max health may try to heal.
pub const ENEMY_HEAL_THRESHOLD: f64 = 0.30;
pub const ENEMY_HEAL_CHANCE: f64 = 0.15;

// =============================================================================
// RESTING & LEVELLING
// =============================================================================

/// Fraction of max health restored by a rest.
pub const REST_HEAL_FRACTION: f64 = 0.25;

pub const LEVEL_UP_HEALTH: u32 = 20;
pub const LEVEL_UP_DEFENSE: u32 = 1;
pub const CASTER_LEVEL_UP_HEALTH: u32 = 10;
pub const CASTER_LEVEL_UP_MANA: u32 = 25;
pub const DUELIST_LEVEL_UP_HEALTH: u32 = 15;
pub const DUELIST_LEVEL_UP_ENERGY: u32 = 15;

/// Experience needed for the next level = XP_PER_LEVEL_STEP * current level.
pub const XP_PER_LEVEL_STEP: u64 = 100;

// =============================================================================
// ROOMS
// =============================================================================

pub const FROST_DRAIN: u32 = 15;
pub const FOG_DAMAGE: u32 = 10;
pub const BLESSING_HEAL: u32 = 15;

/// Easy rooms suggest this many levels below the player (floored at 1).
pub const EASY_LEVEL_OFFSET: u32 = 2;
/// Hard rooms suggest this many levels above the player.
pub const HARD_LEVEL_OFFSET: u32 = 2;

// =============================================================================
// LOOT
// =============================================================================

pub const LOOT_DROP_CHANCE: f64 = 0.40;
pub const LOOT_WEAPON_CHANCE: f64 = 0.5;
pub const LOOT_MANA_POTION_BASE: u32 = 30;
pub const LOOT_MANA_POTION_PER_LEVEL: u32 = 10;
pub const LOOT_HEALTH_POTION_AMOUNT: u32 = 40;
pub const LOOT_WEAPON_BASE_BONUS: u32 = 6;
pub const LOOT_WEAPON_BONUS_PER_LEVEL: u32 = 3;

// =============================================================================
// SESSION
// =============================================================================

/// Number of regular stages before the final boss.
pub const STAGE_COUNT: u32 = 3;
pub const FINAL_BOSS_NAME: &str = "Lord Malacor";
pub const FINAL_BOSS_LEVEL: u32 = 8;
