//! The combat participant model.
//!
//! One `Character` record covers players and opponents. Class-specific data
//! lives in the [`Class`] payload; behavior dispatches on it in
//! `combat::logic` and `character::progression`.

use super::stats::StatPool;
use crate::core::constants::*;
use crate::items::Weapon;
use serde::{Deserialize, Serialize};

/// Enemy family, used by hunt missions to decide which kills count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Orc,
    Specter,
    Knight,
    Warlord,
}

impl Archetype {
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Orc => "Orc",
            Archetype::Specter => "Specter",
            Archetype::Knight => "Knight",
            Archetype::Warlord => "Warlord",
        }
    }
}

/// Stats shared by regular enemies and bosses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub archetype: Archetype,
    /// Damage before the ±10% variance roll.
    pub base_damage: u32,
    pub xp_reward: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Class {
    /// Spends mana on spells.
    Caster { mana: StatPool },
    /// Spends energy on strikes with both hands.
    Duelist {
        energy: StatPool,
        main_hand: Option<Weapon>,
        off_hand: Option<Weapon>,
    },
    /// Swings an equipped weapon; no resource gating.
    Bruiser { weapon: Option<Weapon> },
    Enemy(EnemyStats),
    /// Doubled health and an empowered strike; never drops loot.
    Boss(EnemyStats),
}

/// Payload-free discriminant of [`Class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Caster,
    Duelist,
    Bruiser,
    Enemy,
    Boss,
}

impl ClassKind {
    pub const PLAYABLE: [ClassKind; 3] = [ClassKind::Caster, ClassKind::Duelist, ClassKind::Bruiser];

    pub fn name(&self) -> &'static str {
        match self {
            ClassKind::Caster => "Caster",
            ClassKind::Duelist => "Duelist",
            ClassKind::Bruiser => "Bruiser",
            ClassKind::Enemy => "Enemy",
            ClassKind::Boss => "Boss",
        }
    }

    pub fn is_playable(&self) -> bool {
        Self::PLAYABLE.contains(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub level: u32,
    pub health: StatPool,
    pub defense: u32,
    /// Experience banked towards the next level.
    pub experience: u64,
    pub class: Class,
}

impl Character {
    fn base(name: impl Into<String>, level: u32, max_health: u32, defense: u32, class: Class) -> Self {
        Self {
            name: name.into(),
            level: level.max(1),
            health: StatPool::new(max_health),
            defense,
            experience: 0,
            class,
        }
    }

    /// Level 1 caster with a full mana pool.
    pub fn caster(name: impl Into<String>) -> Self {
        Self::base(
            name,
            1,
            CASTER_BASE_HEALTH,
            CASTER_BASE_DEFENSE,
            Class::Caster {
                mana: StatPool::new(CASTER_BASE_MANA),
            },
        )
    }

    /// Level 1 duelist. Either hand may be empty.
    pub fn duelist(
        name: impl Into<String>,
        max_energy: u32,
        main_hand: Option<Weapon>,
        off_hand: Option<Weapon>,
    ) -> Self {
        Self::base(
            name,
            1,
            DUELIST_BASE_HEALTH,
            DUELIST_BASE_DEFENSE,
            Class::Duelist {
                energy: StatPool::new(max_energy),
                main_hand,
                off_hand,
            },
        )
    }

    /// Level 1 bruiser carrying `weapon`.
    pub fn bruiser(name: impl Into<String>, weapon: Option<Weapon>) -> Self {
        Self::base(
            name,
            1,
            BRUISER_BASE_HEALTH,
            BRUISER_BASE_DEFENSE,
            Class::Bruiser { weapon },
        )
    }

    /// A fresh player of the given class with the standard starting gear.
    /// Returns `None` for opponent kinds.
    pub fn new_player(name: impl Into<String>, kind: ClassKind) -> Option<Self> {
        match kind {
            ClassKind::Caster => Some(Self::caster(name)),
            ClassKind::Duelist => Some(Self::duelist(
                name,
                DUELIST_DEFAULT_ENERGY,
                Some(Weapon::new(DUELIST_STARTER_WEAPON, DUELIST_STARTER_WEAPON_BONUS)),
                Some(Weapon::new(DUELIST_STARTER_WEAPON, DUELIST_STARTER_WEAPON_BONUS)),
            )),
            ClassKind::Bruiser => Some(Self::bruiser(
                name,
                Some(Weapon::new(BRUISER_STARTER_WEAPON, BRUISER_STARTER_WEAPON_BONUS)),
            )),
            ClassKind::Enemy | ClassKind::Boss => None,
        }
    }

    fn enemy_stats(archetype: Archetype, level: u32) -> EnemyStats {
        EnemyStats {
            archetype,
            base_damage: ENEMY_BASE_DAMAGE + ENEMY_DAMAGE_PER_LEVEL * level,
            xp_reward: ENEMY_XP_PER_LEVEL * level as u64,
        }
    }

    /// Enemy scaled to `level` (minimum 1).
    pub fn enemy(name: impl Into<String>, level: u32, archetype: Archetype) -> Self {
        let level = level.max(1);
        Self::base(
            name,
            level,
            ENEMY_BASE_HEALTH + ENEMY_HEALTH_PER_LEVEL * level,
            ENEMY_BASE_DEFENSE + ENEMY_DEFENSE_PER_LEVEL * level,
            Class::Enemy(Self::enemy_stats(archetype, level)),
        )
    }

    /// Boss: an enemy of the same level with doubled (and refilled) health.
    pub fn boss(name: impl Into<String>, level: u32, archetype: Archetype) -> Self {
        let level = level.max(1);
        Self::base(
            name,
            level,
            (ENEMY_BASE_HEALTH + ENEMY_HEALTH_PER_LEVEL * level) * BOSS_HEALTH_MULTIPLIER,
            ENEMY_BASE_DEFENSE + ENEMY_DEFENSE_PER_LEVEL * level,
            Class::Boss(Self::enemy_stats(archetype, level)),
        )
    }

    pub fn kind(&self) -> ClassKind {
        match self.class {
            Class::Caster { .. } => ClassKind::Caster,
            Class::Duelist { .. } => ClassKind::Duelist,
            Class::Bruiser { .. } => ClassKind::Bruiser,
            Class::Enemy(_) => ClassKind::Enemy,
            Class::Boss(_) => ClassKind::Boss,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health.current() > 0
    }

    pub fn is_opponent(&self) -> bool {
        matches!(self.class, Class::Enemy(_) | Class::Boss(_))
    }

    pub fn is_caster(&self) -> bool {
        matches!(self.class, Class::Caster { .. })
    }

    pub fn mana(&self) -> Option<&StatPool> {
        match &self.class {
            Class::Caster { mana } => Some(mana),
            _ => None,
        }
    }

    pub fn energy(&self) -> Option<&StatPool> {
        match &self.class {
            Class::Duelist { energy, .. } => Some(energy),
            _ => None,
        }
    }

    /// The class-specific pool (mana or energy), if any.
    pub fn resource(&self) -> Option<&StatPool> {
        match &self.class {
            Class::Caster { mana } => Some(mana),
            Class::Duelist { energy, .. } => Some(energy),
            _ => None,
        }
    }

    pub fn resource_mut(&mut self) -> Option<&mut StatPool> {
        match &mut self.class {
            Class::Caster { mana } => Some(mana),
            Class::Duelist { energy, .. } => Some(energy),
            _ => None,
        }
    }

    pub fn enemy_stats_ref(&self) -> Option<&EnemyStats> {
        match &self.class {
            Class::Enemy(stats) | Class::Boss(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn archetype(&self) -> Option<Archetype> {
        self.enemy_stats_ref().map(|s| s.archetype)
    }

    /// Experience granted for defeating this character (0 for players).
    pub fn xp_reward(&self) -> u64 {
        self.enemy_stats_ref().map_or(0, |s| s.xp_reward)
    }

    /// Sum of the bonus damage of everything this character wields.
    pub fn weapon_bonus(&self) -> u32 {
        match &self.class {
            Class::Duelist {
                main_hand,
                off_hand,
                ..
            } => {
                main_hand.as_ref().map_or(0, |w| w.bonus_damage)
                    + off_hand.as_ref().map_or(0, |w| w.bonus_damage)
            }
            Class::Bruiser { weapon } => weapon.as_ref().map_or(0, |w| w.bonus_damage),
            _ => 0,
        }
    }

    /// Applies damage, rounded to the nearest whole point. Health never drops
    /// below zero. Returns the health actually lost.
    pub fn receive_damage(&mut self, amount: f64) -> u32 {
        let rounded = round_points(amount);
        (-self.health.add(-(rounded as i64))) as u32
    }

    /// Restores health on a living character. Returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        self.health.add(amount as i64) as u32
    }
}

/// Rounds a computed amount to whole points, treating negatives and NaN as 0.
pub fn round_points(amount: f64) -> u32 {
    if amount.is_nan() || amount <= 0.0 {
        return 0;
    }
    amount.round().min(u32::MAX as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caster_starting_stats() {
        let mage = Character::caster("Merlin");
        assert_eq!(mage.level, 1);
        assert_eq!(mage.health.max(), 80);
        assert_eq!(mage.defense, 1);
        assert_eq!(mage.mana().map(|m| m.current()), Some(100));
        assert_eq!(mage.kind(), ClassKind::Caster);
        assert!(mage.energy().is_none());
    }

    #[test]
    fn test_new_player_gear() {
        let rogue = Character::new_player("Vex", ClassKind::Duelist).unwrap();
        assert_eq!(rogue.weapon_bonus(), 8);
        assert_eq!(rogue.energy().map(|e| e.max()), Some(DUELIST_DEFAULT_ENERGY));

        let warrior = Character::new_player("Brak", ClassKind::Bruiser).unwrap();
        assert_eq!(warrior.weapon_bonus(), 5);
        assert_eq!(warrior.health.max(), 120);

        assert!(Character::new_player("Nope", ClassKind::Boss).is_none());
    }

    #[test]
    fn test_enemy_scaling() {
        let orc = Character::enemy("Orc Grunt", 1, Archetype::Orc);
        assert_eq!(orc.health.max(), 65);
        assert_eq!(orc.defense, 3);
        assert_eq!(orc.enemy_stats_ref().unwrap().base_damage, 10);
        assert_eq!(orc.xp_reward(), 20);

        let brute = Character::enemy("Orc Berserker", 4, Archetype::Orc);
        assert_eq!(brute.health.max(), 140);
        assert_eq!(brute.enemy_stats_ref().unwrap().base_damage, 22);
    }

    #[test]
    fn test_enemy_level_floor() {
        let e = Character::enemy("Whelp", 0, Archetype::Specter);
        assert_eq!(e.level, 1);
    }

    #[test]
    fn test_boss_has_double_health() {
        let boss = Character::boss("Lord Malacor", 8, Archetype::Warlord);
        let regular = Character::enemy("Lord Malacor", 8, Archetype::Warlord);
        assert_eq!(boss.health.max(), regular.health.max() * 2);
        assert!(boss.health.is_full());
        assert_eq!(boss.kind(), ClassKind::Boss);
        assert_eq!(boss.archetype(), Some(Archetype::Warlord));
    }

    #[test]
    fn test_receive_damage_rounds_and_floors() {
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        assert_eq!(orc.receive_damage(9.6), 10);
        assert_eq!(orc.health.current(), 55);
        assert_eq!(orc.receive_damage(-5.0), 0);
        assert_eq!(orc.receive_damage(1000.0), 55);
        assert_eq!(orc.health.current(), 0);
        assert!(!orc.is_alive());
    }

    #[test]
    fn test_dead_characters_cannot_be_healed() {
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        orc.receive_damage(500.0);
        assert_eq!(orc.heal(20), 0);
        assert!(!orc.is_alive());
    }

    #[test]
    fn test_round_points() {
        assert_eq!(round_points(12.5), 13);
        assert_eq!(round_points(12.49), 12);
        assert_eq!(round_points(f64::NAN), 0);
    }
}
