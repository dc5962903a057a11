//! Attack resolution and the opponent's turn policy.
//!
//! Each class formula is a plain function over the attacker's level and class
//! payload; [`attack`] dispatches on [`Class`] and applies the damage.

use rand::Rng;

use super::types::{AttackKind, AttackOutcome, OpponentMove};
use crate::character::{round_points, Character, Class, EnemyStats, RestOutcome, StatPool};
use crate::core::constants::*;

/// Resolves one attack from `attacker` on `target`.
///
/// Dead attackers and dead targets are no-ops. The only effect on the target
/// is `receive_damage`.
pub fn attack(attacker: &mut Character, target: &mut Character, rng: &mut impl Rng) -> AttackOutcome {
    if !attacker.is_alive() {
        return AttackOutcome::AttackerDown;
    }
    if !target.is_alive() {
        return AttackOutcome::TargetDown;
    }

    let level = attacker.level;
    let weapon_bonus = attacker.weapon_bonus();
    let outcome = match &mut attacker.class {
        Class::Caster { mana } => caster_attack(level, mana),
        Class::Duelist { energy, .. } => duelist_attack(level, energy, weapon_bonus),
        Class::Bruiser { .. } => bruiser_attack(level, weapon_bonus),
        Class::Enemy(stats) => enemy_attack(stats, rng),
        Class::Boss(stats) => boss_attack(level, stats, rng),
    };

    if let AttackOutcome::Hit { damage, .. } = outcome {
        target.receive_damage(damage as f64);
    }

    tracing::debug!(
        attacker = %attacker.name,
        target = %target.name,
        ?outcome,
        target_health = target.health.current(),
        "attack resolved"
    );
    outcome
}

/// Spell when mana allows, otherwise a weak staff blow. Both always land.
pub fn caster_attack(level: u32, mana: &mut StatPool) -> AttackOutcome {
    if mana.current() >= SPELL_MANA_COST {
        mana.add(-(SPELL_MANA_COST as i64));
        AttackOutcome::Hit {
            kind: AttackKind::Spell,
            damage: SPELL_BASE_DAMAGE + SPELL_DAMAGE_PER_LEVEL * level,
        }
    } else {
        AttackOutcome::Hit {
            kind: AttackKind::StaffBlow,
            damage: STAFF_BASE_DAMAGE + level,
        }
    }
}

pub fn duelist_attack(level: u32, energy: &mut StatPool, weapon_bonus: u32) -> AttackOutcome {
    if energy.current() < DUAL_STRIKE_ENERGY_COST {
        return AttackOutcome::Exhausted;
    }
    energy.add(-(DUAL_STRIKE_ENERGY_COST as i64));
    AttackOutcome::Hit {
        kind: AttackKind::DualStrike,
        damage: weapon_bonus + DUAL_STRIKE_DAMAGE_PER_LEVEL * level,
    }
}

pub fn bruiser_attack(level: u32, weapon_bonus: u32) -> AttackOutcome {
    AttackOutcome::Hit {
        kind: AttackKind::WeaponSwing,
        damage: weapon_bonus + BRUISER_BASE_DAMAGE + BRUISER_DAMAGE_PER_LEVEL * level,
    }
}

/// Hit roll, then (on a hit) a variance roll in [0.9, 1.1).
pub fn enemy_attack(stats: &EnemyStats, rng: &mut impl Rng) -> AttackOutcome {
    if rng.gen::<f64>() >= ENEMY_HIT_CHANCE {
        return AttackOutcome::Missed;
    }
    let factor = ENEMY_DAMAGE_FACTOR_MIN + rng.gen::<f64>() * ENEMY_DAMAGE_FACTOR_SPREAD;
    AttackOutcome::Hit {
        kind: AttackKind::Strike,
        damage: round_points(stats.base_damage as f64 * factor),
    }
}

/// Empowered roll first; a non-empowered turn falls through to [`enemy_attack`].
pub fn boss_attack(level: u32, stats: &EnemyStats, rng: &mut impl Rng) -> AttackOutcome {
    if rng.gen::<f64>() < BOSS_EMPOWERED_CHANCE {
        return AttackOutcome::Hit {
            kind: AttackKind::EmpoweredStrike,
            damage: empowered_damage(level),
        };
    }
    enemy_attack(stats, rng)
}

pub fn empowered_damage(level: u32) -> u32 {
    round_points((BOSS_EMPOWERED_BASE_PER_LEVEL * level) as f64 * BOSS_EMPOWERED_MULTIPLIER)
}

/// Opponents at or below the heal threshold try to heal with a small chance.
/// The roll is only drawn when the health condition holds.
pub fn choose_opponent_move(opponent: &Character, rng: &mut impl Rng) -> OpponentMove {
    let wounded =
        opponent.health.current() as f64 <= opponent.health.max() as f64 * ENEMY_HEAL_THRESHOLD;
    if wounded && rng.gen::<f64>() < ENEMY_HEAL_CHANCE {
        OpponentMove::Heal
    } else {
        OpponentMove::Attack
    }
}

/// What the opponent's turn produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentAction {
    Attacked(AttackOutcome),
    Healed(RestOutcome),
}

pub fn opponent_turn(opponent: &mut Character, player: &mut Character, rng: &mut impl Rng) -> OpponentAction {
    match choose_opponent_move(opponent, rng) {
        OpponentMove::Heal => OpponentAction::Healed(opponent.rest()),
        OpponentMove::Attack => OpponentAction::Attacked(attack(opponent, player, rng)),
    }
}

impl Character {
    pub fn attack(&mut self, target: &mut Character, rng: &mut impl Rng) -> AttackOutcome {
        attack(self, target, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Archetype;
    use crate::core::rng::ScriptedRng;
    use crate::items::Weapon;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn set_resource(c: &mut Character, value: i64) {
        if let Some(pool) = c.resource_mut() {
            pool.set(value);
        }
    }

    #[test]
    fn test_spell_spends_mana_and_hits() {
        let mut mage = Character::caster("Merlin");
        set_resource(&mut mage, 10);
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        let mut rng = ScriptedRng::constant(0.99);

        let outcome = mage.attack(&mut orc, &mut rng);
        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                kind: AttackKind::Spell,
                damage: 40
            }
        );
        assert_eq!(mage.mana().unwrap().current(), 0);
        assert_eq!(orc.health.current(), 25);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_out_of_mana_falls_back_to_staff() {
        let mut mage = Character::caster("Merlin");
        set_resource(&mut mage, 5);
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);

        let outcome = mage.attack(&mut orc, &mut ScriptedRng::constant(0.0));
        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                kind: AttackKind::StaffBlow,
                damage: 3
            }
        );
        assert_eq!(mage.mana().unwrap().current(), 5);
        assert_eq!(orc.health.current(), 62);
    }

    #[test]
    fn test_dual_strike_uses_both_hands() {
        let mut rogue = Character::duelist(
            "Vex",
            100,
            Some(Weapon::new("Rusty Dagger", 4)),
            Some(Weapon::new("Poisoned Dagger", 9)),
        );
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        let outcome = rogue.attack(&mut orc, &mut ScriptedRng::constant(0.0));
        assert_eq!(outcome.damage(), 4 + 9 + 5);
        assert_eq!(rogue.energy().unwrap().current(), 90);
    }

    #[test]
    fn test_dual_strike_with_empty_hands() {
        let mut rogue = Character::duelist("Vex", 100, None, None);
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        assert_eq!(rogue.attack(&mut orc, &mut ScriptedRng::constant(0.0)).damage(), 5);
    }

    #[test]
    fn test_exhausted_duelist_skips() {
        let mut rogue = Character::duelist("Vex", 100, None, None);
        set_resource(&mut rogue, 9);
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        let outcome = rogue.attack(&mut orc, &mut ScriptedRng::constant(0.0));
        assert_eq!(outcome, AttackOutcome::Exhausted);
        assert!(orc.health.is_full());
        assert_eq!(rogue.energy().unwrap().current(), 9);
    }

    #[test]
    fn test_bruiser_swing() {
        let mut warrior = Character::bruiser("Brak", Some(Weapon::new("Bastard Sword", 5)));
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        let outcome = warrior.attack(&mut orc, &mut ScriptedRng::constant(0.99));
        assert_eq!(outcome.damage(), 5 + 8 + 4);

        let mut unarmed = Character::bruiser("Fist", None);
        assert_eq!(unarmed.attack(&mut orc, &mut ScriptedRng::constant(0.0)).damage(), 12);
    }

    #[test]
    fn test_enemy_forced_hit_with_unit_factor() {
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        let mut mage = Character::caster("Merlin");
        let mut rng = ScriptedRng::new(vec![0.0, 0.5]);
        let outcome = orc.attack(&mut mage, &mut rng);
        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                kind: AttackKind::Strike,
                damage: 10
            }
        );
        assert_eq!(mage.health.current(), 70);
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn test_enemy_miss_draws_one_roll() {
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        let mut mage = Character::caster("Merlin");
        let mut rng = ScriptedRng::constant(0.85);
        assert_eq!(orc.attack(&mut mage, &mut rng), AttackOutcome::Missed);
        assert_eq!(rng.consumed(), 1);
        assert!(mage.health.is_full());
    }

    #[test]
    fn test_enemy_damage_variance_bounds() {
        let stats = Character::enemy("Orc", 5, Archetype::Orc)
            .enemy_stats_ref()
            .cloned()
            .unwrap();
        // base 26: factor 0.9 -> 23.4, factor just under 1.1 -> 28.6
        let low = enemy_attack(&stats, &mut ScriptedRng::new(vec![0.0, 0.0]));
        let high = enemy_attack(&stats, &mut ScriptedRng::new(vec![0.0, 0.999_999]));
        assert_eq!(low.damage(), 23);
        assert_eq!(high.damage(), 29);
    }

    #[test]
    fn test_enemy_damage_rounds_to_nearest() {
        let stats = Character::enemy("Orc", 1, Archetype::Orc)
            .enemy_stats_ref()
            .cloned()
            .unwrap();
        // base 10, factor about 1.08 -> 10.8 lands on 11, not 10
        let strike = enemy_attack(&stats, &mut ScriptedRng::new(vec![0.0, 0.9]));
        assert_eq!(strike.damage(), 11);
        // Halves round up
        assert_eq!(round_points(10.5), 11);
        assert_eq!(round_points(10.49), 10);
    }

    #[test]
    fn test_boss_empowered_strike() {
        let mut boss = Character::boss("Lord Malacor", 8, Archetype::Warlord);
        let mut mage = Character::caster("Merlin");
        let mut rng = ScriptedRng::constant(0.1);
        let outcome = boss.attack(&mut mage, &mut rng);
        assert!(outcome.is_critical());
        assert_eq!(outcome.damage(), 48);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_boss_falls_through_to_standard_strike() {
        let mut boss = Character::boss("Lord Malacor", 1, Archetype::Warlord);
        let mut mage = Character::caster("Merlin");
        let mut rng = ScriptedRng::new(vec![0.5, 0.0, 0.5]);
        let outcome = boss.attack(&mut mage, &mut rng);
        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                kind: AttackKind::Strike,
                damage: 10
            }
        );
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn test_dead_attacker_and_dead_target_are_noops() {
        let mut mage = Character::caster("Merlin");
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        orc.receive_damage(1000.0);

        let before = mage.clone();
        assert_eq!(mage.attack(&mut orc, &mut ScriptedRng::constant(0.0)), AttackOutcome::TargetDown);
        assert_eq!(mage, before);

        let mut rng = ScriptedRng::constant(0.0);
        assert_eq!(orc.attack(&mut mage, &mut rng), AttackOutcome::AttackerDown);
        assert!(mage.health.is_full());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_healthy_opponent_never_rolls_to_heal() {
        let orc = Character::enemy("Orc", 1, Archetype::Orc);
        let mut rng = ScriptedRng::constant(0.0);
        assert_eq!(choose_opponent_move(&orc, &mut rng), OpponentMove::Attack);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_wounded_opponent_heal_chance() {
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        orc.receive_damage(46.0); // 19 of 65 is below 30%
        assert_eq!(choose_opponent_move(&orc, &mut ScriptedRng::constant(0.1)), OpponentMove::Heal);
        assert_eq!(choose_opponent_move(&orc, &mut ScriptedRng::constant(0.15)), OpponentMove::Attack);
    }

    #[test]
    fn test_opponent_turn_heals_with_rest() {
        let mut orc = Character::enemy("Orc", 1, Archetype::Orc);
        orc.receive_damage(55.0);
        let mut mage = Character::caster("Merlin");
        let action = opponent_turn(&mut orc, &mut mage, &mut ScriptedRng::constant(0.0));
        assert_eq!(
            action,
            OpponentAction::Healed(RestOutcome {
                health_restored: 16,
                resource_restored: 0
            })
        );
        assert_eq!(orc.health.current(), 26);
        assert!(mage.health.is_full());
    }

    #[test]
    fn test_boss_empowered_rate() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let boss = Character::boss("Lord Malacor", 4, Archetype::Warlord);
        let stats = boss.enemy_stats_ref().cloned().unwrap();
        let trials = 10_000;
        let (mut crits, mut hits) = (0, 0);
        for _ in 0..trials {
            let outcome = boss_attack(boss.level, &stats, &mut rng);
            if outcome.is_critical() {
                crits += 1;
            } else if outcome.is_hit() {
                hits += 1;
            }
        }
        let crit_rate = crits as f64 / trials as f64;
        let hit_rate = hits as f64 / trials as f64;
        assert!((crit_rate - 0.20).abs() < 0.02, "crit rate {crit_rate}");
        assert!((hit_rate - 0.68).abs() < 0.02, "standard hit rate {hit_rate}");
    }
}
