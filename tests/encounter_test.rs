//! Integration test: encounters from first blow to Victory or Defeat
//!
//! Covers the caster-vs-orc opening exchange, termination under random and
//! scripted rolls, and the boss strike distribution.

use legends::combat::{
    boss_attack, AttackKind, AttackOutcome, CombatEvent, CombatLoop, EncounterOutcome,
    ScriptedController,
};
use legends::core::ScriptedRng;
use legends::items::{Inventory, Item};
use legends::missions::{stage_mission, MissionProgress, MissionTracker};
use legends::simulator::AutoPilot;
use legends::{Archetype, Character, ClassKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Runs one encounter with fresh inventory and missions.
fn fight(
    player: &mut Character,
    opponent: &mut Character,
    rng: &mut impl Rng,
) -> legends::EncounterReport {
    let mut inventory = Inventory::new();
    let mut missions = MissionTracker::new();
    CombatLoop::new(player, opponent, &mut inventory, &mut missions)
        .run(&mut ScriptedController::default(), rng)
}

#[test]
fn test_caster_opening_exchange() {
    let mut mage = Character::caster("Merlin");
    let mut orc = Character::enemy("Orc Grunt", 1, Archetype::Orc);
    assert_eq!(mage.health.current(), 80);
    assert_eq!(mage.mana().unwrap().current(), 100);
    assert_eq!(orc.health.current(), 65);

    // Forced hit (0.0) with a factor of exactly 1.0 (0.5), then no loot.
    let mut rng = ScriptedRng::new(vec![0.0, 0.5, 0.9]);

    let first = mage.attack(&mut orc, &mut rng);
    assert_eq!(first.damage(), 40);
    assert_eq!(orc.health.current(), 25);

    let retaliation = orc.attack(&mut mage, &mut rng);
    assert_eq!(retaliation.damage(), 10);
    assert_eq!(mage.health.current(), 70);
}

#[test]
fn test_caster_mana_boundary() {
    let mut orc = Character::enemy("Orc Grunt", 2, Archetype::Orc);
    let mut mage = Character::caster("Merlin");
    mage.resource_mut().unwrap().set(10);

    let spell = mage.attack(&mut orc, &mut ScriptedRng::constant(0.0));
    assert_eq!(
        spell,
        AttackOutcome::Hit {
            kind: AttackKind::Spell,
            damage: 40
        }
    );
    assert_eq!(mage.mana().unwrap().current(), 0);

    let before = orc.health.current();
    mage.resource_mut().unwrap().set(5);
    let staff = mage.attack(&mut orc, &mut ScriptedRng::constant(0.0));
    assert_eq!(staff.damage(), 3);
    assert_eq!(mage.mana().unwrap().current(), 5);
    assert_eq!(orc.health.current(), before - 3);
}

#[test]
fn test_encounters_always_terminate() {
    for seed in 0..200u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let kind = ClassKind::PLAYABLE[(seed % 3) as usize];
        let mut player = Character::new_player("Hero", kind).unwrap();
        let level = 1 + (seed % 6) as u32;
        let mut enemy = Character::enemy("Orc Berserker", level, Archetype::Orc);

        let mut inventory = Inventory::new();
        let mut missions = MissionTracker::new();
        let report = CombatLoop::new(&mut player, &mut enemy, &mut inventory, &mut missions)
            .run(&mut AutoPilot::default(), &mut rng);

        match report.outcome {
            EncounterOutcome::Victory => assert!(!enemy.is_alive()),
            EncounterOutcome::Defeat => assert!(!player.is_alive()),
        }
        assert!(report.rounds >= 1);
    }
}

#[test]
fn test_scripted_misses_still_end_in_victory() {
    let mut warrior = Character::new_player("Brak", ClassKind::Bruiser).unwrap();
    let mut orc = Character::enemy("Orc Warrior", 3, Archetype::Orc);
    // 0.95 never heals (>= 0.15), never hits (>= 0.85), never drops loot.
    let report = fight(&mut warrior, &mut orc, &mut ScriptedRng::constant(0.95));

    assert_eq!(report.outcome, EncounterOutcome::Victory);
    assert!(warrior.health.is_full());
    // 115 health against 17 per swing
    assert_eq!(report.rounds, 7);
    assert_eq!(report.damage_taken(), 0);
}

#[test]
fn test_victory_rewards_flow_into_progression() {
    let mut warrior = Character::new_player("Brak", ClassKind::Bruiser).unwrap();
    warrior.experience = 90;
    let mut orc = Character::enemy("Orc Grunt", 1, Archetype::Orc);
    let mut inventory = Inventory::new();
    let mut missions = MissionTracker::new();
    missions.assign(stage_mission(1).unwrap());
    orc.receive_damage(60.0);

    // One swing kills; 0.1 drops loot and picks the weapon branch.
    let report = CombatLoop::new(&mut warrior, &mut orc, &mut inventory, &mut missions)
        .run(&mut ScriptedController::default(), &mut ScriptedRng::constant(0.1));

    let rewards = report.rewards.expect("victory carries rewards");
    assert_eq!(rewards.xp_gained, 20);
    assert_eq!(rewards.level_ups.len(), 1);
    assert_eq!(warrior.level, 2);
    assert_eq!(warrior.experience, 10);
    assert!(matches!(rewards.mission, MissionProgress::Advanced { progress: 1, .. }));
    assert!(matches!(
        inventory.items(),
        [Item::Weapon(w)] if w.name == "Bastard Sword" && w.bonus_damage == 9
    ));
    assert!(matches!(report.events.last(), Some(CombatEvent::OpponentDefeated { .. })));
}

#[test]
fn test_boss_drops_nothing() {
    let mut warrior = Character::new_player("Brak", ClassKind::Bruiser).unwrap();
    let mut boss = Character::boss("Lord Malacor", 1, Archetype::Warlord);
    boss.receive_damage(125.0);
    let report = fight(&mut warrior, &mut boss, &mut ScriptedRng::constant(0.0));
    assert_eq!(report.outcome, EncounterOutcome::Victory);
    assert_eq!(report.rewards.unwrap().loot, None);
}

#[test]
fn test_boss_strike_distribution() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let boss = Character::boss("Lord Malacor", 8, Archetype::Warlord);
    let stats = boss.enemy_stats_ref().unwrap().clone();

    let trials = 10_000;
    let mut empowered = 0;
    let mut standard_hits = 0;
    let mut misses = 0;
    for _ in 0..trials {
        match boss_attack(boss.level, &stats, &mut rng) {
            AttackOutcome::Hit {
                kind: AttackKind::EmpoweredStrike,
                damage,
            } => {
                assert_eq!(damage, 48);
                empowered += 1;
            }
            AttackOutcome::Hit { damage, .. } => {
                // base 38 with a 0.9..1.1 factor
                assert!((34..=42).contains(&damage), "damage {damage}");
                standard_hits += 1;
            }
            _ => misses += 1,
        }
    }

    let empowered_rate = empowered as f64 / trials as f64;
    let hit_rate = standard_hits as f64 / (trials - empowered) as f64;
    assert!((empowered_rate - 0.20).abs() < 0.02, "empowered {empowered_rate}");
    assert!((hit_rate - 0.85).abs() < 0.02, "standard hit rate {hit_rate}");
    assert_eq!(empowered + standard_hits + misses, trials);
}
