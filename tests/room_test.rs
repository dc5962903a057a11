//! Integration test: room spawn distribution
//!
//! Statistical check of the spawn tables and effects over many seeded rolls.

use std::collections::HashMap;

use legends::dungeon::{choose_room, Difficulty, RoomEffect};
use legends::ClassKind;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const TRIALS: u32 = 20_000;

fn spawn_rates(stage: u32, player_level: u32, seed: u64) -> HashMap<String, f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let room = choose_room(stage, player_level, &mut rng);
    let mut counts: HashMap<String, u32> = HashMap::new();
    for _ in 0..TRIALS {
        let enemy = room.generate_enemy(&mut rng);
        assert_eq!(enemy.kind(), ClassKind::Enemy);
        *counts.entry(enemy.name).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(name, n)| (name, n as f64 / TRIALS as f64))
        .collect()
}

#[test]
fn test_easy_spawn_proportions() {
    let rates = spawn_rates(1, 5, 31);
    assert_eq!(rates.len(), 3);
    assert!((rates["Orc Commander (Mini-Boss)"] - 0.05).abs() < 0.01);
    assert!((rates["Weak Specter"] - 0.15).abs() < 0.015);
    assert!((rates["Orc Grunt"] - 0.80).abs() < 0.015);
}

#[test]
fn test_hard_spawn_proportions() {
    let rates = spawn_rates(3, 4, 32);
    assert!((rates["Lord of Shadows (Boss)"] - 0.30).abs() < 0.015);
    assert!((rates["Elite Specter"] - 0.50).abs() < 0.015);
    assert!((rates["Orc Berserker"] - 0.20).abs() < 0.015);
}

#[test]
fn test_effects_are_roughly_uniform() {
    let mut rng = ChaCha8Rng::seed_from_u64(33);
    let mut counts: HashMap<RoomEffect, u32> = HashMap::new();
    for _ in 0..TRIALS {
        let room = choose_room(2, 3, &mut rng);
        assert_eq!(room.difficulty, Difficulty::Medium);
        *counts.entry(room.effect).or_default() += 1;
    }
    for effect in RoomEffect::ALL {
        let rate = counts.get(&effect).copied().unwrap_or(0) as f64 / TRIALS as f64;
        assert!((rate - 0.25).abs() < 0.015, "{effect:?} at {rate}");
    }
}
