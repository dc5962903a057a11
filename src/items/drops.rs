use super::types::{Item, Potion, Weapon};
use crate::character::{Character, Class, ClassKind};
use crate::core::constants::*;
use rand::Rng;

/// Loot weapon name offered to a class.
pub fn loot_weapon_name(kind: ClassKind) -> &'static str {
    match kind {
        ClassKind::Bruiser => "Bastard Sword",
        _ => "Poisoned Dagger",
    }
}

/// Rolls the drop for `defeated`, tailored to the `victor`.
///
/// 40% chance of anything. Casters always get a mana potion sized by the
/// enemy level; everyone else gets a coin flip between a weapon and a flat
/// health potion. Bosses never drop loot.
pub fn roll_loot(defeated: &Character, victor: &Character, rng: &mut impl Rng) -> Option<Item> {
    match defeated.class {
        Class::Enemy(_) => {}
        _ => return None,
    }

    if rng.gen::<f64>() >= LOOT_DROP_CHANCE {
        return None;
    }

    let level = defeated.level;
    let item = if victor.is_caster() {
        Item::Potion(Potion::mana(
            "Mana Potion",
            LOOT_MANA_POTION_BASE + LOOT_MANA_POTION_PER_LEVEL * level,
        ))
    } else if rng.gen::<f64>() < LOOT_WEAPON_CHANCE {
        Item::Weapon(Weapon::new(
            loot_weapon_name(victor.kind()),
            LOOT_WEAPON_BASE_BONUS + LOOT_WEAPON_BONUS_PER_LEVEL * level,
        ))
    } else {
        Item::Potion(Potion::health("Health Potion", LOOT_HEALTH_POTION_AMOUNT))
    };

    tracing::debug!(enemy = %defeated.name, item = %item, "loot dropped");
    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Archetype;
    use crate::core::rng::ScriptedRng;
    use crate::items::PotionKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_no_drop_above_threshold() {
        let orc = Character::enemy("Orc", 2, Archetype::Orc);
        let mage = Character::caster("Merlin");
        let mut rng = ScriptedRng::constant(0.40);
        assert!(roll_loot(&orc, &mage, &mut rng).is_none());
    }

    #[test]
    fn test_caster_gets_scaled_mana_potion() {
        let orc = Character::enemy("Orc", 2, Archetype::Orc);
        let mage = Character::caster("Merlin");
        let mut rng = ScriptedRng::constant(0.1);
        match roll_loot(&orc, &mage, &mut rng) {
            Some(Item::Potion(p)) => {
                assert_eq!(p.kind, PotionKind::Mana);
                assert_eq!(p.amount, 50);
            }
            other => panic!("expected mana potion, got {other:?}"),
        }
    }

    #[test]
    fn test_bruiser_weapon_drop() {
        let orc = Character::enemy("Orc", 3, Archetype::Orc);
        let warrior = Character::bruiser("Brak", None);
        let mut rng = ScriptedRng::new(vec![0.1, 0.2]);
        assert_eq!(
            roll_loot(&orc, &warrior, &mut rng),
            Some(Item::Weapon(Weapon::new("Bastard Sword", 15)))
        );
    }

    #[test]
    fn test_duelist_potion_drop() {
        let orc = Character::enemy("Orc", 3, Archetype::Orc);
        let rogue = Character::duelist("Vex", 100, None, None);
        let mut rng = ScriptedRng::new(vec![0.1, 0.7]);
        assert_eq!(
            roll_loot(&orc, &rogue, &mut rng),
            Some(Item::Potion(Potion::health("Health Potion", 40)))
        );

        let mut rng = ScriptedRng::new(vec![0.1, 0.3]);
        assert_eq!(
            roll_loot(&orc, &rogue, &mut rng),
            Some(Item::Weapon(Weapon::new("Poisoned Dagger", 15)))
        );
    }

    #[test]
    fn test_boss_never_drops() {
        let boss = Character::boss("Lord Malacor", 8, Archetype::Warlord);
        let mage = Character::caster("Merlin");
        let mut rng = ScriptedRng::constant(0.0);
        assert!(roll_loot(&boss, &mage, &mut rng).is_none());
    }

    #[test]
    fn test_drop_rate_is_about_forty_percent() {
        let orc = Character::enemy("Orc", 1, Archetype::Orc);
        let warrior = Character::bruiser("Brak", None);
        let mut rng = ChaCha8Rng::seed_from_u64(12345);

        let trials = 10_000;
        let drops = (0..trials)
            .filter(|_| roll_loot(&orc, &warrior, &mut rng).is_some())
            .count();
        assert!(
            (3700..4300).contains(&drops),
            "Expected ~40% drops, got {drops}/{trials}"
        );
    }
}
