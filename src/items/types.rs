//! Items and their effects on characters.

use crate::character::Character;
use serde::{Deserialize, Serialize};

/// Which stat a potion restores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionKind {
    Health,
    Mana,
}

impl PotionKind {
    pub fn name(&self) -> &'static str {
        match self {
            PotionKind::Health => "Health",
            PotionKind::Mana => "Mana",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    pub amount: u32,
    pub kind: PotionKind,
}

impl Potion {
    pub fn new(name: impl Into<String>, amount: u32, kind: PotionKind) -> Self {
        Self {
            name: name.into(),
            amount,
            kind,
        }
    }

    pub fn health(name: impl Into<String>, amount: u32) -> Self {
        Self::new(name, amount, PotionKind::Health)
    }

    pub fn mana(name: impl Into<String>, amount: u32) -> Self {
        Self::new(name, amount, PotionKind::Mana)
    }

    /// Drinks the potion. Health potions work on anyone alive; mana potions
    /// only on casters. Restores are clamped by the target pool.
    pub fn use_on(&self, target: &mut Character) -> ItemUse {
        if !target.is_alive() {
            return ItemUse::Failed(ItemFailure::TargetDown);
        }
        match self.kind {
            PotionKind::Health => ItemUse::Restored {
                kind: PotionKind::Health,
                amount: target.heal(self.amount),
            },
            PotionKind::Mana => match &mut target.class {
                crate::character::Class::Caster { mana } => ItemUse::Restored {
                    kind: PotionKind::Mana,
                    amount: mana.add(self.amount as i64) as u32,
                },
                _ => ItemUse::Failed(ItemFailure::NoManaPool),
            },
        }
    }
}

/// A weapon only carries bonus damage; attack formulas read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub bonus_damage: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, bonus_damage: u32) -> Self {
        Self {
            name: name.into(),
            bonus_damage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Potion(Potion),
    Weapon(Weapon),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Potion(p) => &p.name,
            Item::Weapon(w) => &w.name,
        }
    }

    pub fn is_consumable(&self) -> bool {
        matches!(self, Item::Potion(_))
    }

    /// Applies the item's effect to `target`. Weapons have no use effect;
    /// equipping goes through the inventory.
    pub fn use_on(&self, target: &mut Character) -> ItemUse {
        match self {
            Item::Potion(potion) => potion.use_on(target),
            Item::Weapon(_) => ItemUse::Failed(ItemFailure::NotConsumable),
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Potion(p) => write!(f, "{} (+{} {})", p.name, p.amount, p.kind.name()),
            Item::Weapon(w) => write!(f, "{} (+{} dmg)", w.name, w.bonus_damage),
        }
    }
}

/// Why an item had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemFailure {
    /// Mana potion on a character without mana.
    NoManaPool,
    /// The target is dead.
    TargetDown,
    /// Weapons are equipped, not used.
    NotConsumable,
    /// The character cannot wield weapons.
    CannotEquip,
    /// The new weapon is not better than anything already held.
    NotAnUpgrade,
}

/// Result of using an item. Only `Failed` leaves the item in the holder's hands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemUse {
    Restored { kind: PotionKind, amount: u32 },
    Failed(ItemFailure),
}

impl ItemUse {
    pub fn applied(&self) -> bool {
        !matches!(self, ItemUse::Failed(_))
    }
}
