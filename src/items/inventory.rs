//! The player's backpack.

use super::equipment::{equip_weapon, EquipOutcome, Hand};
use super::types::{Item, ItemFailure, ItemUse, PotionKind};
use crate::character::Character;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("no item in slot {index} (inventory holds {len})")]
    NoSuchSlot { index: usize, len: usize },
}

/// What happened when an inventory item was used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryUse {
    /// A potion was drunk and removed from the inventory.
    Consumed {
        item: String,
        kind: PotionKind,
        amount: u32,
    },
    /// A weapon was wielded. Any displaced weapon went back into the inventory.
    Equipped {
        item: String,
        hand: Hand,
        returned: Option<String>,
    },
    /// Nothing happened; the item stays where it was.
    Failed { item: String, reason: ItemFailure },
}

impl InventoryUse {
    /// Whether the use counts as an action (anything but a failure).
    pub fn succeeded(&self) -> bool {
        !matches!(self, InventoryUse::Failed { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Index of the first potion of `kind`, if any.
    pub fn find_potion(&self, kind: PotionKind) -> Option<usize> {
        self.items
            .iter()
            .position(|item| matches!(item, Item::Potion(p) if p.kind == kind))
    }

    /// Index of the first weapon, if any.
    pub fn find_weapon(&self) -> Option<usize> {
        self.items.iter().position(|item| matches!(item, Item::Weapon(_)))
    }

    /// Uses the item in `index` on `target`. Potions are removed only when they
    /// take effect; weapons are wielded.
    pub fn use_item(&mut self, index: usize, target: &mut Character) -> Result<InventoryUse, InventoryError> {
        let len = self.items.len();
        if index >= len {
            return Err(InventoryError::NoSuchSlot { index, len });
        }

        let outcome = match self.items.remove(index) {
            Item::Potion(potion) => match potion.use_on(target) {
                ItemUse::Restored { kind, amount } => InventoryUse::Consumed {
                    item: potion.name,
                    kind,
                    amount,
                },
                ItemUse::Failed(reason) => {
                    let name = potion.name.clone();
                    self.items.insert(index, Item::Potion(potion));
                    InventoryUse::Failed { item: name, reason }
                }
            },
            Item::Weapon(weapon) => {
                let name = weapon.name.clone();
                match equip_weapon(target, weapon) {
                    EquipOutcome::Equipped { hand, replaced } => {
                        let returned = replaced.map(|old| {
                            let old_name = old.name.clone();
                            self.items.push(Item::Weapon(old));
                            old_name
                        });
                        InventoryUse::Equipped {
                            item: name,
                            hand,
                            returned,
                        }
                    }
                    EquipOutcome::Rejected { weapon, reason } => {
                        self.items.insert(index, Item::Weapon(weapon));
                        InventoryUse::Failed { item: name, reason }
                    }
                }
            }
        };

        tracing::debug!(index, ?outcome, "inventory item used");
        Ok(outcome)
    }
}
