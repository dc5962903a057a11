//! Wielding weapons.

use super::types::{ItemFailure, Weapon};
use crate::character::{Character, Class};
use serde::{Deserialize, Serialize};

/// Hand a weapon went into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hand {
    Main,
    Off,
}

/// Result of trying to wield a weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EquipOutcome {
    Equipped {
        hand: Hand,
        /// Weapon that was in that hand before, handed back to the caller.
        replaced: Option<Weapon>,
    },
    /// Weapon was not taken; it is handed back.
    Rejected { weapon: Weapon, reason: ItemFailure },
}

/// Puts `weapon` in the character's hands.
///
/// Bruisers always swap. Duelists fill an empty hand first, then replace the
/// weaker hand only when the new weapon is stronger. Everyone else refuses.
pub fn equip_weapon(character: &mut Character, weapon: Weapon) -> EquipOutcome {
    if !character.is_alive() {
        return EquipOutcome::Rejected {
            weapon,
            reason: ItemFailure::TargetDown,
        };
    }

    match &mut character.class {
        Class::Bruiser { weapon: held } => EquipOutcome::Equipped {
            hand: Hand::Main,
            replaced: held.replace(weapon),
        },
        Class::Duelist {
            main_hand,
            off_hand,
            ..
        } => {
            if main_hand.is_none() {
                *main_hand = Some(weapon);
                return EquipOutcome::Equipped {
                    hand: Hand::Main,
                    replaced: None,
                };
            }
            if off_hand.is_none() {
                *off_hand = Some(weapon);
                return EquipOutcome::Equipped {
                    hand: Hand::Off,
                    replaced: None,
                };
            }

            let main_bonus = main_hand.as_ref().map_or(0, |w| w.bonus_damage);
            let off_bonus = off_hand.as_ref().map_or(0, |w| w.bonus_damage);
            let (hand, slot, weakest) = if off_bonus <= main_bonus {
                (Hand::Off, off_hand, off_bonus)
            } else {
                (Hand::Main, main_hand, main_bonus)
            };

            if weapon.bonus_damage <= weakest {
                return EquipOutcome::Rejected {
                    weapon,
                    reason: ItemFailure::NotAnUpgrade,
                };
            }
            EquipOutcome::Equipped {
                hand,
                replaced: slot.replace(weapon),
            }
        }
        Class::Caster { .. } | Class::Enemy(_) | Class::Boss(_) => EquipOutcome::Rejected {
            weapon,
            reason: ItemFailure::CannotEquip,
        },
    }
}
