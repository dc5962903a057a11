//! Automatic player used by the simulator.

use crate::character::{Character, Class};
use crate::combat::{PlayerAction, PlayerController, TurnView};
use crate::core::constants::{DUAL_STRIKE_ENERGY_COST, SPELL_MANA_COST};
use crate::core::Session;
use crate::items::{Inventory, InventoryUse, Item, PotionKind, Weapon};

/// Simple in-combat policy: drink below `potion_below`, rest when the attack
/// resource is spent or health is below `rest_below`, otherwise attack.
/// Never rests twice in a row, so every encounter keeps making progress.
#[derive(Debug, Clone)]
pub struct AutoPilot {
    pub potion_below: f64,
    pub rest_below: f64,
    /// Health fraction under which the pilot patches up between fights.
    pub recover_below: f64,
    rested_last: bool,
}

impl Default for AutoPilot {
    fn default() -> Self {
        Self {
            potion_below: 0.35,
            rest_below: 0.25,
            recover_below: 0.5,
            rested_last: false,
        }
    }
}

impl AutoPilot {
    /// Between fights: wield the strongest backpack weapons that beat what is
    /// held, then drink or rest if health is low.
    pub fn prepare(&mut self, session: &mut Session) {
        self.rested_last = false;

        // Each equip raises the weakest hand, so this ends once nothing in the
        // backpack beats it.
        for _ in 0..session.inventory().len() {
            let Some(weakest) = weakest_hand(session.player()) else {
                break;
            };
            let Some((index, bonus)) = best_backpack_weapon(session.inventory()) else {
                break;
            };
            if bonus <= weakest {
                break;
            }
            if !matches!(session.use_item(index), Ok(InventoryUse::Equipped { .. })) {
                break;
            }
        }

        if session.player().health.fraction() < self.recover_below {
            match session.inventory().find_potion(PotionKind::Health) {
                Some(index) => {
                    let _ = session.use_item(index);
                }
                None => {
                    let _ = session.rest();
                }
            }
        }
    }
}

/// Bonus of the hand an upgrade would replace; an empty hand counts as 0.
/// `None` for classes that cannot wield weapons.
fn weakest_hand(player: &Character) -> Option<u32> {
    let bonus = |w: &Option<Weapon>| w.as_ref().map_or(0, |w| w.bonus_damage);
    match &player.class {
        Class::Bruiser { weapon } => Some(bonus(weapon)),
        Class::Duelist {
            main_hand,
            off_hand,
            ..
        } => Some(bonus(main_hand).min(bonus(off_hand))),
        _ => None,
    }
}

/// Slot and bonus of the strongest weapon in the backpack.
fn best_backpack_weapon(inventory: &Inventory) -> Option<(usize, u32)> {
    inventory
        .items()
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Item::Weapon(w) => Some((index, w.bonus_damage)),
            _ => None,
        })
        .max_by_key(|&(_, bonus)| bonus)
}

fn resource_exhausted(player: &Character) -> bool {
    match &player.class {
        Class::Caster { mana } => mana.current() < SPELL_MANA_COST,
        Class::Duelist { energy, .. } => energy.current() < DUAL_STRIKE_ENERGY_COST,
        _ => false,
    }
}

impl PlayerController for AutoPilot {
    fn choose_action(&mut self, view: &TurnView<'_>) -> PlayerAction {
        let health = view.player.health.fraction();

        if view.last_rejection.is_none() && health < self.potion_below {
            if let Some(index) = view.inventory.find_potion(PotionKind::Health) {
                self.rested_last = false;
                return PlayerAction::UseItem(index);
            }
        }

        if !self.rested_last && (health < self.rest_below || resource_exhausted(view.player)) {
            self.rested_last = true;
            return PlayerAction::Rest;
        }

        self.rested_last = false;
        PlayerAction::Attack
    }
}
