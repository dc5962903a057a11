//! The turn-by-turn encounter state machine.
//!
//! A [`CombatLoop`] borrows everything an encounter touches (both combatants,
//! the player's inventory and the mission tracker) and runs phases until it
//! reaches Victory or Defeat. Player decisions come from a
//! [`PlayerController`], so the loop never does any I/O itself.

use rand::Rng;

use super::logic::{attack, opponent_turn, OpponentAction};
use super::types::{
    CombatEvent, CombatPhase, EncounterOutcome, EncounterReport, PlayerAction, Rejection,
    VictoryRewards,
};
use crate::character::Character;
use crate::items::{roll_loot, Inventory, InventoryError};
use crate::missions::MissionTracker;

/// Read-only state handed to the controller on each prompt.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub player: &'a Character,
    pub opponent: &'a Character,
    pub inventory: &'a Inventory,
    /// Player turns completed so far.
    pub round: u32,
    /// Set when the previous choice this turn was rejected.
    pub last_rejection: Option<&'a Rejection>,
}

/// Source of player decisions.
pub trait PlayerController {
    fn choose_action(&mut self, view: &TurnView<'_>) -> PlayerAction;
}

impl<F> PlayerController for F
where
    F: FnMut(&TurnView<'_>) -> PlayerAction,
{
    fn choose_action(&mut self, view: &TurnView<'_>) -> PlayerAction {
        self(view)
    }
}

/// Plays back a fixed list of actions, then attacks forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedController {
    actions: Vec<PlayerAction>,
    cursor: usize,
}

impl ScriptedController {
    pub fn new(actions: impl Into<Vec<PlayerAction>>) -> Self {
        Self {
            actions: actions.into(),
            cursor: 0,
        }
    }
}

impl PlayerController for ScriptedController {
    fn choose_action(&mut self, _view: &TurnView<'_>) -> PlayerAction {
        let action = self
            .actions
            .get(self.cursor)
            .copied()
            .unwrap_or(PlayerAction::Attack);
        self.cursor += 1;
        action
    }
}

/// Rejected choices allowed in a row before the turn falls back to an attack.
/// Keeps a misbehaving controller from stalling the loop.
pub const MAX_REJECTIONS_PER_TURN: u32 = 16;

pub struct CombatLoop<'a> {
    player: &'a mut Character,
    opponent: &'a mut Character,
    inventory: &'a mut Inventory,
    missions: &'a mut MissionTracker,
}

impl<'a> CombatLoop<'a> {
    pub fn new(
        player: &'a mut Character,
        opponent: &'a mut Character,
        inventory: &'a mut Inventory,
        missions: &'a mut MissionTracker,
    ) -> Self {
        Self {
            player,
            opponent,
            inventory,
            missions,
        }
    }

    /// Runs the encounter to completion.
    ///
    /// A dead player is an immediate Defeat; a dead opponent is an immediate
    /// Victory with no rewards.
    pub fn run(mut self, controller: &mut impl PlayerController, rng: &mut impl Rng) -> EncounterReport {
        let mut events = Vec::new();
        let mut rounds = 0u32;
        let mut rejection: Option<Rejection> = None;
        let mut rejections_this_turn = 0u32;

        tracing::info!(
            player = %self.player.name,
            opponent = %self.opponent.name,
            opponent_level = self.opponent.level,
            "encounter started"
        );

        if !self.player.is_alive() {
            return self.finish(EncounterOutcome::Defeat, 0, events, None);
        }
        if !self.opponent.is_alive() {
            return self.finish(EncounterOutcome::Victory, 0, events, None);
        }

        let mut phase = CombatPhase::PlayerTurn;
        while !phase.is_terminal() {
            phase = match phase {
                CombatPhase::PlayerTurn => {
                    let view = TurnView {
                        player: &*self.player,
                        opponent: &*self.opponent,
                        inventory: &*self.inventory,
                        round: rounds,
                        last_rejection: rejection.as_ref(),
                    };
                    let action = if rejections_this_turn >= MAX_REJECTIONS_PER_TURN {
                        tracing::warn!(rejections_this_turn, "controller keeps choosing invalid actions; attacking");
                        PlayerAction::Attack
                    } else {
                        controller.choose_action(&view)
                    };
                    CombatPhase::ResolvePlayerAction(action)
                }
                CombatPhase::ResolvePlayerAction(action) => match self.resolve_player_action(action, rng) {
                    Ok(event) => {
                        events.push(event);
                        rejection = None;
                        rejections_this_turn = 0;
                        rounds += 1;
                        CombatPhase::CheckOpponentDefeated
                    }
                    Err(reason) => {
                        tracing::debug!(?action, ?reason, "action rejected");
                        events.push(CombatEvent::ActionRejected {
                            action,
                            reason: reason.clone(),
                        });
                        rejection = Some(reason);
                        rejections_this_turn += 1;
                        CombatPhase::PlayerTurn
                    }
                },
                CombatPhase::CheckOpponentDefeated => {
                    if self.opponent.is_alive() {
                        CombatPhase::OpponentTurn
                    } else {
                        CombatPhase::Victory
                    }
                }
                CombatPhase::OpponentTurn => {
                    let event = match opponent_turn(self.opponent, self.player, rng) {
                        OpponentAction::Attacked(outcome) => CombatEvent::OpponentAttacked(outcome),
                        OpponentAction::Healed(outcome) => CombatEvent::OpponentHealed(outcome),
                    };
                    events.push(event);
                    CombatPhase::CheckPlayerDefeated
                }
                CombatPhase::CheckPlayerDefeated => {
                    if self.player.is_alive() {
                        CombatPhase::PlayerTurn
                    } else {
                        CombatPhase::Defeat
                    }
                }
                CombatPhase::Victory => CombatPhase::Victory,
                CombatPhase::Defeat => CombatPhase::Defeat,
            };
        }

        let (outcome, rewards) = if phase == CombatPhase::Victory {
            events.push(CombatEvent::OpponentDefeated {
                name: self.opponent.name.clone(),
            });
            (EncounterOutcome::Victory, Some(self.grant_rewards(rng)))
        } else {
            events.push(CombatEvent::PlayerDefeated);
            (EncounterOutcome::Defeat, None)
        };

        self.finish(outcome, rounds, events, rewards)
    }

    /// Applies a turn-consuming action, or explains why it cannot be taken.
    fn resolve_player_action(&mut self, action: PlayerAction, rng: &mut impl Rng) -> Result<CombatEvent, Rejection> {
        match action {
            PlayerAction::Attack => Ok(CombatEvent::PlayerAttacked(attack(self.player, self.opponent, rng))),
            PlayerAction::Rest => Ok(CombatEvent::PlayerRested(self.player.rest())),
            PlayerAction::UseItem(index) => match self.inventory.use_item(index, self.player) {
                Ok(used) if used.succeeded() => Ok(CombatEvent::PlayerUsedItem(used)),
                Ok(failed) => Err(Rejection::ItemFailed(failed)),
                Err(InventoryError::NoSuchSlot { index, len }) => Err(Rejection::NoSuchSlot { index, len }),
            },
        }
    }

    /// Experience, then mission credit, then loot.
    fn grant_rewards(&mut self, rng: &mut impl Rng) -> VictoryRewards {
        let xp_gained = self.opponent.xp_reward();
        let level_ups = self.player.gain_experience(xp_gained);
        let mission = self.missions.notify_defeat(self.opponent);
        let loot = roll_loot(self.opponent, self.player, rng);
        if let Some(item) = &loot {
            self.inventory.add(item.clone());
        }
        VictoryRewards {
            xp_gained,
            level_ups,
            mission,
            loot,
        }
    }

    fn finish(
        self,
        outcome: EncounterOutcome,
        rounds: u32,
        events: Vec<CombatEvent>,
        rewards: Option<VictoryRewards>,
    ) -> EncounterReport {
        tracing::info!(
            player = %self.player.name,
            opponent = %self.opponent.name,
            ?outcome,
            rounds,
            player_health = self.player.health.current(),
            "encounter finished"
        );
        EncounterReport {
            opponent: self.opponent.name.clone(),
            outcome,
            rounds,
            events,
            rewards,
        }
    }
}
