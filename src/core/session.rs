//! A single playthrough: three mission stages, then the final boss.
//!
//! `Session` is the explicit context object that owns the player, the
//! backpack, the mission tracker and the current room. Callers drive it with
//! `explore` / `confront_boss` and get a structured report back from each.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::character::{Archetype, Character, LevelUp, RestOutcome};
use crate::combat::{CombatLoop, EncounterReport, PlayerController};
use crate::core::constants::*;
use crate::dungeon::{choose_room, EffectOutcome, Room};
use crate::items::{Inventory, InventoryError, InventoryUse, Item};
use crate::missions::{stage_mission, MissionReward, MissionTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Working through the stage missions.
    Exploring,
    /// All stages cleared; only the final boss remains.
    BossAwaits,
    Victorious,
    Fallen,
}

impl SessionState {
    pub fn is_over(&self) -> bool {
        matches!(self, SessionState::Victorious | SessionState::Fallen)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot explore while the session is {0:?}")]
    NotExploring(SessionState),
    #[error("the final boss is not available while the session is {0:?}")]
    BossNotReady(SessionState),
    #[error("the session is over ({0:?})")]
    Over(SessionState),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// A cleared stage: the mission payout and where the session goes next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageCleared {
    pub stage: u32,
    pub reward: MissionReward,
    pub level_ups: Vec<LevelUp>,
    /// The stage now loaded, or `None` when the final boss is unlocked.
    pub next_stage: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExploreReport {
    pub stage: u32,
    pub effect: EffectOutcome,
    /// `None` when the room effect alone finished the player.
    pub encounter: Option<EncounterReport>,
    pub stage_cleared: Option<StageCleared>,
    pub state: SessionState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossReport {
    pub encounter: EncounterReport,
    pub state: SessionState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    player: Character,
    inventory: Inventory,
    missions: MissionTracker,
    room: Room,
    stage: u32,
    state: SessionState,
    encounters: u32,
}

impl Session {
    /// Starts at stage 1 with its mission and room loaded.
    pub fn new(player: Character, rng: &mut impl Rng) -> Self {
        let room = choose_room(1, player.level, rng);
        let mut session = Self {
            player,
            inventory: Inventory::new(),
            missions: MissionTracker::new(),
            room,
            stage: 1,
            state: SessionState::Exploring,
            encounters: 0,
        };
        session.assign_stage_mission();
        session
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn missions(&self) -> &MissionTracker {
        &self.missions
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Encounters fought so far, boss included.
    pub fn encounters(&self) -> u32 {
        self.encounters
    }

    fn load_stage(&mut self, stage: u32, rng: &mut impl Rng) {
        self.stage = stage;
        self.room = choose_room(stage, self.player.level, rng);
        self.assign_stage_mission();
    }

    fn assign_stage_mission(&mut self) {
        if let Some(mission) = stage_mission(self.stage) {
            self.missions.assign(mission);
        }
        tracing::info!(
            stage = self.stage,
            difficulty = self.room.difficulty.name(),
            effect = ?self.room.effect,
            suggested_level = self.room.suggested_level,
            "stage loaded"
        );
    }

    /// Walks into the current room: its effect hits the player, then (if the
    /// player is still standing) an enemy from the room is fought.
    pub fn explore(
        &mut self,
        controller: &mut impl PlayerController,
        rng: &mut impl Rng,
    ) -> Result<ExploreReport, SessionError> {
        if self.state != SessionState::Exploring {
            return Err(SessionError::NotExploring(self.state));
        }

        let stage = self.stage;
        let effect = self.room.apply_effect(&mut self.player);
        if !self.player.is_alive() {
            self.state = SessionState::Fallen;
            tracing::info!(stage, ?effect, "player fell to the room");
            return Ok(ExploreReport {
                stage,
                effect,
                encounter: None,
                stage_cleared: None,
                state: self.state,
            });
        }

        let mut enemy = self.room.generate_enemy(rng);
        let encounter = self.fight(&mut enemy, controller, rng);
        if !self.player.is_alive() {
            self.state = SessionState::Fallen;
        }

        let stage_cleared = if self.state == SessionState::Exploring {
            self.try_clear_stage(rng)
        } else {
            None
        };

        Ok(ExploreReport {
            stage,
            effect,
            encounter: Some(encounter),
            stage_cleared,
            state: self.state,
        })
    }

    /// Fights the final boss. Only available once every stage is cleared.
    pub fn confront_boss(
        &mut self,
        controller: &mut impl PlayerController,
        rng: &mut impl Rng,
    ) -> Result<BossReport, SessionError> {
        if self.state != SessionState::BossAwaits {
            return Err(SessionError::BossNotReady(self.state));
        }

        let mut boss = Character::boss(FINAL_BOSS_NAME, FINAL_BOSS_LEVEL, Archetype::Warlord);
        let encounter = self.fight(&mut boss, controller, rng);
        self.state = if encounter.is_victory() {
            SessionState::Victorious
        } else {
            SessionState::Fallen
        };
        tracing::info!(state = ?self.state, "final boss resolved");

        Ok(BossReport {
            encounter,
            state: self.state,
        })
    }

    /// Uses a backpack item outside combat.
    pub fn use_item(&mut self, index: usize) -> Result<InventoryUse, SessionError> {
        if self.state.is_over() {
            return Err(SessionError::Over(self.state));
        }
        Ok(self.inventory.use_item(index, &mut self.player)?)
    }

    /// Puts an item found outside combat into the backpack.
    pub fn pick_up(&mut self, item: Item) {
        self.inventory.add(item);
    }

    /// Rests outside combat.
    pub fn rest(&mut self) -> Result<RestOutcome, SessionError> {
        if self.state.is_over() {
            return Err(SessionError::Over(self.state));
        }
        Ok(self.player.rest())
    }

    fn fight(
        &mut self,
        opponent: &mut Character,
        controller: &mut impl PlayerController,
        rng: &mut impl Rng,
    ) -> EncounterReport {
        self.encounters += 1;
        CombatLoop::new(&mut self.player, opponent, &mut self.inventory, &mut self.missions)
            .run(controller, rng)
    }

    /// Pays out a completed mission and moves to the next stage, or unlocks
    /// the final boss after the last one.
    fn try_clear_stage(&mut self, rng: &mut impl Rng) -> Option<StageCleared> {
        let reward = self.missions.claim_reward()?;
        let cleared = self.stage;
        let level_ups = self.player.gain_experience(reward.xp);
        self.inventory.add(reward.item.clone());
        tracing::info!(stage = cleared, title = %reward.title, "stage cleared");

        let next_stage = if cleared < STAGE_COUNT {
            self.load_stage(cleared + 1, rng);
            Some(self.stage)
        } else {
            self.state = SessionState::BossAwaits;
            tracing::info!(boss = FINAL_BOSS_NAME, "final boss unlocked");
            None
        };

        Some(StageCleared {
            stage: cleared,
            reward,
            level_ups,
            next_stage,
        })
    }
}
