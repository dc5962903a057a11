use serde::{Deserialize, Serialize};

use crate::character::{LevelUp, RestOutcome};
use crate::items::{InventoryUse, Item};
use crate::missions::MissionProgress;

/// The flavor of a landed blow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    /// Caster spell, paid with mana.
    Spell,
    /// Caster fallback when mana runs dry.
    StaffBlow,
    /// Duelist strike with both hands, paid with energy.
    DualStrike,
    /// Bruiser weapon swing.
    WeaponSwing,
    /// Standard opponent attack with damage variance.
    Strike,
    /// Boss critical.
    EmpoweredStrike,
}

/// Result of one attack attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    Hit { kind: AttackKind, damage: u32 },
    Missed,
    /// Not enough energy; the turn is spent with no damage.
    Exhausted,
    AttackerDown,
    TargetDown,
}

impl AttackOutcome {
    pub fn damage(&self) -> u32 {
        match self {
            AttackOutcome::Hit { damage, .. } => *damage,
            _ => 0,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit { .. })
    }

    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            AttackOutcome::Hit {
                kind: AttackKind::EmpoweredStrike,
                ..
            }
        )
    }
}

/// One decision on the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Attack,
    /// Use the inventory item at this index.
    UseItem(usize),
    Rest,
}

/// What the opponent does on its turn. Never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentMove {
    Attack,
    Heal,
}

/// Why a chosen action did not consume the turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rejection {
    NoSuchSlot { index: usize, len: usize },
    ItemFailed(InventoryUse),
}

/// Phases of the encounter state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatPhase {
    PlayerTurn,
    ResolvePlayerAction(PlayerAction),
    CheckOpponentDefeated,
    OpponentTurn,
    CheckPlayerDefeated,
    Victory,
    Defeat,
}

impl CombatPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CombatPhase::Victory | CombatPhase::Defeat)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    PlayerAttacked(AttackOutcome),
    PlayerRested(RestOutcome),
    PlayerUsedItem(InventoryUse),
    ActionRejected {
        action: PlayerAction,
        reason: Rejection,
    },
    OpponentAttacked(AttackOutcome),
    OpponentHealed(RestOutcome),
    OpponentDefeated {
        name: String,
    },
    PlayerDefeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterOutcome {
    Victory,
    Defeat,
}

/// Everything the player earned from a win.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VictoryRewards {
    pub xp_gained: u64,
    pub level_ups: Vec<LevelUp>,
    pub mission: MissionProgress,
    pub loot: Option<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterReport {
    pub opponent: String,
    pub outcome: EncounterOutcome,
    /// Completed player turns.
    pub rounds: u32,
    pub events: Vec<CombatEvent>,
    /// Present only on victory.
    pub rewards: Option<VictoryRewards>,
}

impl EncounterReport {
    pub fn is_victory(&self) -> bool {
        self.outcome == EncounterOutcome::Victory
    }

    /// Total damage the player dealt over the encounter.
    pub fn damage_dealt(&self) -> u32 {
        self.events
            .iter()
            .map(|e| match e {
                CombatEvent::PlayerAttacked(outcome) => outcome.damage(),
                _ => 0,
            })
            .sum()
    }

    /// Total damage the player took from attacks.
    pub fn damage_taken(&self) -> u32 {
        self.events
            .iter()
            .map(|e| match e {
                CombatEvent::OpponentAttacked(outcome) => outcome.damage(),
                _ => 0,
            })
            .sum()
    }
}
