//! Legends - Turn-Based Combat & Progression Engine
//!
//! Characters, items, rooms, missions and the encounter state machine, plus a
//! session context and a Monte Carlo balance simulator. The library does no
//! text rendering; every operation returns a structured outcome.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod items;
pub mod missions;
pub mod simulator;

pub use character::{Archetype, Character, Class, ClassKind, StatPool};
pub use combat::{CombatLoop, EncounterOutcome, EncounterReport, PlayerAction, PlayerController};
pub use crate::core::{ScriptedRng, Session, SessionState};
pub use dungeon::{choose_room, Room};
pub use items::{Inventory, Item, Potion, Weapon};
pub use missions::{Mission, MissionTracker};
