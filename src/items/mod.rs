//! Item system: potions, weapons, loot, and the inventory.

pub mod drops;
pub mod equipment;
pub mod inventory;
pub mod types;

pub use drops::*;
pub use equipment::*;
pub use inventory::*;
pub use types::*;
