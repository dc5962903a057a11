//! Rooms: difficulty tiers, environmental effects, and enemy spawning.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
