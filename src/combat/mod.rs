//! Attack resolution and the encounter state machine.

pub mod encounter;
pub mod logic;
pub mod types;

pub use encounter::*;
pub use logic::*;
pub use types::*;
