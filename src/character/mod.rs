//! Combat participants: resource pools, the class model, and progression.

pub mod progression;
pub mod stats;
pub mod types;

pub use progression::*;
pub use stats::*;
pub use types::*;
