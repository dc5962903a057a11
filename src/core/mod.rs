//! Balance constants, deterministic randomness and the session context.

pub mod constants;
pub mod rng;
pub mod session;

pub use rng::ScriptedRng;
pub use session::*;
