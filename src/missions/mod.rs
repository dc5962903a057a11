//! Kill-count missions and the stage mission table.

pub mod tracker;
pub mod types;

pub use tracker::*;
pub use types::*;
