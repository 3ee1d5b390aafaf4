//! Board module: `Grid`, `Position`, and the goal lookup.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod goal;
pub mod grid;

pub use goal::GoalLookup;
pub use grid::{Grid, Position, BLANK, MAX_SIZE, MIN_SIZE};
