//! Moves module: blank-slide directions and successor generation.
//!
//! Depends on `board`. Does not import from `proof`.

pub mod direction;
pub mod successors;

pub use direction::Direction;
pub use successors::{direction_between, slide, successors};
