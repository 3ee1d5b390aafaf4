//! Slide Kernel: the value-typed board model for N×N sliding-tile puzzles.
//!
//! # API Surface
//!
//! - [`board::Grid`] -- immutable labeled grid with exactly one blank cell
//! - [`board::GoalLookup`] -- label → goal position index built once per goal
//! - [`moves::successors`] -- the legal blank slides from a grid, in fixed order
//! - [`solvability::is_solvable`] -- reachability check by parity, no search
//! - [`proof::replay::replay_verify`] -- verify a state sequence is a legal path
//!
//! # Module Dependency Direction
//!
//! `board` ← `moves` ← `solvability`, `proof`
//!
//! One-way only. No cycles. `board` depends on nothing internal besides `error`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod error;
pub mod moves;
pub mod proof;
pub mod solvability;
