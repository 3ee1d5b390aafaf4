//! Slide Search: A* over sliding-tile boards with a pluggable frontier.
//!
//! This crate provides the search layer. It depends only on `slide_kernel`.
//!
//! # Crate dependency graph
//!
//! ```text
//! slide_kernel  ←  slide_search  ←  lock-tests, slide-benchmarks
//! (grids, moves)   (nodes, frontier, driver)
//! ```
//!
//! # Key types
//!
//! - [`puzzle::Puzzle`] -- start/goal pair; `construct` then `solve`
//! - [`search::solve`] -- the A* driver, returning a [`search::SolveOutcome`]
//! - [`node::SearchNode`] -- immutable node with a shared link to its parent
//! - [`frontier::Frontier`] -- open list; heap by default, sorted list for cross-checks
//! - [`heuristic::Heuristic`] -- Manhattan (default) or Hamming
//! - [`policy::SearchPolicy`] -- heuristic, frontier, dedup and bounds; loadable from TOML
//! - [`report::SolveReport`] -- reproducible JSON summary with a content digest
//!
//! ```
//! use slide_search::puzzle::Puzzle;
//!
//! let mut puzzle = Puzzle::construct(
//!     &[[1, 2, 3], [4, 5, 6], [0, 7, 8]],
//!     &[[1, 2, 3], [4, 5, 6], [7, 8, 0]],
//! ).unwrap();
//! let outcome = puzzle.solve(Some(10_000)).unwrap();
//! assert_eq!(outcome.solution().unwrap().move_count(), 2);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod puzzle;
pub mod report;
pub mod search;
