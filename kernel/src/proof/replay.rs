//! `replay_verify()`: check that a state sequence is a legal solution path.
//!
//! Independent of the search: it only uses [`direction_between`], so a path
//! produced by any solver can be checked against the move rules.

use thiserror::Error;

use crate::board::Grid;
use crate::moves::{direction_between, Direction};

/// Why a state sequence is not a legal path from start to goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// No states were given.
    #[error("path is empty")]
    EmptyPath,
    /// The first state is not the start grid.
    #[error("path does not begin at the start grid")]
    StartMismatch,
    /// The last state is not the goal grid.
    #[error("path does not end at the goal grid")]
    GoalMismatch,
    /// `states[index]` is not one slide away from `states[index - 1]`.
    #[error("state {index} is not one legal slide from its predecessor")]
    IllegalStep { index: usize },
}

/// Verify `states` by replay and return the slide sequence it encodes.
///
/// # Errors
///
/// Returns [`ReplayError`] for the first violation found, checking the
/// endpoints before the individual steps.
pub fn replay_verify(
    start: &Grid,
    goal: &Grid,
    states: &[Grid],
) -> Result<Vec<Direction>, ReplayError> {
    let (first, last) = match states {
        [] => return Err(ReplayError::EmptyPath),
        [only] => (only, only),
        [first, .., last] => (first, last),
    };
    if first != start {
        return Err(ReplayError::StartMismatch);
    }
    if last != goal {
        return Err(ReplayError::GoalMismatch);
    }

    states
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            direction_between(&pair[0], &pair[1]).ok_or(ReplayError::IllegalStep { index: i + 1 })
        })
        .collect()
}
