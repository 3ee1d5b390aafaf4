//! Typed search errors.
//!
//! `SearchError` covers construction failures and internal-consistency
//! violations only. Expected search outcomes (no solution, bound reached) are
//! variants of [`crate::search::SolveOutcome`], never errors.

use slide_kernel::error::BoardError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A start or goal grid violates the label-set invariant.
    #[error("malformed state: {0}")]
    MalformedState(#[from] BoardError),
    /// `extract_min` was called on an empty frontier. Indicates a driver bug.
    #[error("extract_min called on an empty frontier")]
    EmptyFrontier,
    /// A node reached the frontier without a score. Indicates a driver bug.
    #[error("node inserted into the frontier before it was scored")]
    UnscoredNode,
    /// The policy cannot be used for this puzzle.
    #[error("unsupported search policy: {detail}")]
    UnsupportedPolicy { detail: String },
}
