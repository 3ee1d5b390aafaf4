//! `SolveReport`: a reproducible JSON summary of one solve.
//!
//! The report records the request (board fingerprints, policy) and the
//! outcome (termination, moves, counters). Wall-clock time is left out so two
//! runs of the same request produce byte-identical JSON and the same digest.

use serde::Serialize;
use slide_kernel::moves::Direction;
use slide_kernel::proof::hash::{
    canonical_hash, grid_fingerprint, ContentHash, DOMAIN_SOLVE_REPORT,
};

use crate::policy::SearchPolicy;
use crate::puzzle::Puzzle;
use crate::search::{NoSolutionReason, SolveOutcome};

/// How the solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Termination {
    Solved { move_count: u32 },
    NoSolution { reason: NoSolutionReason },
    IterationLimitExceeded,
    TimeLimitExceeded,
}

/// Serializable summary of a solve request and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub size: usize,
    pub start_fingerprint: String,
    pub goal_fingerprint: String,
    pub heuristic: &'static str,
    pub frontier: &'static str,
    pub dedup: &'static str,
    pub max_iterations: Option<u64>,
    pub termination: Termination,
    /// Slide names, empty unless solved.
    pub moves: Vec<&'static str>,
    pub iterations: u64,
    pub nodes_generated: u64,
    pub duplicates_skipped: u64,
    pub frontier_high_water: usize,
}

impl SolveReport {
    #[must_use]
    pub fn new(puzzle: &Puzzle, policy: &SearchPolicy, outcome: &SolveOutcome) -> Self {
        let termination = match outcome {
            SolveOutcome::Solved(solution) => Termination::Solved {
                move_count: solution.move_count(),
            },
            SolveOutcome::NoSolution { reason, .. } => Termination::NoSolution { reason: *reason },
            SolveOutcome::IterationLimitExceeded { .. } => Termination::IterationLimitExceeded,
            SolveOutcome::TimeLimitExceeded { .. } => Termination::TimeLimitExceeded,
        };
        let moves = outcome
            .solution()
            .map(|solution| solution.moves().into_iter().map(Direction::as_str).collect())
            .unwrap_or_default();
        let stats = outcome.stats();
        Self {
            size: puzzle.size(),
            start_fingerprint: grid_fingerprint(puzzle.start()).as_str().to_string(),
            goal_fingerprint: grid_fingerprint(puzzle.goal()).as_str().to_string(),
            heuristic: policy.heuristic.as_str(),
            frontier: policy.frontier.as_str(),
            dedup: policy.dedup.as_str(),
            max_iterations: policy.max_iterations,
            termination,
            moves,
            iterations: stats.iterations,
            nodes_generated: stats.nodes_generated,
            duplicates_skipped: stats.duplicates_skipped,
            frontier_high_water: stats.frontier_high_water,
        }
    }

    /// Serialize to compact JSON bytes. Field order is fixed.
    ///
    /// # Errors
    ///
    /// Returns a serialization error (not expected for this type).
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Content digest of [`SolveReport::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Same as [`SolveReport::to_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        Ok(canonical_hash(DOMAIN_SOLVE_REPORT, &self.to_json_bytes()?))
    }
}
