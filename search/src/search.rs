//! Search entry point and the A* expansion loop.

use std::collections::HashSet;
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::Serialize;
use slide_kernel::board::Grid;
use slide_kernel::moves::Direction;
use tracing::{debug, info, trace, warn};

use crate::error::SearchError;
use crate::node::SearchNode;
use crate::policy::{DedupPolicy, SearchPolicy};
use crate::puzzle::Puzzle;

/// Counters collected over one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes expanded.
    pub iterations: u64,
    /// Children scored and pushed onto the frontier.
    pub nodes_generated: u64,
    /// Popped nodes and children dropped because their state was closed.
    pub duplicates_skipped: u64,
    pub frontier_high_water: usize,
    /// Wall-clock time spent, including the solvability check.
    pub elapsed: Duration,
}

/// A found path, held as its terminal node.
#[derive(Debug, Clone)]
pub struct Solution {
    terminal: Rc<SearchNode>,
    stats: SearchStats,
}

impl Solution {
    /// The node whose state matches the goal.
    #[must_use]
    pub fn terminal(&self) -> &SearchNode {
        &self.terminal
    }

    /// Board states from start to goal, inclusive.
    #[must_use]
    pub fn path(&self) -> Vec<Grid> {
        self.terminal.path()
    }

    /// The slides that turn the start into the goal.
    #[must_use]
    pub fn moves(&self) -> Vec<Direction> {
        self.terminal.moves()
    }

    /// Number of slides. Equal to the terminal node's depth.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.terminal.depth()
    }

    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.stats.iterations
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Why a solve ended without a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoSolutionReason {
    /// Start and goal have different parity. The loop never ran.
    Unsolvable,
    /// The frontier emptied before reaching the goal.
    FrontierExhausted,
}

impl NoSolutionReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unsolvable => "unsolvable",
            Self::FrontierExhausted => "frontier_exhausted",
        }
    }
}

/// Result of a well-formed solve request.
///
/// Every variant is an expected outcome; faults are reported through
/// [`SearchError`] instead.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Solved(Solution),
    /// No sequence of slides connects start and goal.
    NoSolution {
        reason: NoSolutionReason,
        stats: SearchStats,
    },
    /// The iteration bound was hit first. A solution may still exist.
    IterationLimitExceeded { stats: SearchStats },
    /// The wall-clock bound was hit first. A solution may still exist.
    TimeLimitExceeded { stats: SearchStats },
}

impl SolveOutcome {
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        match self {
            Self::Solved(solution) => solution.stats(),
            Self::NoSolution { stats, .. }
            | Self::IterationLimitExceeded { stats }
            | Self::TimeLimitExceeded { stats } => stats,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    /// Stable snake_case tag for logs and reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solved(_) => "solved",
            Self::NoSolution { .. } => "no_solution",
            Self::IterationLimitExceeded { .. } => "iteration_limit_exceeded",
            Self::TimeLimitExceeded { .. } => "time_limit_exceeded",
        }
    }
}

/// Run A* on `puzzle` under `policy`.
///
/// The solvability check runs once, before the loop; an unsolvable puzzle
/// returns [`NoSolutionReason::Unsolvable`] with zero iterations. On return
/// `puzzle.iterations()` holds the number of expansions performed.
///
/// # Errors
///
/// Returns [`SearchError::UnsupportedPolicy`] if the policy cannot be used on
/// this board size. [`SearchError::EmptyFrontier`] and
/// [`SearchError::UnscoredNode`] indicate a driver bug.
pub fn solve(puzzle: &mut Puzzle, policy: &SearchPolicy) -> Result<SolveOutcome, SearchError> {
    policy.validate_for(puzzle.size())?;
    let started = Instant::now();
    puzzle.set_iterations(0);

    debug!(
        size = puzzle.size(),
        heuristic = policy.heuristic.as_str(),
        frontier = policy.frontier.as_str(),
        dedup = policy.dedup.as_str(),
        max_iterations = ?policy.max_iterations,
        time_limit_ms = ?policy.time_limit_ms,
        "starting solve"
    );

    if !puzzle.is_solvable() {
        info!(
            size = puzzle.size(),
            "start and goal have different parity, puzzle is unsolvable"
        );
        let stats = SearchStats {
            elapsed: started.elapsed(),
            ..SearchStats::default()
        };
        return Ok(SolveOutcome::NoSolution {
            reason: NoSolutionReason::Unsolvable,
            stats,
        });
    }

    let outcome = best_first(puzzle, policy, started)?;
    let stats = outcome.stats();
    puzzle.set_iterations(stats.iterations);
    info!(
        outcome = outcome.as_str(),
        iterations = stats.iterations,
        nodes_generated = stats.nodes_generated,
        duplicates_skipped = stats.duplicates_skipped,
        frontier_high_water = stats.frontier_high_water,
        elapsed_ms = u64::try_from(stats.elapsed.as_millis()).unwrap_or(u64::MAX),
        "solve finished"
    );
    Ok(outcome)
}

/// The A* loop proper, without the solvability precondition.
pub(crate) fn best_first(
    puzzle: &Puzzle,
    policy: &SearchPolicy,
    started: Instant,
) -> Result<SolveOutcome, SearchError> {
    let heuristic = policy.heuristic.heuristic();
    let goal = puzzle.goal_lookup();
    let deadline = policy
        .time_limit()
        .and_then(|limit| started.checked_add(limit));
    let dedup = policy.dedup == DedupPolicy::ClosedSet;

    let mut frontier = policy.frontier.build();
    let mut closed: HashSet<Grid> = HashSet::new();
    let mut stats = SearchStats::default();

    let root = SearchNode::root(puzzle.start().clone());
    let h = heuristic.estimate(root.grid(), goal);
    frontier.insert(Rc::new(root.with_heuristic(h)))?;

    while !frontier.is_empty() {
        let current = frontier.extract_min()?;

        if dedup && closed.contains(current.grid()) {
            stats.duplicates_skipped += 1;
            continue;
        }

        trace!(
            iteration = stats.iterations,
            depth = current.depth(),
            score = ?current.score(),
            frontier_len = frontier.len(),
            "popped node"
        );

        // h = 0 only on the goal for both heuristics.
        if current.h_cost() == Some(0) {
            stats.frontier_high_water = frontier.high_water();
            stats.elapsed = started.elapsed();
            return Ok(SolveOutcome::Solved(Solution {
                terminal: current,
                stats,
            }));
        }

        if policy
            .max_iterations
            .is_some_and(|max| stats.iterations >= max)
        {
            stats.frontier_high_water = frontier.high_water();
            stats.elapsed = started.elapsed();
            warn!(
                iterations = stats.iterations,
                "iteration limit reached before the goal"
            );
            return Ok(SolveOutcome::IterationLimitExceeded { stats });
        }

        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            stats.frontier_high_water = frontier.high_water();
            stats.elapsed = started.elapsed();
            warn!(
                iterations = stats.iterations,
                time_limit_ms = ?policy.time_limit_ms,
                "time limit reached before the goal"
            );
            return Ok(SolveOutcome::TimeLimitExceeded { stats });
        }

        for child in current.expand() {
            if dedup && closed.contains(child.grid()) {
                stats.duplicates_skipped += 1;
                continue;
            }
            let h = heuristic.estimate(child.grid(), goal);
            frontier.insert(Rc::new(child.with_heuristic(h)))?;
            stats.nodes_generated += 1;
        }

        if dedup {
            closed.insert(current.grid().clone());
        }
        stats.iterations += 1;
    }

    stats.frontier_high_water = frontier.high_water();
    stats.elapsed = started.elapsed();
    info!(
        iterations = stats.iterations,
        "frontier exhausted without reaching the goal"
    );
    Ok(SolveOutcome::NoSolution {
        reason: NoSolutionReason::FrontierExhausted,
        stats,
    })
}
