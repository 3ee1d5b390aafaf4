//! Heuristic evaluators (h-cost) and the node scoring function.
//!
//! Both heuristics are admissible for single-cell blank slides, so A* with
//! either returns optimal move counts. Manhattan dominates Hamming and is the
//! default; the choice only affects how many nodes get expanded.

use serde::{Deserialize, Serialize};
use slide_kernel::board::{GoalLookup, Grid, Position, BLANK};

use crate::node::SearchNode;

/// Admissible estimate of the moves remaining to reach the goal.
pub trait Heuristic: Send + Sync {
    /// Stable identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Estimate for `grid` against `goal`. Must be 0 iff `grid` is the goal.
    fn estimate(&self, grid: &Grid, goal: &GoalLookup) -> u32;
}

/// Sum over tiles of `|row - goal_row| + |col - goal_col|`.
///
/// Consistent: every slide moves one tile by one cell, changing the sum by
/// exactly ±1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

/// Number of tiles not on their goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming;

impl Heuristic for Manhattan {
    fn name(&self) -> &'static str {
        "manhattan"
    }

    fn estimate(&self, grid: &Grid, goal: &GoalLookup) -> u32 {
        manhattan(grid, goal)
    }
}

impl Heuristic for Hamming {
    fn name(&self) -> &'static str {
        "hamming"
    }

    fn estimate(&self, grid: &Grid, goal: &GoalLookup) -> u32 {
        hamming(grid, goal)
    }
}

/// Non-blank tiles with their current position.
fn tiles(grid: &Grid) -> impl Iterator<Item = (u16, Position)> + '_ {
    let size = grid.size();
    grid.cells()
        .iter()
        .enumerate()
        .filter(|&(_, &label)| label != BLANK)
        .map(move |(index, &label)| (label, Position::new(index / size, index % size)))
}

/// Manhattan distance of `grid` to the goal.
#[must_use]
pub fn manhattan(grid: &Grid, goal: &GoalLookup) -> u32 {
    let total: usize = tiles(grid)
        .map(|(label, pos)| pos.distance(goal.position_of(label)))
        .sum();
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// Misplaced-tile count of `grid` against the goal.
#[must_use]
pub fn hamming(grid: &Grid, goal: &GoalLookup) -> u32 {
    let total = tiles(grid)
        .filter(|&(label, pos)| goal.position_of(label) != pos)
        .count();
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// `f = depth + h` for `node`.
#[must_use]
pub fn eval_score(node: &SearchNode, goal: &GoalLookup, heuristic: &dyn Heuristic) -> u32 {
    node.depth()
        .saturating_add(heuristic.estimate(node.grid(), goal))
}

/// Heuristic selection, as it appears in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    Hamming,
}

impl HeuristicKind {
    #[must_use]
    pub fn heuristic(self) -> &'static dyn Heuristic {
        match self {
            Self::Manhattan => &Manhattan,
            Self::Hamming => &Hamming,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Hamming => "hamming",
        }
    }
}
