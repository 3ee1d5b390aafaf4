//! A solve request: start grid, goal grid, and the goal lookup built from it.

use slide_kernel::board::{GoalLookup, Grid};
use slide_kernel::error::BoardError;
use slide_kernel::solvability::is_solvable;

use crate::error::SearchError;
use crate::policy::SearchPolicy;
use crate::search::{solve, SolveOutcome};

/// One puzzle instance.
///
/// The goal lookup is built once here and shared by every heuristic call.
/// `iterations` is written only by the search driver and reflects the most
/// recent solve.
#[derive(Debug, Clone)]
pub struct Puzzle {
    start: Grid,
    goal: Grid,
    goal_lookup: GoalLookup,
    iterations: u64,
}

impl Puzzle {
    /// Pair two validated grids.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MalformedState`] if the grids differ in size.
    pub fn new(start: Grid, goal: Grid) -> Result<Self, SearchError> {
        if start.size() != goal.size() {
            return Err(BoardError::SizeMismatch {
                start: start.size(),
                goal: goal.size(),
            }
            .into());
        }
        let goal_lookup = GoalLookup::new(&goal);
        Ok(Self {
            start,
            goal,
            goal_lookup,
            iterations: 0,
        })
    }

    /// Build a puzzle from row slices, validating both grids.
    ///
    /// ```
    /// use slide_search::puzzle::Puzzle;
    ///
    /// let puzzle = Puzzle::construct(
    ///     &[[1, 2, 3], [4, 5, 6], [7, 0, 8]],
    ///     &[[1, 2, 3], [4, 5, 6], [7, 8, 0]],
    /// ).unwrap();
    /// assert!(puzzle.is_solvable());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MalformedState`] if either grid violates the
    /// label-set invariant or the sizes differ.
    pub fn construct<S, G>(start: &[S], goal: &[G]) -> Result<Self, SearchError>
    where
        S: AsRef<[u16]>,
        G: AsRef<[u16]>,
    {
        Self::new(Grid::from_rows(start)?, Grid::from_rows(goal)?)
    }

    #[must_use]
    pub fn start(&self) -> &Grid {
        &self.start
    }

    #[must_use]
    pub fn goal(&self) -> &Grid {
        &self.goal
    }

    #[must_use]
    pub fn goal_lookup(&self) -> &GoalLookup {
        &self.goal_lookup
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.start.size()
    }

    /// Expansions performed by the most recent solve.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub(crate) fn set_iterations(&mut self, iterations: u64) {
        self.iterations = iterations;
    }

    /// Whether the goal is reachable from the start. No search.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        is_solvable(&self.start, &self.goal)
    }

    /// Solve with the default policy and an optional iteration bound.
    ///
    /// # Errors
    ///
    /// See [`solve`].
    pub fn solve(&mut self, max_iterations: Option<u64>) -> Result<SolveOutcome, SearchError> {
        let policy = SearchPolicy {
            max_iterations,
            ..SearchPolicy::default()
        };
        solve(self, &policy)
    }

    /// Solve under an explicit policy.
    ///
    /// # Errors
    ///
    /// See [`solve`].
    pub fn solve_with(&mut self, policy: &SearchPolicy) -> Result<SolveOutcome, SearchError> {
        solve(self, policy)
    }
}
