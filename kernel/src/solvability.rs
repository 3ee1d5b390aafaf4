//! Solvability oracle: reachability by inversion parity, without search.
//!
//! An inversion is a pair of non-blank labels read out of ascending order in
//! row-major order. A horizontal slide never changes the inversion count. A
//! vertical slide carries one tile past `S - 1` others, which flips the
//! inversion parity exactly when `S` is even, and in that case the blank
//! row changes by one as well. So the invariant is:
//!
//! - odd `S`: `inversions mod 2`
//! - even `S`: `(inversions + blank_row) mod 2`
//!
//! Two grids of the same size are mutually reachable iff these agree.

use crate::board::{Grid, BLANK};

/// Reachability class of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    const fn of(count: usize) -> Self {
        if count % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

/// Number of inversions among the non-blank labels. O(n²) in the tile count.
#[must_use]
pub fn inversion_count(grid: &Grid) -> usize {
    let tiles: Vec<u16> = grid.cells().iter().copied().filter(|&l| l != BLANK).collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| b < a).count())
        .sum()
}

/// The move-invariant parity of `grid` (see module docs).
#[must_use]
pub fn parity(grid: &Grid) -> Parity {
    let inversions = inversion_count(grid);
    if grid.size() % 2 == 1 {
        Parity::of(inversions)
    } else {
        Parity::of(inversions + grid.find_blank().row)
    }
}

/// Whether `goal` is reachable from `start` by legal slides.
///
/// Grids of different sizes are never mutually reachable.
#[must_use]
pub fn is_solvable(start: &Grid, goal: &Grid) -> bool {
    start.size() == goal.size() && parity(start) == parity(goal)
}
