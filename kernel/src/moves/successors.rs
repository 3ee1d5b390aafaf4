//! Successor generation: the legal blank slides from a grid.
//!
//! Candidates are tried in [`Direction::ALL`] order (up, down, left, right)
//! and out-of-bounds targets are dropped, so the result is reproducible and
//! always holds 2 (corner), 3 (edge) or 4 (interior) entries.

use crate::board::Grid;
use crate::moves::direction::Direction;

/// Slide the blank one cell in `dir`.
///
/// Returns `None` when the blank sits on the edge it would cross.
#[must_use]
pub fn slide(grid: &Grid, dir: Direction) -> Option<Grid> {
    let target = dir.step(grid.find_blank())?;
    grid.move_blank(target)
}

/// All legal successors of `grid`, tagged with the slide that produced them.
#[must_use]
pub fn successors(grid: &Grid) -> Vec<(Direction, Grid)> {
    let mut out = Vec::with_capacity(Direction::ALL.len());
    for dir in Direction::ALL {
        if let Some(child) = slide(grid, dir) {
            out.push((dir, child));
        }
    }
    out
}

/// The single slide that turns `from` into `to`, if there is one.
#[must_use]
pub fn direction_between(from: &Grid, to: &Grid) -> Option<Direction> {
    if from.size() != to.size() {
        return None;
    }
    let blank = from.find_blank();
    let moved = to.find_blank();
    let dir = Direction::ALL
        .into_iter()
        .find(|dir| dir.step(blank) == Some(moved))?;
    // Blank positions line up; the rest of the board must be the same slide.
    (slide(from, dir).as_ref() == Some(to)).then_some(dir)
}
