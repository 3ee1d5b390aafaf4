//! Fixture boards and board-walking helpers.
//!
//! Every fixture is a literal or a deterministic walk from the solved board,
//! so tests and the cross-process binary see the same puzzles.

use slide_kernel::board::Grid;
use slide_kernel::moves::{slide, Direction};
use slide_search::puzzle::Puzzle;

/// Canonical 3x3 goal.
pub const GOAL_3X3: [[u16; 3]; 3] = [[1, 2, 3], [4, 5, 6], [7, 8, 0]];

/// One slide (blank right) from [`GOAL_3X3`].
pub const ONE_MOVE_3X3: [[u16; 3]; 3] = [[1, 2, 3], [4, 5, 6], [7, 0, 8]];

/// Tiles 7 and 8 transposed: opposite parity to [`GOAL_3X3`].
pub const TRANSPOSED_3X3: [[u16; 3]; 3] = [[1, 2, 3], [4, 5, 6], [8, 7, 0]];

/// A solvable shuffle, 14 slides from [`GOAL_3X3`].
pub const SHUFFLED_3X3: [[u16; 3]; 3] = [[8, 1, 3], [4, 0, 2], [7, 6, 5]];

/// A solvable shuffle, 31 slides from [`GOAL_3X3`] (the 3x3 maximum).
pub const HARDEST_3X3: [[u16; 3]; 3] = [[8, 6, 7], [2, 5, 4], [3, 0, 1]];

/// Apply `dirs` to `start`, skipping slides that would leave the board.
///
/// Returns the final grid and the number of slides actually taken.
#[must_use]
pub fn walk(start: &Grid, dirs: &[Direction]) -> (Grid, usize) {
    let mut grid = start.clone();
    let mut taken = 0;
    for &dir in dirs {
        if let Some(next) = slide(&grid, dir) {
            grid = next;
            taken += 1;
        }
    }
    (grid, taken)
}

/// A fixed pseudo-random walk of `steps` slides from the solved board.
///
/// Never immediately undoes the previous slide, so short walks stay short.
///
/// # Panics
///
/// Panics if `size` is not a supported board size.
#[must_use]
pub fn scrambled(size: usize, steps: usize, seed: u64) -> Grid {
    let mut grid = Grid::solved(size).unwrap();
    let mut state = seed | 1;
    let mut last: Option<Direction> = None;
    let mut taken = 0;
    while taken < steps {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let dir = Direction::ALL[usize::try_from(state % 4).unwrap()];
        if last == Some(dir.opposite()) {
            continue;
        }
        if let Some(next) = slide(&grid, dir) {
            grid = next;
            last = Some(dir);
            taken += 1;
        }
    }
    grid
}

/// A puzzle from `start` to the canonical goal of the same size.
///
/// # Panics
///
/// Panics if `start` is not a supported board size.
#[must_use]
pub fn to_solved(start: Grid) -> Puzzle {
    let goal = Grid::solved(start.size()).unwrap();
    Puzzle::new(start, goal).unwrap()
}

/// A 3x3 puzzle against [`GOAL_3X3`].
///
/// # Panics
///
/// Panics if `start` is malformed.
#[must_use]
pub fn puzzle_3x3(start: &[[u16; 3]; 3]) -> Puzzle {
    Puzzle::construct(start, &GOAL_3X3).unwrap()
}
