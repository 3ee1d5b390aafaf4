//! Shared board fixtures for the benchmark suites.

use std::rc::Rc;

use slide_kernel::board::Grid;
use slide_kernel::moves::{slide, Direction};
use slide_search::node::SearchNode;
use slide_search::puzzle::Puzzle;

/// A named start board, solved against the canonical goal of its size.
pub struct Regime {
    pub name: &'static str,
    pub start: Grid,
}

impl Regime {
    /// A fresh puzzle for one benchmark iteration.
    ///
    /// # Panics
    ///
    /// Panics if the regime board has an unsupported size.
    #[must_use]
    pub fn puzzle(&self) -> Puzzle {
        let goal = Grid::solved(self.start.size()).unwrap();
        Puzzle::new(self.start.clone(), goal).unwrap()
    }
}

/// The solve regimes, from trivial to the 3x3 worst case and a 4x4 scramble.
///
/// # Panics
///
/// Panics if a fixture board is malformed. Benchmark setup failures are fatal.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "3x3/14_moves",
            start: Grid::from_rows(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap(),
        },
        Regime {
            name: "3x3/31_moves",
            start: Grid::from_rows(&[[8, 6, 7], [2, 5, 4], [3, 0, 1]]).unwrap(),
        },
        Regime {
            name: "4x4/scramble_24",
            start: scrambled(4, 24, 7),
        },
    ]
}

/// A fixed pseudo-random walk of `steps` slides from the solved board, never
/// undoing the previous slide.
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

/// `n` scored nodes with scattered scores for frontier benchmarks.
///
/// # Panics
///
/// Panics only if the 3x3 solved board cannot be built.
#[must_use]
pub fn scored_nodes(n: u32) -> Vec<Rc<SearchNode>> {
    let grid = Grid::solved(3).unwrap();
    (0..n)
        .map(|i| Rc::new(SearchNode::root(grid.clone()).with_heuristic(i.wrapping_mul(7919) % 97)))
        .collect()
}
