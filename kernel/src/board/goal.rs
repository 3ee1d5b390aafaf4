//! Goal lookup: label → goal position, built once per goal grid.

use crate::board::grid::{Grid, Position};

/// Maps every label to its position in the goal grid.
///
/// Indexed directly by label, so a lookup is one slice access. Immutable after
/// construction; heuristics borrow it for the lifetime of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalLookup {
    size: usize,
    positions: Box<[Position]>,
}

impl GoalLookup {
    #[must_use]
    pub fn new(goal: &Grid) -> Self {
        let size = goal.size();
        let mut positions = vec![Position::new(0, 0); size * size];
        for (index, &label) in goal.cells().iter().enumerate() {
            positions[usize::from(label)] = Position::new(index / size, index % size);
        }
        Self {
            size,
            positions: positions.into_boxed_slice(),
        }
    }

    /// Size of the goal grid this lookup was built from.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Goal position of `label`.
    ///
    /// # Panics
    ///
    /// Panics if `label` is not a label of a board this size. Labels taken
    /// from a [`Grid`] of the same size are always in range.
    #[must_use]
    pub fn position_of(&self, label: u16) -> Position {
        self.positions[usize::from(label)]
    }
}
