//! The four orthogonal blank slides.

use std::fmt;

use crate::board::Position;

/// Direction the blank moves in.
///
/// `Up` moves the blank one row towards the top, i.e. the tile above the
/// blank slides down into the hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in expansion order. Successor ordering depends on this.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The direction that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The neighbor of `from` in this direction, or `None` if it would leave
    /// the top or left edge. Bottom/right bounds are checked by the grid.
    #[must_use]
    pub fn step(self, from: Position) -> Option<Position> {
        match self {
            Self::Up => from.row.checked_sub(1).map(|row| Position::new(row, from.col)),
            Self::Down => Some(Position::new(from.row + 1, from.col)),
            Self::Left => from.col.checked_sub(1).map(|col| Position::new(from.row, col)),
            Self::Right => Some(Position::new(from.row, from.col + 1)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
