//! Typed board construction errors.

use thiserror::Error;

/// A grid that violates the label-set invariant.
///
/// A valid grid of size `S` holds every label in `1..S²` exactly once plus a
/// single blank. These errors are raised at construction; a constructed
/// [`crate::board::Grid`] can never be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The board size is outside the supported range.
    #[error("board size {size} is out of range (supported: {min}..={max})")]
    SizeOutOfRange { size: usize, min: usize, max: usize },
    /// A row does not have as many cells as there are rows.
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    /// A cell holds a label that cannot appear on a board of this size.
    #[error("label {label} at ({row}, {col}) is out of range for this board")]
    LabelOutOfRange { label: u16, row: usize, col: usize },
    /// A label (or the blank) appears more than once.
    #[error("label {label} appears more than once")]
    DuplicateLabel { label: u16 },
    /// Start and goal grids have different sizes.
    #[error("start is {start}x{start} but goal is {goal}x{goal}")]
    SizeMismatch { start: usize, goal: usize },
}
