//! `Grid`: an immutable N×N board with one blank cell.
//!
//! # Layout
//!
//! Cells are stored row-major in a single boxed slice. The index of the blank
//! is cached at construction and carried through every move, so locating the
//! blank is O(1).
//!
//! # Value semantics
//!
//! Every move produces an independent copy. No two grids ever share cell
//! storage, so a child state can never alias (or mutate) its parent.

use std::fmt;

use crate::error::BoardError;

/// The blank sentinel label.
pub const BLANK: u16 = 0;

/// Smallest supported board size. A 1×1 board has no legal moves.
pub const MIN_SIZE: usize = 2;

/// Largest supported board size. [`Grid::canonical_bytes`] stores the size
/// in one byte.
pub const MAX_SIZE: usize = 255;

/// A `(row, col)` cell coordinate, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two positions.
    #[must_use]
    pub const fn distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An immutable square board holding labels `1..S²` and one [`BLANK`].
///
/// Two grids are equal iff all cells match positionally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Box<[u16]>,
    blank: usize,
}

impl Grid {
    /// Build a grid from a slice of rows.
    ///
    /// Accepts anything row-shaped: `&[[u16; 3]]`, `&[Vec<u16>]`, ...
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the board is not square, its size is out of
    /// range, or its labels are not exactly `{BLANK} ∪ 1..S²`.
    pub fn from_rows<R: AsRef<[u16]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            cells.extend_from_slice(values);
        }
        Self::from_cells(size, cells)
    }

    /// Build a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid::from_rows`].
    pub fn from_cells(size: usize, cells: Vec<u16>) -> Result<Self, BoardError> {
        check_size(size)?;
        let total = size * size;
        if cells.len() != total {
            // Report the first row that comes up short (or long).
            let row = (cells.len() / size).min(size - 1);
            return Err(BoardError::NotSquare {
                row,
                len: cells.len() - row * size,
                size,
            });
        }

        // With S² cells, distinct and all below S², the labels form a
        // permutation of 0..S², so the blank is guaranteed to be present.
        let mut seen = vec![false; total];
        let mut blank = 0;
        for (index, &label) in cells.iter().enumerate() {
            let slot = usize::from(label);
            if slot >= total {
                return Err(BoardError::LabelOutOfRange {
                    label,
                    row: index / size,
                    col: index % size,
                });
            }
            if std::mem::replace(&mut seen[slot], true) {
                return Err(BoardError::DuplicateLabel { label });
            }
            if label == BLANK {
                blank = index;
            }
        }

        Ok(Self {
            size,
            cells: cells.into_boxed_slice(),
            blank,
        })
    }

    /// The canonical solved board: `1..S²` in reading order, blank last.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeOutOfRange`] for unsupported sizes.
    pub fn solved(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;
        let total = size * size;
        #[allow(clippy::cast_possible_truncation)]
        let mut cells: Vec<u16> = (1..total).map(|label| label as u16).collect();
        cells.push(BLANK);
        Ok(Self {
            size,
            cells: cells.into_boxed_slice(),
            blank: total - 1,
        })
    }

    /// Board width (and height).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of all cells.
    #[must_use]
    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        self.cells.chunks_exact(self.size)
    }

    /// Owned copy of the rows, e.g. for handing back to a display layer.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u16>> {
        self.rows().map(<[u16]>::to_vec).collect()
    }

    /// Label at `pos`, or `None` if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<u16> {
        self.contains(pos)
            .then(|| self.cells[pos.row * self.size + pos.col])
    }

    /// Whether `pos` lies within `[0, S) × [0, S)`.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Position of the blank.
    ///
    /// Never fails: a grid without a blank cannot be constructed.
    #[must_use]
    pub const fn find_blank(&self) -> Position {
        Position::new(self.blank / self.size, self.blank % self.size)
    }

    /// Swap the blank with the label at `target`.
    ///
    /// Returns `None` ("no move") when `target` is off the board. The result
    /// is a full independent copy; `self` is untouched.
    #[must_use]
    pub fn move_blank(&self, target: Position) -> Option<Self> {
        if !self.contains(target) {
            return None;
        }
        let target = target.row * self.size + target.col;
        let mut cells = self.cells.clone();
        cells.swap(self.blank, target);
        Some(Self {
            size: self.size,
            cells,
            blank: target,
        })
    }

    /// Serialize to canonical bytes: size byte, then cells little-endian.
    ///
    /// Used for content fingerprints; identical grids produce identical bytes.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.cells.len() * 2);
        #[allow(clippy::cast_possible_truncation)]
        bytes.push(self.size as u8);
        for cell in self.cells.iter() {
            bytes.extend_from_slice(&cell.to_le_bytes());
        }
        bytes
    }
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::SizeOutOfRange {
            size,
            min: MIN_SIZE,
            max: MAX_SIZE,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for row in self.rows() {
            for (col, &label) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if label == BLANK {
                    write!(f, "{:>width$}", "_")?;
                } else {
                    write!(f, "{label:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
