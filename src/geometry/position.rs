//! Integer board coordinates in matrix index order

use std::fmt;

/// A lattice coordinate: row first (increasing downward), then column
/// (increasing rightward), like mathematical matrix index notation.
///
/// Used both for absolute board cells and for piece-relative offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index
    pub row: i32,
    /// Column index
    pub col: i32,
}

impl Position {
    /// Create a position from row and column indices
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate this position by another, componentwise
    pub const fn translate(self, offset: Self) -> Self {
        Self::new(self.row + offset.row, self.col + offset.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
