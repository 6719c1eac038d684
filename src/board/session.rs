//! Board occupancy state with placement and undo primitives
//!
//! A session pairs a fixed 5x11 occupancy grid with an ordered stack of
//! moves, the search path. Invariants maintained by `attempt` and `undo`:
//! the occupied count equals both the number of `true` cells and the summed
//! image sizes of the stacked moves, no two stacked moves overlap, every
//! image cell is in bounds, and popping the top move restores the board
//! bit-for-bit to its state before the matching push.

use crate::geometry::Position;
use crate::io::configuration::{BOARD_AREA, BOARD_COLS, BOARD_ROWS};
use crate::io::error::{Result, SolverError};
use crate::pieces::catalog::Piece;
use ndarray::Array2;
use std::fmt;

/// A placed orientation anchored at an absolute board position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// The oriented piece being placed
    pub piece: Piece,
    /// Absolute cell the piece's origin offset is translated to
    pub anchor: Position,
}

impl Move {
    /// Absolute board cells this move occupies
    pub fn image(&self) -> Vec<Position> {
        self.piece
            .cells()
            .iter()
            .map(|&cell| cell.translate(self.anchor))
            .collect()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.image().iter().map(ToString::to_string).collect();
        write!(
            f,
            "{} at {}: [{}]",
            self.piece.name(),
            self.anchor,
            cells.join(", ")
        )
    }
}

/// Mutable pairing of board occupancy and ordered move history
///
/// The sequential engine threads one exclusive session through its
/// recursion; concurrent branches each take a private [`Session::branch`]
/// copy, so board state is never shared.
#[derive(Debug, Clone)]
pub struct Session {
    cells: Array2<bool>,
    occupied: usize,
    moves: Vec<Move>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session over a fully empty board
    pub fn new() -> Self {
        Self {
            cells: Array2::from_elem((BOARD_ROWS, BOARD_COLS), false),
            occupied: 0,
            moves: Vec::new(),
        }
    }

    /// Rebuild a session from pre-parsed occupancy parts with empty history
    pub(crate) const fn from_parts(cells: Array2<bool>, occupied: usize) -> Self {
        Self {
            cells,
            occupied,
            moves: Vec::new(),
        }
    }

    /// Current occupancy grid, row-major
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Number of occupied cells
    pub const fn occupied(&self) -> usize {
        self.occupied
    }

    /// Whether every board cell is occupied
    pub const fn is_full(&self) -> bool {
        self.occupied == BOARD_AREA
    }

    /// Moves currently on the stack, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Attempt to place an oriented piece at `anchor`
    ///
    /// Out-of-bounds and overlapping placements are the ordinary
    /// backtracking rejection path: the session is left untouched and
    /// `Ok(false)` is returned. On success every image cell is marked, the
    /// occupied count grows by the piece's cell count, the move is pushed,
    /// and `Ok(true)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::CapacityExceeded`] if the placement would
    /// occupy more cells than the board has unoccupied in total. This is
    /// checked before bounds and overlap; it signals malformed piece/board
    /// sizing rather than a dead end.
    pub fn attempt(&mut self, piece: &Piece, anchor: Position) -> Result<bool> {
        if self.occupied + piece.cell_count() > BOARD_AREA {
            return Err(SolverError::CapacityExceeded {
                requested: piece.cell_count(),
                available: BOARD_AREA - self.occupied,
            });
        }

        let mut image = Vec::with_capacity(piece.cell_count());
        for &offset in piece.cells() {
            let cell = offset.translate(anchor);
            let Some(index) = grid_index(cell) else {
                return Ok(false);
            };
            if self.cells.get(index).copied().unwrap_or(true) {
                return Ok(false);
            }
            image.push(index);
        }

        for index in image {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = true;
            }
        }
        self.occupied += piece.cell_count();
        self.moves.push(Move {
            piece: piece.clone(),
            anchor,
        });
        Ok(true)
    }

    /// Remove the most recent move, restoring the board to its state
    /// immediately before the matching [`Session::attempt`]
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptyHistory`] if no move is on the stack.
    pub fn undo(&mut self) -> Result<()> {
        let last = self.moves.pop().ok_or(SolverError::EmptyHistory)?;
        self.occupied -= last.piece.cell_count();
        for cell in last.image() {
            if let Some(index) = grid_index(cell) {
                if let Some(slot) = self.cells.get_mut(index) {
                    *slot = false;
                }
            }
        }
        Ok(())
    }

    /// Copy the occupancy grid and occupied count into a fresh session with
    /// an empty move history
    ///
    /// Each concurrent search branch owns one such copy, which is what
    /// makes the fan-out lock-free: no board state is shared between
    /// branches.
    pub fn branch(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            occupied: self.occupied,
            moves: Vec::new(),
        }
    }
}

const fn grid_index(cell: Position) -> Option<(usize, usize)> {
    if cell.row < 0
        || cell.row >= BOARD_ROWS as i32
        || cell.col < 0
        || cell.col >= BOARD_COLS as i32
    {
        return None;
    }
    Some((cell.row as usize, cell.col as usize))
}
