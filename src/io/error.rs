//! Error types for parsing and the placement engine

use std::fmt;

/// Main error type for board parsing, pool resolution, and the engine's
/// non-recoverable placement conditions
///
/// Ordinary search dead ends (overlap, out of bounds, exhausted subtrees)
/// are not errors; they are the expected control flow of backtracking. The
/// engine variants below all indicate broken input sizing or caller logic
/// and are propagated without retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Board text does not encode a valid occupancy grid
    InvalidBoard {
        /// Description of what is wrong with the encoding
        reason: String,
    },

    /// Requested piece name is not in the catalog
    UnknownPiece {
        /// The unresolved name
        name: String,
    },

    /// Placement would occupy more cells than the board has left in total
    ///
    /// Checked before bounds and overlap, so it fires even for placements
    /// that would also have been rejected as dead ends.
    CapacityExceeded {
        /// Cells the rejected placement needs
        requested: usize,
        /// Cells still unoccupied on the board
        available: usize,
    },

    /// Undo was requested with no moves on the stack
    EmptyHistory,

    /// The piece pool emptied while board cells remain uncovered
    ///
    /// The combined area of the supplied pieces does not equal the free
    /// cell count, so no sequence of placements can ever succeed.
    PoolExhausted {
        /// Cells covered when the pool ran out
        occupied: usize,
        /// Cells the board has in total
        area: usize,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoard { reason } => {
                write!(f, "invalid board: {reason}")
            }
            Self::UnknownPiece { name } => {
                write!(f, "unknown piece: {name}")
            }
            Self::CapacityExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "placement of {requested} cells exceeds the {available} remaining on the board"
                )
            }
            Self::EmptyHistory => {
                write!(f, "no moves to undo")
            }
            Self::PoolExhausted { occupied, area } => {
                write!(
                    f,
                    "no pieces left, but only {occupied} of {area} cells are covered"
                )
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;
