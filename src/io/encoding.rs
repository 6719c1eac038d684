//! Text encoding for boards and piece pools
//!
//! A board is encoded as comma-separated rows, top to bottom, one character
//! per cell: `x` for occupied, `0` for empty. A pool is a comma-separated
//! list of catalog names. Parsing validates everything the engine assumes:
//! row and column counts match the fixed board dimensions, every character
//! maps to occupied or empty, and every name resolves against the catalog.

use crate::board::session::Session;
use crate::io::configuration::{
    BOARD_COLS, BOARD_ROWS, EMPTY_CELL, OCCUPIED_CELL, ROW_SEPARATOR,
};
use crate::io::error::{Result, SolverError};
use crate::pieces::catalog::{self, Piece};
use ndarray::Array2;

/// Parse a comma-separated board encoding into a session
///
/// # Errors
///
/// Returns [`SolverError::InvalidBoard`] if the row count or any row length
/// differs from the board dimensions, or if a cell character is neither the
/// occupied nor the empty marker.
pub fn parse_board(encoded: &str) -> Result<Session> {
    let rows: Vec<&str> = encoded.split(ROW_SEPARATOR).collect();
    if rows.len() != BOARD_ROWS {
        return Err(SolverError::InvalidBoard {
            reason: format!("expected {BOARD_ROWS} rows, got {}", rows.len()),
        });
    }

    let mut cells = Array2::from_elem((BOARD_ROWS, BOARD_COLS), false);
    let mut occupied = 0;
    for (row_index, row) in rows.iter().enumerate() {
        let width = row.chars().count();
        if width != BOARD_COLS {
            return Err(SolverError::InvalidBoard {
                reason: format!("row {row_index} has {width} cells, expected {BOARD_COLS}"),
            });
        }
        for (col_index, symbol) in row.chars().enumerate() {
            match symbol {
                OCCUPIED_CELL => {
                    if let Some(slot) = cells.get_mut((row_index, col_index)) {
                        *slot = true;
                    }
                    occupied += 1;
                }
                EMPTY_CELL => {}
                other => {
                    return Err(SolverError::InvalidBoard {
                        reason: format!(
                            "row {row_index} contains {other:?}; cells must be \
                             {OCCUPIED_CELL:?} or {EMPTY_CELL:?}"
                        ),
                    });
                }
            }
        }
    }

    Ok(Session::from_parts(cells, occupied))
}

/// Resolve a comma-separated list of piece names against the catalog
///
/// Names may repeat; each occurrence contributes one piece to the pool. An
/// empty string resolves to an empty pool.
///
/// # Errors
///
/// Returns [`SolverError::UnknownPiece`] for the first name that is not in
/// the catalog.
pub fn parse_pool(encoded: &str) -> Result<Vec<Piece>> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    encoded
        .split(ROW_SEPARATOR)
        .map(|name| {
            catalog::lookup(name).ok_or_else(|| SolverError::UnknownPiece {
                name: name.to_string(),
            })
        })
        .collect()
}
