//! Depth-first backtracking over the piece pool
//!
//! One piece type is consumed per recursion level, taken from the back of
//! the pool. Anchors are scanned row-major and orientations in precomputed
//! order, so the search explores states in the same sequence on every run
//! with the same inputs. Overlap and bounds rejections are ordinary control
//! flow handled by undo-and-continue, never errors.

use crate::board::session::{Move, Session};
use crate::geometry::Position;
use crate::io::configuration::{BOARD_AREA, BOARD_COLS, BOARD_ROWS};
use crate::io::error::{Result, SolverError};
use crate::pieces::catalog::Piece;
use crate::pieces::orientation::precompute;

/// Find the first complete tiling of the session's board by the pool
///
/// Returns `Ok(Some(moves))` with the winning move sequence on success,
/// leaving the session in the solved state, or `Ok(None)` when the search
/// space is exhausted without a solution.
///
/// # Errors
///
/// Returns [`SolverError::PoolExhausted`] when the pool empties before the
/// board is full, meaning the combined piece area does not match the free
/// cell count, and propagates [`SolverError::CapacityExceeded`] from the
/// placement primitive. Both indicate malformed input sizing, not an
/// unsolvable-but-valid puzzle.
pub fn solve_first(session: &mut Session, pool: &[Piece]) -> Result<Option<Vec<Move>>> {
    let orientation_sets = precompute(pool);
    if descend(session, &orientation_sets)? {
        Ok(Some(session.moves().to_vec()))
    } else {
        Ok(None)
    }
}

fn descend(session: &mut Session, pools: &[Vec<Piece>]) -> Result<bool> {
    let Some((current, remaining)) = pools.split_last() else {
        if session.is_full() {
            return Ok(true);
        }
        return Err(SolverError::PoolExhausted {
            occupied: session.occupied(),
            area: BOARD_AREA,
        });
    };

    for anchor in scan_order() {
        for orientation in current {
            if !session.attempt(orientation, anchor)? {
                continue;
            }
            if descend(session, remaining)? {
                return Ok(true);
            }
            session.undo()?;
        }
    }
    Ok(false)
}

/// Exhaustively enumerate every completion of the current session
///
/// Unlike [`solve_first`], terminal successes do not stop the search: each
/// one hands a copy of the full move stack to `emit` and backtracking
/// continues until the subtree is spent. The parallel orchestrator runs
/// this per branch with a channel-sending `emit`.
pub(crate) fn enumerate_solutions(
    session: &mut Session,
    pools: &[Vec<Piece>],
    emit: &mut dyn FnMut(Vec<Move>),
) -> Result<()> {
    let Some((current, remaining)) = pools.split_last() else {
        if !session.is_full() {
            return Err(SolverError::PoolExhausted {
                occupied: session.occupied(),
                area: BOARD_AREA,
            });
        }
        emit(session.moves().to_vec());
        return Ok(());
    };

    for anchor in scan_order() {
        for orientation in current {
            if !session.attempt(orientation, anchor)? {
                continue;
            }
            enumerate_solutions(session, remaining, emit)?;
            session.undo()?;
        }
    }
    Ok(())
}

/// Row-major scan order over every board anchor
pub(crate) fn scan_order() -> impl Iterator<Item = Position> {
    (0..BOARD_ROWS as i32)
        .flat_map(|row| (0..BOARD_COLS as i32).map(move |col| Position::new(row, col)))
}
