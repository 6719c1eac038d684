//! Orientation precomputation for the piece pool
//!
//! Orientation sets are generated once per search invocation and reused for
//! every board position tried afterwards, so the recursion never re-derives
//! a transformed shape.

use crate::geometry::transform::{ROTATION_COUNT, SYMMETRIES};
use crate::pieces::catalog::Piece;

/// Generate the orientation set of a piece, one entry per applicable symmetry
///
/// Asymmetric pieces go through all eight transforms; duplicates arising
/// from partial shape symmetry are kept rather than filtered. Pieces
/// flagged mirror-invariant take only the four rotations, halving their
/// branching factor.
pub fn orientations(piece: &Piece) -> Vec<Piece> {
    let applicable = if piece.is_symmetric() {
        SYMMETRIES
            .get(..ROTATION_COUNT)
            .unwrap_or(SYMMETRIES.as_slice())
    } else {
        SYMMETRIES.as_slice()
    };

    applicable
        .iter()
        .map(|&transform| piece.transformed(transform))
        .collect()
}

/// Precompute the orientation sets of every piece in the pool
///
/// The outer ordering mirrors the pool; the search consumes it from the
/// back, one piece type per recursion level.
pub fn precompute(pool: &[Piece]) -> Vec<Vec<Piece>> {
    pool.iter().map(orientations).collect()
}
