//! Textual rendering of solutions

use crate::board::session::Move;
use crate::io::configuration::{BOARD_COLS, BOARD_ROWS, OCCUPIED_CELL};

/// Render a solution as one description line per move followed by a
/// lettered grid view
///
/// Pieces are labelled `A`, `B`, ... in placement order; cells that were
/// occupied before the search keep the occupied marker, since a complete
/// solution covers every other cell.
pub fn render_solution(moves: &[Move]) -> String {
    let mut grid = vec![vec![OCCUPIED_CELL; BOARD_COLS]; BOARD_ROWS];
    let mut lines = Vec::with_capacity(moves.len() + BOARD_ROWS);

    for (index, placed) in moves.iter().enumerate() {
        let label = char::from_u32('A' as u32 + index as u32).unwrap_or('?');
        lines.push(format!("{label}: {placed}"));
        for cell in placed.image() {
            if cell.row < 0 || cell.col < 0 {
                continue;
            }
            let slot = grid
                .get_mut(cell.row as usize)
                .and_then(|row| row.get_mut(cell.col as usize));
            if let Some(slot) = slot {
                *slot = label;
            }
        }
    }

    for row in &grid {
        lines.push(row.iter().collect());
    }
    lines.join("\n")
}
