//! Validates board and piece-pool text parsing and solution rendering

use tilepack::SolverError;
use tilepack::board::Move;
use tilepack::geometry::Position;
use tilepack::io::configuration::DEFAULT_BOARD;
use tilepack::io::encoding::{parse_board, parse_pool};
use tilepack::io::render::render_solution;
use tilepack::pieces::catalog;

#[test]
fn test_default_board_parses_empty() {
    let session = parse_board(DEFAULT_BOARD).unwrap();
    assert_eq!(session.occupied(), 0);
    assert!(session.moves().is_empty());
}

#[test]
fn test_mixed_board_counts_occupied_cells() {
    let session =
        parse_board("x0x0x0x0x0x,00000000000,xxxxxxxxxxx,00000000000,x0x0x0x0x0x").unwrap();
    assert_eq!(session.occupied(), 6 + 11 + 6);
}

#[test]
fn test_wrong_row_count_is_rejected() {
    let result = parse_board("00000000000,00000000000");
    assert!(matches!(result, Err(SolverError::InvalidBoard { .. })));
}

#[test]
fn test_wrong_row_length_is_rejected() {
    let result = parse_board("00000000000,00000000000,000,00000000000,00000000000");
    assert!(matches!(result, Err(SolverError::InvalidBoard { .. })));
}

#[test]
fn test_stray_characters_are_rejected() {
    let result = parse_board("00000000000,00000000000,00000?00000,00000000000,00000000000");
    assert!(matches!(result, Err(SolverError::InvalidBoard { .. })));
}

#[test]
fn test_pool_parses_names_in_order() {
    let pool = parse_pool("blue,green,blue").unwrap();
    let names: Vec<&str> = pool.iter().map(|piece| piece.name()).collect();
    assert_eq!(names, vec!["blue", "green", "blue"]);
}

#[test]
fn test_empty_pool_string_parses_to_empty_pool() {
    assert!(parse_pool("").unwrap().is_empty());
}

#[test]
fn test_unknown_pool_name_is_rejected() {
    let result = parse_pool("blue,mauve");
    assert_eq!(
        result,
        Err(SolverError::UnknownPiece {
            name: "mauve".to_string()
        })
    );
}

#[test]
fn test_render_labels_each_move_and_keeps_occupied_marker() {
    let turquoise = catalog::lookup("turquoise").unwrap();
    let moves = vec![Move {
        piece: turquoise,
        anchor: Position::new(0, 0),
    }];

    let rendered = render_solution(&moves);
    let lines: Vec<&str> = rendered.lines().collect();

    // One description line, then the five board rows
    assert_eq!(lines.len(), 6);
    assert!(lines.first().unwrap().starts_with("A: turquoise at (0, 0)"));
    assert_eq!(*lines.get(1).unwrap(), "AAxxxxxxxxx");
    assert_eq!(*lines.get(2).unwrap(), "Axxxxxxxxxx");
    assert_eq!(*lines.get(3).unwrap(), "xxxxxxxxxxx");
}
