//! Validates the placement/undo primitive and its invariants

use tilepack::SolverError;
use tilepack::board::Session;
use tilepack::geometry::Position;
use tilepack::io::configuration::BOARD_AREA;
use tilepack::io::encoding::parse_board;
use tilepack::pieces::catalog;

const FULL_BOARD: &str = "xxxxxxxxxxx,xxxxxxxxxxx,xxxxxxxxxxx,xxxxxxxxxxx,xxxxxxxxxxx";

#[test]
fn test_attempt_then_undo_restores_the_board_exactly() {
    let mut session = Session::new();
    let blue = catalog::lookup("blue").unwrap();

    let before = session.clone();
    assert!(session.attempt(&blue, Position::new(1, 2)).unwrap());
    assert_eq!(session.occupied(), blue.cell_count());
    assert_eq!(session.moves().len(), 1);

    session.undo().unwrap();
    assert_eq!(session.cells(), before.cells());
    assert_eq!(session.occupied(), before.occupied());
    assert!(session.moves().is_empty());
}

#[test]
fn test_overlapping_placement_is_rejected_without_mutation() {
    let mut session = Session::new();
    let blue = catalog::lookup("blue").unwrap();
    let turquoise = catalog::lookup("turquoise").unwrap();

    assert!(session.attempt(&blue, Position::new(0, 0)).unwrap());
    let snapshot = session.clone();

    // Turquoise's origin cell lands on blue's image
    let placed = session.attempt(&turquoise, Position::new(0, 0)).unwrap();
    assert!(!placed);
    assert_eq!(session.cells(), snapshot.cells());
    assert_eq!(session.occupied(), snapshot.occupied());
    assert_eq!(session.moves().len(), 1);
}

#[test]
fn test_out_of_bounds_placement_is_rejected_without_mutation() {
    let mut session = Session::new();
    let red = catalog::lookup("red").unwrap();

    // Red spans four columns; column 8 pushes its tail past the edge
    assert!(!session.attempt(&red, Position::new(0, 8)).unwrap());
    // A second row offset below the bottom edge
    assert!(!session.attempt(&red, Position::new(4, 0)).unwrap());
    // Negative anchors are out of bounds, not wrapped
    assert!(!session.attempt(&red, Position::new(-1, 0)).unwrap());

    assert_eq!(session.occupied(), 0);
    assert!(session.moves().is_empty());
}

#[test]
fn test_undo_with_empty_history_reports_underflow() {
    let mut session = Session::new();
    let before = session.clone();

    let result = session.undo();
    assert_eq!(result, Err(SolverError::EmptyHistory));
    assert_eq!(session.cells(), before.cells());
    assert_eq!(session.occupied(), 0);
}

#[test]
fn test_placement_over_the_cell_budget_is_an_error() {
    let mut session = parse_board(FULL_BOARD).unwrap();
    assert_eq!(session.occupied(), BOARD_AREA);

    let blue = catalog::lookup("blue").unwrap();
    let result = session.attempt(&blue, Position::new(0, 0));
    assert!(matches!(
        result,
        Err(SolverError::CapacityExceeded { requested: 4, .. })
    ));
}

#[test]
fn test_occupied_count_tracks_placed_areas() {
    let mut session = Session::new();
    let blue = catalog::lookup("blue").unwrap();
    let green = catalog::lookup("green").unwrap();

    assert!(session.attempt(&blue, Position::new(0, 0)).unwrap());
    assert!(session.attempt(&green, Position::new(2, 5)).unwrap());
    let placed_area: usize = session
        .moves()
        .iter()
        .map(|placed| placed.piece.cell_count())
        .sum();
    assert_eq!(session.occupied(), placed_area);

    let occupied_cells = session.cells().iter().filter(|&&cell| cell).count();
    assert_eq!(occupied_cells, placed_area);
}

#[test]
fn test_branch_copies_occupancy_but_not_history() {
    let mut session = Session::new();
    let blue = catalog::lookup("blue").unwrap();
    assert!(session.attempt(&blue, Position::new(0, 0)).unwrap());

    let mut branch = session.branch();
    assert_eq!(branch.cells(), session.cells());
    assert_eq!(branch.occupied(), session.occupied());
    assert!(branch.moves().is_empty());

    // Mutating the branch leaves the base session untouched
    let turquoise = catalog::lookup("turquoise").unwrap();
    assert!(branch.attempt(&turquoise, Position::new(3, 3)).unwrap());
    assert_ne!(branch.occupied(), session.occupied());
    assert_eq!(session.moves().len(), 1);
}

#[test]
fn test_move_image_translates_every_offset() {
    let mut session = Session::new();
    let turquoise = catalog::lookup("turquoise").unwrap();
    assert!(session.attempt(&turquoise, Position::new(2, 4)).unwrap());

    let image = session.moves().first().unwrap().image();
    assert_eq!(
        image,
        vec![
            Position::new(2, 4),
            Position::new(2, 5),
            Position::new(3, 4)
        ]
    );
}
