//! Validates the transform algebra underlying piece orientations

use tilepack::geometry::Position;
use tilepack::geometry::transform::{ROTATION_COUNT, SYMMETRIES, Transform};

#[test]
fn test_identity_fixes_every_coordinate() {
    let samples = [
        Position::new(0, 0),
        Position::new(3, 7),
        Position::new(-2, 5),
        Position::new(4, -1),
    ];
    for sample in samples {
        assert_eq!(Transform::IDENTITY.apply(sample), sample);
    }
}

#[test]
fn test_symmetry_table_contains_identity() {
    assert!(SYMMETRIES.contains(&Transform::IDENTITY));
}

#[test]
fn test_symmetry_table_is_closed_under_composition() {
    for a in SYMMETRIES {
        for b in SYMMETRIES {
            let composed = a.compose(b);
            assert!(
                SYMMETRIES.contains(&composed),
                "composition of two symmetries left the table"
            );
        }
    }
}

#[test]
fn test_symmetries_are_distinct() {
    for (i, a) in SYMMETRIES.iter().enumerate() {
        for b in SYMMETRIES.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_composition_is_associative() {
    for a in SYMMETRIES {
        for b in SYMMETRIES {
            for c in SYMMETRIES {
                assert_eq!(a.compose(b).compose(c), a.compose(b.compose(c)));
            }
        }
    }
}

#[test]
fn test_quarter_turn_moves_coordinates_as_expected() {
    // Matrix [[0, 1], [-1, 0]] sends (row, col) to (col, -row)
    assert_eq!(
        Transform::ROTATE_90.apply(Position::new(1, 0)),
        Position::new(0, -1)
    );
    assert_eq!(
        Transform::ROTATE_90.apply(Position::new(0, 1)),
        Position::new(1, 0)
    );
}

#[test]
fn test_leading_entries_are_rotations() {
    // The mirrored half flips orientation; rotations preserve it. A
    // transform preserves orientation iff it fixes or negates both axes
    // consistently, which the quarter-turn powers do.
    let rotations = [
        Transform::IDENTITY,
        Transform::ROTATE_90,
        Transform::ROTATE_90.compose(Transform::ROTATE_90),
        Transform::ROTATE_90
            .compose(Transform::ROTATE_90)
            .compose(Transform::ROTATE_90),
    ];
    let leading = SYMMETRIES.get(..ROTATION_COUNT).unwrap_or_default();
    for rotation in rotations {
        assert!(leading.contains(&rotation));
    }
}

#[test]
fn test_translation_is_componentwise() {
    let moved = Position::new(2, 3).translate(Position::new(-1, 4));
    assert_eq!(moved, Position::new(1, 7));
}
