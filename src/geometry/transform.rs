//! The eight symmetries of the square lattice as 2x2 integer matrices

use crate::geometry::position::Position;

/// A planar transform: a 2x2 integer matrix with entries in {-1, 0, 1}
/// representing one of the eight symmetries of the square lattice.
///
/// Transforms compose via matrix multiplication; two transforms are equal
/// iff all four entries match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform([[i32; 2]; 2]);

impl Transform {
    /// The identity transform
    pub const IDENTITY: Self = Self([[1, 0], [0, 1]]);

    /// A quarter-turn rotation
    pub const ROTATE_90: Self = Self([[0, 1], [-1, 0]]);

    /// Reflection across the row axis
    pub const MIRROR: Self = Self([[1, 0], [0, -1]]);

    /// Apply the transform to a coordinate (matrix-vector product)
    pub const fn apply(self, p: Position) -> Position {
        Position::new(
            self.0[0][0] * p.row + self.0[0][1] * p.col,
            self.0[1][0] * p.row + self.0[1][1] * p.col,
        )
    }

    /// Compose with another transform (matrix product)
    ///
    /// Applying the result is equivalent to applying `other` first and then
    /// `self`. Composition is associative and the symmetry table is closed
    /// under it.
    pub const fn compose(self, other: Self) -> Self {
        Self([
            [
                self.0[0][0] * other.0[0][0] + self.0[0][1] * other.0[1][0],
                self.0[0][0] * other.0[0][1] + self.0[0][1] * other.0[1][1],
            ],
            [
                self.0[1][0] * other.0[0][0] + self.0[1][1] * other.0[1][0],
                self.0[1][0] * other.0[0][1] + self.0[1][1] * other.0[1][1],
            ],
        ])
    }
}

const ROTATE_180: Transform = Transform::ROTATE_90.compose(Transform::ROTATE_90);
const ROTATE_270: Transform = ROTATE_180.compose(Transform::ROTATE_90);

/// Number of leading entries in [`SYMMETRIES`] that are pure rotations
pub const ROTATION_COUNT: usize = 4;

/// All eight symmetries of the square lattice
///
/// The four rotations come first, followed by their mirrored counterparts,
/// so mirror-invariant pieces can take the leading [`ROTATION_COUNT`]
/// entries and skip the redundant half.
pub const SYMMETRIES: [Transform; 8] = [
    Transform::IDENTITY,
    Transform::ROTATE_90,
    ROTATE_180,
    ROTATE_270,
    Transform::MIRROR,
    Transform::ROTATE_90.compose(Transform::MIRROR),
    ROTATE_180.compose(Transform::MIRROR),
    ROTATE_270.compose(Transform::MIRROR),
];
