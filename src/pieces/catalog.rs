//! Static definitions of the twelve puzzle pieces
//!
//! Catalog entries are immutable, process-wide constants: a name, a
//! non-empty set of relative cell offsets, and a flag marking shapes that
//! are invariant under reflection. The combined area of the full set is 55
//! cells, exactly the size of the 5x11 board.

use crate::geometry::{Position, Transform};

/// A puzzle piece in one specific orientation
///
/// Freshly looked-up pieces carry their catalog offsets; applying a
/// transform with [`Piece::transformed`] yields a new orientation of the
/// same piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    name: &'static str,
    cells: Vec<Position>,
    symmetric: bool,
}

impl Piece {
    /// Piece name as listed in the catalog
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Relative cell offsets of this piece in its current orientation
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of board cells the piece occupies
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the shape is invariant under the mirror transforms
    pub const fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Apply a transform to every cell offset, producing a new orientation
    pub fn transformed(&self, transform: Transform) -> Self {
        Self {
            name: self.name,
            cells: self
                .cells
                .iter()
                .map(|&cell| transform.apply(cell))
                .collect(),
            symmetric: self.symmetric,
        }
    }

    fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name,
            cells: entry.cells.to_vec(),
            symmetric: entry.symmetric,
        }
    }
}

struct CatalogEntry {
    name: &'static str,
    cells: &'static [Position],
    symmetric: bool,
}

const fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

const CATALOG: [CatalogEntry; 12] = [
    CatalogEntry {
        name: "blue",
        cells: &[p(0, 0), p(0, 1), p(0, 2), p(1, 0)],
        symmetric: false,
    },
    CatalogEntry {
        name: "green",
        cells: &[p(0, 0), p(1, 0), p(2, 0), p(1, 1)],
        symmetric: true,
    },
    CatalogEntry {
        name: "lightblue",
        cells: &[p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)],
        symmetric: true,
    },
    CatalogEntry {
        name: "maroon",
        cells: &[p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
        symmetric: true,
    },
    CatalogEntry {
        name: "mint",
        cells: &[p(0, 0), p(0, 1), p(0, 2), p(1, 0), p(1, 1)],
        symmetric: false,
    },
    CatalogEntry {
        name: "olive",
        cells: &[p(0, 0), p(1, 0), p(2, 0), p(0, 1), p(2, 1)],
        symmetric: true,
    },
    CatalogEntry {
        name: "orange",
        cells: &[p(0, 0), p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
        symmetric: false,
    },
    CatalogEntry {
        name: "pink",
        cells: &[p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(1, 3)],
        symmetric: false,
    },
    CatalogEntry {
        name: "red",
        cells: &[p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(1, 0)],
        symmetric: false,
    },
    CatalogEntry {
        name: "turquoise",
        cells: &[p(0, 0), p(0, 1), p(1, 0)],
        symmetric: false,
    },
    CatalogEntry {
        name: "violet",
        cells: &[p(0, 0), p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
        symmetric: true,
    },
    CatalogEntry {
        name: "yellow",
        cells: &[p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(1, 1)],
        symmetric: false,
    },
];

/// Look up a piece definition by its catalog name
pub fn lookup(name: &str) -> Option<Piece> {
    CATALOG
        .iter()
        .find(|entry| entry.name == name)
        .map(Piece::from_entry)
}

/// The full twelve-piece set, in catalog order
pub fn full_set() -> Vec<Piece> {
    CATALOG.iter().map(Piece::from_entry).collect()
}
