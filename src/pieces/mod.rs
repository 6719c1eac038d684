//! Puzzle piece definitions and orientation precomputation

/// Static definitions of the twelve puzzle pieces
pub mod catalog;
/// Per-piece orientation set generation
pub mod orientation;

pub use catalog::Piece;
