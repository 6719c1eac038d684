//! Exact-tiling puzzle solver for a 5x11 board and a pool of polyomino-like pieces
//!
//! The engine precomputes every distinct orientation of the active pieces, then
//! runs a depth-first placement/undo search over the board. The parallel variant
//! fans the outermost search level into independent branches, each owning a
//! private copy of the board, and streams every complete tiling through a
//! rendezvous channel.

#![forbid(unsafe_code)]

/// Board occupancy state and placement history
pub mod board;
/// Planar transform algebra shared by piece orientations
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Static piece catalog and orientation precomputation
pub mod pieces;
/// Sequential and parallel backtracking engines
pub mod search;

pub use io::error::{Result, SolverError};
