//! Planar geometry for piece placement
//!
//! This module contains the coordinate and transform types the engine is
//! built on:
//! - Integer lattice positions in matrix index order
//! - The eight square-lattice symmetries and their composition

/// Integer lattice coordinates
pub mod position;
/// Square-lattice symmetries as 2x2 integer matrices
pub mod transform;

pub use position::Position;
pub use transform::Transform;
