//! Board occupancy state and placement history

/// Session state with the placement/undo primitives
pub mod session;

pub use session::{Move, Session};
