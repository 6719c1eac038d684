//! Backtracking search engines over the piece pool
//!
//! Both engines drive the session's placement/undo primitive with the same
//! deterministic scan order; the parallel variant fans the outermost pool
//! level into independent branches.

/// Concurrent enumeration of every solution
pub mod parallel;
/// Single-threaded first-solution backtracking
pub mod sequential;

pub use parallel::{SolutionStream, solve_all};
pub use sequential::solve_first;
