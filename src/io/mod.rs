//! Input/output operations and error handling

/// Command-line interface and invocation driver
pub mod cli;
/// Board geometry and text-encoding constants
pub mod configuration;
/// Board and piece-pool text parsing
pub mod encoding;
/// Error types for parsing and the placement engine
pub mod error;
/// Progress display for long enumerations
pub mod progress;
/// Textual rendering of solutions
pub mod render;
