//! Board geometry and text-encoding constants

/// Number of board rows
pub const BOARD_ROWS: usize = 5;
/// Number of board columns
pub const BOARD_COLS: usize = 11;
/// Total number of board cells
pub const BOARD_AREA: usize = BOARD_ROWS * BOARD_COLS;

/// Character marking an occupied cell in the board encoding
pub const OCCUPIED_CELL: char = 'x';
/// Character marking an empty cell in the board encoding
pub const EMPTY_CELL: char = '0';
/// Separator between encoded board rows
pub const ROW_SEPARATOR: char = ',';

/// Fully empty default board
pub const DEFAULT_BOARD: &str = "00000000000,00000000000,00000000000,00000000000,00000000000";

/// Spinner refresh interval for the progress display
pub const PROGRESS_TICK_MS: u64 = 100;
