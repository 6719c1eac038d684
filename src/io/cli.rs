//! Command-line interface for the tiling solver

use crate::io::configuration::DEFAULT_BOARD;
use crate::io::encoding::{parse_board, parse_pool};
use crate::io::error::Result;
use crate::io::progress::SearchProgress;
use crate::io::render::render_solution;
use crate::pieces::catalog;
use crate::search::{solve_all, solve_first};
use clap::Parser;

#[derive(Parser)]
#[command(name = "tilepack")]
#[command(
    author,
    version,
    about = "Exhaustive solver for a 5x11 polyomino tiling puzzle"
)]
/// Command-line arguments for the solver binary
pub struct Cli {
    /// Board rows separated by commas (0 for empty, x for occupied)
    #[arg(short, long, default_value = DEFAULT_BOARD)]
    pub board: String,

    /// Comma-separated piece names; defaults to the full twelve-piece catalog
    #[arg(short, long)]
    pub pieces: Option<String>,

    /// Stop after the first solution instead of enumerating all of them
    #[arg(short, long)]
    pub first: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives parsing, search, and result printing for one invocation
pub struct Solver {
    cli: Cli,
}

impl Solver {
    /// Create a solver from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse the board and pool, run the requested search, and print results
    ///
    /// # Errors
    ///
    /// Returns an error if the board or piece list fails to parse, or if
    /// the engine reports one of its non-recoverable sizing conditions.
    // Results are reported on stdout for the invoking user
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let mut session = parse_board(&self.cli.board)?;
        let pool = self
            .cli
            .pieces
            .as_deref()
            .map(parse_pool)
            .transpose()?
            .unwrap_or_else(catalog::full_set);

        if self.cli.first {
            match solve_first(&mut session, &pool)? {
                Some(solution) => {
                    println!("Solution found");
                    println!("{}", render_solution(&solution));
                }
                None => println!("No solution"),
            }
            return Ok(());
        }

        let mut progress = SearchProgress::new(self.cli.should_show_progress());
        let mut total: u64 = 0;
        for solution in solve_all(&session, &pool) {
            total += 1;
            progress.solution_found();
            progress.announce(&format!(
                "Solution {total}\n{}",
                render_solution(&solution)
            ));
        }
        progress.finish();
        println!("{total} solutions in total");
        Ok(())
    }
}
