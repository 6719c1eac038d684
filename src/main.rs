//! CLI entry point for the exact-tiling puzzle solver

use clap::Parser;
use tilepack::io::cli::{Cli, Solver};

fn main() -> tilepack::Result<()> {
    let cli = Cli::parse();
    let solver = Solver::new(cli);
    solver.run()
}
