//! CLI entry point for the wave function collapse generation engine

use clap::Parser;
use wavegrid::io::cli::{Cli, GenerationRunner};

fn main() -> wavegrid::Result<()> {
    let cli = Cli::parse();
    let runner = GenerationRunner::new(cli);
    runner.run()
}
