// reelforge-cli/src/main.rs
//
// Binary entry point: parses arguments, initializes logging, dispatches to
// the subcommand implementations, and maps failures to exit codes.

use clap::Parser;
use log::error;
use std::process;

use reelforge_cli::cli::{Cli, Commands};
use reelforge_cli::commands::build::run_build;
use reelforge_cli::logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("failed to initialize logging: {e}");
        process::exit(2);
    }

    let result = match &cli.command {
        Commands::Build(args) => run_build(args),
    };

    if let Err(e) = result {
        error!("{e:#}");
        process::exit(1);
    }
}
