// reelforge-cli/src/lib.rs
//
// Library portion of the reelforge CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{BuildArgs, Cli, Commands};
pub use commands::build::run_build;
