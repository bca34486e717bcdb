// reelforge-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Reelforge: declarative video composition to command text",
    long_about = "Translates a JSON composition and mapping configuration into the textual \
                  invocation of an ffmpeg-compatible tool. The command is printed, never executed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assembles the command text for a composition
    Build(BuildArgs),
}

#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Composition JSON file (clips and scenes)
    #[arg(short = 'i', long = "composition", required = true, value_name = "COMPOSITION_JSON")]
    pub composition: PathBuf,

    /// Mapping configuration JSON file (field, filter and label tables)
    #[arg(short = 'c', long = "config", required = true, value_name = "CONFIG_JSON")]
    pub config: PathBuf,

    /// Destination path placed at the end of the output clause
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DESTINATION",
        default_value = "output.mp4"
    )]
    pub output: String,

    /// Override the output video codec
    #[arg(long, value_name = "CODEC")]
    pub video_codec: Option<String>,

    /// Override the output audio codec
    #[arg(long, value_name = "CODEC")]
    pub audio_codec: Option<String>,

    /// Output resolution (e.g. 1280x720)
    #[arg(long, value_name = "WxH")]
    pub resolution: Option<String>,

    /// Extra output options appended verbatim before the destination
    #[arg(long = "output-option", value_name = "OPTION")]
    pub output_options: Vec<String>,

    /// Also print the composed scene filter expressions
    #[arg(long)]
    pub scenes: bool,

    /// Write the command text to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub command_file: Option<PathBuf>,
}
