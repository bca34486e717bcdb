//! Implementation of the 'build' subcommand.
//!
//! Loads the composition and mapping configuration from disk, runs the core
//! assembly, and prints or writes the resulting command text. File reading
//! and JSON validation live here; the core only sees parsed structures.

use crate::cli::BuildArgs;

use reelforge_core::{
    ClassifiedClips, Composition, MappingTables, OutputSpec, SceneGraph, assemble,
};

use anyhow::{Context, Result};
use console::style;
use log::{debug, info};
use std::fs;
use std::path::Path;

fn load_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {} '{}'", what, path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid {} '{}'", what, path.display()))
}

pub fn run_build(args: &BuildArgs) -> Result<()> {
    let composition: Composition = load_json(&args.composition, "composition file")?;
    let tables: MappingTables = load_json(&args.config, "mapping configuration")?;

    debug!(
        "loaded {} clip(s) and {} scene tree(s) from '{}'",
        composition.clips.len(),
        composition.scenes.len(),
        args.composition.display()
    );

    let mut spec = OutputSpec::new(args.output.clone());
    if let Some(codec) = &args.video_codec {
        spec.video_codec = codec.clone();
    }
    if let Some(codec) = &args.audio_codec {
        spec.audio_codec = codec.clone();
    }
    spec.resolution = args.resolution.clone();
    spec.additional_options = args.output_options.clone();

    let scene_text = args
        .scenes
        .then(|| SceneGraph::from_records(&composition.scenes).compose_text());

    let clips = ClassifiedClips::from_records(composition.clips);
    let command = assemble(&clips, &tables, &spec)?;

    if let Some(path) = &args.command_file {
        fs::write(path, format!("{command}\n"))
            .with_context(|| format!("failed to write command file '{}'", path.display()))?;
        info!("command written to '{}'", path.display());
    } else {
        println!("{}", style("Generated command:").bold());
        println!("{command}");
    }

    if let Some(text) = scene_text {
        if text.is_empty() {
            info!("composition declares no scene transitions or effects");
        } else {
            println!();
            println!("{}", style("Scene filter expressions:").bold());
            println!("{text}");
        }
    }

    Ok(())
}
