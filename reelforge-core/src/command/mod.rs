//! Command assembly: fixed-order concatenation of per-clip fragments.
//!
//! The final text is `ffmpeg`, then every input fragment in classified clip
//! order, then every filter-chain fragment in the same order, then one
//! `-map` flag per clip in the same order, then the output clause. The
//! classified order is the contract: the numeric index a clip gets here is
//! the index its stream specifiers and map flag carry.

pub mod input;
pub mod output;
pub mod track;

pub use output::OutputSpec;

use crate::classifier::ClassifiedClips;
use crate::error::CoreResult;
use crate::mapping::MappingTables;
use log::debug;

/// Invocation token of the target tool.
pub const PROGRAM: &str = "ffmpeg";

/// Assembles the full command text for a classified clip sequence.
///
/// Every clip gets a `-map <index>:<kind>` flag, including clips that
/// produced no input or filter fragment. The build is deterministic:
/// identical inputs yield byte-identical text. A stream-label failure in any
/// clip's filter chain aborts the whole build with no partial output.
pub fn assemble(
    clips: &ClassifiedClips,
    tables: &MappingTables,
    spec: &OutputSpec,
) -> CoreResult<String> {
    let mut inputs = Vec::new();
    let mut tracks = Vec::new();
    let mut maps = Vec::new();

    for (index, clip) in clips.iter() {
        if let Some(fragment) = input::build(clip, tables) {
            inputs.push(fragment);
        }
        if let Some(fragment) = track::build(clip, index, tables)? {
            tracks.push(fragment);
        }
        maps.push(format!("-map {index}:{}", clip.kind));
    }

    debug!(
        "assembled {} input, {} filter and {} map fragment(s) for {} clip(s)",
        inputs.len(),
        tracks.len(),
        maps.len(),
        clips.len()
    );

    let mut parts = Vec::with_capacity(inputs.len() + tracks.len() + maps.len() + 2);
    parts.push(PROGRAM.to_string());
    parts.extend(inputs);
    parts.extend(tracks);
    parts.extend(maps);
    parts.push(output::build(spec));
    Ok(parts.join(" "))
}
