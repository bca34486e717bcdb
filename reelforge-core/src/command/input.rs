//! Input-stage fragment construction for a single clip.

use crate::clip::{Clip, field_token};
use crate::mapping::MappingTables;

/// The mapped source fields in emission order, paired with the current
/// clip's rendered value for each. An explicit table rather than field
/// introspection: the set of mappable fields is fixed and auditable here.
fn source_fields(clip: &Clip) -> [(&'static str, Option<String>); 11] {
    [
        ("file", clip.source_value()),
        ("format", clip.format.clone().filter(|s| !s.is_empty())),
        ("frame_rate", field_token(clip.frame_rate.as_ref())),
        (
            "pixel_format",
            clip.pixel_format.clone().filter(|s| !s.is_empty()),
        ),
        ("codec", clip.codec.clone().filter(|s| !s.is_empty())),
        ("bit_rate", field_token(clip.bit_rate.as_ref())),
        ("sample_rate", field_token(clip.sample_rate.as_ref())),
        ("channels", field_token(clip.channels.as_ref())),
        ("duration", field_token(clip.duration.as_ref())),
        ("start_time", field_token(clip.start_time.as_ref())),
        ("end_time", field_token(clip.end_time.as_ref())),
    ]
}

/// Builds the input-stage fragment for one clip.
///
/// Emits one `"<flag> <value>"` pair for every source field that has both a
/// value and an entry in the field table; unmapped and empty fields are
/// skipped silently. The clip's passthrough options follow verbatim, without
/// validation. Returns `None` when nothing was produced.
pub fn build(clip: &Clip, tables: &MappingTables) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    for (field, value) in source_fields(clip) {
        let Some(flag) = tables.input_flag(field) else {
            continue;
        };
        if let Some(value) = value {
            parts.push(format!("{flag} {value}"));
        }
    }
    parts.extend(clip.additional_options.iter().cloned());

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
