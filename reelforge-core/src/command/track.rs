//! Per-clip filter-chain construction.

use crate::LINE_CONTINUATION;
use crate::clip::Clip;
use crate::error::{CoreError, CoreResult};
use crate::mapping::MappingTables;
use serde_json::Value;

/// Renders a filter value as it appears after `=` in a chain term. Unlike
/// input fields, filter values are emitted unconditionally: `eq=0` is a
/// meaningful term.
fn filter_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds the filter-chain fragment for the clip at classified position
/// `index`.
///
/// The source specifier names input `index`, the same integer the clip's
/// `-map` flag carries; the destination specifier names `index + 1`. Filters
/// are emitted in declared order; names missing from the filter table are
/// dropped, and the surviving terms are joined with `:` so the chain never
/// carries a leading or trailing separator no matter how many raw filters
/// were dropped. The clip's passthrough options follow as separate
/// fragments, joined with the cosmetic line continuation.
///
/// A clip without filters produces `Ok(None)`. A clip whose kind has no
/// entry in the label table fails with [`CoreError::UnknownTypeLabel`] and
/// emits nothing.
pub fn build(clip: &Clip, index: usize, tables: &MappingTables) -> CoreResult<Option<String>> {
    if clip.filters.is_empty() {
        return Ok(None);
    }

    let label = tables
        .type_label(&clip.kind)
        .ok_or_else(|| CoreError::UnknownTypeLabel {
            clip_id: clip.id.clone(),
            kind: clip.kind.clone(),
        })?;

    let source = format!("[{index}:{label}]");
    let dest = format!("[{}:{label}]", index + 1);

    let terms: Vec<String> = clip
        .filters
        .iter()
        .filter_map(|(name, value)| {
            let flag = tables.filter_flag(name)?;
            Some(format!("{flag}={}", filter_value(value)))
        })
        .collect();

    let mut parts = vec![format!("{source}{}{dest}", terms.join(":"))];
    parts.extend(clip.additional_options.iter().cloned());
    Ok(Some(parts.join(LINE_CONTINUATION)))
}
