//! Externally supplied mapping tables.
//!
//! The caller provides three lookup tables that translate composition field
//! and filter names into the target tool's flag syntax. The tables are
//! read-only for the whole build; a partially-specified table is valid and
//! simply causes unmatched names to be dropped.

use serde::Deserialize;
use std::collections::HashMap;

/// The three lookup tables driving fragment generation.
///
/// Deserialized straight from the mapping configuration JSON. Keys of
/// `input_mappings` are the snake_case source-field names (`file`,
/// `frame_rate`, `start_time`, ...); keys of `type_to_label_mapping` are the
/// clip kind tokens (`video`, `audio`, `text`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingTables {
    /// Source-field name -> input flag (e.g. `file` -> `-i`).
    #[serde(default)]
    pub input_mappings: HashMap<String, String>,
    /// Filter name -> filter token (e.g. `scale` -> `scale`).
    #[serde(default)]
    pub filter_mappings: HashMap<String, String>,
    /// Clip kind token -> stream label (e.g. `video` -> `v`).
    #[serde(default)]
    pub type_to_label_mapping: HashMap<String, String>,
}

impl MappingTables {
    /// Looks up the input flag for a source field.
    pub fn input_flag(&self, field: &str) -> Option<&str> {
        self.input_mappings.get(field).map(String::as_str)
    }

    /// Looks up the mapped token for a filter name.
    pub fn filter_flag(&self, name: &str) -> Option<&str> {
        self.filter_mappings.get(name).map(String::as_str)
    }

    /// Looks up the stream label for a clip kind token.
    pub fn type_label(&self, kind: &str) -> Option<&str> {
        self.type_to_label_mapping.get(kind).map(String::as_str)
    }
}
