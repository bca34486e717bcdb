//! Core library for translating declarative video compositions into the
//! command text of an ffmpeg-compatible tool.
//!
//! The crate consumes already-parsed structures (a [`Composition`] and the
//! caller-supplied [`MappingTables`]) and produces a single command string.
//! It performs no I/O and never executes the command. Clips are classified
//! into a canonical order (video, audio, text) that fixes the numeric stream
//! index used by every specifier and `-map` flag; scene transitions and
//! effects compose into a separate expression artifact.
//!
//! ## Usage Example
//!
//! ```rust
//! use reelforge_core::{ClassifiedClips, MappingTables, OutputSpec, assemble};
//!
//! let clips: Vec<reelforge_core::Clip> = serde_json::from_str(
//!     r#"[{"id": "a", "type": "video", "file": "a.mp4"}]"#,
//! )
//! .unwrap();
//! let tables: MappingTables = serde_json::from_str(
//!     r#"{"input_mappings": {"file": "-i"}}"#,
//! )
//! .unwrap();
//!
//! let classified = ClassifiedClips::from_records(clips);
//! let command = assemble(&classified, &tables, &OutputSpec::new("out.mp4")).unwrap();
//! assert_eq!(command, "ffmpeg -i a.mp4 -map 0:video -c:v libx264 -c:a aac out.mp4");
//! ```

pub mod classifier;
pub mod clip;
pub mod command;
pub mod composition;
pub mod error;
pub mod mapping;
pub mod scene;
pub mod subtitle;

// Re-exports for public API
pub use classifier::ClassifiedClips;
pub use clip::{Clip, ClipKind, TEXT_SOURCE};
pub use command::{OutputSpec, PROGRAM, assemble};
pub use composition::Composition;
pub use error::{CoreError, CoreResult};
pub use mapping::MappingTables;
pub use scene::{Effect, SceneGraph, SceneRecord, Transition};
pub use subtitle::Subtitle;

/// Cosmetic separator between fragments of a filter block. It lets emitted
/// text wrap across lines and carries no meaning to the target tool.
pub(crate) const LINE_CONTINUATION: &str = " \\";
