//! Error types for the command assembly core.

use thiserror::Error;

/// Errors produced while assembling command text.
///
/// Most "nothing matched" situations in the build are deliberately not
/// errors: unmapped field or filter names are dropped and empty fragments
/// are simply absent. The one fatal case is a clip kind without a stream
/// label, because the stream graph cannot be made consistent without it.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The kind→label table has no entry for a clip's declared kind.
    #[error("no stream label mapping for clip '{clip_id}' of type '{kind}'")]
    UnknownTypeLabel { clip_id: String, kind: String },
}

/// Result type for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
