//! Terminal encode/destination clause.

use serde::Deserialize;

/// Output encoding configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputSpec {
    /// Destination path, placed as the final bare token of the command.
    #[serde(rename = "destinationPath")]
    pub destination: String,
    pub video_codec: String,
    pub audio_codec: String,
    pub resolution: Option<String>,
    pub additional_options: Vec<String>,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            destination: "output.mp4".to_string(),
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            resolution: None,
            additional_options: Vec::new(),
        }
    }
}

impl OutputSpec {
    /// Default encoding settings with the given destination.
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }
}

/// Builds the output clause, fixed field order: video codec, audio codec,
/// optional resolution, passthrough options, destination.
pub fn build(spec: &OutputSpec) -> String {
    let mut parts = vec![
        format!("-c:v {}", spec.video_codec),
        format!("-c:a {}", spec.audio_codec),
    ];
    if let Some(resolution) = spec.resolution.as_deref().filter(|r| !r.is_empty()) {
        parts.push(format!("-s {resolution}"));
    }
    parts.extend(spec.additional_options.iter().cloned());
    parts.push(spec.destination.clone());
    parts.join(" ")
}
