//! Clip records and their declared kinds.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Generator source substituted for the file field of text clips: a solid
/// black background, 640x720, 10 seconds. Text clips composite onto this
/// generated background and never reference a user-supplied media file.
pub const TEXT_SOURCE: &str = "color=c=black:s=640x720:d=10";

/// The three clip kinds the stream graph understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipKind {
    Video,
    Audio,
    Text,
}

impl ClipKind {
    /// Parses a declared kind token. Unknown tokens yield `None` so the
    /// classifier can drop the record instead of failing the build.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// The token used in `-map` flags and as the key into the label table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Text => "text",
        }
    }
}

/// One media or text element of the composition.
///
/// Constructed once from a parsed record and immutable thereafter. The
/// declared kind is kept as the raw string so records with unrecognized
/// kinds survive parsing and can be filtered by the classifier. Filters are
/// an ordered map: declared order is the order terms appear in the chain.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file: Option<String>,
    pub format: Option<String>,
    pub frame_rate: Option<Value>,
    pub pixel_format: Option<String>,
    pub codec: Option<String>,
    pub bit_rate: Option<Value>,
    pub sample_rate: Option<Value>,
    pub channels: Option<Value>,
    pub duration: Option<Value>,
    pub start_time: Option<Value>,
    pub end_time: Option<Value>,
    #[serde(default)]
    pub filters: Map<String, Value>,
    #[serde(default)]
    pub additional_options: Vec<String>,
}

impl Clip {
    /// The parsed kind, or `None` for unrecognized declarations.
    pub fn media_kind(&self) -> Option<ClipKind> {
        ClipKind::parse(&self.kind)
    }

    /// Source value for the input stage. Text clips always yield the
    /// generated background descriptor in place of any file field.
    pub(crate) fn source_value(&self) -> Option<String> {
        if self.media_kind() == Some(ClipKind::Text) {
            return Some(TEXT_SOURCE.to_string());
        }
        self.file.clone().filter(|s| !s.is_empty())
    }
}

/// Renders an input-field value as a command token. Empty strings, zeroes
/// and nulls count as absent, mirroring how unset fields behave.
pub(crate) fn field_token(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn clip(value: serde_json::Value) -> Clip {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_kind_parse_round_trip() {
        for token in ["video", "audio", "text"] {
            assert_eq!(ClipKind::parse(token).unwrap().as_str(), token);
        }
        assert_eq!(ClipKind::parse("subtitle"), None);
        assert_eq!(ClipKind::parse(""), None);
    }

    #[test]
    fn test_text_clip_source_is_generated() {
        let c = clip(json!({"id": "t1", "type": "text", "file": "ignored.txt"}));
        assert_eq!(c.source_value().unwrap(), TEXT_SOURCE);
    }

    #[test]
    fn test_media_clip_source_is_declared_file() {
        let c = clip(json!({"id": "v1", "type": "video", "file": "a.mp4"}));
        assert_eq!(c.source_value().unwrap(), "a.mp4");

        let missing = clip(json!({"id": "v2", "type": "video"}));
        assert_eq!(missing.source_value(), None);
    }

    #[test]
    fn test_field_token_drops_empty_values() {
        assert_eq!(field_token(None), None);
        assert_eq!(field_token(Some(&json!(""))), None);
        assert_eq!(field_token(Some(&json!(0))), None);
        assert_eq!(field_token(Some(&json!(null))), None);
        assert_eq!(field_token(Some(&json!(30))).unwrap(), "30");
        assert_eq!(field_token(Some(&json!("44100"))).unwrap(), "44100");
    }

    #[test]
    fn test_filters_preserve_declared_order() {
        let c = clip(json!({
            "id": "v1",
            "type": "video",
            "filters": {"scale": "1280:720", "brightness": 0.5, "contrast": 1.2}
        }));
        let names: Vec<&str> = c.filters.keys().map(String::as_str).collect();
        assert_eq!(names, ["scale", "brightness", "contrast"]);
    }
}
