//! Subtitle overlay expression generation.

use serde::Deserialize;

fn default_end_time() -> f64 {
    5.0
}

fn default_position() -> String {
    "bottom".to_string()
}

fn default_color() -> String {
    "white".to_string()
}

fn default_font() -> String {
    "Arial".to_string()
}

/// A subtitle overlay rendered with the tool's `drawtext` filter.
///
/// Standalone helper alongside command assembly; the timing fields describe
/// when the overlay is meant to be visible and are carried for callers that
/// schedule overlays themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct Subtitle {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub start_time: f64,
    #[serde(default = "default_end_time")]
    pub end_time: f64,
    #[serde(default = "default_position")]
    pub position: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_font")]
    pub font: String,
}

impl Subtitle {
    /// Renders the `drawtext` expression for this subtitle. Unknown position
    /// names fall back to the bottom anchor.
    pub fn drawtext_expr(&self) -> String {
        let position = match self.position.as_str() {
            "top" => "10:main_h-10",
            "center" => "main_w/2:main_h/2",
            _ => "10:10",
        };
        format!(
            "drawtext=text='{}':x={}:fontcolor={}:fontsize=24:fontfile='{}'",
            self.text, position, self.color, self.font
        )
    }
}
