//! The top-level parsed composition document.

use crate::clip::Clip;
use crate::scene::SceneRecord;
use serde::Deserialize;

/// A parsed composition: the ordered clip list plus any scene trees.
///
/// Reading and validating the JSON itself happens at the caller's boundary;
/// this type only describes the already-parsed shape the core consumes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    #[serde(default)]
    pub clips: Vec<Clip>,
    #[serde(default)]
    pub scenes: Vec<SceneRecord>,
}
