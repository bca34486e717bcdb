//! Scene-tree composition: transitions and effects over nested scenes.
//!
//! Scene expressions are a separate artifact from the per-clip filter
//! chains; they are never merged into the assembled command text.

use crate::LINE_CONTINUATION;
use crate::clip::Clip;
use log::trace;
use serde::Deserialize;

/// Transition applied to the clip at the same position in its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Wipe,
    Zoom,
    Slide,
}

impl Transition {
    /// The fixed filter expression for this transition.
    pub fn expr(self) -> &'static str {
        match self {
            Self::Wipe => "wipe=duration=1:angle=90",
            Self::Zoom => "zoompan=z='zoom+0.1':d=25",
            Self::Slide => "slide=duration=1:direction=left",
        }
    }
}

/// Effect applied to the clip at the same position in its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Blur,
    Keying,
}

impl Effect {
    /// The fixed filter expression for this effect.
    pub fn expr(self) -> &'static str {
        match self {
            Self::Blur => "boxblur=luma_radius=2:luma_power=1",
            Self::Keying => "colorkey=color=green:similarity=0.1",
        }
    }
}

/// A scene as declared in the composition JSON: clips plus nested scenes,
/// with transitions and effects aligned to clips by position.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRecord {
    pub id: String,
    #[serde(default)]
    pub clips: Vec<Clip>,
    #[serde(default)]
    pub nested_scenes: Vec<SceneRecord>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

/// Arena form of a scene forest. Nodes hold child indices instead of owned
/// subtrees, so depth-first composition is a plain index walk.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    roots: Vec<usize>,
}

#[derive(Debug)]
struct SceneNode {
    id: String,
    clips: Vec<Clip>,
    transitions: Vec<Transition>,
    effects: Vec<Effect>,
    children: Vec<usize>,
}

impl SceneGraph {
    /// Builds an arena from one root scene record.
    pub fn from_record(record: &SceneRecord) -> Self {
        Self::from_records(std::slice::from_ref(record))
    }

    /// Builds an arena from a forest of root scene records.
    pub fn from_records(records: &[SceneRecord]) -> Self {
        let mut graph = Self::default();
        for record in records {
            let root = graph.add(record);
            graph.roots.push(root);
        }
        graph
    }

    fn add(&mut self, record: &SceneRecord) -> usize {
        let children = record
            .nested_scenes
            .iter()
            .map(|child| self.add(child))
            .collect();
        self.nodes.push(SceneNode {
            id: record.id.clone(),
            clips: record.clips.clone(),
            transitions: record.transitions.clone(),
            effects: record.effects.clone(),
            children,
        });
        self.nodes.len() - 1
    }

    /// Composes the forest into its ordered filter expressions, depth-first
    /// with children before their parent.
    ///
    /// For each clip position `p` in a scene, the transition at `p` (if any)
    /// is emitted first, then the effect at `p` (if any), each prefixed with
    /// the `[p:v]` specifier. Positions past the end of the transition or
    /// effect list receive nothing.
    pub fn compose(&self) -> Vec<String> {
        let mut expressions = Vec::new();
        for &root in &self.roots {
            self.emit(root, &mut expressions);
        }
        expressions
    }

    /// The composed expressions joined with the cosmetic line continuation.
    pub fn compose_text(&self) -> String {
        self.compose().join(LINE_CONTINUATION)
    }

    fn emit(&self, index: usize, out: &mut Vec<String>) {
        let node = &self.nodes[index];
        for &child in &node.children {
            self.emit(child, out);
        }

        let before = out.len();
        for position in 0..node.clips.len() {
            if let Some(transition) = node.transitions.get(position) {
                out.push(format!("[{position}:v]{}", transition.expr()));
            }
            if let Some(effect) = node.effects.get(position) {
                out.push(format!("[{position}:v]{}", effect.expr()));
            }
        }
        trace!(
            "scene '{}' contributed {} expression(s)",
            node.id,
            out.len() - before
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> SceneRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_single_transition_covers_only_first_clip() {
        let scene = record(json!({
            "id": "s1",
            "clips": [
                {"id": "c1", "type": "video"},
                {"id": "c2", "type": "video"},
                {"id": "c3", "type": "video"}
            ],
            "transitions": ["wipe"],
            "effects": []
        }));

        let expressions = SceneGraph::from_record(&scene).compose();
        assert_eq!(expressions, ["[0:v]wipe=duration=1:angle=90"]);
    }

    #[test]
    fn test_transition_precedes_effect_at_same_position() {
        let scene = record(json!({
            "id": "s1",
            "clips": [{"id": "c1", "type": "video"}],
            "transitions": ["zoom"],
            "effects": ["keying"]
        }));

        let expressions = SceneGraph::from_record(&scene).compose();
        assert_eq!(
            expressions,
            [
                "[0:v]zoompan=z='zoom+0.1':d=25",
                "[0:v]colorkey=color=green:similarity=0.1"
            ]
        );
    }

    #[test]
    fn test_children_compose_before_parent() {
        let scene = record(json!({
            "id": "outer",
            "clips": [{"id": "p1", "type": "video"}],
            "transitions": ["slide"],
            "nestedScenes": [
                {
                    "id": "inner",
                    "clips": [{"id": "n1", "type": "video"}],
                    "effects": ["blur"]
                }
            ]
        }));

        let expressions = SceneGraph::from_record(&scene).compose();
        assert_eq!(
            expressions,
            [
                "[0:v]boxblur=luma_radius=2:luma_power=1",
                "[0:v]slide=duration=1:direction=left"
            ]
        );
    }

    #[test]
    fn test_deeply_nested_order_is_depth_first() {
        let scene = record(json!({
            "id": "root",
            "clips": [{"id": "r1", "type": "video"}],
            "transitions": ["wipe"],
            "nestedScenes": [
                {
                    "id": "mid",
                    "clips": [{"id": "m1", "type": "video"}],
                    "transitions": ["zoom"],
                    "nestedScenes": [
                        {
                            "id": "leaf",
                            "clips": [{"id": "l1", "type": "video"}],
                            "transitions": ["slide"]
                        }
                    ]
                }
            ]
        }));

        let expressions = SceneGraph::from_record(&scene).compose();
        assert_eq!(
            expressions,
            [
                "[0:v]slide=duration=1:direction=left",
                "[0:v]zoompan=z='zoom+0.1':d=25",
                "[0:v]wipe=duration=1:angle=90"
            ]
        );
    }

    #[test]
    fn test_scene_without_transitions_or_effects_is_silent() {
        let scene = record(json!({
            "id": "quiet",
            "clips": [
                {"id": "c1", "type": "video"},
                {"id": "c2", "type": "video"}
            ]
        }));

        let graph = SceneGraph::from_record(&scene);
        assert!(graph.compose().is_empty());
        assert_eq!(graph.compose_text(), "");
    }

    #[test]
    fn test_compose_text_joins_with_continuation() {
        let scene = record(json!({
            "id": "s1",
            "clips": [
                {"id": "c1", "type": "video"},
                {"id": "c2", "type": "video"}
            ],
            "transitions": ["wipe", "zoom"]
        }));

        assert_eq!(
            SceneGraph::from_record(&scene).compose_text(),
            "[0:v]wipe=duration=1:angle=90 \\[1:v]zoompan=z='zoom+0.1':d=25"
        );
    }
}
