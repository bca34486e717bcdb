//! Groups raw clip records into the canonical processing order.

use crate::clip::{Clip, ClipKind};
use log::debug;

/// Clips in canonical order: all video, then all audio, then all text, each
/// group preserving the original relative order.
///
/// The positional index in this sequence is the numeric stream index used in
/// every stream specifier and `-map` flag downstream. Reordering the input
/// records therefore changes every generated index.
#[derive(Debug, Default)]
pub struct ClassifiedClips {
    clips: Vec<Clip>,
}

impl ClassifiedClips {
    /// Buckets records by declared kind and concatenates the buckets.
    ///
    /// Records with an unknown or missing kind are dropped, not errors: they
    /// declare no capability the stream graph can place.
    pub fn from_records(records: Vec<Clip>) -> Self {
        let mut videos = Vec::new();
        let mut audios = Vec::new();
        let mut texts = Vec::new();

        for clip in records {
            match clip.media_kind() {
                Some(ClipKind::Video) => videos.push(clip),
                Some(ClipKind::Audio) => audios.push(clip),
                Some(ClipKind::Text) => texts.push(clip),
                None => {
                    debug!(
                        "dropping clip '{}' with unrecognized type '{}'",
                        clip.id, clip.kind
                    );
                }
            }
        }

        let mut clips = videos;
        clips.append(&mut audios);
        clips.append(&mut texts);
        Self { clips }
    }

    /// Iterates clips with their stream indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Clip)> + '_ {
        self.clips.iter().enumerate()
    }

    pub fn as_slice(&self) -> &[Clip] {
        &self.clips
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
