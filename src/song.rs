//! Song documents: metadata plus chord-annotated lyric lines.
//!
//! These mirror the stored document shape. Songs serialize with camelCase
//! field names ("timeSignature"); every field defaults when absent so sparse
//! documents deserialize cleanly.

use serde::{Deserialize, Serialize};

/// A chord anchored to a character offset in a lyric line.
///
/// `position` is a character offset (not a byte offset) into the line's
/// text, so annotations on multi-byte lyrics stay aligned. Transposition
/// rewrites `chord` and carries `position` through unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChordAnnotation {
    #[serde(default)]
    pub chord: String,
    #[serde(default)]
    pub position: usize,
}

impl ChordAnnotation {
    pub fn new(chord: String, position: usize) -> Self {
        ChordAnnotation { chord, position }
    }
}

/// One line of a song: free text plus its chord annotations.
///
/// Annotations keep their stored order; the engine never re-sorts them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LyricLine {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub chords: Vec<ChordAnnotation>,
}

impl LyricLine {
    pub fn new(text: String, chords: Vec<ChordAnnotation>) -> Self {
        LyricLine { text, chords }
    }
}

/// A full song document.
///
/// `key` is the song's stored key as entered ("C", "Em", "Bb"); it is
/// normalized only inside the transposition engine, never in the document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_signature: Option<String>,
    #[serde(default)]
    pub lyrics: Vec<LyricLine>,
}
