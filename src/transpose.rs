//! The transposition engine.
//!
//! [`transpose`] drives a whole request: it validates the song-level keys,
//! resolves the semitone shift, and rewrites every chord annotation in the
//! lyric sheet while leaving text, positions, and line order untouched.
//!
//! A request resolves in one of three ways, first match wins:
//!
//! 1. **Target-key mode.** `target_key` is present and non-empty. The target
//!    must share the original key's mode; the shift is the signed table
//!    distance between the two keys.
//! 2. **Step mode.** `direction` is up or down; the key moves one table slot
//!    with wraparound. An original key that is not a table entry falls back
//!    to the table's first entry with a zero shift.
//! 3. **No-op.** Neither is given; the sheet and key are echoed unchanged.

use serde::{Deserialize, Serialize};

use crate::chord::parse_chord;
use crate::error::TransposeError;
use crate::key::{self, Mode};
use crate::song::{ChordAnnotation, LyricLine};

/// Relative transposition direction.
///
/// Deserializes from the strings "up" and "down"; anything else, including
/// an absent field, is [`Direction::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    Up,
    Down,
    #[default]
    None,
}

impl Direction {
    /// Step count for this direction, or `None` when there is no step.
    pub fn steps(self) -> Option<i32> {
        match self {
            Direction::Up => Some(1),
            Direction::Down => Some(-1),
            Direction::None => None,
        }
    }
}

impl From<String> for Direction {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "up" => Direction::Up,
            "down" => Direction::Down,
            _ => Direction::None,
        }
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => "up".to_string(),
            Direction::Down => "down".to_string(),
            Direction::None => "none".to_string(),
        }
    }
}

/// A transposition request: the song's stored key, its lyric sheet, and
/// either a relative direction or an explicit target key.
///
/// A present, non-empty `target_key` takes precedence over `direction`; an
/// empty string is treated as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransposeRequest {
    #[serde(default)]
    pub original_key: String,
    #[serde(default)]
    pub lyrics: Vec<LyricLine>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub target_key: Option<String>,
}

impl TransposeRequest {
    /// Request a one-step transposition in `direction`.
    pub fn step(original_key: String, lyrics: Vec<LyricLine>, direction: Direction) -> Self {
        TransposeRequest {
            original_key,
            lyrics,
            direction,
            target_key: None,
        }
    }

    /// Request transposition to an explicit target key.
    pub fn to_key(original_key: String, lyrics: Vec<LyricLine>, target_key: String) -> Self {
        TransposeRequest {
            original_key,
            lyrics,
            direction: Direction::None,
            target_key: Some(target_key),
        }
    }
}

/// The transposed sheet plus the resolved keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransposeResult {
    /// The caller's original key, echoed verbatim.
    pub original_key: String,
    /// The resolved key: the caller's target string verbatim in target-key
    /// mode, the canonical sharp spelling in step mode.
    pub transposed_key: String,
    pub transposed_lyrics: Vec<LyricLine>,
}

/// A transposed song document: [`TransposeResult`] plus the song's own
/// title and artist, carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongTransposeResult {
    pub title: String,
    pub artist: String,
    pub original_key: String,
    pub transposed_key: String,
    pub transposed_lyrics: Vec<LyricLine>,
}

/// Transpose a lyric sheet per the request.
///
/// # Example
/// ```
/// use chordshift::{transpose, ChordAnnotation, Direction, LyricLine, TransposeRequest};
///
/// let lyrics = vec![LyricLine::new(
///     "Amazing grace, how sweet the sound".to_string(),
///     vec![
///         ChordAnnotation::new("C".to_string(), 0),
///         ChordAnnotation::new("F".to_string(), 14),
///     ],
/// )];
/// let request = TransposeRequest::step("C".to_string(), lyrics, Direction::Up);
///
/// let result = transpose(&request)?;
/// assert_eq!(result.transposed_key, "C#");
/// assert_eq!(result.transposed_lyrics[0].chords[0].chord, "C#");
/// assert_eq!(result.transposed_lyrics[0].chords[1].chord, "F#");
/// # Ok::<(), chordshift::TransposeError>(())
/// ```
///
/// # Errors
///
/// [`TransposeError::InvalidKey`] when the original key is empty, or when a
/// key on the target-key path is not a table entry.
/// [`TransposeError::ModeMismatch`] when an explicit target key's mode
/// disagrees with the original key's.
pub fn transpose(request: &TransposeRequest) -> Result<TransposeResult, TransposeError> {
    if request.original_key.is_empty() {
        return Err(TransposeError::InvalidKey {
            message: "original song key is missing or empty".to_string(),
        });
    }

    let target = request.target_key.as_deref().filter(|t| !t.is_empty());
    if let Some(target) = target {
        return transpose_to_target(request, target);
    }

    match request.direction.steps() {
        Some(steps) => Ok(transpose_by_step(request, steps)),
        None => Ok(TransposeResult {
            original_key: request.original_key.clone(),
            transposed_key: request.original_key.clone(),
            transposed_lyrics: request.lyrics.clone(),
        }),
    }
}

/// Target-key mode: both keys must share a mode and index into its table.
fn transpose_to_target(
    request: &TransposeRequest,
    target: &str,
) -> Result<TransposeResult, TransposeError> {
    let mode = key::mode_of(&request.original_key);
    let target_mode = key::mode_of(target);
    if mode != target_mode {
        return Err(TransposeError::ModeMismatch {
            from: mode,
            to: target_mode,
        });
    }

    let from = key::normalize(&request.original_key);
    let to = key::normalize(target);
    let semitones = match key::delta_between(&from, &to, mode) {
        Some(semitones) => semitones,
        None => {
            let message = if key::index_of(&from, mode).is_none() {
                format!(
                    "original key '{}' is not a recognized key",
                    request.original_key
                )
            } else {
                format!("target key '{}' is not a recognized key", target)
            };
            return Err(TransposeError::InvalidKey { message });
        }
    };
    log::debug!("transposing {} -> {}: {} semitones ({})", from, to, semitones, mode);

    Ok(TransposeResult {
        original_key: request.original_key.clone(),
        transposed_key: target.to_string(),
        transposed_lyrics: rewrite_lyrics(&request.lyrics, semitones),
    })
}

/// Step mode: move one table slot, falling back to the first table entry
/// with a zero shift when the original key is not a table entry.
fn transpose_by_step(request: &TransposeRequest, steps: i32) -> TransposeResult {
    let mode = key::mode_of(&request.original_key);
    let normalized = key::normalize(&request.original_key);

    let (from, to) = match key::index_of(&normalized, mode) {
        Some(index) => (index as i32, (index as i32 + steps).rem_euclid(12)),
        None => (0, 0),
    };
    let transposed_key = key::at(to, mode);
    // Computed from reduced table indices, so a step across the table seam
    // comes out as +/-11; the per-chord rewrite reduces it right back.
    let semitones = to - from;
    log::debug!(
        "stepping {} -> {}: {} semitones ({})",
        normalized,
        transposed_key,
        semitones,
        mode
    );

    TransposeResult {
        original_key: request.original_key.clone(),
        transposed_key: transposed_key.to_string(),
        transposed_lyrics: rewrite_lyrics(&request.lyrics, semitones),
    }
}

/// Rewrite every chord in every line by `semitones`, preserving text,
/// positions, and annotation order.
fn rewrite_lyrics(lyrics: &[LyricLine], semitones: i32) -> Vec<LyricLine> {
    lyrics
        .iter()
        .map(|line| LyricLine {
            text: line.text.clone(),
            chords: line
                .chords
                .iter()
                .map(|annotation| ChordAnnotation {
                    chord: transpose_chord(&annotation.chord, semitones),
                    position: annotation.position,
                })
                .collect(),
        })
        .collect()
}

/// Transpose a single chord symbol by `semitones` chromatic steps.
///
/// The root always indexes into the major table (the parser never leaves a
/// minor marker on the root) and is re-rendered from the table matching the
/// chord's own quality, so a borrowed minor chord in a major song moves as
/// minor. Anything that fails to parse or to index comes back unchanged;
/// per-chord failure is silent and local.
///
/// # Example
/// ```
/// use chordshift::transpose_chord;
///
/// assert_eq!(transpose_chord("F#m7", 1), "Gm7");
/// assert_eq!(transpose_chord("Bb7sus4", 2), "C7sus4");
/// assert_eq!(transpose_chord("H7", 5), "H7");
/// ```
pub fn transpose_chord(symbol: &str, semitones: i32) -> String {
    let token = parse_chord(symbol);
    if token.root.is_empty() {
        return symbol.to_string();
    }

    let root = key::normalize(&token.root);
    let Some(index) = key::index_of(&root, Mode::Major) else {
        log::trace!("chord '{}' has no table root, passing through", symbol);
        return symbol.to_string();
    };

    let mode = if token.is_minor { Mode::Minor } else { Mode::Major };
    let entry = key::at(index as i32 + semitones, mode);
    format!("{}{}{}", token.leading, entry, token.suffix)
}
