//! Plain-text rendering of chord-annotated lyrics: a chord row above each
//! lyric row, chords padded out to their character columns.

use crate::song::{LyricLine, Song};

/// Render a lyric sheet as chords-over-lyrics text.
///
/// Each line with chords gets a chord row first. Every chord lands at its
/// annotation's character column, or one space after the previous chord when
/// that chord already runs past the column. Columns count characters, not
/// bytes, so multi-byte lyrics stay aligned.
///
/// # Example
/// ```
/// use chordshift::{to_chord_text, ChordAnnotation, LyricLine};
///
/// let lines = vec![LyricLine::new(
///     "Amazing grace".to_string(),
///     vec![
///         ChordAnnotation::new("C".to_string(), 0),
///         ChordAnnotation::new("F".to_string(), 10),
///     ],
/// )];
/// assert_eq!(to_chord_text(&lines), "C         F\nAmazing grace\n");
/// ```
pub fn to_chord_text(lyrics: &[LyricLine]) -> String {
    let mut out = String::new();
    for line in lyrics {
        let chords = chord_row(line);
        if !chords.is_empty() {
            out.push_str(&chords);
            out.push('\n');
        }
        out.push_str(&line.text);
        out.push('\n');
    }
    out
}

/// Render a whole song with its header: "title - artist", the key line, a
/// blank separator, then the sheet.
pub fn song_to_chord_text(song: &Song) -> String {
    let mut out = String::new();
    if !song.title.is_empty() {
        out.push_str(&song.title);
        if !song.artist.is_empty() {
            out.push_str(" - ");
            out.push_str(&song.artist);
        }
        out.push('\n');
    }
    if !song.key.is_empty() {
        out.push_str("Key: ");
        out.push_str(&song.key);
        out.push('\n');
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&to_chord_text(&song.lyrics));
    out
}

fn chord_row(line: &LyricLine) -> String {
    let mut row = String::new();
    let mut width = 0;
    for annotation in &line.chords {
        if annotation.chord.is_empty() {
            continue;
        }
        if width < annotation.position {
            for _ in width..annotation.position {
                row.push(' ');
            }
            width = annotation.position;
        } else if width > 0 {
            row.push(' ');
            width += 1;
        }
        row.push_str(&annotation.chord);
        width += annotation.chord.chars().count();
    }
    row
}
