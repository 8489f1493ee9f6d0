//! Transposition of chord-annotated song lyrics between musical keys.
//!
//! A song's lyric sheet is a sequence of lines, each carrying free text and
//! chord annotations anchored at character positions. Given the song's key,
//! the engine rewrites every chord either one key up or down or to an
//! explicit target key, preserving suffixes ("m7", "sus4", slash bass),
//! leading glyphs, positions, and line order. Keys and roots are spelled
//! into a fixed sharp canon ("Bb" becomes "A#") before any table lookup.
//!
//! # Example
//! ```
//! use chordshift::{transpose_up, ChordAnnotation, LyricLine, Song};
//!
//! let song = Song {
//!     title: "Amazing Grace".to_string(),
//!     key: "C".to_string(),
//!     lyrics: vec![LyricLine::new(
//!         "Amazing grace, how sweet the sound".to_string(),
//!         vec![
//!             ChordAnnotation::new("C".to_string(), 0),
//!             ChordAnnotation::new("F".to_string(), 14),
//!         ],
//!     )],
//!     ..Song::default()
//! };
//!
//! let result = transpose_up(&song)?;
//! assert_eq!(result.transposed_key, "C#");
//! assert_eq!(result.transposed_lyrics[0].chords[1].chord, "F#");
//! # Ok::<(), chordshift::TransposeError>(())
//! ```

pub mod chord;
pub mod error;
pub mod key;
pub mod render;
pub mod song;
pub mod transpose;

pub use chord::{parse_chord, ChordToken};
pub use error::TransposeError;
pub use key::{normalize, Mode, MAJOR_KEYS, MINOR_KEYS};
pub use render::{song_to_chord_text, to_chord_text};
pub use song::{ChordAnnotation, LyricLine, Song};
pub use transpose::{
    transpose, transpose_chord, Direction, SongTransposeResult, TransposeRequest, TransposeResult,
};

/// Transpose a song by direction or explicit target key.
/// This is the main entry point for the library.
///
/// A present, non-empty `target_key` wins over `direction`; with neither,
/// the song's sheet and key are echoed unchanged.
pub fn transpose_song(
    song: &Song,
    direction: Direction,
    target_key: Option<&str>,
) -> Result<SongTransposeResult, TransposeError> {
    let request = TransposeRequest {
        original_key: song.key.clone(),
        lyrics: song.lyrics.clone(),
        direction,
        target_key: target_key.map(str::to_string),
    };
    let result = transpose(&request)?;
    Ok(SongTransposeResult {
        title: song.title.clone(),
        artist: song.artist.clone(),
        original_key: result.original_key,
        transposed_key: result.transposed_key,
        transposed_lyrics: result.transposed_lyrics,
    })
}

/// Transpose a song up one key.
pub fn transpose_up(song: &Song) -> Result<SongTransposeResult, TransposeError> {
    transpose_song(song, Direction::Up, None)
}

/// Transpose a song down one key.
pub fn transpose_down(song: &Song) -> Result<SongTransposeResult, TransposeError> {
    transpose_song(song, Direction::Down, None)
}

/// Transpose a song to an explicit target key of the same mode.
pub fn transpose_to_key(
    song: &Song,
    target_key: &str,
) -> Result<SongTransposeResult, TransposeError> {
    transpose_song(song, Direction::None, Some(target_key))
}
