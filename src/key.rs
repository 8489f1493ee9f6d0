//! Key tables and enharmonic normalization.
//!
//! The twelve pitch classes live in two parallel, fixed-order tables:
//! [`MAJOR_KEYS`] and [`MINOR_KEYS`] (the same entries with an "m" appended).
//! All interval math is index arithmetic over these tables, reduced with true
//! modulo so negative deltas wrap (index -1 is "B").
//!
//! Keys arrive as free-form strings ("Bb", " f#m ", "DBm"); [`normalize`]
//! rewrites them into the tables' sharp spelling. Normalization is
//! best-effort: malformed input is returned as spelled and simply fails the
//! table lookup, so callers check membership with [`index_of`] before
//! indexing.

use std::fmt;

/// The twelve pitch classes in canonical sharp spelling, in chromatic order.
pub const MAJOR_KEYS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// The parallel minor keys: the same pitch classes with an "m" suffix.
pub const MINOR_KEYS: [&str; 12] = [
    "Cm", "C#m", "Dm", "D#m", "Em", "Fm", "F#m", "Gm", "G#m", "Am", "A#m", "Bm",
];

/// Flat spellings rewritten to their sharp equivalents during normalization.
const FLAT_TO_SHARP: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

/// Major or minor quality of a key or chord, inferred from a trailing "m".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl Mode {
    fn table(self) -> &'static [&'static str; 12] {
        match self {
            Mode::Major => &MAJOR_KEYS,
            Mode::Minor => &MINOR_KEYS,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => write!(f, "major"),
            Mode::Minor => write!(f, "minor"),
        }
    }
}

/// Mode of a raw key string: minor iff it ends in a lowercase "m".
pub fn mode_of(key: &str) -> Mode {
    if key.trim().ends_with('m') {
        Mode::Minor
    } else {
        Mode::Major
    }
}

/// Normalize a raw key string into the tables' sharp spelling.
///
/// Trims whitespace, detects and strips a trailing minor marker, fixes the
/// root's casing ("bb" becomes "Bb", "f#" becomes "F#"), rewrites flats to
/// sharps, and reattaches the minor marker.
///
/// # Example
/// ```
/// use chordshift::key::normalize;
///
/// assert_eq!(normalize("Bb"), "A#");
/// assert_eq!(normalize("Dbm"), "C#m");
/// assert_eq!(normalize(" f# "), "F#");
/// ```
///
/// The output is not guaranteed to be a table entry for malformed input;
/// check membership with [`index_of`].
pub fn normalize(key: &str) -> String {
    let key = key.trim();
    if key.is_empty() {
        return String::new();
    }

    let minor = key.ends_with('m');
    let bare = if minor { &key[..key.len() - 1] } else { key };

    let mut root = spell_root(bare);
    if let Some((_, sharp)) = FLAT_TO_SHARP.iter().find(|(flat, _)| *flat == root) {
        root = (*sharp).to_string();
    }
    if minor {
        root.push('m');
    }
    root
}

/// Fix the casing of a bare root: a two-character root ending in an
/// accidental keeps the accidental verbatim with the letter uppercased;
/// anything else is capitalized the plain way (first character uppercased,
/// the rest lowercased).
fn spell_root(bare: &str) -> String {
    let mut chars = bare.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    match (rest.chars().count(), rest.chars().next()) {
        (1, Some(accidental @ ('#' | 'b'))) => {
            format!("{}{}", first.to_ascii_uppercase(), accidental)
        }
        _ => format!("{}{}", first.to_uppercase(), rest.to_lowercase()),
    }
}

/// Position of a normalized key in its mode's table, if it is a table entry.
pub fn index_of(key: &str, mode: Mode) -> Option<usize> {
    mode.table().iter().position(|entry| *entry == key)
}

/// Table entry at `index`, reduced with true modulo into [0, 11].
///
/// Negative indices wrap: `at(-1, Mode::Major)` is "B".
pub fn at(index: i32, mode: Mode) -> &'static str {
    mode.table()[index.rem_euclid(12) as usize]
}

/// Signed table-index difference between two normalized keys.
///
/// Deliberately not reduced modulo 12: transposing from "B" to "C" yields
/// -11, not +1. The per-chord rewrite reduces the shift with true modulo, so
/// the long-way delta lands on the same pitch class either way.
pub fn delta_between(from: &str, to: &str, mode: Mode) -> Option<i32> {
    let from = index_of(from, mode)? as i32;
    let to = index_of(to, mode)? as i32;
    Some(to - from)
}
