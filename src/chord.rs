//! Chord symbol parsing.
//!
//! Splits a raw chord token ("F#m7", "Bb7sus4", "(Am)") into a leading
//! marker, a root, a minor flag, and an opaque suffix. Only the root is ever
//! transposed; everything else is carried through verbatim.

/// A chord symbol split into its transposable and opaque parts.
///
/// `leading` holds any prefix characters before the first note character
/// (stray annotation glyphs, brackets). `root` is the note letter plus an
/// optional accidental. `suffix` is everything after the root, extensions
/// and slash bass included, reattached verbatim after transposition.
///
/// An empty `root` marks a token with no note character at all; callers
/// leave such tokens untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChordToken {
    pub leading: String,
    pub root: String,
    pub is_minor: bool,
    pub suffix: String,
}

/// Characters that can begin the note part of a chord symbol.
fn is_note_char(c: char) -> bool {
    matches!(c, 'A'..='G' | 'a'..='g' | '#')
}

/// Parse a chord symbol into a [`ChordToken`].
///
/// Minor detection happens once, on the last character of the token after
/// the leading marker is stripped: a single trailing "m" is consumed no
/// matter what precedes it. "Em" is therefore a minor E, while "Am7" parses
/// as a major root "A" with suffix "m7" (the symbol still reads correctly
/// once the root is rewritten).
///
/// # Example
/// ```
/// use chordshift::chord::parse_chord;
///
/// let token = parse_chord("Bb7sus4");
/// assert_eq!(token.root, "Bb");
/// assert_eq!(token.suffix, "7sus4");
/// assert!(!token.is_minor);
///
/// let token = parse_chord("F#m");
/// assert_eq!(token.root, "F#");
/// assert!(token.is_minor);
/// ```
pub fn parse_chord(symbol: &str) -> ChordToken {
    if symbol.is_empty() {
        return ChordToken::default();
    }

    let lead_len: usize = symbol
        .chars()
        .take_while(|c| !is_note_char(*c))
        .map(char::len_utf8)
        .sum();
    let (leading, mut main) = symbol.split_at(lead_len);

    let is_minor = main.ends_with('m');
    if is_minor {
        main = &main[..main.len() - 1];
    }

    let (root, suffix) = split_root(main);
    ChordToken {
        leading: leading.to_string(),
        root: root.to_string(),
        is_minor,
        suffix: suffix.to_string(),
    }
}

/// Split the note part into root and suffix: the root is one character, or
/// two when the second is an accidental.
fn split_root(main: &str) -> (&str, &str) {
    let mut indices = main.char_indices();
    let Some((_, first)) = indices.next() else {
        return ("", "");
    };
    match indices.next() {
        Some((_, second @ ('#' | 'b'))) => {
            main.split_at(first.len_utf8() + second.len_utf8())
        }
        Some((second_start, _)) => main.split_at(second_start),
        None => (main, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_major_chord() {
        let token = parse_chord("C");
        assert_eq!(token.leading, "");
        assert_eq!(token.root, "C");
        assert!(!token.is_minor);
        assert_eq!(token.suffix, "");
    }

    #[test]
    fn test_bare_minor_chord() {
        let token = parse_chord("Em");
        assert_eq!(token.root, "E");
        assert!(token.is_minor);
        assert_eq!(token.suffix, "");
    }

    #[test]
    fn test_accidental_roots() {
        let token = parse_chord("Bb7sus4");
        assert_eq!(token.root, "Bb");
        assert!(!token.is_minor);
        assert_eq!(token.suffix, "7sus4");

        let token = parse_chord("F#m");
        assert_eq!(token.root, "F#");
        assert!(token.is_minor);
        assert_eq!(token.suffix, "");
    }

    #[test]
    fn test_trailing_m_is_consumed_once() {
        // The final "7" blocks minor detection, so the "m" lands in the
        // suffix and the chord transposes as major.
        let token = parse_chord("Am7");
        assert_eq!(token.root, "A");
        assert!(!token.is_minor);
        assert_eq!(token.suffix, "m7");

        let token = parse_chord("F#m7");
        assert_eq!(token.root, "F#");
        assert!(!token.is_minor);
        assert_eq!(token.suffix, "m7");
    }

    #[test]
    fn test_slash_bass_stays_in_suffix() {
        let token = parse_chord("Cmaj7/E");
        assert_eq!(token.root, "C");
        assert_eq!(token.suffix, "maj7/E");
    }

    #[test]
    fn test_leading_marker_is_preserved() {
        let token = parse_chord("(Am)");
        assert_eq!(token.leading, "(");
        assert_eq!(token.root, "A");
        // The closing paren blocks minor detection; the "m" travels in the
        // suffix and the rendered symbol still reads as minor.
        assert!(!token.is_minor);
        assert_eq!(token.suffix, "m)");

        let token = parse_chord("..C");
        assert_eq!(token.leading, "..");
        assert_eq!(token.root, "C");
    }

    #[test]
    fn test_lowercase_root() {
        let token = parse_chord("em");
        assert_eq!(token.root, "e");
        assert!(token.is_minor);
    }

    #[test]
    fn test_sharp_sign_can_start_the_note_part() {
        let token = parse_chord("#5");
        assert_eq!(token.leading, "");
        assert_eq!(token.root, "#");
        assert_eq!(token.suffix, "5");
    }

    #[test]
    fn test_tokens_without_note_characters() {
        assert_eq!(parse_chord(""), ChordToken::default());

        // A lone "m" is not a note character, so it is all leading marker
        // and minor detection never sees it.
        let token = parse_chord("m");
        assert_eq!(token.leading, "m");
        assert_eq!(token.root, "");
        assert!(!token.is_minor);

        let token = parse_chord("%%");
        assert_eq!(token.leading, "%%");
        assert_eq!(token.root, "");
    }

    #[test]
    fn test_multibyte_leading_marker() {
        let token = parse_chord("♪G7");
        assert_eq!(token.leading, "♪");
        assert_eq!(token.root, "G");
        assert_eq!(token.suffix, "7");
    }
}
