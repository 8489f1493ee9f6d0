//! # Error Types
//!
//! The two recoverable failures of a transposition request. Both concern the
//! song-level keys, never individual chords: a chord that fails to parse or
//! to index is passed through unchanged rather than reported.

use thiserror::Error;

use crate::key::Mode;

/// Errors that can occur while transposing a song.
#[derive(Error, Debug)]
pub enum TransposeError {
    /// A song-level key is missing, empty, or not resolvable to a key table
    /// entry on a path that must index it.
    ///
    /// # Example
    /// ```
    /// use chordshift::TransposeError;
    ///
    /// let err = TransposeError::InvalidKey {
    ///     message: "original key 'X' is not a recognized key".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid key: original key 'X' is not a recognized key"
    /// );
    /// ```
    #[error("Invalid key: {message}")]
    InvalidKey { message: String },

    /// An explicit target key's mode disagrees with the original key's mode.
    ///
    /// # Example
    /// ```
    /// use chordshift::{Mode, TransposeError};
    ///
    /// let err = TransposeError::ModeMismatch {
    ///     from: Mode::Major,
    ///     to: Mode::Minor,
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Mode mismatch: cannot transpose from major to minor"
    /// );
    /// ```
    #[error("Mode mismatch: cannot transpose from {from} to {to}")]
    ModeMismatch { from: Mode, to: Mode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_display() {
        let err = TransposeError::InvalidKey {
            message: "original song key is missing or empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid key: original song key is missing or empty"
        );
    }

    #[test]
    fn test_mode_mismatch_display() {
        let err = TransposeError::ModeMismatch {
            from: Mode::Minor,
            to: Mode::Major,
        };
        assert_eq!(
            err.to_string(),
            "Mode mismatch: cannot transpose from minor to major"
        );
    }
}
