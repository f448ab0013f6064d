//! Error types for fingering search
//!
//! Tuning parsing has its own error type so callers that only parse tunings
//! can match on it; everything else surfaces through `FingeringError`.

use thiserror::Error;

/// Malformed tuning
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuningError {
    /// No strings were given
    #[error("Tuning is empty")]
    Empty,

    /// A string token is not a note name (with optional octave)
    #[error("Invalid note in tuning: '{0}'")]
    InvalidNote(String),
}

/// Top-level error type for fingering and chord lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingeringError {
    #[error("Invalid tuning: {0}")]
    InvalidTuning(#[from] TuningError),

    /// A target note could not be parsed as a pitch class
    #[error("Invalid note: '{0}'")]
    InvalidNote(String),

    /// The request named no target notes
    #[error("No notes to finger")]
    NoNotes,

    /// Chord symbol not found in the dictionary
    #[error("Unknown chord symbol: '{0}'")]
    UnknownChord(String),
}
