//! Data models for fingering search
//!
//! Pitches, tunings and the fretboard positions built from them.

pub mod fingering;
pub mod pitch;
pub mod tuning;

// Re-export commonly used types
pub use fingering::{Barre, Fingering, FretPosition, StringSlot};
pub use pitch::{Accidental, Letter, Pitch, PitchClass};
pub use tuning::{Tuning, TuningSpec};
