//! Position finder
//!
//! For every string and every target pitch class, the lowest fret (within one
//! octave of the open string) that sounds that class.

use crate::fingering::defaults::FRETS_PER_OCTAVE;
use crate::models::{FretPosition, Pitch, PitchClass, Tuning};
use crate::utils::pitch_utils::{enharmonic_equivalent, note_above, transpose};

/// Lowest fret on a string tuned to `open` that sounds `class`
pub fn find_fret(class: &PitchClass, open: &Pitch) -> u8 {
    (0..FRETS_PER_OCTAVE)
        .find(|&fret| enharmonic_equivalent(&transpose(open, fret as i32).class, class))
        .unwrap_or(0)
}

/// Position of `class` on one string
pub fn find_position(class: &PitchClass, string_index: usize, open: &Pitch) -> FretPosition {
    FretPosition::new(string_index, find_fret(class, open), note_above(class, open))
}

/// All positions of `notes` on every string, ordered by string then by note
pub fn find_positions(notes: &[PitchClass], tuning: &Tuning) -> Vec<FretPosition> {
    tuning
        .iter()
        .enumerate()
        .flat_map(|(string_index, open)| {
            notes
                .iter()
                .map(move |class| find_position(class, string_index, open))
        })
        .collect()
}
