//! Shared pitch arithmetic
//!
//! Transposition, semitone distance and enharmonic comparison used by the
//! tuning parser, the position finder and the chord dictionary.

use crate::chords::interval::Interval;
use crate::models::pitch::{parse_note_name, Accidental, Letter, Pitch, PitchClass};

/// Sharp spellings for each chroma, used when a transposition cannot keep its letter
const SHARP_SPELLINGS: [(Letter, Accidental); 12] = [
    (Letter::C, Accidental::Natural),
    (Letter::C, Accidental::Sharp),
    (Letter::D, Accidental::Natural),
    (Letter::D, Accidental::Sharp),
    (Letter::E, Accidental::Natural),
    (Letter::F, Accidental::Natural),
    (Letter::F, Accidental::Sharp),
    (Letter::G, Accidental::Natural),
    (Letter::G, Accidental::Sharp),
    (Letter::A, Accidental::Natural),
    (Letter::A, Accidental::Sharp),
    (Letter::B, Accidental::Natural),
];

/// Split a note token into its pitch class and optional octave (`"Bb"`, `"e5"`, `"F#-1"`)
pub fn parse_note(token: &str) -> Option<(PitchClass, Option<i32>)> {
    parse_note_name(token)
}

/// Transpose a pitch by a number of semitones
///
/// Whole-octave moves keep the spelling; anything else is respelled with sharps.
pub fn transpose(pitch: &Pitch, semitones: i32) -> Pitch {
    if semitones.rem_euclid(12) == 0 {
        return Pitch::new(pitch.class, pitch.octave + semitones / 12);
    }

    let target = pitch.semitone() + semitones;
    let (letter, accidental) = SHARP_SPELLINGS[target.rem_euclid(12) as usize];
    Pitch::new(PitchClass::new(letter, accidental), target.div_euclid(12))
}

/// Signed distance in semitones from `from` to `to`
pub fn distance(from: &Pitch, to: &Pitch) -> i32 {
    to.semitone() - from.semitone()
}

pub fn enharmonic_equivalent(a: &PitchClass, b: &PitchClass) -> bool {
    a.is_enharmonic(b)
}

/// Lowest pitch of `class` at or above `reference`
///
/// Keeps the spelling of `class`, e.g. `D` above `G3` is `D4`, `C` above `C4` is `C4`.
pub fn note_above(class: &PitchClass, reference: &Pitch) -> Pitch {
    let mut octave = reference.octave;
    while class.at_octave(octave).semitone() < reference.semitone() {
        octave += 1;
    }
    while class.at_octave(octave - 1).semitone() >= reference.semitone() {
        octave -= 1;
    }
    class.at_octave(octave)
}

/// Spelled transposition of a pitch class, `None` past double accidentals
pub fn transpose_by_interval(class: &PitchClass, interval: &Interval) -> Option<PitchClass> {
    interval.transpose(class)
}

/// True when `class` appears in `classes`, allowing for enharmonic spelling
pub fn contains_class(classes: &[PitchClass], class: &PitchClass) -> bool {
    classes.iter().any(|c| enharmonic_equivalent(c, class))
}

/// Drop enharmonic repeats, keeping the first spelling of each class
pub fn unique_classes(classes: &[PitchClass]) -> Vec<PitchClass> {
    let mut unique: Vec<PitchClass> = Vec::with_capacity(classes.len());
    for class in classes {
        if !contains_class(&unique, class) {
            unique.push(*class);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(s: &str) -> Pitch {
        s.parse().unwrap()
    }

    fn class(s: &str) -> PitchClass {
        s.parse().unwrap()
    }

    #[test]
    fn test_note_above() {
        assert_eq!(note_above(&class("C"), &pitch("D4")), pitch("C5"));
        assert_eq!(note_above(&class("C"), &pitch("C4")), pitch("C4"));
        assert_eq!(note_above(&class("C#"), &pitch("C#2")), pitch("C#2"));
        assert_eq!(note_above(&class("D"), &pitch("G3")), pitch("D4"));
        assert_eq!(note_above(&class("E#"), &pitch("G3")), pitch("E#4"));
    }

    #[test]
    fn test_note_above_respects_letter_octaves() {
        // Cb4 sounds as B3, so it already sits at the reference
        assert_eq!(note_above(&class("Cb"), &pitch("B3")), pitch("Cb4"));
        // B#3 sounds as C4
        assert_eq!(note_above(&class("B#"), &pitch("C4")), pitch("B#3"));
    }

    #[test]
    fn test_transpose() {
        assert_eq!(transpose(&pitch("E2"), 0), pitch("E2"));
        assert_eq!(transpose(&pitch("E2"), 12), pitch("E3"));
        assert_eq!(transpose(&pitch("Eb2"), -12), pitch("Eb1"));
        assert_eq!(transpose(&pitch("E2"), 4), pitch("G#2"));
        assert_eq!(transpose(&pitch("B3"), 1), pitch("C4"));
        assert_eq!(transpose(&pitch("C4"), -1), pitch("B3"));
    }

    #[test]
    fn test_parse_note() {
        assert_eq!(parse_note("Bb"), Some((class("Bb"), None)));
        assert_eq!(parse_note("e5"), Some((class("E"), Some(5))));
        assert_eq!(parse_note("H2"), None);
    }

    #[test]
    fn test_transpose_by_interval() {
        let minor_third: Interval = "3m".parse().unwrap();
        assert_eq!(transpose_by_interval(&class("A"), &minor_third), Some(class("C")));
        assert_eq!(transpose_by_interval(&class("F#"), &minor_third), Some(class("A")));
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(&pitch("C4"), &pitch("G4")), 7);
        assert_eq!(distance(&pitch("G4"), &pitch("C4")), -7);
        assert_eq!(distance(&pitch("E2"), &pitch("E4")), 24);
    }

    #[test]
    fn test_enharmonic_equivalent() {
        assert!(enharmonic_equivalent(&class("C#"), &class("Db")));
        assert!(enharmonic_equivalent(&class("E#"), &class("F")));
        assert!(!enharmonic_equivalent(&class("E"), &class("F")));
        assert!(contains_class(&[class("A"), class("Gb")], &class("F#")));
    }

    #[test]
    fn test_unique_classes_keeps_first_spelling() {
        let unique = unique_classes(&[class("C"), class("E"), class("B#"), class("G"), class("E")]);
        assert_eq!(unique, vec![class("C"), class("E"), class("G")]);
    }
}
