//! Pitch classes and octave-qualified pitches
//!
//! Western note names only: a letter with up to two sharps or flats, and an
//! optional octave number in scientific pitch notation. The octave number
//! follows the letter, so `B#3` sounds the same as `C4`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest and highest octave numbers accepted in note names
pub const MIN_OCTAVE: i32 = -1;
pub const MAX_OCTAVE: i32 = 10;

/// Natural note letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Semitones above C
    pub fn semitones(&self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Position in the C-based letter sequence (C = 0 .. B = 6)
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|l| l == self).unwrap_or(0)
    }

    /// Letter `steps` diatonic steps above this one, wrapping at B
    pub fn step_up(&self, steps: usize) -> Letter {
        Self::ALL[(self.index() + steps) % 7]
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// Accidental applied to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone offset from the natural letter
    pub fn semitone_offset(&self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    pub fn from_offset(offset: i32) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Parse the accidental part of a note name
    pub fn from_symbol(symbol: &str) -> Option<Accidental> {
        match symbol {
            "" => Some(Accidental::Natural),
            "#" | "♯" => Some(Accidental::Sharp),
            "##" | "♯♯" | "x" => Some(Accidental::DoubleSharp),
            "b" | "♭" => Some(Accidental::Flat),
            "bb" | "♭♭" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }
}

/// Note name irrespective of octave, e.g. `F#`
///
/// Equality is by spelling; use [`PitchClass::is_enharmonic`] to compare sounding
/// pitch classes (`C#` and `Db`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PitchClass {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl PitchClass {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    /// Semitones above C, without wrapping (`Cb` is -1, `B#` is 12)
    pub fn semitone_offset(&self) -> i32 {
        self.letter.semitones() + self.accidental.semitone_offset()
    }

    /// Chromatic index in 0..12
    pub fn chroma(&self) -> u8 {
        self.semitone_offset().rem_euclid(12) as u8
    }

    pub fn is_enharmonic(&self, other: &PitchClass) -> bool {
        self.chroma() == other.chroma()
    }

    /// Place this class in an octave
    pub fn at_octave(&self, octave: i32) -> Pitch {
        Pitch::new(*self, octave)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.symbol())
    }
}

impl FromStr for PitchClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_note_name(s) {
            Some((class, None)) => Ok(class),
            _ => Err(format!("Invalid pitch class: '{}'", s)),
        }
    }
}

impl TryFrom<String> for PitchClass {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PitchClass> for String {
    fn from(class: PitchClass) -> String {
        class.to_string()
    }
}

/// Pitch class with an octave number, e.g. `G#3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    pub class: PitchClass,
    pub octave: i32,
}

impl Pitch {
    pub fn new(class: PitchClass, octave: i32) -> Self {
        Self { class, octave }
    }

    /// Absolute semitone position (`octave * 12 + class offset`)
    ///
    /// Pitches are ordered by this value; two spellings of the same sound
    /// (`B#3`, `C4`) share it.
    pub fn semitone(&self) -> i32 {
        self.octave * 12 + self.class.semitone_offset()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

impl FromStr for Pitch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_note_name(s) {
            Some((class, Some(octave))) => Ok(Pitch::new(class, octave)),
            _ => Err(format!("Invalid pitch: '{}'", s)),
        }
    }
}

impl TryFrom<String> for Pitch {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> String {
        pitch.to_string()
    }
}

/// Split a note token into its pitch class and optional octave
///
/// The letter is case-insensitive (`e` is accepted for the high E string);
/// accidentals are case-sensitive so that `b` after the letter means flat.
/// Octaves outside `MIN_OCTAVE..=MAX_OCTAVE` are rejected.
pub fn parse_note_name(token: &str) -> Option<(PitchClass, Option<i32>)> {
    let token = token.trim();
    let mut chars = token.chars();
    let letter = Letter::from_char(chars.next()?)?;
    let rest = chars.as_str();

    let digits_at = rest
        .find(|c: char| c.is_ascii_digit() || c == '-')
        .unwrap_or(rest.len());
    let (accidental, octave) = rest.split_at(digits_at);

    let accidental = Accidental::from_symbol(accidental)?;
    let octave = if octave.is_empty() {
        None
    } else {
        let octave = octave.parse::<i32>().ok()?;
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return None;
        }
        Some(octave)
    };

    Some((PitchClass::new(letter, accidental), octave))
}
