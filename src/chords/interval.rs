//! Spelled intervals (`3M`, `5P`, `7m`, `9A`, `12d`)
//!
//! Interval names are the number followed by the quality, as used in the chord
//! dictionary. Transposing by an interval moves the letter by the interval
//! number, so `C + 3m` is `Eb` and never `D#`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::pitch::{Accidental, PitchClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl Quality {
    fn from_char(c: char) -> Option<Quality> {
        match c {
            'P' => Some(Quality::Perfect),
            'M' => Some(Quality::Major),
            'm' => Some(Quality::Minor),
            'A' => Some(Quality::Augmented),
            'd' => Some(Quality::Diminished),
            _ => None,
        }
    }

    fn as_char(&self) -> char {
        match self {
            Quality::Perfect => 'P',
            Quality::Major => 'M',
            Quality::Minor => 'm',
            Quality::Augmented => 'A',
            Quality::Diminished => 'd',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interval {
    /// 1 = unison, 8 = octave, 9 = ninth, ...
    pub number: u8,
    pub quality: Quality,
}

/// Semitones of the major / perfect interval for each simple number (unison..seventh)
const BASE_SEMITONES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

impl Interval {
    /// Unisons, fourths and fifths are perfect; the rest major/minor
    fn is_perfect_kind(&self) -> bool {
        matches!((self.number - 1) % 7, 0 | 3 | 4)
    }

    /// Diatonic letter steps above the root
    pub fn steps(&self) -> usize {
        (self.number as usize - 1) % 7
    }

    pub fn semitones(&self) -> i32 {
        let index = self.steps();
        let octaves = (self.number as i32 - 1) / 7;
        let base = BASE_SEMITONES[index] + 12 * octaves;

        let adjustment = match (self.quality, self.is_perfect_kind()) {
            (Quality::Perfect, _) | (Quality::Major, _) => 0,
            (Quality::Minor, _) => -1,
            (Quality::Augmented, _) => 1,
            (Quality::Diminished, true) => -1,
            (Quality::Diminished, false) => -2,
        };
        base + adjustment
    }

    /// Spelled transposition of `root` by this interval
    ///
    /// `None` when the result would need more than two accidentals.
    pub fn transpose(&self, root: &PitchClass) -> Option<PitchClass> {
        let letter = root.letter.step_up(self.steps());
        let target = root.semitone_offset() + self.semitones();
        let offset = (target - letter.semitones() + 6).rem_euclid(12) - 6;
        Accidental::from_offset(offset).map(|accidental| PitchClass::new(letter, accidental))
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid interval: '{}'", s);
        let quality_char = s.chars().last().ok_or_else(invalid)?;
        let quality = Quality::from_char(quality_char).ok_or_else(invalid)?;
        let number: u8 = s[..s.len() - quality_char.len_utf8()]
            .parse()
            .map_err(|_| invalid())?;
        if number == 0 {
            return Err(invalid());
        }

        let interval = Interval { number, quality };
        let valid_quality = match quality {
            Quality::Perfect => interval.is_perfect_kind(),
            Quality::Major | Quality::Minor => !interval.is_perfect_kind(),
            Quality::Augmented | Quality::Diminished => true,
        };
        if valid_quality {
            Ok(interval)
        } else {
            Err(invalid())
        }
    }
}

impl TryFrom<String> for Interval {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> String {
        interval.to_string()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.quality.as_char())
    }
}
