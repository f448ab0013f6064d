//! Instrument tuning
//!
//! A tuning is the list of open-string pitches from the lowest (thickest)
//! string. It can be written as a hyphen-delimited string (`E-A-D-G-B-e`,
//! `D2-A2-D3-G3-B3-E4`) or as a list of note names. Missing octaves are
//! inferred: the first string defaults to octave 2 and every later string is
//! placed at the lowest octave not below the string before it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TuningError;
use crate::fingering::defaults::{DEFAULT_FIRST_OCTAVE, STANDARD_TUNING};
use crate::models::pitch::{parse_note_name, Pitch};
use crate::utils::pitch_utils::note_above;

/// Tuning as supplied by a caller: hyphen-delimited string or list of notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TuningSpec {
    Text(String),
    Notes(Vec<String>),
}

impl TuningSpec {
    pub fn parse(&self) -> Result<Tuning, TuningError> {
        match self {
            TuningSpec::Text(text) => text.parse(),
            TuningSpec::Notes(notes) => Tuning::from_notes(notes),
        }
    }
}

impl Default for TuningSpec {
    fn default() -> Self {
        TuningSpec::Text(STANDARD_TUNING.to_string())
    }
}

/// Open-string pitches, index 0 = lowest (thickest) string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TuningSpec", into = "Vec<String>")]
pub struct Tuning {
    strings: Vec<Pitch>,
}

impl Tuning {
    /// Parse a list of note names, lowest string first
    pub fn from_notes<S: AsRef<str>>(notes: &[S]) -> Result<Self, TuningError> {
        if notes.is_empty() {
            return Err(TuningError::Empty);
        }

        let mut strings: Vec<Pitch> = Vec::with_capacity(notes.len());
        for token in notes {
            let token = token.as_ref().trim();
            let (class, octave) =
                parse_note_name(token).ok_or_else(|| TuningError::InvalidNote(token.to_string()))?;

            let pitch = match (octave, strings.last()) {
                (Some(octave), _) => class.at_octave(octave),
                (None, Some(previous)) => note_above(&class, previous),
                (None, None) => class.at_octave(DEFAULT_FIRST_OCTAVE),
            };
            strings.push(pitch);
        }

        Ok(Self { strings })
    }

    pub fn from_pitches(strings: Vec<Pitch>) -> Result<Self, TuningError> {
        if strings.is_empty() {
            return Err(TuningError::Empty);
        }
        Ok(Self { strings })
    }

    /// Standard six-string guitar tuning, `E2-A2-D3-G3-B3-E4`
    pub fn standard() -> Self {
        // The constant is a valid tuning; the fallback is never taken
        STANDARD_TUNING.parse().unwrap_or_else(|_| Self { strings: Vec::new() })
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn get(&self, string_index: usize) -> Option<&Pitch> {
        self.strings.get(string_index)
    }

    pub fn strings(&self) -> &[Pitch] {
        &self.strings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pitch> {
        self.strings.iter()
    }

    /// True when open-string pitches never descend from low to high string index
    pub fn is_ascending(&self) -> bool {
        self.strings
            .windows(2)
            .all(|pair| pair[0].semitone() <= pair[1].semitone())
    }

    /// Note names with octaves, e.g. `["E2", "A2", ...]`
    pub fn to_note_names(&self) -> Vec<String> {
        self.strings.iter().map(|p| p.to_string()).collect()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Tuning {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(TuningError::Empty);
        }
        let tokens: Vec<&str> = s.split('-').collect();
        Self::from_notes(&tokens)
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_note_names().join("-"))
    }
}

impl TryFrom<TuningSpec> for Tuning {
    type Error = TuningError;

    fn try_from(spec: TuningSpec) -> Result<Self, Self::Error> {
        spec.parse()
    }
}

impl From<Tuning> for Vec<String> {
    fn from(tuning: Tuning) -> Vec<String> {
        tuning.to_note_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_tuning() {
        let tuning: Tuning = "E-A-D-G-B-e".parse().unwrap();
        assert_eq!(tuning.to_note_names(), vec!["E2", "A2", "D3", "G3", "B3", "E4"]);
        assert!(tuning.is_ascending());
        assert_eq!(tuning, Tuning::standard());
    }

    #[test]
    fn test_parse_tuning_with_octaves() {
        let tuning: Tuning = "D1-A2-D3-G4-B3-e5".parse().unwrap();
        assert_eq!(tuning.to_note_names(), vec!["D1", "A2", "D3", "G4", "B3", "E5"]);
        assert!(!tuning.is_ascending());
    }

    #[test]
    fn test_parse_list_tuning() {
        let tuning = Tuning::from_notes(&["D", "A", "D", "F#", "A", "D"]).unwrap();
        assert_eq!(tuning.to_note_names(), vec!["D2", "A2", "D3", "F#3", "A3", "D4"]);

        let tuning = Tuning::from_notes(&["D2", "A2", "D3", "G3", "C4", "E4"]).unwrap();
        assert_eq!(tuning.to_note_names(), vec!["D2", "A2", "D3", "G3", "C4", "E4"]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let once: Tuning = "G4-C4-E4-A4".parse().unwrap();
        let twice: Tuning = once.to_string().parse().unwrap();
        assert_eq!(once, twice);

        let inferred: Tuning = "E-A-D-G-B-E".parse().unwrap();
        let reparsed = Tuning::from_notes(&inferred.to_note_names()).unwrap();
        assert_eq!(inferred, reparsed);
    }

    #[test]
    fn test_invalid_tunings() {
        assert_eq!("".parse::<Tuning>(), Err(TuningError::Empty));
        assert_eq!(Tuning::from_notes::<&str>(&[]), Err(TuningError::Empty));
        assert_eq!(
            "E-A-H-G".parse::<Tuning>(),
            Err(TuningError::InvalidNote("H".to_string()))
        );
        assert_eq!(
            "E--A".parse::<Tuning>(),
            Err(TuningError::InvalidNote(String::new()))
        );
    }

    #[test]
    fn test_out_of_range_octave_is_invalid() {
        assert_eq!(
            "E-A-D-G-B-E300000000".parse::<Tuning>(),
            Err(TuningError::InvalidNote("E300000000".to_string()))
        );
        assert!("E-A-D-G-B-E10".parse::<Tuning>().is_ok());
    }

    #[test]
    fn test_tuning_spec_deserialize() {
        let text: TuningSpec = serde_json::from_str("\"D-A-D-G-B-E\"").unwrap();
        let list: TuningSpec = serde_json::from_str("[\"D\",\"A\",\"D\",\"G\",\"B\",\"E\"]").unwrap();
        assert_eq!(text.parse().unwrap(), list.parse().unwrap());

        let tuning: Tuning = serde_json::from_str("\"G4-C4-E4-A4\"").unwrap();
        assert_eq!(tuning.len(), 4);
    }
}
