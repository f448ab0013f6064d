//! Fretboard positions and fingerings
//!
//! A fingering lists only the strings that sound; a string without a position
//! is muted. Positions are kept sorted by string index.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::pitch::Pitch;

/// A single fretted (or open) note on one string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FretPosition {
    /// Zero-based string index, 0 = lowest (thickest) string
    pub string_index: usize,

    /// Fret number, 0 = open string
    pub fret: u8,

    /// Sounding pitch, spelled as the target pitch class
    pub note: Pitch,
}

impl FretPosition {
    pub fn new(string_index: usize, fret: u8, note: Pitch) -> Self {
        Self {
            string_index,
            fret,
            note,
        }
    }

    pub fn is_open(&self) -> bool {
        self.fret == 0
    }

    pub fn is_pressed(&self) -> bool {
        self.fret > 0
    }
}

/// Outcome for one string while a fingering is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringSlot {
    Placed(FretPosition),
    Muted,
}

impl StringSlot {
    pub fn position(&self) -> Option<&FretPosition> {
        match self {
            StringSlot::Placed(position) => Some(position),
            StringSlot::Muted => None,
        }
    }
}

/// One finger pressing several strings at the same fret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub fret: u8,
    pub string_indices: Vec<usize>,
}

/// A playable assignment of frets to strings, with its derived attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fingering {
    pub positions: Vec<FretPosition>,
    pub barre: Option<Barre>,

    /// Compact diagram, one token per string (`x32010`, `8-10-10-9-8-8`)
    pub position_string: String,

    pub difficulty: f64,
}

impl Fingering {
    /// Frets of all pressed (non-open) positions, in string order
    pub fn pressed_frets(&self) -> Vec<u8> {
        pressed_frets(&self.positions)
    }

    /// Highest pressed fret, 0 when every string is open
    pub fn max_fret(&self) -> u8 {
        self.pressed_frets().into_iter().max().unwrap_or(0)
    }

    /// Lowest pressed fret, 0 when every string is open
    pub fn min_fret(&self) -> u8 {
        self.pressed_frets().into_iter().min().unwrap_or(0)
    }

    pub fn sounded_strings(&self) -> usize {
        self.positions.len()
    }

    /// Muted strings strictly between the lowest and highest sounded string
    pub fn inner_muted_strings(&self) -> usize {
        match (self.positions.first(), self.positions.last()) {
            (Some(first), Some(last)) => {
                last.string_index - first.string_index + 1 - self.positions.len()
            }
            _ => 0,
        }
    }

    /// Distinct sounding pitches per sounded string (1.0 = no doubled notes)
    pub fn distinct_note_ratio(&self) -> f64 {
        if self.positions.is_empty() {
            return 0.0;
        }
        let distinct: HashSet<i32> = self.positions.iter().map(|p| p.note.semitone()).collect();
        distinct.len() as f64 / self.positions.len() as f64
    }

    /// Fret of the lowest-index sounded string
    pub fn bass_fret(&self) -> u8 {
        self.positions.first().map(|p| p.fret).unwrap_or(0)
    }
}

pub fn pressed_frets(positions: &[FretPosition]) -> Vec<u8> {
    positions
        .iter()
        .filter(|p| p.is_pressed())
        .map(|p| p.fret)
        .collect()
}

/// Fret diagram in physical string order
///
/// Muted strings are `x`. Frets are concatenated when all are single digits,
/// otherwise joined with hyphens.
pub fn position_string(positions: &[FretPosition], string_count: usize) -> String {
    let tokens: Vec<String> = (0..string_count)
        .map(|i| match positions.iter().find(|p| p.string_index == i) {
            Some(position) => position.fret.to_string(),
            None => "x".to_string(),
        })
        .collect();

    let separator = if positions.iter().any(|p| p.fret > 9) { "-" } else { "" };
    tokens.join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(string_index: usize, fret: u8, note: &str) -> FretPosition {
        FretPosition::new(string_index, fret, note.parse().unwrap())
    }

    fn fingering(positions: Vec<FretPosition>) -> Fingering {
        let position_string = position_string(&positions, 6);
        Fingering {
            positions,
            barre: None,
            position_string,
            difficulty: 0.0,
        }
    }

    #[test]
    fn test_position_string() {
        let c = vec![
            pos(1, 3, "C3"),
            pos(2, 2, "E3"),
            pos(3, 0, "G3"),
            pos(4, 1, "C4"),
            pos(5, 0, "E4"),
        ];
        assert_eq!(position_string(&c, 6), "x32010");

        let high = vec![pos(2, 10, "C4"), pos(3, 9, "E4"), pos(4, 8, "G4"), pos(5, 0, "E4")];
        assert_eq!(position_string(&high, 6), "x-x-10-9-8-0");
    }

    #[test]
    fn test_fret_stats() {
        let f = fingering(vec![
            pos(1, 3, "C3"),
            pos(2, 2, "E3"),
            pos(3, 0, "G3"),
            pos(4, 1, "C4"),
            pos(5, 0, "E4"),
        ]);
        assert_eq!(f.pressed_frets(), vec![3, 2, 1]);
        assert_eq!(f.max_fret(), 3);
        assert_eq!(f.min_fret(), 1);
        assert_eq!(f.bass_fret(), 3);
        assert_eq!(f.inner_muted_strings(), 0);
        assert_eq!(f.distinct_note_ratio(), 1.0);
    }

    #[test]
    fn test_inner_muted_and_doubling() {
        let f = fingering(vec![pos(0, 3, "G2"), pos(2, 0, "D3"), pos(3, 0, "G3"), pos(5, 3, "G4")]);
        assert_eq!(f.inner_muted_strings(), 2);
        assert_eq!(f.distinct_note_ratio(), 1.0);

        let doubled = fingering(vec![pos(1, 3, "C3"), pos(2, 5, "G3"), pos(3, 0, "G3")]);
        assert!((doubled.distinct_note_ratio() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_open_strings() {
        let f = fingering(vec![pos(0, 0, "E2"), pos(5, 0, "E4")]);
        assert_eq!(f.max_fret(), 0);
        assert_eq!(f.min_fret(), 0);
        assert!(f.pressed_frets().is_empty());
    }

    #[test]
    fn test_string_slot() {
        let placed = StringSlot::Placed(pos(0, 0, "E2"));
        assert_eq!(placed.position().map(|p| p.fret), Some(0));
        assert!(StringSlot::Muted.position().is_none());
    }
}
