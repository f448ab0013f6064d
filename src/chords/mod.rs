//! Chord symbols
//!
//! Resolves symbols such as `Ebmaj7`, `C#m7b5` or `D/F#` to spelled notes, and
//! combines the lookup with the fingering search.

pub mod dictionary;
pub mod interval;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::FingeringError;
use crate::fingering::{search, ChordTarget};
use crate::models::{Fingering, PitchClass, Tuning};
use crate::utils::{contains_class, transpose_by_interval};

pub use dictionary::{find_quality, ChordQuality, CHORD_QUALITIES};
pub use interval::Interval;

lazy_static! {
    static ref SLASH_BASS: Option<Regex> = Regex::new(r"/([A-G][#b]?)$").ok();
    static ref TONIC_AND_QUALITY: Option<Regex> = Regex::new(r"^([A-G][#b]?)(.*)$").ok();
}

/// A resolved chord symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub symbol: String,
    pub tonic: PitchClass,
    pub intervals: Vec<Interval>,
    pub optional_intervals: Vec<Interval>,
    pub required_intervals: Vec<Interval>,
    /// Chord tones, root first; a slash bass outside the chord is appended
    pub notes: Vec<PitchClass>,
    pub optional_notes: Vec<PitchClass>,
    pub required_notes: Vec<PitchClass>,
    pub bass: PitchClass,
    pub description: String,
}

impl Chord {
    pub fn target(&self) -> ChordTarget {
        ChordTarget::new(&self.notes, &self.optional_notes, self.bass)
    }
}

/// A chord together with its ranked fingerings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuitarChord {
    #[serde(flatten)]
    pub chord: Chord,
    pub fingerings: Vec<Fingering>,
}

/// Split `D/F#` into `("D", Some(F#))`
fn split_slash_bass(symbol: &str) -> Option<(&str, Option<PitchClass>)> {
    let slash = SLASH_BASS.as_ref()?;
    match slash.captures(symbol) {
        Some(caps) => {
            let whole = caps.get(0)?;
            let bass = caps.get(1)?.as_str().parse().ok()?;
            Some((&symbol[..whole.start()], Some(bass)))
        }
        None => Some((symbol, None)),
    }
}

fn transpose_all(tonic: &PitchClass, intervals: &[Interval]) -> Option<Vec<PitchClass>> {
    intervals
        .iter()
        .map(|interval| transpose_by_interval(tonic, interval))
        .collect()
}

/// Look up a chord symbol
///
/// The tonic is an upper-case letter with an optional `#` or `b`; the rest
/// must be a quality symbol from the dictionary. Returns `None` for anything
/// unrecognised.
pub fn find_chord(symbol: &str) -> Option<Chord> {
    let symbol = symbol.trim();
    let (base, slash_bass) = split_slash_bass(symbol)?;

    let caps = TONIC_AND_QUALITY.as_ref()?.captures(base)?;
    let tonic: PitchClass = caps.get(1)?.as_str().parse().ok()?;
    let quality = find_quality(caps.get(2).map_or("", |m| m.as_str()))?;

    let required_intervals: Vec<Interval> = quality
        .intervals
        .iter()
        .filter(|i| !quality.optional_intervals.contains(i))
        .copied()
        .collect();

    let mut notes = transpose_all(&tonic, &quality.intervals)?;
    let optional_notes = transpose_all(&tonic, &quality.optional_intervals)?;
    let required_notes: Vec<PitchClass> = notes
        .iter()
        .filter(|n| !optional_notes.contains(n))
        .copied()
        .collect();

    let bass = match slash_bass {
        Some(bass) => {
            if !contains_class(&notes, &bass) {
                notes.push(bass);
            }
            bass
        }
        None => tonic,
    };

    Some(Chord {
        symbol: symbol.to_string(),
        tonic,
        intervals: quality.intervals.clone(),
        optional_intervals: quality.optional_intervals.clone(),
        required_intervals,
        notes,
        optional_notes,
        required_notes,
        bass,
        description: quality.description.to_string(),
    })
}

/// Look up a chord symbol and find its fingerings
///
/// Uses standard tuning when `tuning` is `None`.
pub fn find_guitar_chord(symbol: &str, tuning: Option<&Tuning>) -> Result<GuitarChord, FingeringError> {
    let chord = find_chord(symbol).ok_or_else(|| FingeringError::UnknownChord(symbol.to_string()))?;

    let standard;
    let tuning = match tuning {
        Some(tuning) => tuning,
        None => {
            standard = Tuning::standard();
            &standard
        }
    };

    let fingerings = search(&chord.target(), tuning);
    log::debug!("{}: {} fingerings on {}", chord.symbol, fingerings.len(), tuning);

    Ok(GuitarChord { chord, fingerings })
}
