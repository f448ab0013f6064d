//! Fingering search
//!
//! Finds every reachable way to play a set of pitch classes on a fretted
//! instrument, drops the unplayable ones and ranks the rest from easiest to
//! hardest.
//!
//! Pipeline: positions → enumerate → barre → playability → difficulty → ranking.

pub mod barre;
pub mod defaults;
pub mod difficulty;
pub mod enumerate;
pub mod playability;
pub mod positions;
pub mod ranking;

use serde::{Deserialize, Serialize};

use crate::errors::FingeringError;
use crate::models::fingering::position_string;
use crate::models::{Fingering, FretPosition, PitchClass, Tuning, TuningSpec};

pub use barre::detect_barre;
pub use difficulty::difficulty;
pub use enumerate::{enumerate_fingerings, ChordTarget};
pub use playability::is_playable;
pub use positions::find_positions;
pub use ranking::rank_fingerings;

/// Fingering search request, as sent from JavaScript
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingeringRequest {
    pub notes: Vec<String>,

    #[serde(default)]
    pub optional_notes: Vec<String>,

    /// Lowest note; defaults to the first of `notes`
    #[serde(default)]
    pub bass: Option<String>,

    /// Defaults to standard guitar tuning
    #[serde(default)]
    pub tuning: Option<TuningSpec>,
}

impl FingeringRequest {
    pub fn target(&self) -> Result<ChordTarget, FingeringError> {
        let notes = parse_classes(&self.notes)?;
        let Some(&first) = notes.first() else {
            return Err(FingeringError::NoNotes);
        };
        let optional_notes = parse_classes(&self.optional_notes)?;
        let bass = match &self.bass {
            Some(bass) => parse_class(bass)?,
            None => first,
        };

        Ok(ChordTarget::new(&notes, &optional_notes, bass))
    }

    pub fn tuning(&self) -> Result<Tuning, FingeringError> {
        match &self.tuning {
            Some(spec) => Ok(spec.parse()?),
            None => Ok(Tuning::standard()),
        }
    }
}

fn parse_class(name: &str) -> Result<PitchClass, FingeringError> {
    name.trim()
        .parse()
        .map_err(|_| FingeringError::InvalidNote(name.to_string()))
}

fn parse_classes(names: &[String]) -> Result<Vec<PitchClass>, FingeringError> {
    names.iter().map(|n| parse_class(n)).collect()
}

/// Run a search request end to end
pub fn find_fingerings(request: &FingeringRequest) -> Result<Vec<Fingering>, FingeringError> {
    let target = request.target()?;
    let tuning = request.tuning()?;
    Ok(search(&target, &tuning))
}

/// Ranked, playable fingerings for `target` on `tuning`, best first
///
/// An empty list means no playable voicing exists; that is not an error.
pub fn search(target: &ChordTarget, tuning: &Tuning) -> Vec<Fingering> {
    let enumeration = enumerate_fingerings(target, tuning);
    let raw_count = enumeration.candidates.len();

    let mut fingerings: Vec<Fingering> = enumeration
        .candidates
        .into_iter()
        .filter_map(|positions| build_fingering(positions, tuning.len()))
        .collect();

    log::debug!(
        "Fingering search on {}: {} candidates, {} playable",
        tuning,
        raw_count,
        fingerings.len()
    );

    rank_fingerings(&mut fingerings, enumeration.ascending);
    fingerings
}

/// Annotate a candidate with barre, diagram and difficulty, or drop it if unplayable
pub fn build_fingering(positions: Vec<FretPosition>, string_count: usize) -> Option<Fingering> {
    let barre = detect_barre(&positions, string_count);
    if !is_playable(&positions, barre.as_ref()) {
        return None;
    }

    let difficulty = difficulty(&positions, barre.as_ref());
    Some(Fingering {
        position_string: position_string(&positions, string_count),
        positions,
        barre,
        difficulty,
    })
}
