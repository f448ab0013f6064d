//! Difficulty scorer
//!
//! Sums the physical stretch between neighbouring fingers, measured in
//! centimetres on a reference neck so that high-fret stretches cost less than
//! the same number of frets near the nut.

use crate::fingering::defaults::{
    BARRE_PENALTY, FEW_FINGERS, FEW_FINGERS_BONUS, SCALE_LENGTH_CM, STRETCH_EXPONENT,
};
use crate::models::{Barre, FretPosition};

/// Distance of a fret from the nut, in centimetres
pub fn fret_distance_cm(fret: u8) -> f64 {
    SCALE_LENGTH_CM - SCALE_LENGTH_CM / 2f64.powf(fret as f64 / 12.0)
}

/// Pressed positions that need their own fingertip
///
/// A barre counts once, at its highest string. Falls back to every pressed
/// position when nothing else is left.
fn fingered_positions<'a>(positions: &'a [FretPosition], barre: Option<&Barre>) -> Vec<&'a FretPosition> {
    let pressed: Vec<&FretPosition> = positions.iter().filter(|p| p.is_pressed()).collect();

    let Some(barre) = barre else {
        return pressed;
    };
    let contact = barre.string_indices.last().copied();
    let considered: Vec<&FretPosition> = pressed
        .iter()
        .copied()
        .filter(|p| p.fret != barre.fret || Some(p.string_index) == contact)
        .collect();

    if considered.is_empty() {
        pressed
    } else {
        considered
    }
}

/// Stretch cost between neighbouring fingered positions, before penalties and bonuses
pub fn stretch_cost(positions: &[&FretPosition]) -> f64 {
    positions
        .windows(2)
        .map(|pair| {
            (fret_distance_cm(pair[0].fret) - fret_distance_cm(pair[1].fret))
                .abs()
                .powf(STRETCH_EXPONENT)
        })
        .sum()
}

/// Heuristic difficulty; lower is easier, never negative, rounded to 2 decimals
pub fn difficulty(positions: &[FretPosition], barre: Option<&Barre>) -> f64 {
    let considered = fingered_positions(positions, barre);

    let mut score = stretch_cost(&considered);
    if barre.is_some() {
        score += BARRE_PENALTY;
    }
    if considered.len() <= FEW_FINGERS {
        score = (score - FEW_FINGERS_BONUS).max(0.0);
    }

    (score * 100.0).round() / 100.0
}
