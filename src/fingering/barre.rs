//! Barre detection
//!
//! A barre is possible when at least two strings share the lowest pressed fret
//! and no open string sounds above (higher string index than) any of them:
//! the index finger lying across the neck would stop it.

use crate::models::fingering::pressed_frets;
use crate::models::{Barre, FretPosition};

/// Detect a barre in a fingering's positions
///
/// Returns `None` as soon as an open string follows a barre candidate, even if
/// the strings before it would have formed a barre on their own.
pub fn detect_barre(positions: &[FretPosition], string_count: usize) -> Option<Barre> {
    let min_pressed_fret = pressed_frets(positions).into_iter().min()?;

    let mut string_indices = Vec::new();
    for string_index in 0..string_count {
        let Some(position) = positions.iter().find(|p| p.string_index == string_index) else {
            continue; // muted
        };

        if position.is_open() {
            if !string_indices.is_empty() {
                return None;
            }
        } else if position.fret == min_pressed_fret {
            string_indices.push(string_index);
        }
    }

    if string_indices.len() > 1 {
        Some(Barre {
            fret: min_pressed_fret,
            string_indices,
        })
    } else {
        None
    }
}
