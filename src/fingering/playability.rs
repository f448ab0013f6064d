//! Playability filter
//!
//! Rejects fingerings that need more than four fretting fingers, and shapes
//! that pin all four fingers to the two extremes of a wide span.

use crate::fingering::defaults::{PLAYING_FINGERS, SHAPE_SPAN_LIMIT};
use crate::models::fingering::pressed_frets;
use crate::models::{Barre, FretPosition};

pub fn is_playable(positions: &[FretPosition], barre: Option<&Barre>) -> bool {
    within_finger_count(positions, barre) && is_plausible_shape(positions, barre)
}

/// Four fingers without a barre; three besides the barring index finger
pub fn within_finger_count(positions: &[FretPosition], barre: Option<&Barre>) -> bool {
    let pressed = pressed_frets(positions);
    match barre {
        None => pressed.len() <= PLAYING_FINGERS,
        Some(barre) => {
            pressed.iter().filter(|&&fret| fret != barre.fret).count() <= PLAYING_FINGERS - 1
        }
    }
}

/// Without a barre, a span of three or more frets may not put all four
/// fingers on its lowest and highest frets
pub fn is_plausible_shape(positions: &[FretPosition], barre: Option<&Barre>) -> bool {
    if barre.is_some() {
        return true;
    }

    let pressed = pressed_frets(positions);
    let (Some(&min), Some(&max)) = (pressed.iter().min(), pressed.iter().max()) else {
        return true;
    };
    if max - min < SHAPE_SPAN_LIMIT {
        return true;
    }

    let at_min = pressed.iter().filter(|&&fret| fret == min).count();
    let at_max = pressed.iter().filter(|&&fret| fret == max).count();
    at_min + at_max != PLAYING_FINGERS
}
