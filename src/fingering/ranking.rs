//! Ranker
//!
//! Orders fingerings best-first with a cascade of comparisons; the first one
//! that tells two fingerings apart decides. Where the "lower max fret, then
//! lower difficulty" step sits depends on whether the tuning ascends.

use std::cmp::Ordering;

use crate::fingering::defaults::{
    COARSE_DIFFICULTY_FLOOR, FINE_DIFFICULTY_FLOOR, STRING_COUNT_CAP,
};
use crate::models::Fingering;

/// Sort fingerings best-first; ties keep their enumeration order
pub fn rank_fingerings(fingerings: &mut [Fingering], ascending_tuning: bool) {
    fingerings.sort_by(|a, b| compare_fingerings(a, b, ascending_tuning));
}

/// `Less` when `a` should be offered before `b`
pub fn compare_fingerings(a: &Fingering, b: &Fingering, ascending_tuning: bool) -> Ordering {
    let by_strings = capped_strings(b).cmp(&capped_strings(a));
    let by_inner_mutes = a.inner_muted_strings().cmp(&b.inner_muted_strings());

    let ordering = by_strings.then(by_inner_mutes);
    let ordering = if ascending_tuning {
        ordering
    } else {
        ordering.then_with(|| by_reach(a, b))
    };

    ordering
        .then_with(|| b.distinct_note_ratio().total_cmp(&a.distinct_note_ratio()))
        .then_with(|| floored(a, COARSE_DIFFICULTY_FLOOR).total_cmp(&floored(b, COARSE_DIFFICULTY_FLOOR)))
        .then_with(|| a.bass_fret().cmp(&b.bass_fret()))
        .then_with(|| floored(a, FINE_DIFFICULTY_FLOOR).total_cmp(&floored(b, FINE_DIFFICULTY_FLOOR)))
        .then_with(|| {
            if ascending_tuning {
                by_reach(a, b)
            } else {
                Ordering::Equal
            }
        })
}

fn capped_strings(fingering: &Fingering) -> usize {
    fingering.sounded_strings().min(STRING_COUNT_CAP)
}

/// Difficulties below `floor` all count as `floor`
fn floored(fingering: &Fingering, floor: f64) -> f64 {
    fingering.difficulty.max(floor)
}

/// Lower maximum fret, then lower raw difficulty
fn by_reach(a: &Fingering, b: &Fingering) -> Ordering {
    a.max_fret()
        .cmp(&b.max_fret())
        .then_with(|| a.difficulty.total_cmp(&b.difficulty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fingering::position_string;
    use crate::models::FretPosition;

    fn fingering(frets: &[Option<(u8, &str)>], difficulty: f64) -> Fingering {
        let positions: Vec<FretPosition> = frets
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.map(|(fret, note)| FretPosition::new(i, fret, note.parse().unwrap())))
            .collect();
        Fingering {
            position_string: position_string(&positions, frets.len()),
            positions,
            barre: None,
            difficulty,
        }
    }

    #[test]
    fn test_more_strings_first_up_to_four() {
        let three = fingering(&[None, None, None, Some((5, "C4")), Some((5, "E4")), Some((3, "G4"))], 0.0);
        let four = fingering(&[None, None, Some((2, "E3")), Some((0, "G3")), Some((1, "C4")), Some((0, "E4"))], 9.0);
        assert_eq!(compare_fingerings(&four, &three, true), Ordering::Less);
    }

    #[test]
    fn test_fewer_inner_mutes_first() {
        let gap = fingering(&[Some((3, "G2")), None, Some((0, "D3")), Some((0, "G3")), Some((0, "B3")), Some((3, "G4"))], 0.0);
        let full = fingering(&[Some((3, "G2")), Some((2, "B2")), Some((0, "D3")), Some((0, "G3")), Some((0, "B3")), Some((3, "G4"))], 8.0);
        assert_eq!(compare_fingerings(&full, &gap, true), Ordering::Less);
    }

    #[test]
    fn test_doubled_notes_rank_lower() {
        // x35050 doubles G3 and E4; x32010 sounds five distinct pitches
        let doubled = fingering(&[None, Some((3, "C3")), Some((5, "G3")), Some((0, "G3")), Some((5, "E4")), Some((0, "E4"))], 4.13);
        let distinct = fingering(&[None, Some((3, "C3")), Some((2, "E3")), Some((0, "G3")), Some((1, "C4")), Some((0, "E4"))], 4.55);
        assert_eq!(compare_fingerings(&distinct, &doubled, true), Ordering::Less);
    }

    #[test]
    fn test_bass_fret_breaks_coarse_ties() {
        let low = fingering(&[None, Some((3, "C3")), Some((2, "E3")), Some((0, "G3")), Some((1, "C4")), Some((0, "E4"))], 4.55);
        let high = fingering(&[None, None, Some((10, "C4")), Some((9, "E4")), Some((8, "G4")), Some((8, "C5"))], 1.84);
        assert_eq!(compare_fingerings(&low, &high, true), Ordering::Less);
    }

    #[test]
    fn test_reach_position_depends_on_tuning_order() {
        // Same shape quality; `a` has a lower bass fret but reaches higher
        let a = fingering(&[Some((0, "G4")), Some((4, "E4")), Some((3, "A4")), Some((5, "D5"))], 6.0);
        let b = fingering(&[Some((2, "A4")), Some((2, "E4")), Some((1, "F4")), Some((3, "C5"))], 6.0);
        assert_eq!(compare_fingerings(&a, &b, true), Ordering::Less);
        assert_eq!(compare_fingerings(&a, &b, false), Ordering::Greater);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let first = fingering(&[None, Some((3, "C3")), Some((2, "E3")), Some((0, "G3")), Some((1, "C4")), Some((0, "E4"))], 4.55);
        let mut second = first.clone();
        second.position_string = "tie".to_string();
        let mut list = vec![first.clone(), second.clone()];
        rank_fingerings(&mut list, true);
        assert_eq!(list[0].position_string, first.position_string);
        assert_eq!(list[1].position_string, "tie");
    }
}
