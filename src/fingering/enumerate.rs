//! Fingering enumerator
//!
//! Grows partial fingerings string by string from every bass candidate. On
//! each string a partial fingering branches once per reachable position; when
//! nothing is reachable the string is muted and the branch carries on. The
//! growth is depth-first, so only the current partial fingering is held while
//! finished candidates come out in the same order a layer-by-layer expansion
//! would give.
//!
//! The search runs over the tuning sorted by open-string pitch. For tunings
//! that already ascend this is the caller's own order and the bass can be
//! pruned by string index and pitch. Re-entrant tunings (ukulele, some
//! alternate tunings) lose those guarantees, so every position becomes a bass
//! candidate and the pitch check is skipped.

use crate::fingering::defaults::MAX_FRET_DISTANCE;
use crate::fingering::positions::find_positions;
use crate::models::{FretPosition, PitchClass, StringSlot, Tuning};
use crate::utils::pitch_utils::{contains_class, enharmonic_equivalent, unique_classes};

/// Mapping between the caller's string order and the pitch-sorted search order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOrder {
    /// `physical[searched_index]` is the caller's string index
    physical: Vec<usize>,
    ascending: bool,
}

impl SearchOrder {
    pub fn for_tuning(tuning: &Tuning) -> Self {
        let ascending = tuning.is_ascending();
        let mut physical: Vec<usize> = (0..tuning.len()).collect();
        if !ascending {
            physical.sort_by_key(|&i| tuning.strings()[i].semitone());
        }
        Self { physical, ascending }
    }

    /// True when the caller's tuning is already pitch-ascending
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn physical_index(&self, searched_index: usize) -> usize {
        self.physical[searched_index]
    }

    /// The tuning in search order
    pub fn searched_tuning(&self, tuning: &Tuning) -> Tuning {
        let strings = self.physical.iter().map(|&i| tuning.strings()[i]).collect();
        // Same strings as the non-empty input tuning
        Tuning::from_pitches(strings).unwrap_or_else(|_| tuning.clone())
    }
}

/// Notes a fingering has to realise
#[derive(Debug, Clone)]
pub struct ChordTarget {
    pub notes: Vec<PitchClass>,
    pub optional_notes: Vec<PitchClass>,
    pub bass: PitchClass,
}

impl ChordTarget {
    /// Build a target, dropping repeated (or enharmonically repeated) notes
    pub fn new(notes: &[PitchClass], optional_notes: &[PitchClass], bass: PitchClass) -> Self {
        Self {
            notes: unique_classes(notes),
            optional_notes: unique_classes(optional_notes),
            bass,
        }
    }

    /// Distinct notes, first spelling kept
    pub fn unique_notes(&self) -> Vec<PitchClass> {
        unique_classes(&self.notes)
    }

    pub fn required_notes(&self) -> Vec<PitchClass> {
        self.unique_notes()
            .into_iter()
            .filter(|n| !contains_class(&self.optional_notes, n))
            .collect()
    }
}

/// Raw candidates, before barre detection and filtering
#[derive(Debug, Clone)]
pub struct Enumeration {
    /// Positions per candidate, in the caller's string indices, sorted by string
    pub candidates: Vec<Vec<FretPosition>>,
    pub ascending: bool,
}

/// Per-search state shared by every branch
struct Grower<'a> {
    by_string: &'a [Vec<&'a FretPosition>],
    bass: FretPosition,
    ascending: bool,
}

impl Grower<'_> {
    /// Depth-first growth from `partial`, calling `emit` for each complete fingering
    fn grow(&self, partial: &mut Vec<StringSlot>, string_index: usize, emit: &mut dyn FnMut(&[StringSlot])) {
        let Some(on_string) = self.by_string.get(string_index) else {
            emit(partial);
            return;
        };

        for slot in reachable_slots(partial, on_string, &self.bass, self.ascending) {
            partial.push(slot);
            self.grow(partial, string_index + 1, emit);
            partial.pop();
        }
    }
}

pub fn enumerate_fingerings(target: &ChordTarget, tuning: &Tuning) -> Enumeration {
    let order = SearchOrder::for_tuning(tuning);
    let searched = order.searched_tuning(tuning);
    let notes = target.unique_notes();
    let positions = find_positions(&notes, &searched);
    let required = target.required_notes();

    let basses = bass_candidates(&positions, target, &required, searched.len(), order.is_ascending());
    log::debug!(
        "Enumerating {} bass candidates over {} positions (ascending tuning: {})",
        basses.len(),
        positions.len(),
        order.is_ascending()
    );

    let by_string: Vec<Vec<&FretPosition>> = (0..searched.len())
        .map(|string_index| positions.iter().filter(|p| p.string_index == string_index).collect())
        .collect();

    let mut candidates = Vec::new();
    for bass in basses {
        let grower = Grower {
            by_string: &by_string,
            bass,
            ascending: order.is_ascending(),
        };
        let mut partial = vec![StringSlot::Placed(bass)];
        grower.grow(&mut partial, bass.string_index + 1, &mut |slots| {
            let fingering = placed_positions(slots);
            if realises_all(&fingering, &required) {
                candidates.push(to_physical(fingering, &order));
            }
        });
    }

    Enumeration {
        candidates,
        ascending: order.is_ascending(),
    }
}

/// Positions that may sound the bass
fn bass_candidates(
    positions: &[FretPosition],
    target: &ChordTarget,
    required: &[PitchClass],
    string_count: usize,
    ascending: bool,
) -> Vec<FretPosition> {
    if !ascending {
        return positions.to_vec();
    }

    // Leave enough strings above the bass for every required note
    let mut max_bass_string = string_count as isize - required.len() as isize;
    if !contains_class(required, &target.bass) {
        max_bass_string -= 1;
    }

    positions
        .iter()
        .filter(|p| enharmonic_equivalent(&p.note.class, &target.bass))
        .filter(|p| p.string_index as isize <= max_bass_string)
        .copied()
        .collect()
}

/// Choices for the next string: every reachable position, or a mute when there is none
fn reachable_slots(
    partial: &[StringSlot],
    on_string: &[&FretPosition],
    bass: &FretPosition,
    ascending: bool,
) -> Vec<StringSlot> {
    let reachable: Vec<StringSlot> = on_string
        .iter()
        .filter(|p| is_reachable(partial, p))
        .filter(|p| !ascending || p.note.semitone() >= bass.note.semitone())
        .map(|p| StringSlot::Placed(**p))
        .collect();

    if reachable.is_empty() {
        vec![StringSlot::Muted]
    } else {
        reachable
    }
}

/// Open strings are always reachable; fretted notes must stay within reach of
/// every finger already down
fn is_reachable(partial: &[StringSlot], position: &FretPosition) -> bool {
    position.is_open()
        || partial
            .iter()
            .filter_map(StringSlot::position)
            .filter(|p| p.is_pressed())
            .all(|p| p.fret.abs_diff(position.fret) <= MAX_FRET_DISTANCE)
}

fn placed_positions(slots: &[StringSlot]) -> Vec<FretPosition> {
    slots.iter().filter_map(StringSlot::position).copied().collect()
}

fn realises_all(positions: &[FretPosition], required: &[PitchClass]) -> bool {
    required
        .iter()
        .all(|note| positions.iter().any(|p| enharmonic_equivalent(&p.note.class, note)))
}

fn to_physical(positions: Vec<FretPosition>, order: &SearchOrder) -> Vec<FretPosition> {
    let mut positions: Vec<FretPosition> = positions
        .into_iter()
        .map(|p| FretPosition {
            string_index: order.physical_index(p.string_index),
            ..p
        })
        .collect();
    positions.sort_by_key(|p| p.string_index);
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<PitchClass> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    fn target(notes: &[&str], optional: &[&str], bass: &str) -> ChordTarget {
        ChordTarget {
            notes: classes(notes),
            optional_notes: classes(optional),
            bass: bass.parse().unwrap(),
        }
    }

    fn frets(positions: &[FretPosition]) -> Vec<(usize, u8)> {
        positions.iter().map(|p| (p.string_index, p.fret)).collect()
    }

    #[test]
    fn test_search_order_for_standard_tuning() {
        let order = SearchOrder::for_tuning(&Tuning::standard());
        assert!(order.is_ascending());
        assert_eq!(order.physical_index(3), 3);
    }

    #[test]
    fn test_search_order_follows_tuning_direction() {
        let unison: Tuning = "D3-D3-A3".parse().unwrap();
        assert_eq!(SearchOrder::for_tuning(&unison).is_ascending(), unison.is_ascending());
        assert!(unison.is_ascending());
    }

    #[test]
    fn test_search_order_for_reentrant_tuning() {
        let ukulele: Tuning = "G4-C4-E4-A4".parse().unwrap();
        let order = SearchOrder::for_tuning(&ukulele);
        assert!(!order.is_ascending());
        // C4, E4, G4, A4
        assert_eq!(
            (0..4).map(|i| order.physical_index(i)).collect::<Vec<_>>(),
            vec![1, 2, 0, 3]
        );
        assert_eq!(order.searched_tuning(&ukulele).to_string(), "C4-E4-G4-A4");
    }

    #[test]
    fn test_required_notes() {
        let c6 = target(&["C", "E", "G", "A"], &["G"], "C");
        assert_eq!(c6.required_notes(), classes(&["C", "E", "A"]));
    }

    #[test]
    fn test_enumerates_open_e_major() {
        let result = enumerate_fingerings(&target(&["E", "G#", "B"], &[], "E"), &Tuning::standard());
        assert!(result.ascending);
        assert!(result
            .candidates
            .iter()
            .any(|c| frets(c) == vec![(0, 0), (1, 2), (2, 2), (3, 1), (4, 0), (5, 0)]));
    }

    #[test]
    fn test_candidates_start_on_bass_and_ascend() {
        let result = enumerate_fingerings(&target(&["C", "E", "G"], &[], "C"), &Tuning::standard());
        assert!(!result.candidates.is_empty());
        for candidate in &result.candidates {
            let bass = candidate[0];
            assert_eq!(bass.note.class.to_string(), "C");
            assert!(candidate.iter().all(|p| p.note.semitone() >= bass.note.semitone()));
            assert!(candidate.windows(2).all(|w| w[0].string_index < w[1].string_index));
        }
    }

    #[test]
    fn test_bass_leaves_room_for_required_notes() {
        let tuning = Tuning::standard();
        let highest_bass_string = |t: &ChordTarget| {
            let positions = find_positions(&t.notes, &tuning);
            bass_candidates(&positions, t, &t.required_notes(), tuning.len(), true)
                .iter()
                .map(|p| p.string_index)
                .max()
        };

        // Four required notes on six strings
        assert_eq!(highest_bass_string(&target(&["C", "E", "G", "A"], &[], "C")), Some(2));
        // Optional fifth frees one more string
        assert_eq!(highest_bass_string(&target(&["C", "E", "G", "A"], &["G"], "C")), Some(3));
        // A bass outside the required notes needs a string of its own
        assert_eq!(highest_bass_string(&target(&["C", "E", "G", "A"], &["C"], "C")), Some(2));
    }

    #[test]
    fn test_unreachable_strings_are_muted() {
        let note = "C4".parse().unwrap();
        let bass = FretPosition::new(0, 8, note);
        let partial = vec![StringSlot::Placed(bass)];

        let far = FretPosition::new(1, 2, note);
        assert_eq!(reachable_slots(&partial, &[&far], &bass, false), vec![StringSlot::Muted]);

        let open = FretPosition::new(1, 0, note);
        let near = FretPosition::new(1, 10, note);
        assert_eq!(
            reachable_slots(&partial, &[&far, &open, &near], &bass, false),
            vec![StringSlot::Placed(open), StringSlot::Placed(near)]
        );
    }

    #[test]
    fn test_notes_below_bass_are_skipped_on_ascending_tunings() {
        let bass = FretPosition::new(0, 0, "E3".parse().unwrap());
        let lower = FretPosition::new(1, 0, "D3".parse().unwrap());
        let partial = vec![StringSlot::Placed(bass)];

        assert_eq!(reachable_slots(&partial, &[&lower], &bass, true), vec![StringSlot::Muted]);
        assert_eq!(
            reachable_slots(&partial, &[&lower], &bass, false),
            vec![StringSlot::Placed(lower)]
        );
    }

    #[test]
    fn test_repeated_notes_do_not_duplicate_candidates() {
        let tuning = Tuning::standard();
        let plain = enumerate_fingerings(&target(&["C", "E", "G"], &[], "C"), &tuning);
        let repeated = enumerate_fingerings(&target(&["C", "E", "G", "G", "B#"], &[], "C"), &tuning);
        assert_eq!(plain.candidates, repeated.candidates);
    }

    #[test]
    fn test_new_target_drops_repeats() {
        let t = ChordTarget::new(&classes(&["C", "E", "G", "B#"]), &classes(&["G", "G"]), "C".parse().unwrap());
        assert_eq!(t.notes, classes(&["C", "E", "G"]));
        assert_eq!(t.optional_notes, classes(&["G"]));
        assert_eq!(t.required_notes(), classes(&["C", "E"]));
    }

    #[test]
    fn test_pressed_frets_stay_within_reach() {
        let result = enumerate_fingerings(&target(&["B", "D#", "F#"], &[], "B"), &Tuning::standard());
        for candidate in &result.candidates {
            let pressed: Vec<u8> = candidate.iter().filter(|p| p.fret > 0).map(|p| p.fret).collect();
            if let (Some(min), Some(max)) = (pressed.iter().min(), pressed.iter().max()) {
                assert!(max - min <= MAX_FRET_DISTANCE);
            }
        }
    }

    #[test]
    fn test_reentrant_tuning_maps_back_to_physical_strings() {
        let ukulele: Tuning = "G4-C4-E4-A4".parse().unwrap();
        let result = enumerate_fingerings(&target(&["C", "E", "G"], &[], "C"), &ukulele);
        assert!(!result.ascending);
        // The classic 0003 C chord: G4 open, C4 open, E4 open, C5 on fret 3
        assert!(result
            .candidates
            .iter()
            .any(|c| frets(c) == vec![(0, 0), (1, 0), (2, 0), (3, 3)]));
    }

    #[test]
    fn test_impossible_target_yields_nothing() {
        let two_strings: Tuning = "E-A".parse().unwrap();
        let result = enumerate_fingerings(&target(&["C", "E", "G"], &[], "C"), &two_strings);
        assert!(result.candidates.is_empty());
    }
}
