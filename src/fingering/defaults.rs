//! Default values and calibration constants for fingering search
//!
//! The ergonomic constants were tuned against standard-tuning chord shapes.
//! Changing any of them changes rankings.

/// Tuning used when the caller gives none
pub const STANDARD_TUNING: &str = "E-A-D-G-B-E";

/// Octave of the lowest string when the tuning omits it
pub const DEFAULT_FIRST_OCTAVE: i32 = 2;

/// Frets searched per string (one octave)
pub const FRETS_PER_OCTAVE: u8 = 12;

/// Widest reach between two pressed frets in one hand position
pub const MAX_FRET_DISTANCE: u8 = 3;

/// Fretting fingers of the left hand (thumb excluded)
pub const PLAYING_FINGERS: usize = 4;

/// Span at which two-extreme shapes start to be rejected
pub const SHAPE_SPAN_LIMIT: u8 = 3;

/// Reference scale length for fret spacing, in centimetres
pub const SCALE_LENGTH_CM: f64 = 65.0;

/// Exponent applied to each stretch between neighbouring fingers
pub const STRETCH_EXPONENT: f64 = 1.1;

/// Flat cost added for holding a barre
pub const BARRE_PENALTY: f64 = 5.0;

/// Bonus subtracted when at most this many fingers are used
pub const FEW_FINGERS: usize = 3;
pub const FEW_FINGERS_BONUS: f64 = 3.0;

/// Difficulty floors for the coarse and fine ranking buckets
pub const COARSE_DIFFICULTY_FLOOR: f64 = 14.0;
pub const FINE_DIFFICULTY_FLOOR: f64 = 12.0;

/// Sounded strings beyond this count do not improve ranking
pub const STRING_COUNT_CAP: usize = 4;
