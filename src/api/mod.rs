//! Fretboard WASM API
//!
//! The JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serde conversion and error conversion
//! - `fingerings`: tuning parsing, position lookup, fingering search and chord lookup

pub mod helpers;
pub mod fingerings;

pub use fingerings::{
    detect_barre, find_chord, find_fingerings, find_guitar_chord, find_positions, parse_tuning,
};
