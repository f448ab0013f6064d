//! Fretboard WASM Module
//!
//! Finds and ranks chord fingerings for fretted instruments in any tuning.
//! The engine is plain Rust and usable natively; the `api` module exports it
//! to JavaScript.

pub mod api;
pub mod chords;
pub mod errors;
pub mod fingering;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use chords::{find_chord, find_guitar_chord, Chord, GuitarChord};
pub use errors::{FingeringError, TuningError};
pub use fingering::{find_fingerings, search, ChordTarget, FingeringRequest};
pub use models::{Barre, Fingering, FretPosition, Pitch, PitchClass, StringSlot, Tuning, TuningSpec};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            wasm_warn!("Logger already initialized");
        }
    }

    log::info!("Fretboard WASM module initialized");
}
