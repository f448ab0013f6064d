//! Fingering and chord lookups for the WASM API
//!
//! Inputs arrive as plain JS values (strings, arrays, request objects) and
//! are converted with serde-wasm-bindgen; results go back the same way.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, serialize};
use crate::chords::{find_chord as lookup_chord, find_guitar_chord as lookup_guitar_chord};
use crate::errors::FingeringError;
use crate::fingering::{self, FingeringRequest};
use crate::models::{FretPosition, PitchClass, Tuning, TuningSpec};
use crate::{wasm_info, wasm_log};

fn tuning_from(value: JsValue) -> Result<Tuning, JsValue> {
    let spec: Option<TuningSpec> = deserialize(value, "Invalid tuning")?;
    match spec {
        Some(spec) => spec.parse().map_err(js_error),
        None => Ok(Tuning::standard()),
    }
}

/// Parse a tuning into note names with octaves, lowest string first
///
/// Accepts `"E-A-D-G-B-E"`, `"D2-A2-D3-G3-B3-E4"` or an array of note names.
#[wasm_bindgen(js_name = parseTuning)]
pub fn parse_tuning(spec: JsValue) -> Result<js_sys::Array, JsValue> {
    let tuning = tuning_from(spec)?;
    wasm_log!("parseTuning: {}", tuning);

    let array = js_sys::Array::new();
    for name in tuning.to_note_names() {
        array.push(&JsValue::from_str(&name));
    }
    Ok(array)
}

/// Every position of the given notes on every string, string by string
#[wasm_bindgen(js_name = findPositions)]
pub fn find_positions(notes: JsValue, tuning: JsValue) -> Result<JsValue, JsValue> {
    let names: Vec<String> = deserialize(notes, "Invalid notes")?;
    let tuning = tuning_from(tuning)?;

    let classes = names
        .iter()
        .map(|name| {
            name.trim()
                .parse::<PitchClass>()
                .map_err(|_| js_error(FingeringError::InvalidNote(name.clone())))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let positions = fingering::find_positions(&classes, &tuning);
    serialize(&positions, "Failed to serialize positions")
}

/// Ranked fingerings for a `{ notes, optionalNotes?, bass?, tuning? }` request
#[wasm_bindgen(js_name = findFingerings)]
pub fn find_fingerings(request: JsValue) -> Result<JsValue, JsValue> {
    let request: FingeringRequest = deserialize(request, "Invalid fingering request")?;
    wasm_info!("findFingerings: notes={:?} bass={:?}", request.notes, request.bass);

    let fingerings = fingering::find_fingerings(&request).map_err(js_error)?;
    wasm_info!("findFingerings: {} fingerings", fingerings.len());

    serialize(&fingerings, "Failed to serialize fingerings")
}

/// Notes and intervals of a chord symbol
#[wasm_bindgen(js_name = findChord)]
pub fn find_chord(symbol: &str) -> Result<JsValue, JsValue> {
    let chord = lookup_chord(symbol)
        .ok_or_else(|| js_error(FingeringError::UnknownChord(symbol.to_string())))?;
    serialize(&chord, "Failed to serialize chord")
}

/// Chord lookup plus fingerings; standard tuning when `tuning` is undefined
#[wasm_bindgen(js_name = findGuitarChord)]
pub fn find_guitar_chord(symbol: &str, tuning: JsValue) -> Result<JsValue, JsValue> {
    let tuning = tuning_from(tuning)?;
    wasm_info!("findGuitarChord: {} on {}", symbol, tuning);

    let chord = lookup_guitar_chord(symbol, Some(&tuning)).map_err(js_error)?;
    wasm_info!("findGuitarChord: {} fingerings", chord.fingerings.len());

    serialize(&chord, "Failed to serialize chord")
}

/// Barre of a set of positions, or `undefined` when there is none
#[wasm_bindgen(js_name = detectBarre)]
pub fn detect_barre(positions: JsValue, string_count: Option<u32>) -> Result<JsValue, JsValue> {
    let positions: Vec<FretPosition> = deserialize(positions, "Invalid positions")?;
    let string_count = string_count
        .map(|n| n as usize)
        .unwrap_or_else(|| Tuning::standard().len());

    let barre = fingering::detect_barre(&positions, string_count);
    serialize(&barre, "Failed to serialize barre")
}
