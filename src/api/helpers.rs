//! Shared helpers for the fretboard API
//!
//! `[fretboard]`-prefixed console logging for the exported functions, plus
//! the serde and error conversions between engine types and `JsValue`.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

// ============================================================================
// Browser Console
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn console_info(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

/// Console method a message goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Prefix every API log line so it can be filtered in the browser console
const LOG_PREFIX: &str = "[fretboard]";

/// Write one prefixed line to the browser console
pub fn console(level: ConsoleLevel, msg: &str) {
    let line = format!("{} {}", LOG_PREFIX, msg);
    match level {
        ConsoleLevel::Debug => console_log(&line),
        ConsoleLevel::Info => console_info(&line),
        ConsoleLevel::Warn => console_warn(&line),
        ConsoleLevel::Error => console_error(&line),
    }
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Request tracing (parsed tunings, search sizes)
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Debug, &format!($($arg)*))
    };
}

/// Entry and exit of an exported lookup
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Warn, &format!($($arg)*))
    };
}

/// Errors handed back to JavaScript
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Error, &format!($($arg)*))
    };
}

// ============================================================================
// Serde Conversion
// ============================================================================

/// Deserialize a request value (notes, tuning, positions) from JavaScript
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

/// Serialize a result (fingerings, chords, barres) for JavaScript
///
/// Maps (including flattened structs) become plain objects rather than `Map`s.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

// ============================================================================
// Errors
// ============================================================================

/// Turn a `TuningError` / `FingeringError` into a JS error string, logging it
pub fn js_error(error: impl std::fmt::Display) -> JsValue {
    let msg = error.to_string();
    crate::wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}
