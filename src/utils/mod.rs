//! Utility functions for pitch arithmetic

pub mod pitch_utils;

pub use pitch_utils::{
    contains_class, distance, enharmonic_equivalent, note_above, parse_note, transpose,
    transpose_by_interval, unique_classes,
};
