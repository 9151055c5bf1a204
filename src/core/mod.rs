//! Core picker types: roster, grid, randomness, configuration, errors.
//!
//! These are the building blocks the engine and the rules are made of.
//! Nothing here knows about spins in flight or results.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;
pub mod roster;

pub use config::{GameMode, PickerConfig, DEFAULT_EVENT_CAPACITY, DEFAULT_NAMES, MIN_NAMES_TO_SPIN};
pub use error::{PickerError, Result, SpinBlock};
pub use grid::{Grid, CELL_COUNT, CENTER, CENTER_ROW, PLACEHOLDER};
pub use rng::{PickerRng, PickerRngState, RandomSource, ScriptedSource};
pub use roster::Roster;
