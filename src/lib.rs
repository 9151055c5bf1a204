//! # name-slots
//!
//! A slot-machine style random name picker.
//!
//! Users add names, pull the lever, and a 3x3 grid of names is drawn. In
//! Single mode the center cell wins; in Triple mode the center row wins when
//! all three cells match, otherwise the center cell does. A matching center
//! row is a jackpot in either mode.
//!
//! ## Design Principles
//!
//! 1. **Caller-owned**: No global engine. Hosts construct a `PickerEngine`
//!    and drive it.
//!
//! 2. **Injected randomness**: Every draw goes through a `RandomSource`, so
//!    any outcome can be reproduced from a seed or a fixed script.
//!
//! 3. **Two-phase spins**: `begin_spin` fixes the outcome, `finish_spin`
//!    evaluates it. Animation delays live in the host, between the two.
//!
//! ## Example
//!
//! ```
//! use name_slots::{GameMode, PickerConfig, PickerEngine, PickerRng};
//!
//! let mut engine = PickerEngine::new(PickerConfig::default()).unwrap();
//! let mut rng = PickerRng::new(7);
//!
//! engine.set_mode(GameMode::Triple).unwrap();
//! let (grid, result) = engine.spin(&mut rng).unwrap();
//! assert!(result.is_winner(grid.center()));
//!
//! engine.remove_winners().unwrap();
//! assert_eq!(engine.roster().len(), 5);
//! ```
//!
//! ## Modules
//!
//! - `core`: Roster, grid, randomness, configuration, errors
//! - `rules`: Pure win evaluation
//! - `events`: Notifications for the presentation layer
//! - `engine`: The picker state machine and render projections

pub mod core;
pub mod rules;
pub mod events;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameMode, PickerConfig, DEFAULT_EVENT_CAPACITY, DEFAULT_NAMES, MIN_NAMES_TO_SPIN,
    PickerError, Result, SpinBlock,
    Grid, CELL_COUNT, CENTER, CENTER_ROW, PLACEHOLDER,
    PickerRng, PickerRngState, RandomSource, ScriptedSource,
    Roster,
};

pub use crate::rules::{evaluate, center_row_matches, SpinResult};

pub use crate::events::{EventQueue, PickerEvent};

pub use crate::engine::{Controls, PickerEngine, PickerView};
