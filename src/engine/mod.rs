//! The picker engine and its render projections.
//!
//! `PickerEngine` is the single source of truth. Views are built from it,
//! never the other way round.

pub mod picker;
pub mod view;

pub use picker::PickerEngine;
pub use view::{Controls, PickerView};
