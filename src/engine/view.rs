//! Read-only projections of engine state for rendering.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameMode, Grid};
use crate::rules::SpinResult;

/// Which controls should be enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    /// Lever / spin button.
    pub can_spin: bool,
    /// "Clear all" button.
    pub can_clear: bool,
    /// "Remove winner(s)" button.
    pub can_remove_winners: bool,
    /// Mode selector.
    pub can_change_mode: bool,
    /// Name input.
    pub can_add: bool,
}

/// Everything a frame of the UI needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerView {
    pub names: Vector<String>,
    pub grid: Grid,
    pub mode: GameMode,
    /// Mode selector caption.
    pub mode_label: String,
    pub spinning: bool,
    pub result: Option<SpinResult>,
    pub headline: String,
    pub controls: Controls,
}

impl PickerView {
    /// True if the roster entry at `name` should be highlighted.
    #[must_use]
    pub fn is_highlighted(&self, name: &str) -> bool {
        self.result.as_ref().is_some_and(|r| r.is_winner(name))
    }

    /// Name count shown next to the roster.
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.names.len()
    }
}
