//! Error types for picker operations.
//!
//! Every condition here is local and recoverable. The presentation layer
//! decides whether to surface them (a "name already in the machine" notice)
//! or ignore them (blank input).

use thiserror::Error;

/// Why a spin could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinBlock {
    /// A spin is already in flight.
    AlreadySpinning,
    /// The roster is too small to pick from.
    NotEnoughNames { have: usize, need: usize },
}

impl std::fmt::Display for SpinBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpinBlock::AlreadySpinning => write!(f, "a spin is already in progress"),
            SpinBlock::NotEnoughNames { have, need } => {
                write!(f, "need at least {} names, have {}", need, have)
            }
        }
    }
}

/// Picker error types.
#[derive(Error, Debug)]
pub enum PickerError {
    /// Name was empty after trimming.
    #[error("Name is blank")]
    BlankName,

    /// Name is already on the roster (exact match).
    #[error("Name already in the machine: {0}")]
    DuplicateName(String),

    /// Spin preconditions not met.
    #[error("Cannot spin: {0}")]
    CannotSpin(SpinBlock),

    /// Operation not allowed in the current state.
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// Configuration failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration text was not valid JSON.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl PickerError {
    /// True for the two rejections `add_name` can produce.
    #[must_use]
    pub fn is_rejected_name(&self) -> bool {
        matches!(self, PickerError::BlankName | PickerError::DuplicateName(_))
    }
}

/// Result type for picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;
