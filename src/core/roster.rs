//! The roster of candidate names.
//!
//! Names keep insertion order and are unique under exact (case-sensitive)
//! comparison. Backed by `im::Vector` so the presentation layer can take a
//! snapshot in O(1) on every render.
//!
//! Serializes as a plain list of names. Deserializing replays every entry
//! through `Roster::add`, so blank or duplicate input is rejected.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::{PickerError, Result};

/// Ordered list of unique names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Roster {
    names: Vector<String>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name, trimming surrounding whitespace.
    ///
    /// Returns the name as stored.
    pub fn add(&mut self, name: &str) -> Result<&str> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PickerError::BlankName);
        }
        if self.contains(trimmed) {
            return Err(PickerError::DuplicateName(trimmed.to_string()));
        }
        self.names.push_back(trimmed.to_string());
        let last = self.names.len() - 1;
        Ok(self.names[last].as_str())
    }

    /// Remove a name. Returns `false` if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every name.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Exact-match membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Index of a name in display order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Name at a display position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// O(1) snapshot of the names for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Vector<String> {
        self.names.clone()
    }
}

impl TryFrom<Vec<String>> for Roster {
    type Error = PickerError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        let mut roster = Roster::new();
        for name in &names {
            roster.add(name)?;
        }
        Ok(roster)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.names.into_iter().collect()
    }
}
