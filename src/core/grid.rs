//! The 3x3 slot grid.
//!
//! Cells are indexed 0-8 row-major:
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5   <- center row, 4 is the center cell
//!  6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::rng::RandomSource;
use super::roster::Roster;

/// Value shown in every cell while the roster is empty.
pub const PLACEHOLDER: &str = "???";

/// Number of cells in the grid.
pub const CELL_COUNT: usize = 9;

/// Indices of the center row.
pub const CENTER_ROW: [usize; 3] = [3, 4, 5];

/// Index of the center cell.
pub const CENTER: usize = 4;

/// A resolved 3x3 grid of names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [String; CELL_COUNT],
}

impl Grid {
    /// Build a grid from explicit cell values.
    #[must_use]
    pub fn from_cells(cells: [String; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Build a grid from string slices.
    ///
    /// ```
    /// use name_slots::core::Grid;
    ///
    /// let grid = Grid::from_strs(["A", "B", "C", "Bob", "Bob", "Bob", "D", "E", "F"]);
    /// assert_eq!(grid.center(), "Bob");
    /// ```
    #[must_use]
    pub fn from_strs(cells: [&str; CELL_COUNT]) -> Self {
        Self {
            cells: cells.map(str::to_string),
        }
    }

    /// A grid of placeholders.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            cells: std::array::from_fn(|_| PLACEHOLDER.to_string()),
        }
    }

    /// Draw a fresh grid from the roster.
    ///
    /// Each cell is an independent uniform draw with replacement. An empty
    /// roster yields the placeholder grid without consuming randomness.
    /// Indices past the roster wrap, so every cell holds a roster name.
    pub fn draw<R: RandomSource + ?Sized>(roster: &Roster, source: &mut R) -> Self {
        if roster.is_empty() {
            return Self::placeholder();
        }
        let len = roster.len();
        Self {
            cells: std::array::from_fn(|_| {
                let index = source.next_index(len);
                roster.get(index % len).unwrap_or(PLACEHOLDER).to_string()
            }),
        }
    }

    /// Cell value by index, `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[String; CELL_COUNT] {
        &self.cells
    }

    /// The center cell.
    #[must_use]
    pub fn center(&self) -> &str {
        &self.cells[CENTER]
    }

    /// The three center row values.
    #[must_use]
    pub fn center_row(&self) -> [&str; 3] {
        CENTER_ROW.map(|i| self.cells[i].as_str())
    }

    /// A row by index (0-2).
    #[must_use]
    pub fn row(&self, row: usize) -> Option<[&str; 3]> {
        if row >= 3 {
            return None;
        }
        let start = row * 3;
        Some([
            self.cells[start].as_str(),
            self.cells[start + 1].as_str(),
            self.cells[start + 2].as_str(),
        ])
    }

    /// True if every cell is the placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.cells.iter().all(|c| c == PLACEHOLDER)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl Index<usize> for Grid {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.cells[index]
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let start = row * 3;
            writeln!(
                f,
                "{} | {} | {}",
                self.cells[start],
                self.cells[start + 1],
                self.cells[start + 2]
            )?;
        }
        Ok(())
    }
}
