//! Win evaluation for a resolved grid.
//!
//! Only the center row and the center cell matter:
//!
//! | Mode   | Center row equal       | Otherwise           |
//! |--------|------------------------|---------------------|
//! | Single | `Jackpot { grid[4] }`  | `Single { grid[4] }` |
//! | Triple | `Triple { row }`       | `Single { grid[4] }` |
//!
//! Triple mode falls back to a single center-cell winner on a mismatch.

use serde::{Deserialize, Serialize};

use crate::core::config::GameMode;
use crate::core::grid::{Grid, PLACEHOLDER};

/// Outcome of a spin.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpinResult {
    /// Center cell winner, no row match.
    Single { winner: String },
    /// Center row all equal in Single mode.
    Jackpot { winner: String },
    /// Center row all equal in Triple mode.
    Triple { winners: [String; 3] },
}

impl SpinResult {
    /// Every winner named by this result, in grid order.
    ///
    /// A `Triple` result repeats the same name three times.
    #[must_use]
    pub fn winners(&self) -> &[String] {
        match self {
            SpinResult::Single { winner } | SpinResult::Jackpot { winner } => {
                std::slice::from_ref(winner)
            }
            SpinResult::Triple { winners } => &winners[..],
        }
    }

    /// The name the result is about.
    #[must_use]
    pub fn primary(&self) -> &str {
        match self {
            SpinResult::Single { winner } | SpinResult::Jackpot { winner } => winner.as_str(),
            SpinResult::Triple { winners } => winners[0].as_str(),
        }
    }

    /// True if `name` is among the winners.
    #[must_use]
    pub fn is_winner(&self, name: &str) -> bool {
        self.winners().iter().any(|w| w == name)
    }

    /// True for the row-match outcomes.
    #[must_use]
    pub fn is_jackpot(&self) -> bool {
        matches!(self, SpinResult::Jackpot { .. } | SpinResult::Triple { .. })
    }

    /// Banner headline.
    #[must_use]
    pub fn headline(&self) -> String {
        match self {
            SpinResult::Single { winner } => format!("🎯 Winner: {}", winner),
            SpinResult::Jackpot { .. } => "🎰 JACKPOT! 🎰".to_string(),
            SpinResult::Triple { .. } => "🎰 Center Row Winners!".to_string(),
        }
    }

    /// Banner sub-line.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            SpinResult::Single { .. } => "Selected from the center cell!",
            SpinResult::Jackpot { .. } => "Center cell winner!",
            SpinResult::Triple { .. } => "All center row cells match! INCREDIBLE!",
        }
    }
}

/// True if the three center row cells hold the same real name.
#[must_use]
pub fn center_row_matches(grid: &Grid) -> bool {
    let [a, b, c] = grid.center_row();
    a == b && b == c && a != PLACEHOLDER
}

/// Decide the outcome of a grid under a mode.
///
/// Pure and deterministic: the same grid and mode always give the same
/// result, however long after the draw it is called.
#[must_use]
pub fn evaluate(grid: &Grid, mode: GameMode) -> SpinResult {
    let matched = center_row_matches(grid);
    let center = grid.center().to_string();

    match (mode, matched) {
        (GameMode::Single, true) => SpinResult::Jackpot { winner: center },
        (GameMode::Triple, true) => SpinResult::Triple {
            winners: grid.center_row().map(str::to_string),
        },
        (_, false) => SpinResult::Single { winner: center },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_grid(a: &str, b: &str, c: &str) -> Grid {
        Grid::from_strs(["x", "y", "z", a, b, c, "u", "v", "w"])
    }

    #[test]
    fn test_single_mode_jackpot() {
        let result = evaluate(&row_grid("Bob", "Bob", "Bob"), GameMode::Single);
        assert_eq!(result, SpinResult::Jackpot { winner: "Bob".into() });
        assert!(result.is_jackpot());
    }

    #[test]
    fn test_single_mode_center_cell() {
        let result = evaluate(&row_grid("Alice", "Bob", "Bob"), GameMode::Single);
        assert_eq!(result, SpinResult::Single { winner: "Bob".into() });
        assert!(!result.is_jackpot());
    }

    #[test]
    fn test_triple_mode_row_match() {
        let result = evaluate(&row_grid("Eve", "Eve", "Eve"), GameMode::Triple);
        assert_eq!(
            result,
            SpinResult::Triple {
                winners: ["Eve".into(), "Eve".into(), "Eve".into()]
            }
        );
        assert_eq!(result.winners().len(), 3);
        assert_eq!(result.primary(), "Eve");
    }

    #[test]
    fn test_triple_mode_falls_back_to_center() {
        let result = evaluate(&row_grid("Alice", "Bob", "Alice"), GameMode::Triple);
        assert_eq!(result, SpinResult::Single { winner: "Bob".into() });
    }

    #[test]
    fn test_placeholder_row_never_matches() {
        let grid = Grid::placeholder();
        assert!(!center_row_matches(&grid));
        assert_eq!(
            evaluate(&grid, GameMode::Triple),
            SpinResult::Single { winner: PLACEHOLDER.into() }
        );
    }

    #[test]
    fn test_outer_rows_ignored() {
        let grid = Grid::from_strs(["A", "A", "A", "A", "B", "C", "A", "A", "A"]);
        assert_eq!(evaluate(&grid, GameMode::Single), SpinResult::Single { winner: "B".into() });
        assert_eq!(evaluate(&grid, GameMode::Triple), SpinResult::Single { winner: "B".into() });
    }

    #[test]
    fn test_banner_text() {
        let single = SpinResult::Single { winner: "Diana".into() };
        assert_eq!(single.headline(), "🎯 Winner: Diana");
        assert_eq!(single.message(), "Selected from the center cell!");

        let jackpot = SpinResult::Jackpot { winner: "Diana".into() };
        assert_eq!(jackpot.headline(), "🎰 JACKPOT! 🎰");

        let triple = SpinResult::Triple {
            winners: ["D".into(), "D".into(), "D".into()],
        };
        assert_eq!(triple.message(), "All center row cells match! INCREDIBLE!");
    }

    #[test]
    fn test_is_winner() {
        let result = SpinResult::Single { winner: "Frank".into() };
        assert!(result.is_winner("Frank"));
        assert!(!result.is_winner("frank"));
    }

    #[test]
    fn test_result_serde() {
        let result = SpinResult::Jackpot { winner: "Bob".into() };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"type":"jackpot","winner":"Bob"}"#);
        let back: SpinResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
