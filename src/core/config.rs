//! Picker configuration types.
//!
//! Hosts configure the engine at startup by providing a `PickerConfig`,
//! either through the builder methods or as JSON text.

use serde::{Deserialize, Serialize};

use super::error::{PickerError, Result};
use super::rng::PickerRng;

/// Which cells decide the winner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum GameMode {
    /// One winner from the center cell.
    #[default]
    Single,
    /// Three winners when the center row aligns, else the center cell.
    Triple,
}

impl GameMode {
    /// Short label for mode selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GameMode::Single => "🎯 Single Winner Mode",
            GameMode::Triple => "🎰 Triple Winners Mode",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Single => write!(f, "single"),
            GameMode::Triple => write!(f, "triple"),
        }
    }
}

impl std::str::FromStr for GameMode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(GameMode::Single),
            "triple" => Ok(GameMode::Triple),
            other => Err(PickerError::InvalidConfig(format!("unknown game mode: {}", other))),
        }
    }
}

impl TryFrom<String> for GameMode {
    type Error = PickerError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Smallest roster that can ever spin. `min_names_to_spin` may only raise it.
pub const MIN_NAMES_TO_SPIN: usize = 2;

/// Default cap on undrained events.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Names seeded into a fresh machine so it is playable straight away.
pub const DEFAULT_NAMES: [&str; 6] = ["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank"];

/// Complete picker configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Names added to the roster on construction, in order.
    pub names: Vec<String>,

    /// Smallest roster that may spin. Never below `MIN_NAMES_TO_SPIN`.
    pub min_names_to_spin: usize,

    /// Undrained events kept before the oldest are dropped.
    pub event_capacity: usize,

    /// Mode the engine starts in.
    pub mode: GameMode,

    /// Seed for a reproducible RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAMES.iter().map(|n| n.to_string()).collect(),
            min_names_to_spin: MIN_NAMES_TO_SPIN,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            mode: GameMode::Single,
            seed: None,
        }
    }
}

impl PickerConfig {
    /// Create the default configuration (six sample names).
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with an empty starting roster.
    pub fn empty() -> Self {
        Self {
            names: Vec::new(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the starting roster.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Append one starting name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Set the minimum roster size for spinning.
    #[must_use]
    pub fn with_min_names_to_spin(mut self, min: usize) -> Self {
        self.min_names_to_spin = min;
        self
    }

    /// Set how many undrained events the engine keeps.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Set the starting mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_names_to_spin < MIN_NAMES_TO_SPIN {
            return Err(PickerError::InvalidConfig(format!(
                "min_names_to_spin must be at least {}",
                MIN_NAMES_TO_SPIN
            )));
        }
        if self.event_capacity == 0 {
            return Err(PickerError::InvalidConfig(
                "event_capacity must be at least 1".to_string(),
            ));
        }
        let mut seen = rustc_hash::FxHashSet::default();
        for name in &self.names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(PickerError::InvalidConfig("blank starting name".to_string()));
            }
            if !seen.insert(trimmed) {
                return Err(PickerError::InvalidConfig(format!(
                    "duplicate starting name: {}",
                    trimmed
                )));
            }
        }
        Ok(())
    }

    /// Build the RNG this configuration asks for.
    #[must_use]
    pub fn rng(&self) -> PickerRng {
        match self.seed {
            Some(seed) => PickerRng::new(seed),
            None => PickerRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PickerConfig::default();
        assert_eq!(config.names.len(), 6);
        assert_eq!(config.names[0], "Alice");
        assert_eq!(config.min_names_to_spin, 2);
        assert_eq!(config.mode, GameMode::Single);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PickerConfig::empty()
            .with_name("Ann")
            .with_name("Ben")
            .with_mode(GameMode::Triple)
            .with_min_names_to_spin(3)
            .with_seed(7);

        assert_eq!(config.names, vec!["Ann", "Ben"]);
        assert_eq!(config.mode, GameMode::Triple);
        assert_eq!(config.min_names_to_spin, 3);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = PickerConfig::from_json(r#"{"names": ["X", "Y"], "mode": "triple"}"#).unwrap();
        assert_eq!(config.names, vec!["X", "Y"]);
        assert_eq!(config.mode, GameMode::Triple);
        assert_eq!(config.min_names_to_spin, 2);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            PickerConfig::from_json("{"),
            Err(PickerError::ConfigParse(_))
        ));
        assert!(matches!(
            PickerConfig::from_json(r#"{"min_names_to_spin": 0}"#),
            Err(PickerError::InvalidConfig(_))
        ));
        assert!(matches!(
            PickerConfig::from_json(r#"{"names": ["Bob", " Bob "]}"#),
            Err(PickerError::InvalidConfig(_))
        ));
        assert!(matches!(
            PickerConfig::from_json(r#"{"event_capacity": 0}"#),
            Err(PickerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_min_names_cannot_drop_below_two() {
        for min in [0, 1] {
            let config = PickerConfig::empty()
                .with_name("Solo")
                .with_min_names_to_spin(min);
            assert!(matches!(config.validate(), Err(PickerError::InvalidConfig(_))));
        }
        assert!(PickerConfig::empty().with_min_names_to_spin(2).validate().is_ok());
    }

    #[test]
    fn test_from_json_mode_matches_parse() {
        for text in ["Single", "TRIPLE", " triple "] {
            let json = format!(r#"{{"mode": "{}"}}"#, text);
            let config = PickerConfig::from_json(&json).unwrap();
            assert_eq!(config.mode, text.parse::<GameMode>().unwrap());
        }
        assert!(matches!(
            PickerConfig::from_json(r#"{"mode": "double"}"#),
            Err(PickerError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(GameMode::Single.label(), "🎯 Single Winner Mode");
        assert_eq!(GameMode::Triple.label(), "🎰 Triple Winners Mode");
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use crate::core::rng::RandomSource;

        let config = PickerConfig::new().with_seed(11);
        let mut a = config.rng();
        let mut b = config.rng();
        assert_eq!(a.next_index(100), b.next_index(100));
    }

    #[test]
    fn test_game_mode_parse_and_display() {
        assert_eq!("Single".parse::<GameMode>().unwrap(), GameMode::Single);
        assert_eq!(" triple ".parse::<GameMode>().unwrap(), GameMode::Triple);
        assert!("double".parse::<GameMode>().is_err());
        assert_eq!(GameMode::Triple.to_string(), "triple");
        assert_eq!(GameMode::default(), GameMode::Single);
    }
}
