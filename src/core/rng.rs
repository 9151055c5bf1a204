//! Injected randomness for grid draws.
//!
//! ## Key Features
//!
//! - **Injected**: The engine never reaches for a global RNG; every draw goes
//!   through a caller-supplied `RandomSource`
//! - **Deterministic**: Same seed produces the identical sequence of grids
//! - **Context streams**: Animation frames draw from their own stream so they
//!   never shift the outcome sequence
//! - **Resumable**: O(1) state capture and restore, so a saved session
//!   continues with exactly the grids it would have drawn
//!
//! ## Usage
//!
//! ```
//! use name_slots::core::{PickerRng, RandomSource};
//!
//! let mut outcome = PickerRng::new(42);
//! let mut frames = outcome.for_context("animation");
//!
//! let a = outcome.next_index(6);
//! let _ = frames.next_index(6);
//!
//! let mut replay = PickerRng::new(42);
//! assert_eq!(a, replay.next_index(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A source of uniform indices.
///
/// Implementations must return a value in `0..bound`. Callers never pass a
/// zero bound.
pub trait RandomSource {
    /// Draw an index uniformly from `0..bound`.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Seeded picker RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct PickerRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PickerRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread RNG, for live sessions.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Capture the position in the stream, for resuming a session later.
    #[must_use]
    pub fn state(&self) -> PickerRngState {
        PickerRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured with `state`.
    #[must_use]
    pub fn from_state(state: &PickerRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for PickerRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Saved position of a `PickerRng` stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerRngState {
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound, so a script written
/// against roster positions stays in range if the roster shrinks.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source replaying `script`.
    ///
    /// An empty script always yields index 0.
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of draws made so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.script.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % bound
    }
}
