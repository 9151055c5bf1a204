//! The picker state machine.
//!
//! ```text
//!            begin_spin            finish_spin
//!   Idle ───────────────► Spinning ───────────► Idle (result held)
//!     ▲                       │                     │
//!     └──────── clear ────────┘      remove_winners │
//!     ▲                                             │
//!     └─────────────────────────────────────────────┘
//! ```
//!
//! The outcome grid is drawn in `begin_spin`; `finish_spin` only evaluates
//! it. A host can put any delay between the two (timers, coroutines,
//! animation callbacks) without the engine knowing. `spin` runs both back
//! to back.

use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{
    GameMode, Grid, PickerConfig, PickerError, RandomSource, Result, Roster, SpinBlock,
};
use crate::events::{EventQueue, PickerEvent};
use crate::rules::{evaluate, SpinResult};

use super::view::{Controls, PickerView};

/// Owns the roster, the mode and the spin lifecycle.
#[derive(Clone, Debug)]
pub struct PickerEngine {
    config: PickerConfig,
    roster: Roster,
    mode: GameMode,
    spinning: bool,
    pending: Option<Grid>,
    grid: Grid,
    last_result: Option<SpinResult>,
    events: EventQueue,
}

impl PickerEngine {
    /// Create an engine from a configuration.
    ///
    /// The starting names are added in order; the config is validated first.
    pub fn new(config: PickerConfig) -> Result<Self> {
        config.validate()?;

        let mut roster = Roster::new();
        for name in &config.names {
            roster.add(name)?;
        }
        debug!("Picker created with {} names in {} mode", roster.len(), config.mode);

        Ok(Self {
            mode: config.mode,
            events: EventQueue::with_capacity(config.event_capacity),
            config,
            roster,
            spinning: false,
            pending: None,
            grid: Grid::placeholder(),
            last_result: None,
        })
    }

    /// Engine with an empty roster and default rules.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            config: PickerConfig::empty(),
            roster: Roster::new(),
            mode: GameMode::Single,
            spinning: false,
            pending: None,
            grid: Grid::placeholder(),
            last_result: None,
            events: EventQueue::new(),
        }
    }

    // === Roster ===

    /// Add a name to the end of the roster.
    ///
    /// Blank input gives `BlankName`, an existing name gives `DuplicateName`.
    pub fn add_name(&mut self, name: &str) -> Result<()> {
        let added = match self.roster.add(name) {
            Ok(added) => added.to_string(),
            Err(err) => {
                debug!("Rejected name {:?}: {}", name, err);
                return Err(err);
            }
        };
        debug!("Added name {:?} ({} total)", added, self.roster.len());
        self.events.push(PickerEvent::NameAdded { name: added });
        Ok(())
    }

    /// Remove a name. Returns `false` if it was not on the roster.
    pub fn remove_name(&mut self, name: &str) -> bool {
        if !self.roster.remove(name) {
            return false;
        }
        debug!("Removed name {:?} ({} left)", name, self.roster.len());
        self.reset_grid_if_empty();
        self.events.push(PickerEvent::NameRemoved {
            name: name.to_string(),
        });
        true
    }

    /// Empty the roster and reset the machine, aborting any spin in flight.
    pub fn clear(&mut self) {
        let removed = self.roster.len();
        if self.spinning {
            warn!("Clearing roster with a spin in flight");
        }
        self.roster.clear();
        self.last_result = None;
        self.spinning = false;
        self.pending = None;
        self.grid = Grid::placeholder();
        info!("Cleared roster ({} names removed)", removed);
        self.events.push(PickerEvent::RosterCleared { removed });
    }

    // === Mode ===

    /// Switch mode. Not allowed while spinning.
    ///
    /// A held result is dropped when the mode actually changes.
    pub fn set_mode(&mut self, mode: GameMode) -> Result<()> {
        if self.spinning {
            warn!("Mode change to {} rejected: spin in progress", mode);
            return Err(PickerError::InvalidState("cannot change mode while spinning"));
        }
        if mode == self.mode {
            return Ok(());
        }
        self.mode = mode;
        let result_cleared = self.last_result.take().is_some();
        debug!("Mode set to {}", mode);
        self.events.push(PickerEvent::ModeChanged {
            mode,
            result_cleared,
        });
        Ok(())
    }

    // === Spin lifecycle ===

    /// Check whether a spin could start right now.
    pub fn check_can_spin(&self) -> Result<()> {
        if self.spinning {
            return Err(PickerError::CannotSpin(SpinBlock::AlreadySpinning));
        }
        let need = self.config.min_names_to_spin;
        if self.roster.len() < need {
            return Err(PickerError::CannotSpin(SpinBlock::NotEnoughNames {
                have: self.roster.len(),
                need,
            }));
        }
        Ok(())
    }

    /// Start a spin: draw the outcome grid and hold it until `finish_spin`.
    ///
    /// Fails with `CannotSpin` and leaves state untouched if a spin is in
    /// flight or the roster is too small.
    pub fn begin_spin<R: RandomSource + ?Sized>(&mut self, source: &mut R) -> Result<&Grid> {
        if let Err(err) = self.check_can_spin() {
            warn!("Spin rejected: {}", err);
            return Err(err);
        }

        let grid = Self::generate_grid(&self.roster, source);
        self.spinning = true;
        self.last_result = None;
        info!("Spin started with {} names in {} mode", self.roster.len(), self.mode);
        self.events.push(PickerEvent::SpinStarted { mode: self.mode });

        let grid: &Grid = self.pending.insert(grid);
        Ok(grid)
    }

    /// Resolve the spin started by `begin_spin`.
    ///
    /// Evaluates under the mode in effect now, which cannot have changed
    /// since `set_mode` is refused mid-spin.
    pub fn finish_spin(&mut self) -> Result<(Grid, SpinResult)> {
        let grid = match (self.spinning, self.pending.take()) {
            (true, Some(grid)) => grid,
            _ => {
                warn!("finish_spin called with no spin in flight");
                return Err(PickerError::InvalidState("no spin in progress"));
            }
        };

        let result = evaluate(&grid, self.mode);
        self.spinning = false;
        self.grid = grid.clone();
        self.last_result = Some(result.clone());

        if result.is_jackpot() {
            info!("Spin resolved: {} ({})", result.headline(), result.primary());
        } else {
            info!("Spin resolved: {}", result.headline());
        }
        self.events.push(PickerEvent::SpinResolved {
            grid: grid.clone(),
            result: result.clone(),
        });

        Ok((grid, result))
    }

    /// Start and resolve a spin in one call.
    pub fn spin<R: RandomSource + ?Sized>(&mut self, source: &mut R) -> Result<(Grid, SpinResult)> {
        self.begin_spin(source)?;
        self.finish_spin()
    }

    /// Draw a grid from a roster. Pure apart from the randomness consumed.
    pub fn generate_grid<R: RandomSource + ?Sized>(roster: &Roster, source: &mut R) -> Grid {
        Grid::draw(roster, source)
    }

    /// Decide the outcome of a grid under a mode.
    #[must_use]
    pub fn evaluate(grid: &Grid, mode: GameMode) -> SpinResult {
        evaluate(grid, mode)
    }

    // === Winners ===

    /// Take the last result's winners off the roster.
    ///
    /// Returns the distinct names removed. Fails with `InvalidState` while
    /// spinning or when no result is held.
    pub fn remove_winners(&mut self) -> Result<SmallVec<[String; 3]>> {
        if self.spinning {
            warn!("remove_winners rejected: spin in progress");
            return Err(PickerError::InvalidState("cannot remove winners while spinning"));
        }
        let result = match self.last_result.take() {
            Some(result) => result,
            None => {
                warn!("remove_winners rejected: no winners recorded");
                return Err(PickerError::InvalidState("no winners to remove"));
            }
        };

        let mut seen = FxHashSet::default();
        let mut removed: SmallVec<[String; 3]> = SmallVec::new();
        for name in result.winners() {
            if seen.insert(name.as_str()) && self.roster.remove(name) {
                removed.push(name.clone());
            }
        }

        self.reset_grid_if_empty();
        info!("Removed {} winner(s): {:?}", removed.len(), removed);
        self.events.push(PickerEvent::WinnersRemoved {
            names: removed.clone(),
        });
        Ok(removed)
    }

    /// True if `name` is flagged as a winner of the held result.
    #[must_use]
    pub fn is_winner(&self, name: &str) -> bool {
        self.last_result.as_ref().is_some_and(|r| r.is_winner(name))
    }

    /// Distinct winner names of the held result.
    #[must_use]
    pub fn last_winners(&self) -> SmallVec<[&str; 3]> {
        let mut out: SmallVec<[&str; 3]> = SmallVec::new();
        if let Some(result) = &self.last_result {
            for name in result.winners() {
                if !out.contains(&name.as_str()) {
                    out.push(name);
                }
            }
        }
        out
    }

    // === Display ===

    fn reset_grid_if_empty(&mut self) {
        if self.roster.is_empty() {
            self.grid = Grid::placeholder();
        }
    }

    /// Draw a throwaway grid for an animation frame.
    ///
    /// Nothing is stored. Feed it a stream separate from the outcome stream
    /// (see `PickerRng::for_context`) so frames never shift outcomes.
    pub fn preview_frame<R: RandomSource + ?Sized>(&self, source: &mut R) -> Grid {
        Grid::draw(&self.roster, source)
    }

    /// Refill the idle display grid from the current roster.
    ///
    /// Does not touch the held result.
    pub fn shuffle_display<R: RandomSource + ?Sized>(&mut self, source: &mut R) -> Result<&Grid> {
        if self.spinning {
            return Err(PickerError::InvalidState("cannot shuffle display while spinning"));
        }
        self.grid = Grid::draw(&self.roster, source);
        Ok(&self.grid)
    }

    // === Accessors ===

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// The last known display grid.
    ///
    /// Placeholders on an empty roster, never the pending outcome.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&SpinResult> {
        self.last_result.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Take every event queued since the last drain.
    ///
    /// At most `config.event_capacity` are kept; older ones are dropped.
    pub fn drain_events(&mut self) -> Vec<PickerEvent> {
        self.events.drain()
    }

    /// Events evicted unread because the queue was full.
    #[must_use]
    pub fn dropped_events(&self) -> usize {
        self.events.dropped()
    }

    /// Which controls the presentation layer should enable.
    #[must_use]
    pub fn controls(&self) -> Controls {
        Controls {
            can_spin: self.check_can_spin().is_ok(),
            can_clear: !self.spinning && !self.roster.is_empty(),
            can_remove_winners: !self.spinning && self.last_result.is_some(),
            can_change_mode: !self.spinning,
            can_add: !self.spinning,
        }
    }

    /// Status line for the winner display.
    #[must_use]
    pub fn headline(&self) -> String {
        if self.spinning {
            return "🎰 Spinning...".to_string();
        }
        if let Some(result) = &self.last_result {
            return result.headline();
        }
        if self.roster.is_empty() {
            return "Add names to play!".to_string();
        }
        "Ready to play!".to_string()
    }

    /// Snapshot of everything the presentation layer renders.
    #[must_use]
    pub fn view(&self) -> PickerView {
        PickerView {
            names: self.roster.snapshot(),
            grid: self.grid().clone(),
            mode: self.mode,
            mode_label: self.mode.label().to_string(),
            spinning: self.spinning,
            result: self.last_result.clone(),
            headline: self.headline(),
            controls: self.controls(),
        }
    }
}

impl Default for PickerEngine {
    fn default() -> Self {
        Self::empty()
    }
}
