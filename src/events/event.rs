//! Picker event types.
//!
//! Events describe what the engine did, in the order it did it. The
//! presentation layer drains them after each call to drive banners, sounds
//! and highlight animations without diffing engine state itself.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::DEFAULT_EVENT_CAPACITY;
use crate::core::{GameMode, Grid};
use crate::rules::SpinResult;

/// Something that happened inside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PickerEvent {
    /// A name joined the roster.
    NameAdded { name: String },

    /// A name left the roster.
    NameRemoved { name: String },

    /// The roster was emptied.
    RosterCleared { removed: usize },

    /// The mode changed. `result_cleared` is true if a held result was dropped.
    ModeChanged { mode: GameMode, result_cleared: bool },

    /// A spin began; the outcome grid is already fixed.
    SpinStarted { mode: GameMode },

    /// A spin finished.
    SpinResolved { grid: Grid, result: SpinResult },

    /// Winners were taken off the roster.
    WinnersRemoved { names: SmallVec<[String; 3]> },
}

impl PickerEvent {
    /// True for events that change the roster.
    #[must_use]
    pub fn touches_roster(&self) -> bool {
        matches!(
            self,
            PickerEvent::NameAdded { .. }
                | PickerEvent::NameRemoved { .. }
                | PickerEvent::RosterCleared { .. }
                | PickerEvent::WinnersRemoved { .. }
        )
    }

    /// The result carried by a `SpinResolved` event.
    #[must_use]
    pub fn result(&self) -> Option<&SpinResult> {
        match self {
            PickerEvent::SpinResolved { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// Bounded FIFO queue of pending events.
///
/// Once `capacity` events are waiting, each push drops the oldest one.
#[derive(Clone, Debug)]
pub struct EventQueue {
    pending: VecDeque<PickerEvent>,
    capacity: usize,
    dropped: usize,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventQueue {
    /// Create an empty queue with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue holding at most `capacity` events (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            pending: VecDeque::with_capacity(capacity.min(DEFAULT_EVENT_CAPACITY)),
            capacity,
            dropped: 0,
        }
    }

    /// Append an event, evicting the oldest when full.
    pub fn push(&mut self, event: PickerEvent) {
        if self.pending.len() == self.capacity {
            self.pending.pop_front();
            self.dropped += 1;
        }
        self.pending.push_back(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<PickerEvent> {
        self.pending.drain(..).collect()
    }

    /// Pending events without consuming them.
    pub fn peek(&self) -> impl Iterator<Item = &PickerEvent> {
        self.pending.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events evicted unread since the queue was created.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drains_in_order() {
        let mut queue = EventQueue::new();
        queue.push(PickerEvent::NameAdded { name: "Alice".into() });
        queue.push(PickerEvent::NameRemoved { name: "Alice".into() });
        assert_eq!(queue.len(), 2);

        let events = queue.drain();
        assert_eq!(events[0], PickerEvent::NameAdded { name: "Alice".into() });
        assert_eq!(events[1], PickerEvent::NameRemoved { name: "Alice".into() });
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_evicts_oldest_when_full() {
        let mut queue = EventQueue::with_capacity(2);
        for removed in 0..5 {
            queue.push(PickerEvent::RosterCleared { removed });
        }
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dropped(), 3);
        assert_eq!(
            queue.drain(),
            vec![
                PickerEvent::RosterCleared { removed: 3 },
                PickerEvent::RosterCleared { removed: 4 },
            ]
        );
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut queue = EventQueue::with_capacity(0);
        queue.push(PickerEvent::RosterCleared { removed: 1 });
        queue.push(PickerEvent::RosterCleared { removed: 2 });
        assert_eq!(queue.capacity(), 1);
        assert_eq!(queue.peek().count(), 1);
    }

    #[test]
    fn test_touches_roster() {
        assert!(PickerEvent::RosterCleared { removed: 3 }.touches_roster());
        assert!(!PickerEvent::SpinStarted { mode: GameMode::Single }.touches_roster());
    }

    #[test]
    fn test_result_accessor() {
        let result = SpinResult::Single { winner: "Bob".into() };
        let event = PickerEvent::SpinResolved {
            grid: Grid::placeholder(),
            result: result.clone(),
        };
        assert_eq!(event.result(), Some(&result));
        assert_eq!(PickerEvent::RosterCleared { removed: 0 }.result(), None);
    }

    #[test]
    fn test_event_serde() {
        let event = PickerEvent::ModeChanged {
            mode: GameMode::Triple,
            result_cleared: true,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"mode_changed","mode":"triple","result_cleared":true}"#);
        let back: PickerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
