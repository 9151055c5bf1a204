//! Event notifications for the presentation layer.
//!
//! The engine queues a `PickerEvent` for every state change; callers pull
//! them with `PickerEngine::drain_events`.

pub mod event;

pub use event::{EventQueue, PickerEvent};
