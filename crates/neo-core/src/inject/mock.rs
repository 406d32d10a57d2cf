//! Recording input sink for tests.
//!
//! The real sink injects keys into the desktop session, which a test cannot
//! observe.  `RecordingSink` keeps every accepted event in a `Mutex<Vec<_>>`
//! so assertions can inspect exactly what was emitted and in what order.
//!
//! # Usage in tests
//!
//! ```
//! use std::sync::Arc;
//! use neo_core::inject::mock::RecordingSink;
//! use neo_core::{Dispatcher, PhysicalKeyEvent, VirtualKey};
//!
//! let sink = Arc::new(RecordingSink::new());
//! let mut dispatcher = Dispatcher::new(sink.clone());
//!
//! dispatcher.handle_key(&PhysicalKeyEvent::down(0x20, VirtualKey(0x44)));
//!
//! assert_eq!(sink.events().len(), 1);
//! ```
//!
//! # `should_fail` flag
//!
//! A sink built with [`RecordingSink::failing`] accepts nothing and records
//! nothing, which exercises the partial-failure path of the injector.

use std::sync::Mutex;

use super::{InputSink, SyntheticKeyEvent};

/// An [`InputSink`] that records all events instead of injecting them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SyntheticKeyEvent>>,
    /// When `true`, [`InputSink::send`] accepts zero events.
    pub should_fail: bool,
}

impl RecordingSink {
    /// Creates a sink that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that rejects everything.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Returns a copy of all recorded events in emission order.
    pub fn events(&self) -> Vec<SyntheticKeyEvent> {
        self.events.lock().expect("lock poisoned").clone()
    }

    /// Forgets all recorded events.
    pub fn clear(&self) {
        self.events.lock().expect("lock poisoned").clear();
    }
}

impl InputSink for RecordingSink {
    fn send(&self, events: &[SyntheticKeyEvent]) -> usize {
        if self.should_fail {
            return 0;
        }
        self.events
            .lock()
            .expect("lock poisoned")
            .extend_from_slice(events);
        events.len()
    }
}
