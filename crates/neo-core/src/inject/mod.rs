//! Key injector: turns layer output into synthetic key events.
//!
//! The injector owns the routing policy between the two injection paths and
//! hands the resulting events to an [`InputSink`], the platform's
//! synthesize-input primitive.
//!
//! # Routing policy
//!
//! ASCII letters and digits are sent as virtual keys (letters uppercased,
//! digits unchanged).  Virtual-key input is cheaper for the platform than
//! unicode input, and applications only recognise keyboard shortcuts such as
//! Ctrl+C when the letter arrives as a virtual key.  Every other character is
//! sent through the unicode path, one event per UTF-16 code unit.
//!
//! # Testability
//!
//! [`mock::RecordingSink`] records every event in memory so tests can assert
//! exactly which path was taken.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::event::KeyDirection;
use crate::keymap::VirtualKey;
use crate::layer::LayerOutput;

pub mod mock;

/// Error type for key injection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectionError {
    /// The platform queued fewer events than requested.
    #[error("could not send all keys: {sent} of {requested} queued")]
    PartialFailure { requested: usize, sent: usize },
}

/// The key carried by a synthetic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticKey {
    /// Direct virtual-key input.
    Virtual(VirtualKey),
    /// Literal character input, one UTF-16 code unit.
    Unicode(u16),
}

/// One outbound key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticKeyEvent {
    pub key: SyntheticKey,
    pub direction: KeyDirection,
}

impl SyntheticKeyEvent {
    pub fn virtual_key(vk: VirtualKey, direction: KeyDirection) -> Self {
        Self {
            key: SyntheticKey::Virtual(vk),
            direction,
        }
    }

    pub fn unicode(unit: u16, direction: KeyDirection) -> Self {
        Self {
            key: SyntheticKey::Unicode(unit),
            direction,
        }
    }
}

/// The platform's synthesize-input primitive.
///
/// The production implementation calls `SendInput`; tests use
/// [`mock::RecordingSink`] or the generated `MockInputSink`.
#[cfg_attr(test, mockall::automock)]
pub trait InputSink: Send + Sync {
    /// Queues `events` in order and returns how many were accepted.
    fn send(&self, events: &[SyntheticKeyEvent]) -> usize;
}

/// Which injection path a character takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionPath {
    VirtualKey(VirtualKey),
    Literal,
}

/// Chooses the injection path for `ch`.
pub fn injection_path(ch: char) -> InjectionPath {
    match VirtualKey::from_ascii_alnum(ch) {
        Some(vk) => InjectionPath::VirtualKey(vk),
        None => InjectionPath::Literal,
    }
}

/// Synthesizes key events through an [`InputSink`].
#[derive(Clone)]
pub struct KeyInjector {
    sink: Arc<dyn InputSink>,
}

impl KeyInjector {
    pub fn new(sink: Arc<dyn InputSink>) -> Self {
        Self { sink }
    }

    /// Sends a single virtual-key event.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::PartialFailure`] if the sink rejected it.
    pub fn inject_virtual_key(
        &self,
        vk: VirtualKey,
        direction: KeyDirection,
    ) -> Result<(), InjectionError> {
        self.submit(&[SyntheticKeyEvent::virtual_key(vk, direction)])
    }

    /// Sends a character, routed by [`injection_path`].
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::PartialFailure`] if the sink accepted fewer
    /// events than requested.
    pub fn inject_literal(&self, ch: char, direction: KeyDirection) -> Result<(), InjectionError> {
        match injection_path(ch) {
            InjectionPath::VirtualKey(vk) => self.inject_virtual_key(vk, direction),
            InjectionPath::Literal => self.inject_unicode(ch, direction),
        }
    }

    /// Sends a layer's output.
    ///
    /// # Errors
    ///
    /// See [`KeyInjector::inject_literal`] and [`KeyInjector::inject_virtual_key`].
    pub fn inject(&self, output: LayerOutput, direction: KeyDirection) -> Result<(), InjectionError> {
        match output {
            LayerOutput::Character(ch) => self.inject_literal(ch, direction),
            LayerOutput::VirtualKey(vk) => self.inject_virtual_key(vk, direction),
        }
    }

    fn inject_unicode(&self, ch: char, direction: KeyDirection) -> Result<(), InjectionError> {
        let mut units = [0u16; 2];
        let mut events = [SyntheticKeyEvent::unicode(0, direction); 2];
        let encoded = ch.encode_utf16(&mut units);
        for (event, &unit) in events.iter_mut().zip(encoded.iter()) {
            event.key = SyntheticKey::Unicode(unit);
        }
        self.submit(&events[..encoded.len()])
    }

    fn submit(&self, events: &[SyntheticKeyEvent]) -> Result<(), InjectionError> {
        let sent = self.sink.send(events);
        if sent < events.len() {
            return Err(InjectionError::PartialFailure {
                requested: events.len(),
                sent,
            });
        }
        Ok(())
    }
}
