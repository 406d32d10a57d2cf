//! EngineBinding: routes the platform callback to the single engine instance.
//!
//! A low-level keyboard hook is a plain `extern "system"` function with no
//! user-data pointer, so the hook module keeps one `static EngineBinding`.
//! The engine is bound exactly once at setup; the hook then dispatches every
//! event through it.
//!
//! Both ways of breaking that contract are defined errors:
//!
//! - dispatching before an engine was bound → [`BindingError::NoActiveEngineBound`]
//! - binding a second engine → [`BindingError::AlreadyBound`]

use std::sync::{Mutex, OnceLock, PoisonError};

use neo_core::{DispatchDecision, KeyHandler, PhysicalKeyEvent};
use thiserror::Error;

/// Error type for engine binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("hook called, but no engine is bound")]
    NoActiveEngineBound,
    #[error("an engine is already bound; only one remapper may run per process")]
    AlreadyBound,
}

/// Holds the one engine the platform callback talks to.
///
/// The mutex is only there to make the binding `Sync`; the platform delivers
/// hook callbacks serially on one thread, so it is never contended.
pub struct EngineBinding {
    engine: OnceLock<Mutex<Box<dyn KeyHandler>>>,
}

impl EngineBinding {
    /// Creates an empty binding (usable in a `static`).
    pub const fn new() -> Self {
        Self {
            engine: OnceLock::new(),
        }
    }

    /// Binds `engine`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::AlreadyBound`] if an engine was bound before.
    pub fn bind(&self, engine: Box<dyn KeyHandler>) -> Result<(), BindingError> {
        self.engine
            .set(Mutex::new(engine))
            .map_err(|_| BindingError::AlreadyBound)
    }

    pub fn is_bound(&self) -> bool {
        self.engine.get().is_some()
    }

    /// Hands `event` to the bound engine.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NoActiveEngineBound`] if nothing was bound.
    pub fn dispatch(&self, event: &PhysicalKeyEvent) -> Result<DispatchDecision, BindingError> {
        let engine = self
            .engine
            .get()
            .ok_or(BindingError::NoActiveEngineBound)?;
        // Keep remapping after a callback panicked while holding the lock.
        let mut engine = engine.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(engine.handle_key(event))
    }
}

impl Default for EngineBinding {
    fn default() -> Self {
        Self::new()
    }
}
