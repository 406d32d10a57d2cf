//! The dispatcher: engine root, called once per physical key event.
//!
//! # Decision order
//!
//! 1. Injected events pass through untouched.  The injector's own output comes
//!    back through the hook, and re-processing it would loop forever.
//! 2. The modifier tracker may claim the event (bypass toggle, Shift, Mod3,
//!    Mod4).
//! 3. While Mod4 is held, left-control events are swallowed.
//! 4. Everything else is resolved by the active layer.
//!
//! # AltGr and left control
//!
//! On Windows, AltGr arrives as a left-control press followed by a right-alt
//! press.  The control press has already reached applications by the time the
//! right-alt event shows up, so the dispatcher releases it by injecting a
//! left-control key-up and then drops the auto-repeated control presses while
//! Mod4 stays down.  Hosts without this pairing can turn the compensation off
//! through [`DispatcherConfig`].

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::domain::event::{DispatchDecision, KeyDirection, PhysicalKeyEvent};
use crate::domain::modifiers::ModifierState;
use crate::inject::{InputSink, KeyInjector};
use crate::keymap::VirtualKey;
use crate::layer::{LayerId, LayerOutput, LayerSet};

/// The seam between the platform hook and the engine.
pub trait KeyHandler: Send {
    /// Decides what happens to `event`.  Any synthetic output has been
    /// emitted by the time this returns.
    fn handle_key(&mut self, event: &PhysicalKeyEvent) -> DispatchDecision;
}

/// Platform compatibility switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Release the left-control press that accompanies AltGr and swallow
    /// left-control events while Mod4 is held.
    pub release_altgr_control: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            release_altgr_control: true,
        }
    }
}

/// Layer resolution and key dispatch engine.
pub struct Dispatcher {
    state: ModifierState,
    layers: LayerSet,
    injector: KeyInjector,
    config: DispatcherConfig,
}

impl Dispatcher {
    /// Creates a dispatcher with the Neo layers and the default configuration.
    pub fn new(sink: Arc<dyn InputSink>) -> Self {
        Self::with_config(sink, DispatcherConfig::default())
    }

    pub fn with_config(sink: Arc<dyn InputSink>, config: DispatcherConfig) -> Self {
        Self {
            state: ModifierState::default(),
            layers: LayerSet::neo(),
            injector: KeyInjector::new(sink),
            config,
        }
    }

    /// Returns a snapshot of the modifier flags.
    pub fn modifier_state(&self) -> ModifierState {
        self.state
    }

    /// Returns the layer the next ordinary key will be resolved against.
    pub fn active_layer(&self) -> LayerId {
        self.state.active_layer()
    }

    /// Handles one physical key transition.
    pub fn handle_key(&mut self, event: &PhysicalKeyEvent) -> DispatchDecision {
        if event.injected {
            trace!(vk = %event.virtual_key, "injected event passed through");
            return DispatchDecision::PassThrough;
        }

        let layer_before = self.state.active_layer();
        if let Some(claim) = self.state.track(event) {
            if claim.release_left_control && self.config.release_altgr_control {
                self.emit(
                    LayerOutput::VirtualKey(VirtualKey::LCONTROL),
                    KeyDirection::Up,
                );
            }
            let layer = self.state.active_layer();
            if layer != layer_before {
                debug!(from = %layer_before, to = %layer, "active layer changed");
            }
            return claim.decision;
        }

        if self.config.release_altgr_control
            && self.state.mod4_held
            && event.virtual_key == VirtualKey::LCONTROL
        {
            trace!("left control swallowed while Mod4 is held");
            return DispatchDecision::Suppress;
        }

        let resolution = self.layers.get(layer_before).resolve(event);
        trace!(
            scan_code = event.scan_code,
            vk = %event.virtual_key,
            layer = %layer_before,
            ?resolution,
            "key resolved"
        );
        if let Some(output) = resolution.output {
            self.emit(output, event.direction);
        }
        resolution.decision
    }

    fn emit(&self, output: LayerOutput, direction: KeyDirection) {
        // Never retried: the keystroke is dropped.
        if let Err(err) = self.injector.inject(output, direction) {
            warn!(?output, ?direction, "{err}");
        }
    }
}

impl KeyHandler for Dispatcher {
    fn handle_key(&mut self, event: &PhysicalKeyEvent) -> DispatchDecision {
        Dispatcher::handle_key(self, event)
    }
}
