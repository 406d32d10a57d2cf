//! Modifier state tracker and layer selection.
//!
//! The tracker gets the first look at every physical event.  It claims the
//! events of the bypass toggle, Shift, Mod3 and Mod4 keys, updates its flags,
//! and tells the dispatcher what to do with the original event.  Everything
//! else falls through to the active layer.
//!
//! The active layer is never stored: [`ModifierState::active_layer`] derives it
//! from the flags each time it is asked.

use crate::domain::event::{DispatchDecision, PhysicalKeyEvent};
use crate::keymap::VirtualKey;
use crate::layer::LayerId;

/// Keys the tracker cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKey {
    /// End key; a key-down flips bypass mode.
    BypassToggle,
    Shift,
    /// Caps Lock or `#`.
    Mod3,
    /// AltGr or `<`.
    Mod4,
}

impl ModifierKey {
    /// Classifies a virtual key, returning `None` for ordinary keys.
    pub fn classify(vk: VirtualKey) -> Option<Self> {
        match vk {
            VirtualKey::END => Some(Self::BypassToggle),
            VirtualKey::SHIFT | VirtualKey::LSHIFT | VirtualKey::RSHIFT => Some(Self::Shift),
            VirtualKey::CAPITAL | VirtualKey::OEM_2 => Some(Self::Mod3),
            VirtualKey::RMENU | VirtualKey::OEM_102 => Some(Self::Mod4),
            _ => None,
        }
    }
}

/// Outcome of a modifier event claimed by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierClaim {
    pub decision: DispatchDecision,
    /// The platform sent a left-control press along with AltGr; the dispatcher
    /// must inject a left-control release before returning.
    pub release_left_control: bool,
}

impl ModifierClaim {
    fn new(decision: DispatchDecision) -> Self {
        Self {
            decision,
            release_left_control: false,
        }
    }
}

/// Which modifiers are currently held.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModifierState {
    pub shift_held: bool,
    pub mod3_held: bool,
    pub mod4_held: bool,
    pub bypass_requested: bool,
}

impl ModifierState {
    /// Updates the flags from a physical (non-injected) event.
    ///
    /// Returns `Some` if the event belongs to the tracker, `None` if it should
    /// be handed to the active layer.  A key-up of the bypass toggle is not
    /// claimed.
    pub fn track(&mut self, event: &PhysicalKeyEvent) -> Option<ModifierClaim> {
        let pressed = event.is_down();
        match ModifierKey::classify(event.virtual_key)? {
            ModifierKey::BypassToggle if pressed => {
                self.bypass_requested = !self.bypass_requested;
                Some(ModifierClaim::new(DispatchDecision::PassThrough))
            }
            ModifierKey::BypassToggle => None,
            ModifierKey::Shift => {
                self.shift_held = pressed;
                Some(ModifierClaim::new(DispatchDecision::PassThrough))
            }
            ModifierKey::Mod3 => {
                self.mod3_held = pressed;
                Some(ModifierClaim::new(DispatchDecision::Suppress))
            }
            ModifierKey::Mod4 => {
                self.mod4_held = pressed;
                Some(ModifierClaim {
                    decision: DispatchDecision::Suppress,
                    release_left_control: pressed && event.virtual_key == VirtualKey::RMENU,
                })
            }
        }
    }

    /// Selects the layer for the current flags.
    ///
    /// Priority is fixed: bypass, Mod4, Mod3, Shift, base.  Holding Mod3 and
    /// Mod4 together therefore selects Layer4.
    pub fn active_layer(&self) -> LayerId {
        if self.bypass_requested {
            LayerId::Bypass
        } else if self.mod4_held {
            LayerId::Layer4
        } else if self.mod3_held {
            LayerId::Layer3
        } else if self.shift_held {
            LayerId::Layer2
        } else {
            LayerId::Layer1
        }
    }
}
