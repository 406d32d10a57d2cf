//! Physical key events and the decision returned for them.

use crate::keymap::VirtualKey;

/// Direction of a key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyDirection {
    Down,
    Up,
}

impl KeyDirection {
    /// Returns `true` for [`KeyDirection::Down`].
    pub fn is_down(self) -> bool {
        self == KeyDirection::Down
    }
}

/// What the platform should do with the original physical event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchDecision {
    /// Drop the event; it never reaches an application.
    Suppress,
    /// Deliver the event onward unchanged.
    PassThrough,
}

/// One hardware key transition as reported by the platform hook.
///
/// Created at the hook boundary and only read by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalKeyEvent {
    /// Hardware position (scan code set 1); `0` when the platform does not know it.
    pub scan_code: u32,
    /// Platform-assigned logical key.
    pub virtual_key: VirtualKey,
    /// `true` for keys on the extended cluster (arrows, navigation block, right-side modifiers).
    pub extended: bool,
    /// `true` if the event was synthesized rather than typed.
    pub injected: bool,
    pub direction: KeyDirection,
}

impl PhysicalKeyEvent {
    /// Creates a non-extended, non-injected event.
    pub fn new(scan_code: u32, virtual_key: VirtualKey, direction: KeyDirection) -> Self {
        Self {
            scan_code,
            virtual_key,
            extended: false,
            injected: false,
            direction,
        }
    }

    /// Shorthand for a key-down event.
    pub fn down(scan_code: u32, virtual_key: VirtualKey) -> Self {
        Self::new(scan_code, virtual_key, KeyDirection::Down)
    }

    /// Shorthand for a key-up event.
    pub fn up(scan_code: u32, virtual_key: VirtualKey) -> Self {
        Self::new(scan_code, virtual_key, KeyDirection::Up)
    }

    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    pub fn with_injected(mut self, injected: bool) -> Self {
        self.injected = injected;
        self
    }

    pub fn is_down(&self) -> bool {
        self.direction.is_down()
    }
}
