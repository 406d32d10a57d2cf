//! Windows Virtual Key (VK) codes referenced by the Neo engine.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).
//!
//! # What is a Virtual Key? (for beginners)
//!
//! Windows assigns each keyboard key a number called a "Virtual Key code",
//! named `VK_*` in `<winuser.h>` (e.g. `VK_RETURN = 0x0D`).  They represent
//! *logical* keys: `VK_A = 0x41` is "the A key" regardless of where it sits on
//! the physical keyboard.  The letter and digit codes equal the uppercase ASCII
//! value of the key label, which is what [`VirtualKey::from_ascii_alnum`] relies
//! on.
//!
//! Only the codes the engine actually reads or emits are named here.

use std::fmt;

/// A platform virtual key id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VirtualKey(pub u16);

impl VirtualKey {
    // ── Editing and control keys ─────────────────────────────────────────────
    pub const BACK: Self = Self(0x08);
    pub const TAB: Self = Self(0x09);
    pub const RETURN: Self = Self(0x0D);
    pub const ESCAPE: Self = Self(0x1B);
    pub const SPACE: Self = Self(0x20);

    // ── Generic modifiers ────────────────────────────────────────────────────
    pub const SHIFT: Self = Self(0x10);
    pub const CONTROL: Self = Self(0x11);
    pub const MENU: Self = Self(0x12);
    pub const CAPITAL: Self = Self(0x14);

    // ── Navigation cluster ───────────────────────────────────────────────────
    pub const PRIOR: Self = Self(0x21);
    pub const NEXT: Self = Self(0x22);
    pub const END: Self = Self(0x23);
    pub const HOME: Self = Self(0x24);
    pub const LEFT: Self = Self(0x25);
    pub const UP: Self = Self(0x26);
    pub const RIGHT: Self = Self(0x27);
    pub const DOWN: Self = Self(0x28);
    pub const INSERT: Self = Self(0x2D);
    pub const DELETE: Self = Self(0x2E);

    // ── Numeric keypad ───────────────────────────────────────────────────────
    pub const NUMPAD0: Self = Self(0x60);
    pub const NUMPAD1: Self = Self(0x61);
    pub const NUMPAD2: Self = Self(0x62);
    pub const NUMPAD3: Self = Self(0x63);
    pub const NUMPAD4: Self = Self(0x64);
    pub const NUMPAD5: Self = Self(0x65);
    pub const NUMPAD6: Self = Self(0x66);
    pub const NUMPAD7: Self = Self(0x67);
    pub const NUMPAD8: Self = Self(0x68);
    pub const NUMPAD9: Self = Self(0x69);

    // ── Sided modifiers ──────────────────────────────────────────────────────
    pub const LSHIFT: Self = Self(0xA0);
    pub const RSHIFT: Self = Self(0xA1);
    pub const LCONTROL: Self = Self(0xA2);
    pub const RCONTROL: Self = Self(0xA3);
    pub const LMENU: Self = Self(0xA4);
    /// Right Alt, reported as AltGr on ISO layouts.
    pub const RMENU: Self = Self(0xA5);

    // ── OEM keys ─────────────────────────────────────────────────────────────
    /// `#'` key on German keyboards (right of `Ä`).
    pub const OEM_2: Self = Self(0xBF);
    /// `<>|` key on ISO keyboards (left of `Y`).
    pub const OEM_102: Self = Self(0xE2);

    /// Returns the raw platform code.
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Maps an ASCII letter or digit to the virtual key of the same label.
    ///
    /// Letters map to their uppercase ASCII value, digits to their own ASCII
    /// value.  Returns `None` for every other character.
    pub fn from_ascii_alnum(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' | 'A'..='Z' => Some(Self(ch as u16)),
            'a'..='z' => Some(Self(ch.to_ascii_uppercase() as u16)),
            _ => None,
        }
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VK(0x{:02X})", self.0)
    }
}
