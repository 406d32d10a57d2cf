//! Outbound key injection through `SendInput`.
//!
//! Each [`SyntheticKeyEvent`] becomes one `KEYBDINPUT` record.  The record
//! layout is computed by [`KeyboardRecord::from_event`], which is plain data
//! and tested on every target; only the final `SendInput` call is
//! Windows-specific.

use neo_core::{KeyDirection, SyntheticKey, SyntheticKeyEvent};

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use self::windows::WindowsInputSink;

/// `KEYEVENTF_KEYUP`
pub const KEYEVENTF_KEYUP: u32 = 0x0002;
/// `KEYEVENTF_UNICODE`: `wScan` carries a UTF-16 code unit, `wVk` must be 0.
pub const KEYEVENTF_UNICODE: u32 = 0x0004;

/// The fields of one `KEYBDINPUT` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardRecord {
    pub vk: u16,
    pub scan: u16,
    pub flags: u32,
}

impl KeyboardRecord {
    pub fn from_event(event: &SyntheticKeyEvent) -> Self {
        let mut record = match event.key {
            SyntheticKey::Virtual(vk) => Self {
                vk: vk.code(),
                scan: 0,
                flags: 0,
            },
            SyntheticKey::Unicode(unit) => Self {
                vk: 0,
                scan: unit,
                flags: KEYEVENTF_UNICODE,
            },
        };
        if event.direction == KeyDirection::Up {
            record.flags |= KEYEVENTF_KEYUP;
        }
        record
    }
}
