//! Keyboard hook infrastructure.
//!
//! On Windows this installs a `WH_KEYBOARD_LL` hook on a dedicated Win32
//! message-loop thread.  Unlike a capture hook that queues events for later,
//! the remapper must decide inside the callback whether the key is swallowed,
//! so the engine runs synchronously on the hook thread.
//!
//! # Windows-Specific Implementation
//!
//! The hook callback must complete within ~300ms or Windows silently removes
//! the hook.  `Dispatcher::handle_key` does no I/O besides `SendInput` and
//! takes microseconds (see the `dispatch_bench` benchmark in `neo-core`).
//!
//! # Testability
//!
//! Message decoding is platform-independent ([`direction_from_message`]) and
//! the engine is reached through [`EngineBinding`](crate::application::binding::EngineBinding),
//! so both are covered by tests on every target.

use neo_core::KeyDirection;
use thiserror::Error;

use crate::application::binding::BindingError;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use self::windows::{install, HookThread};

/// Errors from the hook lifecycle.
#[derive(Debug, Error)]
pub enum HookError {
    #[error(transparent)]
    Binding(#[from] BindingError),
    #[error("keyboard hook installation failed: {0}")]
    InstallFailed(String),
    #[error("could not stop the hook thread: {0}")]
    ShutdownFailed(String),
    #[error("hook thread panicked")]
    ThreadPanicked,
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(String),
}

/// `WM_KEYDOWN`
pub const WM_KEYDOWN: u32 = 0x0100;
/// `WM_KEYUP`
pub const WM_KEYUP: u32 = 0x0101;
/// `WM_SYSKEYDOWN`, sent instead of `WM_KEYDOWN` while Alt is held.
pub const WM_SYSKEYDOWN: u32 = 0x0104;
/// `WM_SYSKEYUP`
pub const WM_SYSKEYUP: u32 = 0x0105;

/// Maps the `wParam` of a low-level keyboard hook call to a key direction.
///
/// Returns `None` for any other message; such calls are forwarded untouched.
pub fn direction_from_message(message: u32) -> Option<KeyDirection> {
    match message {
        WM_KEYDOWN | WM_SYSKEYDOWN => Some(KeyDirection::Down),
        WM_KEYUP | WM_SYSKEYUP => Some(KeyDirection::Up),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_messages_map_to_directions() {
        assert_eq!(direction_from_message(WM_KEYDOWN), Some(KeyDirection::Down));
        assert_eq!(direction_from_message(WM_SYSKEYDOWN), Some(KeyDirection::Down));
        assert_eq!(direction_from_message(WM_KEYUP), Some(KeyDirection::Up));
        assert_eq!(direction_from_message(WM_SYSKEYUP), Some(KeyDirection::Up));
    }

    #[test]
    fn test_other_messages_are_not_key_transitions() {
        // WM_CHAR, WM_DEADCHAR, WM_MOUSEMOVE, WM_QUIT
        for message in [0x0102, 0x0103, 0x0200, 0x0012, 0] {
            assert_eq!(direction_from_message(message), None, "{message:#06X}");
        }
    }

    #[test]
    fn test_binding_error_converts_into_hook_error() {
        let err: HookError = BindingError::AlreadyBound.into();

        assert!(matches!(err, HookError::Binding(BindingError::AlreadyBound)));
        assert_eq!(err.to_string(), BindingError::AlreadyBound.to_string());
    }
}
