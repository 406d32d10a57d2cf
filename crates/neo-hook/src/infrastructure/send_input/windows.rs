//! Windows input sink via the SendInput API.

#![cfg(target_os = "windows")]

use neo_core::{InputSink, SyntheticKeyEvent};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS, VIRTUAL_KEY,
};

use super::KeyboardRecord;

/// Windows implementation of [`InputSink`] using `SendInput`.
///
/// Injected events carry `LLKHF_INJECTED` when they come back through the
/// keyboard hook, which is how the dispatcher recognizes its own output.
#[derive(Debug, Default)]
pub struct WindowsInputSink;

impl WindowsInputSink {
    pub fn new() -> Self {
        Self
    }
}

impl InputSink for WindowsInputSink {
    fn send(&self, events: &[SyntheticKeyEvent]) -> usize {
        let inputs: Vec<INPUT> = events.iter().map(to_input).collect();
        // SAFETY: inputs is a valid slice of keyboard INPUT structures and
        // cbsize is the size of one element.
        let sent = unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) };
        sent as usize
    }
}

fn to_input(event: &SyntheticKeyEvent) -> INPUT {
    let record = KeyboardRecord::from_event(event);
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(record.vk),
                wScan: record.scan,
                dwFlags: KEYBD_EVENT_FLAGS(record.flags),
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}
