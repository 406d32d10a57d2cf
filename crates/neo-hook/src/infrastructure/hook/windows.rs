//! Windows low-level keyboard hook.
//!
//! Installs `WH_KEYBOARD_LL` on a dedicated Win32 message-loop thread that
//! runs at `THREAD_PRIORITY_TIME_CRITICAL` to minimize callback latency.  The
//! callback builds a [`PhysicalKeyEvent`] from the `KBDLLHOOKSTRUCT`, hands it
//! to the bound engine and turns the decision into the hook's return value.
//!
//! # Safety
//!
//! This module uses `unsafe` code exclusively for Windows API FFI calls.
//! All `unsafe` blocks are annotated with `// SAFETY:` comments.

#![cfg(target_os = "windows")]

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use neo_core::{DispatchDecision, KeyHandler, PhysicalKeyEvent, VirtualKey};
use tracing::{error, info, warn};
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Threading::{
    GetCurrentThread, GetCurrentThreadId, SetThreadPriority, THREAD_PRIORITY_TIME_CRITICAL,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, PeekMessageW, PostThreadMessageW,
    SetWindowsHookExW, TranslateMessage, UnhookWindowsHookEx, HC_ACTION, KBDLLHOOKSTRUCT,
    KBDLLHOOKSTRUCT_FLAGS, LLKHF_EXTENDED, LLKHF_INJECTED, MSG, PM_NOREMOVE, WH_KEYBOARD_LL,
    WM_QUIT,
};

use super::{direction_from_message, HookError};
use crate::application::binding::EngineBinding;

/// The engine the hook callback dispatches to.  Bound once by [`install`].
static BINDING: EngineBinding = EngineBinding::new();

/// Handle to the running hook thread.
pub struct HookThread {
    thread_id: u32,
    handle: JoinHandle<()>,
}

impl HookThread {
    /// Posts `WM_QUIT` to the hook thread and waits for it to unhook and exit.
    ///
    /// # Errors
    ///
    /// [`HookError::ShutdownFailed`] if the quit message could not be posted,
    /// [`HookError::ThreadPanicked`] if the thread did not exit cleanly.
    pub fn stop(self) -> Result<(), HookError> {
        // SAFETY: thread_id belongs to the live hook thread, whose message
        // queue was created before install() returned.
        unsafe { PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) }
            .map_err(|e| HookError::ShutdownFailed(e.to_string()))?;
        self.handle.join().map_err(|_| HookError::ThreadPanicked)
    }
}

/// Binds `engine` and starts the hook thread.
///
/// Returns once the hook is live, or with the error that prevented it.
///
/// # Errors
///
/// - [`HookError::Binding`] if an engine was already bound in this process.
/// - [`HookError::InstallFailed`] if the thread could not be spawned or
///   `SetWindowsHookExW` failed.
pub fn install(engine: Box<dyn KeyHandler>) -> Result<HookThread, HookError> {
    BINDING.bind(engine)?;

    let (ready_tx, ready_rx) = mpsc::channel::<Result<u32, HookError>>();
    let handle = thread::Builder::new()
        .name("neo-hook-loop".to_string())
        .spawn(move || run_hook_message_loop(ready_tx))
        .map_err(|e| HookError::InstallFailed(e.to_string()))?;

    match ready_rx.recv() {
        Ok(Ok(thread_id)) => Ok(HookThread { thread_id, handle }),
        Ok(Err(err)) => {
            let _ = handle.join();
            Err(err)
        }
        // The sender was dropped without a report: the thread died early.
        Err(_) => match handle.join() {
            Err(_) => Err(HookError::ThreadPanicked),
            Ok(()) => Err(HookError::InstallFailed(
                "hook thread exited before reporting".to_string(),
            )),
        },
    }
}

/// Entry point for the dedicated Win32 message loop thread.
fn run_hook_message_loop(ready: Sender<Result<u32, HookError>>) {
    // SAFETY: GetCurrentThread returns a pseudo-handle that is always valid.
    if let Err(err) =
        unsafe { SetThreadPriority(GetCurrentThread(), THREAD_PRIORITY_TIME_CRITICAL) }
    {
        warn!("could not raise hook thread priority: {err}");
    }

    // SAFETY: keyboard_hook_proc has the HOOKPROC signature; low-level hooks
    // need neither a module handle nor a target thread.
    let hook = match unsafe { SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_hook_proc), None, 0) }
    {
        Ok(hook) => hook,
        Err(err) => {
            let _ = ready.send(Err(HookError::InstallFailed(err.to_string())));
            return;
        }
    };

    let mut msg = MSG::default();
    // SAFETY: msg is a valid out pointer.  Peeking forces creation of the
    // thread's message queue so a WM_QUIT posted by stop() cannot be lost.
    unsafe {
        let _ = PeekMessageW(&mut msg, None, 0, 0, PM_NOREMOVE);
    }
    // SAFETY: no preconditions.
    let thread_id = unsafe { GetCurrentThreadId() };
    let _ = ready.send(Ok(thread_id));
    info!(thread_id, "keyboard hook installed");

    // Win32 message loop: blocks until WM_QUIT is posted.
    // SAFETY: standard Win32 GetMessage/DispatchMessage loop pattern.
    unsafe {
        loop {
            match GetMessageW(&mut msg, None, 0, 0).0 {
                0 => break,
                -1 => {
                    error!("GetMessageW failed; leaving the hook message loop");
                    break;
                }
                _ => {
                    let _ = TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                }
            }
        }
        if let Err(err) = UnhookWindowsHookEx(hook) {
            warn!("could not remove keyboard hook: {err}");
        }
    }
    info!("keyboard hook removed");
}

/// Low-level keyboard hook callback.
///
/// # Safety
///
/// Called by Windows on the hook message loop thread.  It must return
/// quickly (< ~300ms) to avoid hook removal by the OS.
unsafe extern "system" fn keyboard_hook_proc(
    n_code: i32,
    w_param: WPARAM,
    l_param: LPARAM,
) -> LRESULT {
    if n_code != HC_ACTION as i32 {
        // SAFETY: Must call CallNextHookEx when n_code != HC_ACTION.
        return unsafe { CallNextHookEx(None, n_code, w_param, l_param) };
    }
    let Some(direction) = direction_from_message(w_param.0 as u32) else {
        // SAFETY: Forward messages that are not key transitions.
        return unsafe { CallNextHookEx(None, n_code, w_param, l_param) };
    };

    // SAFETY: l_param points to a KBDLLHOOKSTRUCT when n_code == HC_ACTION.
    let kbs = unsafe { &*(l_param.0 as *const KBDLLHOOKSTRUCT) };
    let event = PhysicalKeyEvent::new(kbs.scanCode, VirtualKey(kbs.vkCode as u16), direction)
        .with_extended((kbs.flags & LLKHF_EXTENDED) != KBDLLHOOKSTRUCT_FLAGS(0))
        .with_injected((kbs.flags & LLKHF_INJECTED) != KBDLLHOOKSTRUCT_FLAGS(0));

    match BINDING.dispatch(&event) {
        Ok(DispatchDecision::Suppress) => LRESULT(1),
        // SAFETY: Forward the event to the next hook in the chain.
        Ok(DispatchDecision::PassThrough) => unsafe {
            CallNextHookEx(None, n_code, w_param, l_param)
        },
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}
