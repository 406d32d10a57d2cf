//! Infrastructure layer of the host.
//!
//! Contains the OS-facing adapters: the low-level keyboard hook and the
//! `SendInput` sink.
//!
//! **Dependency rule**: this layer may depend on `application` and `neo_core`,
//! but MUST NOT be imported by the `application` layer.

pub mod hook;
pub mod send_input;
