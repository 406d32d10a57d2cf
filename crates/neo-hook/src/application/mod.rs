//! Application layer of the host.
//!
//! - **`binding`** – Connects the one platform callback to the one engine
//!   instance, with a defined failure when that contract is broken.
//!
//! This layer depends on `neo_core` only; it makes no OS calls.

pub mod binding;
