//! Virtual key codes used by the engine.
//!
//! Physical events arrive carrying both a scan code (the hardware position) and
//! a virtual key (the platform's logical key id).  Layer tables are indexed by
//! scan code; modifier classification and navigation output use virtual keys.

pub mod vk;

pub use vk::VirtualKey;
