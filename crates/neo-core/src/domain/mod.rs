//! Domain values of the dispatch engine.
//!
//! - **`event`** – the immutable physical key event and the dispatch decision.
//! - **`modifiers`** – the modifier state tracker and layer selection policy.

pub mod event;
pub mod modifiers;
