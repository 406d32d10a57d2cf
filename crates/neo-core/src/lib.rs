//! # neo-core
//!
//! Layer resolution and key dispatch engine for the Neo keyboard remapper.
//!
//! This crate decides, for every physical key transition, whether the original
//! event is swallowed or forwarded and which synthetic key (if any) replaces it.
//! It has zero dependencies on OS APIs: the platform hook and the key injection
//! primitive live in the `neo-hook` crate and talk to this crate through the
//! [`KeyHandler`] and [`InputSink`] traits.
//!
//! # Architecture overview (for beginners)
//!
//! Neo is an alternative keyboard layout with four layers.  The base layer
//! (Layer1) produces lowercase letters, Shift selects Layer2, a "Mod3" key
//! (Caps Lock or `#`) selects Layer3 with programming symbols, and a "Mod4"
//! key (AltGr or `<`) selects Layer4 with navigation and a numeric keypad.
//!
//! - **`domain`** – The values flowing through the engine: physical key events,
//!   the dispatch decision, and the modifier state tracker that derives the
//!   active layer.
//!
//! - **`keymap`** – Virtual key codes and the ASCII-to-virtual-key mapping used
//!   by the injector.
//!
//! - **`layer`** – The compiled-in translation tables and the closed set of
//!   layer variants that resolve a physical event into an optional output.
//!
//! - **`inject`** – The key injector: chooses between the virtual-key path and
//!   the literal (unicode) path and hands synthetic events to an [`InputSink`].
//!
//! - **`dispatch`** – The [`Dispatcher`], which ties everything together and is
//!   called once per physical key event.

pub mod dispatch;
pub mod domain;
pub mod inject;
pub mod keymap;
pub mod layer;

pub use dispatch::{Dispatcher, DispatcherConfig, KeyHandler};
pub use domain::event::{DispatchDecision, KeyDirection, PhysicalKeyEvent};
pub use domain::modifiers::{ModifierClaim, ModifierKey, ModifierState};
pub use inject::{
    injection_path, InjectionError, InjectionPath, InputSink, KeyInjector, SyntheticKey,
    SyntheticKeyEvent,
};
pub use keymap::VirtualKey;
pub use layer::{Layer, LayerId, LayerOutput, LayerSet, Resolution};
