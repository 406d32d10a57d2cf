//! Layers: the closed set of translation policies.
//!
//! A layer turns a physical key event into a [`Resolution`]: an optional
//! synthetic output plus the decision for the original event.  Layers are pure;
//! injecting the output is the dispatcher's job.
//!
//! # Variants
//!
//! - [`Layer::Characters`] – scan code → character table (Layers 1–3).
//! - [`Layer::Navigation`] – scan code → virtual key table (Layer 4).
//! - [`Layer::Bypass`] – remapping disabled, everything passes through.

pub mod tables;

use std::fmt;

use crate::domain::event::{DispatchDecision, PhysicalKeyEvent};
use crate::keymap::VirtualKey;

use self::tables::{CharTable, VirtualKeyTable};

/// Identifies one of the selectable layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerId {
    Layer1,
    Layer2,
    Layer3,
    Layer4,
    Bypass,
}

impl LayerId {
    /// Every layer in index order.
    pub const ALL: [LayerId; 5] = [
        LayerId::Layer1,
        LayerId::Layer2,
        LayerId::Layer3,
        LayerId::Layer4,
        LayerId::Bypass,
    ];

    fn index(self) -> usize {
        match self {
            LayerId::Layer1 => 0,
            LayerId::Layer2 => 1,
            LayerId::Layer3 => 2,
            LayerId::Layer4 => 3,
            LayerId::Bypass => 4,
        }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayerId::Layer1 => "layer1",
            LayerId::Layer2 => "layer2",
            LayerId::Layer3 => "layer3",
            LayerId::Layer4 => "layer4",
            LayerId::Bypass => "bypass",
        };
        f.write_str(name)
    }
}

/// Synthetic output produced by a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerOutput {
    Character(char),
    VirtualKey(VirtualKey),
}

/// Result of resolving one event against a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub output: Option<LayerOutput>,
    pub decision: DispatchDecision,
}

impl Resolution {
    /// Replace the original event with `output`.
    pub fn emit(output: LayerOutput) -> Self {
        Self {
            output: Some(output),
            decision: DispatchDecision::Suppress,
        }
    }

    /// Leave the original event alone.
    pub fn pass_through() -> Self {
        Self::decide(DispatchDecision::PassThrough)
    }

    /// No output, the given decision for the original event.
    pub fn decide(decision: DispatchDecision) -> Self {
        Self {
            output: None,
            decision,
        }
    }
}

/// A compiled-in translation policy.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Characters {
        table: &'static CharTable,
        /// Decision for events the table does not cover.
        fallback: DispatchDecision,
    },
    Navigation {
        table: &'static VirtualKeyTable,
    },
    Bypass,
}

impl Layer {
    /// Resolves `event` against this layer.
    ///
    /// Scan codes outside the table (including `0`) never index the table.
    /// Character layers also ignore extended keys so the navigation cluster
    /// and the right-hand modifiers keep their platform meaning.
    pub fn resolve(&self, event: &PhysicalKeyEvent) -> Resolution {
        match *self {
            Layer::Characters { table, fallback } => {
                if event.extended || event.scan_code == 0 {
                    return Resolution::decide(fallback);
                }
                match lookup(table, event.scan_code) {
                    Some(ch) => Resolution::emit(LayerOutput::Character(ch)),
                    None => Resolution::decide(fallback),
                }
            }
            Layer::Navigation { table } => match lookup(table, event.scan_code) {
                Some(vk) => Resolution::emit(LayerOutput::VirtualKey(vk)),
                None => Resolution::pass_through(),
            },
            Layer::Bypass => Resolution::pass_through(),
        }
    }
}

fn lookup<T: Copy, const N: usize>(table: &[Option<T>; N], scan_code: u32) -> Option<T> {
    let index = usize::try_from(scan_code).ok()?;
    table.get(index).copied().flatten()
}

/// The fixed set of layers the dispatcher selects from.
#[derive(Debug, Clone)]
pub struct LayerSet {
    layers: [Layer; 5],
}

impl LayerSet {
    /// The Neo layout: three character layers, the navigation layer, and bypass.
    pub fn neo() -> Self {
        let characters = |table: &'static CharTable| Layer::Characters {
            table,
            fallback: DispatchDecision::PassThrough,
        };
        Self {
            layers: [
                characters(&tables::LAYER1),
                characters(&tables::LAYER2),
                characters(&tables::LAYER3),
                Layer::Navigation {
                    table: &tables::LAYER4,
                },
                Layer::Bypass,
            ],
        }
    }

    pub fn get(&self, id: LayerId) -> &Layer {
        &self.layers[id.index()]
    }
}

impl Default for LayerSet {
    fn default() -> Self {
        Self::neo()
    }
}
