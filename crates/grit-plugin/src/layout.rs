//! Parameter layout of the distortion plugin.
//!
//! | Index | Identifier | Actual range | Default | Precision | Writes |
//! |-------|------------|--------------|---------|-----------|--------|
//! | 0 | `mode` | 0–8 | 0 | 0 | `mode = floor(actual)` |
//! | 1 | `drive` | 1–25 | 1 | 2 | `drive = actual` |
//! | 2 | `threshold` | 0.01–1 | 1 | 2 | `threshold = actual` |
//! | 3 | `mix` | 0–1 | 1 | 2 | `mix = actual` |
//!
//! Identifiers are persisted in state blobs and must never change.

use grit_core::ParamDescriptor;

/// Position of each parameter in host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamIndex {
    /// Shaper selection.
    Mode = 0,
    /// Pre-gain.
    Drive = 1,
    /// Clipping ceiling.
    Threshold = 2,
    /// Dry/wet blend.
    Mix = 3,
}

/// Number of parameters.
pub const PARAM_COUNT: usize = 4;

/// Every parameter index, in host order.
pub const ALL_PARAMS: [ParamIndex; PARAM_COUNT] = [
    ParamIndex::Mode,
    ParamIndex::Drive,
    ParamIndex::Threshold,
    ParamIndex::Mix,
];

impl ParamIndex {
    /// Host-order position.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The descriptor for this parameter.
    pub fn descriptor(self) -> ParamDescriptor {
        match self {
            ParamIndex::Mode => ParamDescriptor::ranged("mode", 0.0, 0.0, 8.0, "Mode"),
            ParamIndex::Drive => {
                ParamDescriptor::ranged("drive", 1.0, 1.0, 25.0, "Drive").with_precision(2)
            }
            ParamIndex::Threshold => {
                ParamDescriptor::ranged("threshold", 1.0, 0.01, 1.0, "Threshold").with_precision(2)
            }
            ParamIndex::Mix => ParamDescriptor::normalized("mix", 1.0, "Mix").with_precision(2),
        }
    }

    /// Look up an index by persisted identifier.
    pub fn from_identifier(id: &str) -> Option<Self> {
        ALL_PARAMS
            .into_iter()
            .find(|p| p.descriptor().identifier == id)
    }
}
