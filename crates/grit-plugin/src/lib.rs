//! Host-facing processor for the grit waveshaping distortion.
//!
//! This crate is the layer a plugin-format shell talks to. It owns one
//! [`Distortion`](grit_core::Distortion) engine and its four parameters,
//! runs host blocks through the engine, and saves and restores parameter
//! state.
//!
//! # Parameters
//!
//! | Identifier | Range | Default |
//! |------------|-------|---------|
//! | `mode` | 0–8 | 0 (hard clip) |
//! | `drive` | 1–25 | 1 |
//! | `threshold` | 0.01–1 | 1 |
//! | `mix` | 0–1 | 1 (fully wet) |
//!
//! Hosts see every parameter as normalized \[0, 1\] through
//! [`AutomatableParam`](grit_core::AutomatableParam).
//!
//! # Example
//!
//! ```rust
//! use grit_plugin::{DistortionProcessor, ParamIndex};
//!
//! let processor = DistortionProcessor::new();
//! processor.param(ParamIndex::Drive).set_value(0.5);
//!
//! let blob = processor.save_state().unwrap();
//! let restored = DistortionProcessor::new();
//! restored.load_state(&blob).unwrap();
//! assert_eq!(restored.param(ParamIndex::Drive).actual_value(), 13.0);
//! ```

pub mod layout;
pub mod processor;
pub mod state;

pub use layout::{ALL_PARAMS, PARAM_COUNT, ParamIndex};
pub use processor::{ACCEPTS_MIDI, DistortionProcessor, NAME, PRODUCES_MIDI, TAIL_LENGTH_SECONDS};
pub use state::{PluginState, STATE_VERSION, StateError};
