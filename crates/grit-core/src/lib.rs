//! Grit Core - waveshaping distortion DSP
//!
//! This crate holds everything that runs per sample or crosses from the
//! control thread to the audio thread. The audio path never allocates, never
//! locks and never fails.
//!
//! # Core Abstractions
//!
//! ## Shaping
//!
//! - [`Shaper`] - The eight-function waveshaper bank
//! - [`Distortion`] - Drive, shape, clamp and blend one sample at a time
//! - [`Effect`] - Object-safe per-sample processing trait
//!
//! ## Controls
//!
//! - [`Controls`] - Plain record of mode, drive, threshold and mix
//! - [`ControlBlock`] - Lock-free shared form of [`Controls`]
//! - [`AtomicF32`] - Bit-cast `f32` atomic
//!
//! ## Parameters
//!
//! - [`ParamDescriptor`] - Identifier, name, label, precision and actual range
//! - [`Parameter`] - Atomic normalized value plus change callback
//! - [`AutomatableParam`] - What a host adapter needs from a parameter
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use grit_core::{ControlBlock, Distortion, ParamDescriptor, Parameter};
//!
//! let controls = Arc::new(ControlBlock::default());
//! let engine = Distortion::new(Arc::clone(&controls));
//!
//! let sink = Arc::clone(&controls);
//! let mode = Parameter::new(
//!     ParamDescriptor::ranged("mode", 0.0, 0.0, 8.0, "Mode"),
//!     Some(Box::new(move |actual| sink.set_mode(libm::floorf(actual) as u32))),
//! );
//!
//! mode.set_value(mode.calculate_value(3.0)); // full-wave rectifier
//! assert_eq!(engine.process_sample(-0.4), 0.4);
//! ```
//!
//! # no_std Support
//!
//! Disable the default `std` feature to build without the standard library.
//! `alloc` is still required for parameter names and callbacks.
//!
//! ```toml
//! [dependencies]
//! grit-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod atomic;
pub mod control;
pub mod effect;
pub mod engine;
pub mod param;
pub mod param_info;
pub mod shaper;

// Re-export main types at crate root
pub use atomic::AtomicF32;
pub use control::{ControlBlock, Controls};
pub use effect::Effect;
pub use engine::{Distortion, distort, wet_dry_mix};
pub use param::{ParamCallback, Parameter};
pub use param_info::{AutomatableParam, ParamDescriptor, parse_leading_float};
pub use shaper::{
    CRUSH_BITS, MAX_FOLDS, Shaper, bit_crush, cubic_soft_clip, foldback, full_wave_rectify,
    half_wave_rectify, hard_clip, soft_clip, square,
};
