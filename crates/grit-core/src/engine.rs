//! Per-sample distortion engine.
//!
//! The engine reads the shared [`ControlBlock`], drives the input into the
//! selected [`Shaper`], limits the result to the threshold and blends it
//! with the dry input:
//!
//! ```text
//! w = clamp(shaper[mode](drive · x), -threshold, threshold)
//! y = mix · w + (1 - mix) · x
//! ```
//!
//! It keeps no per-sample state. Given the same input and the same controls
//! it returns the same output.

use alloc::sync::Arc;

use crate::control::{ControlBlock, Controls};
use crate::effect::Effect;
use crate::shaper::{Shaper, hard_clip};

/// Distortion effect reading its controls from a shared [`ControlBlock`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use grit_core::{ControlBlock, Distortion};
///
/// let controls = Arc::new(ControlBlock::default());
/// let dist = Distortion::new(Arc::clone(&controls));
///
/// controls.set_threshold(0.5);
/// assert_eq!(dist.process_sample(0.8), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Distortion {
    controls: Arc<ControlBlock>,
}

impl Distortion {
    /// Create an engine bound to `controls`.
    pub fn new(controls: Arc<ControlBlock>) -> Self {
        Self { controls }
    }

    /// The control block this engine reads.
    pub fn controls(&self) -> &Arc<ControlBlock> {
        &self.controls
    }

    /// Process one sample against the current controls.
    #[inline]
    pub fn process_sample(&self, x: f32) -> f32 {
        distort(&self.controls.snapshot(), x)
    }
}

impl Effect for Distortion {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.process_sample(input)
    }
}

/// Shape one sample with an explicit set of controls.
#[inline]
pub fn distort(controls: &Controls, x: f32) -> f32 {
    let shaper = Shaper::from_index(controls.mode as usize);
    let shaped = shaper.apply(controls.drive * x, controls.threshold);
    let wet = hard_clip(shaped, controls.threshold);
    wet_dry_mix(x, wet, controls.mix)
}

/// Blend dry and wet signals: `mix · wet + (1 - mix) · dry`.
///
/// Written as two products rather than `dry + (wet - dry) · mix` so that
/// `mix = 0` returns `dry` bit-for-bit.
#[inline]
pub fn wet_dry_mix(dry: f32, wet: f32, mix: f32) -> f32 {
    mix * wet + (1.0 - mix) * dry
}
