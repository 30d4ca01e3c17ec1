//! Control block shared between parameter callbacks and the engine.
//!
//! [`Controls`] is the plain record the per-sample math consumes.
//! [`ControlBlock`] is its shared form: one atomic per field, so a control
//! thread can overwrite a field while the audio thread reads it. Each field
//! is independent. A reader may see the new drive alongside the old mix for
//! the length of one block; no field is ever torn.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::atomic::AtomicF32;

/// Current values of the distortion controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    /// Active shaper index. Values past the bank are clamped by the engine.
    pub mode: u32,
    /// Linear pre-gain, ≥ 1.
    pub drive: f32,
    /// Amplitude ceiling in (0, 1].
    pub threshold: f32,
    /// Dry/wet blend: 0 = dry, 1 = wet.
    pub mix: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            mode: 0,
            drive: 1.0,
            threshold: 1.0,
            mix: 1.0,
        }
    }
}

/// Lock-free storage for [`Controls`].
///
/// All accesses use relaxed ordering: no field guards another, so there is
/// nothing to synchronize beyond the single-word store itself.
#[derive(Debug)]
pub struct ControlBlock {
    mode: AtomicU32,
    drive: AtomicF32,
    threshold: AtomicF32,
    mix: AtomicF32,
}

impl ControlBlock {
    /// Create a block holding the given controls.
    pub fn new(controls: Controls) -> Self {
        Self {
            mode: AtomicU32::new(controls.mode),
            drive: AtomicF32::new(controls.drive),
            threshold: AtomicF32::new(controls.threshold),
            mix: AtomicF32::new(controls.mix),
        }
    }

    /// Read all four fields.
    #[inline]
    pub fn snapshot(&self) -> Controls {
        Controls {
            mode: self.mode(),
            drive: self.drive(),
            threshold: self.threshold(),
            mix: self.mix(),
        }
    }

    /// Shaper index.
    #[inline]
    pub fn mode(&self) -> u32 {
        self.mode.load(Ordering::Relaxed)
    }

    /// Set the shaper index.
    #[inline]
    pub fn set_mode(&self, mode: u32) {
        self.mode.store(mode, Ordering::Relaxed);
    }

    /// Pre-gain multiplier.
    #[inline]
    pub fn drive(&self) -> f32 {
        self.drive.load(Ordering::Relaxed)
    }

    /// Set the pre-gain multiplier.
    #[inline]
    pub fn set_drive(&self, drive: f32) {
        self.drive.store(drive, Ordering::Relaxed);
    }

    /// Clipping ceiling.
    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold.load(Ordering::Relaxed)
    }

    /// Set the clipping ceiling.
    #[inline]
    pub fn set_threshold(&self, threshold: f32) {
        self.threshold.store(threshold, Ordering::Relaxed);
    }

    /// Dry/wet blend.
    #[inline]
    pub fn mix(&self) -> f32 {
        self.mix.load(Ordering::Relaxed)
    }

    /// Set the dry/wet blend.
    #[inline]
    pub fn set_mix(&self, mix: f32) {
        self.mix.store(mix, Ordering::Relaxed);
    }

    /// Overwrite every field. Each store is independent.
    pub fn store(&self, controls: Controls) {
        self.set_mode(controls.mode);
        self.set_drive(controls.drive);
        self.set_threshold(controls.threshold);
        self.set_mix(controls.mix);
    }
}

impl Default for ControlBlock {
    fn default() -> Self {
        Self::new(Controls::default())
    }
}
