//! Lock-free `f32` storage.
//!
//! There is no `AtomicF32` in `core`, so values are bit-cast through
//! `AtomicU32`. A load observes either the old or the new bit pattern,
//! never a mix of the two.

use core::sync::atomic::{AtomicU32, Ordering};

/// An `f32` that can be shared between the control thread and the audio
/// thread without locking.
#[derive(Debug)]
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    /// Create a new atomic holding `value`.
    pub const fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    /// Load the current value.
    #[inline]
    pub fn load(&self, order: Ordering) -> f32 {
        f32::from_bits(self.0.load(order))
    }

    /// Store a new value.
    #[inline]
    pub fn store(&self, value: f32, order: Ordering) {
        self.0.store(value.to_bits(), order);
    }
}

impl Default for AtomicF32 {
    fn default() -> Self {
        Self::new(0.0)
    }
}
