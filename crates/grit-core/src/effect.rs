//! Core Effect trait.
//!
//! The [`Effect`] trait is the interface a host shell drives: single-sample
//! processing plus block helpers built on top of it.
//!
//! ## Design Decisions
//!
//! - **Mono processing**: Single `f32` input/output. Multichannel hosts run
//!   one call per channel per sample.
//!
//! - **Object-safe**: `dyn Effect` works for runtime dispatch, though the
//!   processor holds its engine by value.
//!
//! - **No allocations**: All methods are called on the audio thread.
//!
//! - **No sample rate**: Nothing here depends on it, so there is no hook
//!   for it.

/// Core trait for all audio effects.
///
/// # Example
///
/// ```rust
/// use grit_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
/// }
///
/// let mut g = Gain { gain: 0.5 };
/// let mut buf = [1.0, -1.0];
/// g.process_block_inplace(&mut buf);
/// assert_eq!(buf, [0.5, -0.5]);
/// ```
pub trait Effect {
    /// Process a single sample.
    ///
    /// # Arguments
    /// * `input` - Input sample, typically in range [-1.0, 1.0]
    ///
    /// # Returns
    /// Processed output sample
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` for each sample.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Reset internal state.
    ///
    /// Default does nothing, which is right for memoryless effects.
    fn reset(&mut self) {}

    /// Report processing latency in samples.
    ///
    /// Default returns 0 (no latency).
    fn latency_samples(&self) -> usize {
        0
    }
}
