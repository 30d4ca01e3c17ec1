//! The distortion processor a host shell drives.
//!
//! [`DistortionProcessor`] owns the shared [`ControlBlock`], the
//! [`Distortion`] engine reading it, and the four [`Parameter`]s writing it.
//! Each parameter's callback captures its own handle to the control block,
//! so the callbacks never outlive what they write to.
//!
//! Threading:
//!
//! - **Control thread**: `set_value` on any parameter, `load_state`,
//!   `save_state`. The parameter callback stores one field of the control
//!   block.
//! - **Audio thread**: [`process_block`](DistortionProcessor::process_block).
//!   No allocation, locking or logging.

use std::sync::Arc;

use grit_core::{AutomatableParam, ControlBlock, Distortion, Effect, ParamCallback, Parameter};

use crate::layout::{ALL_PARAMS, PARAM_COUNT, ParamIndex};
use crate::state::{PluginState, StateError};

/// Display name reported to hosts.
pub const NAME: &str = "Grit";

/// The effect has no tail: silence in, silence out after the current sample.
pub const TAIL_LENGTH_SECONDS: f64 = 0.0;

/// The effect ignores MIDI input.
pub const ACCEPTS_MIDI: bool = false;

/// The effect never emits MIDI.
pub const PRODUCES_MIDI: bool = false;

/// Multi-mode waveshaping distortion with four automatable parameters.
///
/// # Example
///
/// ```rust
/// use grit_plugin::{DistortionProcessor, ParamIndex};
///
/// let processor = DistortionProcessor::new();
/// let threshold = processor.param(ParamIndex::Threshold);
/// threshold.set_value(threshold.calculate_value(0.5));
///
/// let mut left = [0.8f32, -0.8];
/// let mut right = [0.3f32, 0.3];
/// processor.process_block(&mut [&mut left[..], &mut right[..]], 1);
///
/// assert!((left[0] - 0.5).abs() < 1e-6);
/// assert_eq!(right, [0.0, 0.0]);
/// ```
pub struct DistortionProcessor {
    engine: Distortion,
    params: [Parameter; PARAM_COUNT],
}

impl DistortionProcessor {
    /// Create a processor with every parameter at its default.
    pub fn new() -> Self {
        let controls = Arc::new(ControlBlock::default());
        let params = ALL_PARAMS.map(|index| {
            Parameter::new(index.descriptor(), Some(control_writer(index, &controls)))
        });

        tracing::info!(name = NAME, params = PARAM_COUNT, "distortion processor created");

        Self {
            engine: Distortion::new(controls),
            params,
        }
    }

    /// The engine.
    pub fn engine(&self) -> &Distortion {
        &self.engine
    }

    /// The control block the parameters write and the engine reads.
    pub fn controls(&self) -> &ControlBlock {
        self.engine.controls()
    }

    /// Parameter at `index`.
    pub fn param(&self, index: ParamIndex) -> &Parameter {
        &self.params[index.index()]
    }

    /// Parameter with the given persisted identifier.
    pub fn param_by_id(&self, identifier: &str) -> Option<&Parameter> {
        ParamIndex::from_identifier(identifier).map(|index| self.param(index))
    }

    /// Number of parameters.
    pub fn param_count(&self) -> usize {
        PARAM_COUNT
    }

    /// All parameters in host order, behind the host-facing contract.
    pub fn params(&self) -> impl Iterator<Item = &dyn AutomatableParam> + '_ {
        self.params.iter().map(|p| p as &dyn AutomatableParam)
    }

    /// Called by the host before playback starts.
    ///
    /// Nothing depends on sample rate or block size, so nothing is prepared.
    pub fn prepare_to_play(&self, sample_rate: f64, max_block_size: usize) {
        tracing::debug!(sample_rate, max_block_size, "prepare to play");
    }

    /// Called by the host after playback stops.
    pub fn release_resources(&self) {
        tracing::debug!("release resources");
    }

    /// Process one host block in place.
    ///
    /// The first `num_inputs` channels carry input and are distorted sample
    /// by sample. Any further channels are output-only and may hold garbage,
    /// so they are cleared.
    pub fn process_block(&self, channels: &mut [&mut [f32]], num_inputs: usize) {
        let split = num_inputs.min(channels.len());
        let (inputs, outputs_only) = channels.split_at_mut(split);

        for channel in outputs_only.iter_mut() {
            channel.fill(0.0);
        }

        // Handles share one control block; cloning bumps a refcount.
        let mut engine = self.engine.clone();
        for channel in inputs.iter_mut() {
            engine.process_block_inplace(channel);
        }
    }

    /// Capture every parameter's normalized value.
    ///
    /// Values are clamped to \[0, 1\] with NaN stored as 0, so the blob
    /// always holds finite numbers.
    pub fn state(&self) -> PluginState {
        self.params
            .iter()
            .fold(PluginState::new(), |state, p| {
                state.with_param(p.identifier(), clamp_normalized(p.value()))
            })
    }

    /// Serialize the current parameter state.
    pub fn save_state(&self) -> Result<Vec<u8>, StateError> {
        let bytes = self.state().to_bytes()?;
        tracing::debug!(bytes = bytes.len(), "state saved");
        Ok(bytes)
    }

    /// Restore parameter state from a blob written by
    /// [`save_state`](Self::save_state).
    ///
    /// Each known identifier is applied through `set_value`, so the engine
    /// follows immediately. Values are clamped to \[0, 1\]. Unknown
    /// identifiers are skipped; parameters missing from the blob keep their
    /// current value.
    pub fn load_state(&self, bytes: &[u8]) -> Result<(), StateError> {
        let state = PluginState::from_bytes(bytes)?;
        self.apply_state(&state);
        Ok(())
    }

    /// Apply an already decoded state.
    pub fn apply_state(&self, state: &PluginState) {
        let mut applied = 0usize;
        for (identifier, &value) in &state.params {
            match self.param_by_id(identifier) {
                Some(param) => {
                    param.set_value(clamp_normalized(value));
                    applied += 1;
                }
                None => tracing::warn!(identifier = %identifier, "skipping unknown parameter in state"),
            }
        }
        tracing::debug!(applied, total = state.params.len(), "state loaded");
    }
}

impl Default for DistortionProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the callback that copies a parameter's actual value into its
/// control block field.
fn control_writer(index: ParamIndex, controls: &Arc<ControlBlock>) -> ParamCallback {
    let controls = Arc::clone(controls);
    match index {
        // Floored to an index; the engine clamps the top of the range.
        ParamIndex::Mode => Box::new(move |actual| controls.set_mode(libm::floorf(actual) as u32)),
        ParamIndex::Drive => Box::new(move |actual| controls.set_drive(actual)),
        ParamIndex::Threshold => Box::new(move |actual| controls.set_threshold(actual)),
        ParamIndex::Mix => Box::new(move |actual| controls.set_mix(actual)),
    }
}

/// Clamp into \[0, 1\], mapping NaN to 0.
fn clamp_normalized(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
