//! Automatable parameters with lock-free storage and change callbacks.
//!
//! A [`Parameter`] pairs an immutable [`ParamDescriptor`] with the one piece
//! of mutable state, the normalized value, held in an [`AtomicF32`]. Every
//! call to [`set_value`](Parameter::set_value) stores the value and then
//! hands the *actual* value to the parameter's callback, if it has one.
//!
//! The callback runs synchronously on whichever thread called `set_value`.
//! It must not block; in practice it writes one field of a
//! [`ControlBlock`](crate::ControlBlock).
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use grit_core::{ControlBlock, ParamDescriptor, Parameter};
//!
//! let controls = Arc::new(ControlBlock::default());
//! let sink = Arc::clone(&controls);
//! let drive = Parameter::new(
//!     ParamDescriptor::ranged("drive", 1.0, 1.0, 25.0, "Drive").with_precision(2),
//!     Some(Box::new(move |actual| sink.set_drive(actual))),
//! );
//!
//! drive.set_value(0.5);
//! assert_eq!(controls.drive(), 13.0);
//! ```

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;
use core::sync::atomic::Ordering;

use crate::atomic::AtomicF32;
use crate::param_info::{AutomatableParam, ParamDescriptor};

/// Callback invoked with the actual value after every store.
pub type ParamCallback = Box<dyn Fn(f32) + Send + Sync>;

/// A single automatable control.
pub struct Parameter {
    descriptor: ParamDescriptor,
    value: AtomicF32,
    on_change: Option<ParamCallback>,
}

impl Parameter {
    /// Create a parameter and apply its default.
    ///
    /// The default is stored through [`set_value`](Self::set_value), so
    /// `on_change` fires once with the actual default before this returns.
    /// Subscribers therefore start out in sync with the parameter.
    pub fn new(descriptor: ParamDescriptor, on_change: Option<ParamCallback>) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = descriptor.identifier,
            default = descriptor.actual_default_value(),
            min = descriptor.actual_minimum,
            max = descriptor.actual_maximum,
            "parameter created"
        );

        let param = Self {
            descriptor,
            value: AtomicF32::new(descriptor.default_value),
            on_change,
        };
        param.set_value(descriptor.default_value);
        param
    }

    /// The immutable metadata.
    pub fn descriptor(&self) -> &ParamDescriptor {
        &self.descriptor
    }

    /// Stable identifier.
    pub fn identifier(&self) -> &'static str {
        self.descriptor.identifier
    }

    /// Current normalized value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value.load(Ordering::Acquire)
    }

    /// Store a normalized value, then notify the callback with its actual
    /// value.
    ///
    /// The callback fires on every call, including when the value is
    /// unchanged. The value is not validated.
    #[inline]
    pub fn set_value(&self, normalized: f32) {
        self.value.store(normalized, Ordering::Release);
        if let Some(callback) = &self.on_change {
            callback(self.actual_value());
        }
    }

    /// Normalized default.
    pub fn default_value(&self) -> f32 {
        self.descriptor.default_value
    }

    /// Current actual value.
    #[inline]
    pub fn actual_value(&self) -> f32 {
        self.descriptor.calculate_actual_value(self.value())
    }

    /// Actual value of the default.
    pub fn actual_default_value(&self) -> f32 {
        self.descriptor.actual_default_value()
    }

    /// Actual value at normalized 0.0.
    pub fn actual_minimum(&self) -> f32 {
        self.descriptor.actual_minimum
    }

    /// Actual value at normalized 1.0.
    pub fn actual_maximum(&self) -> f32 {
        self.descriptor.actual_maximum
    }

    /// Normalized value for an actual value.
    pub fn calculate_value(&self, actual: f32) -> f32 {
        self.descriptor.calculate_value(actual)
    }

    /// Actual value for a normalized value.
    pub fn calculate_actual_value(&self, normalized: f32) -> f32 {
        self.descriptor.calculate_actual_value(normalized)
    }

    /// Name fitted to `max_len` characters. See
    /// [`ParamDescriptor::truncated_name`].
    pub fn name(&self, max_len: usize) -> String {
        self.descriptor.truncated_name(max_len)
    }

    /// Unit label.
    pub fn label(&self) -> &'static str {
        self.descriptor.label
    }

    /// Display text for `normalized`, without the label.
    pub fn text(&self, normalized: f32, _max_len: usize) -> String {
        self.descriptor.format_value(normalized)
    }

    /// Leading number of `text`, taken as a normalized value.
    pub fn value_for_text(&self, text: &str) -> f32 {
        self.descriptor.parse_value(text)
    }

    /// One-line dump of the current state, for debugging.
    ///
    /// ```rust
    /// use grit_core::{ParamDescriptor, Parameter};
    ///
    /// let p = Parameter::new(ParamDescriptor::normalized("mix", 1.0, "Mix"), None);
    /// assert!(p.debug_state().starts_with("Mix: value 1"));
    /// ```
    pub fn debug_state(&self) -> String {
        let d = &self.descriptor;
        format!(
            "{name}: value {value} (actual {actual}{label}), default {default} (actual {actual_default}{label}), range [{min}{label}, {max}{label}]",
            name = d.name,
            value = self.value(),
            actual = self.actual_value(),
            default = d.default_value,
            actual_default = d.actual_default_value(),
            min = d.actual_minimum,
            max = d.actual_maximum,
            label = d.label,
        )
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("descriptor", &self.descriptor)
            .field("value", &self.value())
            .field("has_callback", &self.on_change.is_some())
            .finish()
    }
}

impl AutomatableParam for Parameter {
    fn identifier(&self) -> &str {
        self.descriptor.identifier
    }

    fn value(&self) -> f32 {
        Parameter::value(self)
    }

    fn set_value(&self, normalized: f32) {
        Parameter::set_value(self, normalized);
    }

    fn default_value(&self) -> f32 {
        Parameter::default_value(self)
    }

    fn name(&self, max_len: usize) -> String {
        Parameter::name(self, max_len)
    }

    fn label(&self) -> &str {
        self.descriptor.label
    }

    fn text(&self, normalized: f32, max_len: usize) -> String {
        Parameter::text(self, normalized, max_len)
    }

    fn value_for_text(&self, text: &str) -> f32 {
        Parameter::value_for_text(self, text)
    }
}
