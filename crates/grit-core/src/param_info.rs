//! Parameter metadata and the host-facing parameter contract.
//!
//! Hosts see every parameter as a normalized value in \[0.0, 1.0\]. The DSP
//! wants the same parameter in its physical unit (a gain multiplier, a
//! threshold, a mode index). A [`ParamDescriptor`] carries the immutable
//! metadata that converts between the two:
//!
//! - **Normalize**: `normalized = (actual - min) / (max - min)`
//! - **Denormalize**: `actual = min + normalized · (max - min)`
//!
//! Neither direction clamps. Values outside the range map linearly outside
//! \[0, 1\] and back.
//!
//! [`AutomatableParam`] is the capability a host adapter needs: normalized
//! getter and setter, default, name, label, and text conversion. Anything
//! implementing it can be registered with a host.
//!
//! # Example
//!
//! ```rust
//! use grit_core::ParamDescriptor;
//!
//! let drive = ParamDescriptor::ranged("drive", 1.0, 1.0, 25.0, "Drive").with_precision(2);
//!
//! assert_eq!(drive.default_value, 0.0);
//! assert_eq!(drive.calculate_actual_value(0.5), 13.0);
//! assert_eq!(drive.format_value(0.5), "13.00");
//! ```

use alloc::format;
use alloc::string::String;

/// Immutable description of one automatable parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Stable token used as the key in persisted state. Must be unique
    /// within a plugin and must never change once shipped.
    pub identifier: &'static str,

    /// Human-readable name.
    pub name: &'static str,

    /// Unit suffix shown next to the value (e.g. `"dB"`), often empty.
    pub label: &'static str,

    /// Number of fractional digits in textual display.
    pub precision: usize,

    /// Actual value at normalized 0.0.
    pub actual_minimum: f32,

    /// Actual value at normalized 1.0.
    pub actual_maximum: f32,

    /// Normalized default in \[0, 1\].
    pub default_value: f32,
}

impl ParamDescriptor {
    /// Describe a parameter whose actual range is \[0, 1\].
    ///
    /// The normalized and actual values coincide.
    pub const fn normalized(
        identifier: &'static str,
        default_value: f32,
        name: &'static str,
    ) -> Self {
        Self {
            identifier,
            name,
            label: "",
            precision: 0,
            actual_minimum: 0.0,
            actual_maximum: 1.0,
            default_value,
        }
    }

    /// Describe a parameter by its actual range and actual default.
    ///
    /// The normalized default is derived from `actual_default`.
    /// `actual_minimum` must be strictly less than `actual_maximum`.
    pub fn ranged(
        identifier: &'static str,
        actual_default: f32,
        actual_minimum: f32,
        actual_maximum: f32,
        name: &'static str,
    ) -> Self {
        debug_assert!(
            actual_minimum < actual_maximum,
            "parameter '{identifier}' has an empty range"
        );
        let mut desc = Self {
            identifier,
            name,
            label: "",
            precision: 0,
            actual_minimum,
            actual_maximum,
            default_value: 0.0,
        };
        desc.default_value = desc.calculate_value(actual_default);
        desc
    }

    /// Sets the unit label.
    ///
    /// Builder; call after a constructor.
    pub const fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Sets the display precision.
    ///
    /// Builder; call after a constructor.
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Converts an actual value to its normalized value. Does not clamp.
    #[inline]
    pub fn calculate_value(&self, actual: f32) -> f32 {
        (actual - self.actual_minimum) / (self.actual_maximum - self.actual_minimum)
    }

    /// Converts a normalized value to its actual value. Does not clamp.
    #[inline]
    pub fn calculate_actual_value(&self, normalized: f32) -> f32 {
        self.actual_minimum + (self.actual_maximum - self.actual_minimum) * normalized
    }

    /// Actual value of the default.
    #[inline]
    pub fn actual_default_value(&self) -> f32 {
        self.calculate_actual_value(self.default_value)
    }

    /// The name, cut down when it does not fit in `max_len` characters.
    ///
    /// A name that fits is returned whole. One that does not is cut to
    /// `max_len - 1` characters, one fewer than the host allowed; hosts have
    /// been shown exactly this length and it is kept so their displays
    /// do not change.
    ///
    /// ```rust
    /// use grit_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::normalized("mix", 1.0, "Threshold");
    /// assert_eq!(desc.truncated_name(9), "Threshold");
    /// assert_eq!(desc.truncated_name(5), "Thre");
    /// ```
    pub fn truncated_name(&self, max_len: usize) -> String {
        if max_len >= self.name.chars().count() {
            String::from(self.name)
        } else {
            self.name.chars().take(max_len.saturating_sub(1)).collect()
        }
    }

    /// Formats the actual value of `normalized` with `precision` fractional
    /// digits.
    ///
    /// The label is not appended; hosts show it separately.
    pub fn format_value(&self, normalized: f32) -> String {
        format!(
            "{:.*}",
            self.precision,
            self.calculate_actual_value(normalized)
        )
    }

    /// Parses the leading number in `text` and returns it as a normalized
    /// value.
    ///
    /// No inverse mapping is applied: `"13"` on a \[1, 25\] parameter yields
    /// 13.0, not 0.5. Text without a leading number yields 0.0.
    pub fn parse_value(&self, text: &str) -> f32 {
        parse_leading_float(text)
    }
}

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits, an
/// optional fraction and an optional exponent. Trailing text such as a unit
/// suffix is ignored. Returns 0.0 when no digits are found.
///
/// ```rust
/// use grit_core::parse_leading_float;
///
/// assert_eq!(parse_leading_float("  -2.5 dB"), -2.5);
/// assert_eq!(parse_leading_float("1e2x"), 100.0);
/// assert_eq!(parse_leading_float(".5"), 0.5);
/// assert_eq!(parse_leading_float("drive"), 0.0);
/// ```
pub fn parse_leading_float(text: &str) -> f32 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts if at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// The contract a host adapter needs from a parameter.
///
/// All values crossing this interface are normalized to \[0, 1\] except the
/// text methods, which render and read the parameter's display form.
pub trait AutomatableParam {
    /// Stable identifier used as the persisted-state key.
    fn identifier(&self) -> &str;

    /// Current normalized value.
    fn value(&self) -> f32;

    /// Store a normalized value and notify any subscriber.
    fn set_value(&self, normalized: f32);

    /// Normalized default.
    fn default_value(&self) -> f32;

    /// Name fitted to `max_len` characters.
    fn name(&self, max_len: usize) -> String;

    /// Unit label.
    fn label(&self) -> &str;

    /// Display text for a normalized value.
    fn text(&self, normalized: f32, max_len: usize) -> String;

    /// Normalized value for display text.
    fn value_for_text(&self, text: &str) -> f32;
}
