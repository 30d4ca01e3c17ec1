//! Plugin state blobs.
//!
//! State is JSON mapping each parameter identifier to its normalized value:
//!
//! ```json
//! { "version": 1, "params": { "drive": 0.5, "mix": 1.0, "mode": 0.0, "threshold": 1.0 } }
//! ```
//!
//! Identifiers rather than positions key the map, so parameters can be
//! reordered without breaking saved sessions.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Current state format version.
pub const STATE_VERSION: u32 = 1;

/// Errors from saving or restoring state.
#[derive(Debug, Error)]
pub enum StateError {
    /// The blob is not valid state JSON.
    #[error("failed to parse state: {0}")]
    Json(#[from] serde_json::Error),

    /// The blob was written by an incompatible version.
    #[error("unsupported state version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the blob.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },
}

/// Serialized parameter state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginState {
    /// Format version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Normalized value per parameter identifier.
    ///
    /// `null` entries, which `serde_json` writes for non-finite floats, read
    /// back as NaN.
    #[serde(default, deserialize_with = "nullable_params")]
    pub params: BTreeMap<String, f32>,
}

fn default_version() -> u32 {
    STATE_VERSION
}

fn nullable_params<'de, D>(deserializer: D) -> Result<BTreeMap<String, f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Option<f32>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(id, value)| (id, value.unwrap_or(f32::NAN)))
        .collect())
}

impl PluginState {
    /// Create an empty state at the current version.
    pub fn new() -> Self {
        Self {
            version: STATE_VERSION,
            params: BTreeMap::new(),
        }
    }

    /// Add one parameter value.
    pub fn with_param(mut self, identifier: impl Into<String>, normalized: f32) -> Self {
        self.params.insert(identifier.into(), normalized);
        self
    }

    /// Encode as JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StateError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from JSON bytes, rejecting other versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        let state: Self = serde_json::from_slice(bytes)?;
        if state.version != STATE_VERSION {
            return Err(StateError::UnsupportedVersion {
                found: state.version,
                expected: STATE_VERSION,
            });
        }
        Ok(state)
    }
}

impl Default for PluginState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn bytes_roundtrip() {
        let state = PluginState::new()
            .with_param("drive", 0.5)
            .with_param("mode", 0.25);
        let bytes = state.to_bytes().unwrap();
        assert_eq!(PluginState::from_bytes(&bytes).unwrap(), state);
    }

    #[test]
    fn json_layout() {
        let state = PluginState::new().with_param("mix", 1.0);
        let json = String::from_utf8(state.to_bytes().unwrap()).unwrap();
        assert_eq!(json, r#"{"version":1,"params":{"mix":1.0}}"#);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let state = PluginState::from_bytes(b"{}").unwrap();
        assert_eq!(state.version, STATE_VERSION);
        assert!(state.params.is_empty());
    }

    #[test]
    fn rejects_other_versions() {
        let err = PluginState::from_bytes(br#"{"version":7,"params":{}}"#).unwrap_err();
        assert!(matches!(
            err,
            StateError::UnsupportedVersion {
                found: 7,
                expected: 1
            }
        ));
        assert_eq!(err.to_string(), "unsupported state version 7 (expected 1)");
        assert!(err.source().is_none());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PluginState::from_bytes(b"not json").unwrap_err();
        assert!(matches!(err, StateError::Json(_)));
        assert!(err.to_string().starts_with("failed to parse state"), "got: {err}");
        assert!(err.source().is_some());
    }

    #[test]
    fn null_values_read_as_nan() {
        let state = PluginState::from_bytes(br#"{"version":1,"params":{"mix":null,"drive":0.5}}"#)
            .unwrap();
        assert!(state.params["mix"].is_nan());
        assert_eq!(state.params["drive"], 0.5);
    }

    #[test]
    fn rejects_wrong_value_types() {
        let err = PluginState::from_bytes(br#"{"params":{"drive":"loud"}}"#).unwrap_err();
        assert!(matches!(err, StateError::Json(_)));
    }
}
