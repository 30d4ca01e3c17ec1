//! State save/load roundtrip tests for the distortion processor.

use grit_plugin::{ALL_PARAMS, DistortionProcessor, ParamIndex, PluginState, StateError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("grit_plugin=debug")
        .with_test_writer()
        .try_init();
}

fn assert_same_params(a: &DistortionProcessor, b: &DistortionProcessor) {
    for index in ALL_PARAMS {
        let v1 = a.param(index).value();
        let v2 = b.param(index).value();
        assert_eq!(v1, v2, "{index:?} roundtrip mismatch: {v1} != {v2}");
    }
}

#[test]
fn state_roundtrip_defaults() {
    init_tracing();
    let processor = DistortionProcessor::new();
    let blob = processor.save_state().unwrap();

    let restored = DistortionProcessor::new();
    restored.load_state(&blob).unwrap();
    assert_same_params(&processor, &restored);
}

#[test]
fn state_roundtrip_extremes() {
    init_tracing();
    for extreme in [0.0f32, 1.0] {
        let processor = DistortionProcessor::new();
        for index in ALL_PARAMS {
            processor.param(index).set_value(extreme);
        }
        let blob = processor.save_state().unwrap();

        let restored = DistortionProcessor::new();
        restored.load_state(&blob).unwrap();
        assert_same_params(&processor, &restored);
        assert_eq!(
            restored.controls().snapshot(),
            processor.controls().snapshot(),
            "control block differs after restoring {extreme}"
        );
    }
}

#[test]
fn state_roundtrip_arbitrary_values() {
    let processor = DistortionProcessor::new();
    processor.param(ParamIndex::Mode).set_value(0.625);
    processor.param(ParamIndex::Drive).set_value(0.123_456_7);
    processor.param(ParamIndex::Threshold).set_value(0.333);
    processor.param(ParamIndex::Mix).set_value(0.9);
    let blob = processor.save_state().unwrap();

    let restored = DistortionProcessor::new();
    restored.load_state(&blob).unwrap();
    assert_same_params(&processor, &restored);
    assert_eq!(restored.controls().mode(), 5);
}

#[test]
fn load_drives_the_engine() {
    let processor = DistortionProcessor::new();
    let blob = PluginState::new()
        .with_param("mode", 0.375)
        .with_param("drive", 0.0)
        .to_bytes()
        .unwrap();
    processor.load_state(&blob).unwrap();

    // Full-wave rectifier at unity drive.
    assert_eq!(processor.engine().process_sample(-0.4), 0.4);
}

#[test]
fn state_ignores_unknown_identifiers() {
    init_tracing();
    let processor = DistortionProcessor::new();
    let json = br#"{"version":1,"params":{"drive":0.5,"tone":0.2,"bias":0.9}}"#;
    processor.load_state(json).unwrap();

    assert_eq!(processor.param(ParamIndex::Drive).value(), 0.5);
    assert_eq!(processor.controls().drive(), 13.0);
}

#[test]
fn state_missing_params_keep_current_values() {
    let processor = DistortionProcessor::new();
    processor.param(ParamIndex::Mix).set_value(0.4);

    processor.load_state(br#"{"params":{"drive":1.0}}"#).unwrap();

    assert_eq!(processor.param(ParamIndex::Mix).value(), 0.4);
    assert_eq!(processor.param(ParamIndex::Drive).actual_value(), 25.0);
}

#[test]
fn state_clamps_out_of_range_values() {
    let processor = DistortionProcessor::new();
    processor
        .load_state(br#"{"params":{"drive":7.5,"mix":-2.0}}"#)
        .unwrap();

    assert_eq!(processor.param(ParamIndex::Drive).value(), 1.0);
    assert_eq!(processor.param(ParamIndex::Mix).value(), 0.0);
    assert_eq!(processor.controls().mix(), 0.0);
}

#[test]
fn state_rejects_other_versions() {
    let processor = DistortionProcessor::new();
    processor.param(ParamIndex::Drive).set_value(0.25);

    let err = processor
        .load_state(br#"{"version":2,"params":{"drive":1.0}}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        StateError::UnsupportedVersion {
            found: 2,
            expected: 1
        }
    ));
    // Nothing applied on rejection.
    assert_eq!(processor.param(ParamIndex::Drive).value(), 0.25);
}

#[test]
fn state_rejects_malformed_blobs() {
    let processor = DistortionProcessor::new();
    for blob in [&b""[..], b"{", b"[1,2,3]", b"\xff\xfe"] {
        let err = processor.load_state(blob).unwrap_err();
        assert!(matches!(err, StateError::Json(_)), "blob {blob:?}: {err}");
    }
    assert_eq!(processor.param(ParamIndex::Drive).value(), 0.0);
}

#[test]
fn saved_blob_is_keyed_by_identifier() {
    let processor = DistortionProcessor::new();
    let state = processor.state();
    let keys: Vec<&str> = state.params.keys().map(String::as_str).collect();
    assert_eq!(keys, ["drive", "mix", "mode", "threshold"]);
    assert_eq!(state.params["mix"], 1.0);
    assert_eq!(state.params["mode"], 0.0);
}

#[test]
fn state_roundtrip_with_nan_parameter() {
    init_tracing();
    let processor = DistortionProcessor::new();
    processor.param(ParamIndex::Drive).set_value(0.5);
    processor.param(ParamIndex::Mix).set_value(f32::NAN);

    let blob = processor.save_state().unwrap();
    let restored = DistortionProcessor::new();
    restored.load_state(&blob).unwrap();

    assert_eq!(restored.param(ParamIndex::Drive).actual_value(), 13.0);
    assert_eq!(restored.param(ParamIndex::Mix).value(), 0.0);
}

#[test]
fn state_loads_null_values_as_zero() {
    let processor = DistortionProcessor::new();
    processor
        .load_state(br#"{"version":1,"params":{"drive":0.5,"mix":null,"mode":0.0,"threshold":1.0}}"#)
        .unwrap();

    assert_eq!(processor.controls().drive(), 13.0);
    assert_eq!(processor.param(ParamIndex::Mix).value(), 0.0);
    assert_eq!(processor.controls().mix(), 0.0);
}
