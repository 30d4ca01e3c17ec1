//! Host-facing parameter behavior through the processor.

use std::sync::{Arc, Mutex};

use grit_core::{AutomatableParam, Parameter};
use grit_plugin::{DistortionProcessor, ParamIndex};

fn recording(index: ParamIndex) -> (Parameter, Arc<Mutex<Vec<f32>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let param = Parameter::new(
        index.descriptor(),
        Some(Box::new(move |actual| sink.lock().unwrap().push(actual))),
    );
    (param, seen)
}

#[test]
fn drive_construction_reports_default() {
    let (drive, seen) = recording(ParamIndex::Drive);

    assert_eq!(drive.value(), 0.0);
    assert_eq!(drive.actual_value(), 1.0);
    assert_eq!(*seen.lock().unwrap(), [1.0]);
}

#[test]
fn drive_midpoint() {
    let (drive, seen) = recording(ParamIndex::Drive);
    drive.set_value(0.5);

    assert_eq!(drive.actual_value(), 13.0);
    assert_eq!(*seen.lock().unwrap(), [1.0, 13.0]);
    assert_eq!(drive.text(0.5, 0), "13.00");
}

#[test]
fn callback_fires_on_redundant_set() {
    let (mix, seen) = recording(ParamIndex::Mix);
    mix.set_value(1.0);
    mix.set_value(1.0);
    assert_eq!(seen.lock().unwrap().len(), 3);
}

#[test]
fn host_text_per_parameter() {
    let processor = DistortionProcessor::new();
    let texts: Vec<String> = processor.params().map(|p| p.text(1.0, 16)).collect();
    assert_eq!(texts, ["8", "25.00", "1.00", "1.00"]);

    let threshold = processor.param(ParamIndex::Threshold);
    assert_eq!(threshold.text(0.0, 16), "0.01");
    assert_eq!(threshold.value_for_text("0.5"), 0.5);
}

#[test]
fn host_names_are_truncated() {
    let processor = DistortionProcessor::new();
    let names: Vec<String> = processor.params().map(|p| p.name(32)).collect();
    assert_eq!(names, ["Mode", "Drive", "Threshold", "Mix"]);

    let threshold = processor.param(ParamIndex::Threshold);
    assert_eq!(threshold.name(4), "Thr");
    assert_eq!(threshold.label(), "");
}

#[test]
fn defaults_through_host_contract() {
    let processor = DistortionProcessor::new();
    let defaults: Vec<f32> = processor.params().map(|p| p.default_value()).collect();
    assert_eq!(defaults, [0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn host_automation_moves_the_engine() {
    let processor = DistortionProcessor::new();
    let params: Vec<&dyn AutomatableParam> = processor.params().collect();

    // Mode 2 (tanh), drive 13.
    params[0].set_value(0.25);
    params[1].set_value(0.5);

    let y = processor.engine().process_sample(0.1);
    assert!((y - libm::tanhf(1.3)).abs() < 1e-6, "got {y}");
}
