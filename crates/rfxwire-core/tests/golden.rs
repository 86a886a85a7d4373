use std::fs;
use std::path::{Path, PathBuf};

use rfxwire_core::{DecodeReport, decode_batch, default_registry};
use serde_json::Value;

fn golden_dir(case: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("golden")
        .join(case)
}

fn load_frames(dir: &Path) -> Vec<Vec<u8>> {
    let text = fs::read_to_string(dir.join("input.hex")).expect("read input.hex");
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| hex::decode(line).expect("hex frame"))
        .collect()
}

fn load_expected(dir: &Path) -> Value {
    let json = fs::read_to_string(dir.join("expected.json")).expect("read expected.json");
    serde_json::from_str(&json).expect("parse expected.json")
}

fn decode_case(case: &str) -> DecodeReport {
    let frames = load_frames(&golden_dir(case));
    decode_batch(default_registry(), &frames)
}

fn run_golden(case: &str) {
    let actual = serde_json::to_value(decode_case(case)).expect("serialize report");
    let expected = load_expected(&golden_dir(case));
    assert_eq!(actual, expected, "golden mismatch in {case}");
}

#[test]
fn golden_lighting3_koppla() {
    run_golden("lighting3_koppla");
}

#[test]
fn golden_lighting1_remote() {
    run_golden("lighting1_remote");
}

#[test]
fn golden_transmitter_response() {
    run_golden("transmitter_response");
}

#[test]
fn golden_rejected_frames() {
    run_golden("rejected_frames");
}

#[test]
fn golden_frames_reencode_to_input() {
    for case in ["lighting3_koppla", "lighting1_remote", "transmitter_response"] {
        let frames = load_frames(&golden_dir(case));
        let report = decode_batch(default_registry(), &frames);
        for (frame, decoded) in frames.iter().zip(&report.decoded) {
            assert_eq!(&decoded.message.encode(), frame, "re-encode mismatch in {case}");
        }
    }
}

#[test]
fn golden_rejected_frames_keep_input_order() {
    let report = decode_case("rejected_frames");
    let frames: Vec<&str> = report
        .rejected
        .iter()
        .map(|rejected| rejected.frame.as_str())
        .collect();
    assert_eq!(
        frames,
        vec![
            "0899000100000F10A0",
            "0812",
            "0912000100000F10A000",
            "0712000100000F10A0"
        ]
    );
}
