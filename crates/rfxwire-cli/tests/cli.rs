use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

const KOPPLA_ON: &str = "0812000100000F10A0";
const ARC_ON: &str = "0710010341050170";
const UNKNOWN_TYPE: &str = "0899000100000F10A0";

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("rfxwire"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_frames() -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join("lighting3_koppla")
        .join("input.hex")
}

fn stdout_json(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn help_lists_frame_commands() {
    cmd()
        .arg("frame")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("decode").and(contains("encode")));
}

#[test]
fn decode_outputs_semantic_values() {
    let assert = cmd()
        .arg("frame")
        .arg("decode")
        .arg(KOPPLA_ON)
        .assert()
        .success();
    let json = stdout_json(assert.get_output());

    assert_eq!(json[0]["message"]["packet_type"], "lighting3");
    assert_eq!(json[0]["message"]["command"], "ON");
    assert_eq!(json[0]["values"][3]["selector"], "DIMMING_LEVEL");
    assert_eq!(json[0]["values"][3]["value"]["percent"], 100);
}

#[test]
fn decode_accepts_separators_and_reports_device_id() {
    let assert = cmd()
        .arg("frame")
        .arg("decode")
        .arg("07:10:01:03:41:05:01:70")
        .assert()
        .success();
    let json = stdout_json(assert.get_output());

    assert_eq!(json[0]["frame"], ARC_ON);
    assert_eq!(json[0]["device_id"], "A.5");
}

#[test]
fn decode_reads_input_file_and_skips_comments() {
    let assert = cmd()
        .arg("frame")
        .arg("decode")
        .arg("--input")
        .arg(sample_frames())
        .assert()
        .success();
    let json = stdout_json(assert.get_output());

    assert_eq!(json.as_array().map(Vec::len), Some(3));
    assert_eq!(json[2]["values"][2]["value"], "undefined");
}

#[test]
fn undecodable_frame_is_skipped_with_message() {
    let assert = cmd()
        .arg("frame")
        .arg("decode")
        .arg(UNKNOWN_TYPE)
        .arg(KOPPLA_ON)
        .assert()
        .success()
        .stderr(contains("skipped frame").and(contains("0x99")));
    let json = stdout_json(assert.get_output());

    assert_eq!(json.as_array().map(Vec::len), Some(1));
}

#[test]
fn strict_fails_when_a_frame_is_rejected() {
    cmd()
        .arg("frame")
        .arg("decode")
        .arg(UNKNOWN_TYPE)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("1 frame(s) failed to decode").and(contains("hint:")));
}

#[test]
fn invalid_hex_shows_error_and_hint() {
    cmd()
        .arg("frame")
        .arg("decode")
        .arg("08ZZ")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn missing_input_file_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.hex");

    cmd()
        .arg("frame")
        .arg("decode")
        .arg("--input")
        .arg(missing)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn pretty_and_compact_conflict() {
    cmd()
        .arg("frame")
        .arg("decode")
        .arg(KOPPLA_ON)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn output_file_is_written_with_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("out").join("decoded.json");

    cmd()
        .arg("frame")
        .arg("decode")
        .arg(KOPPLA_ON)
        .arg("-o")
        .arg(&output)
        .arg("--pretty")
        .assert()
        .success()
        .stderr(contains("OK:"));

    let text = std::fs::read_to_string(&output).expect("read output");
    let json: Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(json[0]["frame"], KOPPLA_ON);
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("decoded.json");

    cmd()
        .arg("frame")
        .arg("decode")
        .arg(KOPPLA_ON)
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn encode_dimming_percent_prints_hex() {
    cmd()
        .args([
            "frame",
            "encode",
            "--packet-type",
            "lighting3",
            "--subtype",
            "KOPPLA",
            "--selector",
            "dimming-level",
            "--percent",
            "50",
            "--seq",
            "3",
        ])
        .assert()
        .success()
        .stdout("081200030000080800\n");
}

#[test]
fn encode_relative_dim_uses_fixed_step() {
    cmd()
        .args([
            "frame",
            "encode",
            "--packet-type",
            "lighting3",
            "--subtype",
            "koppla",
            "--selector",
            "dimming-level",
            "--increase",
        ])
        .assert()
        .success()
        .stdout("081200000000050800\n");
}

#[test]
fn encode_lighting1_addresses_device() {
    cmd()
        .args([
            "frame",
            "encode",
            "--packet-type",
            "lighting1",
            "--subtype",
            "ARC",
            "--device-id",
            "b.5",
            "--on",
            "--seq",
            "2",
        ])
        .assert()
        .success()
        .stdout("0710010242050100\n");
}

#[test]
fn encode_lighting1_without_device_id_fails() {
    cmd()
        .args([
            "frame",
            "encode",
            "--packet-type",
            "lighting1",
            "--subtype",
            "ARC",
            "--off",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid device id").and(contains("hint:")));
}

#[test]
fn encode_requires_a_value() {
    cmd()
        .args([
            "frame",
            "encode",
            "--packet-type",
            "lighting3",
            "--subtype",
            "KOPPLA",
        ])
        .assert()
        .failure();
}

#[test]
fn encode_json_shows_message_fields() {
    let assert = cmd()
        .args([
            "frame",
            "encode",
            "--packet-type",
            "lighting3",
            "--subtype",
            "KOPPLA",
            "--off",
            "--json",
        ])
        .assert()
        .success();
    let json = stdout_json(assert.get_output());

    assert_eq!(json["command"], "OFF");
    assert_eq!(json["raw"], "081200000000001A00");
}

#[test]
fn negative_number_reaches_command_validation() {
    cmd()
        .args([
            "frame",
            "encode",
            "--packet-type",
            "lighting3",
            "--subtype",
            "KOPPLA",
            "--number",
            "-1",
        ])
        .assert()
        .failure()
        .stderr(contains("cannot build frame").and(contains("is not accepted")));
}

#[test]
fn log_env_sends_core_logs_to_stderr_only() {
    let assert = cmd()
        .env("RFXWIRE_LOG", "rfxwire_core=debug")
        .arg("frame")
        .arg("decode")
        .arg(KOPPLA_ON)
        .assert()
        .success()
        .stderr(contains("dispatching frame"));
    let json = stdout_json(assert.get_output());

    assert_eq!(json[0]["frame"], KOPPLA_ON);
}

#[test]
fn bad_log_env_falls_back_with_warning() {
    cmd()
        .env("RFXWIRE_LOG", "rfxwire_core=loud")
        .arg("frame")
        .arg("decode")
        .arg(KOPPLA_ON)
        .assert()
        .success()
        .stderr(contains("ignoring RFXWIRE_LOG"));
}
