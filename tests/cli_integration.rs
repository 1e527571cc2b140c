// CLI integration tests for encode/decode/roundtrip flows.
use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_jsonhelper");
    let mut command = Command::new(exe);
    command.env_remove("RUST_LOG");
    command
}

fn parse_json(value: &str) -> Value {
    serde_json::from_str(value).expect("valid json")
}

fn parse_json_line(output: &[u8]) -> Value {
    let text = String::from_utf8_lossy(output);
    let line = text.lines().next().expect("json line");
    parse_json(line)
}

#[test]
fn encode_prints_compact_json() {
    let output = cmd()
        .args(["encode", "--name", "Alice", "--age", "30"])
        .output()
        .expect("encode");
    assert!(output.status.success());
    let stdout = std::str::from_utf8(&output.stdout).expect("utf8");
    assert_eq!(stdout.trim_end(), r#"{"name":"Alice","age":30}"#);
}

#[test]
fn encode_pretty_indents_json() {
    let output = cmd()
        .args(["--pretty", "encode", "--name", "Alice", "--age", "-1"])
        .output()
        .expect("encode");
    assert!(output.status.success());
    let stdout = std::str::from_utf8(&output.stdout).expect("utf8");
    assert!(stdout.contains("\n  \"name\": \"Alice\""));
    assert_eq!(parse_json(stdout)["age"], -1);
}

#[test]
fn decode_prints_description_and_ignores_extra_fields() {
    let output = cmd()
        .args(["decode", r#"{"name":"Bob","age":25,"extra":true}"#])
        .output()
        .expect("decode");
    assert!(output.status.success());
    let stdout = std::str::from_utf8(&output.stdout).expect("utf8");
    assert_eq!(stdout.trim_end(), "DataRecord{name='Bob', age=25}");
}

#[test]
fn decode_reads_stdin_when_input_is_dash() {
    let mut child = cmd()
        .args(["decode", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(br#"{"name":"Carol","age":41}"#)
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());
    let stdout = std::str::from_utf8(&output.stdout).expect("utf8");
    assert_eq!(stdout.trim_end(), "DataRecord{name='Carol', age=41}");
}

#[test]
fn decode_failure_reports_decode_error() {
    let output = cmd()
        .args(["decode", "not json"])
        .output()
        .expect("decode");
    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"], "Decode");
    assert_eq!(err["error"]["message"], "input is not a valid DataRecord");
}

#[test]
fn strict_fields_rejects_unknown_keys() {
    let output = cmd()
        .args([
            "decode",
            "--strict-fields",
            r#"{"name":"Bob","age":25,"extra":true}"#,
        ])
        .output()
        .expect("decode");
    assert_eq!(output.status.code(), Some(4));
    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"], "Decode");
}

#[test]
fn roundtrip_reports_equality() {
    let output = cmd()
        .args(["roundtrip", "--name", "Dana", "--age", "7"])
        .output()
        .expect("roundtrip");
    assert!(output.status.success());
    let value = parse_json_line(&output.stdout);
    assert_eq!(value["json"], r#"{"name":"Dana","age":7}"#);
    assert_eq!(value["record"], "DataRecord{name='Dana', age=7}");
    assert_eq!(value["equal"], true);
}

#[test]
fn bad_arguments_exit_with_usage_code() {
    let output = cmd()
        .args(["encode", "--name", "Eve", "--age", "old"])
        .output()
        .expect("encode");
    assert_eq!(output.status.code(), Some(2));
    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"], "Usage");
}
