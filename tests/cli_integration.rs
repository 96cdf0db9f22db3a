use seed_core::{is_valid_seed, ErrorCode, ValidationReport};
use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn cli() -> Command {
    let binary_path = assert_cmd::cargo::cargo_bin!("seed-core");
    Command::new(binary_path)
}

fn run(args: &[&str]) -> Output {
    cli().args(args).output().expect("cli runs")
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = cli()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("cli spawns");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("cli finishes")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf8")
}

fn report(output: &Output) -> ValidationReport {
    serde_json::from_str(stdout(output).trim()).expect("json report")
}

#[test]
fn generate_prints_valid_seed() {
    let output = run(&["generate"]);
    assert!(output.status.success(), "cli exited unsuccessfully: {:?}", output);

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(is_valid_seed(lines[0]));
}

#[test]
fn generate_json_batch() {
    let output = run(&["generate", "--count", "3", "--json"]);
    assert!(output.status.success(), "cli exited unsuccessfully: {:?}", output);

    let parsed: Value = serde_json::from_str(&stdout(&output)).expect("stdout is valid json");
    let seeds = parsed["seeds"].as_array().expect("seeds array");
    assert_eq!(seeds.len(), 3);
    for seed in seeds {
        assert!(is_valid_seed(seed.as_str().expect("seed string")));
    }
}

#[test]
fn generate_rejects_zero_count() {
    let output = run(&["generate", "--count", "0"]);
    assert!(!output.status.success());
}

#[test]
fn stderr_never_contains_seed() {
    let output = run(&["--debug", "generate"]);
    assert!(output.status.success());
    let seed = stdout(&output).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains(&seed));
}

#[test]
fn validate_accepts_generated_seed() {
    let generated = stdout(&run(&["generate"])).trim().to_string();

    let output = run(&["validate", &generated]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "valid");
}

#[test]
fn validate_reports_short_seed() {
    let candidate = "A".repeat(80);
    let output = run(&["validate", "--json", &candidate]);
    assert_eq!(output.status.code(), Some(1));

    let report = report(&output);
    assert!(!report.valid);
    assert_eq!(report.error.expect("error").code, ErrorCode::InvalidLength);
}

#[test]
fn validate_reports_character_position() {
    let mut candidate = "A".repeat(81);
    candidate.replace_range(5..6, "a");
    let output = run(&["validate", "--json", &candidate]);
    assert_eq!(output.status.code(), Some(1));

    let error = report(&output).error.expect("error");
    assert_eq!(error.code, ErrorCode::InvalidCharacter);
    assert_eq!(error.position, Some(5));
}

#[test]
fn validate_reads_stdin() {
    let candidate = format!("{}\n", "9".repeat(81));
    let output = run_with_stdin(&["validate", "--json"], &candidate);
    assert!(output.status.success(), "cli exited unsuccessfully: {:?}", output);
    assert!(report(&output).valid);
}

#[test]
fn validate_empty_stdin() {
    let output = run_with_stdin(&["validate", "--json"], "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(report(&output).error.expect("error").code, ErrorCode::EmptyOrNull);
}

#[test]
fn trits_prints_balanced_ternary() {
    let output = run(&["trits", &"A".repeat(81)]);
    assert!(output.status.success());

    let trits: Vec<i8> = stdout(&output)
        .split_whitespace()
        .map(|t| t.parse().expect("trit"))
        .collect();
    assert_eq!(trits.len(), 243);
    for group in trits.chunks(3) {
        assert_eq!(group, [1, 0, 0]);
    }
}

#[test]
fn invalid_environment_fails() {
    let output = cli()
        .env("SEEDCORE_MAX_ENTROPY_ROUNDS", "many")
        .arg("generate")
        .output()
        .expect("cli runs");
    assert_eq!(output.status.code(), Some(2));
}
