use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "shopfront-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn fixture(name: &str) -> String {
    format!("{}/../fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_shopfront-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("variants"));
}

#[test]
fn cli_checks_builtin_fixtures_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_shopfront-tester");
    let output_path = temp_path("builtin");
    let output = Command::new(exe)
        .args(["--report", "json", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stdout));
    let content = std::fs::read_to_string(output_path).expect("read output");
    let results: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let runs = results.as_array().expect("array");
    assert_eq!(runs.len(), 8);
    assert!(runs.iter().all(|r| r["passed"] == true));
}

#[test]
fn cli_prices_bundle_from_state_file() {
    let exe = env!("CARGO_BIN_EXE_shopfront-tester");
    let output = Command::new(exe)
        .args(["--scenarios", "smoke,checkout", "--report", "markdown", "--payload"])
        .arg(fixture("bundle.json"))
        .arg("--state")
        .arg(fixture("bundle_state.json"))
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Shopfront Page Check Results"));
    assert!(stdout.contains("- **Failed**: 0"));
}

#[test]
fn cli_fails_on_malformed_payload() {
    let exe = env!("CARGO_BIN_EXE_shopfront-tester");
    let bad = temp_path("bad.json");
    std::fs::write(&bad, "{\"product\": [").expect("write payload");
    let output = Command::new(exe)
        .args(["--scenarios", "smoke", "--payload"])
        .arg(&bad)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}
