//! CLI Integration Tests
//!
//! These tests run the compiled binary and check output formats and exit
//! codes. Each run points `CLASSAIR_CONFIG` at a scratch directory so a
//! user's own config file never leaks in.
//!
//! ```
//! cargo test --package classair-cli --test cli_integration
//! ```

use std::path::Path;
use std::process::{Command, Output};

/// Run classair with an isolated config location.
fn run_with_config(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_classair"))
        .args(args)
        .env("CLASSAIR_CONFIG", config)
        .env_remove("NO_COLOR")
        .env_remove("CLASSAIR_STYLE")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run classair binary")
}

/// Run classair with a config path that does not exist.
fn run_classair(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    run_with_config(&dir.path().join("config.toml"), args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn test_help_command() {
    let output = run_classair(&["--help"]);
    assert!(output.status.success(), "Help should succeed");

    let out = stdout(&output);
    assert!(out.contains("predict"), "Help should list predict command");
    assert!(out.contains("series"), "Help should list series command");
    assert!(out.contains("chart"), "Help should list chart command");
    assert!(out.contains("config"), "Help should list config command");
}

#[test]
fn test_version_command() {
    let output = run_classair(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_bash() {
    let output = run_classair(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("classair"));
}

// =============================================================================
// Predict
// =============================================================================

#[test]
fn test_predict_json_defaults() {
    let output = run_classair(&["predict", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["final_ppm"], 32727.27);
    assert_eq!(json["advisory"]["tier"], "Danger");
    assert_eq!(json["input"]["window_state"], "closed");
    assert_eq!(json["series"].as_array().unwrap().len(), 50);
    assert!(json["advisory"]["heat_loss"].is_null());
}

#[test]
fn test_predict_open_window_heating() {
    let output = run_classair(&[
        "predict", "--json", "--compact", "-w", "open", "-H", "heating", "-t", "-5",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1, "compact JSON is a single line");
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["final_ppm"], 5901.64);
    // |(-5) - 22| * 0.6 * 50 = 810
    assert_eq!(json["advisory"]["heat_loss"]["index"], 810.0);
    assert_eq!(json["advisory"]["heat_loss"]["level"], "High");
}

#[test]
fn test_predict_csv() {
    let output = run_classair(&["predict", "--format", "csv", "--window", "open"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let mut lines = out.lines();
    assert!(lines.next().unwrap().starts_with("students,duration_min,area_m2"));
    assert_eq!(
        lines.next().unwrap(),
        "30,50,50,open,off,15,5901.64,Danger,450.0,9,13,,,Open window 3 min every 20 min"
    );
}

#[test]
fn test_predict_text_plain() {
    let output = run_classair(&["predict", "--style", "plain", "-s", "10", "-a", "100", "-w", "open"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("ppm"));
    assert!(!out.contains('\u{1b}'), "plain mode has no ANSI escapes");
}

#[test]
fn test_predict_rejects_out_of_range() {
    let output = run_classair(&["predict", "--students", "0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid input"));
}

#[test]
fn test_predict_rejects_unknown_hvac() {
    let output = run_classair(&["predict", "--hvac", "fan"]);
    assert!(!output.status.success());
}

#[test]
fn test_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prediction.json");
    let output = run_with_config(
        &dir.path().join("config.toml"),
        &["predict", "--json", "-o", path.to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let written = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["final_ppm"], 32727.27);
}

// =============================================================================
// Series and Chart
// =============================================================================

#[test]
fn test_series_csv() {
    let output = run_classair(&["series", "-f", "csv", "-d", "10"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "minute,ppm,tier");
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[1], "1,654.55,Good");
    assert_eq!(lines[2], "2,1309.09,Moderate");
}

#[test]
fn test_series_csv_no_header() {
    let output = run_classair(&["series", "-f", "csv", "--no-header", "-d", "10"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 10);
}

#[test]
fn test_chart_plain() {
    let output = run_classair(&["chart", "--style", "plain", "--width", "40", "--height", "8"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains('*'));
    assert!(out.is_ascii());
}

#[test]
fn test_chart_rejects_json() {
    let output = run_classair(&["chart", "--json"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("series --json"));
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_config_set_then_predict_uses_it() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let set = run_with_config(&config, &["config", "set", "window", "open"]);
    assert!(set.status.success(), "stderr: {}", stderr(&set));

    let get = run_with_config(&config, &["config", "get", "window"]);
    assert_eq!(stdout(&get).trim(), "open");

    let predict = run_with_config(&config, &["predict", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&predict)).unwrap();
    assert_eq!(json["final_ppm"], 5901.64);

    // Flags still win over the config file
    let predict = run_with_config(&config, &["predict", "--json", "-w", "closed"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&predict)).unwrap();
    assert_eq!(json["final_ppm"], 32727.27);
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    assert!(run_with_config(&config, &["config", "init"]).status.success());
    assert!(config.exists());

    let again = run_with_config(&config, &["config", "init"]);
    assert!(!again.status.success());
    assert!(stderr(&again).contains("--force"));

    assert!(run_with_config(&config, &["config", "init", "--force"]).status.success());
}

#[test]
fn test_config_set_keeps_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    let original = "[classroom]\nstudents = 18\nwindow = \"open\"\nhvac = \"heting\"\n";
    std::fs::write(&config, original).unwrap();

    let output = run_with_config(&config, &["config", "set", "students", "20"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to parse config"));
    assert_eq!(std::fs::read_to_string(&config).unwrap(), original);

    let output = run_with_config(&config, &["config", "unset", "window"]);
    assert!(!output.status.success());
    assert_eq!(std::fs::read_to_string(&config).unwrap(), original);
}

#[test]
fn test_malformed_config_warns_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[classroom]\nhvac = \"heting\"\n").unwrap();

    for args in [&["config", "show"][..], &["predict", "--json"][..]] {
        let output = run_with_config(&config, args);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stderr(&output).matches("Ignoring config file").count(), 1);
    }
}

#[test]
fn test_config_path_honours_env() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    let output = run_with_config(&config, &["config", "path"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), config.display().to_string());
}
