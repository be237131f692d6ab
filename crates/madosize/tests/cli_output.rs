//! Integration tests for madosize CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::process::Command;

fn run_madosize(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_madosize"))
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute 'madosize {}': {}", args.join(" "), e))
}

/// Execute 'madosize list displays' and verify it succeeds
fn run_list_displays(extra: &[&str]) -> std::process::Output {
    let mut args = extra.to_vec();
    args.extend(["list", "displays"]);
    let output = run_madosize(&args);

    assert!(
        output.status.success(),
        "madosize {} failed with exit code {:?}. stderr: {}",
        args.join(" "),
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    output
}

// =============================================================================
// Default Mode (Quiet) Behavioral Tests
// =============================================================================

/// Verify that default mode (no flags) suppresses INFO, DEBUG and WARN logs
#[test]
fn test_default_mode_suppresses_info_logs() {
    let output = run_list_displays(&[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    for level in ["INFO", "DEBUG", "WARN"] {
        let needle = format!(r#""level":"{}""#, level);
        assert!(
            !stderr.contains(&needle),
            "Default mode should suppress {} logs, but stderr contains: {}",
            level,
            stderr
        );
    }
}

/// Verify that stdout contains only user-facing output (no JSON logs)
#[test]
fn test_stdout_is_clean() {
    let output = run_list_displays(&["-v"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
}

// =============================================================================
// Verbose Mode Behavioral Tests
// =============================================================================

/// Verify verbose mode (-v) emits INFO logs as JSON lines
#[test]
fn test_verbose_flag_emits_info_logs() {
    let output = run_list_displays(&["-v"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, but stderr is: {}",
        stderr
    );
    assert!(
        stderr.contains("cli.list_displays_completed"),
        "Expected list completion event, got: {}",
        stderr
    );

    for line in stderr.lines().filter(|line| !line.trim().is_empty()) {
        assert!(
            serde_json::from_str::<serde_json::Value>(line).is_ok(),
            "Log line is not valid JSON: {}",
            line
        );
    }
}

/// Verify verbose mode works with --verbose long form
#[test]
fn test_verbose_flag_long_form_emits_logs() {
    let output = run_list_displays(&["--verbose"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains(r#""level":"INFO""#),
        "--verbose long form should emit INFO logs, but stderr is: {}",
        stderr
    );
}

// =============================================================================
// JSON Output Tests
// =============================================================================

#[test]
fn test_list_displays_json_is_an_array() {
    let output = run_madosize(&["list", "displays", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("list displays --json should print valid JSON");
    let rows = value.as_array().expect("expected a JSON array");

    if let Some(first) = rows.first() {
        assert_eq!(first["index"], 0);
        assert_eq!(first["primary"], true);
        assert!(first["full_frame"].is_object());
        assert!(first["usable_frame"].is_object());
    }
}

#[test]
fn test_help_lists_commands() {
    let output = run_madosize(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["show", "move", "resize", "center", "maximize", "list"] {
        assert!(stdout.contains(command), "help should list '{}'", command);
    }
}

#[test]
fn test_move_without_coordinates_is_rejected() {
    let output = run_madosize(&["move"]);
    assert!(!output.status.success());
}

// =============================================================================
// No Focused Window (platforms without an accessibility layer)
// =============================================================================

#[cfg(not(target_os = "macos"))]
#[test]
fn test_show_reports_nothing_selected() {
    let output = run_madosize(&["show"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Mado: Nothing Selected");
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_show_json_reports_nothing_selected() {
    let output = run_madosize(&["show", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("show --json should print valid JSON");
    assert_eq!(value["selected"], false);
    assert!(value["window"].is_null());
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_window_commands_fail_without_focused_window() {
    for args in [
        vec!["center"],
        vec!["maximize"],
        vec!["move", "--x", "0"],
        vec!["resize", "--width", "800"],
    ] {
        let output = run_madosize(&args);
        assert!(
            !output.status.success(),
            "madosize {} should fail without a focused window",
            args.join(" ")
        );

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("No focused window available"),
            "Expected focus error in stderr, got: {}",
            stderr
        );
    }
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_failed_command_logs_app_error() {
    let output = run_madosize(&["center"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let logged = stderr
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .any(|entry| {
            entry["level"] == "ERROR" && entry["fields"]["event"] == "core.app.error_occurred"
        });
    assert!(
        logged,
        "Expected an ERROR core.app.error_occurred event even in quiet mode, got: {}",
        stderr
    );
}
