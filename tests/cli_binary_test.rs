//! Binary integration tests for CLI argument handling
//!
//! These run the actual gbt binary, but only along paths that exit before
//! the terminal UI starts.

use std::process::Command;

fn gbt_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gbt"))
}

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let output = gbt_bin().arg("--help").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--repo"));
    assert!(stdout.contains("--log-limit"));
    assert!(stdout.contains("--exit-on-checkout"));
    Ok(())
}

#[test]
fn test_cli_version() -> Result<(), Box<dyn std::error::Error>> {
    let output = gbt_bin().arg("--version").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn test_cli_invalid_argument_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let output = gbt_bin().arg("--invalid-flag").output()?;

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--repo"));
    Ok(())
}

#[test]
fn test_cli_zero_log_limit_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let output = gbt_bin().args(["--log-limit", "0"]).output()?;
    assert!(!output.status.success());
    Ok(())
}
