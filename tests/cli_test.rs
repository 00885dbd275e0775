//! Integration tests for the wte-tools binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A tools root with an optional `wte-tools.yml`.
fn setup_root(config: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    if let Some(config) = config {
        fs::write(temp.path().join("wte-tools.yml"), config).unwrap();
    }
    temp
}

/// The binary, isolated from the caller's environment and rooted at `root`.
fn wte(root: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("wte-tools"));
    cmd.env_remove("WTE_TOOLS_ROOT")
        .env_remove("WTE_SETTINGS")
        .env_remove("RUST_LOG")
        .env("CI", "true")
        .arg("--root")
        .arg(root.path());
    cmd
}

const NO_TOOLS: &str = "required_tools: []\n";

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("wte-tools"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WTEngine build environment helper"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("wte-tools"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_command() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("wte-tools"));
    cmd.arg("frobnicate");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn settings_set_then_show() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(None);

    wte(&root)
        .args(["settings", "set", r#"{"theme":"dark"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"));

    wte(&root)
        .args(["settings", "set", r#"{"volume":80}"#])
        .assert()
        .success();

    let content = fs::read_to_string(root.path().join("settings.json"))?;
    assert_eq!(content, r#"{"theme":"dark","volume":80}"#);

    wte(&root)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""volume": 80"#));
    Ok(())
}

#[test]
fn settings_show_without_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(None);
    wte(&root)
        .args(["settings", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No settings found"));
    Ok(())
}

#[test]
fn settings_set_rejects_array() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(None);
    wte(&root)
        .args(["settings", "set", "[1]"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Settings format not valid. Exiting...",
        ));
    assert!(!root.path().join("settings.json").exists());
    Ok(())
}

#[test]
fn settings_flag_overrides_location() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(None);
    wte(&root)
        .args(["--settings", "conf/custom.json", "settings", "set", r#"{"a":1}"#])
        .assert()
        .success();
    assert!(root.path().join("conf/custom.json").exists());
    assert!(!root.path().join("settings.json").exists());
    Ok(())
}

#[test]
fn settings_path_honours_override_file() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(Some("settings_file: build/settings.json\n"));
    wte(&root)
        .args(["settings", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("build"));
    Ok(())
}

#[test]
fn settings_access_on_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(None);
    wte(&root)
        .args(["settings", "access"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Exiting..."));
    Ok(())
}

#[test]
fn settings_access_requires_proper_tests() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(None);
    fs::write(root.path().join("settings.json"), "{}")?;
    wte(&root)
        .args(["settings", "access", "zz"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No proper tests requested"));
    Ok(())
}

#[test]
fn settings_access_passes_on_readable_file() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(None);
    fs::write(root.path().join("settings.json"), "{}")?;
    wte(&root)
        .args(["settings", "access", "rw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passed access checks"));
    Ok(())
}

#[test]
fn missing_tool_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(Some("required_tools: [wte-tools-no-such-tool-xyz]\n"));
    wte(&root)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Checking for necessary applications"))
        .stderr(predicate::str::contains(
            "Error: 'wte-tools-no-such-tool-xyz' not found. Exiting...",
        ));
    Ok(())
}

#[test]
fn default_command_is_check() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(Some(NO_TOOLS));
    wte(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking for necessary applications"));
    Ok(())
}

#[test]
fn invalid_override_file_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(Some("unknown_key: true\n"));
    wte(&root)
        .arg("repos")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn repos_lists_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(None);
    wte(&root)
        .arg("repos")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "allegro  https://github.com/liballeg/allegro5",
        ))
        .stdout(predicate::str::contains("https://github.com/icculus/physfs"));
    Ok(())
}

#[test]
fn repos_json_includes_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(Some(
        "repositories:\n  physfs: https://example.com/physfs-fork\n",
    ));
    let output = wte(&root).args(["repos", "--json"]).output()?;
    assert!(output.status.success());

    let repos: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(repos["allegro"], "https://github.com/liballeg/allegro5");
    assert_eq!(repos["physfs"], "https://example.com/physfs-fork");
    Ok(())
}

#[test]
fn syscheck_failure_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(Some("syscheck_command: exit 2\n"));
    wte(&root)
        .args(["-q", "syscheck"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("The system check script failed"));
    Ok(())
}

#[test]
fn configure_success_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(Some("config_command: exit 0\n"));
    wte(&root)
        .args(["-q", "configure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The configuration script completed"));
    Ok(())
}

#[test]
fn setup_uses_prompt_env_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(Some(
        "required_tools: []\nsyscheck_command: exit 0\nconfig_command: exit 5\n",
    ));
    wte(&root)
        .args(["-q", "setup"])
        .env("WTE_PROMPT_CONFIGURE", "no")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping configuration"))
        .stdout(predicate::str::contains("Setup complete!"));
    Ok(())
}

#[test]
fn setup_yes_runs_every_script() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(Some(
        "required_tools: []\nsyscheck_command: exit 0\nconfig_command: exit 5\n",
    ));
    wte(&root)
        .args(["-q", "setup", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("The configuration script failed"));
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("wte-tools"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("wte-tools"));
    Ok(())
}
