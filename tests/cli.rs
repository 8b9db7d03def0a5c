//! Integration tests for the `ethconfig` binary.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn ethconfig() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ethconfig"));
    cmd.env_remove("ETHCONFIG_LOG");
    cmd
}

#[test]
fn test_dump_applies_overlays() {
    let temp_dir = TempDir::new().unwrap();
    let overlay = temp_dir.path().join("node.toml");
    fs::write(&overlay, "NetworkId = 44787\nLightServ = 25\n").unwrap();

    let output = ethconfig().arg("dump").arg("-c").arg(&overlay).output().unwrap();
    assert!(
        output.status.success(),
        "dump should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let doc: toml::Table = toml::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(doc["NetworkId"].as_integer(), Some(44787));
    assert_eq!(doc["LightServ"].as_integer(), Some(25));
    assert!(!doc.contains_key("DocRoot"));
}

#[test]
fn test_dump_sources_on_stderr() {
    let output = ethconfig().args(["dump", "--sources"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("\"builtin\""));
}

#[test]
fn test_check_rejects_suppressed_field() {
    let temp_dir = TempDir::new().unwrap();
    let overlay = temp_dir.path().join("bad.toml");
    fs::write(&overlay, "DocRoot = \"/srv\"\n").unwrap();

    let output = ethconfig().arg("check").arg(&overlay).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("DocRoot"));
}

#[test]
fn test_check_prints_normalized_document() {
    let temp_dir = TempDir::new().unwrap();
    let overlay = temp_dir.path().join("ok.toml");
    fs::write(&overlay, "TrieTimeout = \"90m\"\n").unwrap();

    let output = ethconfig().arg("check").arg(&overlay).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "TrieTimeout = \"1h 30m\"\n"
    );
}
