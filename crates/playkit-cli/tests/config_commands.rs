mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn test_show_without_file_prints_defaults() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not found, showing defaults)"))
        .stdout(predicate::str::contains("[dice]"))
        .stdout(predicate::str::contains("sides = 6"))
        .stdout(predicate::str::contains("playkit config init"));
}

#[test]
fn test_init_creates_then_refuses_then_forces() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config created"));
    assert!(fixture.config_path().exists());

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("use --force to overwrite"));

    fixture.write_config("[dice]\ncount = 3\n");
    fixture
        .command()
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config overwritten with defaults"));

    let body = std::fs::read_to_string(fixture.config_path()).unwrap();
    assert!(body.contains("count = 2"), "config: {}", body);
}

#[test]
fn test_show_reads_existing_file() {
    let fixture = TestFixture::new();
    fixture.write_config("[dice]\ncount = 5\nsides = 12\n");

    let json = fixture.run_json(&["config", "show"]);
    assert_eq!(json["content"]["exists"], true);
    assert_eq!(json["content"]["config"]["dice"]["count"], 5);
    assert_eq!(json["content"]["config"]["dice"]["sides"], 12);
    assert_eq!(json["content"]["config"]["display"]["precision"], 3);
}

#[test]
fn test_invalid_config_is_reported() {
    let fixture = TestFixture::new();
    fixture.write_config("[display]\nprecision = 42\n");

    fixture
        .command()
        .args(["shape", "circle"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_env_var_selects_config() {
    let fixture = TestFixture::new();
    fixture.write_config("[dice]\ncount = 7\n");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("playkit");
    let output = cmd
        .env("PLAYKIT_CONFIG", fixture.config_path())
        .args(["--format", "json", "dice", "roll"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["content"]["latest"]["entry"]["dice_count"], 7);
}

#[test]
fn test_no_command_shows_guidance() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("playkit shape triangle"));
}
