//! CLI integration tests.

mod support;

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use support::config::{write_temp_config, CUSTOM_MARKETPLACES};

/// Binary with a HOME that holds no config, so built-in defaults apply.
fn grossup() -> Command {
    let mut cmd = cargo_bin_cmd!("grossup");
    cmd.env("HOME", missing_home()).env_remove("RUST_LOG");
    cmd
}

fn missing_home() -> PathBuf {
    std::env::temp_dir().join("grossup-cli-tests-no-home")
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.lines().next().expect("one JSON line on stdout");
    serde_json::from_str(line).expect("valid JSON line")
}

#[test]
fn test_help() {
    grossup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("quote"))
        .stdout(predicate::str::contains("marketplaces"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    grossup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("grossup"));
}

#[test]
fn test_quote_free_shipping() {
    grossup()
        .args(["quote", "mercadolivre", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 103,03"))
        .stdout(predicate::str::contains("R$ 60,00"))
        .stdout(predicate::str::contains("Free shipping"))
        .stdout(predicate::str::contains("- R$ 25,00"))
        .stdout(predicate::str::contains("Fixed fee").not());
}

#[test]
fn test_quote_accepts_comma_decimal() {
    grossup()
        .args(["quote", "mercadolivre", "20,00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 31,52"))
        .stdout(predicate::str::contains("Fixed fee"))
        .stdout(predicate::str::contains("Free shipping").not());
}

#[test]
fn test_quote_flat_hides_zero_lines() {
    grossup()
        .args(["quote", "shein", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 100,00"))
        .stdout(predicate::str::contains("- R$ 10,00"))
        .stdout(predicate::str::contains("Fixed fee").not())
        .stdout(predicate::str::contains("Free shipping").not());
}

#[test]
fn test_quote_json() {
    let output = grossup()
        .args(["--json", "quote", "shopee", "500"])
        .output()
        .expect("run grossup");
    assert!(output.status.success());

    let line = stdout_json(&output);
    assert_eq!(line["type"], "quote");
    assert_eq!(line["payload"]["marketplace"], "Shopee");
    assert_eq!(line["payload"]["result"]["branch"], "capped");
    assert_eq!(line["payload"]["result"]["marketplace_id"], "shopee");
    assert_eq!(line["payload"]["display"]["gross_price"], "R$ 604,00");
    assert_eq!(line["payload"]["display"]["commission_amount"], "R$ 100,00");
}

#[test]
fn test_quote_unknown_marketplace_fails() {
    grossup()
        .args(["quote", "etsy", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown marketplace: etsy"));
}

#[test]
fn test_quote_unknown_marketplace_json_error() {
    let output = grossup()
        .args(["--json", "quote", "etsy", "10"])
        .output()
        .expect("run grossup");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|line| line.contains("\"type\":\"error\""))
        .expect("JSON error line on stderr");
    let error: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
    assert_eq!(error["payload"]["kind"], "unknown_marketplace");
}

#[test]
fn test_quote_rejects_non_positive_targets() {
    for target in ["0", "-5"] {
        grossup()
            .args(["quote", "shopee", target])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid target"));
    }
}

#[test]
fn test_quote_rejects_non_numeric_target() {
    grossup()
        .args(["quote", "shopee", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'abc' is not a number"));
}

#[test]
fn test_quote_quiet_prints_nothing() {
    grossup()
        .args(["--quiet", "quote", "shein", "90"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_marketplaces_table() {
    grossup()
        .arg("marketplaces")
        .assert()
        .success()
        .stdout(predicate::str::contains("shopee"))
        .stdout(predicate::str::contains("Mercado Livre"))
        .stdout(predicate::str::contains("capped_commission"))
        .stdout(predicate::str::contains("threshold_shipping"))
        .stdout(predicate::str::contains("17,5%"));
}

#[test]
fn test_marketplaces_json_uses_config() {
    let (_dir, path) = write_temp_config(CUSTOM_MARKETPLACES);

    let output = grossup()
        .args(["--json", "marketplaces", "--config"])
        .arg(&path)
        .output()
        .expect("run grossup");
    assert!(output.status.success());

    let line = stdout_json(&output);
    let marketplaces = line["payload"]["marketplaces"]
        .as_array()
        .expect("marketplace array");
    assert_eq!(marketplaces.len(), 2);
    assert_eq!(marketplaces[0]["id"], "etsy");
    assert_eq!(marketplaces[0]["policy"], "flat_commission");
    assert_eq!(marketplaces[1]["policy"], "capped_commission");
}

#[test]
fn test_quote_with_custom_display() {
    let (_dir, path) = write_temp_config(CUSTOM_MARKETPLACES);

    grossup()
        .args(["quote", "elo7", "1000", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("US$ 1,100.00"));
}

#[test]
fn test_config_validate_reports_bad_profile() {
    let toml = r#"
[[marketplaces]]
id = "greedy"
commission_rate = 1.5
"#;
    let (_dir, path) = write_temp_config(toml);

    grossup()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("commission_rate"));
}

#[test]
fn test_config_validate_accepts_good_file() {
    let (_dir, path) = write_temp_config(CUSTOM_MARKETPLACES);

    grossup()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_validate_logs_load_event() {
    let (_dir, path) = write_temp_config(CUSTOM_MARKETPLACES);

    grossup()
        .env("RUST_LOG", "debug")
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded configuration"));
}

#[test]
fn test_quote_logs_load_event_at_trace() {
    let (_dir, path) = write_temp_config(CUSTOM_MARKETPLACES);

    grossup()
        .env("RUST_LOG", "trace")
        .args(["quote", "etsy", "90", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded configuration"))
        .stderr(predicate::str::contains("Resolved listing price"));
}

#[test]
fn test_verbose_flag_applies_to_config_commands() {
    let toml = "[logging]\nlevel = \"warn\"\n";
    let (_dir, path) = write_temp_config(toml);

    grossup()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Validating configuration").not());

    grossup()
        .args(["-v", "config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Validating configuration"));
}

#[test]
fn test_broken_config_is_logged_as_failure() {
    let (_dir, path) = write_temp_config("[logging\nlevel = ");

    grossup()
        .args(["quote", "shein", "90", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Command failed"))
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn test_config_show_json() {
    let output = grossup()
        .args(["--json", "config", "show"])
        .output()
        .expect("run grossup");
    assert!(output.status.success());

    let line = stdout_json(&output);
    assert_eq!(line["type"], "config");
    assert_eq!(line["payload"]["source"], "(built-in defaults)");
    assert_eq!(line["payload"]["marketplaces"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_config_init_writes_then_refuses() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("grossup.toml");

    grossup()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();
    let written = fs::read_to_string(&path).expect("config written");
    assert!(written.contains("[[marketplaces]]"));

    grossup()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    grossup()
        .args(["config", "init", "--force"])
        .arg(&path)
        .assert()
        .success();
}
