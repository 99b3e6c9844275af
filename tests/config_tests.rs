mod common;
use common::{config_path, eld_in, workspace};
use eldgraph::config::Config;
use eldgraph::logging::level_for;
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_missing_config_uses_defaults() {
    let cfg = Config::load(Path::new("/nonexistent/eldgraph.conf")).expect("defaults");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.chart.width, 2000.0);
    assert_eq!(cfg.default_format, "svg");
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = workspace();
    let path = config_path(&dir);
    fs::write(&path, "chart:\n  width: 1500\nlog_level: debug\n").expect("write config");

    let cfg = Config::load(Path::new(&path)).expect("load partial config");
    assert_eq!(cfg.chart.width, 1500.0);
    assert_eq!(cfg.chart.row_height, 60.0);
    assert_eq!(cfg.log_level, "debug");

    let missing = Config::missing_keys(Path::new(&path)).expect("missing keys");
    assert!(missing.contains(&"chart.row_gap".to_string()));
    assert!(missing.contains(&"default_format".to_string()));
    assert!(!missing.contains(&"chart.width".to_string()));
    assert!(!missing.contains(&"log_level".to_string()));
}

#[test]
fn test_degenerate_chart_is_rejected() {
    let dir = workspace();
    let path = config_path(&dir);
    fs::write(&path, "chart:\n  width: 300\n").expect("write config");

    assert!(Config::load(Path::new(&path)).is_err());
}

#[test]
fn test_init_keeps_existing_file() {
    let dir = workspace();
    let path = dir.path().join("sub").join("eldgraph.conf");

    assert!(Config::init(&path, false).expect("first init"));
    fs::write(&path, "default_format: pdf\n").expect("edit config");
    assert!(!Config::init(&path, false).expect("second init"));
    assert_eq!(fs::read_to_string(&path).expect("read"), "default_format: pdf\n");

    assert!(Config::init(&path, true).expect("forced init"));
    assert_eq!(Config::load(&path).expect("reload"), Config::default());
}

#[test]
fn test_verbosity_overrides_configured_level() {
    assert_eq!(level_for(0, "warn"), "warn");
    assert_eq!(level_for(1, "warn"), "info");
    assert_eq!(level_for(2, "error"), "debug");
    assert_eq!(level_for(5, "warn"), "trace");
}

#[test]
fn test_cli_init_and_check() {
    let dir = workspace();

    eld_in(&dir)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("No configuration file"));

    eld_in(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Config file:"));

    eld_in(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already exists"));

    eld_in(&dir)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));

    eld_in(&dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("label_width: 160"));
}

#[test]
fn test_cli_invalid_config_fails_but_init_force_repairs() {
    let dir = workspace();
    fs::write(config_path(&dir), "chart: [not, a, map]\n").expect("write config");

    eld_in(&dir)
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Invalid configuration file"));

    eld_in(&dir)
        .args(["init", "--force"])
        .assert()
        .success();

    eld_in(&dir)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));
}
