#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use tempfile::TempDir;

/// One full day: 4h off, 2h sleeper, 11h driving, 7h on duty.
pub const SAMPLE_DAY: &str = r#"{
  "date": "2025-03-14",
  "segments": [
    { "status": "Off Duty", "startIndex": 0, "endIndex": 16 },
    { "status": "Sleeper Berth", "startIndex": 16, "endIndex": 24 },
    { "status": "Driving", "startIndex": 24, "endIndex": 68,
      "location": "Dallas, TX", "remarks": "I-35 northbound" },
    { "status": "On Duty (Not Driving)", "startIndex": 68, "endIndex": 0,
      "location": "Oklahoma City, OK", "remarks": "Fuel & inspection" }
  ]
}"#;

/// Trip response with two days, reported totals on the second.
pub const SAMPLE_TRIP: &str = r#"{
  "logs": [
    {
      "date": "2025-03-14",
      "segments": [
        { "status": "OFF_DUTY", "start_index": 0, "end_index": 32 },
        { "status": "DRIVING", "start_index": 32, "end_index": 72 },
        { "status": "OFF_DUTY", "start_index": 72, "end_index": 96 }
      ]
    },
    {
      "date": "2025-03-15",
      "segments": [
        { "status": "SLEEPER", "startIndex": 0, "endIndex": 40 },
        { "status": "ON_DUTY", "startIndex": 40, "endIndex": 44 },
        { "status": "DRIVING", "startIndex": 44, "endIndex": 80 },
        { "status": "OFF", "startIndex": 80, "endIndex": 0 }
      ],
      "totals": { "drivingHours": 9.0, "onDutyHours": 10.0 }
    }
  ]
}"#;

pub fn eld() -> Command {
    cargo_bin_cmd!("eldgraph")
}

pub fn workspace() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Config path inside the workspace (not created).
pub fn config_path(dir: &TempDir) -> String {
    dir.path().join("eldgraph.conf").to_string_lossy().to_string()
}

/// Command with `--config` pointing into the workspace, so tests never
/// read or write the user's real configuration.
pub fn eld_in(dir: &TempDir) -> Command {
    let mut cmd = eld();
    cmd.args(["--config", &config_path(dir)]);
    cmd
}

/// Absolute output path inside the workspace.
pub fn out_path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().to_string()
}

pub fn write_input(dir: &TempDir, name: &str, json: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, json).expect("write input file");
    path.to_string_lossy().to_string()
}
