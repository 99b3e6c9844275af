mod common;
use common::{SAMPLE_DAY, SAMPLE_TRIP, eld_in, out_path, workspace, write_input};
use predicates::str::contains;
use std::fs;

#[test]
fn test_render_svg() {
    let dir = workspace();
    let input = write_input(&dir, "day.json", SAMPLE_DAY);
    let out = out_path(&dir, "day.svg");

    eld_in(&dir)
        .args(["render", &input, "--file", &out, "--format", "svg"])
        .assert()
        .success()
        .stdout(contains("3 status changes"))
        .stdout(contains("total 24.0 h"));

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.contains("<path d=\"M 160 "));
    assert!(svg.contains("Total: 24.0"));
    assert!(svg.contains("Activity Log &amp; Remarks"));
    assert!(svg.contains("Fuel &amp; inspection"));
}

#[test]
fn test_render_uses_config_default_format() {
    let dir = workspace();
    fs::write(common::config_path(&dir), "default_format: pdf\n").expect("write config");
    let input = write_input(&dir, "day.json", SAMPLE_DAY);
    let out = out_path(&dir, "day.pdf");

    eld_in(&dir)
        .args(["render", &input, "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_render_selected_day_with_width() {
    let dir = workspace();
    let input = write_input(&dir, "trip.json", SAMPLE_TRIP);
    let out = out_path(&dir, "second.svg");

    eld_in(&dir)
        .args([
            "render", &input, "--file", &out, "--date", "2025-03-15", "--width", "1300",
        ])
        .assert()
        .success()
        .stdout(contains("2025-03-15"));

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.contains(r#"width="1300""#));
    assert!(svg.contains("<path d=\"M 160 162"));
}

#[test]
fn test_render_rejects_relative_output() {
    let dir = workspace();
    let input = write_input(&dir, "day.json", SAMPLE_DAY);

    eld_in(&dir)
        .args(["render", &input, "--file", "relative.svg"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_render_unknown_day_fails() {
    let dir = workspace();
    let input = write_input(&dir, "trip.json", SAMPLE_TRIP);
    let out = out_path(&dir, "missing.svg");

    eld_in(&dir)
        .args(["render", &input, "--file", &out, "--day", "5"])
        .assert()
        .failure()
        .stderr(contains("No daily log found"));
}

#[test]
fn test_render_width_too_small_fails() {
    let dir = workspace();
    let input = write_input(&dir, "day.json", SAMPLE_DAY);
    let out = out_path(&dir, "narrow.svg");

    eld_in(&dir)
        .args(["render", &input, "--file", &out, "--width", "200"])
        .assert()
        .failure()
        .stderr(contains("no room for the graph area"));
}

#[test]
fn test_render_overwrite_requires_force() {
    let dir = workspace();
    let input = write_input(&dir, "day.json", SAMPLE_DAY);
    let out = out_path(&dir, "day.svg");
    fs::write(&out, "old").expect("seed output");

    eld_in(&dir)
        .args(["render", &input, "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).expect("read output"), "old");

    eld_in(&dir)
        .args(["render", &input, "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read output").contains("<svg"));
}

#[test]
fn test_summary_single_day() {
    let dir = workspace();
    let input = write_input(&dir, "day.json", SAMPLE_DAY);

    eld_in(&dir)
        .args(["summary", &input])
        .assert()
        .success()
        .stdout(contains("2025-03-14"))
        .stdout(contains("SLEEPER"))
        .stdout(contains("11.0"))
        .stdout(contains("24.0"));
}

#[test]
fn test_summary_trip() {
    let dir = workspace();
    let input = write_input(&dir, "trip.json", SAMPLE_TRIP);

    eld_in(&dir)
        .args(["summary", &input])
        .assert()
        .success()
        .stdout(contains("Trip: 2 days"))
        .stdout(contains("2025-03-15"))
        .stdout(contains("Driving: 19.0 h"));
}

#[test]
fn test_summary_from_stdin() {
    let dir = workspace();

    eld_in(&dir)
        .args(["summary", "-"])
        .write_stdin(SAMPLE_DAY)
        .assert()
        .success()
        .stdout(contains("24.0"));
}

#[test]
fn test_summary_invalid_json_fails() {
    let dir = workspace();
    let input = write_input(&dir, "bad.json", "{ nope");

    eld_in(&dir)
        .args(["summary", &input])
        .assert()
        .failure()
        .stderr(contains("Invalid log input"));
}

#[test]
fn test_remarks_table() {
    let dir = workspace();
    let input = write_input(&dir, "day.json", SAMPLE_DAY);

    eld_in(&dir)
        .args(["remarks", &input])
        .assert()
        .success()
        .stdout(contains("Activity Log & Remarks"))
        .stdout(contains("6:00 AM - 5:00 PM"))
        .stdout(contains("Dallas, TX"))
        .stdout(contains("I-35 northbound"));
}

#[test]
fn test_remarks_empty_day() {
    let dir = workspace();
    let input = write_input(&dir, "empty.json", r#"{"date":"2025-03-14","segments":[]}"#);

    eld_in(&dir)
        .args(["remarks", &input])
        .assert()
        .success()
        .stdout(contains("No segments"));
}
