//! End-to-end tests for the carbontrackr binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn carbontrackr() -> Command {
    Command::cargo_bin("carbontrackr").unwrap()
}

#[test]
fn process_extracts_units_and_points() {
    let dir = tempfile::tempdir().unwrap();
    let bill = dir.path().join("bill.txt");
    fs::write(&bill, "Units Consumed: 450").unwrap();

    carbontrackr()
        .args(["process", bill.to_str().unwrap(), "--region", "Gujarat"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""units": "450""#))
        .stdout(predicate::str::contains(r#""emission_factor": "1.27""#))
        .stdout(predicate::str::contains(r#""points": 1100"#));
}

#[test]
fn process_reads_stdin_and_renders_text() {
    carbontrackr()
        .args(["process", "-", "--region", "Kerala", "--format", "text"])
        .write_stdin("Total: 100 kWh")
        .assert()
        .success()
        .stdout(predicate::str::contains("Units consumed:   100 kWh"))
        .stdout(predicate::str::contains("66.00 kg CO₂"));
}

#[test]
fn sentinel_is_reported_as_a_miss_not_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let bill = dir.path().join("bill.txt");
    fs::write(&bill, "NOT_FOUND").unwrap();

    carbontrackr()
        .args(["process", bill.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("unable to detect consumption"))
        .stdout(predicate::str::contains(r#""units": null"#));
}

#[test]
fn factors_lookup_resolves_known_region() {
    carbontrackr()
        .args(["factors", "Gujarat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.27"));
}

#[test]
fn factors_lookup_flags_fallback() {
    carbontrackr()
        .args(["factors", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.703"))
        .stdout(predicate::str::contains("unknown region"));
}

#[test]
fn estimate_reads_device_fleet() {
    let dir = tempfile::tempdir().unwrap();
    let fleet = dir.path().join("fleet.json");
    fs::write(
        &fleet,
        r#"[{"name": "TV", "watts": 100, "hours_per_day": 10},
            {"name": "Bedroom AC", "watts": 1750, "hours_per_day": 8, "is_ac": true}]"#,
    )
    .unwrap();

    carbontrackr()
        .args(["estimate", fleet.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total energy:     15 kWh/day"));
}

#[test]
fn offset_plan_totals() {
    carbontrackr()
        .args(["offset", "--target", "120", "--pick", "trees=3", "--pick", "water=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total offset:  115.31 kg CO₂"))
        .stdout(predicate::str::contains("Total cost:    $35"));
}

#[test]
fn offset_rejects_unknown_option() {
    carbontrackr()
        .args(["offset", "--pick", "coal=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown offset option"));
}

#[test]
fn batch_writes_summary_csv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "Total: 450 kWh").unwrap();
    fs::write(dir.path().join("b.txt"), "nothing useful").unwrap();
    let summary = dir.path().join("summary.csv");

    carbontrackr()
        .args([
            "batch",
            dir.path().join("*.txt").to_str().unwrap(),
            "--summary",
            summary.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = fs::read_to_string(&summary).unwrap();
    assert!(written.contains("450"));
    assert!(written.lines().count() >= 3);
}
