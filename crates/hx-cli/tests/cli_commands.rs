//! Integration tests for the `hx` command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hx() -> Command {
    Command::cargo_bin("hx").unwrap()
}

/// A fake power-supply tree with one battery at the given percent.
fn power_supply(capacity: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let bat = dir.path().join("BAT0");
    fs::create_dir_all(&bat).unwrap();
    fs::write(bat.join("type"), "Battery\n").unwrap();
    fs::write(bat.join("capacity"), capacity).unwrap();
    dir
}

// ---------------------------------------------------------------------------
// cast
// ---------------------------------------------------------------------------

#[test]
fn cast_seed_one() {
    hx().args(["cast", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("60 · Jie (Limitation)")
                .and(predicate::str::contains("CHANGING TO").not()),
        );
}

#[test]
fn cast_seed_with_changing_lines() {
    hx().args(["cast", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("31 · Xian (Influence)")
                .and(predicate::str::contains("CHANGING TO:"))
                .and(predicate::str::contains("6 · Song (Conflict)"))
                .and(predicate::str::contains("lines 2, 3, 6 change")),
        );
}

#[test]
fn cast_negative_seed() {
    hx().args(["cast", "-5"]).assert().success();
}

#[test]
fn cast_is_deterministic() {
    let first = hx().args(["cast", "9001", "--json"]).output().unwrap();
    let second = hx().args(["cast", "9001", "--json"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn cast_json() {
    let output = hx().args(["cast", "42", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["seed"], 42);
    assert_eq!(json["reading"]["lines"], serde_json::json!([8, 6, 9, 7, 7, 6]));
    assert_eq!(json["reading"]["primary"]["number"], 31);
    assert_eq!(json["reading"]["changingLineIndices"], serde_json::json!([1, 2, 5]));
    assert_eq!(json["reading"]["changing"]["number"], 6);
    assert!(json["meaning"].is_string());
}

// ---------------------------------------------------------------------------
// lines
// ---------------------------------------------------------------------------

#[test]
fn lines_all_old_yang() {
    let output = hx()
        .args(["lines", "9", "9", "9", "9", "9", "9", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["reading"]["primary"]["number"], 1);
    assert_eq!(json["reading"]["changing"]["number"], 2);
    assert_eq!(
        json["reading"]["changingLineIndices"],
        serde_json::json!([0, 1, 2, 3, 4, 5])
    );
}

#[test]
fn lines_without_old_lines() {
    hx().args(["lines", "7", "8", "7", "8", "7", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CHANGING TO").not());
}

#[test]
fn lines_rejects_bad_value() {
    hx().args(["lines", "7", "8", "7", "8", "7", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid line value: 5"));
}

#[test]
fn lines_requires_six_values() {
    hx().args(["lines", "7", "8", "7"]).assert().failure();
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_with_fixed_battery() {
    hx().args(["draw", "--no-delay", "--battery", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HEXAGRAM").and(predicate::str::contains("seed")));
}

#[test]
fn draw_json_reads_fake_sysfs() {
    let root = power_supply("80\n");
    let output = hx()
        .args(["draw", "--no-delay", "--json", "--sysfs-root"])
        .arg(root.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let seed = json["seed"].as_i64().unwrap();
    assert!(seed > 1_577_836_800_000);
    let primary = json["reading"]["primary"]["number"].as_u64().unwrap();
    assert!((1..=64).contains(&primary));
    assert!(json["drawnAt"].is_string());
}

#[test]
fn draw_without_battery_falls_back() {
    let root = TempDir::new().unwrap();
    hx().args(["draw", "--no-delay", "--sysfs-root"])
        .arg(root.path().join("missing"))
        .assert()
        .success();
}

#[test]
fn draw_fails_on_unreadable_battery() {
    let root = power_supply("full\n");
    hx().args(["draw", "--no-delay", "--sysfs-root"])
        .arg(root.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("HEXAGRAM").not())
        .stderr(
            predicate::str::contains("entropy unavailable")
                .and(predicate::str::contains("try again")),
        );
}

#[test]
fn draw_rejects_nan_battery() {
    hx().args(["draw", "--no-delay", "--battery", "nan"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("HEXAGRAM").not())
        .stderr(predicate::str::contains("--battery"));
}

#[test]
fn draw_rejects_out_of_range_battery() {
    hx().args(["draw", "--no-delay", "--battery", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 1"));
}

#[test]
fn draw_fails_on_nan_capacity() {
    let root = power_supply("NaN\n");
    hx().args(["draw", "--no-delay", "--sysfs-root"])
        .arg(root.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("HEXAGRAM").not())
        .stderr(predicate::str::contains("entropy unavailable"));
}

// ---------------------------------------------------------------------------
// table / check / meaning
// ---------------------------------------------------------------------------

#[test]
fn table_lists_all_hexagrams() {
    hx().arg("table")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Qian")
                .and(predicate::str::contains("Wei Ji"))
                .and(predicate::str::contains("64 hexagrams")),
        );
}

#[test]
fn check_passes() {
    hx().arg("check")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("64 meanings loaded")),
        );
}

#[test]
fn meaning_for_number() {
    hx().args(["meaning", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 · Qian (The Creative)"));
}

#[test]
fn meaning_out_of_range() {
    hx().args(["meaning", "65"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no hexagram numbered 65"));
}
