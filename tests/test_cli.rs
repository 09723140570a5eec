use assert_cmd::prelude::*;
use predicates::prelude::*;

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pressplan-cli-{}-{}", std::process::id(), name))
}

fn pressplan() -> Command {
    Command::cargo_bin("pressplan").expect("Calling binary failed")
}

#[test]
fn no_subcommand_fails() {
    pressplan().assert().failure();
}

#[test]
fn solve_reports_checksum() {
    pressplan()
        .args(&["solve", "-i"])
        .arg(data("machines.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum of bests = 33"));
}

#[test]
fn solve_checks_expected_checksum() {
    pressplan()
        .args(&["solve", "--expect", "33", "-i"])
        .arg(data("machines.txt"))
        .assert()
        .success();

    pressplan()
        .args(&["solve", "--expect", "463", "-i"])
        .arg(data("machines.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong answer (expected 463, had 33)"));
}

#[test]
fn solve_with_lights_on_one_core() {
    pressplan()
        .args(&["solve", "--lights", "-C", "1", "-i"])
        .arg(data("machines.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum of bests = 33"))
        .stdout(predicate::str::contains("Fewest presses for lights = 7"));
}

#[test]
fn solve_reads_gzipped_input() {
    pressplan()
        .args(&["solve", "-i"])
        .arg(data("machines.txt.gz"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum of bests = 33"));
}

#[test]
fn solve_gzip_flag_forces_decoding() {
    pressplan()
        .args(&["solve", "-g", "-i"])
        .arg(data("machines-gzipped.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum of bests = 33"));

    pressplan()
        .args(&["solve", "-i"])
        .arg(data("machines-gzipped.txt"))
        .assert()
        .failure();
}

#[test]
fn solve_writes_solutions() {
    let out = scratch("solutions.json");
    pressplan()
        .args(&["solve", "-i"])
        .arg(data("machines.txt"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    fs::remove_file(&out).unwrap();

    let totals = json
        .as_array()
        .unwrap()
        .iter()
        .map(|sol| sol["total"].as_u64().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(totals, vec![10, 12, 11]);
    assert_eq!(json[2]["machine"], 3);
}

#[test]
fn solve_rejects_malformed_line() {
    pressplan()
        .args(&["solve", "-i"])
        .arg(data("malformed.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn solve_reports_infeasible_machine() {
    pressplan()
        .args(&["solve", "-i"])
        .arg(data("infeasible.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("machine 2"));
}

#[test]
fn lights_reports_total() {
    pressplan()
        .args(&["lights", "-i"])
        .arg(data("machines.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Fewest presses for lights = 7"));
}

#[test]
fn lights_reports_unreachable_machine() {
    pressplan()
        .args(&["lights", "-i"])
        .arg(data("unreachable.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("machine 2"));
}

#[test]
fn plot_writes_svg() {
    let out = scratch("plot.svg");
    pressplan()
        .args(&["plot", "--vline", "5:r", "--vline", "9", "--hline", "4:g", "-i"])
        .arg(data("points.txt"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let svg = fs::read_to_string(&out).unwrap();
    fs::remove_file(&out).unwrap();

    assert!(svg.contains("<polyline"));
    assert_eq!(svg.matches("<line ").count(), 3);
    assert!(svg.contains(r#"stroke="g""#));
}

#[test]
fn plot_rejects_bad_reference_line() {
    pressplan()
        .args(&["plot", "--vline", "left", "-i"])
        .arg(data("points.txt"))
        .assert()
        .failure();
}
