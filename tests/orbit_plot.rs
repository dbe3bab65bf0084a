use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const ORBIT_MANIFESTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/orbits");

#[test]
fn default_run_plots_the_earth() {
    let dir = tempfile::tempdir().expect("tempdir");

    Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Orbit of the Earth around the Sun"))
        .stdout(predicate::str::contains("e = 0.0167"));

    let svg = fs::read_to_string(dir.path().join("artifacts/earth_orbit.svg")).expect("svg");
    assert!(svg.contains("Orbit of the Earth around the Sun"));
    assert!(svg.contains("Star (Sun)"));
}

#[test]
fn manifest_body_with_csv_and_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let svg = dir.path().join("mars.svg");
    let csv = dir.path().join("mars.csv");
    let json = dir.path().join("mars.json");

    Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .args(["--config", ORBIT_MANIFESTS, "--body", "mars", "--samples", "64"])
        .arg("--output")
        .arg(&svg)
        .arg("--csv")
        .arg(&csv)
        .arg("--summary")
        .arg(&json)
        .assert()
        .success();

    assert!(fs::metadata(&svg).expect("svg metadata").len() > 0);
    assert_eq!(fs::read_to_string(&csv).unwrap().lines().count(), 65);
    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(summary["name"], "Mars");
    assert_eq!(summary["samples"], 64);
}

#[test]
fn csv_can_stream_to_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .current_dir(dir.path())
        .args(["--samples", "3", "--csv", "-"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "index,theta_rad,x_m,y_m,r_m");
}

#[test]
fn summary_can_stream_to_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .current_dir(dir.path())
        .args(["--samples", "16", "--summary", "-"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a single JSON document");
    assert_eq!(summary["name"], "Earth");
    assert_eq!(summary["samples"], 16);
}

#[test]
fn command_line_overrides_reach_the_plot() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .current_dir(dir.path())
        .args([
            "--semi-major-axis-m",
            "2.0e11",
            "--eccentricity",
            "0.3",
            "--title",
            "Custom",
            "--width",
            "640",
            "--height",
            "480",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Custom ==="))
        .stdout(predicate::str::contains("a = 2.000000e11 m"))
        .stdout(predicate::str::contains("e = 0.3000"));

    let svg = fs::read_to_string(dir.path().join("artifacts/earth_orbit.svg")).expect("svg");
    assert!(svg.contains("Custom"));
    assert!(svg.contains(r#"width="640""#));
    assert!(svg.contains(r#"height="480""#));
}

#[test]
fn open_orbits_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .current_dir(dir.path())
        .args(["--eccentricity", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("eccentricity must lie in [0, 1)"));
    assert!(!dir.path().join("artifacts").exists());
}

#[test]
fn unknown_body_without_manifest_fails() {
    Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .args(["--body", "Pluto"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs --config"));
}
