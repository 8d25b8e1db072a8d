//! End-to-end tests for the curvebake binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn curvebake(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_curvebake"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run curvebake")
}

const REGIONS: &str = r#"[
  {
    "type": "Feature",
    "properties": { "name": "Cormyr", "danger": "low" },
    "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [0, 10], [10, 10], [10, 0]]] }
  },
  {
    "type": "Feature",
    "properties": { "name": "Point of Light" },
    "geometry": { "type": "Polygon", "coordinates": [[[4, 4], [4, 4], [4, 4]]] }
  }
]"#;

#[test]
fn bake_writes_default_destination() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("regions.json"), REGIONS).unwrap();

    let output = curvebake(temp.path(), &["bake", "regions.json", "--resolution", "50"]);
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("regions_smooth.json"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Point of Light").count(), 1);

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("regions_smooth.json")).unwrap())
            .unwrap();
    let regions = written.as_array().unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(
        regions[0]["geometry"]["coordinates"][0].as_array().unwrap().len(),
        51
    );
    assert_eq!(regions[0]["properties"]["danger"], "low");
    assert_eq!(
        regions[1]["geometry"]["coordinates"][0],
        serde_json::json!([[4, 4], [4, 4], [4, 4]])
    );
}

#[test]
fn bake_json_summary() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("regions.json"), REGIONS).unwrap();

    let output = curvebake(
        temp.path(),
        &["bake", "regions.json", "-o", "out/smooth.json", "-r", "20", "--json"],
    );
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["counts"]["total"], 2);
    assert_eq!(summary["counts"]["smoothed"], 1);
    assert_eq!(summary["counts"]["failed"], 1);
    assert_eq!(summary["diagnostics"][0]["region"], "Point of Light");
    assert_eq!(summary["config"]["resolution"], 20);
    assert!(temp.path().join("out/smooth.json").exists());
}

#[test]
fn check_does_not_write() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("regions.json"), REGIONS).unwrap();

    let output = curvebake(temp.path(), &["check", "regions.json", "--json"]);
    assert!(output.status.success());

    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["counts"]["failed"], 1);
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn missing_source_exits_with_error() {
    let temp = tempfile::tempdir().unwrap();
    let output = curvebake(temp.path(), &["bake", "nope.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Region file not found"));
}

#[test]
fn invalid_sharpness_exits_with_error() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("regions.json"), REGIONS).unwrap();

    let output = curvebake(temp.path(), &["bake", "regions.json", "--sharpness", "1.5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("sharpness"));
    assert!(!temp.path().join("regions_smooth.json").exists());
}

#[test]
fn undecodable_source_leaves_no_output() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("regions.json"), "{\"type\": \"Feature\"}").unwrap();

    let output = curvebake(temp.path(), &["bake", "regions.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp.path().join("regions_smooth.json").exists());
}
