//! Integration tests for the CLI generation workflow.
//!
//! Runs the compiled `tracktiles` binary against temporary directories and
//! validates the produced tree, exit codes and argument errors.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn tracktiles() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tracktiles"))
}

#[test]
fn generates_a_one_level_tileset() {
    let tmp = TempDir::new().unwrap();
    let outdir = tmp.path().join("fixture");

    let output = tracktiles()
        .arg(&outdir)
        .args(["-l", "1", "-c", "2"])
        .output()
        .expect("binary should run");
    assert!(output.status.success(), "stderr: {:?}", output.stderr);

    assert!(outdir.join("header").exists());
    assert!(outdir.join("0,0,0").exists());
    for name in ["1,0,0", "1,1,0", "1,0,1", "1,1,1"] {
        assert!(outdir.join(name).exists(), "missing tile {}", name);
    }

    let info: serde_json::Value = serde_json::from_slice(
        &fs::read(outdir.join("sub").join("seriesgroup=1").join("info")).unwrap(),
    )
    .unwrap();
    assert_eq!(info["mmsi"], "1");
    assert_eq!(info["callsign"], "SE1");
    assert_eq!(info["vesselname"], "Tor");

    // count=2 -> 4 records, 12 byte header + 4 rows of 36 bytes
    let tile_len = fs::metadata(outdir.join("0,0,0")).unwrap().len();
    assert_eq!(tile_len, 12 + 4 * 36);
}

#[test]
fn temporal_flags_produce_window_named_tiles() {
    let tmp = TempDir::new().unwrap();
    let outdir = tmp.path().join("temporal");

    let status = tracktiles()
        .arg(&outdir)
        .args(["-l", "0", "-c", "1", "-E", "1", "-s", "2014-01-01T00:00:00"])
        .status()
        .expect("binary should run");
    assert!(status.success());

    let name = "2014-01-01T00:00:00,2014-01-31T00:00:00;0,0,0";
    assert!(outdir.join(name).exists());
    assert!(outdir.join("sub").join("seriesgroup=1").join(name).exists());

    let header: serde_json::Value =
        serde_json::from_slice(&fs::read(outdir.join("header")).unwrap()).unwrap();
    assert_eq!(header["temporalExtents"], true);
}

#[test]
fn two_runs_are_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let out_a = tmp.path().join("a").join("fixture");
    let out_b = tmp.path().join("b").join("fixture");

    for outdir in [&out_a, &out_b] {
        let status = tracktiles()
            .arg(outdir)
            .args(["-l", "1", "-c", "3"])
            .status()
            .expect("binary should run");
        assert!(status.success());
    }

    fn collect(root: &Path, dir: &Path, out: &mut Vec<(String, Vec<u8>)>) {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        entries.sort();
        for path in entries {
            if path.is_dir() {
                collect(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_string_lossy().into_owned();
                out.push((rel, fs::read(&path).unwrap()));
            }
        }
    }

    let mut tree_a = Vec::new();
    let mut tree_b = Vec::new();
    collect(&out_a, &out_a, &mut tree_a);
    collect(&out_b, &out_b, &mut tree_b);
    assert_eq!(tree_a, tree_b);
}

#[test]
fn invalid_date_fails_with_a_message() {
    let tmp = TempDir::new().unwrap();
    let outdir = tmp.path().join("never");

    let output = tracktiles()
        .arg(&outdir)
        .args(["-s", "June 1st"])
        .output()
        .expect("binary should run");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a valid date"), "stderr: {}", stderr);
    assert!(!outdir.exists(), "no output on argument errors");
}
