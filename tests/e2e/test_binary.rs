//! Integration tests for the graph-raster binary.
//!
//! These tests run the compiled binary and check the files and messages it produces.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const TRIANGLE: &str = "3 64 64\n0 1\n1 2\n2 0\n";

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_graph-raster"))
}

/// A per-test scratch path under the system temp dir.
fn scratch(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("graph-raster-{}-{}", std::process::id(), name));
    path
}

/// Run the binary with the given stdin input and CLI args.
fn run_binary(input: &str, args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

// ─── Image output ───────────────────────────────────────────────────────────

#[test]
fn test_writes_bmp_from_stdin() {
    let out = scratch("stdin.bmp");
    let output = run_binary(
        TRIANGLE,
        &["-o", out.to_str().unwrap(), "--seed", "7", "-i", "100"],
    );
    assert_success(&output);

    let bytes = fs::read(&out).expect("output file written");
    assert_eq!(bytes.len(), 54 + 64 * 64 * 3);
    assert_eq!(&bytes[0..2], b"BM");
    fs::remove_file(&out).ok();
}

#[test]
fn test_reads_input_file() {
    let input = scratch("input.txt");
    let out = scratch("file.bmp");
    fs::write(&input, TRIANGLE).unwrap();

    let output = run_binary(
        "",
        &[
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "-s",
            "1",
            "-i",
            "50",
        ],
    );
    assert_success(&output);
    assert!(out.exists());
    fs::remove_file(&input).ok();
    fs::remove_file(&out).ok();
}

#[test]
fn test_seed_makes_output_reproducible() {
    let a = scratch("seed-a.bmp");
    let b = scratch("seed-b.bmp");
    for path in [&a, &b] {
        let output = run_binary(
            TRIANGLE,
            &["-o", path.to_str().unwrap(), "--seed", "1234", "-i", "100"],
        );
        assert_success(&output);
    }
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    fs::remove_file(&a).ok();
    fs::remove_file(&b).ok();
}

#[test]
fn test_pad_rows_flag_accepts_any_width() {
    let out = scratch("padded.bmp");
    let output = run_binary(
        "3 10 10\n0 1\n",
        &["-o", out.to_str().unwrap(), "--pad-rows", "-s", "3", "-i", "20"],
    );
    assert_success(&output);
    assert_eq!(fs::read(&out).unwrap().len(), 54 + 32 * 10);
    fs::remove_file(&out).ok();
}

#[test]
fn test_preview_prints_text() {
    let output = run_binary(TRIANGLE, &["--preview", "-s", "5", "-i", "50"]);
    assert_success(&output);
    let text = String::from_utf8(output.stdout).expect("Non-UTF8 output");
    assert!(text.contains('#'));
    assert!(text.ends_with('\n'));
    assert!(text.lines().all(|l| l.len() <= 64));
}

#[test]
fn test_verbose_logs_seed() {
    let output = run_binary(TRIANGLE, &["--preview", "-v", "-s", "77", "-i", "10"]);
    assert_success(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("seed 77"), "stderr: {stderr}");
}

// ─── Failures ───────────────────────────────────────────────────────────────

#[test]
fn test_invalid_edge_fails() {
    let out = scratch("invalid.bmp");
    let output = run_binary("3 64 64\n0 3\n", &["-o", out.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error:"), "stderr: {stderr}");
    assert!(stderr.contains("Invalid graph"), "stderr: {stderr}");
    assert!(!out.exists());
}

#[test]
fn test_unaligned_width_fails_without_pad_rows() {
    let output = run_binary("3 10 10\n0 1\n", &["--preview"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a multiple of 4"), "stderr: {stderr}");
}

#[test]
fn test_missing_input_file_fails() {
    let output = run_binary("", &[scratch("does-not-exist.txt").to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read"), "stderr: {stderr}");
}

#[test]
fn test_unwritable_output_fails() {
    let mut dir = scratch("no-such-dir");
    dir.push("graph.bmp");
    let output = run_binary(TRIANGLE, &["-o", dir.to_str().unwrap(), "-i", "10"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Output sink failed"), "stderr: {stderr}");
}
