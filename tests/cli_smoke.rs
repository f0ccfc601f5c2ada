use std::fs;
use std::process::{Command, Output};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_quijy").to_string()
}

/// Run with HOME pointed at an empty dir so no user config leaks in.
fn run(args: &[&str]) -> (Output, tempfile::TempDir) {
    let home = tempfile::tempdir().unwrap();
    let output = Command::new(bin())
        .args(args)
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .output()
        .expect("run");
    (output, home)
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).to_string()
}

#[test]
fn eyepad_prints_padded_operator() {
    let (output, _home) = run(&["eyepad", "x", "--dims", "2,2", "--inds", "0", "--precision", "0"]);
    assert!(output.status.success(), "stderr:\n{}", String::from_utf8_lossy(&output.stderr));
    let out = stdout(&output);
    assert!(out.contains("4x4"));
    assert!(out.contains("0+0i  0+0i  1+0i  0+0i"));
}

#[test]
fn checked_eyepad_reports_mismatch() {
    let (output, _home) = run(&["eyepad", "x", "--dims", "3,2", "--inds", "0", "--check"]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr).to_lowercase();
    assert!(err.contains("shape mismatch"), "stderr:\n{err}");
}

#[test]
fn kron_writes_out_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("kron.txt");
    let (output, _home) = run(&["kron", "z", "[[1,0],[0,0]]", "--precision", "0", "--out", out.to_str().unwrap()]);
    assert!(output.status.success(), "stderr:\n{}", String::from_utf8_lossy(&output.stderr));
    let text = fs::read_to_string(&out).expect("kron.txt exists");
    assert_eq!(text.lines().count(), 4);
    let third: Vec<&str> = text.lines().nth(2).unwrap().split_whitespace().collect();
    assert_eq!(third, ["0+0i", "0+0i", "-1+0i", "0+0i"]);
}

#[test]
fn qonvert_dop_and_info() {
    let (output, _home) = run(&["qonvert", "[1,0]", "--qtype", "dop", "--precision", "0"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("1+0i  0+0i\n0+0i  0+0i"));

    let (output, _home) = run(&["info", "y"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("class: operator"));
    assert!(out.contains("hermitian: true"));
}

#[test]
fn config_file_sets_sparse_and_precision() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("quijy.toml");
    fs::write(&cfg, "sparse = true\nprecision = 1\n").unwrap();
    let (output, _home) = run(&["--config", cfg.to_str().unwrap(), "kronpow", "x", "2"]);
    assert!(output.status.success(), "stderr:\n{}", String::from_utf8_lossy(&output.stderr));
    let out = stdout(&output);
    assert!(out.contains("sparse 4x4 nnz=4"));
    assert!(out.contains("1.0+0.0i"));
}

#[test]
fn bad_config_path_fails() {
    let (output, _home) = run(&["--config", "/definitely/not/here.toml", "info", "x"]);
    assert!(!output.status.success());
}
