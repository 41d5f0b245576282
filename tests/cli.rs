// Binary-level tests: argument handling and exit codes.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn count_frequency(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_count-frequency"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn randoms(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_randoms"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_input(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

// ============================================================
// count-frequency
// ============================================================

#[test]
fn no_arguments_exits_one() {
    let out = count_frequency(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn missing_output_exits_two_without_writing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "only-input.txt", "hello world\n");
    let out = count_frequency(&[input.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn extra_positional_is_usage_error_not_missing_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "extra.txt", "hello world\n");
    let output = dir.path().join("extra.dat");
    let out = count_frequency(&[
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "1",
        "surplus",
    ]);
    assert_eq!(out.status.code(), Some(64));
    assert!(!output.exists());
}

#[test]
fn usage_names_the_positionals() {
    let out = count_frequency(&["--help"]);
    assert!(out.status.success());
    let help = String::from_utf8_lossy(&out.stdout);
    for name in ["INPUT_FILE", "OUTPUT_FILE", "MINIMUM_LENGTH"] {
        assert!(help.contains(name), "{name} missing from help");
    }
}

#[test]
fn successful_run_writes_table() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ok.txt", "Cat cat CAT\n");
    let output = dir.path().join("ok.dat");
    let out = count_frequency(&[
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--quiet",
    ]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "# Frequency data\n# Format: token count percentage\ncat 3 100.0\n"
    );
}

#[test]
fn minimum_length_argument_is_applied() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "min.txt", "a bb ccc\n");
    let output = dir.path().join("min.dat");
    let out = count_frequency(&[
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "2",
        "-q",
    ]);
    assert!(out.status.success());
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.ends_with("bb 1 50.0\nccc 1 50.0\n"));
}

#[test]
fn malformed_minimum_length_is_invalid_argument() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bad-min.txt", "a bb\n");
    let output = dir.path().join("bad-min.dat");
    for bad in ["five", "0", "-3"] {
        let out = count_frequency(&[input.to_str().unwrap(), output.to_str().unwrap(), bad]);
        assert_eq!(out.status.code(), Some(3), "MINIMUM_LENGTH {bad}");
        assert!(String::from_utf8_lossy(&out.stderr).contains("MINIMUM_LENGTH"));
    }
    assert!(!output.exists());
}

#[test]
fn missing_input_file_exits_with_io_code() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("no-input.dat");
    let out = count_frequency(&[
        dir.path().join("no-such-input.txt").to_str().unwrap(),
        output.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(4));
}

#[test]
fn everything_filtered_exits_with_empty_code() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "short.txt", "a b c\n");
    let output = dir.path().join("short.dat");
    let out = count_frequency(&[input.to_str().unwrap(), output.to_str().unwrap(), "9"]);
    assert_eq!(out.status.code(), Some(6));
    assert!(String::from_utf8_lossy(&out.stderr).contains("empty or zero-total frequency set"));
    assert!(!output.exists());
}

// ============================================================
// randoms
// ============================================================

#[test]
fn randoms_seeded_runs_match() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("rand-a.txt");
    let b = dir.path().join("rand-b.txt");
    for path in [&a, &b] {
        let out = randoms(&[path.to_str().unwrap(), "50", "25", "123", "-q"]);
        assert!(out.status.success());
    }
    let first = fs::read_to_string(&a).unwrap();
    assert_eq!(first, fs::read_to_string(&b).unwrap());
    assert_eq!(first.lines().count(), 25);
    assert!(first.lines().all(|l| l.parse::<u64>().unwrap() <= 50));
}

#[test]
fn randoms_missing_arguments_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("rand-missing.txt");
    let out = randoms(&[output.to_str().unwrap(), "10"]);
    assert_eq!(out.status.code(), Some(64));
    assert!(!output.exists());
}

#[test]
fn randoms_negative_count_is_invalid_argument() {
    let dir = TempDir::new().unwrap();
    let out = randoms(&[dir.path().join("rand-neg.txt").to_str().unwrap(), "10", "-5"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&out.stderr).contains("MAX_VALUES"));
}

#[test]
fn randoms_non_numeric_seed_is_invalid_argument() {
    let dir = TempDir::new().unwrap();
    let out = randoms(&[
        dir.path().join("rand-seed.txt").to_str().unwrap(),
        "10",
        "5",
        "abc",
    ]);
    assert_eq!(out.status.code(), Some(3));
}
