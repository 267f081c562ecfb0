use std::io::Write;
use std::process::{Command, Output, Stdio};

fn passgen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_passgen"));
    cmd.env_remove("PASSGEN_LENGTH")
        .env_remove("PASSGEN_SAFE_SYMBOLS")
        .env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    passgen().args(args).output().expect("failed to run passgen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn default_run_prints_one_password() {
    let output = run(&[]);
    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 12);
    assert!(lines[0].bytes().all(|c| c.is_ascii_graphic()));
}

#[test]
fn length_and_count_flags() {
    let output = run(&["--length", "40", "--count", "3", "--no-symbols"]);
    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.len(), 40);
        assert!(line.bytes().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn seed_is_reproducible_across_processes() {
    let a = run(&["--seed", "1234", "-c", "2"]);
    let b = run(&["--seed", "1234", "-c", "2"]);
    assert_eq!(stdout(&a), stdout(&b));
}

#[test]
fn length_from_environment() {
    let output = passgen().env("PASSGEN_LENGTH", "30").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end().len(), 30);
}

#[test]
fn no_class_selected_fails() {
    let output = run(&["--no-upper", "--no-lower", "--no-digits", "--no-symbols"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("no character class selected"), "{}", err);
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = run(&["--bogus"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn noui_reads_answers_from_stdin() {
    let mut child = passgen()
        .arg("--noui")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"10\ny\nn\ny\nn\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("What's the length of the password?"));
    assert!(!out.contains("ONLY safe symbols"));
    let password = out.lines().rev().find(|l| !l.is_empty()).unwrap();
    assert_eq!(password.len(), 10);
    assert!(password.bytes().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[test]
fn noui_rejects_bad_length() {
    let mut child = passgen()
        .arg("-n")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"-4\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid password length"));
}

#[test]
fn oversized_length_fails_cleanly() {
    for length in ["18446744073709551615", "65537"] {
        let output = run(&["-l", length]);
        assert_eq!(output.status.code(), Some(1), "length {}", length);
        assert!(output.stdout.is_empty());
        let err = String::from_utf8_lossy(&output.stderr);
        assert!(err.contains("invalid password length"), "{}", err);
        assert!(!err.contains("panicked"), "{}", err);
    }
}

#[test]
fn oversized_length_from_environment_fails_cleanly() {
    let output = passgen().env("PASSGEN_LENGTH", "1000000").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid password length"));
}

#[test]
fn noui_rejects_oversized_length() {
    let mut child = passgen()
        .arg("--noui")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"18446744073709551615\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid password length"));
}

#[test]
fn safe_symbols_env_does_not_block_no_symbols() {
    for value in ["false", "true"] {
        let output = passgen()
            .env("PASSGEN_SAFE_SYMBOLS", value)
            .args(["--no-symbols", "-l", "32"])
            .output()
            .unwrap();
        assert!(output.status.success(), "PASSGEN_SAFE_SYMBOLS={}", value);
        let out = stdout(&output);
        let password = out.trim_end();
        assert_eq!(password.len(), 32);
        assert!(password.bytes().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn safe_symbols_env_restricts_symbols() {
    let output = passgen()
        .env("PASSGEN_SAFE_SYMBOLS", "true")
        .args(["--no-upper", "--no-lower", "--no-digits", "-l", "200"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(!out.trim_end().contains(['\\', '`', '{', '}', '[', ']', '|']));
}
