//! End-to-end checks of the `tm-combos` binary's output and exit status.

use std::io::Read;
use std::process::{Command, Stdio};

const FIRST_LINE: &[u8] = b"0LA 0LA 0LA 0LA 0LA 0LA 0LA 0LA\n";
const LAST_LINE: &[u8] = b"1RH 1RH 1RH 1RH 1RH 1RH 1RH 1RH\n";

fn tm_combos() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_tm-combos"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn full_run_exits_zero_with_every_line() {
    let output = tm_combos().output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let lines = output.stdout.iter().filter(|&&byte| byte == b'\n').count();
    assert_eq!(lines, 2_220_075);
    assert!(output.stdout.starts_with(FIRST_LINE));
    assert!(output.stdout.ends_with(LAST_LINE));
}

#[test]
fn closed_stdout_exits_non_zero() {
    let mut child = tm_combos()
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stdout = child.stdout.take().unwrap();
    let mut first = [0u8; 32];
    stdout.read_exact(&mut first).unwrap();
    drop(stdout);

    let output = child.wait_with_output().unwrap();

    assert_eq!(&first[..], FIRST_LINE);
    assert_eq!(output.status.code(), Some(1));
    // A closed reader is logged below the default level.
    assert!(output.stderr.is_empty());
}

#[test]
fn version_flag_prints_name() {
    let output = tm_combos().arg("--version").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("tm-combos "));
}

#[test]
fn unknown_arguments_are_rejected() {
    let output = tm_combos().arg("--limit").arg("5").output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
