//! Runs the `shopspot` binary as a subprocess and checks exit codes and
//! the split between stdout (report only) and stderr (diagnostics).

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn shopspot_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_shopspot"))
}

/// Run the binary with `input` on stdin. Returns `(exit_code, stdout, stderr)`.
fn run_shopspot(args: &[&str], input: &str) -> (Option<i32>, String, String) {
    let mut child = Command::new(shopspot_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn shopspot");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait for shopspot");
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn terminated_stream_exits_zero() {
    let (code, stdout, stderr) = run_shopspot(&[], "3 3 1 1\n2 2\n1\n0 0 0 0\n");
    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert_eq!(stdout, "\nCase 1:\n1 (2,1)\n");
    assert!(stderr.is_empty(), "unexpected stderr: {stderr}");
}

#[test]
fn parallel_flag_prints_the_same_report() {
    let input = "5 4 3 2\n1 1\n5 4\n3 2\n2\n9\n0 0 0 0\n";
    let (seq_code, seq_out, _) = run_shopspot(&[], input);
    let (par_code, par_out, _) = run_shopspot(&["--parallel"], input);
    assert_eq!(seq_code, Some(0));
    assert_eq!(par_code, Some(0));
    assert_eq!(seq_out, par_out);
}

#[test]
fn input_error_exits_one_with_message_on_stderr() {
    // Case 1 is answered, case 2 has a shop outside the city.
    let (code, stdout, stderr) = run_shopspot(&[], "2 2 0 1\n1\n2 2 1 1\n3 1\n1\n");
    assert_eq!(code, Some(1));
    assert_eq!(stdout, "\nCase 1:\n0 (1,1)\n");
    assert!(stderr.contains("failed to process cases"), "stderr: {stderr}");
    assert!(stderr.contains("line 4"), "stderr: {stderr}");
}

#[test]
fn missing_terminator_exits_one() {
    let (code, stdout, stderr) = run_shopspot(&[], "1 1 0 1\n0\n");
    assert_eq!(code, Some(1));
    assert_eq!(stdout, "\nCase 1:\n0 (1,1)\n");
    assert!(stderr.contains("4 zeros"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_exits_one() {
    let (code, stdout, stderr) =
        run_shopspot(&["--input", "/definitely/not/here/cases.txt"], "");
    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("failed to open input"), "stderr: {stderr}");
}
