use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

fn spawn_engine() -> std::process::Child {
    let exe = env!("CARGO_BIN_EXE_fernbea");
    Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn engine binary")
}

fn run_script(script: &[u8]) -> (String, std::process::ExitStatus) {
    let mut child = spawn_engine();
    child.stdin.as_mut().unwrap().write_all(script).unwrap();
    let output = child.wait_with_output().expect("failed to read output");
    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        output.status,
    )
}

#[test]
fn uci_handshake_over_pipes() {
    let (stdout, status) = run_script(b"uci\nisready\nquit\n");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["id name fernbea", "id author rwsa", "uciok", "readyok"]
    );
    assert!(status.success());
}

#[test]
fn uci_go_answers_null_move_interactively() {
    let mut child = spawn_engine();
    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let mut reader = BufReader::new(stdout);

    stdin
        .write_all(b"uci\nucinewgame\nposition startpos moves e2e4 e7e5\ngo movetime 50\n")
        .unwrap();

    let mut output = String::new();
    let mut move_line = None;
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).expect("read failed");
        if bytes == 0 {
            break;
        }
        output.push_str(&line);
        if line.trim() == "0000" {
            move_line = Some(line);
            break;
        }
    }

    stdin.write_all(b"quit\n").unwrap();
    let status = child.wait().unwrap();

    assert!(output.contains("uciok"));
    assert!(move_line.is_some(), "no move token in output: {output}");
    assert!(!output.contains("info string error"));
    assert!(status.success());
}

#[test]
fn uci_bad_position_reports_and_continues() {
    let (stdout, status) = run_script(b"uci\nposition notfen\nisready\nquit\n");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "unexpected output: {stdout}");
    assert!(lines[3].starts_with("info string error:"));
    assert_eq!(lines[4], "readyok");
    assert!(status.success());
}

#[test]
fn uci_stop_does_not_terminate() {
    let (stdout, status) = run_script(b"uci\nucinewgame\nstop\ngo\nquit\n");
    assert_eq!(stdout.lines().last(), Some("0000"));
    assert!(status.success());
}

#[test]
fn uci_end_of_input_exits_cleanly() {
    let (stdout, status) = run_script(b"uci\n");
    assert!(stdout.contains("uciok"));
    assert!(status.success());
}

#[test]
fn uci_unknown_commands_are_silent() {
    let (stdout, _) = run_script(b"hello\nponderhit\nsetoption name Hash value 16\nquit\n");
    assert!(stdout.is_empty(), "unexpected output: {stdout}");
}
