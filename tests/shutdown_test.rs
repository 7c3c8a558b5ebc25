//! # Binary Shutdown Tests / 进程退出测试
//!
//! Runs the real `feedbridge` binary with stdin held open and checks that
//! ctrl-c (SIGINT) still ends the process promptly.
//! 在 stdin 保持打开时运行 `feedbridge`，确认 ctrl-c 仍能及时退出进程。

#![cfg(unix)]

use std::fs;
use std::io::{BufRead, BufReader};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

fn wait_with_deadline(child: &mut Child, deadline: Duration) -> Option<ExitStatus> {
    let until = Instant::now() + deadline;
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        if Instant::now() >= until {
            return None;
        }
        thread::sleep(Duration::from_millis(50));
    }
}

#[test]
fn test_ctrl_c_exits_while_stdin_stays_open() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("seed.json");
    fs::write(&seed_path, r#"{"A": {"name": "x"}}"#).unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_feedbridge"))
        .arg("--seed")
        .arg(&seed_path)
        .current_dir(temp_dir.path())
        .env_remove("SENTRY_DSN")
        .env_remove("FEEDBRIDGE_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Held until the end of the test: the bridge never sees EOF.
    let _stdin = child.stdin.take().unwrap();

    let stdout = child.stdout.take().unwrap();
    let (line_tx, line_rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stdout).lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let first = line_rx
        .recv_timeout(Duration::from_secs(10))
        .expect("bridge wrote nothing to stdout");
    assert!(first.contains(r#""port":"itemStarted""#));

    // Leave the run loop time to reach its ctrl-c listener.
    thread::sleep(Duration::from_millis(300));
    let kill = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(kill.success());

    let status = wait_with_deadline(&mut child, Duration::from_secs(5));
    if status.is_none() {
        let _ = child.kill();
        let _ = child.wait();
    }
    let status = status.expect("feedbridge kept running after SIGINT");
    assert!(status.success());
}
