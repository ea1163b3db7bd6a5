//! Production command runner using std::process.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use nextplate_core::application::ports::CommandRunner;
use nextplate_core::error::ProcessError;
use tracing::{debug, info};

/// How often a time-limited child is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs external commands with fully captured output streams.
///
/// An optional timeout bounds each run; on expiry the child is killed and
/// the run fails with [`ProcessError::TimedOut`]. Without a timeout a hung
/// generator blocks indefinitely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner {
    timeout: Option<Duration>,
}

impl ShellRunner {
    /// A runner with no time limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner that kills the child after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, args: &[String], cwd: &Path) -> Result<(), ProcessError> {
        let resolved = resolve_command(command);
        info!(command = %resolved, cwd = %cwd.display(), "Running generator");
        debug!(?args, "Generator arguments");

        let mut child = Command::new(&resolved)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                command: resolved.clone(),
                source,
            })?;

        // Drain both pipes on background threads; waiting on the child while
        // a pipe buffer is full would deadlock.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match self.timeout {
            Some(timeout) => wait_with_timeout(&mut child, &resolved, timeout)?,
            None => child.wait().map_err(|source| ProcessError::Spawn {
                command: resolved.clone(),
                source,
            })?,
        };

        let stdout = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();

        if status.success() {
            info!(command = %resolved, "Generator finished");
            Ok(())
        } else {
            Err(ProcessError::Exit {
                command: resolved,
                code: status.code().unwrap_or(-1),
                stdout,
                stderr,
            })
        }
    }
}

/// Read a piped stream to completion without blocking the waiter.
fn drain<R: Read + Send + 'static>(stream: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut stream) = stream {
            let _ = stream.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn wait_with_timeout(
    child: &mut Child,
    command: &str,
    timeout: Duration,
) -> Result<ExitStatus, ProcessError> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {}
            Err(source) => {
                return Err(ProcessError::Spawn {
                    command: command.to_string(),
                    source,
                });
            }
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ProcessError::TimedOut {
                command: command.to_string(),
                timeout,
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Platform-appropriate executable resolution.
///
/// npm-family shims (`npx`, `npm`) are `.cmd` batch files on Windows and
/// cannot be spawned by their bare name. Argument semantics are untouched.
#[cfg(windows)]
fn resolve_command(command: &str) -> String {
    if command.ends_with(".cmd") || command.ends_with(".exe") {
        command.to_string()
    } else {
        format!("{command}.cmd")
    }
}

#[cfg(not(windows))]
fn resolve_command(command: &str) -> String {
    command.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> std::path::PathBuf {
        std::env::temp_dir()
    }

    #[test]
    #[cfg(unix)]
    fn zero_exit_resolves_ok() {
        let runner = ShellRunner::new();
        let args = vec!["-c".to_string(), "exit 0".to_string()];
        assert!(runner.run("sh", &args, &cwd()).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn nonzero_exit_carries_captured_streams() {
        let runner = ShellRunner::new();
        let args = vec![
            "-c".to_string(),
            "echo progress; echo oops >&2; exit 3".to_string(),
        ];
        let err = runner.run("sh", &args, &cwd()).unwrap_err();
        match err {
            ProcessError::Exit {
                code,
                stdout,
                stderr,
                ..
            } => {
                assert_eq!(code, 3);
                assert!(stdout.contains("progress"));
                assert!(stderr.contains("oops"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_binary_is_spawn_failure() {
        let runner = ShellRunner::new();
        let err = runner
            .run("nextplate-no-such-binary-xyz", &[], &cwd())
            .unwrap_err();
        assert!(matches!(err, ProcessError::Spawn { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn hung_child_is_killed_at_the_deadline() {
        let runner = ShellRunner::with_timeout(Duration::from_millis(200));
        let args = vec!["-c".to_string(), "sleep 30".to_string()];
        let start = Instant::now();
        let err = runner.run("sh", &args, &cwd()).unwrap_err();
        assert!(matches!(err, ProcessError::TimedOut { .. }));
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
