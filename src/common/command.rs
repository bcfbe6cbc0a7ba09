use std::io;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// Outcome of running an external command.
///
/// A missing binary and a timeout are both reported through this struct
/// rather than as errors, so callers can branch on the outcome alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Exit code of the process; -1 when the process was killed on timeout
    /// or could not be launched.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
}

/// Run an external command, capturing stdout and stderr, with a hard
/// wall-clock timeout.
///
/// Output bytes are decoded as UTF-8 with invalid sequences replaced. On
/// timeout the child is killed (termination failures are swallowed) and the
/// outcome carries whatever stdout was captured up to that point with
/// `stderr` set to "Process timed out". A single attempt is made; there are
/// no retries.
pub async fn run(
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
    timeout_secs: u64,
) -> io::Result<ProcessOutcome> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(ProcessOutcome {
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("{} command not found. Is {} installed?", program, program),
                timed_out: false,
            });
        }
        Err(e) => return Err(e),
    };

    // Drain both pipes while waiting, so a chatty child cannot fill the pipe
    // buffer and stall before the deadline.
    let stdout_task = tokio::spawn(read_to_end(child.stdout.take()));
    let stderr_task = tokio::spawn(read_to_end(child.stderr.take()));

    match tokio::time::timeout(Duration::from_secs(timeout_secs), child.wait()).await {
        Ok(status) => {
            let status = status?;
            let stdout = stdout_task.await.unwrap_or_default();
            let stderr = stderr_task.await.unwrap_or_default();
            Ok(ProcessOutcome {
                exit_code: status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&stdout).into_owned(),
                stderr: String::from_utf8_lossy(&stderr).into_owned(),
                timed_out: false,
            })
        }
        Err(_) => {
            // Termination is best effort; the timeout outcome is returned
            // regardless.
            let _ = child.kill().await;
            let stdout = stdout_task.await.unwrap_or_default();
            let _ = stderr_task.await;
            Ok(ProcessOutcome {
                exit_code: -1,
                stdout: String::from_utf8_lossy(&stdout).into_owned(),
                stderr: "Process timed out".to_string(),
                timed_out: true,
            })
        }
    }
}

async fn read_to_end<R>(stream: Option<R>) -> Vec<u8>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        let _ = stream.read_to_end(&mut buf).await;
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let outcome = run("echo", &["hello"], None, 5).await.unwrap();
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.stdout, "hello\n");
        assert_eq!(outcome.stderr, "");
        assert!(!outcome.timed_out);
    }

    #[tokio::test]
    async fn test_run_reports_nonzero_exit() {
        let outcome = run("sh", &["-c", "exit 3"], None, 5).await.unwrap();
        assert_eq!(outcome.exit_code, 3);
        assert!(!outcome.timed_out);
    }

    #[tokio::test]
    async fn test_run_missing_binary_is_a_normal_outcome() {
        let outcome = run("definitely-not-a-real-command-0x7f", &[], None, 5)
            .await
            .unwrap();
        assert_eq!(outcome.exit_code, -1);
        assert_eq!(outcome.stdout, "");
        assert!(outcome.stderr.contains("command not found"));
        assert!(!outcome.timed_out);
    }

    #[tokio::test]
    async fn test_run_timeout_kills_process() {
        let outcome = run("sleep", &["5"], None, 1).await.unwrap();
        assert!(outcome.timed_out);
        assert_eq!(outcome.exit_code, -1);
        assert_eq!(outcome.stderr, "Process timed out");
    }

    #[tokio::test]
    async fn test_run_timeout_keeps_partial_stdout() {
        let outcome = run("sh", &["-c", "echo partial; sleep 5"], None, 1)
            .await
            .unwrap();
        assert!(outcome.timed_out);
        assert!(outcome.stdout.contains("partial"));
    }

    #[tokio::test]
    async fn test_run_respects_working_directory() {
        let outcome = run("pwd", &[], Some(Path::new("/")), 5).await.unwrap();
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.stdout.trim(), "/");
    }
}
