//! Orchestration of a single pre-commit run.

use crate::common::command;
use crate::common::security::AuditLogger;
use crate::hooks::types::RunResult;
use crate::hooks::{git, parse};
use std::sync::Arc;
use std::time::Instant;

/// Hard wall-clock limit for one `pre-commit run` invocation.
pub const TIMEOUT_SECONDS: u64 = 60;

/// Runs pre-commit against the staged files and classifies its output.
///
/// Each call is independent: there is no shared state between invocations
/// beyond the audit logger, and the spawned process is private to the call.
#[derive(Clone)]
pub struct PreCommitRunner {
    audit: Arc<AuditLogger>,
}

impl PreCommitRunner {
    pub fn new(audit: Arc<AuditLogger>) -> Self {
        Self { audit }
    }

    /// Run pre-commit on staged files and return a structured result.
    ///
    /// Always produces a well-formed [`RunResult`]: expected failure classes
    /// (missing repository or config, missing binary, timeout, abnormal
    /// exit) are encoded in the result, and anything unexpected is contained
    /// here and converted to a `system_error` result.
    pub async fn run(&self, force_non_git: bool) -> RunResult {
        let start = Instant::now();
        match self.run_inner(force_non_git, start).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("pre-commit run failed unexpectedly: {}", e);
                RunResult::SystemError {
                    error: format!("Unexpected error: {}", e),
                    execution_time: start.elapsed().as_secs_f64(),
                    raw_output: None,
                    stderr: None,
                }
            }
        }
    }

    async fn run_inner(&self, force_non_git: bool, start: Instant) -> anyhow::Result<RunResult> {
        if !force_non_git && !git::is_git_repository().await {
            return Ok(RunResult::SystemError {
                error: "Git repository not initialized. Please run 'git init' to initialize a repository."
                    .to_string(),
                execution_time: start.elapsed().as_secs_f64(),
                raw_output: None,
                stderr: None,
            });
        }

        if !git::has_precommit_config().await {
            return Ok(RunResult::SystemError {
                error: "No .pre-commit-config.yaml found in current directory.".to_string(),
                execution_time: start.elapsed().as_secs_f64(),
                raw_output: None,
                stderr: None,
            });
        }

        let outcome = command::run("pre-commit", &["run"], None, TIMEOUT_SECONDS).await?;
        let execution_time = start.elapsed().as_secs_f64();

        if outcome.timed_out {
            self.audit.log_timeout("pre_commit_run", TIMEOUT_SECONDS);
            return Ok(RunResult::Timeout {
                error: format!("Pre-commit execution exceeded {} seconds", TIMEOUT_SECONDS),
                execution_time,
                partial_output: (!outcome.stdout.is_empty())
                    .then(|| outcome.stdout.chars().take(1000).collect()),
            });
        }

        // Hooks may rewrite files while running; the status query has to run
        // after the process exits.
        let modified_files = if matches!(outcome.exit_code, 0 | 1) {
            git::modified_files().await
        } else {
            Vec::new()
        };

        Ok(parse::classify(
            outcome.exit_code,
            &outcome.stdout,
            &outcome.stderr,
            execution_time,
            modified_files,
        ))
    }
}
