//! Result and parameter types for the pre-commit tool.

use rmcp::schemars;
use serde::Serialize;

/// Parameters for running pre-commit hooks.
///
/// Used by [`pre_commit_run`](crate::common::precommit_server::PreCommitServer::pre_commit_run).
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct PreCommitRunArgs {
    /// Run hooks even when the current directory is not a git repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_non_git: Option<bool>,
}

/// Per-hook counts derived from pre-commit's per-line status markers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub hooks_passed: u32,
    pub hooks_failed: u32,
    pub hooks_skipped: u32,
}

/// One failed hook, with the file paths and error lines reported under it.
///
/// `files` preserves first-occurrence order with duplicates removed;
/// `errors` keeps every matching line verbatim (trimmed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HookFailure {
    pub hook: String,
    pub files: Vec<String>,
    pub errors: Vec<String>,
}

/// Structured result of a pre-commit run.
///
/// Serializes with a `status` discriminator so callers can branch without
/// probing which payload fields are present. Exactly one status is set and
/// `execution_time` (seconds) is carried by every variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunResult {
    /// Exit code 0: every hook passed.
    Success {
        summary: Summary,
        execution_time: f64,
        modified_files: Vec<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        warnings: Vec<String>,
    },
    /// Exit code 1: at least one hook failed (possibly after auto-fixes).
    HooksFailed {
        summary: Summary,
        failures: Vec<HookFailure>,
        execution_time: f64,
        modified_files: Vec<String>,
        /// First 2000 characters of sanitized stdout.
        context_output: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        warnings: Vec<String>,
    },
    /// The run exceeded the wall-clock deadline and was killed.
    Timeout {
        error: String,
        execution_time: f64,
        /// First 1000 characters of the stdout captured before termination.
        #[serde(skip_serializing_if = "Option::is_none")]
        partial_output: Option<String>,
    },
    /// Precondition failure, abnormal exit, or contained internal failure.
    SystemError {
        error: String,
        execution_time: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_output: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stderr: Option<String>,
    },
}

impl RunResult {
    /// Wire name of the status tag.
    pub fn status(&self) -> &'static str {
        match self {
            RunResult::Success { .. } => "success",
            RunResult::HooksFailed { .. } => "hooks_failed",
            RunResult::Timeout { .. } => "timeout",
            RunResult::SystemError { .. } => "system_error",
        }
    }

    /// Elapsed wall-clock seconds; present on every status.
    pub fn execution_time(&self) -> f64 {
        match self {
            RunResult::Success { execution_time, .. }
            | RunResult::HooksFailed { execution_time, .. }
            | RunResult::Timeout { execution_time, .. }
            | RunResult::SystemError { execution_time, .. } => *execution_time,
        }
    }
}
