//! Pre-commit execution and output classification.
//!
//! This module turns a `pre-commit run` invocation into a structured,
//! machine-consumable [`RunResult`]: it checks the environment, spawns the
//! hook runner with a hard timeout, strips terminal escape sequences from the
//! captured output, and classifies it into a status with per-hook failure
//! details.
//!
//! # Modules
//!
//! - [`types`] - Result and argument types ([`RunResult`], [`Summary`], [`HookFailure`])
//! - [`sanitize`] - ANSI escape sequence stripping
//! - [`parse`] - Output classification: summary counts, warnings, failure blocks
//! - [`git`] - Repository prechecks and modified-file reporting
//! - [`runner`] - Orchestration of a single run
//!
//! # Pipeline
//!
//! ```text
//! prechecks ─► spawn pre-commit ─► sanitize ─► classify ─► modified files
//! ```
//!
//! The parsing layer is stateless: every function in [`sanitize`] and
//! [`parse`] is a pure function over the captured text, so the whole
//! classification path can be tested without spawning anything.

pub mod git;
pub mod parse;
pub mod runner;
pub mod sanitize;
pub mod types;

pub use runner::{PreCommitRunner, TIMEOUT_SECONDS};
pub use types::{HookFailure, PreCommitRunArgs, RunResult, Summary};
