//! Classification of pre-commit output into a structured result.
//!
//! pre-commit prints one line per hook, padded with dots and terminated by a
//! status word ("Passed", "Failed", "Skipped"), followed by indented detail
//! lines for failed hooks. These functions turn that display convention into
//! counts, warnings, and per-hook failure blocks. All of them are pure
//! functions over sanitized text.
//!
//! The failure extractor is a two-state automaton: a line whose trimmed form
//! ends in "FAILED" or "Failed" opens a block (flushing any block already
//! open), subsequent non-blank lines accrue to the open block as file paths
//! or error lines, and the final open block is flushed at end of input.

use crate::hooks::sanitize::strip_ansi;
use crate::hooks::types::{HookFailure, RunResult, Summary};

/// File extensions recognized as hook targets in failure blocks.
const FILE_EXTENSIONS: [&str; 5] = [".py", ".yaml", ".yml", ".toml", ".json"];

/// Classify a finished run (exit code plus captured streams) into a
/// [`RunResult`]. Only called for runs that did not time out.
pub fn classify(
    exit_code: i32,
    stdout: &str,
    stderr: &str,
    execution_time: f64,
    modified_files: Vec<String>,
) -> RunResult {
    let clean_stdout = strip_ansi(stdout);
    let clean_stderr = strip_ansi(stderr);
    let warnings = extract_warnings(&clean_stdout);

    match exit_code {
        0 => RunResult::Success {
            summary: extract_summary(&clean_stdout),
            execution_time,
            modified_files,
            warnings,
        },
        1 => RunResult::HooksFailed {
            summary: extract_summary(&clean_stdout),
            failures: extract_failures(&clean_stdout),
            execution_time,
            modified_files,
            context_output: clean_stdout.chars().take(2000).collect(),
            warnings,
        },
        _ => RunResult::SystemError {
            error: "Pre-commit execution failed".to_string(),
            execution_time,
            raw_output: Some(clean_stdout),
            stderr: Some(clean_stderr),
        },
    }
}

/// Collect `[WARNING]` and `[INFO]` advisory lines in encounter order.
pub fn extract_warnings(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let stripped = line.trim();
            (stripped.starts_with("[WARNING]") || stripped.starts_with("[INFO]"))
                .then(|| stripped.to_string())
        })
        .collect()
}

/// Count per-line status markers. Each line increments at most one counter;
/// the pass marker wins over the fail marker, which wins over the skip
/// marker.
pub fn extract_summary(output: &str) -> Summary {
    let mut summary = Summary::default();

    for line in output.lines() {
        if line.contains("Passed") || line.contains('✓') || line.contains("PASSED") {
            summary.hooks_passed += 1;
        } else if line.contains("Failed") || line.contains('✗') || line.contains("FAILED") {
            summary.hooks_failed += 1;
        } else if line.contains("Skipped")
            || line.contains("SKIPPED")
            || line.contains("(no files to check)")
        {
            summary.hooks_skipped += 1;
        }
    }

    summary
}

/// Group failure details by hook.
///
/// The hook name is the text before the first `.` on the terminator line
/// (pre-commit pads names with dots), or the whole trimmed line when there is
/// no dot. Within a block, a line carrying a recognized file extension
/// contributes file tokens and is never also treated as an error line.
pub fn extract_failures(output: &str) -> Vec<HookFailure> {
    let mut failures = Vec::new();
    let mut open: Option<HookFailure> = None;

    for line in output.lines() {
        let trimmed = line.trim();

        if trimmed.ends_with("FAILED") || trimmed.ends_with("Failed") {
            // Flush-on-transition: a terminator both closes the previous
            // block and opens the next one.
            if let Some(block) = open.take() {
                failures.push(block);
            }
            let hook = match line.find('.') {
                Some(idx) => line[..idx].trim(),
                None => trimmed,
            };
            open = Some(HookFailure {
                hook: hook.to_string(),
                files: Vec::new(),
                errors: Vec::new(),
            });
        } else if let Some(block) = open.as_mut() {
            if trimmed.is_empty() {
                continue;
            }
            if FILE_EXTENSIONS.iter().any(|ext| line.contains(ext)) {
                for token in trimmed.split_whitespace() {
                    if FILE_EXTENSIONS.iter().any(|ext| token.contains(ext))
                        && !block.files.iter().any(|f| f == token)
                    {
                        block.files.push(token.to_string());
                    }
                }
            } else if has_error_indicator(line) {
                block.errors.push(trimmed.to_string());
            }
        }
    }

    if let Some(block) = open.take() {
        failures.push(block);
    }

    failures
}

// "error", "warning", or a linter code fragment e0-e9/f0-f9 anywhere in the
// lowercased line.
fn has_error_indicator(line: &str) -> bool {
    let lowered = line.to_lowercase();
    if lowered.contains("error") || lowered.contains("warning") {
        return true;
    }
    lowered
        .as_bytes()
        .windows(2)
        .any(|pair| (pair[0] == b'e' || pair[0] == b'f') && pair[1].is_ascii_digit())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn output_text() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                "[a-z -]{0,24}".prop_map(String::from),
                "[a-z-]{1,12}\\.{3,40}Passed".prop_map(String::from),
                "[a-z-]{1,12}\\.{3,40}Failed".prop_map(String::from),
                "[a-z-]{1,12}\\.{3,40}FAILED".prop_map(String::from),
                "[a-z-]{1,12}\\.{3,40}Skipped".prop_map(String::from),
                Just("- hook id: ruff".to_string()),
                Just("- exit code: 1".to_string()),
                Just("src/app.py:1:1: E501 line too long".to_string()),
                Just("something error happened".to_string()),
            ],
            0..32,
        )
        .prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        /// Each line increments at most one counter, so the counter total is
        /// bounded by the line count.
        #[test]
        fn prop_summary_counts_at_most_one_per_line(text in output_text()) {
            let summary = extract_summary(&text);
            let total = summary.hooks_passed + summary.hooks_failed + summary.hooks_skipped;
            prop_assert!(total as usize <= text.lines().count());
        }

        /// One emitted failure block per terminator line, no matter how the
        /// blocks interleave with content lines.
        #[test]
        fn prop_one_failure_block_per_terminator(text in output_text()) {
            let terminators = text
                .lines()
                .filter(|line| {
                    let trimmed = line.trim();
                    trimmed.ends_with("FAILED") || trimmed.ends_with("Failed")
                })
                .count();
            prop_assert_eq!(extract_failures(&text).len(), terminators);
        }

        /// classify always lands on exactly one of the three non-timeout
        /// statuses and carries the elapsed time through.
        #[test]
        fn prop_classify_is_total(exit_code in -3i32..6, text in output_text()) {
            let result = classify(exit_code, &text, "", 0.25, Vec::new());
            prop_assert!(matches!(
                result.status(),
                "success" | "hooks_failed" | "system_error"
            ));
            prop_assert_eq!(result.execution_time(), 0.25);
        }
    }
}
