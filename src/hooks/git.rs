//! Repository prechecks and modified-file reporting.
//!
//! Both prechecks are plain filesystem existence probes against the current
//! working directory. The modified-file query shells out to
//! `git status --porcelain` and degrades to an empty list on any failure; it
//! never fails the overall run.

use tokio::process::Command;

/// True when the current directory is a git repository (a `.git` entry
/// exists).
pub async fn is_git_repository() -> bool {
    tokio::fs::metadata(".git").await.is_ok()
}

/// True when `.pre-commit-config.yaml` exists in the current directory.
pub async fn has_precommit_config() -> bool {
    tokio::fs::metadata(".pre-commit-config.yaml").await.is_ok()
}

/// List files changed since the last commit, untracked files excluded.
///
/// Outside a repository, or on any git failure, this returns an empty list.
pub async fn modified_files() -> Vec<String> {
    if !is_git_repository().await {
        return Vec::new();
    }

    let output = match Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .await
    {
        Ok(output) => output,
        Err(_) => return Vec::new(),
    };

    if !output.status.success() {
        return Vec::new();
    }

    parse_porcelain(&String::from_utf8_lossy(&output.stdout))
}

// Porcelain lines carry two status columns and a separator before the path.
// Untracked entries ("??") are not "modified since last commit".
fn parse_porcelain(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| {
            if line.trim().is_empty() || line.starts_with("??") {
                return None;
            }
            let path = line.get(3..).unwrap_or("").trim();
            (!path.is_empty()).then(|| path.to_string())
        })
        .collect()
}
