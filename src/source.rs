//! Diff acquisition - working tree against the reference commit.

use std::path::PathBuf;
use std::process::Command;

use crate::error::GateError;
use crate::models::RawDiff;

/// Source of the raw unified diff. The pipeline calls this exactly once
/// per run.
pub trait DiffSource {
    fn fetch_raw_diff(&self) -> Result<RawDiff, GateError>;
}

/// Fetches `git diff HEAD` from a working directory.
pub struct GitDiffSource {
    dir: PathBuf,
}

impl GitDiffSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DiffSource for GitDiffSource {
    /// Read-only inspection of the working tree. An empty diff is a
    /// valid result, not an error; only invocation or decoding failures
    /// are surfaced.
    fn fetch_raw_diff(&self) -> Result<RawDiff, GateError> {
        let output = Command::new("git")
            .args(["diff", "HEAD"])
            .current_dir(&self.dir)
            .output()
            .map_err(|e| GateError::SourceControl(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GateError::SourceControl(format!(
                "git diff failed with exit code {:?}: {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| GateError::SourceControl(format!("git diff output not UTF-8: {}", e)))?;

        Ok(RawDiff::new(text))
    }
}
