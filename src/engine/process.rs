use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;

use crate::error::GateError;
use crate::models::{ChangeMetadata, FilteredDiff, ScoreReport};

use super::ScoringEngine;

/// Executable location inside the engine's install directory.
const ENGINE_BIN: &str = "bin/score";

#[derive(Serialize)]
struct ScoreRequest<'a> {
    diff: &'a str,
    metadata: &'a ChangeMetadata,
    config_path: &'a Path,
}

/// Invokes the scoring engine as a subprocess: the request goes to its
/// stdin as JSON, the [`ScoreReport`] comes back on its stdout.
#[derive(Debug)]
pub struct ProcessEngine {
    executable: PathBuf,
    show_progress: bool,
}

impl ProcessEngine {
    /// Resolve the engine under `engine_home`, failing fast if the
    /// executable is absent rather than surfacing a spawn error later.
    pub fn resolve(engine_home: &Path, show_progress: bool) -> Result<Self, GateError> {
        let executable = engine_home.join(ENGINE_BIN);
        if !executable.is_file() {
            return Err(GateError::EngineNotFound(executable));
        }
        Ok(Self {
            executable,
            show_progress,
        })
    }

    fn spinner(&self) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
        );
        pb.set_message("Scoring changes...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    }
}

#[async_trait]
impl ScoringEngine for ProcessEngine {
    async fn score(
        &self,
        diff: &FilteredDiff,
        meta: &ChangeMetadata,
        config_path: &Path,
    ) -> Result<ScoreReport, GateError> {
        let request = ScoreRequest {
            diff: diff.as_str(),
            metadata: meta,
            config_path,
        };
        let payload = serde_json::to_vec(&request)
            .map_err(|e| GateError::Scoring(format!("failed to encode request: {}", e)))?;

        let progress = self.spinner();

        let mut child = Command::new(&self.executable)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                GateError::Scoring(format!(
                    "failed to start engine '{}': {}",
                    self.executable.display(),
                    e
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(&payload)
                .await
                .map_err(|e| GateError::Scoring(format!("failed to write request: {}", e)))?;
            stdin
                .flush()
                .await
                .map_err(|e| GateError::Scoring(format!("failed to flush request: {}", e)))?;
            drop(stdin);
        }

        let mut out = child
            .stdout
            .take()
            .ok_or_else(|| GateError::Scoring("failed to capture engine stdout".to_string()))?;
        let mut err = child
            .stderr
            .take()
            .ok_or_else(|| GateError::Scoring("failed to capture engine stderr".to_string()))?;

        // Drain both pipes concurrently; a chatty engine can fill the
        // stderr buffer long before it closes stdout, and a sequential
        // read would stall both sides.
        let mut stdout = String::new();
        let mut stderr = String::new();
        let (out_read, err_read) = tokio::join!(
            out.read_to_string(&mut stdout),
            err.read_to_string(&mut stderr),
        );
        out_read
            .map_err(|e| GateError::Scoring(format!("failed to read engine output: {}", e)))?;
        // stderr is best effort; it only feeds error messages.
        let _ = err_read;

        let status = child
            .wait()
            .await
            .map_err(|e| GateError::Scoring(format!("failed to wait for engine: {}", e)))?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        if !status.success() {
            return Err(GateError::Scoring(format!(
                "engine exited with code {:?}: {}",
                status.code(),
                stderr.trim()
            )));
        }

        ScoreReport::from_json(&stdout)
    }
}
