//! Error taxonomy for the gate pipeline.
//!
//! Every variant is fatal to the run; the CLI layer guarantees the
//! `RESULT:fail` protocol line is still printed before the process exits.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Local configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The version-control invocation could not run or produced
    /// an undecodable result. Distinct from an empty diff, which is
    /// a valid terminal state.
    #[error("Source control error: {0}")]
    SourceControl(String),

    /// The scoring engine executable could not be resolved at startup.
    #[error("Scoring engine not found at '{0}': set DIFFGATE_ENGINE_HOME or install the engine")]
    EngineNotFound(PathBuf),

    /// The scoring engine invocation itself failed.
    #[error("Scoring engine error: {0}")]
    Scoring(String),

    /// The engine responded, but the response is missing required fields
    /// or is not valid JSON.
    #[error("Malformed score report: {0}")]
    MalformedReport(String),
}
