// Diffgate - working-tree diff quality gate
// Scores the current change with an external engine and gates on a fixed
// risk threshold, speaking a machine-parseable result protocol.

pub mod cli;
pub mod engine;
pub mod error;
pub mod filter;
pub mod gate;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod source;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use error::GateError;
pub use models::{ChangeMetadata, GateConfig, RawDiff, RunOutcome, ScoreReport, Verdict};
pub use pipeline::{GatePipeline, RunReport};
