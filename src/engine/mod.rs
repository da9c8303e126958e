//! Scoring engine boundary.
//!
//! The engine is a capability resolved at startup from a configurable
//! install location; its metric algorithms are opaque to this crate.

mod process;

use std::path::Path;

use async_trait::async_trait;

use crate::error::GateError;
use crate::models::{ChangeMetadata, FilteredDiff, ScoreReport};

pub use process::ProcessEngine;

#[async_trait]
pub trait ScoringEngine {
    /// Score one filtered diff. `config_path` is passed through to the
    /// engine opaquely; this crate never reads it.
    async fn score(
        &self,
        diff: &FilteredDiff,
        meta: &ChangeMetadata,
        config_path: &Path,
    ) -> Result<ScoreReport, GateError>;
}
