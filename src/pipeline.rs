//! The decision pipeline: diff acquisition → filtering → metadata →
//! scoring → gate → report.
//!
//! Strictly sequential; each stage hands an immutable value to the
//! next. The two short-circuit paths (no changes, everything filtered)
//! resolve to success without touching the scoring engine.

use crate::engine::ScoringEngine;
use crate::error::GateError;
use crate::filter::DiffFilter;
use crate::gate;
use crate::models::{ChangeMetadata, GateConfig, RunOutcome};
use crate::report;
use crate::source::DiffSource;

/// Structured result of one run: the outcome the process exits with,
/// plus the ordered output lines (protocol line last).
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub lines: Vec<String>,
}

pub struct GatePipeline<S, F, E> {
    source: S,
    filter: F,
    engine: E,
    config: GateConfig,
}

impl<S, F, E> GatePipeline<S, F, E>
where
    S: DiffSource,
    F: DiffFilter,
    E: ScoringEngine,
{
    pub fn new(source: S, filter: F, engine: E, config: GateConfig) -> Self {
        Self {
            source,
            filter,
            engine,
            config,
        }
    }

    /// Run the gate once. Fatal errors propagate; the CLI layer turns
    /// them into the failure rendering so the protocol line still lands
    /// on stdout.
    pub async fn run(&self) -> Result<RunReport, GateError> {
        let raw = self.source.fetch_raw_diff()?;
        if raw.is_empty() {
            return Ok(RunReport {
                outcome: RunOutcome::Success,
                lines: report::render_no_changes(),
            });
        }

        let filtered = self.filter.filter(&raw);
        if filtered.is_empty() {
            return Ok(RunReport {
                outcome: RunOutcome::Success,
                lines: report::render_all_filtered(),
            });
        }

        // Metadata comes from the raw diff so filtering never skews the
        // reported change size.
        let meta = ChangeMetadata::extract(&raw);

        let score_report = self
            .engine
            .score(&filtered, &meta, &self.config.engine_config_path())
            .await?;

        let verdict = gate::decide(score_report.composite_score, self.config.threshold);

        Ok(RunReport {
            outcome: verdict.outcome(),
            lines: report::render(&score_report, &verdict),
        })
    }
}
