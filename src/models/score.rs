use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// One metric's evaluation, as returned by the scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricResult {
    /// Metric score in [0,1].
    pub score: f64,
    /// How reliable the engine judges this score to be, in [0,1].
    pub confidence: f64,
}

/// The scoring engine's full response for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub composite_score: f64,
    pub metrics_run: u64,
    pub metric_results: HashMap<String, MetricResult>,
}

impl ScoreReport {
    /// Parse the engine's JSON response, failing fast if required
    /// fields are absent. The metric algorithms themselves are opaque;
    /// scores are trusted to be in range.
    pub fn from_json(payload: &str) -> Result<Self, GateError> {
        serde_json::from_str(payload)
            .map_err(|e| GateError::MalformedReport(format!("invalid engine response: {}", e)))
    }

    /// Metrics ranked descending by influence (`score * confidence`),
    /// ties broken by name so report output is deterministic.
    pub fn ranked_metrics(&self) -> Vec<(&str, &MetricResult)> {
        let mut ranked: Vec<(&str, &MetricResult)> = self
            .metric_results
            .iter()
            .map(|(name, result)| (name.as_str(), result))
            .collect();
        ranked.sort_by(|a, b| {
            let wa = a.1.score * a.1.confidence;
            let wb = b.1.score * b.1.confidence;
            wb.partial_cmp(&wa)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        ranked
    }
}
