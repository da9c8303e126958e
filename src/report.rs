//! Report rendering.
//!
//! Everything here is advisory text for a human reader except the final
//! protocol line, which a wrapping process scans for from the end of
//! stdout. Each renderer returns the full ordered line sequence with
//! that protocol line last.

use crate::error::GateError;
use crate::models::{RunOutcome, ScoreReport, Verdict};

/// Metrics listed in the report, at most.
const TOP_METRICS: usize = 5;

/// Metrics scoring at or below this are omitted from the listing.
const SCORE_FLOOR: f64 = 0.05;

/// Render the full report for a scored run.
pub fn render(report: &ScoreReport, verdict: &Verdict) -> Vec<String> {
    let mut lines = Vec::new();

    let (score, threshold) = match *verdict {
        Verdict::Pass { score, threshold } | Verdict::Fail { score, threshold } => {
            (score, threshold)
        }
    };

    lines.push(format!("Composite risk score: {:.3}", score));
    lines.push(format!("Metrics evaluated: {}", report.metrics_run));
    lines.push(String::new());

    for (name, result) in report.ranked_metrics().into_iter().take(TOP_METRICS) {
        if result.score > SCORE_FLOOR {
            lines.push(format!(
                "  {}: score={:.2} confidence={:.2}",
                name, result.score, result.confidence
            ));
        }
    }

    lines.push(String::new());

    if verdict.passed() {
        lines.push(format!(
            "PASS: composite score {:.3} within threshold {}",
            score, threshold
        ));
    } else {
        lines.push(format!(
            "FAIL: composite score {:.3} exceeds threshold {}",
            score, threshold
        ));
    }

    lines.push(verdict.outcome().protocol_line().to_string());
    lines
}

/// No changes in the working tree.
pub fn render_no_changes() -> Vec<String> {
    vec![
        "No changes to score.".to_string(),
        RunOutcome::Success.protocol_line().to_string(),
    ]
}

/// Non-empty diff, but every file block was excluded.
pub fn render_all_filtered() -> Vec<String> {
    vec![
        "All changed files filtered out (generated/vendored). Skipping.".to_string(),
        RunOutcome::Success.protocol_line().to_string(),
    ]
}

/// Fatal error anywhere in the pipeline. The wrapping process must
/// still find a protocol line, so this always ends with `RESULT:fail`.
pub fn render_failure(err: &GateError) -> Vec<String> {
    vec![
        format!("Gate aborted: {}", err),
        RunOutcome::Fail.protocol_line().to_string(),
    ]
}
