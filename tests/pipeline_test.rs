//! End-to-end pipeline behavior with mock collaborators.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use diffgate::engine::ScoringEngine;
use diffgate::error::GateError;
use diffgate::filter::DiffFilter;
use diffgate::models::{
    ChangeMetadata, FilteredDiff, GateConfig, RawDiff, RunOutcome, ScoreReport, DEFAULT_THRESHOLD,
};
use diffgate::pipeline::GatePipeline;
use diffgate::source::DiffSource;

struct FixedSource(String);

impl DiffSource for FixedSource {
    fn fetch_raw_diff(&self) -> Result<RawDiff, GateError> {
        Ok(RawDiff::new(self.0.clone()))
    }
}

struct FailingSource;

impl DiffSource for FailingSource {
    fn fetch_raw_diff(&self) -> Result<RawDiff, GateError> {
        Err(GateError::SourceControl("git unavailable".to_string()))
    }
}

/// Passes the diff through untouched, or swallows it entirely.
struct FixedFilter {
    drop_everything: bool,
}

impl DiffFilter for FixedFilter {
    fn filter(&self, raw: &RawDiff) -> FilteredDiff {
        if self.drop_everything {
            FilteredDiff::new("")
        } else {
            FilteredDiff::new(raw.as_str())
        }
    }
}

/// Records whether the engine was invoked, and returns a canned result.
struct RecordingEngine {
    called: Arc<AtomicBool>,
    response: Result<ScoreReport, String>,
}

impl RecordingEngine {
    fn scoring(composite: f64) -> (Self, Arc<AtomicBool>) {
        let called = Arc::new(AtomicBool::new(false));
        let json = format!(
            r#"{{"composite_score": {}, "metrics_run": 2, "metric_results": {{
                "churn": {{"score": 0.6, "confidence": 0.9}},
                "volume": {{"score": 0.4, "confidence": 0.7}}
            }}}}"#,
            composite
        );
        let engine = Self {
            called: called.clone(),
            response: Ok(ScoreReport::from_json(&json).unwrap()),
        };
        (engine, called)
    }

    fn failing() -> (Self, Arc<AtomicBool>) {
        let called = Arc::new(AtomicBool::new(false));
        let engine = Self {
            called: called.clone(),
            response: Err("engine unavailable".to_string()),
        };
        (engine, called)
    }
}

#[async_trait]
impl ScoringEngine for RecordingEngine {
    async fn score(
        &self,
        _diff: &FilteredDiff,
        _meta: &ChangeMetadata,
        _config_path: &Path,
    ) -> Result<ScoreReport, GateError> {
        self.called.store(true, Ordering::SeqCst);
        match &self.response {
            Ok(report) => Ok(report.clone()),
            Err(msg) => Err(GateError::Scoring(msg.clone())),
        }
    }
}

fn test_config() -> GateConfig {
    GateConfig {
        engine_home: PathBuf::from("/opt/score-engine"),
        threshold: DEFAULT_THRESHOLD,
        exclude_patterns: vec![],
    }
}

const DIFF: &str = "\
diff --git a/src/lib.rs b/src/lib.rs
--- a/src/lib.rs
+++ b/src/lib.rs
+fn added() {}
";

#[tokio::test]
async fn empty_diff_succeeds_without_scoring() {
    let (engine, called) = RecordingEngine::scoring(0.9);
    let pipeline = GatePipeline::new(
        FixedSource("   \n".to_string()),
        FixedFilter { drop_everything: false },
        engine,
        test_config(),
    );

    let report = pipeline.run().await.unwrap();
    assert_eq!(report.outcome, RunOutcome::Success);
    assert_eq!(report.lines.last().unwrap(), "RESULT:success");
    assert_eq!(report.lines[0], "No changes to score.");
    assert!(!report.lines.iter().any(|l| l.contains("Composite")));
    assert!(!called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn fully_filtered_diff_succeeds_without_scoring() {
    let (engine, called) = RecordingEngine::scoring(0.9);
    let pipeline = GatePipeline::new(
        FixedSource(DIFF.to_string()),
        FixedFilter { drop_everything: true },
        engine,
        test_config(),
    );

    let report = pipeline.run().await.unwrap();
    assert_eq!(report.outcome, RunOutcome::Success);
    assert_eq!(report.lines.last().unwrap(), "RESULT:success");
    assert!(report.lines[0].contains("filtered out"));
    assert!(!called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn score_below_threshold_passes() {
    let (engine, called) = RecordingEngine::scoring(0.42);
    let pipeline = GatePipeline::new(
        FixedSource(DIFF.to_string()),
        FixedFilter { drop_everything: false },
        engine,
        test_config(),
    );

    let report = pipeline.run().await.unwrap();
    assert_eq!(report.outcome, RunOutcome::Success);
    assert_eq!(report.lines.last().unwrap(), "RESULT:success");
    assert!(report.lines.iter().any(|l| l.starts_with("PASS:")));
    assert!(called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn score_at_or_above_threshold_fails() {
    let (engine, _) = RecordingEngine::scoring(0.75);
    let pipeline = GatePipeline::new(
        FixedSource(DIFF.to_string()),
        FixedFilter { drop_everything: false },
        engine,
        test_config(),
    );

    let report = pipeline.run().await.unwrap();
    assert_eq!(report.outcome, RunOutcome::Fail);
    assert_eq!(report.lines.last().unwrap(), "RESULT:fail");
    assert!(report.lines.iter().any(|l| l.starts_with("FAIL:")));

    // Boundary-inclusive on the fail side.
    let (engine, _) = RecordingEngine::scoring(DEFAULT_THRESHOLD);
    let pipeline = GatePipeline::new(
        FixedSource(DIFF.to_string()),
        FixedFilter { drop_everything: false },
        engine,
        test_config(),
    );
    assert_eq!(pipeline.run().await.unwrap().outcome, RunOutcome::Fail);
}

#[tokio::test]
async fn engine_failure_renders_fail_protocol_line() {
    let (engine, called) = RecordingEngine::failing();
    let pipeline = GatePipeline::new(
        FixedSource(DIFF.to_string()),
        FixedFilter { drop_everything: false },
        engine,
        test_config(),
    );

    let err = pipeline.run().await.unwrap_err();
    assert!(called.load(Ordering::SeqCst));
    assert!(matches!(err, GateError::Scoring(_)));

    let lines = diffgate::report::render_failure(&err);
    assert_eq!(lines.last().unwrap(), "RESULT:fail");
}

#[tokio::test]
async fn source_failure_renders_fail_protocol_line() {
    let (engine, called) = RecordingEngine::scoring(0.1);
    let pipeline = GatePipeline::new(
        FailingSource,
        FixedFilter { drop_everything: false },
        engine,
        test_config(),
    );

    let err = pipeline.run().await.unwrap_err();
    assert!(matches!(err, GateError::SourceControl(_)));
    assert!(!called.load(Ordering::SeqCst));

    let lines = diffgate::report::render_failure(&err);
    assert_eq!(lines.last().unwrap(), "RESULT:fail");
}

#[tokio::test]
async fn engine_home_env_var_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(diffgate::models::ENGINE_HOME_ENV, "/custom/engine");
    let config = GateConfig::load(dir.path()).unwrap();
    std::env::remove_var(diffgate::models::ENGINE_HOME_ENV);

    assert_eq!(config.engine_home, PathBuf::from("/custom/engine"));
    assert_eq!(
        config.engine_config_path(),
        PathBuf::from("/custom/engine/config/metrics.yaml")
    );
}
