pub mod config;
pub mod diff;
pub mod metadata;
pub mod score;
pub mod verdict;

pub use config::{GateConfig, DEFAULT_THRESHOLD, ENGINE_HOME_ENV};
pub use diff::{FilteredDiff, RawDiff};
pub use metadata::{ChangeMetadata, CHANGE_TITLE};
pub use score::{MetricResult, ScoreReport};
pub use verdict::{RunOutcome, Verdict};
