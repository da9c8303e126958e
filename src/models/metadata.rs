use serde::{Deserialize, Serialize};

use super::diff::RawDiff;

/// Fixed title sent with every scoring request. The engine's consumption
/// of this field is opaque to us, so it stays a constant rather than
/// being derived from the diff.
pub const CHANGE_TITLE: &str = "workflow changes";

/// Coarse summary of the change, sent to the scoring engine alongside
/// the filtered diff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeMetadata {
    pub title: String,
    pub additions: u64,
    pub deletions: u64,
}

impl ChangeMetadata {
    /// Derive metadata from the raw (unfiltered) diff.
    ///
    /// Addition/deletion counts skip the diff's own file-header lines
    /// (`+++`/`---`), which also begin with the change markers.
    pub fn extract(raw: &RawDiff) -> Self {
        let mut additions = 0u64;
        let mut deletions = 0u64;

        for line in raw.as_str().lines() {
            if line.starts_with('+') && !line.starts_with("+++") {
                additions += 1;
            } else if line.starts_with('-') && !line.starts_with("---") {
                deletions += 1;
            }
        }

        Self {
            title: CHANGE_TITLE.to_string(),
            additions,
            deletions,
        }
    }
}
