/// Unified diff of the working tree against the reference commit.
///
/// Fetched exactly once per run and never mutated; metadata is always
/// derived from this, not from the filtered form, so that exclusion
/// rules cannot skew the reported change size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDiff(String);

impl RawDiff {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there are no changes to score. Whitespace-only output
    /// counts as empty.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Diff remaining after excluded file blocks are removed.
///
/// May be empty even when the raw diff is not (everything excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredDiff(String);

impl FilteredDiff {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}
