//! Diff filtering - drops generated/vendored file blocks before scoring.
//!
//! The exclusion policy itself is a collaborator concern; the pipeline
//! only depends on the [`DiffFilter`] trait. [`PathExcludeFilter`] is
//! the shipped policy, driven by glob patterns from [`GateConfig`].

use glob::Pattern;
use regex::Regex;

use crate::models::{FilteredDiff, GateConfig, RawDiff};

pub trait DiffFilter {
    fn filter(&self, raw: &RawDiff) -> FilteredDiff;
}

/// Removes per-file diff blocks whose path matches an exclusion glob.
pub struct PathExcludeFilter {
    patterns: Vec<Pattern>,
    header: Regex,
}

impl PathExcludeFilter {
    pub fn new(patterns: &[String]) -> anyhow::Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p).map_err(|e| anyhow::anyhow!("bad exclude glob '{}': {}", p, e)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        // The b/ side names the post-change path, which is the one the
        // exclusion policy cares about.
        let header = Regex::new(r#"^diff --git a/.* b/(.*)$"#).expect("static regex");

        Ok(Self { patterns, header })
    }

    pub fn from_config(config: &GateConfig) -> anyhow::Result<Self> {
        Self::new(&config.exclude_patterns)
    }

    fn excluded(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }
}

impl DiffFilter for PathExcludeFilter {
    fn filter(&self, raw: &RawDiff) -> FilteredDiff {
        let mut kept = String::new();
        let mut skipping = false;

        for line in raw.as_str().lines() {
            if let Some(caps) = self.header.captures(line) {
                let path = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                skipping = self.excluded(path);
            }
            if !skipping {
                kept.push_str(line);
                kept.push('\n');
            }
        }

        FilteredDiff::new(kept)
    }
}
