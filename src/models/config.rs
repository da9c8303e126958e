use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Composite risk score at or above this value fails the gate.
/// Fixed for all runs; there is no per-run override.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Environment variable overriding the scoring engine's install directory.
pub const ENGINE_HOME_ENV: &str = "DIFFGATE_ENGINE_HOME";

/// Default file-path globs treated as generated/vendored content.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "vendor/**",
    "node_modules/**",
    "target/**",
    "dist/**",
    "build/**",
    "*.lock",
    "*.min.js",
    "*.min.css",
    "**/generated/**",
    "*.pb.go",
    "*_pb2.py",
];

/// Optional `diffgate.toml` in the checked directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GateConfigFile {
    /// Scoring engine install directory.
    engine_home: Option<PathBuf>,

    /// Extra exclusion globs, added to the built-in defaults.
    #[serde(default)]
    exclude_patterns: Vec<String>,
}

/// Resolved configuration for one gate run.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Scoring engine install directory. Resolution order:
    /// `DIFFGATE_ENGINE_HOME` env var, then `diffgate.toml`, then
    /// `~/score-engine`.
    pub engine_home: PathBuf,

    /// Gate threshold. Carried here so tests can vary it; production
    /// runs always use [`DEFAULT_THRESHOLD`].
    pub threshold: f64,

    /// File-path globs excluded from scoring.
    pub exclude_patterns: Vec<String>,
}

impl GateConfig {
    /// Load configuration for a run rooted at `dir`.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let file = Self::load_file(dir)?;

        let engine_home = match std::env::var_os(ENGINE_HOME_ENV) {
            Some(home) => PathBuf::from(home),
            None => match file.engine_home.clone() {
                Some(home) => home,
                None => Self::default_engine_home(),
            },
        };

        let mut exclude_patterns: Vec<String> =
            DEFAULT_EXCLUDES.iter().map(|p| p.to_string()).collect();
        exclude_patterns.extend(file.exclude_patterns);

        Ok(Self {
            engine_home,
            threshold: DEFAULT_THRESHOLD,
            exclude_patterns,
        })
    }

    fn load_file(dir: &Path) -> anyhow::Result<GateConfigFile> {
        let config_path = dir.join("diffgate.toml");
        if !config_path.exists() {
            return Ok(GateConfigFile::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let file: GateConfigFile = toml::from_str(&content)?;
        Ok(file)
    }

    fn default_engine_home() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("score-engine")
    }

    /// Path of the engine's metric configuration file, passed opaquely
    /// to the engine and never parsed here.
    pub fn engine_config_path(&self) -> PathBuf {
        self.engine_home.join("config").join("metrics.yaml")
    }
}
