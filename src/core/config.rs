//! Configuration for the camelize tool.
//!
//! Settings come from an optional `camelize.toml` file; command-line flags
//! override whatever the file says.
//!
//! ```toml
//! policy = "camel"
//! stats = true
//!
//! [bench]
//! output = "bench.flx"
//! count = 10000
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::conversion::CasePolicy;
use crate::core::error::{Error, Result};

/// Name of the configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "camelize.toml";

const DEFAULT_BENCH_HEADER: &str = "
//- bench.flx

pub trait Add<T> {
    type Output;
    fn add(other T) -> This::Output;
    fn add_unchecked(other T) -> This::Output;
}
";

const DEFAULT_BENCH_BLOCK: &str = "apply Add<u32> to u32 {
    type Output = u32;
    fn add(other u32) -> This::Output => this + other
    fn add_unchecked(other u32) -> This::Output => this + other
}
";

/// Top-level tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rewrite policy for `convert`
    pub policy: CasePolicy,
    /// Print a conversion summary after `convert`
    pub stats: bool,
    /// Defaults for `bench-file`
    pub bench: BenchFileConfig,
}

/// Settings for the benchmark file generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchFileConfig {
    pub output: PathBuf,
    pub count: usize,
    pub header: String,
    pub block: String,
}

impl Default for BenchFileConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("bench.flx"),
            count: 10_000,
            header: DEFAULT_BENCH_HEADER.to_string(),
            block: DEFAULT_BENCH_BLOCK.to_string(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), policy = %config.policy, "Loaded configuration");
        Ok(config)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `camelize.toml` in `dir` is
    /// used when present, otherwise the built-in defaults apply.
    pub async fn discover(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path).await;
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if tokio::fs::try_exists(&candidate).await? {
            Self::load(&candidate).await
        } else {
            debug!(dir = %dir.display(), "No configuration file found, using defaults");
            Ok(Self::default())
        }
    }
}
