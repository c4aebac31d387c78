use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{DEFAULT_BUCKET_URL, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECONDS};
use crate::error::{Result, ViewerError};

pub const CONFIG_PATH: &str = "viewer.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub bucket_url: String,
    pub timeout_seconds: u64,
    /// When set, reports are read from this directory instead of the bucket.
    pub local_dir: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            bucket_url: DEFAULT_BUCKET_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            local_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Load `viewer.toml` from the working directory (defaults when absent),
    /// then apply `REPORT_*` environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(Path::new(CONFIG_PATH))?;
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            ViewerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.source.bucket_url.trim().is_empty() {
            return Err(ViewerError::Config("source.bucket_url must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Apply overrides from `lookup` (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("REPORT_BUCKET_URL").filter(|v| !v.trim().is_empty()) {
            self.source.bucket_url = url;
        }
        if let Some(dir) = lookup("REPORT_LOCAL_DIR").filter(|v| !v.trim().is_empty()) {
            self.source.local_dir = Some(PathBuf::from(dir));
        }
        if let Some(secs) = lookup("REPORT_TIMEOUT_SECONDS") {
            self.source.timeout_seconds = secs.trim().parse().map_err(|_| {
                ViewerError::Config(format!("REPORT_TIMEOUT_SECONDS is not a number: '{}'", secs))
            })?;
        }
        if let Some(dir) = lookup("REPORT_OUTPUT_DIR").filter(|v| !v.trim().is_empty()) {
            self.output.dir = PathBuf::from(dir);
        }
        Ok(())
    }
}
