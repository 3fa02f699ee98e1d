//! TOML configuration file

use crate::{error::CliError, output::OutputFormat};
use anyhow::{Context, Result};
use hanseg_engine::{
    config::DEFAULT_CACHE_CAPACITY, Backend, SplitterConfig,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Splitting behaviour
    #[serde(default)]
    pub splitting: SplittingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Splitting-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplittingConfig {
    /// Analyzer backend: auto, mecab, pecab, punct or fast
    pub backend: String,
    /// Trim whitespace around sentences
    pub strip: bool,
    /// NFC-normalize input
    pub normalize: bool,
    /// Strings never split inside
    pub ignores: Vec<String>,
    /// Realignment recursion cap
    pub max_realign_depth: usize,
    /// Longest syllable sequence still realigned
    pub realign_length_limit: usize,
}

impl Default for SplittingConfig {
    fn default() -> Self {
        let defaults = SplitterConfig::default();
        Self {
            backend: defaults.backend.to_string(),
            strip: defaults.strip,
            normalize: defaults.normalize,
            ignores: defaults.ignores,
            max_realign_depth: defaults.max_realign_depth,
            realign_length_limit: defaults.realign_length_limit,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format: text, json or markdown
    pub default_format: String,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = one per CPU)
    pub worker_threads: usize,
    /// Memoized texts per run (0 = no cache)
    pub cache_capacity: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message()))
        })?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Parsed backend
    pub fn backend(&self) -> Result<Backend> {
        self.splitting
            .backend
            .parse::<Backend>()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Parsed default output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.default_format.parse::<OutputFormat>().map_err(|_| {
            CliError::ConfigError(format!(
                "'{}' is not a supported output format; expected text, json or markdown",
                self.output.default_format
            ))
            .into()
        })
    }

    /// Splitter configuration described by this file
    pub fn splitter_config(&self) -> Result<SplitterConfig> {
        Ok(SplitterConfig {
            backend: self.backend()?,
            strip: self.splitting.strip,
            normalize: self.splitting.normalize,
            ignores: self.splitting.ignores.clone(),
            max_realign_depth: self.splitting.max_realign_depth,
            realign_length_limit: self.splitting.realign_length_limit,
            num_workers: match self.performance.worker_threads {
                0 => None,
                n => Some(n),
            },
            cache_capacity: self.performance.cache_capacity,
            ..SplitterConfig::default()
        })
    }

    /// Check every value without building a splitter
    pub fn validate(&self) -> Result<()> {
        self.output_format()?;
        self.splitter_config()?
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(())
    }
}
