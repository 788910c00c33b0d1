//! Checker Configuration Module
//!
//! Loads [`CheckerConfig`] from TOML files with environment-specific
//! overrides and `CHECKER_` environment variables.

use anyhow::{Context, Result};
use commands::ValidationConfig;
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const DEFAULT_CONFIG_PATH: &str = "config/checker.toml";
const ENV_PREFIX: &str = "CHECKER";

/// Main checker configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Log output settings
    pub logging: LoggingConfig,

    /// Limits handed to the proposal validator
    pub validation: ValidationConfig,

    /// Where proposals are read from
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive, e.g. `info` or `commands=debug`
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Directory scanned when no files are given on the command line
    pub proposal_dir: Option<PathBuf>,
    /// File extension of proposal documents in `proposal_dir`
    pub extension: String,
    /// Stop after the first document with a rejected proposal
    pub fail_fast: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            proposal_dir: None,
            extension: "json".to_string(),
            fail_fast: false,
        }
    }
}

impl CheckerConfig {
    /// Load configuration from files with environment overrides.
    ///
    /// An explicit `base_path` must exist; the default path is optional.
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        let (base, required) = match base_path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };
        debug!("Loading checker config from {:?} (required: {})", base, required);

        let mut builder = Config::builder().add_source(File::from(base.as_path()).required(required));

        if let Some(env) = environment {
            let env_file = base
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("environments")
                .join(format!("{env}.toml"));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Expand `~` and environment variables in path settings
    pub fn expand_paths(&mut self) -> Result<()> {
        if let Some(dir) = &self.input.proposal_dir {
            let raw = dir.to_string_lossy();
            let expanded = shellexpand::full(&raw).context("Failed to expand proposal_dir")?;
            self.input.proposal_dir = Some(PathBuf::from(expanded.as_ref()));
        }
        Ok(())
    }

    /// Effective configuration as TOML, for `--print-config`
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Load configuration and expand paths
pub fn load_config(base_path: Option<&Path>, environment: Option<&str>) -> Result<CheckerConfig> {
    let mut config = CheckerConfig::load(base_path, environment)?;
    config.expand_paths()?;
    Ok(config)
}
