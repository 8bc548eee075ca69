//! Configuration loading
//!
//! Handles loading configuration from the root config file and applying
//! environment overrides on top of it.

use super::{paths, schema::Config};
use crate::store::LabelSelector;
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        Self::load_from(&paths::root_config_path())
    }

    /// Same as [`ConfigLoader::load`] with an explicit config file
    pub fn load_from(path: &Path) -> Result<Config> {
        let config = if path.exists() {
            Self::load_file(path)?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the config file at `path`
    ///
    /// Fails on invalid YAML, invalid value types, a malformed label selector,
    /// an empty API group/version and zero refresh intervals or widths.
    pub fn validate(path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        let config = Self::load_file(path)?;
        Self::check(&config)
    }

    /// Semantic checks on an already parsed configuration
    pub fn check(config: &Config) -> Result<()> {
        if let Some(selector) = &config.label_selector {
            LabelSelector::parse(selector)
                .map_err(|e| anyhow::anyhow!("labelSelector is invalid: {}", e))?;
        }
        if config.api.group.trim().is_empty() {
            anyhow::bail!("api.group must not be empty");
        }
        if config.api.version.trim().is_empty() {
            anyhow::bail!("api.version must not be empty");
        }
        if config.ui.refresh_seconds == 0 {
            anyhow::bail!("ui.refreshSeconds must be greater than 0");
        }
        if config.ui.manifest_refresh_seconds == 0 {
            anyhow::bail!("ui.manifestRefreshSeconds must be greater than 0");
        }
        if config.ui.clusters_column_width == 0 {
            anyhow::bail!("ui.clustersColumnWidth must be greater than 0");
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(namespace) = std::env::var("FLEET9S_NAMESPACE") {
            config.default_namespace = namespace;
        }

        if let Ok(group) = std::env::var("FLEET9S_API_GROUP") {
            config.api.group = group;
        }

        if let Ok(version) = std::env::var("FLEET9S_API_VERSION") {
            config.api.version = version;
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
