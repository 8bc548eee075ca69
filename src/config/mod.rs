//! Configuration system for fleet9s
//!
//! A single YAML file with built-in defaults and environment overrides,
//! readable and writable key by key from the command line.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{ApiConfig, Config, UiConfig};

/// Keys accepted by [`get_config_value`] and [`set_config_value`]
pub const CONFIG_KEYS: &[&str] = &[
    "defaultNamespace",
    "labelSelector",
    "api.group",
    "api.version",
    "ui.refreshSeconds",
    "ui.manifestRefreshSeconds",
    "ui.clustersColumnWidth",
    "ui.noColor",
];

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "defaultNamespace" => Ok(config.default_namespace.clone()),
        "labelSelector" => Ok(config.label_selector.clone().unwrap_or_default()),
        "api.group" => Ok(config.api.group.clone()),
        "api.version" => Ok(config.api.version.clone()),
        "ui.refreshSeconds" => Ok(config.ui.refresh_seconds.to_string()),
        "ui.manifestRefreshSeconds" => Ok(config.ui.manifest_refresh_seconds.to_string()),
        "ui.clustersColumnWidth" => Ok(config.ui.clusters_column_width.to_string()),
        "ui.noColor" => Ok(config.ui.no_color.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "defaultNamespace" => {
            config.default_namespace = value.to_string();
        }
        "labelSelector" => {
            if value.is_empty() {
                config.label_selector = None;
            } else {
                crate::store::LabelSelector::parse(value)
                    .map_err(|e| anyhow::anyhow!("labelSelector is invalid: {}", e))?;
                config.label_selector = Some(value.to_string());
            }
        }
        "api.group" => {
            config.api.group = value.to_string();
        }
        "api.version" => {
            config.api.version = value.to_string();
        }
        "ui.refreshSeconds" => {
            config.ui.refresh_seconds = value
                .parse()
                .context("ui.refreshSeconds must be a number")?;
        }
        "ui.manifestRefreshSeconds" => {
            config.ui.manifest_refresh_seconds = value
                .parse()
                .context("ui.manifestRefreshSeconds must be a number")?;
        }
        "ui.clustersColumnWidth" => {
            config.ui.clusters_column_width = value
                .parse()
                .context("ui.clustersColumnWidth must be a number")?;
        }
        "ui.noColor" => {
            config.ui.no_color = value
                .parse()
                .context("ui.noColor must be 'true' or 'false'")?;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    ConfigLoader::check(config)
}
