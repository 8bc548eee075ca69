//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use crate::store::ApiGroupVersion;
use crate::store::coordinate::{DEFAULT_API_GROUP, DEFAULT_API_VERSION};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Starting namespace; `all` lists every namespace
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// Label selector applied to every list request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<String>,

    /// API group/version the fleet CRDs are served under
    #[serde(default)]
    pub api: ApiConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    #[serde(default = "default_api_group")]
    pub group: String,

    #[serde(default = "default_api_version")]
    pub version: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Refresh interval of list views
    #[serde(default = "default_refresh_seconds")]
    pub refresh_seconds: u64,

    /// Refresh interval of the manifests view
    #[serde(default = "default_manifest_refresh_seconds")]
    pub manifest_refresh_seconds: u64,

    /// Maximum width of the CLUSTERS column
    #[serde(default = "default_clusters_column_width")]
    pub clusters_column_width: usize,

    /// Render without colors
    #[serde(default = "default_false")]
    pub no_color: bool,
}

// Default value functions
fn default_namespace() -> String {
    "all".to_string()
}

fn default_api_group() -> String {
    DEFAULT_API_GROUP.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_refresh_seconds() -> u64 {
    2
}

fn default_manifest_refresh_seconds() -> u64 {
    600
}

fn default_clusters_column_width() -> usize {
    crate::render::application::DEFAULT_CLUSTERS_WIDTH
}

fn default_false() -> bool {
    false
}

impl Config {
    pub fn api_group_version(&self) -> ApiGroupVersion {
        ApiGroupVersion::new(&self.api.group, &self.api.version)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_namespace: default_namespace(),
            label_selector: None,
            api: ApiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            group: default_api_group(),
            version: default_api_version(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: default_refresh_seconds(),
            manifest_refresh_seconds: default_manifest_refresh_seconds(),
            clusters_column_width: default_clusters_column_width(),
            no_color: default_false(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.default_namespace, "all");
        assert_eq!(config.api.group, "apis.clusterfleet.io");
        assert_eq!(config.ui.manifest_refresh_seconds, 600);
        assert_eq!(config.ui.clusters_column_width, 30);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("defaultNamespace"));
        assert!(yaml.contains("refreshSeconds"));
        assert!(!yaml.contains("labelSelector"));
    }

    #[test]
    fn test_partial_config_deserialization() {
        let yaml = r#"
defaultNamespace: fleet-apps
labelSelector: team=edge
api:
  version: v1beta1
ui:
  noColor: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_namespace, "fleet-apps");
        assert_eq!(config.label_selector.as_deref(), Some("team=edge"));
        assert_eq!(
            config.api_group_version(),
            ApiGroupVersion::new("apis.clusterfleet.io", "v1beta1")
        );
        assert!(config.ui.no_color);
        assert_eq!(config.ui.refresh_seconds, 2);
    }
}
