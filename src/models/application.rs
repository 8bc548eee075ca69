//! Application resource
//!
//! An Application declares a workload (an ordered list of manifests) to be
//! rolled out across the clusters picked by its cluster selectors. Its status
//! reports conditions and per-manifest runtime status for every target
//! cluster.

use super::condition::Condition;
use super::raw_extension::{Manifest, RawExtension};
use super::state::{ApplicationState, RolloutStatus, SingletonApplicationState};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: ApplicationSpec,

    #[serde(default)]
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    #[serde(default)]
    pub paused: bool,

    /// Desired manifests, in rollout order
    #[serde(default)]
    pub workload: Vec<ManifestWithStrategy>,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub rollout_strategy: RolloutStrategy,

    #[serde(default)]
    pub rollback_strategy: RollbackStrategy,

    #[serde(default)]
    pub cluster_selectors: ClusterSelectors,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestWithStrategy {
    #[serde(default)]
    pub manifest: Manifest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolloutStrategy {
    /// Absolute count or percentage, e.g. `"2"` or `"50%"`
    #[serde(default)]
    pub min_available_replicas: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackStrategy {
    #[serde(default)]
    pub min_ready_replicas: i32,

    #[serde(default)]
    pub min_ready_seconds: i32,

    #[serde(default)]
    pub progress_deadline_seconds: i32,

    #[serde(default)]
    pub revision_history_limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSelectors {
    #[serde(default)]
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatus {
    #[serde(default)]
    pub clusters: Vec<ApplicationClusterStatus>,

    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub observed_generation: i64,

    #[serde(default)]
    pub last_known_good_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollout_status: Option<RolloutStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_state: Option<ApplicationState>,

    #[serde(
        rename = "SingletonApplicationState",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub singleton_application_state: Option<SingletonApplicationState>,

    /// Flat per-manifest status reports across all clusters
    #[serde(default)]
    pub manifest_statuses: Vec<ManifestStatus>,
}

/// Rollout status of an application on one cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationClusterStatus {
    #[serde(default)]
    pub cluster: String,

    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_manifest_status_observed_time: Option<String>,

    #[serde(default)]
    pub observed_generation: i64,

    #[serde(default)]
    pub manifest_statuses: Vec<ManifestStatus>,
}

/// Runtime status of one manifest, as reported by its cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestStatus {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub namespace: String,

    #[serde(default)]
    pub kind: String,

    /// Kind-specific status payload
    #[serde(default)]
    pub status: RawExtension,
}

impl ManifestStatus {
    /// Composite identity `namespace.name.kind`
    pub fn key(&self) -> String {
        manifest_key(&self.namespace, &self.name, &self.kind)
    }
}

/// Join key shared by declared manifests and their status reports
pub fn manifest_key(namespace: &str, name: &str, kind: &str) -> String {
    format!("{}.{}.{}", namespace, name, kind)
}

impl Application {
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    pub fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or_default()
    }

    /// Names of the clusters the application reports status for
    pub fn cluster_names(&self) -> Vec<&str> {
        self.status
            .clusters
            .iter()
            .map(|c| c.cluster.as_str())
            .collect()
    }
}
