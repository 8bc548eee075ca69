//! Cluster resource
//!
//! A standard cluster managed by the fleet. Its status is owned by the
//! lifecycle controller; this crate only reads it.

use super::state::{ClusterActivityStatus, ClusterHealthStatus, ClusterState, ClusterSubstate};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provisioning step reported by the provisioner itself
pub const PROVISIONER_STEP: &str = "provisioner";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: ClusterSpec,

    #[serde(default)]
    pub status: ClusterStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    #[serde(default)]
    pub provisioner: String,

    #[serde(default)]
    pub cluster_definition: String,

    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStatus {
    #[serde(default)]
    pub key_identifiers: BTreeMap<String, String>,

    #[serde(default)]
    pub last_status_change: String,

    #[serde(default)]
    pub cluster_health_policy: String,

    #[serde(
        rename = "clusterStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cluster_health_status: Option<ClusterHealthStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_activity_status: Option<ClusterActivityStatus>,

    #[serde(default)]
    pub provisioning_status: Vec<StepStatus>,

    #[serde(default)]
    pub runtime_status: RuntimeStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStatus {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub type_: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub error_message: String,

    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeStatus {
    #[serde(default)]
    pub cluster_version: ClusterVersion,

    #[serde(default)]
    pub node_status: NodeStatus,

    #[serde(default)]
    pub os_distribution: OsDistribution,

    #[serde(default)]
    pub cluster_state_override: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_state: Option<ClusterState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_substate: Option<ClusterSubstate>,

    #[serde(default)]
    pub last_cluster_state_change_time: String,

    #[serde(default)]
    pub cluster_capabilities_status: BTreeMap<String, String>,

    #[serde(default)]
    pub last_capabilities_status_transition_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterVersion {
    #[serde(default)]
    pub control_plane_version: String,

    /// Node count per kubelet version
    #[serde(default)]
    pub node_versions: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatus {
    #[serde(default)]
    pub healthy_node_count: i64,

    #[serde(default)]
    pub total_node_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsDistribution {
    #[serde(default)]
    pub os: String,

    #[serde(rename = "type", default)]
    pub type_: String,

    #[serde(default)]
    pub version_name: String,

    #[serde(default)]
    pub node_count: i64,
}

impl Cluster {
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    /// Status of the named provisioning step, if the provisioner reported it
    pub fn provisioning_step(&self, step: &str) -> Option<&str> {
        self.status
            .provisioning_status
            .iter()
            .find(|s| s.name == step)
            .map(|s| s.status.as_str())
    }

    pub fn cluster_state(&self) -> Option<&ClusterState> {
        self.status.runtime_status.cluster_state.as_ref()
    }
}
