//! ManifestWork resource
//!
//! The per-cluster unit of delivery the scheduler creates for an Application.

use super::application::ManifestStatus;
use super::condition::Condition;
use super::raw_extension::Manifest;
use super::state::{ManifestDegradedReason, ManifestWorkState};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestWork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: ManifestWorkSpec,

    #[serde(default)]
    pub status: ManifestWorkStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestWorkSpec {
    #[serde(default)]
    pub workload: ManifestsTemplate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestsTemplate {
    #[serde(default)]
    pub manifests: Vec<Manifest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestWorkStatus {
    #[serde(default)]
    pub observed_generation: i64,

    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_state: Option<ManifestWorkState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_manifest_status_observed_time: Option<String>,

    #[serde(default)]
    pub manifest_statuses: Vec<ManifestStatus>,

    #[serde(default)]
    pub health_replicas: i64,

    #[serde(default)]
    pub non_schedulable_replicas: i64,

    #[serde(default)]
    pub total_replicas: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degraded_reason: Option<ManifestDegradedReason>,
}

impl ManifestWork {
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    pub fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or_default()
    }

    /// `healthy/total` replica summary
    pub fn healthy_fraction(&self) -> String {
        format!(
            "{}/{}",
            self.status.health_replicas, self.status.total_replicas
        )
    }
}
