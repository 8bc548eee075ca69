//! Per-cluster rollout status of an application

use super::replicas::{DEPLOYMENT_KIND, NO_REPLICAS, deployment_fraction};
use crate::models::condition::{CONDITION_READY, find_condition};
use crate::models::{Application, ApplicationClusterStatus};

/// Reason reported when a cluster has no Ready condition yet
pub const UNKNOWN_READY_REASON: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterStatusView {
    pub cluster: String,
    pub ready_reason: String,
    /// `status` of the Ready condition, when one is reported
    pub ready_status: Option<String>,
    pub replicas: String,
    pub source: ApplicationClusterStatus,
}

impl ClusterStatusView {
    pub fn from_status(status: &ApplicationClusterStatus) -> Self {
        let ready = find_condition(&status.conditions, CONDITION_READY);
        let ready_reason = ready
            .map(|c| c.reason.as_str())
            .unwrap_or(UNKNOWN_READY_REASON)
            .to_string();
        let ready_status = ready.map(|c| c.status.clone()).filter(|s| !s.is_empty());

        // last Deployment report wins
        let replicas = status
            .manifest_statuses
            .iter()
            .rev()
            .find(|s| s.kind == DEPLOYMENT_KIND)
            .map(|s| deployment_fraction(&s.status))
            .unwrap_or_else(|| NO_REPLICAS.to_string());

        Self {
            cluster: status.cluster.clone(),
            ready_reason,
            ready_status,
            replicas,
            source: status.clone(),
        }
    }
}

/// One view per `status.clusters` entry, in input order
pub fn cluster_status_views(app: &Application) -> Vec<ClusterStatusView> {
    app.status
        .clusters
        .iter()
        .map(ClusterStatusView::from_status)
        .collect()
}
