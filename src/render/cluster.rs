//! Cluster inventory rows: NAME, USAGE, PROVISIONED, HEALTH, AGE

use super::application::NOT_PROCESSED;
use super::health::{HealthScheme, classify};
use super::{Field, Header, HeaderColumn, Row, TableRenderer};
use crate::models::cluster::PROVISIONER_STEP;
use crate::models::{Cluster, creation_time};
use crate::store::join_fqn;

/// Every cluster currently serves general workloads
pub const GENERAL_USAGE: &str = "general";

#[derive(Debug, Clone, Default)]
pub struct ClusterRenderer;

impl TableRenderer for ClusterRenderer {
    type Item = Cluster;

    fn header(&self) -> Header {
        Header(vec![
            HeaderColumn::text("NAME"),
            HeaderColumn::text("USAGE"),
            HeaderColumn::text("PROVISIONED"),
            HeaderColumn::text("HEALTH"),
            HeaderColumn::age(),
        ])
    }

    fn render(&self, cluster: &Cluster) -> Row {
        let provisioned = cluster.provisioning_step(PROVISIONER_STEP);
        let state = cluster.cluster_state().map(|s| s.as_str());

        Row {
            id: join_fqn(None, cluster.name()),
            fields: vec![
                Field::text(cluster.name()),
                Field::text(GENERAL_USAGE),
                Field::text(provisioned.unwrap_or(NOT_PROCESSED)),
                Field::Status(
                    state.unwrap_or_default().to_string(),
                    classify(HealthScheme::ClusterState, state),
                ),
                Field::Age(creation_time(&cluster.metadata)),
            ],
            health: classify(HealthScheme::ClusterState, provisioned),
        }
    }
}
