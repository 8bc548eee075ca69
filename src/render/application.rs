//! Application rows: NAMESPACE, NAME, PROVISIONED, CLUSTERS, AGE

use super::health::{HealthScheme, classify};
use super::{Field, Header, HeaderColumn, Row, TableRenderer, truncate};
use crate::models::condition::{CONDITION_PROVISIONED, condition_reason};
use crate::models::{Application, creation_time};
use crate::store::join_fqn;

/// PROVISIONED value of an application without a Provisioned condition
pub const NOT_PROCESSED: &str = "Not Processed";

pub const DEFAULT_CLUSTERS_WIDTH: usize = 30;

#[derive(Debug, Clone)]
pub struct ApplicationRenderer {
    clusters_width: usize,
}

impl ApplicationRenderer {
    pub fn new(clusters_width: usize) -> Self {
        Self { clusters_width }
    }
}

impl Default for ApplicationRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CLUSTERS_WIDTH)
    }
}

/// Reason of the application's Provisioned condition
pub fn provisioned_reason(app: &Application) -> Option<&str> {
    condition_reason(&app.status.conditions, CONDITION_PROVISIONED)
}

impl TableRenderer for ApplicationRenderer {
    type Item = Application;

    fn header(&self) -> Header {
        Header(vec![
            HeaderColumn::text("NAMESPACE"),
            HeaderColumn::text("NAME"),
            HeaderColumn::text("PROVISIONED"),
            HeaderColumn::text("CLUSTERS"),
            HeaderColumn::age(),
        ])
    }

    fn render(&self, app: &Application) -> Row {
        let reason = provisioned_reason(app);
        let clusters = app.cluster_names().join(",");

        Row {
            id: join_fqn(Some(app.namespace()), app.name()),
            fields: vec![
                Field::text(app.namespace()),
                Field::text(app.name()),
                Field::text(reason.unwrap_or(NOT_PROCESSED)),
                Field::text(truncate(&clusters, self.clusters_width)),
                Field::Age(creation_time(&app.metadata)),
            ],
            health: classify(HealthScheme::Provisioning, reason),
        }
    }
}
