//! Application status rows: CLUSTER, READY, REPLICAS

use super::health::{HealthScheme, classify};
use super::{Field, Header, HeaderColumn, Row, TableRenderer};
use crate::aggregate::ClusterStatusView;
use crate::store::join_fqn;

#[derive(Debug, Clone, Default)]
pub struct ApplicationStatusRenderer;

impl TableRenderer for ApplicationStatusRenderer {
    type Item = ClusterStatusView;

    fn header(&self) -> Header {
        Header(vec![
            HeaderColumn::text("CLUSTER"),
            HeaderColumn::text("READY"),
            HeaderColumn::text("REPLICAS"),
        ])
    }

    fn render(&self, view: &ClusterStatusView) -> Row {
        let ready = classify(HealthScheme::Ready, view.ready_status.as_deref());
        let health = ready.max(classify(HealthScheme::Workload, Some(&view.replicas)));

        Row {
            id: join_fqn(None, &view.cluster),
            fields: vec![
                Field::text(&view.cluster),
                Field::text(&view.ready_reason),
                Field::text(&view.replicas),
            ],
            health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApplicationClusterStatus;
    use crate::render::Health;

    fn view(ready: &str, replicas: &str) -> ClusterStatusView {
        view_with_status(ready, Some("True"), replicas)
    }

    fn view_with_status(ready: &str, status: Option<&str>, replicas: &str) -> ClusterStatusView {
        ClusterStatusView {
            cluster: "edge-1".into(),
            ready_reason: ready.into(),
            ready_status: status.map(str::to_string),
            replicas: replicas.into(),
            source: ApplicationClusterStatus::default(),
        }
    }

    #[test]
    fn test_row_fields() {
        let row = ApplicationStatusRenderer.render(&view("AllUp", "2/3"));
        assert_eq!(row.id, "-/edge-1");
        assert_eq!(
            row.fields,
            vec![Field::text("edge-1"), Field::text("AllUp"), Field::text("2/3")]
        );
        assert_eq!(row.health, Health::Pending);
    }

    #[test]
    fn test_row_health() {
        assert_eq!(
            ApplicationStatusRenderer.render(&view("AllUp", "3/3")).health,
            Health::Nominal
        );
        assert_eq!(
            ApplicationStatusRenderer.render(&view("AllUp", "-")).health,
            Health::Nominal
        );
        assert_eq!(
            ApplicationStatusRenderer
                .render(&view_with_status("Unknown", None, "3/3"))
                .health,
            Health::Pending
        );
    }

    #[test]
    fn test_failed_ready_condition_needs_attention() {
        let failed = view_with_status("ManifestApplyFailed", Some("False"), "-");
        assert_eq!(ApplicationStatusRenderer.render(&failed).health, Health::Attention);

        let failed = view_with_status("Progressing", Some("False"), "3/3");
        assert_eq!(ApplicationStatusRenderer.render(&failed).health, Health::Attention);
    }
}
