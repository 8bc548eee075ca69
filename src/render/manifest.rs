//! Manifest rows: NAME, KIND, REPLICAS

use super::health::{HealthScheme, classify};
use super::{Field, Header, HeaderColumn, Row, TableRenderer};
use crate::aggregate::ManifestView;
use crate::store::join_fqn;

#[derive(Debug, Clone, Default)]
pub struct ManifestRenderer;

impl TableRenderer for ManifestRenderer {
    type Item = ManifestView;

    fn header(&self) -> Header {
        Header(vec![
            HeaderColumn::text("NAME"),
            HeaderColumn::text("KIND"),
            HeaderColumn::text("REPLICAS"),
        ])
    }

    fn render(&self, view: &ManifestView) -> Row {
        // unreported manifests have no label at all
        let reported = view.status.as_ref().map(|_| view.replicas.as_str());
        let health = classify(HealthScheme::Workload, reported);

        Row {
            id: join_fqn(Some(&view.namespace), &view.display_name),
            fields: vec![
                Field::text(&view.display_name),
                Field::text(&view.kind),
                Field::text(&view.replicas),
            ],
            health,
        }
    }
}
