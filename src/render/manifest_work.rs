//! ManifestWork rows: NAMESPACE, NAME, STATE, HEALTHY, AGE

use super::health::{HealthScheme, classify};
use super::{Field, Header, HeaderColumn, Row, TableRenderer};
use crate::models::{ManifestWork, creation_time};
use crate::store::join_fqn;

#[derive(Debug, Clone, Default)]
pub struct ManifestWorkRenderer;

impl TableRenderer for ManifestWorkRenderer {
    type Item = ManifestWork;

    fn header(&self) -> Header {
        Header(vec![
            HeaderColumn::text("NAMESPACE"),
            HeaderColumn::text("NAME"),
            HeaderColumn::text("STATE"),
            HeaderColumn::text("HEALTHY"),
            HeaderColumn::age(),
        ])
    }

    fn render(&self, work: &ManifestWork) -> Row {
        let state = work.status.manifest_state.as_ref().map(|s| s.as_str());

        Row {
            id: join_fqn(Some(work.namespace()), work.name()),
            fields: vec![
                Field::text(work.namespace()),
                Field::text(work.name()),
                Field::text(state.unwrap_or_default()),
                Field::text(work.healthy_fraction()),
                Field::Age(creation_time(&work.metadata)),
            ],
            health: classify(HealthScheme::ManifestWork, state),
        }
    }
}
