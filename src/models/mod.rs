//! Fleet model layer
//!
//! Typed records for the clusterfleet CRDs plus the generic accessors used to
//! inspect the kind-agnostic documents they embed.
//!
//! Structure:
//! - `application.rs`, `cluster.rs`, `manifest_work.rs` - resource schemas
//! - `decode.rs` - raw document to typed record conversion
//! - `accessor.rs`, `raw_extension.rs` - schema-less document access

pub mod accessor;
pub mod application;
pub mod cluster;
pub mod condition;
pub mod decode;
pub mod fleet_resource_kind;
pub mod manifest_work;
pub mod raw_extension;
pub mod state;

pub use accessor::ObjectAccessor;
pub use application::{
    Application, ApplicationClusterStatus, ApplicationSpec, ApplicationStatus, ManifestStatus,
    ManifestWithStrategy, manifest_key,
};
pub use cluster::{Cluster, ClusterSpec, ClusterStatus, StepStatus};
pub use condition::Condition;
pub use decode::{FleetRecord, decode, decode_all};
pub use fleet_resource_kind::FleetResourceKind;
pub use manifest_work::ManifestWork;
pub use raw_extension::{Manifest, RawExtension};

use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Creation time of an object, if recorded
pub fn creation_time(meta: &ObjectMeta) -> Option<DateTime<Utc>> {
    let ts = meta.creation_timestamp.as_ref()?;
    let raw = serde_json::to_value(ts).ok()?;
    DateTime::parse_from_rfc3339(raw.as_str()?)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
