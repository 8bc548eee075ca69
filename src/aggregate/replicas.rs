//! Replica-fraction formatting
//!
//! Deployment status payloads are read generically: `replicas` and
//! `availableReplicas` are optional numbers, and a payload that cannot be
//! read at all counts as zero replicas rather than an error.

use crate::models::{ObjectAccessor, RawExtension};

/// Sentinel for "no replica information"
pub const NO_REPLICAS: &str = "-";

pub const DEPLOYMENT_KIND: &str = "Deployment";

/// Format a replica count; integral values print without a fraction
pub fn format_count(value: f64) -> String {
    format!("{}", value)
}

/// `"<available>/<replicas>"` from a Deployment status payload
///
/// A missing `availableReplicas` yields `"0/<replicas>"`.
pub fn deployment_fraction(payload: &RawExtension) -> String {
    let status = match payload.to_object() {
        Ok(status) => status,
        Err(reason) => {
            tracing::warn!("Unreadable Deployment status payload: {}", reason);
            return "0/0".to_string();
        }
    };
    let accessor = ObjectAccessor::new(&status);
    let replicas = accessor.float64(&["replicas"]).unwrap_or_default();
    let available = accessor
        .float64(&["availableReplicas"])
        .unwrap_or_default();

    format!("{}/{}", format_count(available), format_count(replicas))
}
