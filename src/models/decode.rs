//! Raw document to typed record conversion

use super::FleetResourceKind;
use super::application::Application;
use super::cluster::Cluster;
use super::manifest_work::ManifestWork;
use crate::error::{FleetError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A typed fleet record that can be decoded from a raw store document
pub trait FleetRecord: DeserializeOwned {
    const KIND: FleetResourceKind;
}

impl FleetRecord for Application {
    const KIND: FleetResourceKind = FleetResourceKind::Application;
}

impl FleetRecord for Cluster {
    const KIND: FleetResourceKind = FleetResourceKind::Cluster;
}

impl FleetRecord for ManifestWork {
    const KIND: FleetResourceKind = FleetResourceKind::ManifestWork;
}

/// Decode a raw document into `T`
///
/// The document must be an object with a `metadata.name`; a `kind`, when
/// present, must match. Any field of the wrong shape fails the decode.
pub fn decode<T: FleetRecord>(doc: &Value) -> Result<T> {
    let kind = T::KIND.as_str();

    let obj = doc
        .as_object()
        .ok_or_else(|| FleetError::decode(kind, "document is not an object"))?;

    let name = obj
        .get("metadata")
        .and_then(|m| m.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or_default();
    if name.is_empty() {
        return Err(FleetError::decode(kind, "metadata.name is missing"));
    }

    if let Some(doc_kind) = obj.get("kind") {
        match doc_kind.as_str() {
            Some(k) if k == kind => {}
            Some(k) => {
                return Err(FleetError::decode(
                    kind,
                    format!("document {:?} has kind {:?}", name, k),
                ));
            }
            None => return Err(FleetError::decode(kind, "kind is not a string")),
        }
    }

    <T as serde::Deserialize>::deserialize(doc).map_err(|e| {
        tracing::debug!("Failed to decode {} {:?}: {}", kind, name, e);
        FleetError::decode(kind, format!("{:?}: {}", name, e))
    })
}

/// Decode every document, failing on the first that does not fit
pub fn decode_all<T: FleetRecord>(docs: &[Value]) -> Result<Vec<T>> {
    docs.iter().map(decode::<T>).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_minimal_application() {
        let app: Application = decode(&json!({
            "apiVersion": "apis.clusterfleet.io/v1alpha1",
            "kind": "Application",
            "metadata": {"name": "web", "namespace": "ns1"}
        }))
        .unwrap();
        assert_eq!(app.name(), "web");
        assert!(app.spec.workload.is_empty());
        assert!(app.status.clusters.is_empty());
    }

    #[test]
    fn test_kind_mismatch_is_decode_error() {
        let err = decode::<Cluster>(&json!({
            "kind": "Application",
            "metadata": {"name": "web"}
        }))
        .unwrap_err();
        assert!(matches!(err, FleetError::Decode { .. }));
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let err = decode::<Application>(&json!({
            "metadata": {"name": "web"},
            "spec": {"workload": "not-a-list"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Application"));

        assert!(decode::<Application>(&json!([1, 2])).is_err());
        assert!(decode::<Application>(&json!({"metadata": {}})).is_err());
    }
}
