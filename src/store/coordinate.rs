//! Resource coordinates
//!
//! A coordinate identifies one resource collection in a store: API group,
//! version, plural, kind and whether objects live in a namespace.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_API_GROUP: &str = "apis.clusterfleet.io";
pub const DEFAULT_API_VERSION: &str = "v1alpha1";

/// API group and version the fleet CRDs are served under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiGroupVersion {
    pub group: String,
    pub version: String,
}

impl ApiGroupVersion {
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }
}

impl Default for ApiGroupVersion {
    fn default() -> Self {
        Self::new(DEFAULT_API_GROUP, DEFAULT_API_VERSION)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceCoordinate {
    pub group: String,
    pub version: String,
    pub plural: String,
    pub kind: String,
    pub namespaced: bool,
}

impl ResourceCoordinate {
    /// `apiVersion` value of objects in this collection
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// Whether a raw document belongs to this collection
    ///
    /// Kind must match exactly; the group part of `apiVersion` must match when
    /// the document carries one.
    pub fn matches_document(&self, doc: &serde_json::Value) -> bool {
        let kind = doc.get("kind").and_then(|k| k.as_str()).unwrap_or_default();
        if kind != self.kind {
            return false;
        }
        match doc.get("apiVersion").and_then(|v| v.as_str()) {
            Some(api_version) => {
                let group = api_version
                    .rsplit_once('/')
                    .map(|(group, _)| group)
                    .unwrap_or("");
                group == self.group
            }
            None => true,
        }
    }
}

impl fmt::Display for ResourceCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.group, self.version, self.plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FleetResourceKind;
    use serde_json::json;

    #[test]
    fn test_api_version() {
        let coordinate = FleetResourceKind::Cluster.coordinate(&ApiGroupVersion::default());
        assert_eq!(coordinate.api_version(), "apis.clusterfleet.io/v1alpha1");
        assert_eq!(
            coordinate.to_string(),
            "apis.clusterfleet.io/v1alpha1/clusters"
        );
    }

    #[test]
    fn test_matches_document() {
        let coordinate = FleetResourceKind::Application.coordinate(&ApiGroupVersion::default());
        assert!(coordinate.matches_document(&json!({
            "apiVersion": "apis.clusterfleet.io/v1beta1",
            "kind": "Application"
        })));
        assert!(coordinate.matches_document(&json!({"kind": "Application"})));
        assert!(!coordinate.matches_document(&json!({
            "apiVersion": "argoproj.io/v1alpha1",
            "kind": "Application"
        })));
        assert!(!coordinate.matches_document(&json!({"kind": "Cluster"})));
    }
}
