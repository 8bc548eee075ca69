//! Fleet resource kind definitions
//!
//! Centralized enum for the clusterfleet CRD kinds this crate reads, so that
//! kind strings, plurals and scopes are not repeated across the codebase.

use crate::store::{ApiGroupVersion, ResourceCoordinate};
use std::fmt;
use std::str::FromStr;

/// Enumeration of the fleet CRD kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FleetResourceKind {
    Application,
    Cluster,
    ManifestWork,
}

impl FleetResourceKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FleetResourceKind::Application => "Application",
            FleetResourceKind::Cluster => "Cluster",
            FleetResourceKind::ManifestWork => "ManifestWork",
        }
    }

    /// Plural name used in API paths
    pub fn plural(&self) -> &'static str {
        match self {
            FleetResourceKind::Application => "applications",
            FleetResourceKind::Cluster => "clusters",
            FleetResourceKind::ManifestWork => "manifestworks",
        }
    }

    /// Clusters are cluster-scoped; everything else lives in a namespace
    pub fn is_namespaced(&self) -> bool {
        !matches!(self, FleetResourceKind::Cluster)
    }

    /// Resolve the store coordinate of this kind under the given API group/version
    pub fn coordinate(&self, api: &ApiGroupVersion) -> ResourceCoordinate {
        ResourceCoordinate {
            group: api.group.clone(),
            version: api.version.clone(),
            plural: self.plural().to_string(),
            kind: self.as_str().to_string(),
            namespaced: self.is_namespaced(),
        }
    }

    /// Try to parse a string into a FleetResourceKind, returning None if invalid
    pub fn parse_optional(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    pub fn all() -> &'static [Self] {
        &[
            FleetResourceKind::Application,
            FleetResourceKind::Cluster,
            FleetResourceKind::ManifestWork,
        ]
    }

    /// Try to parse a string (case-insensitive, with short aliases)
    pub fn from_str_case_insensitive(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "application" | "applications" | "app" | "apps" => {
                Some(FleetResourceKind::Application)
            }
            "cluster" | "clusters" | "cl" | "fleetclusters" => Some(FleetResourceKind::Cluster),
            "manifestwork" | "manifestworks" | "mw" | "works" => {
                Some(FleetResourceKind::ManifestWork)
            }
            _ => None,
        }
    }
}

impl fmt::Display for FleetResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<FleetResourceKind> for String {
    fn from(kind: FleetResourceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for FleetResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Application" => Ok(FleetResourceKind::Application),
            "Cluster" => Ok(FleetResourceKind::Cluster),
            "ManifestWork" => Ok(FleetResourceKind::ManifestWork),
            _ => Err(format!("Unknown fleet resource kind: {}", s)),
        }
    }
}
