//! Resource stores
//!
//! A [`ResourceStore`] fetches raw, loosely-typed documents by resource
//! coordinate. The live implementation talks to the hub cluster
//! ([`crate::kube::KubeStore`]); [`FileStore`] serves an offline snapshot.

pub mod coordinate;
pub mod file;
pub mod selector;

pub use coordinate::{ApiGroupVersion, ResourceCoordinate};
pub use file::FileStore;
pub use selector::LabelSelector;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Namespace sentinel used in row ids and fqns of cluster-scoped objects
pub const CLUSTER_SCOPE: &str = "-";

/// Which namespaces a list request covers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NamespaceScope {
    #[default]
    All,
    Namespace(String),
}

impl NamespaceScope {
    /// Interpret a user-facing namespace value; `all`, `-` and empty mean all namespaces
    pub fn from_value(value: &str) -> Self {
        match value.trim() {
            "" | "all" | CLUSTER_SCOPE => NamespaceScope::All,
            ns => NamespaceScope::Namespace(ns.to_string()),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        match self {
            NamespaceScope::All => None,
            NamespaceScope::Namespace(ns) => Some(ns),
        }
    }

    pub fn contains(&self, namespace: &str) -> bool {
        match self {
            NamespaceScope::All => true,
            NamespaceScope::Namespace(ns) => ns == namespace,
        }
    }
}

/// Split a fully-qualified name into namespace and name
///
/// `ns/name` yields `(Some(ns), name)`; a bare name or the cluster-scope
/// sentinel `-/name` yields `(None, name)`.
pub fn split_fqn(fqn: &str) -> (Option<&str>, &str) {
    match fqn.split_once('/') {
        Some((ns, name)) if ns.is_empty() || ns == CLUSTER_SCOPE => (None, name),
        Some((ns, name)) => (Some(ns), name),
        None => (None, fqn),
    }
}

/// Build a row id / fqn from an optional namespace and a name
pub fn join_fqn(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() => format!("{}/{}", ns, name),
        _ => format!("{}/{}", CLUSTER_SCOPE, name),
    }
}

/// Read access to raw resources
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Fetch one object by fully-qualified name
    ///
    /// With `exact_match` the object is fetched directly; otherwise the
    /// collection is listed with `selector` and the named object picked out.
    /// Fails with `NotFound` when nothing matches.
    async fn get(
        &self,
        coordinate: &ResourceCoordinate,
        fqn: &str,
        exact_match: bool,
        selector: &LabelSelector,
    ) -> Result<Value>;

    /// List objects of a collection within `scope`, filtered by `selector`
    async fn list(
        &self,
        coordinate: &ResourceCoordinate,
        scope: &NamespaceScope,
        selector: &LabelSelector,
    ) -> Result<Vec<Value>>;

    /// Short description of the backing source, for headers and logs
    fn source(&self) -> String;
}
