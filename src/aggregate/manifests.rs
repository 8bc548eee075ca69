//! Join of declared workload manifests with their status reports

use super::index::ManifestStatusIndex;
use super::replicas::{DEPLOYMENT_KIND, NO_REPLICAS, deployment_fraction};
use crate::models::{Application, Manifest, ManifestStatus, ObjectAccessor, manifest_key};

/// One declared manifest paired with its status report, if any
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestView {
    /// `name_kind`
    pub display_name: String,
    pub name: String,
    pub namespace: String,
    pub kind: String,
    /// `spec.replicas` of the manifest itself, `-` when absent
    pub declared_replicas: String,
    /// Observed replica fraction, `-` when unknown
    pub replicas: String,
    pub manifest: Manifest,
    pub status: Option<ManifestStatus>,
}

impl ManifestView {
    pub fn key(&self) -> String {
        manifest_key(&self.namespace, &self.name, &self.kind)
    }

    pub fn is_reported(&self) -> bool {
        self.status.is_some()
    }
}

/// Identity fields extracted generically from a manifest document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestIdentity {
    pub name: String,
    pub namespace: String,
    pub kind: String,
    pub declared_replicas: String,
}

impl ManifestIdentity {
    /// Missing or unreadable fields become empty strings (`-` for replicas)
    pub fn extract(manifest: &Manifest) -> Self {
        let object = match manifest.to_object() {
            Ok(object) => object,
            Err(reason) => {
                tracing::warn!("Unreadable workload manifest: {}", reason);
                return Self {
                    declared_replicas: NO_REPLICAS.to_string(),
                    ..Default::default()
                };
            }
        };

        let accessor = ObjectAccessor::new(&object);
        Self {
            name: accessor.name(),
            namespace: accessor.namespace(),
            kind: accessor.kind(),
            declared_replicas: accessor
                .int64(&["spec", "replicas"])
                .map(|r| r.to_string())
                .unwrap_or_else(|| NO_REPLICAS.to_string()),
        }
    }
}

/// Pair every workload item of `app` with its status report
///
/// Output order is the declared workload order and there is exactly one view
/// per workload item.
pub fn join_manifests(app: &Application) -> Vec<ManifestView> {
    let index = ManifestStatusIndex::build(&app.status.manifest_statuses);
    tracing::debug!(
        "Joining {} workload manifests of {}/{} against {} status reports",
        app.spec.workload.len(),
        app.namespace(),
        app.name(),
        index.len()
    );

    app.spec
        .workload
        .iter()
        .map(|item| join_one(&item.manifest, &index))
        .collect()
}

fn join_one(manifest: &Manifest, index: &ManifestStatusIndex<'_>) -> ManifestView {
    let identity = ManifestIdentity::extract(manifest);
    let status = index.get(&manifest_key(
        &identity.namespace,
        &identity.name,
        &identity.kind,
    ));

    let replicas = match status {
        Some(status) if identity.kind == DEPLOYMENT_KIND => deployment_fraction(&status.status),
        _ => NO_REPLICAS.to_string(),
    };

    ManifestView {
        display_name: format!("{}_{}", identity.name, identity.kind),
        name: identity.name,
        namespace: identity.namespace,
        kind: identity.kind,
        declared_replicas: identity.declared_replicas,
        replicas,
        manifest: manifest.clone(),
        status: status.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ManifestWithStrategy, RawExtension};
    use serde_json::json;

    fn app(workload: Vec<serde_json::Value>, statuses: Vec<ManifestStatus>) -> Application {
        let mut app = Application::default();
        app.spec.workload = workload
            .into_iter()
            .map(|m| ManifestWithStrategy {
                manifest: RawExtension(m),
            })
            .collect();
        app.status.manifest_statuses = statuses;
        app
    }

    fn deployment(ns: &str, name: &str) -> serde_json::Value {
        json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": {"name": name, "namespace": ns},
            "spec": {"replicas": 5}
        })
    }

    #[test]
    fn test_end_to_end_deployment() {
        let app = app(
            vec![deployment("ns1", "web")],
            vec![ManifestStatus {
                name: "web".into(),
                namespace: "ns1".into(),
                kind: "Deployment".into(),
                status: RawExtension(json!({"replicas": 5, "availableReplicas": 5})),
            }],
        );
        let views = join_manifests(&app);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].display_name, "web_Deployment");
        assert_eq!(views[0].replicas, "5/5");
        assert_eq!(views[0].declared_replicas, "5");
        assert!(views[0].is_reported());
    }

    #[test]
    fn test_unreported_manifest() {
        let app = app(vec![deployment("ns1", "web")], vec![]);
        let views = join_manifests(&app);
        assert_eq!(views[0].replicas, "-");
        assert!(views[0].status.is_none());
    }

    #[test]
    fn test_non_deployment_has_no_fraction() {
        let app = app(
            vec![json!({"kind": "Service", "metadata": {"name": "web", "namespace": "ns1"}})],
            vec![ManifestStatus {
                name: "web".into(),
                namespace: "ns1".into(),
                kind: "Service".into(),
                status: RawExtension(json!({"loadBalancer": {}})),
            }],
        );
        let views = join_manifests(&app);
        assert_eq!(views[0].replicas, "-");
        assert_eq!(views[0].declared_replicas, "-");
        assert!(views[0].is_reported());
    }

    #[test]
    fn test_unreadable_manifest_still_yields_view() {
        let app = app(vec![json!(42), deployment("ns1", "web")], vec![]);
        let views = join_manifests(&app);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].display_name, "_");
        assert_eq!(views[1].display_name, "web_Deployment");
    }
}
