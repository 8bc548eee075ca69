//! Fleet service
//!
//! The fetch, decode, join and render pipeline behind every view. Each call
//! recomputes from a fresh store read and keeps no state between calls.

use crate::aggregate::{
    ClusterStatusView, ManifestView, RequestContext, cluster_status_views, join_manifests,
};
use crate::error::Result;
use crate::models::{
    Application, Cluster, FleetRecord, FleetResourceKind, ManifestWork, decode, decode_all,
};
use crate::render::{
    ApplicationRenderer, ApplicationStatusRenderer, ClusterRenderer, ManifestRenderer,
    ManifestWorkRenderer, TableRenderer, TableView,
};
use crate::store::{ApiGroupVersion, NamespaceScope, ResourceCoordinate, ResourceStore};
use std::fmt;
use std::sync::Arc;

/// The tables the service can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FleetView {
    Applications,
    /// Per-cluster status of the application named by the context path
    ApplicationStatus,
    /// Workload manifests of the application named by the context path
    Manifests,
    Clusters,
    ManifestWorks,
}

impl FleetView {
    pub fn title(&self) -> &'static str {
        match self {
            FleetView::Applications => "Applications",
            FleetView::ApplicationStatus => "Application Status",
            FleetView::Manifests => "Manifests",
            FleetView::Clusters => "Clusters",
            FleetView::ManifestWorks => "ManifestWorks",
        }
    }

    /// Whether the view is about one application rather than a collection
    pub fn needs_path(&self) -> bool {
        matches!(self, FleetView::ApplicationStatus | FleetView::Manifests)
    }
}

impl fmt::Display for FleetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

pub struct FleetService {
    store: Arc<dyn ResourceStore>,
    api: ApiGroupVersion,
    clusters_width: usize,
}

impl FleetService {
    pub fn new(store: Arc<dyn ResourceStore>, api: ApiGroupVersion) -> Self {
        Self {
            store,
            api,
            clusters_width: crate::render::application::DEFAULT_CLUSTERS_WIDTH,
        }
    }

    /// Width of the CLUSTERS column in application tables
    pub fn with_clusters_width(mut self, width: usize) -> Self {
        self.clusters_width = width;
        self
    }

    pub fn source(&self) -> String {
        self.store.source()
    }

    pub fn coordinate(&self, kind: FleetResourceKind) -> ResourceCoordinate {
        kind.coordinate(&self.api)
    }

    async fn list<T: FleetRecord>(&self, ctx: &RequestContext) -> Result<Vec<T>> {
        let coordinate = self.coordinate(T::KIND);
        let scope = if coordinate.namespaced {
            ctx.scope().clone()
        } else {
            NamespaceScope::All
        };
        let selector = ctx.selector();

        let docs = ctx
            .run(self.store.list(&coordinate, &scope, &selector))
            .await?;
        tracing::debug!("Fetched {} {} documents", docs.len(), coordinate.kind);
        decode_all(&docs)
    }

    pub async fn applications(&self, ctx: &RequestContext) -> Result<Vec<Application>> {
        self.list(ctx).await
    }

    pub async fn clusters(&self, ctx: &RequestContext) -> Result<Vec<Cluster>> {
        self.list(ctx).await
    }

    pub async fn manifest_works(&self, ctx: &RequestContext) -> Result<Vec<ManifestWork>> {
        self.list(ctx).await
    }

    /// The application named by the context path
    pub async fn application(&self, ctx: &RequestContext) -> Result<Application> {
        let coordinate = self.coordinate(FleetResourceKind::Application);
        let fqn = ctx.require_path(&coordinate)?;
        let selector = ctx.selector();

        let doc = ctx
            .run(self.store.get(&coordinate, fqn, true, &selector))
            .await?;
        decode(&doc)
    }

    pub async fn manifests(&self, ctx: &RequestContext) -> Result<Vec<ManifestView>> {
        let app = self.application(ctx).await?;
        Ok(join_manifests(&app))
    }

    pub async fn application_status(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<ClusterStatusView>> {
        let app = self.application(ctx).await?;
        Ok(cluster_status_views(&app))
    }

    /// Build the rendered table for `view`
    pub async fn table(&self, view: FleetView, ctx: &RequestContext) -> Result<TableView> {
        tracing::debug!("Building {} table", view);
        let table = match view {
            FleetView::Applications => {
                ApplicationRenderer::new(self.clusters_width).table(&self.applications(ctx).await?)
            }
            FleetView::ApplicationStatus => {
                ApplicationStatusRenderer.table(&self.application_status(ctx).await?)
            }
            FleetView::Manifests => ManifestRenderer.table(&self.manifests(ctx).await?),
            FleetView::Clusters => ClusterRenderer.table(&self.clusters(ctx).await?),
            FleetView::ManifestWorks => {
                ManifestWorkRenderer.table(&self.manifest_works(ctx).await?)
            }
        };
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FleetError;
    use crate::store::MockResourceStore;
    use serde_json::json;

    fn application_doc() -> serde_json::Value {
        json!({
            "apiVersion": "apis.clusterfleet.io/v1alpha1",
            "kind": "Application",
            "metadata": {"name": "web", "namespace": "ns1"},
            "spec": {"workload": [{"manifest": {
                "kind": "Deployment",
                "metadata": {"name": "web", "namespace": "ns1"},
                "spec": {"replicas": 5}
            }}]},
            "status": {
                "manifestStatuses": [{
                    "name": "web", "namespace": "ns1", "kind": "Deployment",
                    "status": {"replicas": 5, "availableReplicas": 5}
                }],
                "clusters": [{
                    "cluster": "edge-1",
                    "conditions": [{"type": "Ready", "status": "True", "reason": "AllUp"}]
                }]
            }
        })
    }

    fn service(store: MockResourceStore) -> FleetService {
        FleetService::new(Arc::new(store), ApiGroupVersion::default())
    }

    #[tokio::test]
    async fn test_manifests_requires_path() {
        let mut store = MockResourceStore::new();
        store.expect_get().never();

        let err = service(store)
            .manifests(&RequestContext::new())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "no context path for \"apis.clusterfleet.io/v1alpha1/applications\""
        );
    }

    #[tokio::test]
    async fn test_manifests_fetches_exact_application() {
        let mut store = MockResourceStore::new();
        store
            .expect_get()
            .withf(|coordinate, fqn, exact, _| {
                coordinate.plural == "applications" && fqn.to_string() == "ns1/web" && *exact
            })
            .times(1)
            .returning(|_, _, _, _| Ok(application_doc()));

        let ctx = RequestContext::new().with_path("ns1/web");
        let views = service(store).manifests(&ctx).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].display_name, "web_Deployment");
        assert_eq!(views[0].replicas, "5/5");
    }

    #[tokio::test]
    async fn test_application_status_table() {
        let mut store = MockResourceStore::new();
        store
            .expect_get()
            .returning(|_, _, _, _| Ok(application_doc()));

        let ctx = RequestContext::new().with_path("ns1/web");
        let table = service(store)
            .table(FleetView::ApplicationStatus, &ctx)
            .await
            .unwrap();
        assert_eq!(table.header.names(), ["CLUSTER", "READY", "REPLICAS"]);
        assert_eq!(table.rows[0].id, "-/edge-1");
    }

    #[tokio::test]
    async fn test_not_found_is_propagated() {
        let mut store = MockResourceStore::new();
        store.expect_get().returning(|coordinate, fqn, _, _| {
            Err(FleetError::NotFound {
                coordinate: coordinate.to_string(),
                name: fqn.to_string(),
            })
        });

        let ctx = RequestContext::new().with_path("ns1/missing");
        let err = service(store).manifests(&ctx).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_clusters_list_ignores_namespace_scope() {
        let mut store = MockResourceStore::new();
        store
            .expect_list()
            .withf(|coordinate, scope, _| {
                coordinate.plural == "clusters" && matches!(scope, NamespaceScope::All)
            })
            .returning(|_, _, _| {
                Ok(vec![json!({"kind": "Cluster", "metadata": {"name": "edge-1"}})])
            });

        let ctx = RequestContext::new().with_scope(NamespaceScope::Namespace("ns1".into()));
        let clusters = service(store).clusters(&ctx).await.unwrap();
        assert_eq!(clusters.len(), 1);
    }

    #[tokio::test]
    async fn test_selector_is_forwarded() {
        let mut store = MockResourceStore::new();
        store
            .expect_list()
            .withf(|_, _, selector| selector.to_string() == "team=edge")
            .returning(|_, _, _| Ok(vec![]));

        let ctx = RequestContext::new().with_labels("team=edge");
        let apps = service(store).applications(&ctx).await.unwrap();
        assert!(apps.is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_document_fails_call() {
        let mut store = MockResourceStore::new();
        store
            .expect_list()
            .returning(|_, _, _| Ok(vec![json!({"kind": "ManifestWork", "metadata": {}})]));

        let err = service(store)
            .manifest_works(&RequestContext::new())
            .await
            .unwrap_err();
        assert!(matches!(err, FleetError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_cancelled_request() {
        let mut store = MockResourceStore::new();
        store.expect_list().returning(|_, _, _| Ok(vec![]));

        let (handle, signal) = crate::aggregate::cancel_pair();
        handle.cancel();
        let ctx = RequestContext::new().with_cancel(signal);
        let err = service(store)
            .table(FleetView::Clusters, &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, FleetError::Cancelled));
    }
}
