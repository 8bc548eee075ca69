//! Snapshot tests for the text tables
//!
//! Every view of the fixture fleet rendered by the plain text printer with a
//! fixed clock. Run `cargo insta review` to review and accept changes.

use chrono::{DateTime, TimeZone, Utc};
use fleet9s::aggregate::RequestContext;
use fleet9s::cli::format_table;
use fleet9s::services::{FleetService, FleetView};
use fleet9s::store::{ApiGroupVersion, FileStore, NamespaceScope};
use insta::assert_snapshot;
use std::sync::Arc;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn create_test_service() -> FleetService {
    let store = FileStore::from_yaml_str(include_str!("fixtures/fleet.yaml"), "fleet.yaml")
        .expect("fixture parses");
    FleetService::new(Arc::new(store), ApiGroupVersion::default())
}

async fn render(view: FleetView, ctx: RequestContext) -> String {
    let table = create_test_service().table(view, &ctx).await.unwrap();
    format_table(&table, now())
}

#[tokio::test]
async fn test_applications_table() {
    let output = render(FleetView::Applications, RequestContext::new()).await;
    assert_snapshot!(output, @r"
    NAMESPACE   NAME    PROVISIONED              CLUSTERS               AGE
    shop        web     ApplicationProvisioned   edge-1,edge-2,edge-3   3d
    jobs        batch   Not Processed                                   1d
    ");
}

#[tokio::test]
async fn test_applications_table_in_namespace() {
    let ctx = RequestContext::new().with_scope(NamespaceScope::Namespace("jobs".into()));
    let output = render(FleetView::Applications, ctx).await;
    assert_snapshot!(output, @r"
    NAMESPACE   NAME    PROVISIONED     CLUSTERS   AGE
    jobs        batch   Not Processed              1d
    ");
}

#[tokio::test]
async fn test_clusters_table() {
    let output = render(FleetView::Clusters, RequestContext::new()).await;
    assert_snapshot!(output, @r"
    NAME     USAGE     PROVISIONED    HEALTH   AGE
    edge-1   general   completed      Ready    30d
    edge-2   general   Provisioning            30m
    ");
}

#[tokio::test]
async fn test_manifest_works_table() {
    let output = render(FleetView::ManifestWorks, RequestContext::new()).await;
    assert_snapshot!(output, @r"
    NAMESPACE   NAME       STATE         HEALTHY   AGE
    edge-1      web-shop   Available     3/3       2d
    edge-3      web-shop   Progressing   1/3       2d
    ");
}

#[tokio::test]
async fn test_manifests_table() {
    let ctx = RequestContext::new().with_path("shop/web");
    let output = render(FleetView::Manifests, ctx).await;
    assert_snapshot!(output, @r"
    NAME                   KIND         REPLICAS
    web_Deployment         Deployment   2/3
    web_Service            Service      -
    web-config_ConfigMap   ConfigMap    -
    ");
}

#[tokio::test]
async fn test_application_status_table() {
    let ctx = RequestContext::new().with_path("shop/web");
    let output = render(FleetView::ApplicationStatus, ctx).await;
    assert_snapshot!(output, @r"
    CLUSTER   READY              REPLICAS
    edge-1    AllReplicasReady   3/3
    edge-2    Unknown            -
    edge-3    Progressing        1/3
    ");
}
