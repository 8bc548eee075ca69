//! Live resource store backed by the hub cluster's API server

use crate::error::{FleetError, Result};
use crate::store::{
    LabelSelector, NamespaceScope, ResourceCoordinate, ResourceStore, join_fqn, split_fqn,
};
use async_trait::async_trait;
use kube::Api;
use kube::api::ListParams;
use kube::core::{ApiResource, DynamicObject};
use serde_json::Value;

/// [`ResourceStore`] over dynamic kube APIs
#[derive(Clone)]
pub struct KubeStore {
    client: kube::Client,
    context: String,
}

impl KubeStore {
    pub fn new(client: kube::Client, context: impl Into<String>) -> Self {
        Self {
            client,
            context: context.into(),
        }
    }

    fn api(&self, coordinate: &ResourceCoordinate, namespace: Option<&str>) -> Api<DynamicObject> {
        let api_resource = api_resource(coordinate);
        match namespace {
            Some(ns) if coordinate.namespaced => {
                Api::namespaced_with(self.client.clone(), ns, &api_resource)
            }
            _ => Api::all_with(self.client.clone(), &api_resource),
        }
    }
}

pub fn api_resource(coordinate: &ResourceCoordinate) -> ApiResource {
    ApiResource {
        group: coordinate.group.clone(),
        version: coordinate.version.clone(),
        api_version: coordinate.api_version(),
        kind: coordinate.kind.clone(),
        plural: coordinate.plural.clone(),
    }
}

fn list_params(selector: &LabelSelector) -> ListParams {
    if selector.is_everything() {
        ListParams::default()
    } else {
        ListParams::default().labels(&selector.to_string())
    }
}

fn to_document(coordinate: &ResourceCoordinate, obj: &DynamicObject) -> Result<Value> {
    let mut doc = serde_json::to_value(obj).map_err(|e| FleetError::decode(&coordinate.kind, e))?;
    // list items come back without type meta
    if let Some(map) = doc.as_object_mut() {
        map.entry("apiVersion")
            .or_insert_with(|| Value::String(coordinate.api_version()));
        map.entry("kind")
            .or_insert_with(|| Value::String(coordinate.kind.clone()));
    }
    Ok(doc)
}

#[async_trait]
impl ResourceStore for KubeStore {
    async fn get(
        &self,
        coordinate: &ResourceCoordinate,
        fqn: &str,
        exact_match: bool,
        selector: &LabelSelector,
    ) -> Result<Value> {
        let (namespace, name) = split_fqn(fqn);
        let not_found = || FleetError::NotFound {
            coordinate: coordinate.to_string(),
            name: join_fqn(namespace, name),
        };
        tracing::debug!(
            "Fetching {} {} (exact_match={}, selector={:?})",
            coordinate,
            fqn,
            exact_match,
            selector.to_string()
        );

        let api = self.api(coordinate, namespace);
        if exact_match {
            let obj = api.get_opt(name).await?.ok_or_else(not_found)?;
            return to_document(coordinate, &obj);
        }

        let list = api.list(&list_params(selector)).await?;
        let obj = list
            .items
            .iter()
            .find(|o| o.metadata.name.as_deref() == Some(name))
            .ok_or_else(not_found)?;
        to_document(coordinate, obj)
    }

    async fn list(
        &self,
        coordinate: &ResourceCoordinate,
        scope: &NamespaceScope,
        selector: &LabelSelector,
    ) -> Result<Vec<Value>> {
        tracing::debug!(
            "Listing {} in {:?} (selector={:?})",
            coordinate,
            scope,
            selector.to_string()
        );

        let list = self
            .api(coordinate, scope.namespace())
            .list(&list_params(selector))
            .await?;
        tracing::debug!("Listed {} {}", list.items.len(), coordinate.plural);

        list.items
            .iter()
            .map(|obj| to_document(coordinate, obj))
            .collect()
    }

    fn source(&self) -> String {
        self.context.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FleetResourceKind;
    use crate::store::ApiGroupVersion;

    #[test]
    fn test_api_resource_from_coordinate() {
        let coordinate = FleetResourceKind::ManifestWork.coordinate(&ApiGroupVersion::default());
        let ar = api_resource(&coordinate);
        assert_eq!(ar.api_version, "apis.clusterfleet.io/v1alpha1");
        assert_eq!(ar.plural, "manifestworks");
        assert_eq!(ar.kind, "ManifestWork");
    }

    #[test]
    fn test_to_document_fills_type_meta() {
        let coordinate = FleetResourceKind::Cluster.coordinate(&ApiGroupVersion::default());
        let ar = api_resource(&coordinate);
        let obj = DynamicObject::new("edge-1", &ar);
        let doc = to_document(&coordinate, &obj).unwrap();
        assert_eq!(doc["kind"], "Cluster");
        assert_eq!(doc["metadata"]["name"], "edge-1");
    }
}
