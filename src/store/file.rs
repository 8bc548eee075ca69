//! Offline resource store
//!
//! Serves documents from a YAML file, e.g. the output of
//! `kubectl get applications,clusters -A -o yaml`. Multi-document files and
//! `kind: List` documents are both accepted.

use super::{
    LabelSelector, NamespaceScope, ResourceCoordinate, ResourceStore, join_fqn, split_fqn,
};
use crate::error::{FleetError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Read-only store over an in-memory snapshot of documents
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    origin: PathBuf,
    documents: Vec<Value>,
}

impl FileStore {
    /// Load a snapshot from disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading resource snapshot from {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FleetError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let store = Self::from_yaml_str(&content, path)?;
        tracing::debug!(
            "Loaded {} documents from {:?}",
            store.documents.len(),
            path
        );
        Ok(store)
    }

    /// Parse a snapshot from YAML (or JSON) text
    pub fn from_yaml_str(content: &str, origin: impl Into<PathBuf>) -> Result<Self> {
        let origin = origin.into();
        let mut documents = Vec::new();

        for doc in serde_yaml::Deserializer::from_str(content) {
            let value = Value::deserialize(doc).map_err(|e| FleetError::Parse {
                path: origin.display().to_string(),
                reason: e.to_string(),
            })?;
            flatten_into(value, &mut documents);
        }

        Ok(Self { origin, documents })
    }

    pub fn from_documents(documents: Vec<Value>) -> Self {
        let mut flattened = Vec::new();
        for doc in documents {
            flatten_into(doc, &mut flattened);
        }
        Self {
            origin: PathBuf::from("<memory>"),
            documents: flattened,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn collection<'a>(
        &'a self,
        coordinate: &'a ResourceCoordinate,
    ) -> impl Iterator<Item = &'a Value> + 'a {
        self.documents
            .iter()
            .filter(move |doc| coordinate.matches_document(doc))
    }
}

/// Push a document, expanding `List` wrappers into their items
fn flatten_into(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Null => {}
        Value::Object(mut map) => {
            let is_list = map
                .get("kind")
                .and_then(|k| k.as_str())
                .is_some_and(|k| k == "List" || k.ends_with("List"));
            if is_list {
                if let Some(Value::Array(items)) = map.remove("items") {
                    for item in items {
                        flatten_into(item, out);
                    }
                }
            } else {
                out.push(Value::Object(map));
            }
        }
        other => {
            tracing::warn!("Skipping non-object document in snapshot: {}", other);
        }
    }
}

fn namespace_of(doc: &Value) -> &str {
    doc.pointer("/metadata/namespace")
        .and_then(|n| n.as_str())
        .unwrap_or_default()
}

fn name_of(doc: &Value) -> &str {
    doc.pointer("/metadata/name")
        .and_then(|n| n.as_str())
        .unwrap_or_default()
}

#[async_trait]
impl ResourceStore for FileStore {
    async fn get(
        &self,
        coordinate: &ResourceCoordinate,
        fqn: &str,
        exact_match: bool,
        selector: &LabelSelector,
    ) -> Result<Value> {
        let (namespace, name) = split_fqn(fqn);
        let scope_matches = |doc: &Value| {
            !coordinate.namespaced || namespace.is_none_or(|ns| namespace_of(doc) == ns)
        };

        self.collection(coordinate)
            .filter(|doc| scope_matches(doc) && name_of(doc) == name)
            .find(|doc| exact_match || selector.matches_document(doc))
            .cloned()
            .ok_or_else(|| FleetError::NotFound {
                coordinate: coordinate.to_string(),
                name: join_fqn(namespace, name),
            })
    }

    async fn list(
        &self,
        coordinate: &ResourceCoordinate,
        scope: &NamespaceScope,
        selector: &LabelSelector,
    ) -> Result<Vec<Value>> {
        Ok(self
            .collection(coordinate)
            .filter(|doc| !coordinate.namespaced || scope.contains(namespace_of(doc)))
            .filter(|doc| selector.matches_document(doc))
            .cloned()
            .collect())
    }

    fn source(&self) -> String {
        format!("file:{}", self.origin.display())
    }
}
