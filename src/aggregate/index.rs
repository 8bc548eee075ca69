//! Lookup of manifest status reports by composite key

use crate::models::ManifestStatus;
use std::collections::HashMap;

/// Map from `namespace.name.kind` to the last status report carrying that key
#[derive(Debug, Default)]
pub struct ManifestStatusIndex<'a> {
    entries: HashMap<String, &'a ManifestStatus>,
    duplicates: Vec<String>,
}

impl<'a> ManifestStatusIndex<'a> {
    /// Build the index in one pass; later reports overwrite earlier ones
    pub fn build(statuses: &'a [ManifestStatus]) -> Self {
        let mut index = Self {
            entries: HashMap::with_capacity(statuses.len()),
            duplicates: Vec::new(),
        };

        for status in statuses {
            let key = status.key();
            if index.entries.insert(key.clone(), status).is_some() {
                tracing::debug!(
                    "Duplicate manifest status for {}; keeping the last one",
                    key
                );
                index.duplicates.push(key);
            }
        }

        index
    }

    pub fn get(&self, key: &str) -> Option<&'a ManifestStatus> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys that appeared more than once, in the order the repeats were seen
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawExtension;
    use serde_json::json;

    fn status(ns: &str, name: &str, kind: &str, payload: serde_json::Value) -> ManifestStatus {
        ManifestStatus {
            name: name.to_string(),
            namespace: ns.to_string(),
            kind: kind.to_string(),
            status: RawExtension(payload),
        }
    }

    #[test]
    fn test_unique_keys() {
        let statuses = vec![
            status("ns1", "web", "Deployment", json!({"replicas": 1})),
            status("ns1", "web", "Service", json!({})),
        ];
        let index = ManifestStatusIndex::build(&statuses);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("ns1.web.Service").unwrap().kind, "Service");
        assert!(index.get("ns2.web.Service").is_none());
        assert!(index.duplicates().is_empty());
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let statuses = vec![
            status("ns1", "web", "Deployment", json!({"replicas": 1})),
            status("ns1", "web", "Deployment", json!({"replicas": 4})),
        ];
        let index = ManifestStatusIndex::build(&statuses);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get("ns1.web.Deployment").unwrap().status,
            RawExtension(json!({"replicas": 4}))
        );
        assert_eq!(index.duplicates(), ["ns1.web.Deployment".to_string()]);
    }

    #[test]
    fn test_duplicates_stay_below_warn_level() {
        use std::sync::{Arc, Mutex};

        let captured = Arc::new(Mutex::new(Vec::new()));
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || SharedBuffer(writer.clone()))
            .finish();

        let statuses = vec![
            status("ns1", "web", "Deployment", json!({})),
            status("ns1", "web", "Deployment", json!({})),
        ];
        tracing::subscriber::with_default(subscriber, || {
            for _ in 0..3 {
                ManifestStatusIndex::build(&statuses);
            }
        });

        assert!(captured.lock().unwrap().is_empty());
    }

    struct SharedBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let statuses = vec![status("ns1", "api", "Deployment", json!({}))];
        let first = ManifestStatusIndex::build(&statuses);
        let second = ManifestStatusIndex::build(&statuses);
        assert_eq!(first.len(), second.len());
        assert_eq!(
            first.get("ns1.api.Deployment"),
            second.get("ns1.api.Deployment")
        );
    }
}
