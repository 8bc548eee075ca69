//! Embedded, kind-agnostic resource documents
//!
//! Manifests and manifest status payloads are stored as raw extensions. The
//! hub may hand them over as embedded objects or as serialized text (the
//! YAML/JSON the user applied), so both forms are accepted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// Opaque embedded document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawExtension(pub Value);

impl RawExtension {
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Resolve the document into an object tree
    ///
    /// Serialized text is parsed as YAML, which also covers JSON.
    pub fn to_object(&self) -> Result<Cow<'_, Value>, String> {
        match &self.0 {
            Value::Object(_) => Ok(Cow::Borrowed(&self.0)),
            Value::String(text) => {
                let parsed: Value = serde_yaml::from_str(text)
                    .map_err(|e| format!("unable to parse embedded document: {}", e))?;
                if parsed.is_object() {
                    Ok(Cow::Owned(parsed))
                } else {
                    Err("embedded document is not an object".to_string())
                }
            }
            Value::Null => Err("embedded document is empty".to_string()),
            other => Err(format!("unexpected embedded document: {}", other)),
        }
    }
}

impl From<Value> for RawExtension {
    fn from(value: Value) -> Self {
        RawExtension(value)
    }
}

/// A resource to be deployed on a standard cluster
pub type Manifest = RawExtension;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_is_borrowed() {
        let raw = RawExtension(json!({"kind": "Service"}));
        let obj = raw.to_object().unwrap();
        assert!(matches!(obj, Cow::Borrowed(_)));
        assert_eq!(obj["kind"], "Service");
    }

    #[test]
    fn test_serialized_yaml_is_parsed() {
        let raw = RawExtension(json!(
            "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: web\nspec:\n  replicas: 2\n"
        ));
        let obj = raw.to_object().unwrap();
        assert_eq!(obj["metadata"]["name"], "web");
        assert_eq!(obj["spec"]["replicas"], 2);
    }

    #[test]
    fn test_serialized_json_is_parsed() {
        let raw = RawExtension(json!("{\"replicas\": 3, \"availableReplicas\": 1}"));
        let obj = raw.to_object().unwrap();
        assert_eq!(obj["availableReplicas"], 1);
    }

    #[test]
    fn test_scalar_is_rejected() {
        assert!(RawExtension(json!(7)).to_object().is_err());
        assert!(RawExtension(Value::Null).to_object().is_err());
        assert!(RawExtension(json!("just words")).to_object().is_err());
    }

    #[test]
    fn test_is_empty() {
        assert!(RawExtension::default().is_empty());
        assert!(RawExtension(json!({})).is_empty());
        assert!(!RawExtension(json!({"a": 1})).is_empty());
    }
}
