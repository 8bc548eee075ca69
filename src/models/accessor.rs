//! Typed accessors over schema-less resource documents
//!
//! Embedded manifests and status payloads have no static shape. Every read
//! goes through [`ObjectAccessor`], which walks a field path and returns
//! `None` when a segment is missing or holds the wrong type.

use serde_json::Value;

/// Read-only view over a generic JSON tree
#[derive(Debug, Clone, Copy)]
pub struct ObjectAccessor<'a> {
    root: &'a Value,
}

impl<'a> ObjectAccessor<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// Walk `path` through nested objects
    pub fn get(&self, path: &[&str]) -> Option<&'a Value> {
        let mut current = self.root;
        for segment in path {
            current = current.as_object()?.get(*segment)?;
        }
        Some(current)
    }

    pub fn string(&self, path: &[&str]) -> Option<&'a str> {
        self.get(path)?.as_str()
    }

    /// Integer field; integral floats are accepted since JSON decoders disagree
    pub fn int64(&self, path: &[&str]) -> Option<i64> {
        let value = self.get(path)?;
        if let Some(i) = value.as_i64() {
            return Some(i);
        }
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    }

    pub fn float64(&self, path: &[&str]) -> Option<f64> {
        self.get(path)?.as_f64()
    }

    /// String field, or the empty string when absent
    pub fn string_or_empty(&self, path: &[&str]) -> String {
        self.string(path).unwrap_or_default().to_string()
    }

    pub fn kind(&self) -> String {
        self.string_or_empty(&["kind"])
    }

    pub fn name(&self) -> String {
        self.string_or_empty(&["metadata", "name"])
    }

    pub fn namespace(&self) -> String {
        self.string_or_empty(&["metadata", "namespace"])
    }
}
