//! Status conditions
//!
//! Mirrors `metav1.Condition`, except that every field is optional: the hub
//! does not always fill in message or transition time, and missing fields
//! must never fail decoding.

use serde::{Deserialize, Serialize};

pub const CONDITION_READY: &str = "Ready";
pub const CONDITION_PROVISIONED: &str = "Provisioned";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type", default)]
    pub type_: String,

    #[serde(default)]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,

    #[serde(default)]
    pub reason: String,

    #[serde(default)]
    pub message: String,
}

/// Last condition of the given type
///
/// When a status carries the same condition type more than once, the last
/// entry wins.
pub fn find_condition<'a>(conditions: &'a [Condition], type_: &str) -> Option<&'a Condition> {
    conditions.iter().rev().find(|c| c.type_ == type_)
}

/// Reason of the last condition of the given type
pub fn condition_reason<'a>(conditions: &'a [Condition], type_: &str) -> Option<&'a str> {
    find_condition(conditions, type_).map(|c| c.reason.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(type_: &str, reason: &str) -> Condition {
        Condition {
            type_: type_.to_string(),
            reason: reason.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_condition_reason_last_wins() {
        let conditions = vec![
            condition("Ready", "Stale"),
            condition("Provisioned", "ApplicationProvisioned"),
            condition("Ready", "AllUp"),
        ];
        assert_eq!(condition_reason(&conditions, CONDITION_READY), Some("AllUp"));
        assert_eq!(
            condition_reason(&conditions, CONDITION_PROVISIONED),
            Some("ApplicationProvisioned")
        );
        assert_eq!(condition_reason(&conditions, "Synced"), None);
    }

    #[test]
    fn test_sparse_condition_decodes() {
        let c: Condition = serde_json::from_str(r#"{"type": "Ready"}"#).unwrap();
        assert_eq!(c.type_, "Ready");
        assert_eq!(c.reason, "");
        assert!(c.last_transition_time.is_none());
    }
}
