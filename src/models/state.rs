//! Enumerated states reported by the fleet controllers
//!
//! The controllers may add states before this crate learns about them, so
//! every enum keeps unknown values in an `Other` variant instead of failing
//! to decode.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! string_state {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Other(s) => s.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok($name::from(s.as_str()))
            }
        }
    };
}

string_state! {
    /// Aggregated state of an application's manifest works
    ApplicationState {
        Progressing => "Progressing",
        Applied => "Applied",
        Available => "Available",
        Degraded => "Degraded",
    }
}

string_state! {
    /// Migration state of a singleton application
    SingletonApplicationState {
        Migrating => "Migrating",
        Working => "Working",
    }
}

string_state! {
    RolloutStatus {
        InProgress => "InProgress",
        Completed => "Completed",
        RollingBack => "RollingBack",
        RollingBackCompleted => "RollingBackCompleted",
    }
}

string_state! {
    /// State of the manifests in one manifest work
    ManifestWorkState {
        Progressing => "Progressing",
        Applied => "Applied",
        Available => "Available",
        Degraded => "Degraded",
    }
}

string_state! {
    ManifestDegradedReason {
        NoEnoughResource => "NoEnoughResouce",
    }
}

string_state! {
    /// Health summary computed by the cluster health policy
    ClusterHealthStatus {
        Healthy => "Healthy",
        PartialFailed => "Partial-Failed",
        Failed => "Failed",
    }
}

string_state! {
    ClusterActivityStatus {
        Active => "Active",
        Drain => "Drain",
    }
}

string_state! {
    /// Lifecycle state of a standard cluster
    ClusterState {
        Provisioned => "Provisioned",
        Ready => "Ready",
        Failed => "Failed",
        Drain => "Drain",
        Delete => "Delete",
        Unknown => "Unknown",
    }
}

string_state! {
    ClusterSubstate {
        Running => "Running",
        Degraded => "Degraded",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value_decodes() {
        let state: ClusterHealthStatus = serde_json::from_str("\"Partial-Failed\"").unwrap();
        assert_eq!(state, ClusterHealthStatus::PartialFailed);
        assert_eq!(state.to_string(), "Partial-Failed");
    }

    #[test]
    fn test_unknown_value_is_preserved() {
        let state: ClusterState = serde_json::from_str("\"Hibernating\"").unwrap();
        assert_eq!(state, ClusterState::Other("Hibernating".to_string()));
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"Hibernating\"");
    }

    #[test]
    fn test_degraded_reason_keeps_wire_spelling() {
        assert_eq!(
            ManifestDegradedReason::from("NoEnoughResouce"),
            ManifestDegradedReason::NoEnoughResource
        );
    }
}
