//! Error taxonomy for the fleet aggregation layer
//!
//! Hard errors abort the single view-construction call that produced them.
//! Missing optional data is never an error: it resolves to a display sentinel
//! inside the aggregation code instead.

/// Errors surfaced by stores, the decoder and the fleet service
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    /// The caller did not supply the fully-qualified name of the target resource
    #[error("no context path for {coordinate:?}")]
    MissingContextKey { coordinate: String },

    /// The store has no object matching the request
    #[error("{coordinate} {name:?} not found")]
    NotFound { coordinate: String, name: String },

    /// A raw document does not have the shape of the requested record
    #[error("failed to decode {kind}: {reason}")]
    Decode { kind: String, reason: String },

    /// The request was cancelled before the store answered
    #[error("request cancelled")]
    Cancelled,

    /// Kubernetes API failure, passed through unchanged
    #[error("kubernetes API error: {0}")]
    Store(#[from] kube::Error),

    /// Failure reading an offline snapshot
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Offline snapshot is not valid YAML/JSON
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}

impl FleetError {
    pub fn decode(kind: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        FleetError::Decode {
            kind: kind.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FleetError::NotFound { .. })
    }
}

/// Result type for fleet operations
pub type Result<T> = std::result::Result<T, FleetError>;
