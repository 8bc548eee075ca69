//! Status aggregation
//!
//! Reconciles what an Application declares (its workload) with what the
//! fleet reports back (per-cluster conditions and per-manifest status).
//! Every function here is a pure projection of one fetched snapshot.

pub mod cluster_status;
pub mod context;
pub mod index;
pub mod manifests;
pub mod replicas;

pub use cluster_status::{ClusterStatusView, UNKNOWN_READY_REASON, cluster_status_views};
pub use context::{CancelHandle, CancelSignal, RequestContext, cancel_pair};
pub use index::ManifestStatusIndex;
pub use manifests::{ManifestIdentity, ManifestView, join_manifests};
