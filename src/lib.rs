//! fleet9s library
//!
//! Read-only aggregation and presentation of clusterfleet resources:
//! Applications, the Clusters they roll out to and the ManifestWorks that
//! carry their workload. Used by the fleet9s binary and by the tests.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod kube;
pub mod models;
pub mod render;
pub mod services;
pub mod store;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for convenience
pub use aggregate::{RequestContext, cancel_pair};
pub use error::{FleetError, Result};
pub use render::{Health, TableView};
pub use services::{FleetService, FleetView};
pub use store::{FileStore, LabelSelector, NamespaceScope, ResourceStore};
