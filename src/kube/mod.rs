//! Kubernetes client module
//!
//! Handles connection to the hub cluster's API server and provides the live
//! [`KubeStore`].
//!
//! Supports HTTP/HTTPS proxy configuration via the standard `HTTP_PROXY`,
//! `HTTPS_PROXY` and `NO_PROXY` environment variables.

pub mod store;

pub use store::KubeStore;

use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

/// Initialize and return a Kubernetes client
///
/// Uses the default kubeconfig loading strategy unless `context` names a
/// kubeconfig context explicitly:
/// 1. In-cluster config (if running in a pod)
/// 2. KUBECONFIG environment variable
/// 3. ~/.kube/config
pub async fn create_client(context: Option<&str>) -> Result<Client> {
    let config = match context {
        Some(ctx) => {
            let options = KubeConfigOptions {
                context: Some(ctx.to_string()),
                ..Default::default()
            };
            Config::from_kubeconfig(&options)
                .await
                .with_context(|| format!("Failed to load kubeconfig context {:?}", ctx))?
        }
        None => Config::infer()
            .await
            .context("Failed to infer Kubernetes configuration")?,
    };
    tracing::debug!("Connecting to {}", config.cluster_url);

    Client::try_from(config).context("Failed to create Kubernetes client")
}

/// Get the current Kubernetes context name
pub fn get_context() -> String {
    Kubeconfig::read()
        .ok()
        .and_then(|kc| kc.current_context)
        .unwrap_or_else(|| "default".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_context_from_kubeconfig() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        std::fs::write(
            &path,
            "apiVersion: v1\nkind: Config\ncurrent-context: hub-west\nclusters: []\ncontexts: []\nusers: []\n",
        )
        .unwrap();
        unsafe {
            std::env::set_var("KUBECONFIG", &path);
        }
        assert_eq!(get_context(), "hub-west");
        unsafe {
            std::env::remove_var("KUBECONFIG");
        }
    }
}
