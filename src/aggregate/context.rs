//! Request-scoped values and cancellation
//!
//! Callers hand the target resource to view construction through well-known
//! context keys rather than function arguments, so every view shares the same
//! entry point. Store calls made on behalf of a request are raced against its
//! cancellation signal.

use crate::error::{FleetError, Result};
use crate::store::{LabelSelector, NamespaceScope, ResourceCoordinate};
use std::collections::BTreeMap;
use std::future::Future;
use tokio::sync::watch;

/// Fully-qualified name (`namespace/name`) of the resource a view is about
pub const PATH_KEY: &str = "path";
/// Label selector applied to store requests
pub const LABELS_KEY: &str = "labels";

/// Cancels every request holding a matching [`CancelSignal`]
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once cancelled; never resolves if the handle is dropped first
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    values: BTreeMap<String, String>,
    scope: NamespaceScope,
    cancel: Option<CancelSignal>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn with_path(self, fqn: impl Into<String>) -> Self {
        self.with_value(PATH_KEY, fqn)
    }

    pub fn with_labels(self, selector: impl Into<String>) -> Self {
        self.with_value(LABELS_KEY, selector)
    }

    pub fn with_scope(mut self, scope: NamespaceScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_cancel(mut self, signal: CancelSignal) -> Self {
        self.cancel = Some(signal);
        self
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn path(&self) -> Option<&str> {
        self.value(PATH_KEY).filter(|p| !p.is_empty())
    }

    pub fn scope(&self) -> &NamespaceScope {
        &self.scope
    }

    /// The request's path, or `MissingContextKey` naming `coordinate`
    pub fn require_path(&self, coordinate: &ResourceCoordinate) -> Result<&str> {
        self.path().ok_or_else(|| FleetError::MissingContextKey {
            coordinate: coordinate.to_string(),
        })
    }

    /// Selector from the `labels` key; malformed selectors match everything
    pub fn selector(&self) -> LabelSelector {
        self.value(LABELS_KEY)
            .map(LabelSelector::parse_lenient)
            .unwrap_or_default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelSignal::is_cancelled)
    }

    /// Drive `fut` unless the request is cancelled first
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let Some(signal) = &self.cancel else {
            return fut.await;
        };
        if signal.is_cancelled() {
            return Err(FleetError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = signal.cancelled() => Err(FleetError::Cancelled),
            result = fut => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FleetResourceKind;
    use crate::store::ApiGroupVersion;

    #[test]
    fn test_require_path() {
        let coordinate = FleetResourceKind::Application.coordinate(&ApiGroupVersion::default());
        let err = RequestContext::new().require_path(&coordinate).unwrap_err();
        assert!(matches!(err, FleetError::MissingContextKey { .. }));

        let ctx = RequestContext::new().with_path("ns1/web");
        assert_eq!(ctx.require_path(&coordinate).unwrap(), "ns1/web");
    }

    #[test]
    fn test_selector_from_labels() {
        let ctx = RequestContext::new().with_labels("team=edge");
        assert_eq!(ctx.selector().to_string(), "team=edge");
        assert!(RequestContext::new().selector().is_everything());
        assert!(
            RequestContext::new()
                .with_labels("bad selector!")
                .selector()
                .is_everything()
        );
    }

    #[tokio::test]
    async fn test_run_without_cancel() {
        let ctx = RequestContext::new();
        let value = ctx.run(async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_run_after_cancel() {
        let (handle, signal) = cancel_pair();
        let ctx = RequestContext::new().with_cancel(signal);
        handle.cancel();
        assert!(ctx.is_cancelled());
        let err = ctx.run(async { Ok(()) }).await.unwrap_err();
        assert!(matches!(err, FleetError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_interrupts_pending_call() {
        let (handle, signal) = cancel_pair();
        let ctx = RequestContext::new().with_cancel(signal);
        let pending = ctx.run(std::future::pending::<Result<()>>());
        handle.cancel();
        let err = pending.await.unwrap_err();
        assert!(matches!(err, FleetError::Cancelled));
    }
}
