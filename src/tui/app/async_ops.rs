//! Async fetch management
//!
//! The event loop asks the App for a [`FetchRequest`] when the current view
//! is due, runs it on a task and hands the result back through a oneshot
//! channel. Navigating away cancels the request in flight.

use super::core::App;
use super::state::Location;
use crate::aggregate::{CancelHandle, RequestContext, cancel_pair};
use crate::error::{FleetError, Result};
use crate::render::TableView;
use crate::services::FleetView;
use std::time::Instant;
use tokio::sync::oneshot;

/// Request to build the table of the current view
pub struct FetchRequest {
    pub view: FleetView,
    /// Path, labels, scope and cancellation of the request
    pub ctx: RequestContext,
    /// Channel to send the table back
    pub tx: oneshot::Sender<Result<TableView>>,
}

struct PendingFetch {
    location: Location,
    cancel: CancelHandle,
    rx: oneshot::Receiver<Result<TableView>>,
}

#[derive(Default)]
pub struct AsyncState {
    pending: Option<PendingFetch>,
}

impl AsyncState {
    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the request in flight, signalling its task to stop
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel.cancel();
        }
    }
}

impl App {
    /// Request context for the current location
    pub fn request_context(&self) -> RequestContext {
        let mut ctx = RequestContext::new().with_scope(self.scope.clone());
        if let Some(path) = self.path() {
            ctx = ctx.with_path(path);
        }
        if let Some(labels) = &self.labels {
            ctx = ctx.with_labels(labels.clone());
        }
        ctx
    }

    /// Start a fetch of the current view if it is due at `now`
    pub fn trigger_refresh(&mut self, now: Instant) -> Option<FetchRequest> {
        if !self.refresh_due(now) {
            return None;
        }

        let (handle, signal) = cancel_pair();
        let (tx, rx) = oneshot::channel();
        let ctx = self.request_context().with_cancel(signal);

        self.async_state.pending = Some(PendingFetch {
            location: self.view_state.current.clone(),
            cancel: handle,
            rx,
        });
        self.data_state.last_refresh = Some(now);
        self.data_state.refresh_requested = false;

        Some(FetchRequest {
            view: self.current_view(),
            ctx,
            tx,
        })
    }

    /// Apply the result of the fetch in flight, if it has arrived
    ///
    /// Returns true when the screen needs a redraw.
    pub fn try_get_fetch_result(&mut self) -> bool {
        let Some(pending) = self.async_state.pending.as_mut() else {
            return false;
        };
        let result = match pending.rx.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return false,
            Err(oneshot::error::TryRecvError::Closed) => Err(FleetError::Cancelled),
        };
        let Some(pending) = self.async_state.pending.take() else {
            return false;
        };

        // Results for a location the user already left are stale
        if pending.location.view != self.current_view()
            || pending.location.path.as_deref() != self.path()
        {
            return false;
        }
        self.apply_fetch_result(result);
        true
    }

    pub fn apply_fetch_result(&mut self, result: Result<TableView>) {
        match result {
            Ok(table) => {
                tracing::debug!("{} table refreshed: {} rows", self.current_view(), table.len());
                if self.status_message().is_some_and(|(_, is_error)| *is_error) {
                    self.ui_state.status_message = None;
                }
                self.set_table(table);
            }
            Err(FleetError::Cancelled) => {
                tracing::debug!("{} fetch cancelled", self.current_view());
            }
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", self.current_view(), e);
                self.set_status_message((format!("{}: {}", self.current_view(), e), true));
            }
        }
    }
}
