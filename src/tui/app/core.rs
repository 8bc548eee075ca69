//! Application state and navigation

use super::async_ops::AsyncState;
use super::state::{DataState, Location, UIState, ViewState};
use crate::config::Config;
use crate::render::{Row, TableView};
use crate::services::FleetView;
use crate::store::NamespaceScope;
use crate::tui::Theme;
use std::time::{Duration, Instant};

/// Main application state
pub struct App {
    // Core data
    pub(crate) config: Config,
    pub(crate) theme: Theme,
    pub(crate) context: String,
    pub(crate) source: String,
    pub(crate) scope: NamespaceScope,
    pub(crate) labels: Option<String>,

    // Organized state
    pub(crate) view_state: ViewState,
    pub(crate) data_state: DataState,
    pub(crate) ui_state: UIState,
    pub(crate) async_state: AsyncState,
}

impl App {
    pub fn new(
        context: String,
        source: String,
        scope: NamespaceScope,
        labels: Option<String>,
        config: Config,
        theme: Theme,
    ) -> Self {
        Self {
            config,
            theme,
            context,
            source,
            scope,
            labels,
            view_state: ViewState::default(),
            data_state: DataState {
                refresh_requested: true,
                ..Default::default()
            },
            ui_state: UIState::default(),
            async_state: AsyncState::default(),
        }
    }

    pub fn current_view(&self) -> FleetView {
        self.view_state.current.view
    }

    /// Application the current view is about
    pub fn path(&self) -> Option<&str> {
        self.view_state.current.path.as_deref()
    }

    pub fn selected_index(&self) -> usize {
        self.view_state.current.selected_index
    }

    pub fn history_depth(&self) -> usize {
        self.view_state.history.len()
    }

    pub fn table(&self) -> Option<&TableView> {
        self.data_state.table.as_ref()
    }

    pub fn status_message(&self) -> Option<&(String, bool)> {
        self.ui_state.status_message.as_ref()
    }

    pub fn set_status_message(&mut self, message: (String, bool)) {
        self.ui_state.status_message = Some(message);
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.table()?.rows.get(self.selected_index())
    }

    /// Replace the table of the current view, keeping the selection in range
    pub fn set_table(&mut self, table: TableView) {
        let last = table.rows.len().saturating_sub(1);
        let current = &mut self.view_state.current;
        current.selected_index = current.selected_index.min(last);
        self.data_state.table = Some(table);
    }

    /// How long the current view's data stays fresh
    pub fn refresh_interval(&self) -> Duration {
        let seconds = match self.current_view() {
            FleetView::Manifests => self.config.ui.manifest_refresh_seconds,
            _ => self.config.ui.refresh_seconds,
        };
        Duration::from_secs(seconds.max(1))
    }

    pub fn request_refresh(&mut self) {
        self.data_state.refresh_requested = true;
    }

    /// Whether the current view should be fetched again at `now`
    pub fn refresh_due(&self, now: Instant) -> bool {
        if self.async_state.in_flight() {
            return false;
        }
        self.data_state.refresh_requested
            || self
                .data_state
                .last_refresh
                .is_none_or(|last| now.duration_since(last) >= self.refresh_interval())
    }

    pub fn select_next(&mut self) {
        let len = self.table().map_or(0, TableView::len);
        let current = &mut self.view_state.current;
        if current.selected_index + 1 < len {
            current.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        let current = &mut self.view_state.current;
        current.selected_index = current.selected_index.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.view_state.current.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        let len = self.table().map_or(0, TableView::len);
        self.view_state.current.selected_index = len.saturating_sub(1);
    }

    pub fn page_down(&mut self) {
        let len = self.table().map_or(0, TableView::len);
        let page = self.view_state.page_size.max(1);
        let current = &mut self.view_state.current;
        current.selected_index = (current.selected_index + page).min(len.saturating_sub(1));
    }

    pub fn page_up(&mut self) {
        let page = self.view_state.page_size.max(1);
        let current = &mut self.view_state.current;
        current.selected_index = current.selected_index.saturating_sub(page);
    }

    /// Switch to a top-level collection view, forgetting the navigation stack
    pub fn switch_to(&mut self, view: FleetView) {
        if view.needs_path() {
            return;
        }
        if self.current_view() == view && self.view_state.history.is_empty() {
            return;
        }
        self.view_state.history.clear();
        self.enter(Location::top(view));
    }

    /// Open the manifests of the selected application
    pub fn open_manifests(&mut self) {
        self.open_application_view(FleetView::Manifests);
    }

    /// Open the per-cluster status of the selected application
    pub fn open_status(&mut self) {
        self.open_application_view(FleetView::ApplicationStatus);
    }

    fn open_application_view(&mut self, view: FleetView) {
        let path = match self.current_view() {
            FleetView::Applications => match self.selected_row() {
                Some(row) => row.id.clone(),
                None => return,
            },
            // Hop between the two views of the same application
            FleetView::Manifests | FleetView::ApplicationStatus => match self.path() {
                Some(path) => path.to_string(),
                None => return,
            },
            FleetView::Clusters | FleetView::ManifestWorks => return,
        };
        if self.current_view() == view {
            return;
        }

        let previous = self.view_state.current.clone();
        self.view_state.history.push(previous);
        self.enter(Location {
            view,
            path: Some(path),
            selected_index: 0,
        });
    }

    /// Return to the previous location; false at the bottom of the stack
    pub fn go_back(&mut self) -> bool {
        match self.view_state.history.pop() {
            Some(location) => {
                self.enter(location);
                true
            }
            None => false,
        }
    }

    fn enter(&mut self, location: Location) {
        tracing::debug!(
            "Navigating to {} (path: {:?})",
            location.view,
            location.path
        );
        self.async_state.cancel();
        self.view_state.current = location;
        self.view_state.scroll_offset = 0;
        self.data_state.table = None;
        self.data_state.last_refresh = None;
        self.data_state.refresh_requested = true;
        self.ui_state.status_message = None;
    }
}
