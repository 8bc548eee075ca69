//! Application state structures
//!
//! State sub-structures that group the App's fields: where the user is,
//! how they got there, and what the footer should say.

use crate::render::TableView;
use crate::services::FleetView;
use std::time::Instant;

/// One step of the navigation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub view: FleetView,
    /// Application the view is about, for per-application views
    pub path: Option<String>,
    pub selected_index: usize,
}

impl Location {
    pub fn top(view: FleetView) -> Self {
        Self {
            view,
            path: None,
            selected_index: 0,
        }
    }
}

/// View-related state (navigation, scrolling)
#[derive(Debug)]
pub struct ViewState {
    pub current: Location,
    /// Locations Esc returns to, most recent last
    pub history: Vec<Location>,
    /// Scroll offset of the table
    pub scroll_offset: usize,
    /// Cached page size for PageUp/PageDown (updated each render)
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current: Location::top(FleetView::Applications),
            history: Vec::new(),
            scroll_offset: 0,
            page_size: 10,
        }
    }
}

/// Data shown by the current view
#[derive(Debug, Default)]
pub struct DataState {
    /// Last table fetched for the current location
    pub table: Option<TableView>,
    /// When the last fetch for the current location started
    pub last_refresh: Option<Instant>,
    /// Fetch as soon as possible, regardless of the interval
    pub refresh_requested: bool,
}

/// UI-related state (status line, help)
#[derive(Debug, Default)]
pub struct UIState {
    /// Status message to display (message, is_error)
    pub status_message: Option<(String, bool)>,
    /// Whether to show the key help line
    pub show_help: bool,
}
