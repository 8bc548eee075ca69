//! Rendering logic for the application

use super::core::App;
use crate::tui::views::{self, HeaderInfo};
use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

impl App {
    /// Main render entry point
    pub fn render(&mut self, f: &mut Frame) {
        self.render_at(f, Utc::now());
    }

    /// Render with ages computed relative to `now`
    pub fn render_at(&mut self, f: &mut Frame, now: DateTime<Utc>) {
        let header_height = views::header_height(self.labels.as_deref());
        let footer_height = if self.ui_state.show_help { 4 } else { 3 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(0),
                Constraint::Length(footer_height),
            ])
            .split(f.area());

        let info = HeaderInfo {
            context: &self.context,
            source: &self.source,
            scope: &self.scope,
            labels: self.labels.as_deref(),
            view: self.current_view(),
            path: self.path(),
            rows: self.table().map(|t| t.len()),
        };
        views::render_header(f, chunks[0], &info, &self.theme);

        // Rows minus borders and table header
        self.view_state.page_size = (chunks[1].height as usize).saturating_sub(3).max(1);
        views::render_table(
            f,
            chunks[1],
            self.current_view().title(),
            self.data_state.table.as_ref(),
            self.view_state.current.selected_index,
            &mut self.view_state.scroll_offset,
            &self.theme,
            now,
        );

        views::render_footer(
            f,
            chunks[2],
            self.current_view(),
            self.ui_state.show_help,
            self.ui_state.status_message.as_ref(),
            &self.theme,
        );
    }
}
