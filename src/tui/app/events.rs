//! Event handling for the application

use super::core::App;
use crate::services::FleetView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Main keyboard event handler
    ///
    /// Returns Some(true) to quit, None for normal continuation
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(true);
        }

        match key.code {
            KeyCode::Char('q') => return Some(true),
            KeyCode::Esc => {
                // First Esc dismisses a status message
                if self.ui_state.status_message.take().is_none() {
                    self.go_back();
                }
            }
            KeyCode::Enter => self.open_manifests(),
            KeyCode::Char('s') => self.open_status(),
            KeyCode::Char('m') => self.open_manifests(),
            KeyCode::Char('a') => self.switch_to(FleetView::Applications),
            KeyCode::Char('c') => self.switch_to(FleetView::Clusters),
            KeyCode::Char('w') => self.switch_to(FleetView::ManifestWorks),
            KeyCode::Char('r') => {
                self.request_refresh();
                self.set_status_message((format!("Refreshing {}", self.current_view()), false));
            }
            KeyCode::Char('?') => self.ui_state.show_help = !self.ui_state.show_help,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            _ => {}
        }
        None
    }
}
