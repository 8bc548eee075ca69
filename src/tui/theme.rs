//! Theme and styling definitions
//!
//! A centralized place for all color and style definitions. Row colors
//! follow the health classification of each row.

use crate::render::Health;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
pub struct Theme {
    // Header colors
    pub header_context: Color,
    pub header_namespace: Color,
    pub header_namespace_all: Color,
    pub header_view: Color,

    // Health colors
    pub status_ready: Color,
    pub status_pending: Color,
    pub status_error: Color,

    // Table colors
    pub table_header: Color,
    pub table_selected: Color,
    pub table_selected_bg: Color,

    // Text colors
    pub text_secondary: Color,
    pub text_label: Color,

    // Footer colors
    pub footer_key: Color,
    pub operation_success: Color,
    pub operation_error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Header colors
            header_context: Color::Yellow,
            header_namespace: Color::Yellow,
            header_namespace_all: Color::Green,
            header_view: Color::Cyan,

            // Health colors
            status_ready: Color::Green,
            status_pending: Color::Yellow,
            status_error: Color::Red,

            // Table colors
            table_header: Color::Cyan,
            table_selected: Color::Blue,
            table_selected_bg: Color::DarkGray,

            // Text colors
            text_secondary: Color::Gray,
            text_label: Color::Cyan,

            // Footer colors
            footer_key: Color::Yellow,
            operation_success: Color::Green,
            operation_error: Color::Red,
        }
    }
}

impl Theme {
    /// Theme that leaves every color to the terminal
    pub fn monochrome() -> Self {
        Self {
            header_context: Color::Reset,
            header_namespace: Color::Reset,
            header_namespace_all: Color::Reset,
            header_view: Color::Reset,
            status_ready: Color::Reset,
            status_pending: Color::Reset,
            status_error: Color::Reset,
            table_header: Color::Reset,
            table_selected: Color::Reset,
            table_selected_bg: Color::Reset,
            text_secondary: Color::Reset,
            text_label: Color::Reset,
            footer_key: Color::Reset,
            operation_success: Color::Reset,
            operation_error: Color::Reset,
        }
    }

    pub fn from_config(ui: &crate::config::UiConfig) -> Self {
        if ui.no_color {
            Self::monochrome()
        } else {
            Self::default()
        }
    }

    pub fn header_context_style(&self) -> Style {
        Style::default()
            .fg(self.header_context)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_namespace_style(&self, is_all: bool) -> Style {
        Style::default()
            .fg(if is_all {
                self.header_namespace_all
            } else {
                self.header_namespace
            })
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_view_style(&self) -> Style {
        Style::default()
            .fg(self.header_view)
            .add_modifier(Modifier::BOLD)
    }

    pub fn health_style(&self, health: Health) -> Style {
        let color = match health {
            Health::Nominal => self.status_ready,
            Health::Pending => self.status_pending,
            Health::Attention => self.status_error,
        };
        Style::default().fg(color)
    }

    pub fn table_header_style(&self) -> Style {
        Style::default()
            .fg(self.table_header)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_selected_style(&self) -> Style {
        // Reversed keeps the selection visible without colors
        Style::default()
            .fg(self.table_selected)
            .bg(self.table_selected_bg)
            .add_modifier(Modifier::REVERSED)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default().fg(self.footer_key)
    }

    pub fn operation_success_style(&self) -> Style {
        Style::default()
            .fg(self.operation_success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn operation_error_style(&self) -> Style {
        Style::default()
            .fg(self.operation_error)
            .add_modifier(Modifier::BOLD)
    }
}
