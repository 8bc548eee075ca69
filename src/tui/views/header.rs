//! Header view rendering

use crate::services::FleetView;
use crate::store::NamespaceScope;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// What the header shows about the current screen
pub struct HeaderInfo<'a> {
    pub context: &'a str,
    pub source: &'a str,
    pub scope: &'a NamespaceScope,
    pub labels: Option<&'a str>,
    pub view: FleetView,
    pub path: Option<&'a str>,
    pub rows: Option<usize>,
}

/// Render the header with context, namespace, selector and current view
pub fn render_header(f: &mut Frame, area: Rect, info: &HeaderInfo<'_>, theme: &Theme) {
    let label = Style::default().fg(theme.text_secondary);

    let namespace = info.scope.namespace().unwrap_or("all");
    let mut view = info.view.title().to_string();
    if let Some(path) = info.path {
        view.push_str(&format!(" ({})", path));
    }
    if let Some(rows) = info.rows {
        view.push_str(&format!(" [{}]", rows));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Context:   ", label),
            Span::styled(info.context.to_string(), theme.header_context_style()),
            Span::styled("   Source: ", label),
            Span::raw(info.source.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Namespace: ", label),
            Span::styled(
                namespace.to_string(),
                theme.header_namespace_style(matches!(info.scope, NamespaceScope::All)),
            ),
        ]),
        Line::from(vec![
            Span::styled("View:      ", label),
            Span::styled(view, theme.header_view_style()),
        ]),
    ];
    if let Some(labels) = info.labels {
        lines.push(Line::from(vec![
            Span::styled("Selector:  ", label),
            Span::raw(labels.to_string()),
        ]));
    }

    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Height the header needs, borders included
pub fn header_height(labels: Option<&str>) -> u16 {
    if labels.is_some() { 6 } else { 5 }
}
