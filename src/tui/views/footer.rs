//! Footer view rendering

use crate::services::FleetView;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Key hints for `view`
pub fn key_hints(view: FleetView, show_help: bool) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();
    match view {
        FleetView::Applications => {
            hints.push(("enter", "manifests"));
            hints.push(("s", "status"));
        }
        FleetView::Manifests => hints.push(("s", "status")),
        FleetView::ApplicationStatus => hints.push(("m", "manifests")),
        FleetView::Clusters | FleetView::ManifestWorks => {}
    }
    if view.needs_path() {
        hints.push(("esc", "back"));
    }
    hints.extend([
        ("a", "apps"),
        ("c", "clusters"),
        ("w", "works"),
        ("r", "refresh"),
        ("q", "quit"),
    ]);
    if show_help {
        hints.extend([
            ("j/k", "down/up"),
            ("g/G", "top/bottom"),
            ("pgup/pgdn", "page"),
            ("?", "hide help"),
        ]);
    } else {
        hints.push(("?", "help"));
    }
    hints
}

/// Render the footer: the status message if any, key hints otherwise
pub fn render_footer(
    f: &mut Frame,
    area: Rect,
    view: FleetView,
    show_help: bool,
    status_message: Option<&(String, bool)>,
    theme: &Theme,
) {
    let spans: Vec<Span> = match status_message {
        Some((msg, is_error)) => vec![Span::styled(
            msg.clone(),
            if *is_error {
                theme.operation_error_style()
            } else {
                theme.operation_success_style()
            },
        )],
        None => key_hints(view, show_help)
            .into_iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(format!("<{}>", key), theme.footer_key_style()),
                    Span::raw(format!(" {}  ", action)),
                ]
            })
            .collect(),
    };

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_views_offer_back() {
        let keys = |view| -> Vec<&'static str> {
            key_hints(view, false).iter().map(|h| h.0).collect()
        };
        assert!(keys(FleetView::Manifests).contains(&"esc"));
        assert!(!keys(FleetView::Applications).contains(&"esc"));
        assert!(keys(FleetView::Applications).contains(&"enter"));
    }
}
