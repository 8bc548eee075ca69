//! Fleet table rendering

use crate::render::{Field, TableView};
use crate::tui::theme::Theme;
use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Cell, Row, Table},
};

const SCROLL_BUFFER: usize = 2;
const COLUMN_SPACING: u16 = 3;

/// Render `table`, or a placeholder while it is loading or empty
#[allow(clippy::too_many_arguments)]
pub fn render_table(
    f: &mut Frame,
    area: Rect,
    title: &str,
    table: Option<&TableView>,
    selected_index: usize,
    scroll_offset: &mut usize,
    theme: &Theme,
    now: DateTime<Utc>,
) {
    let Some(table) = table else {
        super::helpers::render_loading_state(f, area, title, "Loading...", theme);
        return;
    };
    let title = format!("{} ({})", title, table.len());
    if table.is_empty() {
        super::helpers::render_empty_state(
            f,
            area,
            &title,
            "No resources found",
            "Press <r> to refresh",
            theme,
        );
        return;
    }

    // Borders and header row
    let visible_height = (area.height as usize).saturating_sub(3);
    super::helpers::update_scroll_offset(
        selected_index,
        visible_height,
        scroll_offset,
        SCROLL_BUFFER,
    );

    let cells: Vec<Vec<String>> = table.rows.iter().map(|row| row.display(now)).collect();
    let names = table.header.names();
    let constraints: Vec<Constraint> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let width = cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0);
            Constraint::Length(width as u16)
        })
        .collect();

    let header =
        Row::new(names.iter().map(|name| name.to_string())).style(theme.table_header_style());

    let rows: Vec<Row> = table
        .rows
        .iter()
        .zip(cells)
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, (row, texts))| {
            let row_style = if idx == selected_index {
                theme.table_selected_style()
            } else {
                theme.health_style(row.health)
            };
            let row_cells: Vec<Cell> = row
                .fields
                .iter()
                .zip(texts)
                .map(|(field, text)| match field {
                    Field::Status(_, health) if idx != selected_index => {
                        Cell::from(text).style(theme.health_style(*health))
                    }
                    _ => Cell::from(text),
                })
                .collect();
            Row::new(row_cells).style(row_style)
        })
        .collect();

    let widget = Table::new(rows, constraints)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .style(Style::default())
        .block(super::helpers::create_themed_block(&title, theme));
    f.render_widget(widget, area);
}
