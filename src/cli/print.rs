//! Plain text table output for the one-shot commands

use crate::render::TableView;
use chrono::{DateTime, Utc};

const COLUMN_GAP: &str = "   ";

/// Lay out `table` as left-aligned columns, one line per row
pub fn format_table(table: &TableView, now: DateTime<Utc>) -> String {
    let mut lines: Vec<Vec<String>> = Vec::with_capacity(table.rows.len() + 1);
    lines.push(table.header.names().iter().map(|s| s.to_string()).collect());
    lines.extend(table.rows.iter().map(|row| row.display(now)));

    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for line in &lines {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in &lines {
        let mut text = String::new();
        for (i, cell) in line.iter().enumerate() {
            if i > 0 {
                text.push_str(COLUMN_GAP);
            }
            text.push_str(cell);
            let pad = widths[i] - cell.chars().count();
            text.extend(std::iter::repeat_n(' ', pad));
        }
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}

/// Print `table` to stdout
pub fn print_table(table: &TableView) {
    print!("{}", format_table(table, Utc::now()));
    if table.is_empty() {
        eprintln!("No resources found");
    }
}
