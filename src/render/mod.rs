//! Table presentation
//!
//! Renderers turn views and typed records into ordered rows of display
//! fields plus a health classification. Rows carry no styling; the text
//! printer and the TUI decide how to show them.

pub mod application;
pub mod application_status;
pub mod cluster;
pub mod health;
pub mod manifest;
pub mod manifest_work;

pub use application::ApplicationRenderer;
pub use application_status::ApplicationStatusRenderer;
pub use cluster::ClusterRenderer;
pub use health::{Health, HealthScheme, classify};
pub use manifest::ManifestRenderer;
pub use manifest_work::ManifestWorkRenderer;

use chrono::{DateTime, Utc};

/// Ellipsis appended to truncated cells
pub const ELLIPSIS: char = '…';

/// Placeholder for an unknown age
pub const UNKNOWN_AGE: &str = "<unknown>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderColumn {
    pub name: String,
    /// Column holds a timestamp rendered as an age
    pub time: bool,
}

impl HeaderColumn {
    pub fn text(name: &str) -> Self {
        Self {
            name: name.to_string(),
            time: false,
        }
    }

    pub fn age() -> Self {
        Self {
            name: "AGE".to_string(),
            time: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header(pub Vec<HeaderColumn>);

impl Header {
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    /// A cell with its own health, e.g. the HEALTH column of clusters
    Status(String, Health),
    Age(Option<DateTime<Utc>>),
}

impl Field {
    pub fn text(value: impl Into<String>) -> Self {
        Field::Text(value.into())
    }

    /// Cell text, rendering ages relative to `now`
    pub fn display(&self, now: DateTime<Utc>) -> String {
        match self {
            Field::Text(s) | Field::Status(s, _) => s.clone(),
            Field::Age(Some(ts)) => format_age(*ts, now),
            Field::Age(None) => UNKNOWN_AGE.to_string(),
        }
    }

    pub fn health(&self) -> Option<Health> {
        match self {
            Field::Status(_, health) => Some(*health),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// `namespace/name`, or `-/name` for cluster-scoped rows
    pub id: String,
    pub fields: Vec<Field>,
    pub health: Health,
}

impl Row {
    pub fn display(&self, now: DateTime<Utc>) -> Vec<String> {
        self.fields.iter().map(|f| f.display(now)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableView {
    pub header: Header,
    pub rows: Vec<Row>,
}

impl TableView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }
}

/// Produces one fixed header and one row per item
pub trait TableRenderer {
    type Item;

    fn header(&self) -> Header;

    fn render(&self, item: &Self::Item) -> Row;

    fn table(&self, items: &[Self::Item]) -> TableView {
        TableView {
            header: self.header(),
            rows: items.iter().map(|item| self.render(item)).collect(),
        }
    }
}

/// Cut `value` to at most `width` characters, marking the cut with an ellipsis
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Human readable age: `42s`, `5m`, `3h`, `12d`
pub fn format_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(created);

    if duration.num_seconds() < 60 {
        format!("{}s", duration.num_seconds().max(0))
    } else if duration.num_minutes() < 60 {
        format!("{}m", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h", duration.num_hours())
    } else {
        format!("{}d", duration.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("edge-1,edge-2", 30), "edge-1,edge-2");
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abcd", 4), "abcd");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_format_age() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(format_age(now - Duration::seconds(42), now), "42s");
        assert_eq!(format_age(now - Duration::minutes(5), now), "5m");
        assert_eq!(format_age(now - Duration::hours(3), now), "3h");
        assert_eq!(format_age(now - Duration::days(12), now), "12d");
        assert_eq!(format_age(now + Duration::seconds(5), now), "0s");
    }

    #[test]
    fn test_field_display() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(Field::Age(None).display(now), "<unknown>");
        assert_eq!(
            Field::Status("Ready".into(), Health::Nominal).health(),
            Some(Health::Nominal)
        );
        assert_eq!(Field::text("x").health(), None);
    }
}
