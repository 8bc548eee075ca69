//! Tests for navigation flow consistency
//!
//! Ensures that navigation between views is consistent and users never get
//! stuck: Esc always returns to where the user came from, and every view
//! fetches with the right request context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fleet9s::config::Config;
use fleet9s::render::{Field, Header, HeaderColumn, Health, Row, TableView};
use fleet9s::services::FleetView;
use fleet9s::store::NamespaceScope;
use fleet9s::tui::{App, Theme};
use std::time::{Duration, Instant};

fn create_test_app() -> App {
    App::new(
        "test-context".to_string(),
        "test-context".to_string(),
        NamespaceScope::All,
        Some("team=edge".to_string()),
        Config::default(),
        Theme::default(),
    )
}

fn table(ids: &[&str]) -> TableView {
    TableView {
        header: Header(vec![HeaderColumn::text("NAME")]),
        rows: ids
            .iter()
            .map(|id| Row {
                id: id.to_string(),
                fields: vec![Field::text(*id)],
                health: Health::Nominal,
            })
            .collect(),
    }
}

fn press(app: &mut App, code: KeyCode) {
    assert_eq!(app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)), None);
}

#[test]
fn test_enter_opens_manifests_of_selected_application() {
    let mut app = create_test_app();
    app.set_table(table(&["shop/web", "jobs/batch"]));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current_view(), FleetView::Manifests);
    assert_eq!(app.path(), Some("jobs/batch"));
    assert_eq!(app.history_depth(), 1);
    // The previous table is not shown for the new view
    assert!(app.table().is_none());
}

#[test]
fn test_esc_restores_list_and_selection() {
    let mut app = create_test_app();
    app.set_table(table(&["shop/web", "jobs/batch", "ops/cron"]));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.current_view(), FleetView::ApplicationStatus);
    assert_eq!(app.path(), Some("ops/cron"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_view(), FleetView::Applications);
    assert_eq!(app.path(), None);
    assert_eq!(app.selected_index(), 2);

    // Esc at the bottom of the stack stays put
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_view(), FleetView::Applications);
}

#[test]
fn test_manifests_to_status_to_esc() {
    // List -> Manifests -> Status -> Esc -> Esc returns to the list
    let mut app = create_test_app();
    app.set_table(table(&["shop/web"]));

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.current_view(), FleetView::ApplicationStatus);
    assert_eq!(app.path(), Some("shop/web"));
    assert_eq!(app.history_depth(), 2);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_view(), FleetView::Manifests);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_view(), FleetView::Applications);
}

#[test]
fn test_enter_on_empty_list_does_nothing() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_view(), FleetView::Applications);

    app.set_table(table(&[]));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_view(), FleetView::Applications);
    assert_eq!(app.history_depth(), 0);
}

#[test]
fn test_top_level_switch_clears_history() {
    let mut app = create_test_app();
    app.set_table(table(&["shop/web"]));
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.current_view(), FleetView::Clusters);
    assert_eq!(app.history_depth(), 0);
    assert_eq!(app.path(), None);

    // Enter means nothing on clusters
    app.set_table(table(&["-/edge-1"]));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_view(), FleetView::Clusters);

    press(&mut app, KeyCode::Char('w'));
    assert_eq!(app.current_view(), FleetView::ManifestWorks);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.current_view(), FleetView::Applications);
}

#[test]
fn test_fetch_request_carries_context() {
    let mut app = create_test_app();
    let start = Instant::now();

    let request = app.trigger_refresh(start).expect("first fetch is due");
    assert_eq!(request.view, FleetView::Applications);
    assert_eq!(request.ctx.path(), None);
    assert_eq!(request.ctx.selector().to_string(), "team=edge");

    // One fetch at a time
    assert!(app.trigger_refresh(start).is_none());
    request.tx.send(Ok(table(&["shop/web"]))).unwrap();
    assert!(app.try_get_fetch_result());
    assert_eq!(app.table().map(TableView::len), Some(1));

    press(&mut app, KeyCode::Enter);
    let request = app.trigger_refresh(start).expect("navigation fetches at once");
    assert_eq!(request.view, FleetView::Manifests);
    assert_eq!(request.ctx.path(), Some("shop/web"));
}

#[test]
fn test_navigation_cancels_fetch_in_flight() {
    let mut app = create_test_app();
    app.set_table(table(&["shop/web"]));
    let request = app.trigger_refresh(Instant::now()).unwrap();
    assert!(!request.ctx.is_cancelled());

    press(&mut app, KeyCode::Char('c'));
    assert!(request.ctx.is_cancelled());
    // A late result for the old view is dropped
    let _ = request.tx.send(Ok(table(&["x", "y"])));
    assert!(!app.try_get_fetch_result());
    assert!(app.table().is_none());
}

#[test]
fn test_refresh_intervals_per_view() {
    let mut app = create_test_app();
    app.set_table(table(&["shop/web"]));
    assert_eq!(app.refresh_interval(), Duration::from_secs(2));

    let start = Instant::now();
    let request = app.trigger_refresh(start).unwrap();
    request.tx.send(Ok(table(&["shop/web"]))).unwrap();
    app.try_get_fetch_result();
    assert!(!app.refresh_due(start + Duration::from_secs(1)));
    assert!(app.refresh_due(start + Duration::from_secs(2)));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.refresh_interval(), Duration::from_secs(600));
    let request = app.trigger_refresh(start).unwrap();
    request.tx.send(Ok(table(&[]))).unwrap();
    app.try_get_fetch_result();
    assert!(!app.refresh_due(start + Duration::from_secs(60)));

    // r forces a refresh
    press(&mut app, KeyCode::Char('r'));
    assert!(app.refresh_due(start + Duration::from_secs(60)));
}

#[test]
fn test_fetch_error_keeps_app_usable() {
    let mut app = create_test_app();
    let request = app.trigger_refresh(Instant::now()).unwrap();
    request
        .tx
        .send(Err(fleet9s::FleetError::decode("Application", "bad")))
        .unwrap();

    assert!(app.try_get_fetch_result());
    let (message, is_error) = app.status_message().cloned().unwrap();
    assert!(is_error);
    assert!(message.contains("failed to decode Application"));
    assert_eq!(app.current_view(), FleetView::Applications);
}
