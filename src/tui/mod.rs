//! TUI module
//!
//! The k9s-style terminal interface over the fleet views. Built with ratatui.

pub mod app;
mod theme;
pub mod views;

pub use app::*;
pub use theme::*;

use crate::services::FleetService;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the TUI application
pub async fn run_tui(service: Arc<FleetService>, mut app: App) -> Result<()> {
    tracing::debug!("Initializing TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &service, &mut app).await;

    tracing::debug!("TUI shutting down");

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    service: &Arc<FleetService>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Some(request) = app.trigger_refresh(Instant::now()) {
            tracing::debug!("Fetching {} table", request.view);
            let service = Arc::clone(service);
            tokio::spawn(async move {
                let result = service.table(request.view, &request.ctx).await;
                let _ = request.tx.send(result);
            });
        }

        if app.try_get_fetch_result() {
            terminal.draw(|f| app.render(f))?;
        }

        // Handle input events without blocking the runtime
        let ready = tokio::task::block_in_place(|| event::poll(POLL_INTERVAL))?;
        if ready {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) == Some(true) {
                    break;
                }
            }
        }
    }

    Ok(())
}
