//! Terminal UI for Tower of Hanoi

#![warn(missing_docs)]

mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{App, SolveTick};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting Tower of Hanoi TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channel carrying playback timer ticks back to the event loop.
    let (tick_tx, tick_rx) = mpsc::unbounded_channel();

    let app = App::new(tick_tx);
    let res = run_app(&mut terminal, app, tick_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut tick_rx: mpsc::UnboundedReceiver<SolveTick>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Apply any playback steps whose delay has elapsed.
        while tick_rx.try_recv().is_ok() {
            app.on_tick();
        }

        // Check for keyboard input
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.shutdown();
                        return Ok(());
                    }
                    KeyCode::Char('r') => app.reset(),
                    KeyCode::Char('s') => app.auto_solve(),
                    KeyCode::Char(c @ '1'..='3') => {
                        app.click_rod(c as usize - '1' as usize);
                    }
                    _ => {}
                }
            }
        }
    }
}
