//! Roster - terminal browser for an employee and job directory.

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use miette::{IntoDiagnostic, Result};
use ratatui::prelude::*;
use roster_browser::App;
use roster_browser::ui::Theme;
use roster_cli::Args;
use roster_store::{DataStore, Directory};
use std::io;
use std::time::Duration;
use tracing::error;

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(&args)?;

    // Load the directory snapshot. A broken store is logged and degrades
    // to an empty, renderable dataset.
    let store = DataStore::new(args.dir.clone());
    let directory = match store.load() {
        Ok(directory) => directory,
        Err(err) => {
            error!(%err, dir = %store.dir(), "failed to load data store");
            Directory::default()
        }
    };

    let mut app = App::new(directory, Theme::by_name(&args.theme), args.dir.as_str());

    // Setup terminal
    enable_raw_mode().into_diagnostic()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).into_diagnostic()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).into_diagnostic()?;

    // Run the main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().into_diagnostic()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .into_diagnostic()?;
    terminal.show_cursor().into_diagnostic()?;

    // Handle result
    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Route tracing output to the optional log file; without one, events
/// are dropped so they never scribble over the TUI.
fn init_tracing(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .into_diagnostic()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    io::Error: From<B::Error>,
{
    let tick_rate = Duration::from_millis(100);

    loop {
        // Draw UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        app.poll_events(tick_rate)?;

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
