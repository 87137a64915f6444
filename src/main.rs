//! Patient Registration TUI - Terminal User Interface for registering patients
//!
//! A Ratatui-based form that validates demographics and contact details
//! and stores each registered patient through a registry client.

mod app;
mod config;
mod error;
mod platform;
mod registry;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::RegistrationConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use registry::LocalRegistry;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "patient_registration_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let registry = build_registry()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(Box::new(registry)).await;
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Build the local registry from the user configuration.
/// A location uuid is generated and persisted on first start.
fn build_registry() -> Result<LocalRegistry> {
    let mut config = RegistrationConfig::load()?;
    if config.location_uuid.is_none() {
        let location = Uuid::new_v4().to_string();
        tracing::info!("No location configured, using new location {location}");
        config.location_uuid = Some(location);
        if let Err(e) = config.save() {
            tracing::warn!("Failed to save config: {e}");
        }
    }

    let data_dir = config.resolved_data_dir();
    tracing::info!("Storing patients under {}", data_dir.display());
    Ok(LocalRegistry::new(
        config.location_uuid.clone(),
        config.identifier_prefix(),
        data_dir,
    ))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key).await?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
