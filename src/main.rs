//! S.V. CONCRETE inquiry - terminal quotation-request form
//!
//! A Ratatui front end for the contact form: validates the customer's name,
//! phone and email, sends the inquiry through a configurable sink and shows
//! a confirmation once it has been accepted.

mod app;
mod config;
mod controller;
mod i18n;
mod platform;
mod sink;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::InquiryConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "concrete-inquiry.log";

#[tokio::main]
async fn main() -> Result<()> {
    // The terminal is in raw mode, so logs go to a file
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "concrete_inquiry=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    let config = InquiryConfig::load()?;
    let sink = sink::from_config(&config);
    tracing::info!(sink = sink.name(), locale = ?config.locale(), "Starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.locale(), sink);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Let an in-flight submission land before exiting
    app.controller.wait_for_submission().await;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log file in the data directory, or nowhere when there is none
fn log_writer() -> BoxMakeWriter {
    let file = InquiryConfig::data_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
            .ok()
    });
    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::sink),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while a submission is in flight (16ms = ~60fps)
        let poll_duration = if app.is_busy() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(_width, _height) => {
                    // Redrawn on the next pass
                }
                _ => {}
            }
        }

        app.tick().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
