//! A terminal page with rubber-band overscroll.
//!
//! Wheel or drag past the top or bottom of the page and it stretches, then
//! relaxes back once you let go.  Run with a file path to page through that
//! file instead of the built-in sample.

mod app;
mod config;
mod core;
mod ui;

use std::fs::File;
use std::io::{self, stderr};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::{Instant as TokioInstant, MissedTickBehavior};

use crate::app::{
    document::Document,
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::core::Profile;
use crate::ui::screen;

/// Frame cadence while anything is moving.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Rubber-band overscroll for a terminal page")]
struct Cli {
    /// Text file to display (defaults to a built-in sample page).
    path: Option<PathBuf>,

    /// Device profile: default, standard or constrained.
    #[arg(long)]
    profile: Option<Profile>,

    /// Largest pull distance, in pull units (16 per row by default).
    #[arg(long = "max-pull")]
    max_pull: Option<f64>,

    /// Divisor applied to drag movement.
    #[arg(long)]
    damping: Option<f64>,

    /// Fraction of the pull kept per relaxation frame, in (0, 1).
    #[arg(long)]
    decay: Option<f64>,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr) // never pollute stdout
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    // ── configuration: defaults < config file < flags ─────────
    let (mut user_config, warnings) = config::AppConfig::load();
    for w in &warnings {
        tracing::warn!("config: {w}");
    }
    user_config.session = config::SessionOverrides {
        profile: cli.profile,
        max_pull_distance: cli.max_pull,
        damping_factor: cli.damping,
        decay_rate: cli.decay,
    };

    let mut status = warnings.first().cloned();
    let pull = match user_config.pull_config() {
        Ok(pull) => pull,
        Err(e) => {
            let profile = user_config.active_profile();
            tracing::warn!("{e}; using {profile} profile values");
            status = Some(format!("{e} (using {profile} profile)"));
            user_config.clear_overrides();
            profile.config()
        }
    };

    let document = Document::load(cli.path.as_deref())?;
    let mut state = AppState::new(document, user_config, pull);
    state.status_message = status;

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── async channels ────────────────────────────────────────
    let mut events = spawn_event_reader(Duration::from_millis(100));
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // ── event loop ────────────────────────────────────────────
    loop {
        // Fire whatever came due while we were blocked, then draw.
        state.advance();
        terminal.draw(|frame| screen::draw(frame, &mut state))?;

        let deadline = state.engine.next_deadline();
        let wake = TokioInstant::from_std(state.epoch + deadline.unwrap_or_default());
        let animating = state.needs_frames();

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize(w, h) => tracing::trace!(w, h, "resize"),
                }
            }

            _ = tokio::time::sleep_until(wake), if deadline.is_some() => {}

            _ = frames.tick(), if animating => state.on_frame(),

            else => break,
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    state.engine.unmount();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
