mod app;
mod auth;
mod config;
mod dashboard;
mod filter;
mod input;
mod logging;
mod notify;
mod records;
mod ui;
mod views;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::app::timer::TransitionScheduler;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let (cfg, config_error) = match config::load_config() {
        Ok(cfg) => (cfg, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };

    if std::env::args().skip(1).any(|arg| arg == "--write-config") {
        if let Some(e) = config_error {
            return Err(e);
        }
        let path = config::save_config(&cfg)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let log_guard = logging::init(&cfg.logging)?;
    if let Some(guard) = &log_guard {
        tracing::info!(dir = %guard.dir.display(), "logging to file");
    }

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg, config_error).await;

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "application error");
        eprintln!("Error: {}", e);
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    config_error: Option<anyhow::Error>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(1));
    let mut state = AppState::new(cfg);
    if let Some(e) = &config_error {
        state.report_config_error(e);
    }
    let mut scheduler = TransitionScheduler::new(event_tx.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    tracing::info!("talentdesk started");
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let Some(event) = event_rx.recv().await else {
            break;
        };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::Notify(notice) => {
                    state.notifications.push(notice, Instant::now());
                    state.dirty = true;
                }
                Action::ScheduleTransition { id, delay } => scheduler.schedule(id, delay),
                Action::CancelTransition { id } => scheduler.cancel(id),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            scheduler.cancel_all();
            tracing::info!("talentdesk exiting");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
