//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

pub use app::{App, Control, ViewCache, mode_label, next_mode};
pub use input::move_cursor;

use crate::config::GameConfig;
use crate::db::StatsRepository;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::RandomPicker;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

const LOG_FILE: &str = "noughts.log";
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the interactive game until the player quits.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    // Log to a file so the terminal stays clean
    let log_file = std::fs::File::create(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,noughts=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(mode = ?config.session_mode(), db_path = %config.db_path(), "Starting noughts TUI");

    let store = StatsRepository::open(config.db_path().clone())?;
    let picker = match config.seed() {
        Some(seed) => RandomPicker::seeded(*seed),
        None => RandomPicker::from_os(),
    };
    let mut app = App::new(
        config.session_mode(),
        picker,
        store,
        Duration::from_millis(*config.thinking_delay_ms()),
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(stats = %app.stats(), "TUI exited");
    res
}

#[instrument(skip_all)]
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<StatsRepository>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;
        app.tick(Instant::now());

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}
