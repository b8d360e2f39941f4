//! Application state and logic.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use noughts_core::{
    BoardView, DefaultPicker, InputEvent, Mark, Mode, Position, Renderer, Session, Stats,
    StatsStore, Transition,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Renderer that keeps the latest view the session pushed.
#[derive(Debug, Clone, Default)]
pub struct ViewCache {
    latest: Option<BoardView>,
}

impl ViewCache {
    /// Most recent view, if any has been pushed yet.
    pub fn latest(&self) -> Option<&BoardView> {
        self.latest.as_ref()
    }
}

impl Renderer for ViewCache {
    fn render(&mut self, view: &BoardView) {
        self.latest = Some(*view);
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App<S: StatsStore> {
    session: Session<DefaultPicker, S, ViewCache>,
    cursor: Position,
    message: Option<String>,
    thinking_delay: Duration,
    pending_since: Option<Instant>,
    stats: Stats,
}

impl<S: StatsStore> App<S> {
    /// Creates the application and starts the first round.
    #[instrument(skip(picker, store))]
    pub fn new(mode: Mode, picker: DefaultPicker, store: S, thinking_delay: Duration) -> Self {
        let stats = store.totals().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load stats");
            Stats::default()
        });
        let session = Session::new(mode, picker, store, ViewCache::default());
        let pending_since = session.is_opponent_pending().then(Instant::now);

        Self {
            session,
            cursor: Position::Center,
            message: None,
            thinking_delay,
            pending_since,
            stats,
        }
    }

    /// View to draw.
    pub fn view(&self) -> BoardView {
        self.session
            .renderer()
            .latest()
            .copied()
            .unwrap_or_else(|| self.session.snapshot())
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status text: the last rejection or result, else the view's status.
    pub fn status(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => self.view().status(),
        }
    }

    /// Cached cumulative stats.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// The underlying session.
    pub fn session(&self) -> &Session<DefaultPicker, S, ViewCache> {
        &self.session
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Char('r') => {
                let transition = self.session.handle(InputEvent::ResetRequested);
                self.message = None;
                self.after(transition);
            }
            KeyCode::Char('m') => {
                let mode = next_mode(self.session.mode());
                let transition = self.session.handle(InputEvent::ModeSelected(mode));
                self.message = Some(format!("Mode: {}", mode_label(mode)));
                self.after(transition);
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_label_or_number(&c.to_string()) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        Control::Continue
    }

    /// Applies the computer's move once it has "thought" long enough.
    pub fn tick(&mut self, now: Instant) {
        let Some(since) = self.pending_since else {
            return;
        };
        if now.duration_since(since) < self.thinking_delay {
            return;
        }
        let transition = self.session.play_opponent_turn();
        self.after(transition);
    }

    fn play(&mut self, pos: Position) {
        let transition = self.session.handle(InputEvent::MoveRequested(pos.to_index()));
        self.message = None;
        self.after(transition);
    }

    fn after(&mut self, transition: Result<Transition, noughts_core::MoveError>) {
        match transition {
            Ok(Transition::OpponentPending) => self.pending_since = Some(Instant::now()),
            Ok(Transition::Finished(outcome)) => {
                debug!(%outcome, "Round over");
                self.pending_since = None;
                self.refresh_stats();
                self.message = Some(format!("{} - press 'r' to play again", self.view().status()));
            }
            Ok(Transition::Continue { turn }) => {
                // Rejections and mode notes from the thinking phase are stale now.
                debug!(%turn, "Turn passed");
                self.pending_since = None;
                self.message = None;
            }
            Ok(Transition::RoundStarted) => self.pending_since = None,
            // A rejected keypress must not restart the computer's thinking time.
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn refresh_stats(&mut self) {
        match self.session.stats().totals() {
            Ok(stats) => self.stats = stats,
            Err(e) => warn!(error = %e, "Failed to refresh stats"),
        }
    }
}

/// Cycles vs-computer as X, vs-computer as O, two-player.
pub fn next_mode(mode: Mode) -> Mode {
    match mode {
        Mode::VsComputer { human: Mark::X } => Mode::VsComputer { human: Mark::O },
        Mode::VsComputer { human: Mark::O } => Mode::TwoPlayer,
        Mode::TwoPlayer => Mode::VsComputer { human: Mark::X },
    }
}

/// Short label for a mode.
pub fn mode_label(mode: Mode) -> String {
    match mode {
        Mode::TwoPlayer => "Two players".to_string(),
        Mode::VsComputer { human } => format!("You ({}) vs computer", human),
    }
}
