//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, mode_label};
use noughts_core::{BoardView, Cell, Mark, Position, StatsStore};

const HELP: &str = "1-9 or arrows+Enter: move  r: new round  m: mode  q: quit";

/// Draws the whole screen for the current application state.
pub fn draw<S: StatsStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Stats
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(format!("Noughts & Crosses - {}", mode_label(view.mode)))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], &view, app.cursor());

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let stats = app.stats();
    let stats_text = format!("{}  |  Win rate: {:.1}%", stats, stats.win_rate());
    let stats_line = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .block(Block::default().title("Stats").borders(Borders::ALL));
    frame.render_widget(stats_line, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], view, cursor, positions);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &BoardView, cursor: Position, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, &pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], view, cursor, pos);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &BoardView, cursor: Position, pos: Position) {
    let index = pos.to_index();
    let label = (index + 1).to_string();

    let (symbol, base_style) = match view.board.get(index).unwrap_or_default() {
        Cell::Empty => (label, Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = view
        .winning_line
        .is_some_and(|line| line.contains(&index));

    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == cursor && view.outcome.is_none() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
