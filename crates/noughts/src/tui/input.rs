//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// Moves the cursor one cell for an arrow key; edges and other keys leave it.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Up => cursor.step(-1, 0),
        KeyCode::Down => cursor.step(1, 0),
        KeyCode::Left => cursor.step(0, -1),
        KeyCode::Right => cursor.step(0, 1),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }
}
