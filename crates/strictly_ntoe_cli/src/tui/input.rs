//! Keyboard handling for the terminal UI.

use crossterm::event::KeyCode;
use strictly_ntoe::Position;

/// What a key press means to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Arrow key: move the cursor.
    Cursor(KeyCode),
    /// Place a token under the cursor.
    Select,
    /// Leave the game.
    Quit,
    /// Any other character (replay answers).
    Char(char),
    /// Nothing to do.
    Ignore,
}

/// Maps a key code to an action.
pub fn key_action(code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => KeyAction::Cursor(code),
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Select,
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char(c) => KeyAction::Char(c),
        _ => KeyAction::Ignore,
    }
}

/// Moves cursor based on arrow keys, staying inside a `size` x `size` grid.
pub fn move_cursor(cursor: Position, key: KeyCode, size: usize) -> Position {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Up => Position::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Position::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Left => Position::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Position::new(cursor.row, (cursor.col + 1).min(last)),
        // No change for other keys
        _ => cursor,
    }
}

/// Cell the cursor starts on: the centre (upper-left of centre on even boards).
pub fn home(size: usize) -> Position {
    let mid = size.saturating_sub(1) / 2;
    Position::new(mid, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        let start = Position::new(1, 1);
        assert_eq!(move_cursor(start, KeyCode::Up, 3), Position::new(0, 1));
        assert_eq!(move_cursor(start, KeyCode::Down, 3), Position::new(2, 1));
        assert_eq!(move_cursor(start, KeyCode::Left, 3), Position::new(1, 0));
        assert_eq!(move_cursor(start, KeyCode::Right, 3), Position::new(1, 2));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::new(0, 0), KeyCode::Up, 4), Position::new(0, 0));
        assert_eq!(move_cursor(Position::new(0, 0), KeyCode::Left, 4), Position::new(0, 0));
        assert_eq!(move_cursor(Position::new(3, 3), KeyCode::Down, 4), Position::new(3, 3));
        assert_eq!(move_cursor(Position::new(3, 3), KeyCode::Right, 4), Position::new(3, 3));
        assert_eq!(move_cursor(Position::new(2, 2), KeyCode::Tab, 4), Position::new(2, 2));
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(key_action(KeyCode::Enter), KeyAction::Select);
        assert_eq!(key_action(KeyCode::Char(' ')), KeyAction::Select);
        assert_eq!(key_action(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(key_action(KeyCode::Esc), KeyAction::Quit);
        assert_eq!(key_action(KeyCode::Char('y')), KeyAction::Char('y'));
        assert_eq!(key_action(KeyCode::Left), KeyAction::Cursor(KeyCode::Left));
        assert_eq!(key_action(KeyCode::F(1)), KeyAction::Ignore);
    }

    #[test]
    fn test_home_is_central() {
        assert_eq!(home(3), Position::new(1, 1));
        assert_eq!(home(4), Position::new(1, 1));
        assert_eq!(home(5), Position::new(2, 2));
    }
}
