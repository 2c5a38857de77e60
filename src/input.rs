//! Keyboard handling for the puzzle screen.

use crate::game_state::GameState;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the event loop normally.
    Continue,
    /// Tear down the terminal and exit.
    Quit,
}

/// Dispatch a key event against the game state.
///
/// The cursor stands in for the pointer: arrows (or hjkl) move it and
/// Enter/Space forwards the cursor cell to the engine as a click. The
/// engine itself decides whether the click does anything.
pub fn handle_key<R: Rng>(state: &mut GameState, key: KeyEvent, rng: &mut R) -> InputResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(0, 1),
        KeyCode::Left | KeyCode::Char('h') => state.move_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => state.move_cursor(1, 0),
        KeyCode::Enter | KeyCode::Char(' ') => state.activate_cursor(),
        KeyCode::Char('s') => state.shuffle(rng),
        KeyCode::Char('n') => state.new_game(),
        _ => {}
    }
    InputResult::Continue
}
