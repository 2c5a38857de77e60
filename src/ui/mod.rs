pub mod board_scene;

use crate::game_state::GameState;
use ratatui::Frame;

/// Main UI drawing function. The board scene owns the whole terminal.
pub fn draw_ui(frame: &mut Frame, state: &GameState) {
    let size = frame.size();
    board_scene::render_board_scene(frame, size, state);
}
