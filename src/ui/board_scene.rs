//! Puzzle board UI rendering.

use crate::clock::format_elapsed;
use crate::engine::EngineState;
use crate::game_state::GameState;
use crate::move_logic::{can_move, resolve_chain};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the puzzle scene: board on the left, info panel on the right.
pub fn render_board_scene(frame: &mut Frame, area: Rect, state: &GameState) {
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Board area
            Constraint::Length(26), // Info panel
        ])
        .split(area);

    render_board(frame, chunks[0], state);
    render_info_panel(frame, chunks[1], state);

    if state.solved() {
        render_solved_overlay(frame, chunks[0], state);
    }
}

/// Render the tile grid.
fn render_board(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .title(" Puzzle ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = state.engine.board();
    let size = board.size();

    // Each tile is 4 chars wide, 1 char tall
    let grid_width = (size * 4) as u16;
    let grid_height = size as u16;

    // Center the grid in available space
    let x_offset = inner.x + (inner.width.saturating_sub(grid_width)) / 2;
    let y_offset = inner.y + (inner.height.saturating_sub(grid_height)) / 2;

    let chain_cells = pending_chain_cells(state);

    for y in 0..size {
        let mut spans = Vec::new();

        for x in 0..size {
            let text = match board.at(x, y) {
                Some(tile) => format!("{:>3} ", tile),
                None => "  . ".to_string(),
            };

            let mut style = Style::default().fg(Color::White);
            if chain_cells.contains(&(x, y)) {
                // Tiles this click would slide, like the hover highlight
                style = style.fg(Color::Cyan);
            }
            if state.recent_shifts.contains(&(x, y)) {
                style = style.fg(Color::Yellow);
            }
            if state.cursor == (x, y) && !state.solved() {
                style = style.bg(Color::DarkGray);
            }

            spans.push(Span::styled(text, style));
        }

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(x_offset, y_offset + y as u16, grid_width, 1),
        );
    }
}

/// Cells the current cursor click would slide, when it is a legal move.
fn pending_chain_cells(state: &GameState) -> Vec<(usize, usize)> {
    if state.engine.state() != EngineState::Idle {
        return Vec::new();
    }
    let (x, y) = state.cursor;
    let (empty_x, empty_y) = state.engine.board().empty_coords();
    if !can_move(x, y, empty_x, empty_y) {
        return Vec::new();
    }
    resolve_chain(x, y, empty_x, empty_y)
        .iter()
        .map(|shift| (shift.from_x, shift.from_y))
        .collect()
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = state.engine.board();

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Fifteen",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Board: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}x{}", board.size(), board.size()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Time: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_elapsed(state.clock.elapsed_seconds()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
    ];

    let status = if state.solved() {
        Span::styled("Solved!", Style::default().fg(Color::Green))
    } else if state.clock.is_running() {
        Span::styled("Sliding...", Style::default().fg(Color::Cyan))
    } else {
        Span::styled("Press S to scramble", Style::default().fg(Color::Yellow))
    };
    lines.push(Line::from(status));
    lines.push(Line::from(""));

    for help in [
        "[Arrows] Move cursor",
        "[Enter] Slide tiles",
        "[S] Shuffle",
        "[N] New board",
        "[Q] Quit",
    ] {
        lines.push(Line::from(Span::styled(
            help,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

/// Render the completion overlay, centered on the board area.
fn render_solved_overlay(frame: &mut Frame, area: Rect, state: &GameState) {
    let width = 36;
    let height = 6;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let lines = vec![
        Line::from(Span::styled(
            "Congratulations!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "You've solved the puzzle",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("in {}", format_elapsed(state.clock.elapsed_seconds())),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "[S] Play again",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
