mod board;
mod build_info;
mod clock;
mod constants;
mod engine;
mod game_state;
mod input;
mod move_logic;
mod shuffle_logic;
mod ui;

use constants::*;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game_state::GameState;
use input::{handle_key, InputResult};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut board_size = DEFAULT_BOARD_SIZE;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!(
                    "fifteen {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Fifteen - Terminal Sliding-Tile Puzzle\n");
                println!("Usage: fifteen [options]\n");
                println!("Options:");
                println!(
                    "  --size N   Board edge length ({}-{}, default {})",
                    MIN_BOARD_SIZE, MAX_BOARD_SIZE, DEFAULT_BOARD_SIZE
                );
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            "--size" => {
                i += 1;
                match args.get(i).and_then(|value| value.parse::<usize>().ok()) {
                    Some(n) if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n) => board_size = n,
                    _ => {
                        eprintln!(
                            "--size expects a number between {} and {}",
                            MIN_BOARD_SIZE, MAX_BOARD_SIZE
                        );
                        std::process::exit(1);
                    }
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'fifteen --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Terminal setup
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut state = GameState::new(board_size);
    let mut rng = rand::thread_rng();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &state))?;

        // Redraw at least every 50ms so the timer display keeps moving
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if handle_key(&mut state, key, &mut rng) == InputResult::Quit {
                    break;
                }
            }
        }
    }

    // Terminal teardown
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}
