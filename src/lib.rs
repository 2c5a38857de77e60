//! Fifteen - terminal sliding-tile puzzle.
//!
//! This module exposes the puzzle engine for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod board;
pub mod build_info;
pub mod clock;
pub mod constants;
pub mod engine;
pub mod game_state;
pub mod input;
pub mod move_logic;
pub mod shuffle_logic;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
