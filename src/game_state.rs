//! Application state for the puzzle screen.
//!
//! Owns the engine plus everything the renderer needs that is not engine
//! state: the cursor, the timer, and the cells that moved last so the
//! scene can flash them. Engine events arrive through observers and are
//! drained here after each player action.

use crate::clock::GameClock;
use crate::engine::PuzzleEngine;
use crate::move_logic::Shift;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

pub struct GameState {
    pub engine: PuzzleEngine,
    /// Cursor position (x, y); stands in for the pointer.
    pub cursor: (usize, usize),
    pub clock: GameClock,
    /// Destination cells of the last player move, for the move flash.
    pub recent_shifts: Vec<(usize, usize)>,
    shift_log: Rc<RefCell<Vec<Shift>>>,
    solved_flag: Rc<RefCell<bool>>,
}

impl GameState {
    pub fn new(size: usize) -> Self {
        let mut engine = PuzzleEngine::new(size);

        let shift_log = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&shift_log);
        engine.on_shift(move |shift| log.borrow_mut().push(*shift));

        let solved_flag = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&solved_flag);
        engine.on_solved(move || *flag.borrow_mut() = true);

        Self {
            engine,
            cursor: (0, 0),
            clock: GameClock::new(),
            recent_shifts: Vec::new(),
            shift_log,
            solved_flag,
        }
    }

    /// Move the cursor, clamping to the board.
    pub fn move_cursor(&mut self, d_x: i32, d_y: i32) {
        let max = self.engine.board().size() as i32 - 1;
        let x = (self.cursor.0 as i32 + d_x).clamp(0, max) as usize;
        let y = (self.cursor.1 as i32 + d_y).clamp(0, max) as usize;
        self.cursor = (x, y);
    }

    /// Forward the cursor cell to the engine as a click.
    pub fn activate_cursor(&mut self) {
        let (x, y) = self.cursor;
        if self.engine.click_cell(x, y) {
            self.drain_events();
        }
    }

    /// Scramble the board and restart the timer.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.engine.shuffle(rng);
        // Shuffle shifts are not player moves; they don't flash
        self.shift_log.borrow_mut().clear();
        self.recent_shifts.clear();
        *self.solved_flag.borrow_mut() = false;
        self.clock.start();
    }

    /// Back to a fresh solved board with the timer cleared.
    pub fn new_game(&mut self) {
        self.engine.reset();
        self.shift_log.borrow_mut().clear();
        self.recent_shifts.clear();
        *self.solved_flag.borrow_mut() = false;
        self.clock = GameClock::new();
    }

    /// True once the engine has reported completion for this round.
    pub fn solved(&self) -> bool {
        *self.solved_flag.borrow()
    }

    /// Pull queued engine events into renderable state.
    fn drain_events(&mut self) {
        let shifts: Vec<Shift> = self.shift_log.borrow_mut().drain(..).collect();
        if !shifts.is_empty() {
            self.recent_shifts = shifts.iter().map(|s| (s.to_x, s.to_y)).collect();
        }
        if *self.solved_flag.borrow() {
            self.clock.stop();
        }
    }
}
