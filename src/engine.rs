//! Puzzle engine: the interaction state machine over the board.
//!
//! The engine owns the board and enforces the interaction rules: clicks
//! are ignored while a shuffle runs or after a solve, and completion is
//! only ever reported for player moves. Observers receive one event per
//! applied tile shift plus a single completion event per solve, so a
//! renderer and the tests can watch the same engine.

use crate::board::Board;
use crate::move_logic::{can_move, resolve_chain, Shift};
use crate::shuffle_logic;
use rand::Rng;

/// Engine interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Accepting clicks.
    Idle,
    /// A shuffle is in progress; clicks are ignored.
    Shuffling,
    /// The player completed the puzzle; clicks are ignored until a reset
    /// or the next shuffle.
    Solved,
}

type ShiftObserver = Box<dyn FnMut(&Shift)>;
type SolvedObserver = Box<dyn FnMut()>;

/// Sliding puzzle engine.
pub struct PuzzleEngine {
    board: Board,
    state: EngineState,
    shift_observers: Vec<ShiftObserver>,
    solved_observers: Vec<SolvedObserver>,
}

impl PuzzleEngine {
    /// Create an engine with a fresh solved board of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            state: EngineState::Idle,
            shift_observers: Vec::new(),
            solved_observers: Vec::new(),
        }
    }

    /// The board, for rendering and inspection.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Board-level solved predicate.
    ///
    /// True for a fresh engine; the `Solved` engine state is only entered
    /// by a click that completes the puzzle.
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Register an observer fired once per applied tile shift.
    pub fn on_shift(&mut self, observer: impl FnMut(&Shift) + 'static) {
        self.shift_observers.push(Box::new(observer));
    }

    /// Register an observer fired exactly once per solve.
    pub fn on_solved(&mut self, observer: impl FnMut() + 'static) {
        self.solved_observers.push(Box::new(observer));
    }

    /// Handle a click on the cell (x, y).
    ///
    /// Returns true when a move was applied. Clicks are silently ignored
    /// while shuffling, after a solve, and for cells outside the empty
    /// cell's row and column. Out-of-range coordinates are a caller bug.
    pub fn click_cell(&mut self, x: usize, y: usize) -> bool {
        let size = self.board.size();
        assert!(
            x < size && y < size,
            "click ({}, {}) out of bounds for a {}x{} board",
            x,
            y,
            size,
            size
        );

        if self.state != EngineState::Idle {
            return false;
        }
        let (empty_x, empty_y) = self.board.empty_coords();
        if !can_move(x, y, empty_x, empty_y) {
            return false;
        }

        self.apply_chain(x, y);
        if self.board.is_solved() {
            self.state = EngineState::Solved;
            for observer in &mut self.solved_observers {
                observer();
            }
        }
        true
    }

    /// Scramble the board with random single-tile moves.
    ///
    /// Completion is never evaluated while shuffling: a walk that passes
    /// through or ends on the solved layout stays unreported. Shuffling
    /// out of the `Solved` state starts the next round; a re-entrant call
    /// during a shuffle is ignored.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        if self.state == EngineState::Shuffling {
            return;
        }
        self.state = EngineState::Shuffling;
        shuffle_logic::scramble(self, rng);
        self.state = EngineState::Idle;
    }

    /// Reconstruct a fresh solved board in the `Idle` state.
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.size());
        self.state = EngineState::Idle;
    }

    /// Apply the resolved chain for a click at (x, y), notifying shift
    /// observers after each step.
    pub(crate) fn apply_chain(&mut self, x: usize, y: usize) {
        let (empty_x, empty_y) = self.board.empty_coords();
        for shift in resolve_chain(x, y, empty_x, empty_y) {
            self.board.apply_shift(&shift);
            for observer in &mut self.shift_observers {
                observer(&shift);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_fresh_engine_is_solved_and_interactive() {
        let engine = PuzzleEngine::new(4);
        assert!(engine.is_solved());
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_click_applies_move_and_unsolves() {
        let mut engine = PuzzleEngine::new(4);

        assert!(engine.click_cell(3, 1));
        assert!(!engine.is_solved());
        assert_eq!(engine.board().empty_coords(), (3, 1));
        // Tiles slid down into the vacated cells
        assert_eq!(engine.board().at(3, 2), Some(8));
        assert_eq!(engine.board().at(3, 3), Some(12));
    }

    #[test]
    fn test_illegal_click_is_a_no_op() {
        let mut engine = PuzzleEngine::new(4);
        let before = engine.board().clone();

        assert!(!engine.click_cell(1, 1));
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_click_on_empty_cell_is_a_no_op() {
        let mut engine = PuzzleEngine::new(4);
        let before = engine.board().clone();

        assert!(!engine.click_cell(3, 3));
        assert_eq!(engine.board(), &before);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_click_out_of_range_panics() {
        let mut engine = PuzzleEngine::new(4);
        engine.click_cell(4, 0);
    }

    #[test]
    fn test_shift_observer_sees_every_step() {
        let mut engine = PuzzleEngine::new(4);
        let shifts = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&shifts);
        engine.on_shift(move |shift| log.borrow_mut().push(*shift));

        // Same column, three cells away: three shifts in hole order
        engine.click_cell(3, 0);

        let shifts = shifts.borrow();
        assert_eq!(shifts.len(), 3);
        assert_eq!((shifts[0].from_x, shifts[0].from_y), (3, 2));
        assert_eq!((shifts[0].to_x, shifts[0].to_y), (3, 3));
        assert_eq!((shifts[2].from_x, shifts[2].from_y), (3, 0));
        assert_eq!(engine.board().empty_coords(), (3, 0));
    }

    #[test]
    fn test_solved_event_fires_exactly_once() {
        let mut engine = PuzzleEngine::new(2);
        let solves = Rc::new(RefCell::new(0u32));
        let count = Rc::clone(&solves);
        engine.on_solved(move || *count.borrow_mut() += 1);

        // One move out, the inverse move back in
        assert!(engine.click_cell(0, 1));
        assert_eq!(*solves.borrow(), 0);
        assert!(engine.click_cell(1, 1));

        assert_eq!(*solves.borrow(), 1);
        assert_eq!(engine.state(), EngineState::Solved);
    }

    #[test]
    fn test_clicks_ignored_after_solve() {
        let mut engine = PuzzleEngine::new(2);
        engine.click_cell(0, 1);
        engine.click_cell(1, 1);
        assert_eq!(engine.state(), EngineState::Solved);

        let before = engine.board().clone();
        assert!(!engine.click_cell(0, 1));
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_multiple_observers_all_fire() {
        let mut engine = PuzzleEngine::new(2);
        let first = Rc::new(RefCell::new(0u32));
        let second = Rc::new(RefCell::new(0u32));
        let a = Rc::clone(&first);
        let b = Rc::clone(&second);
        engine.on_solved(move || *a.borrow_mut() += 1);
        engine.on_solved(move || *b.borrow_mut() += 1);

        engine.click_cell(0, 1);
        engine.click_cell(1, 1);

        assert_eq!(*first.borrow(), 1);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn test_reset_restores_fresh_board() {
        let mut engine = PuzzleEngine::new(4);
        let mut rng = StdRng::seed_from_u64(7);
        engine.shuffle(&mut rng);

        engine.reset();

        assert!(engine.is_solved());
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.board().empty_coords(), (3, 3));
    }

    #[test]
    fn test_shuffle_never_reports_completion() {
        // On a 2x2 board a 1000-step random walk necessarily revisits the
        // solved layout, so this would fire if completion were evaluated
        let mut engine = PuzzleEngine::new(2);
        let solves = Rc::new(RefCell::new(0u32));
        let count = Rc::clone(&solves);
        engine.on_solved(move || *count.borrow_mut() += 1);

        let mut rng = StdRng::seed_from_u64(42);
        engine.shuffle(&mut rng);

        assert_eq!(*solves.borrow(), 0);
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_shuffle_leaves_engine_clickable() {
        let mut engine = PuzzleEngine::new(4);
        let mut rng = StdRng::seed_from_u64(3);
        engine.shuffle(&mut rng);

        let (empty_x, empty_y) = engine.board().empty_coords();
        let target_x = if empty_x == 0 { 1 } else { empty_x - 1 };
        assert!(engine.click_cell(target_x, empty_y));
    }

    #[test]
    fn test_shuffle_from_solved_state_starts_next_round() {
        let mut engine = PuzzleEngine::new(2);
        engine.click_cell(0, 1);
        engine.click_cell(1, 1);
        assert_eq!(engine.state(), EngineState::Solved);

        let mut rng = StdRng::seed_from_u64(11);
        engine.shuffle(&mut rng);
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_move_is_self_inverse() {
        let mut engine = PuzzleEngine::new(4);
        let fresh = engine.board().clone();

        // Slide two tiles down, then click the old empty cell to undo
        engine.click_cell(3, 1);
        engine.click_cell(3, 3);

        // Undoing lands back on the solved layout, which is a solve
        assert_eq!(engine.board(), &fresh);
        assert!(engine.is_solved());
    }
}
