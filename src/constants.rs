// Board sizing constants
pub const DEFAULT_BOARD_SIZE: usize = 4;
pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 8;

// Shuffling constants
pub const SHUFFLE_MOVES: u32 = 1000;
