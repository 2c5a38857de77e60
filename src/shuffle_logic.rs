//! Board scrambling via a random walk of single-tile moves.
//!
//! Shuffling only ever moves a tile orthogonally adjacent to the hole,
//! even though a click accepts any cell in the hole's row or column.
//! Every step is a legal move from the solved layout, so every shuffled
//! board stays solvable.

use crate::board::Board;
use crate::constants::SHUFFLE_MOVES;
use crate::engine::PuzzleEngine;
use rand::seq::SliceRandom;
use rand::Rng;

/// Cells orthogonally adjacent to the empty cell, clipped at the board
/// edges. Always 2 to 4 cells.
pub fn movable_neighbors(board: &Board) -> Vec<(usize, usize)> {
    let (empty_x, empty_y) = board.empty_coords();
    let size = board.size() as i32;
    let mut neighbors = Vec::with_capacity(4);

    for (d_x, d_y) in [(0i32, -1i32), (0, 1), (-1, 0), (1, 0)] {
        let n_x = empty_x as i32 + d_x;
        let n_y = empty_y as i32 + d_y;
        if n_x >= 0 && n_x < size && n_y >= 0 && n_y < size {
            neighbors.push((n_x as usize, n_y as usize));
        }
    }

    neighbors
}

/// Apply `SHUFFLE_MOVES` uniformly random neighbor moves through the
/// engine's normal mutation path.
pub(crate) fn scramble<R: Rng>(engine: &mut PuzzleEngine, rng: &mut R) {
    for _ in 0..SHUFFLE_MOVES {
        let neighbors = movable_neighbors(engine.board());
        // A board of size >= 2 always has at least two neighbors
        let &(x, y) = neighbors
            .choose(rng)
            .expect("empty cell always has movable neighbors");
        engine.apply_chain(x, y);
    }
}
