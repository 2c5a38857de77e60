//! Sliding puzzle board data model.
//!
//! The board is the single source of truth for tile positions. Cells are
//! addressed as (x, y) with (0, 0) in the top-left corner; the rendering
//! layer never stores positions of its own.

use crate::move_logic::Shift;

/// An N x N sliding puzzle board with a single empty cell.
///
/// Tiles are numbered 1..N*N-1 and each appears exactly once; the empty
/// cell is `None`. A freshly constructed board is in the solved layout
/// with the empty cell in the bottom-right corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Cell contents, indexed as cells[y][x].
    cells: Vec<Vec<Option<u16>>>,
    empty_x: usize,
    empty_y: usize,
}

impl Board {
    /// Create a solved board of the given size.
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "board size must be at least 2");

        let mut cells = vec![vec![None; size]; size];
        for y in 0..size {
            for x in 0..size {
                // Bottom-right corner stays empty
                if y == size - 1 && x == size - 1 {
                    continue;
                }
                cells[y][x] = Some((y * size + x + 1) as u16);
            }
        }

        Self {
            size,
            cells,
            empty_x: size - 1,
            empty_y: size - 1,
        }
    }

    /// Board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at (x, y), or `None` for the empty cell.
    ///
    /// Coordinates outside the board are a caller bug, not a runtime
    /// condition.
    pub fn at(&self, x: usize, y: usize) -> Option<u16> {
        assert!(
            x < self.size && y < self.size,
            "cell ({}, {}) out of bounds for a {}x{} board",
            x,
            y,
            self.size,
            self.size
        );
        self.cells[y][x]
    }

    /// Coordinates of the empty cell.
    pub fn empty_coords(&self) -> (usize, usize) {
        (self.empty_x, self.empty_y)
    }

    /// Move the tile at the shift source into the empty cell.
    ///
    /// The destination must be the current empty cell at exactly one grid
    /// step from the source; the move resolver guarantees this, so a
    /// violation here means a bug upstream.
    pub fn apply_shift(&mut self, shift: &Shift) {
        assert!(
            shift.from_x < self.size && shift.from_y < self.size,
            "shift source ({}, {}) out of bounds",
            shift.from_x,
            shift.from_y
        );
        assert_eq!(
            (shift.to_x, shift.to_y),
            (self.empty_x, self.empty_y),
            "shift destination is not the empty cell"
        );
        let step = shift.from_x.abs_diff(shift.to_x) + shift.from_y.abs_diff(shift.to_y);
        assert_eq!(step, 1, "shift source and destination are not adjacent");

        let tile = self.cells[shift.from_y][shift.from_x].take();
        self.cells[shift.to_y][shift.to_x] = tile;
        self.empty_x = shift.from_x;
        self.empty_y = shift.from_y;
    }

    /// True when every tile sits on its home cell.
    pub fn is_solved(&self) -> bool {
        for y in 0..self.size {
            for x in 0..self.size {
                let home = if y == self.size - 1 && x == self.size - 1 {
                    None
                } else {
                    Some((y * self.size + x + 1) as u16)
                };
                if self.cells[y][x] != home {
                    return false;
                }
            }
        }
        true
    }
}
