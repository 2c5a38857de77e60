//! Move legality and slide-chain resolution.
//!
//! A click anywhere in the empty cell's row or column is one legal move
//! that slides every tile between the click and the hole by a single
//! step. The resolver turns such a click into the ordered list of
//! one-step shifts the board applies.

/// One single-step tile shift.
///
/// `(to_x, to_y)` is the empty cell at the moment the shift is applied,
/// so consuming a chain in order walks the hole toward the clicked cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub from_x: usize,
    pub from_y: usize,
    pub to_x: usize,
    pub to_y: usize,
}

/// A click is legal when it shares a row or a column with the empty cell
/// and is not the empty cell itself. Diagonals are never legal.
pub fn can_move(x: usize, y: usize, empty_x: usize, empty_y: usize) -> bool {
    (y == empty_y && x != empty_x) || (x == empty_x && y != empty_y)
}

/// Ordered shifts that fill the hole from a click at (x, y),
/// closest-to-hole first.
///
/// The chain has length `|target - empty|` along the shared axis, and
/// applying it in order leaves the empty cell exactly at (x, y). Calling
/// this for an illegal click is a caller bug.
pub fn resolve_chain(x: usize, y: usize, empty_x: usize, empty_y: usize) -> Vec<Shift> {
    assert!(
        can_move(x, y, empty_x, empty_y),
        "resolve_chain called for an illegal click at ({}, {})",
        x,
        y
    );

    let mut shifts = Vec::new();
    if y == empty_y {
        let dir: i32 = if x > empty_x { 1 } else { -1 };
        let mut cur = empty_x as i32 + dir;
        loop {
            shifts.push(Shift {
                from_x: cur as usize,
                from_y: y,
                to_x: (cur - dir) as usize,
                to_y: y,
            });
            if cur as usize == x {
                break;
            }
            cur += dir;
        }
    } else {
        let dir: i32 = if y > empty_y { 1 } else { -1 };
        let mut cur = empty_y as i32 + dir;
        loop {
            shifts.push(Shift {
                from_x: x,
                from_y: cur as usize,
                to_x: x,
                to_y: (cur - dir) as usize,
            });
            if cur as usize == y {
                break;
            }
            cur += dir;
        }
    }
    shifts
}
