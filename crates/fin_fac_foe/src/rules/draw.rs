//! Full-board detection.

use super::super::{Board, Cell};

/// Checks if every cell carries a mark.
///
/// A full board with no winner is a tie.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(|c| *c != Cell::Empty)
}
