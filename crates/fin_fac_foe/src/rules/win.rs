//! Three-in-a-row detection.

use super::super::{Board, Position, Role};
use tracing::instrument;

/// The 8 winning lines, scanned in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the role owning a completed line, if any.
///
/// Only one mark is placed per move, so at most one role can complete a
/// line on any reachable board; the first line found is the answer.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Role> {
    LINES.iter().find_map(|&[a, b, c]| {
        let owner = board.get(a).owner()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some(owner)
    })
}
