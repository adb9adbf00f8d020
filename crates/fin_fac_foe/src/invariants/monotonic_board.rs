//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: the board equals the move history replayed onto an empty
/// board, with every move landing on an empty cell.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.place(mov.position, mov.role);
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
