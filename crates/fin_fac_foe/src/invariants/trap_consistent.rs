//! Trap consistency invariant: the trap state is what the history implies.

use super::super::rules::{self, TrapState};
use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: replaying the history through the rules, from a free
/// Boardmaster on an empty board, accepts every move and ends in the
/// engine's current trap state.
pub struct TrapConsistentInvariant;

impl Invariant<GameEngine> for TrapConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut board = Board::new();
        let mut trap = TrapState::Free;

        for (ply, mov) in (0u8..).zip(game.history()) {
            if !board.is_empty(mov.position) {
                return false;
            }
            match rules::judge(mov.role, ply, trap, &board, mov.position) {
                Ok(next) => trap = next,
                Err(_) => return false,
            }
            board.place(mov.position, mov.role);
        }

        trap == game.trap()
    }

    fn description() -> &'static str {
        "Trap state matches the accepted move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_locked_game_holds() {
        let mut game = GameEngine::new("alice", "bob");
        game.attempt_move("alice", 0, 0).unwrap();
        game.attempt_move("bob", 0, 1).unwrap();
        game.attempt_move("alice", 2, 2).unwrap();
        game.attempt_move("bob", 1, 1).unwrap();
        assert_eq!(
            game.trap(),
            TrapState::RowLocked {
                anchor: Position::MiddleLeft
            }
        );
        assert!(TrapConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_tampered_trap_violates() {
        let mut game = GameEngine::new("alice", "bob");
        game.attempt_move("alice", 0, 0).unwrap();
        game.attempt_move("bob", 0, 1).unwrap();
        game.trap = TrapState::Free;
        assert!(!TrapConsistentInvariant::holds(&game));
    }
}
