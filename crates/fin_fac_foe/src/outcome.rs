//! Match outcome, derived from the board after every accepted move.

use super::types::Role;
use serde::{Deserialize, Serialize};

/// State of the match as read off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty cell remains.
    Continue,
    /// Challenger completed a line.
    ChallengerWins,
    /// Boardmaster completed a line.
    BoardmasterWins,
    /// Board is full without a completed line.
    Tie,
}

impl Outcome {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Role> {
        match self {
            Outcome::ChallengerWins => Some(Role::Challenger),
            Outcome::BoardmasterWins => Some(Role::Boardmaster),
            Outcome::Continue | Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Continue => write!(f, "In progress"),
            Outcome::ChallengerWins => write!(f, "[X] wins"),
            Outcome::BoardmasterWins => write!(f, "[O] wins"),
            Outcome::Tie => write!(f, "TIE"),
        }
    }
}
