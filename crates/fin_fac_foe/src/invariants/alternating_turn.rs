//! Alternating turn invariant: Challenger, Boardmaster, Challenger, ...

use super::super::{GameEngine, Role};
use super::Invariant;

/// Invariant: history alternates roles starting with the Challenger, and
/// the turn state agrees with the history's length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.role != Role::Challenger
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].role == w[1].role) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Role::Challenger
        } else {
            Role::Boardmaster
        };

        usize::from(game.turn().ply()) == history.len() && game.turn().active() == expected_next
    }

    fn description() -> &'static str {
        "Roles alternate (Challenger first) and ply equals accepted moves"
    }
}
