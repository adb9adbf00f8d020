//! Contract-based validation for move attempts.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! are checked on every attempt; postconditions run in debug builds.

use super::action::MoveRejection;
use super::engine::GameEngine;
use super::invariants::{FinFacFoeInvariants, InvariantSet, InvariantViolation};
use super::Position;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// A player's request to mark a cell, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt<'a> {
    /// Claimed identity of the actor.
    pub actor: &'a str,
    /// Target cell.
    pub position: Position,
}

/// Precondition: the match has no outcome yet.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects once the board shows a win or tie.
    pub fn check(game: &GameEngine) -> Result<(), MoveRejection> {
        if game.outcome().is_terminal() {
            Err(MoveRejection::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the actor holds the seat that is due to move.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects identities other than the active role's.
    pub fn check(attempt: &Attempt<'_>, game: &GameEngine) -> Result<(), MoveRejection> {
        let expected = game.turn().active();
        if game.identity_of(expected) != attempt.actor {
            Err(MoveRejection::NotYourTurn { expected })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects marked cells.
    pub fn check(attempt: &Attempt<'_>, game: &GameEngine) -> Result<(), MoveRejection> {
        if !game.board().is_empty(attempt.position) {
            Err(MoveRejection::CellOccupied(attempt.position))
        } else {
            Ok(())
        }
    }
}

/// Contract for move attempts.
///
/// Preconditions, in order:
/// - Match not over
/// - Actor's turn
/// - Cell empty
///
/// Role-specific legality is decided afterwards by [`crate::rules::judge`],
/// which also yields the next trap state.
///
/// Postconditions: [`FinFacFoeInvariants`].
pub struct MoveContract;

impl<'a> Contract<GameEngine, Attempt<'a>> for MoveContract {
    #[instrument(skip(game))]
    fn pre(game: &GameEngine, attempt: &Attempt<'a>) -> Result<(), MoveRejection> {
        GameInProgress::check(game)?;
        PlayersTurn::check(attempt, game)?;
        CellIsEmpty::check(attempt, game)?;
        Ok(())
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match FinFacFoeInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if after.turn().ply() != before.turn().ply() + 1 {
            violations.push(InvariantViolation::new(
                "Ply advances by exactly one per accepted move",
            ));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Postcondition failed");
            Err(violations)
        }
    }
}
