//! The Fin Fac Foe rule engine.
//!
//! One [`GameEngine`] per match. It owns the board, the turn counter and the
//! Boardmaster's trap state, and mutates them only through
//! [`GameEngine::attempt_move`].

use super::action::{CoordinateError, Move, MoveRejection};
use super::contracts::{Attempt, Contract, MoveContract};
use super::outcome::Outcome;
use super::rules::{self, AxisLock, TrapState};
use super::{Board, Position, Role};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Opaque player identity supplied by the presentation layer.
pub type PlayerId = String;

/// Whose turn it is and how many moves have been accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    active: Role,
    ply: u8,
}

impl TurnState {
    /// Challenger to move, nothing played.
    pub fn new() -> Self {
        Self {
            active: Role::Challenger,
            ply: 0,
        }
    }

    /// Role due to move.
    pub fn active(&self) -> Role {
        self.active
    }

    /// Number of accepted moves so far.
    pub fn ply(&self) -> u8 {
        self.ply
    }

    /// 1-based round number, counting one Challenger and one Boardmaster
    /// move per round.
    pub fn round(&self) -> u8 {
        self.ply / 2 + 1
    }

    fn advance(&mut self) {
        self.ply += 1;
        self.active = self.active.opponent();
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

/// Details of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Role that played.
    pub role: Role,
    /// Cell that was marked.
    pub position: Position,
    /// Ply count after the move.
    pub ply: u8,
    /// Outcome read off the board after the move.
    pub outcome: Outcome,
    /// Boardmaster's lock after the move.
    pub lock: AxisLock,
}

/// Result of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was applied.
    Accepted(MoveReport),
    /// The move was refused; nothing changed.
    Rejected(MoveRejection),
}

impl MoveResult {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }

    /// Report of an accepted move.
    pub fn report(&self) -> Option<&MoveReport> {
        match self {
            MoveResult::Accepted(report) => Some(report),
            MoveResult::Rejected(_) => None,
        }
    }

    /// Reason for a refused move.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveResult::Accepted(_) => None,
            MoveResult::Rejected(reason) => Some(*reason),
        }
    }
}

/// Failure to rebuild a match from a move list.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Move {index} ({mov}) was rejected: {reason}")]
pub struct ReplayError {
    /// Zero-based index of the offending move.
    pub index: usize,
    /// The offending move.
    pub mov: Move,
    /// Why it was rejected.
    pub reason: MoveRejection,
}

/// Rule engine for a single match.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) challenger: PlayerId,
    pub(crate) boardmaster: PlayerId,
    pub(crate) board: Board,
    pub(crate) trap: TrapState,
    pub(crate) turn: TurnState,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Starts a match: empty board, ply 0, Boardmaster free, Challenger to
    /// move.
    #[instrument(skip(challenger, boardmaster))]
    pub fn new(challenger: impl Into<PlayerId>, boardmaster: impl Into<PlayerId>) -> Self {
        let challenger = challenger.into();
        let boardmaster = boardmaster.into();
        info!(%challenger, %boardmaster, "Starting match");
        Self {
            challenger,
            boardmaster,
            board: Board::new(),
            trap: TrapState::Free,
            turn: TurnState::new(),
            history: Vec::new(),
        }
    }

    /// Rebuilds a match by applying `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] at the first move the rules refuse.
    #[instrument(skip(challenger, boardmaster))]
    pub fn replay(
        challenger: impl Into<PlayerId>,
        boardmaster: impl Into<PlayerId>,
        moves: &[Move],
    ) -> Result<Self, ReplayError> {
        let mut game = Self::new(challenger, boardmaster);
        for (index, &mov) in moves.iter().enumerate() {
            let actor = game.identity_of(mov.role).to_string();
            if let MoveResult::Rejected(reason) = game.apply(&actor, mov.position) {
                return Err(ReplayError { index, mov, reason });
            }
        }
        Ok(game)
    }

    /// Attempts to mark `(x, y)` on behalf of `actor`.
    ///
    /// Checks run in order: match over, actor's turn, cell empty, then the
    /// role's own rules. A rejection leaves every piece of state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] if `x` or `y` is outside `0..3`. That is a
    /// bug in the caller rather than a game-rule rejection.
    #[track_caller]
    #[instrument(skip(self), fields(ply = self.turn.ply))]
    pub fn attempt_move(
        &mut self,
        actor: &str,
        x: usize,
        y: usize,
    ) -> Result<MoveResult, CoordinateError> {
        let position = Position::from_coords(x, y)?;
        Ok(self.apply(actor, position))
    }

    fn apply(&mut self, actor: &str, position: Position) -> MoveResult {
        let attempt = Attempt { actor, position };
        if let Err(reason) = MoveContract::pre(self, &attempt) {
            warn!(actor, %position, %reason, "Move rejected");
            return MoveResult::Rejected(reason);
        }

        let role = self.turn.active;
        let next_trap = match rules::judge(role, self.turn.ply, self.trap, &self.board, position) {
            Ok(next) => next,
            Err(reason) => {
                warn!(actor, %position, %reason, trap = ?self.trap, "Move rejected");
                return MoveResult::Rejected(reason);
            }
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place(position, role);
        self.history.push(Move::new(role, position));
        self.trap = next_trap;
        self.turn.advance();

        #[cfg(debug_assertions)]
        debug_assert!(
            MoveContract::post(&before, self).is_ok(),
            "move postconditions violated"
        );

        let outcome = self.outcome();
        info!(actor, ?role, %position, ply = self.turn.ply, %outcome, "Move accepted");

        MoveResult::Accepted(MoveReport {
            role,
            position,
            ply: self.turn.ply,
            outcome,
            lock: self.trap.lock(),
        })
    }

    /// Positions the active player could legally mark right now.
    ///
    /// Runs the same rules as [`Self::attempt_move`] without mutating
    /// anything. Empty once the match is over.
    #[instrument(skip(self))]
    pub fn legal_targets(&self) -> Vec<Position> {
        if self.outcome().is_terminal() {
            return Vec::new();
        }
        let role = self.turn.active;
        Position::ALL
            .into_iter()
            .filter(|&pos| self.board.is_empty(pos))
            .filter(|&pos| rules::judge(role, self.turn.ply, self.trap, &self.board, pos).is_ok())
            .collect()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn state.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Returns the Boardmaster's trap state.
    pub fn trap(&self) -> TrapState {
        self.trap
    }

    /// Returns the Boardmaster's lock as an axis descriptor.
    pub fn lock(&self) -> AxisLock {
        self.trap.lock()
    }

    /// Outcome derived from the current board.
    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Challenger's identity.
    pub fn challenger(&self) -> &str {
        &self.challenger
    }

    /// Boardmaster's identity.
    pub fn boardmaster(&self) -> &str {
        &self.boardmaster
    }

    /// Identity seated in `role`.
    pub fn identity_of(&self, role: Role) -> &str {
        match role {
            Role::Challenger => &self.challenger,
            Role::Boardmaster => &self.boardmaster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_state() {
        let game = GameEngine::new("alice", "bob");
        assert_eq!(game.turn(), TurnState::new());
        assert_eq!(game.turn().active(), Role::Challenger);
        assert_eq!(game.trap(), TrapState::Free);
        assert_eq!(game.outcome(), Outcome::Continue);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_invalid_coordinate_fails_fast() {
        let mut game = GameEngine::new("alice", "bob");
        let err = game.attempt_move("alice", 0, 3).unwrap_err();
        assert_eq!((err.x, err.y), (0, 3));
        assert_eq!(game.turn().ply(), 0);
    }

    #[test]
    fn test_opening_legal_targets_exclude_center() {
        let game = GameEngine::new("alice", "bob");
        let targets = game.legal_targets();
        assert_eq!(targets.len(), 8);
        assert!(!targets.contains(&Position::CENTER));
    }

    #[test]
    fn test_legal_targets_follow_column_lock() {
        let mut game = GameEngine::new("alice", "bob");
        for (actor, x, y) in [("alice", 0, 0), ("bob", 1, 0), ("alice", 2, 2), ("bob", 1, 2)] {
            assert!(game.attempt_move(actor, x, y).unwrap().is_accepted());
        }
        game.attempt_move("alice", 2, 0).unwrap();
        assert_eq!(game.lock(), AxisLock::Column(1));
        assert_eq!(game.legal_targets(), vec![Position::Center]);
    }

    #[test]
    fn test_round_counts_pairs_of_moves() {
        let mut game = GameEngine::new("alice", "bob");
        assert_eq!(game.turn().round(), 1);
        game.attempt_move("alice", 0, 0).unwrap();
        assert_eq!(game.turn().round(), 1);
        game.attempt_move("bob", 0, 1).unwrap();
        assert_eq!(game.turn().round(), 2);
    }
}
