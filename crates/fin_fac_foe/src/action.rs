//! Moves and the ways a move attempt can fail.

use super::{Position, Role};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An accepted move: a role placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The role that played.
    pub role: Role,
    /// Where the mark went.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(role: Role, position: Position) -> Self {
        Self { role, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.role, self.position)
    }
}

/// Why a move attempt was refused.
///
/// Every rejection leaves the engine untouched; the same player is simply
/// asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The match already has an outcome.
    #[display("The game is already over")]
    GameAlreadyOver,

    /// The actor does not hold the seat whose turn it is.
    #[display("Not your turn. Waiting for {expected}")]
    NotYourTurn {
        /// Role that is due to move.
        expected: Role,
    },

    /// Target cell already carries a mark.
    #[display("Occupied spot: {_0}")]
    CellOccupied(#[error(not(source))] Position),

    /// Opening move of either player landed on the center.
    #[display("Center position is prohibited on first turn. Try again.")]
    CenterForbiddenFirstMove,

    /// Boardmaster is fixed to the anchor and must share its column or row.
    #[display("You are AXIS LOCKED to {anchor}. Try again.")]
    OffAnchorAxes {
        /// Recorded anchor.
        anchor: Position,
    },

    /// Boardmaster is locked to the anchor's column.
    #[display("You are COL LOCKED to column {column}. Try again.")]
    OffAnchorColumn {
        /// Locked column (x).
        column: usize,
    },

    /// Boardmaster is locked to the anchor's row.
    #[display("You are ROW LOCKED to row {row}. Try again.")]
    OffAnchorRow {
        /// Locked row (y).
        row: usize,
    },
}

/// Coordinates outside the 3x3 board.
///
/// This is a contract violation by the presentation adapter, not a game-rule
/// rejection.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid coordinate ({}, {}) at {}:{}", x, y, file, line)]
pub struct CoordinateError {
    /// Rejected column.
    pub x: usize,
    /// Rejected row.
    pub y: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CoordinateError {
    /// Creates a new coordinate error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(x: usize, y: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            x,
            y,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
