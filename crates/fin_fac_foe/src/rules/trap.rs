//! The Boardmaster's trap-state machine.
//!
//! After playing while free, the Boardmaster is anchored to that cell. The
//! next move must share the anchor's column or row, and whichever axis it
//! shares becomes a lock that holds until that axis has no empty cell left.
//! Once the locked axis fills up the Boardmaster is released and the next
//! free move records a fresh anchor.

use super::super::action::MoveRejection;
use super::super::{Board, Position, Scope};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Restriction on the Boardmaster's next move.
///
/// The anchor lives inside the non-free variants, so it exists exactly when
/// the Boardmaster is restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrapState {
    /// May play on any empty cell.
    #[default]
    Free,
    /// Must share the anchor's column or row.
    Fixed {
        /// Cell recorded by the last free move.
        anchor: Position,
    },
    /// Must play in the anchor's column while it has room.
    ColumnLocked {
        /// Cell recorded by the last free move.
        anchor: Position,
    },
    /// Must play in the anchor's row while it has room.
    RowLocked {
        /// Cell recorded by the last free move.
        anchor: Position,
    },
}

impl TrapState {
    /// Anchor of the current restriction, if any.
    pub fn anchor(self) -> Option<Position> {
        match self {
            TrapState::Free => None,
            TrapState::Fixed { anchor }
            | TrapState::ColumnLocked { anchor }
            | TrapState::RowLocked { anchor } => Some(anchor),
        }
    }

    /// Axis descriptor for presentation.
    pub fn lock(self) -> AxisLock {
        match self {
            TrapState::Free => AxisLock::Open,
            TrapState::Fixed { anchor } => AxisLock::Anchored {
                column: anchor.column(),
                row: anchor.row(),
            },
            TrapState::ColumnLocked { anchor } => AxisLock::Column(anchor.column()),
            TrapState::RowLocked { anchor } => AxisLock::Row(anchor.row()),
        }
    }

    /// Judges a Boardmaster move at an empty `target` and returns the next
    /// state.
    ///
    /// `first_move` marks the Boardmaster's opening move (ply 1), where the
    /// center is off limits.
    ///
    /// # Errors
    ///
    /// Returns the specific [`MoveRejection`] when the target breaks the
    /// current restriction. No state is touched either way.
    #[instrument(skip(board))]
    pub fn judge(
        self,
        board: &Board,
        target: Position,
        first_move: bool,
    ) -> Result<TrapState, MoveRejection> {
        if first_move {
            if target == Position::CENTER {
                return Err(MoveRejection::CenterForbiddenFirstMove);
            }
            return Ok(TrapState::Fixed { anchor: target });
        }

        let next = match self {
            TrapState::Free => TrapState::Fixed { anchor: target },
            TrapState::Fixed { anchor } => {
                if !board.has_empty_in(Scope::AnyCell) {
                    TrapState::Free
                } else if target.column() == anchor.column() {
                    TrapState::ColumnLocked { anchor }
                } else if target.row() == anchor.row() {
                    TrapState::RowLocked { anchor }
                } else {
                    return Err(MoveRejection::OffAnchorAxes { anchor });
                }
            }
            TrapState::ColumnLocked { anchor } => {
                let column = anchor.column();
                if !board.has_empty_in(Scope::Column(column)) {
                    TrapState::Free
                } else if target.column() == column {
                    self
                } else {
                    return Err(MoveRejection::OffAnchorColumn { column });
                }
            }
            TrapState::RowLocked { anchor } => {
                let row = anchor.row();
                if !board.has_empty_in(Scope::Row(row)) {
                    TrapState::Free
                } else if target.row() == row {
                    self
                } else {
                    return Err(MoveRejection::OffAnchorRow { row });
                }
            }
        };

        if next != self {
            debug!(from = ?self, to = ?next, "Trap state transition");
        }
        Ok(next)
    }
}

/// Which cells the lock leaves open, in terms a UI can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisLock {
    /// No restriction.
    Open,
    /// Either the anchor's column or its row.
    Anchored {
        /// Anchor column (x).
        column: usize,
        /// Anchor row (y).
        row: usize,
    },
    /// Only this column (x).
    Column(usize),
    /// Only this row (y).
    Row(usize),
}

impl std::fmt::Display for AxisLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisLock::Open => write!(f, "FREE"),
            AxisLock::Anchored { column, row } => {
                write!(f, "AXIS LOCKED (column {column} or row {row})")
            }
            AxisLock::Column(column) => write!(f, "COL LOCKED (column {column})"),
            AxisLock::Row(row) => write!(f, "ROW LOCKED (row {row})"),
        }
    }
}
