//! Serializable snapshot of a match for presentation.
//!
//! The Challenger plays on a public board that only shows their own marks;
//! the Boardmaster's marks are hidden there. The Boardmaster plays on a
//! private board that shows everything and greys out the cells the trap
//! state forbids.

use super::engine::GameEngine;
use super::outcome::Outcome;
use super::rules::AxisLock;
use super::{Cell, Position, Role};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One player's board as they get to see it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardView {
    /// Who this board belongs to.
    owner: Role,
    /// Visible cells, `cells[y][x]`.
    cells: [[Cell; 3]; 3],
    /// Cells the owner may click right now.
    enabled: Vec<Position>,
}

impl BoardView {
    /// Whether the owner may click `pos`.
    pub fn is_enabled(&self, pos: Position) -> bool {
        self.enabled.contains(&pos)
    }

    /// Visible cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.column()]
    }
}

/// Everything an adapter needs to render a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchView {
    /// Challenger's identity.
    challenger: String,
    /// Boardmaster's identity.
    boardmaster: String,
    /// Accepted moves so far.
    ply: u8,
    /// 1-based round number.
    round: u8,
    /// Role due to move.
    active: Role,
    /// Current outcome.
    outcome: Outcome,
    /// Boardmaster's lock.
    lock: AxisLock,
    /// Challenger's board.
    public: BoardView,
    /// Boardmaster's board.
    private: BoardView,
}

impl MatchView {
    /// Captures the current state of `game`.
    #[instrument(skip(game))]
    pub fn capture(game: &GameEngine) -> Self {
        let outcome = game.outcome();
        let active = game.turn().active();
        let open = !outcome.is_terminal();

        let mut public_cells = *game.board().cells();
        for cell in public_cells.iter_mut().flatten() {
            if *cell == Cell::Boardmaster {
                *cell = Cell::Empty;
            }
        }
        // Hidden marks stay clickable; the engine answers with CellOccupied.
        let public_enabled = if open && active == Role::Challenger {
            Position::ALL
                .into_iter()
                .filter(|&pos| public_cells[pos.row()][pos.column()] == Cell::Empty)
                .collect()
        } else {
            Vec::new()
        };

        let private_enabled = if open && active == Role::Boardmaster {
            game.legal_targets()
        } else {
            Vec::new()
        };

        Self {
            challenger: game.challenger().to_string(),
            boardmaster: game.boardmaster().to_string(),
            ply: game.turn().ply(),
            round: game.turn().round(),
            active,
            outcome,
            lock: game.lock(),
            public: BoardView {
                owner: Role::Challenger,
                cells: public_cells,
                enabled: public_enabled,
            },
            private: BoardView {
                owner: Role::Boardmaster,
                cells: *game.board().cells(),
                enabled: private_enabled,
            },
        }
    }

    /// Identity seated in `role`.
    pub fn identity_of(&self, role: Role) -> &str {
        match role {
            Role::Challenger => &self.challenger,
            Role::Boardmaster => &self.boardmaster,
        }
    }

    /// Board belonging to `role`.
    pub fn board_for(&self, role: Role) -> &BoardView {
        match role {
            Role::Challenger => &self.public,
            Role::Boardmaster => &self.private,
        }
    }

    /// Serializes the snapshot as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&GameEngine> for MatchView {
    fn from(game: &GameEngine) -> Self {
        Self::capture(game)
    }
}
