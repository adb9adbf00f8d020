//! Core domain types for Fin Fac Foe.

use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Plays X and moves first. Only restricted on the opening move.
    Challenger,
    /// Plays O and is bound by the trap-state machine.
    Boardmaster,
}

impl Role {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Role::Challenger => Role::Boardmaster,
            Role::Boardmaster => Role::Challenger,
        }
    }

    /// Mark drawn on the board for this role.
    pub fn symbol(self) -> char {
        match self {
            Role::Challenger => 'X',
            Role::Boardmaster => 'O',
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Challenger => write!(f, "Challenger [X]"),
            Role::Boardmaster => write!(f, "Boardmaster [O]"),
        }
    }
}

/// Contents of a single board cell.
///
/// A cell only ever moves from `Empty` to one of the marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Challenger's mark.
    Challenger,
    /// Boardmaster's mark.
    Boardmaster,
}

impl Cell {
    /// Returns the role owning this cell, if any.
    pub fn owner(self) -> Option<Role> {
        match self {
            Cell::Empty => None,
            Cell::Challenger => Some(Role::Challenger),
            Cell::Boardmaster => Some(Role::Boardmaster),
        }
    }
}

impl From<Role> for Cell {
    fn from(role: Role) -> Self {
        match role {
            Role::Challenger => Cell::Challenger,
            Role::Boardmaster => Cell::Boardmaster,
        }
    }
}

/// Region queried by [`Board::has_empty_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Anywhere on the board.
    AnyCell,
    /// A single column (x).
    Column(usize),
    /// A single row (y).
    Row(usize),
}

/// 3x3 board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.column()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Marks a cell.
    ///
    /// The caller has already established that `pos` is empty; the board
    /// does not re-validate.
    pub fn place(&mut self, pos: Position, mark: Role) {
        debug_assert!(self.is_empty(pos), "placing onto occupied {pos}");
        self.cells[pos.row()][pos.column()] = mark.into();
    }

    /// Rows of cells, `cells()[y][x]`.
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Whether an empty cell exists within `scope`.
    ///
    /// A column or row outside `0..3` holds no cells, so it has no empty one.
    pub fn has_empty_in(&self, scope: Scope) -> bool {
        match scope {
            Scope::AnyCell => self.cells.iter().flatten().any(|c| *c == Cell::Empty),
            Scope::Column(x) => self
                .cells
                .iter()
                .filter_map(|row| row.get(x))
                .any(|c| *c == Cell::Empty),
            Scope::Row(y) => self
                .cells
                .get(y)
                .is_some_and(|row| row.contains(&Cell::Empty)),
        }
    }

    /// Whether every cell is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Derives the outcome from board contents alone.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Outcome {
        match rules::check_winner(self) {
            Some(Role::Challenger) => Outcome::ChallengerWins,
            Some(Role::Boardmaster) => Outcome::BoardmasterWins,
            None if self.is_full() => Outcome::Tie,
            None => Outcome::Continue,
        }
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell.owner() {
                        Some(role) => role.symbol(),
                        None => '.',
                    })
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}
