//! Fin Fac Foe rule engine.
//!
//! Fin Fac Foe is a two-player asymmetric tic-tac-toe. The Challenger (X)
//! plays anywhere except the center on the opening move. The Boardmaster (O)
//! is caught in a trap: after a free move they are anchored to that cell,
//! the next move must share its column or row, and that axis stays locked
//! until it fills up.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns one match and validates, applies and
//!   reports every move attempt
//! - **Rules**: pure win/tie detection and the [`TrapState`] machine
//! - **Contracts**: preconditions and invariants checked around each move
//! - **View**: [`MatchView`] snapshots for a presentation layer, with the
//!   Challenger's public board and the Boardmaster's private board
//! - **Registry**: [`MatchRegistry`] runs many matches side by side
//!
//! # Example
//!
//! ```
//! use fin_fac_foe::{GameEngine, MoveRejection, MoveResult, Outcome};
//!
//! let mut game = GameEngine::new("alice", "bob");
//!
//! // Nobody may open in the center.
//! let result = game.attempt_move("alice", 1, 1).unwrap();
//! assert_eq!(result, MoveResult::Rejected(MoveRejection::CenterForbiddenFirstMove));
//!
//! let result = game.attempt_move("alice", 0, 0).unwrap();
//! assert!(result.is_accepted());
//! assert_eq!(game.outcome(), Outcome::Continue);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod outcome;
mod position;
mod registry;
mod types;
mod view;

pub mod rules;

pub use action::{CoordinateError, Move, MoveRejection};
pub use contracts::{Attempt, CellIsEmpty, Contract, GameInProgress, MoveContract, PlayersTurn};
pub use engine::{GameEngine, MoveReport, MoveResult, PlayerId, ReplayError, TurnState};
pub use invariants::{
    AlternatingTurnInvariant, FinFacFoeInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, TrapConsistentInvariant,
};
pub use outcome::Outcome;
pub use position::Position;
pub use registry::{MatchId, MatchRegistry, RegistryError, Turn};
pub use rules::{AxisLock, TrapState};
pub use types::{Board, Cell, Role, Scope};
pub use view::{BoardView, MatchView};
