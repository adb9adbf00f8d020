//! Concurrent bookkeeping for many independent matches.
//!
//! Each match sits behind its own lock, so moves within a match are
//! serialized while different matches run in parallel. The registry-wide lock
//! is only held long enough to look a match up.

use super::action::CoordinateError;
use super::engine::{GameEngine, MoveResult, PlayerId};
use super::view::MatchView;
use derive_more::{Display, Error, From};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("match-{_0}")]
pub struct MatchId(u64);

/// Errors from registry operations.
#[derive(Debug, Clone, Display, Error, From)]
pub enum RegistryError {
    /// No live match has this id.
    #[display("Unknown match: {_0}")]
    #[from(ignore)]
    UnknownMatch(#[error(not(source))] MatchId),

    /// Adapter sent coordinates off the board.
    #[display("{_0}")]
    Coordinate(CoordinateError),

    /// A thread panicked while holding a lock.
    #[display("Lock poisoned: {_0}")]
    #[from(ignore)]
    Poisoned(#[error(not(source))] String),
}

/// Outcome of a move attempt routed through the registry.
#[derive(Debug, Clone)]
pub struct Turn {
    /// What the engine decided.
    pub result: MoveResult,
    /// State after the attempt.
    pub view: MatchView,
}

type SharedEngine = Arc<Mutex<GameEngine>>;

/// Manages all live matches.
#[derive(Debug, Clone, Default)]
pub struct MatchRegistry {
    matches: Arc<Mutex<HashMap<MatchId, SharedEngine>>>,
    next_id: Arc<AtomicU64>,
}

impl MatchRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating match registry");
        Self::default()
    }

    /// Starts a new match and returns its id.
    #[instrument(skip(self, challenger, boardmaster))]
    pub fn start_match(
        &self,
        challenger: impl Into<PlayerId>,
        boardmaster: impl Into<PlayerId>,
    ) -> Result<MatchId, RegistryError> {
        let id = MatchId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let engine = GameEngine::new(challenger, boardmaster);
        self.lock_matches()?
            .insert(id, Arc::new(Mutex::new(engine)));
        info!(match_id = %id, "Match registered");
        Ok(id)
    }

    /// Attempts a move in match `id`.
    ///
    /// A match that reaches an outcome is dropped from the registry; the
    /// returned view is its final state.
    #[instrument(skip(self))]
    pub fn attempt_move(
        &self,
        id: MatchId,
        actor: &str,
        x: usize,
        y: usize,
    ) -> Result<Turn, RegistryError> {
        let engine = self.get(id)?;
        let turn = {
            let mut game = engine
                .lock()
                .map_err(|e| RegistryError::Poisoned(e.to_string()))?;
            let result = game.attempt_move(actor, x, y)?;
            Turn {
                result,
                view: MatchView::capture(&game),
            }
        };

        if turn.view.outcome().is_terminal() {
            info!(match_id = %id, outcome = %turn.view.outcome(), "Match concluded");
            self.lock_matches()?.remove(&id);
        }
        Ok(turn)
    }

    /// Current view of match `id`.
    #[instrument(skip(self))]
    pub fn view(&self, id: MatchId) -> Result<MatchView, RegistryError> {
        let engine = self.get(id)?;
        let game = engine
            .lock()
            .map_err(|e| RegistryError::Poisoned(e.to_string()))?;
        Ok(MatchView::capture(&game))
    }

    /// Drops match `id` without an outcome.
    #[instrument(skip(self))]
    pub fn abandon(&self, id: MatchId) -> Result<(), RegistryError> {
        match self.lock_matches()?.remove(&id) {
            Some(_) => {
                info!(match_id = %id, "Match abandoned");
                Ok(())
            }
            None => {
                warn!(match_id = %id, "Abandon requested for unknown match");
                Err(RegistryError::UnknownMatch(id))
            }
        }
    }

    /// Number of live matches.
    pub fn len(&self) -> Result<usize, RegistryError> {
        Ok(self.lock_matches()?.len())
    }

    /// Whether no match is live.
    pub fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.lock_matches()?.is_empty())
    }

    fn get(&self, id: MatchId) -> Result<SharedEngine, RegistryError> {
        let matches = self.lock_matches()?;
        let engine = matches.get(&id).cloned().ok_or_else(|| {
            debug!(match_id = %id, "Match not found");
            RegistryError::UnknownMatch(id)
        })?;
        Ok(engine)
    }

    fn lock_matches(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<MatchId, SharedEngine>>, RegistryError> {
        self.matches
            .lock()
            .map_err(|e| RegistryError::Poisoned(e.to_string()))
    }
}
