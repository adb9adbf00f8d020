//! Hot-seat play loop.
//!
//! Reads one command per line, forwards moves to the engine and prints the
//! resulting boards. Works over any reader/writer so it can be driven from
//! tests.

use crate::config::MatchConfig;
use crate::render::{render_board, render_status};
use anyhow::Result;
use fin_fac_foe::{GameEngine, MatchView, MoveResult, Outcome, Position, Role};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Play at a position, as the named player or the one whose turn it is.
    Move {
        /// Claimed identity; `None` means the active player.
        actor: Option<String>,
        /// Target cell.
        position: Position,
    },
    /// Abandon the match.
    Quit,
}

/// Parses a line into an [`Input`].
///
/// Accepts `x y`, `x,y`, `name x y` and `quit`. Coordinates are checked
/// here so the engine only ever sees cells on the board.
#[instrument]
pub fn parse_input(line: &str) -> Result<Input, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Ok(Input::Quit);
    }

    let (actor, coords) = match line.split_once(char::is_whitespace) {
        Some((first, rest)) if first.parse::<usize>().is_err() && !first.contains(',') => {
            (Some(first.to_string()), rest)
        }
        _ => (None, line),
    };

    let position = Position::parse_coords(coords)
        .ok_or_else(|| format!("Expected `x y` with x and y in 0-2, got {coords:?}"))?;
    Ok(Input::Move { actor, position })
}

/// Runs a match until it ends, the player quits, or input runs out.
///
/// Returns the outcome if the match finished.
#[instrument(skip(config, input, out))]
pub fn run<R: BufRead, W: Write>(
    config: &MatchConfig,
    json: bool,
    input: R,
    mut out: W,
) -> Result<Option<Outcome>> {
    let mut game = GameEngine::new(config.challenger().as_str(), config.boardmaster().as_str());
    show(&game, config, json, &mut out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (actor, position) = match parse_input(&line) {
            Ok(Input::Quit) => {
                info!("Match abandoned");
                writeln!(out, "Match abandoned.")?;
                return Ok(None);
            }
            Ok(Input::Move { actor, position }) => {
                let actor = actor
                    .unwrap_or_else(|| game.identity_of(game.turn().active()).to_string());
                (actor, position)
            }
            Err(message) => {
                writeln!(out, "> {message}")?;
                continue;
            }
        };

        debug!(%actor, %position, "Forwarding move");
        match game.attempt_move(&actor, position.column(), position.row())? {
            MoveResult::Accepted(report) => {
                writeln!(out, "> {} played {}", actor, report.position)?;
                show(&game, config, json, &mut out)?;
                if report.outcome.is_terminal() {
                    return Ok(Some(report.outcome));
                }
            }
            MoveResult::Rejected(reason) => {
                writeln!(out, "> {reason}")?;
            }
        }
    }

    Ok(None)
}

fn show<W: Write>(game: &GameEngine, config: &MatchConfig, json: bool, out: &mut W) -> Result<()> {
    let view = MatchView::capture(game);
    let seats: &[Role] = if *config.show_private() {
        &[Role::Challenger, Role::Boardmaster]
    } else {
        &[Role::Challenger]
    };
    for &role in seats {
        let scope = match role {
            Role::Challenger => "public",
            Role::Boardmaster => "private",
        };
        writeln!(
            out,
            "[{}] {} ({scope} board)",
            role.symbol(),
            view.identity_of(role)
        )?;
        write!(out, "{}", render_board(view.board_for(role)))?;
    }
    writeln!(out, "{}", render_status(&view))?;
    if json {
        writeln!(out, "{}", view.to_json()?)?;
    }
    Ok(())
}
