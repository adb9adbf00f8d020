//! Text rendering of match views.

use fin_fac_foe::{BoardView, Cell, MatchView, Position, Role};

/// Draws one player's board with column and row headers.
///
/// Empty cells the owner may not pick right now are drawn as `#` while it is
/// their turn.
pub fn render_board(board: &BoardView) -> String {
    let restricted = !board.enabled().is_empty();
    let mut out = String::from("    0   1   2\n");
    for y in 0..3 {
        let row: Vec<String> = (0..3)
            .filter_map(|x| Position::from_coords(x, y).ok())
            .map(|pos| {
                let symbol = match board.cell(pos) {
                    Cell::Challenger => 'X',
                    Cell::Boardmaster => 'O',
                    Cell::Empty if restricted && !board.is_enabled(pos) => '#',
                    Cell::Empty => '.',
                };
                format!(" {symbol} ")
            })
            .collect();
        out.push_str(&format!("{y}  {}\n", row.join("|")));
        if y < 2 {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

/// One-line status for the match.
pub fn render_status(view: &MatchView) -> String {
    let outcome = *view.outcome();
    if let Some(winner) = outcome.winner() {
        return format!("{} wins as {}", view.identity_of(winner), winner);
    }
    if outcome.is_terminal() {
        return outcome.to_string();
    }

    let active = *view.active();
    let mut status = format!(
        "Round {}: {} {} to move",
        view.round(),
        active,
        view.identity_of(active)
    );
    if active == Role::Boardmaster {
        status.push_str(&format!(" ({})", view.lock()));
    }
    status
}

/// Rules summary printed by `fin_fac_foe rules`.
pub const RULES: &str = "\
Fin Fac Foe is tic-tac-toe for two unequal players.

  Challenger [X] moves first and may play any empty cell,
  except the center on their very first move.

  Boardmaster [O] may not open in the center either. After a free move
  the Boardmaster is anchored to that cell: the next move must share the
  anchor's column or row. Whichever axis it shares becomes locked, and
  every following move must stay in it until that column or row is full.
  Then the Boardmaster is free again and the next move sets a new anchor.

  The Challenger never sees the Boardmaster's marks. Three in a row wins;
  a full board without a line is a tie.

Enter moves as `x y` (column, row, 0-2), or `name x y` to play as a named
player. `quit` abandons the match.
";

#[cfg(test)]
mod tests {
    use super::*;
    use fin_fac_foe::GameEngine;

    #[test]
    fn test_opening_public_board_all_open() {
        let game = GameEngine::new("alice", "bob");
        let view = MatchView::capture(&game);
        let text = render_board(view.public());
        assert!(!text.contains('#'));
        assert_eq!(text.matches('.').count(), 9);
    }

    #[test]
    fn test_private_board_marks_blocked_cells() {
        let mut game = GameEngine::new("alice", "bob");
        game.attempt_move("alice", 0, 0).unwrap();
        let view = MatchView::capture(&game);
        let text = render_board(view.private());

        // Only the center is off limits on the Boardmaster's opening move.
        assert_eq!(text.matches('#').count(), 1);
        assert_eq!(text.matches('X').count(), 1);
    }

    #[test]
    fn test_public_board_hides_boardmaster() {
        let mut game = GameEngine::new("alice", "bob");
        game.attempt_move("alice", 0, 0).unwrap();
        game.attempt_move("bob", 2, 2).unwrap();
        let view = MatchView::capture(&game);

        assert!(!render_board(view.public()).contains('O'));
        assert!(render_board(view.private()).contains('O'));
    }

    #[test]
    fn test_status_mentions_lock_for_boardmaster() {
        let mut game = GameEngine::new("alice", "bob");
        game.attempt_move("alice", 0, 0).unwrap();
        game.attempt_move("bob", 0, 1).unwrap();
        game.attempt_move("alice", 2, 2).unwrap();
        let status = render_status(&MatchView::capture(&game));

        assert!(status.contains("bob"));
        assert!(status.contains("AXIS LOCKED"));
    }

    #[test]
    fn test_status_names_winner_and_round() {
        let mut game = GameEngine::new("alice", "bob");
        assert_eq!(
            render_status(&MatchView::capture(&game)),
            "Round 1: Challenger [X] alice to move"
        );

        for (actor, x, y) in [("alice", 0, 0), ("bob", 0, 1), ("alice", 1, 0), ("bob", 0, 2)] {
            game.attempt_move(actor, x, y).unwrap();
        }
        assert!(render_status(&MatchView::capture(&game)).starts_with("Round 3:"));

        game.attempt_move("alice", 2, 0).unwrap();
        assert_eq!(
            render_status(&MatchView::capture(&game)),
            "alice wins as Challenger [X]"
        );
    }
}
