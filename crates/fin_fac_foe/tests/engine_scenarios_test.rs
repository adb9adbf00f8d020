//! End-to-end rule scenarios driven through `GameEngine::attempt_move`.

use fin_fac_foe::{
    AxisLock, Board, GameEngine, Move, MoveRejection, MoveResult, Outcome, Position, Role,
    TrapState,
};

const CHALLENGER: &str = "alice";
const BOARDMASTER: &str = "bob";

fn new_game() -> GameEngine {
    GameEngine::new(CHALLENGER, BOARDMASTER)
}

/// Plays alternating moves, Challenger first, asserting each is accepted.
fn play(game: &mut GameEngine, moves: &[(usize, usize)]) -> MoveResult {
    let mut last = None;
    for &(x, y) in moves {
        let actor = game.identity_of(game.turn().active()).to_string();
        let result = game.attempt_move(&actor, x, y).expect("on-board coordinates");
        assert!(result.is_accepted(), "({x}, {y}) rejected: {result:?}");
        last = Some(result);
    }
    last.expect("at least one move")
}

fn reject(game: &mut GameEngine, actor: &str, x: usize, y: usize) -> MoveRejection {
    let board = game.board().clone();
    let trap = game.trap();
    let ply = game.turn().ply();

    let result = game.attempt_move(actor, x, y).expect("on-board coordinates");
    let reason = result.rejection().expect("move should be rejected");

    assert_eq!(game.board(), &board, "rejection changed the board");
    assert_eq!(game.trap(), trap, "rejection changed the trap state");
    assert_eq!(game.turn().ply(), ply, "rejection changed the ply");
    reason
}

#[test]
fn test_challenger_cannot_open_in_center() {
    let mut game = new_game();
    assert_eq!(
        reject(&mut game, CHALLENGER, 1, 1),
        MoveRejection::CenterForbiddenFirstMove
    );
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_boardmaster_cannot_open_in_center() {
    let mut game = new_game();
    play(&mut game, &[(0, 0)]);
    assert_eq!(
        reject(&mut game, BOARDMASTER, 1, 1),
        MoveRejection::CenterForbiddenFirstMove
    );
}

#[test]
fn test_wrong_player_rejected() {
    let mut game = new_game();
    assert_eq!(
        reject(&mut game, BOARDMASTER, 0, 0),
        MoveRejection::NotYourTurn {
            expected: Role::Challenger
        }
    );
    play(&mut game, &[(0, 0)]);
    assert_eq!(
        reject(&mut game, CHALLENGER, 2, 2),
        MoveRejection::NotYourTurn {
            expected: Role::Boardmaster
        }
    );
    assert_eq!(
        reject(&mut game, "mallory", 2, 2),
        MoveRejection::NotYourTurn {
            expected: Role::Boardmaster
        }
    );
}

#[test]
fn test_turn_checked_before_occupancy() {
    let mut game = new_game();
    play(&mut game, &[(0, 0)]);
    assert_eq!(
        reject(&mut game, CHALLENGER, 0, 0),
        MoveRejection::NotYourTurn {
            expected: Role::Boardmaster
        }
    );
    assert_eq!(
        reject(&mut game, BOARDMASTER, 0, 0),
        MoveRejection::CellOccupied(Position::TopLeft)
    );
}

#[test]
fn test_first_boardmaster_move_anchors() {
    let mut game = new_game();
    let result = play(&mut game, &[(0, 0), (0, 1)]);
    let report = result.report().unwrap();

    assert_eq!(report.role, Role::Boardmaster);
    assert_eq!(report.ply, 2);
    assert_eq!(report.lock, AxisLock::Anchored { column: 0, row: 1 });
    assert_eq!(
        game.trap(),
        TrapState::Fixed {
            anchor: Position::MiddleLeft
        }
    );
}

#[test]
fn test_challenger_moves_leave_trap_alone() {
    let mut game = new_game();
    play(&mut game, &[(0, 0), (0, 1)]);
    let trap = game.trap();
    play(&mut game, &[(2, 2)]);
    assert_eq!(game.trap(), trap);
}

#[test]
fn test_column_lock_then_release_when_column_fills() {
    let mut game = new_game();
    play(&mut game, &[(0, 0), (0, 1), (2, 2)]);

    // Anchor (0, 1); sharing column 0 locks the column.
    let result = play(&mut game, &[(0, 2)]);
    assert_eq!(result.report().unwrap().lock, AxisLock::Column(0));
    assert_eq!(
        game.trap(),
        TrapState::ColumnLocked {
            anchor: Position::MiddleLeft
        }
    );

    // Column 0 is now full, so the Boardmaster is released.
    play(&mut game, &[(2, 0)]);
    let result = play(&mut game, &[(2, 1)]);
    assert_eq!(result.report().unwrap().lock, AxisLock::Open);
    assert_eq!(game.trap(), TrapState::Free);
    assert_eq!(game.trap().anchor(), None);

    // The first Boardmaster move after the release sets a fresh anchor.
    play(&mut game, &[(1, 2)]);
    let result = play(&mut game, &[(1, 0)]);
    assert_eq!(result.report().unwrap().lock, AxisLock::Anchored { column: 1, row: 0 });
    assert_eq!(
        game.trap(),
        TrapState::Fixed {
            anchor: Position::TopCenter
        }
    );
    assert_eq!(game.outcome(), Outcome::Continue);
}

#[test]
fn test_anchor_column_lock_then_off_column_rejected() {
    let mut game = new_game();
    // Challenger opens away from column 0 so the locked column stays open.
    play(&mut game, &[(2, 2), (0, 1)]);
    assert_eq!(
        game.trap(),
        TrapState::Fixed {
            anchor: Position::MiddleLeft
        }
    );

    let result = play(&mut game, &[(1, 1), (0, 0)]);
    assert_eq!(result.report().unwrap().lock, AxisLock::Column(0));
    assert_eq!(
        game.trap(),
        TrapState::ColumnLocked {
            anchor: Position::MiddleLeft
        }
    );

    play(&mut game, &[(2, 0)]);
    assert_eq!(
        reject(&mut game, BOARDMASTER, 2, 1),
        MoveRejection::OffAnchorColumn { column: 0 }
    );
    play(&mut game, &[(0, 2)]);
    assert_eq!(game.lock(), AxisLock::Column(0));
    assert_eq!(game.outcome(), Outcome::BoardmasterWins);
}

#[test]
fn test_column_lock_rejects_off_column() {
    let mut game = new_game();
    play(&mut game, &[(0, 0), (1, 0), (2, 2), (1, 2), (2, 0)]);
    assert_eq!(game.lock(), AxisLock::Column(1));

    assert_eq!(
        reject(&mut game, BOARDMASTER, 0, 2),
        MoveRejection::OffAnchorColumn { column: 1 }
    );
    play(&mut game, &[(1, 1)]);
}

#[test]
fn test_row_lock_rejects_off_row() {
    let mut game = new_game();
    play(&mut game, &[(0, 0), (0, 1), (2, 2), (1, 1), (2, 0)]);
    assert_eq!(game.lock(), AxisLock::Row(1));

    assert_eq!(
        reject(&mut game, BOARDMASTER, 1, 2),
        MoveRejection::OffAnchorRow { row: 1 }
    );
}

#[test]
fn test_row_lock_releases_when_row_fills() {
    let mut game = new_game();
    play(&mut game, &[(0, 0), (1, 0), (2, 2), (2, 0), (0, 2)]);
    assert_eq!(game.lock(), AxisLock::Row(0));

    play(&mut game, &[(1, 2)]);
    assert_eq!(game.trap(), TrapState::Free);
}

#[test]
fn test_fixed_rejects_cell_off_both_axes() {
    let mut game = new_game();
    play(&mut game, &[(0, 0), (0, 1), (2, 2)]);
    assert_eq!(
        reject(&mut game, BOARDMASTER, 2, 0),
        MoveRejection::OffAnchorAxes {
            anchor: Position::MiddleLeft
        }
    );
}

#[test]
fn test_challenger_completes_row() {
    let mut game = new_game();
    let result = play(&mut game, &[(0, 0), (0, 1), (1, 0), (0, 2), (2, 0)]);
    assert_eq!(result.report().unwrap().outcome, Outcome::ChallengerWins);
    assert_eq!(game.outcome(), Outcome::ChallengerWins);
    assert_eq!(game.board().evaluate(), Outcome::ChallengerWins);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut game = new_game();
    let result = play(
        &mut game,
        &[
            (0, 0),
            (1, 0),
            (2, 0),
            (1, 1),
            (1, 2),
            (0, 1),
            (2, 1),
            (2, 2),
            (0, 2),
        ],
    );
    assert_eq!(result.report().unwrap().outcome, Outcome::Tie);
    assert!(game.board().is_full());
}

#[test]
fn test_finished_match_rejects_everything() {
    let mut game = new_game();
    play(&mut game, &[(0, 0), (0, 1), (1, 0), (0, 2), (2, 0)]);

    // Boardmaster's turn, empty cell, still refused.
    assert_eq!(
        reject(&mut game, BOARDMASTER, 1, 1),
        MoveRejection::GameAlreadyOver
    );
    // Wrong player and occupied cell are reported as game over too.
    assert_eq!(
        reject(&mut game, CHALLENGER, 0, 0),
        MoveRejection::GameAlreadyOver
    );
    assert!(game.legal_targets().is_empty());
}

#[test]
fn test_invalid_coordinate_is_an_error_not_a_rejection() {
    let mut game = new_game();
    assert!(game.attempt_move(CHALLENGER, 3, 0).is_err());
    assert!(game.attempt_move(CHALLENGER, 0, 9).is_err());
    assert_eq!(game.turn().ply(), 0);
}

#[test]
fn test_replay_rebuilds_locked_state() {
    let moves = [
        Move::new(Role::Challenger, Position::TopLeft),
        Move::new(Role::Boardmaster, Position::TopCenter),
        Move::new(Role::Challenger, Position::BottomRight),
        Move::new(Role::Boardmaster, Position::BottomCenter),
    ];
    let game = GameEngine::replay(CHALLENGER, BOARDMASTER, &moves).unwrap();

    assert_eq!(game.history(), &moves);
    assert_eq!(game.lock(), AxisLock::Column(1));
    assert_eq!(game.turn().active(), Role::Challenger);
}

#[test]
fn test_replay_reports_first_illegal_move() {
    let moves = [
        Move::new(Role::Challenger, Position::TopLeft),
        Move::new(Role::Boardmaster, Position::TopCenter),
        Move::new(Role::Challenger, Position::BottomRight),
        Move::new(Role::Boardmaster, Position::BottomLeft),
    ];
    let err = GameEngine::replay(CHALLENGER, BOARDMASTER, &moves).unwrap_err();

    assert_eq!(err.index, 3);
    assert_eq!(
        err.reason,
        MoveRejection::OffAnchorAxes {
            anchor: Position::TopCenter
        }
    );
}

#[test]
fn test_rejection_messages_are_distinct() {
    let reasons = [
        MoveRejection::GameAlreadyOver,
        MoveRejection::NotYourTurn {
            expected: Role::Challenger,
        },
        MoveRejection::CellOccupied(Position::Center),
        MoveRejection::CenterForbiddenFirstMove,
        MoveRejection::OffAnchorAxes {
            anchor: Position::Center,
        },
        MoveRejection::OffAnchorColumn { column: 1 },
        MoveRejection::OffAnchorRow { row: 1 },
    ];
    let messages: std::collections::HashSet<String> =
        reasons.iter().map(ToString::to_string).collect();
    assert_eq!(messages.len(), reasons.len());
    assert!(MoveRejection::OffAnchorColumn { column: 2 }
        .to_string()
        .contains("COL LOCKED"));
}
