//! Game rules for Fin Fac Foe.
//!
//! Pure functions over the board and trap state. The engine owns all state;
//! these functions only decide.

pub mod draw;
pub mod trap;
pub mod win;

pub use draw::is_full;
pub use trap::{AxisLock, TrapState};
pub use win::check_winner;

use super::action::MoveRejection;
use super::{Board, Position, Role};
use tracing::instrument;

/// Decides whether `role` may play at `target` on ply `ply`.
///
/// The target must already be known to be empty. Returns the trap state that
/// holds after the move, which is unchanged for the Challenger.
#[instrument(skip(board))]
pub fn judge(
    role: Role,
    ply: u8,
    trap: TrapState,
    board: &Board,
    target: Position,
) -> Result<TrapState, MoveRejection> {
    match role {
        Role::Challenger => {
            if ply == 0 && target == Position::CENTER {
                return Err(MoveRejection::CenterForbiddenFirstMove);
            }
            Ok(trap)
        }
        Role::Boardmaster => trap.judge(board, target, ply == 1),
    }
}
