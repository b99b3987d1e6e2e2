//! Ray casting for sliding pieces.

use chess_core::{Board, Square};

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a rank, file or diagonal; the walk steps one
/// square at a time toward `to` and stops at the first obstruction.
pub(crate) fn ray_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    debug_assert!(df == 0 || dr == 0 || df.abs() == dr.abs());
    let (step_f, step_r) = (df.signum(), dr.signum());

    let mut current = from.offset(step_f, step_r);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.piece_at(sq).is_empty() {
            return false;
        }
        current = sq.offset(step_f, step_r);
    }
    false
}
