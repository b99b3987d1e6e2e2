//! Move legality.
//!
//! Legality is decided in two composable steps:
//! - [`is_pseudo_legal`]: the piece's movement geometry and blocking rules
//! - [`is_king_safe`]: simulating the move on a scratch board and checking
//!   the mover's own king
//!
//! There is no castling, en passant or promotion. Every search walks origins
//! and then destinations in increasing square order, so the first match
//! found is always the same one.

mod rays;
pub mod perft;

use chess_core::{Board, Color, Move, PieceKind, Square};

use rays::ray_is_clear;

/// Returns true if `m` obeys the moving piece's geometry for `color`,
/// without regard to the safety of `color`'s own king.
///
/// Rejected up front: an empty origin, an origin that does not belong to
/// `color`, a destination holding one of `color`'s own pieces, and a null
/// move.
pub fn is_pseudo_legal(board: &Board, m: Move, color: Color) -> bool {
    let (from, to) = (m.from(), m.to());
    if from == to {
        return false;
    }
    let piece = board.piece_at(from);
    let kind = match piece.kind() {
        Some(kind) => kind,
        None => return false,
    };
    if !piece.is_color(color) || board.piece_at(to).is_color(color) {
        return false;
    }

    match kind {
        PieceKind::Pawn => pawn_move(board, from, to, color),
        PieceKind::Knight => knight_move(from, to),
        PieceKind::Bishop => bishop_move(board, from, to),
        PieceKind::Rook => rook_move(board, from, to),
        PieceKind::Queen => bishop_move(board, from, to) || rook_move(board, from, to),
        PieceKind::King => king_move(from, to),
    }
}

fn pawn_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let (df, dr) = from.delta(to);
    let dir = color.pawn_direction();
    let target = board.piece_at(to);

    if df == 0 {
        if dr == dir {
            return target.is_empty();
        }
        if dr == 2 * dir && from.rank() == color.pawn_home_rank() {
            let middle_empty = from
                .offset(0, dir)
                .is_some_and(|mid| board.piece_at(mid).is_empty());
            return middle_empty && target.is_empty();
        }
        return false;
    }

    // Diagonal steps only capture.
    df.abs() == 1 && dr == dir && target.is_color(color.opposite())
}

fn knight_move(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    matches!((df.abs(), dr.abs()), (1, 2) | (2, 1))
}

fn bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    df != 0 && df.abs() == dr.abs() && ray_is_clear(board, from, to)
}

fn rook_move(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    (df == 0) != (dr == 0) && ray_is_clear(board, from, to)
}

fn king_move(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    df.abs().max(dr.abs()) <= 1
}

/// Returns true if `color`'s king is attacked: some opposing piece has a
/// pseudo-legal move onto its square.
///
/// A board without a king of `color` is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let king = match board.king_square(color) {
        Some(sq) => sq,
        None => return false,
    };
    let them = color.opposite();
    board
        .squares_of(them)
        .any(|from| is_pseudo_legal(board, Move::new(from, king), them))
}

/// Returns true if playing `m` on a copy of `board` leaves `color`'s own
/// king out of check.
pub fn is_king_safe(board: &Board, m: Move, color: Color) -> bool {
    !is_in_check(&board.with_move(m), color)
}

/// Pseudo-legal and king-safe.
pub fn is_legal(board: &Board, m: Move, color: Color) -> bool {
    is_pseudo_legal(board, m, color) && is_king_safe(board, m, color)
}

/// Iterates over every legal move for `color` in row-major
/// origin-then-destination order.
pub fn legal_moves_iter(board: &Board, color: Color) -> impl Iterator<Item = Move> + '_ {
    board
        .squares_of(color)
        .flat_map(|from| Square::all().map(move |to| Move::new(from, to)))
        .filter(move |&m| is_legal(board, m, color))
}

/// Collects every legal move for `color` in row-major order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    legal_moves_iter(board, color).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(s: &str) -> Move {
        Move::from_coordinate(s).unwrap()
    }

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    #[test]
    fn rejects_trivial_cases() {
        let b = Board::startpos();
        assert!(!is_pseudo_legal(&b, mv("e4e5"), Color::White)); // empty origin
        assert!(!is_pseudo_legal(&b, mv("e7e5"), Color::White)); // wrong color
        assert!(!is_pseudo_legal(&b, mv("a1a2"), Color::White)); // own piece
        assert!(!is_pseudo_legal(&b, mv("e2e2"), Color::White)); // null move
    }

    #[test]
    fn pawn_pushes() {
        let b = Board::startpos();
        assert!(is_pseudo_legal(&b, mv("e2e3"), Color::White));
        assert!(is_pseudo_legal(&b, mv("e2e4"), Color::White));
        assert!(!is_pseudo_legal(&b, mv("e2e5"), Color::White));
        assert!(is_pseudo_legal(&b, mv("d7d5"), Color::Black));
        assert!(!is_pseudo_legal(&b, mv("d7d8"), Color::Black)); // backwards
        assert!(!is_pseudo_legal(&b, mv("e2d3"), Color::White)); // diagonal without capture
    }

    #[test]
    fn pawn_double_push_needs_home_rank_and_clear_path() {
        let b = board("4k3/8/8/8/8/4P3/8/4K3");
        assert!(!is_pseudo_legal(&b, mv("e3e5"), Color::White));

        let blocked = board("4k3/8/8/8/8/4n3/4P3/4K3");
        assert!(!is_pseudo_legal(&blocked, mv("e2e4"), Color::White));
        assert!(!is_pseudo_legal(&blocked, mv("e2e3"), Color::White));

        let far_blocked = board("4k3/8/8/8/4n3/8/4P3/4K3");
        assert!(!is_pseudo_legal(&far_blocked, mv("e2e4"), Color::White));
        assert!(is_pseudo_legal(&far_blocked, mv("e2e3"), Color::White));
    }

    #[test]
    fn pawn_captures() {
        let b = board("4k3/8/8/3p1N2/4P3/8/8/4K3");
        assert!(is_pseudo_legal(&b, mv("e4d5"), Color::White));
        assert!(!is_pseudo_legal(&b, mv("e4f5"), Color::White)); // own knight
        assert!(is_pseudo_legal(&b, mv("d5e4"), Color::Black));
        assert!(is_pseudo_legal(&b, mv("e4e5"), Color::White));
    }

    #[test]
    fn pawn_on_last_rank_stays_a_pawn() {
        let b = board("4k3/P7/8/8/8/8/8/4K3");
        assert!(is_pseudo_legal(&b, mv("a7a8"), Color::White));
        let after = b.with_move(mv("a7a8"));
        assert_eq!(after.piece_at(Square::A8).kind(), Some(PieceKind::Pawn));
    }

    #[test]
    fn knight_geometry() {
        let b = Board::startpos();
        assert!(is_pseudo_legal(&b, mv("g1f3"), Color::White));
        assert!(is_pseudo_legal(&b, mv("g1h3"), Color::White));
        assert!(!is_pseudo_legal(&b, mv("g1e2"), Color::White)); // own pawn
        assert!(!is_pseudo_legal(&b, mv("g1g3"), Color::White));
    }

    #[test]
    fn sliders_are_blocked() {
        let b = Board::startpos();
        assert!(!is_pseudo_legal(&b, mv("c1e3"), Color::White));
        assert!(!is_pseudo_legal(&b, mv("a1a3"), Color::White));
        assert!(!is_pseudo_legal(&b, mv("d1d3"), Color::White));

        let open = board("4k3/8/8/8/3p4/8/8/Q3K2R");
        assert!(is_pseudo_legal(&open, mv("a1d4"), Color::White)); // capture stops ray
        assert!(!is_pseudo_legal(&open, mv("a1e5"), Color::White)); // beyond blocker
        assert!(is_pseudo_legal(&open, mv("a1a8"), Color::White));
        assert!(is_pseudo_legal(&open, mv("h1f1"), Color::White));
        assert!(!is_pseudo_legal(&open, mv("h1d1"), Color::White)); // king in between
        assert!(!is_pseudo_legal(&open, mv("h1g3"), Color::White)); // not a line
    }

    #[test]
    fn king_steps_and_no_castling() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R");
        assert!(is_pseudo_legal(&b, mv("e1f2"), Color::White));
        assert!(is_pseudo_legal(&b, mv("e1d1"), Color::White));
        assert!(!is_pseudo_legal(&b, mv("e1g1"), Color::White));
        assert!(!is_pseudo_legal(&b, mv("e1c1"), Color::White));
        assert!(!is_pseudo_legal(&b, mv("e8g8"), Color::Black));
    }

    #[test]
    fn check_detection() {
        let b = Board::startpos();
        assert!(!is_in_check(&b, Color::White));
        assert!(!is_in_check(&b, Color::Black));

        let checked = board("4k3/8/8/8/8/8/3p4/4K3");
        assert!(is_in_check(&checked, Color::White));

        let rook_screened = board("4k3/8/8/8/4p3/8/8/4R2K");
        assert!(!is_in_check(&rook_screened, Color::Black));
    }

    #[test]
    fn pinned_piece_is_not_king_safe() {
        // The e2 knight shields the king from the e8 rook.
        let b = board("4r1k1/8/8/8/8/8/4N3/4K3");
        let m = mv("e2c3");
        assert!(is_pseudo_legal(&b, m, Color::White));
        assert!(!is_king_safe(&b, m, Color::White));
        assert!(!is_legal(&b, m, Color::White));
    }

    #[test]
    fn startpos_has_twenty_moves_each() {
        let b = Board::startpos();
        assert_eq!(legal_moves(&b, Color::White).len(), 20);
        assert_eq!(legal_moves(&b, Color::Black).len(), 20);
    }

    #[test]
    fn legal_moves_are_row_major() {
        let moves = legal_moves(&Board::startpos(), Color::White);
        assert_eq!(moves[0], mv("b1a3"));
        assert_eq!(moves[1], mv("b1c3"));
        let mut sorted = moves.clone();
        sorted.sort_by_key(|m| (m.from(), m.to()));
        assert_eq!(moves, sorted);
    }
}
