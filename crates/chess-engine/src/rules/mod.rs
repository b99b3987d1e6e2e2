//! Terminal-state detection.
//!
//! A side with no king-safe move is either checkmated (its king is
//! attacked) or stalemated. Repetition and move-count draws do not exist in
//! these rules.

use crate::movegen::{is_in_check, legal_moves_iter};
use chess_core::{Board, Color};

/// State of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// At least one king-safe move exists.
    Ongoing,
    /// No king-safe move, king attacked.
    Checkmate,
    /// No king-safe move, king not attacked.
    Stalemate,
}

impl Terminal {
    /// Returns true for checkmate and stalemate.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, Terminal::Ongoing)
    }
}

/// Returns true as soon as one king-safe move for `color` is found.
///
/// Origins and destinations are tried in row-major order; only an
/// exhausted search returns false.
pub fn has_any_safe_legal_move(board: &Board, color: Color) -> bool {
    legal_moves_iter(board, color).next().is_some()
}

/// Classifies the position for `color` to move.
pub fn terminal_state(board: &Board, color: Color) -> Terminal {
    if has_any_safe_legal_move(board, color) {
        Terminal::Ongoing
    } else if is_in_check(board, color) {
        Terminal::Checkmate
    } else {
        Terminal::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    #[test]
    fn startpos_is_ongoing() {
        let b = Board::startpos();
        assert_eq!(terminal_state(&b, Color::White), Terminal::Ongoing);
        assert_eq!(terminal_state(&b, Color::Black), Terminal::Ongoing);
        assert!(!Terminal::Ongoing.is_over());
    }

    #[test]
    fn back_rank_mate() {
        let b = board("R5k1/5ppp/8/8/8/8/8/4K3");
        assert_eq!(terminal_state(&b, Color::Black), Terminal::Checkmate);
        assert!(Terminal::Checkmate.is_over());
    }

    #[test]
    fn fools_mate() {
        let b = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR");
        assert!(is_in_check(&b, Color::White));
        assert_eq!(terminal_state(&b, Color::White), Terminal::Checkmate);
    }

    #[test]
    fn queen_stalemate() {
        // Black king on h8, white queen g6 and king f7 cover every flight.
        let b = board("7k/5K2/6Q1/8/8/8/8/8");
        assert!(!is_in_check(&b, Color::Black));
        assert!(!has_any_safe_legal_move(&b, Color::Black));
        assert_eq!(terminal_state(&b, Color::Black), Terminal::Stalemate);
    }

    #[test]
    fn check_with_escape_is_ongoing() {
        let b = board("4k3/8/8/8/8/8/8/4R1K1");
        assert!(is_in_check(&b, Color::Black));
        assert_eq!(terminal_state(&b, Color::Black), Terminal::Ongoing);
    }
}
