//! Computer opponents.

use crate::movegen::{is_in_check, legal_moves};
use chess_core::{Board, Color, Move};

/// Picks a move for the computer-controlled side.
pub trait Opponent {
    /// Returns a legal, king-safe move for `color`, or `None` if it has none.
    fn select_move(&self, board: &Board, color: Color) -> Option<Move>;
}

/// Which rule of the greedy search produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The move captures an opposing piece.
    Capture,
    /// The move puts the opposing king in check.
    Check,
    /// First legal move in scan order.
    Any,
}

/// A shallow greedy opponent: capture if possible, else give check, else
/// play the first legal move.
///
/// Each phase scans origins then destinations in row-major order and takes
/// the first match, so the choice is deterministic. Captures are not
/// weighed against each other; taking a pawn on a3 beats taking a queen on
/// h8.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyOpponent;

impl GreedyOpponent {
    /// Selects a move and reports the phase that chose it.
    pub fn select_with_phase(&self, board: &Board, color: Color) -> Option<(Move, Phase)> {
        let them = color.opposite();
        let moves = legal_moves(board, color);

        if let Some(&m) = moves.iter().find(|m| board.piece_at(m.to()).is_color(them)) {
            return Some((m, Phase::Capture));
        }
        if let Some(&m) = moves
            .iter()
            .find(|&&m| is_in_check(&board.with_move(m), them))
        {
            return Some((m, Phase::Check));
        }
        moves.first().map(|&m| (m, Phase::Any))
    }
}

impl Opponent for GreedyOpponent {
    fn select_move(&self, board: &Board, color: Color) -> Option<Move> {
        self.select_with_phase(board, color).map(|(m, _)| m)
    }
}
