//! Perft (performance test) for legality validation.
//!
//! Perft counts the leaf nodes of the legal move tree to a fixed depth.
//! Castling, en passant and promotion cannot occur within the first three
//! plies of the starting position, so the well-known 20 / 400 / 8902
//! counts hold for these rules too.

use super::legal_moves;
use chess_core::{Board, Color};

/// Counts the number of leaf nodes at the given depth, `color` to move.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, color);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&m| perft(&board.with_move(m), color.opposite(), depth - 1))
        .sum()
}

/// Perft with divide: the node count below each root move, sorted by
/// coordinate notation.
pub fn perft_divide(board: &Board, color: Color, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(board, color)
        .into_iter()
        .map(|m| {
            let nodes = if depth > 1 {
                perft(&board.with_move(m), color.opposite(), depth - 1)
            } else {
                1
            };
            (m.to_coordinate(), nodes)
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
