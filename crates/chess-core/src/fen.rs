//! Board diagrams in FEN piece-placement form.
//!
//! Only the first FEN field is meaningful for a [`Board`]; any further
//! fields (side to move, castling, clocks) are ignored because the board
//! carries no such state.

use crate::{Board, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing a piece placement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: empty string")]
    Empty,

    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid piece placement: rank {rank} describes {squares} squares")]
    RankLength { rank: u8, squares: u32 },

    #[error("invalid piece placement: unexpected character '{0}'")]
    InvalidCharacter(char),
}

impl Board {
    /// The starting position's piece placement.
    pub const STARTPOS_FEN: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Builds a board from a FEN piece placement (rank 8 first).
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file: u32 = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if file < 8 {
                        if let Some(sq) = Square::from_coords(file as i8, rank as i8) {
                            board.set(sq, piece);
                        }
                    }
                    file += 1;
                } else {
                    return Err(FenError::InvalidCharacter(c));
                }
                if file > 8 {
                    return Err(FenError::RankLength {
                        rank: rank + 1,
                        squares: file,
                    });
                }
            }
            if file != 8 {
                return Err(FenError::RankLength {
                    rank: rank + 1,
                    squares: file,
                });
            }
        }
        Ok(board)
    }

    /// Writes the piece placement for this board.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for rank in (0..8i8).rev() {
            let mut empty_count = 0;
            for file in 0..8i8 {
                let piece = Square::from_coords(file, rank)
                    .map(|sq| self.piece_at(sq))
                    .unwrap_or(Piece::EMPTY);
                if piece.is_empty() {
                    empty_count += 1;
                    continue;
                }
                if empty_count > 0 {
                    fen.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                fen.push(piece.to_fen_char());
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }
        fen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};
    use proptest::prelude::*;

    #[test]
    fn startpos_matches_constant() {
        assert_eq!(Board::startpos().to_fen(), Board::STARTPOS_FEN);
        assert_eq!(Board::from_fen(Board::STARTPOS_FEN).unwrap(), Board::startpos());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let full = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(Board::from_fen(full).unwrap(), Board::startpos());
    }

    #[test]
    fn sparse_position() {
        let board = Board::from_fen("7k/8/6Q1/8/8/8/8/K7").unwrap();
        let h8 = Square::from_algebraic("h8").unwrap();
        let g6 = Square::from_algebraic("g6").unwrap();
        assert_eq!(board.piece_at(h8), Piece::new(PieceKind::King, Color::Black));
        assert_eq!(board.piece_at(g6), Piece::new(PieceKind::Queen, Color::White));
        assert_eq!(board.piece_at(Square::A1), Piece::new(PieceKind::King, Color::White));
        assert_eq!(board.to_fen(), "7k/8/6Q1/8/8/8/8/K7");
    }

    #[test]
    fn errors() {
        assert_eq!(Board::from_fen(""), Err(FenError::Empty));
        assert_eq!(Board::from_fen("8/8/8"), Err(FenError::RankCount(3)));
        assert_eq!(
            Board::from_fen("9/8/8/8/8/8/8/8"),
            Err(FenError::InvalidCharacter('9'))
        );
        assert_eq!(
            Board::from_fen("ppppppppp/8/8/8/8/8/8/8"),
            Err(FenError::RankLength { rank: 8, squares: 9 })
        );
        assert_eq!(
            Board::from_fen("7/8/8/8/8/8/8/8"),
            Err(FenError::RankLength { rank: 8, squares: 7 })
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/7x"),
            Err(FenError::InvalidCharacter('x'))
        );
    }

    proptest! {
        #[test]
        fn any_placement_reads_back(codes in prop::collection::vec(0u8..=12, 64)) {
            let mut board = Board::empty();
            for (sq, code) in Square::all().zip(codes) {
                board.set(sq, Piece::from_code(code).unwrap());
            }
            prop_assert_eq!(Board::from_fen(&board.to_fen()), Ok(board));
        }
    }
}
