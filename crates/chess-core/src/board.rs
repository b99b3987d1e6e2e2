//! The 64-square board.

use crate::{Color, Move, Piece, PieceKind, Square};
use std::fmt;

/// Back rank order from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A board: one [`Piece`] per square and nothing else.
///
/// There are no castling rights, en passant target or clocks; two boards
/// with the same 64 values are the same position. `Board` is `Clone` so
/// what-if simulations always run on an independent copy.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Piece; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [Piece::EMPTY; 64],
        }
    }

    /// The standard starting position.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as i8;
            board.place(file, 0, Piece::new(*kind, Color::White));
            board.place(file, 1, Piece::new(PieceKind::Pawn, Color::White));
            board.place(file, 6, Piece::new(PieceKind::Pawn, Color::Black));
            board.place(file, 7, Piece::new(*kind, Color::Black));
        }
        board
    }

    fn place(&mut self, file: i8, rank: i8, piece: Piece) {
        if let Some(sq) = Square::from_coords(file, rank) {
            self.set(sq, piece);
        }
    }

    /// Returns the piece on `sq` (possibly [`Piece::EMPTY`]).
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares[sq.index() as usize]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index() as usize] = piece;
    }

    /// Moves whatever stands on the origin to the destination, returning
    /// the piece that was captured there.
    pub fn apply_move(&mut self, m: Move) -> Piece {
        let moving = self.piece_at(m.from());
        let captured = self.piece_at(m.to());
        self.set(m.to(), moving);
        self.set(m.from(), Piece::EMPTY);
        captured
    }

    /// Returns a copy of this board with `m` applied.
    pub fn with_move(&self, m: Move) -> Board {
        let mut scratch = self.clone();
        scratch.apply_move(m);
        scratch
    }

    /// Finds the king of `color`, scanning in row-major order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.piece_at(sq) == king)
    }

    /// Iterates over the squares holding pieces of `color`, in row-major order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.piece_at(sq).is_color(color))
    }

    /// Counts pieces of `kind` and `color`.
    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.squares
            .iter()
            .filter(|p| p.is(kind, color))
            .count()
    }

    /// The raw square codes (0-12), a1 first.
    pub fn codes(&self) -> [u8; 64] {
        let mut codes = [0u8; 64];
        for (code, piece) in codes.iter_mut().zip(self.squares.iter()) {
            *code = piece.code();
        }
        codes
    }

    /// Text diagram with rank 8 on top and `.` for empty squares.
    pub fn diagram(&self) -> String {
        let mut out = String::with_capacity(8 * 11);
        for rank in (0..8).rev() {
            out.push((b'1' + rank as u8) as char);
            out.push(' ');
            for file in 0..8 {
                if let Some(sq) = Square::from_coords(file, rank) {
                    out.push(self.piece_at(sq).to_fen_char());
                }
            }
            out.push('\n');
        }
        out.push_str("  abcdefgh");
        out
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagram())
    }
}
