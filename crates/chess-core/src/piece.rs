//! Piece representation.
//!
//! A [`Piece`] is a single byte: `0` is an empty square, `1..=6` are the
//! White pawn, knight, bishop, rook, queen and king, and `7..=12` the Black
//! pieces in the same order. The kind ordering matters: the base kind of any
//! code is `code - 6` for Black and `code` for White.

use crate::Color;

/// The six kinds of chess pieces, ordered pawn through king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Creates a kind from its base code (1-6).
    pub const fn from_base(base: u8) -> Option<Self> {
        match base {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Parses the letter players type for a piece (`R`, `N`, `B`, `Q`, `K`),
    /// in either case. Pawns have no letter.
    pub const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lower-case diagram letter.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// The content of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    /// An empty square.
    pub const EMPTY: Piece = Piece(0);

    /// Creates a colored piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece(kind as u8 + color.code_offset())
    }

    /// Creates a piece from its square code (0-12).
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        if code <= 12 {
            Some(Piece(code))
        } else {
            None
        }
    }

    /// Returns the square code (0-12).
    #[inline]
    pub const fn code(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        self.0 >= 1 && self.0 <= 6
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        self.0 >= 7
    }

    /// Strips the color, leaving 0 for empty and 1-6 for pawn..king.
    #[inline]
    pub const fn base_type(self) -> u8 {
        if self.0 > 6 {
            self.0 - 6
        } else {
            self.0
        }
    }

    /// Returns the piece kind, or `None` for an empty square.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_base(self.base_type())
    }

    /// Returns the owning color, or `None` for an empty square.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        if self.is_white() {
            Some(Color::White)
        } else if self.is_black() {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Returns true if this square holds a piece of `color`.
    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        match color {
            Color::White => self.is_white(),
            Color::Black => self.is_black(),
        }
    }

    /// Returns true if this square holds `kind` of `color`.
    #[inline]
    pub const fn is(self, kind: PieceKind, color: Color) -> bool {
        self.0 == Piece::new(kind, color).0
    }

    /// Diagram character: upper case for White, lower case for Black, `.` for empty.
    pub const fn to_fen_char(self) -> char {
        match (self.kind(), self.is_white()) {
            (Some(kind), true) => kind.letter().to_ascii_uppercase(),
            (Some(kind), false) => kind.letter(),
            (None, _) => '.',
        }
    }

    /// Parses a diagram character (`PNBRQK` White, `pnbrqk` Black).
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_codes() {
        assert_eq!(Piece::EMPTY.code(), 0);
        assert_eq!(Piece::new(PieceKind::Pawn, Color::White).code(), 1);
        assert_eq!(Piece::new(PieceKind::King, Color::White).code(), 6);
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).code(), 7);
        assert_eq!(Piece::new(PieceKind::King, Color::Black).code(), 12);
        assert_eq!(Piece::from_code(13), None);
    }

    #[test]
    fn base_type_strips_color() {
        for kind in PieceKind::ALL {
            assert_eq!(Piece::new(kind, Color::White).base_type(), kind as u8);
            assert_eq!(Piece::new(kind, Color::Black).base_type(), kind as u8);
        }
        assert_eq!(Piece::EMPTY.base_type(), 0);
    }

    #[test]
    fn classification() {
        let wq = Piece::new(PieceKind::Queen, Color::White);
        let bn = Piece::new(PieceKind::Knight, Color::Black);
        assert!(wq.is_white() && !wq.is_black() && !wq.is_empty());
        assert!(bn.is_black() && !bn.is_white());
        assert!(Piece::EMPTY.is_empty());
        assert_eq!(Piece::EMPTY.color(), None);
        assert_eq!(bn.color(), Some(Color::Black));
        assert!(bn.is(PieceKind::Knight, Color::Black));
    }

    #[test]
    fn kind_ordering() {
        assert!(PieceKind::Pawn < PieceKind::Knight);
        assert!(PieceKind::Knight < PieceKind::Bishop);
        assert!(PieceKind::Bishop < PieceKind::Rook);
        assert!(PieceKind::Rook < PieceKind::Queen);
        assert!(PieceKind::Queen < PieceKind::King);
    }

    #[test]
    fn letters() {
        assert_eq!(PieceKind::from_letter('N'), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_letter('q'), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_letter('P'), None);
        assert_eq!(Piece::from_fen_char('k'), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(Piece::new(PieceKind::Rook, Color::White).to_fen_char(), 'R');
        assert_eq!(Piece::EMPTY.to_fen_char(), '.');
        assert_eq!(Piece::from_fen_char('x'), None);
    }
}
