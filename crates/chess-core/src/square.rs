//! Board coordinates.

use std::fmt;

/// A square on the board, indexed 0-63.
///
/// `rank = index / 8` (0 is rank 1) and `file = index % 8` (0 is file a),
/// so a1 = 0, h1 = 7, a2 = 8 and h8 = 63. Iterating indices in increasing
/// order is the row-major scan every search in the engine relies on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Square at `file`/`rank` (both 0-7), `None` when off the board.
    #[inline]
    pub const fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Parses two characters, file letter then rank digit (`"e4"`). The
    /// file letter may be upper case.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        match s.as_bytes() {
            &[f, r] => {
                let f = f.to_ascii_lowercase();
                if (b'a'..=b'h').contains(&f) && (b'1'..=b'8').contains(&r) {
                    Square::from_coords((f - b'a') as i8, (r - b'1') as i8)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// All 64 squares in scan order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Column, 0 for the a-file.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Row, 0 for rank 1.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Square displaced by `df` files and `dr` ranks, `None` when that
    /// leaves the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Self> {
        Square::from_coords(self.file() as i8 + df, self.rank() as i8 + dr)
    }

    /// Signed `(files, ranks)` from `self` to `to`.
    #[inline]
    pub const fn delta(self, to: Square) -> (i8, i8) {
        (
            to.file() as i8 - self.file() as i8,
            to.rank() as i8 - self.rank() as i8,
        )
    }

    pub fn to_algebraic(self) -> String {
        let mut s = String::with_capacity(2);
        s.push((b'a' + self.file()) as char);
        s.push((b'1' + self.rank()) as char);
        s
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}
