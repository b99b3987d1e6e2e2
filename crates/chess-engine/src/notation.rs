//! Player move notation.
//!
//! Three forms are accepted, after trimming and lower-casing:
//! - coordinate, `e2e4`: origin and destination given
//! - piece shorthand, `nf3`: piece kind and destination given
//! - destination only, `e4`
//!
//! Shorthand is resolved against the live board by scanning the side to
//! move's pieces in row-major order and taking the first one with a legal,
//! king-safe move to the destination. When several pieces qualify the
//! lowest-indexed one wins without any warning; `e4` on a board where both
//! a pawn and a knight can reach e4 plays whichever stands on the lower
//! square.

use crate::error::{MoveError, NotationError};
use crate::movegen::{is_king_safe, is_pseudo_legal};
use chess_core::{Board, Color, Move, PieceKind, Square};

/// A parsed move before it is matched against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedMove {
    /// Both squares given.
    Coordinate(Move),
    /// Piece kind and destination given, origin unknown.
    Piece { kind: PieceKind, to: Square },
    /// Destination only.
    Destination(Square),
}

impl ParsedMove {
    /// The destination square, known for every form.
    pub fn destination(self) -> Square {
        match self {
            ParsedMove::Coordinate(m) => m.to(),
            ParsedMove::Piece { to, .. } => to,
            ParsedMove::Destination(to) => to,
        }
    }
}

/// Parses player input into a [`ParsedMove`].
pub fn parse(input: &str) -> Result<ParsedMove, NotationError> {
    let text = input.trim().to_ascii_lowercase();
    let invalid = || NotationError::InvalidFormat(input.trim().to_string());
    if !text.is_ascii() {
        return Err(invalid());
    }

    match text.len() {
        4 => Move::from_coordinate(&text)
            .map(ParsedMove::Coordinate)
            .ok_or_else(invalid),
        3 => {
            let kind = text
                .chars()
                .next()
                .and_then(PieceKind::from_letter)
                .ok_or_else(invalid)?;
            let to = Square::from_algebraic(&text[1..]).ok_or_else(invalid)?;
            Ok(ParsedMove::Piece { kind, to })
        }
        2 => Square::from_algebraic(&text)
            .map(ParsedMove::Destination)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Matches a parsed move against `board` for `color` to move.
///
/// Coordinate moves are checked as given. Shorthand picks the first
/// qualifying piece in scan order; if every pseudo-legal candidate would
/// leave the king in check the error is [`MoveError::WouldExposeOwnKing`],
/// and if there is no pseudo-legal candidate at all it is
/// [`MoveError::NoCandidate`].
pub fn resolve(board: &Board, parsed: ParsedMove, color: Color) -> Result<Move, MoveError> {
    match parsed {
        ParsedMove::Coordinate(m) => check_coordinate(board, m, color),
        ParsedMove::Piece { kind, to } => {
            find_origin(board, to, color, |from| board.piece_at(from).kind() == Some(kind))
        }
        ParsedMove::Destination(to) => find_origin(board, to, color, |_| true),
    }
}

fn check_coordinate(board: &Board, m: Move, color: Color) -> Result<Move, MoveError> {
    let piece = board.piece_at(m.from());
    let kind = match piece.kind() {
        Some(kind) => kind,
        None => {
            return Err(MoveError::IllegalMove(format!(
                "there is no piece on {}",
                m.from()
            )))
        }
    };
    if !piece.is_color(color) {
        return Err(MoveError::IllegalMove(format!(
            "the {} on {} is not yours",
            kind,
            m.from()
        )));
    }
    if !is_pseudo_legal(board, m, color) {
        return Err(MoveError::IllegalMove(format!(
            "a {} cannot move from {} to {}",
            kind,
            m.from(),
            m.to()
        )));
    }
    if !is_king_safe(board, m, color) {
        return Err(MoveError::WouldExposeOwnKing);
    }
    Ok(m)
}

fn find_origin<F>(board: &Board, to: Square, color: Color, accepts: F) -> Result<Move, MoveError>
where
    F: Fn(Square) -> bool,
{
    let mut exposes_king = false;
    for from in board.squares_of(color).filter(|&from| accepts(from)) {
        let m = Move::new(from, to);
        if !is_pseudo_legal(board, m, color) {
            continue;
        }
        if is_king_safe(board, m, color) {
            return Ok(m);
        }
        exposes_king = true;
    }

    if exposes_king {
        Err(MoveError::WouldExposeOwnKing)
    } else {
        Err(MoveError::NoCandidate(to))
    }
}

/// Human-readable description of `m`, given the board before it is played.
///
/// A king stepping two files sideways is labelled as castling. The rules
/// never allow that move; the label only exists for display.
pub fn describe_move(board: &Board, m: Move) -> String {
    let kind = match board.piece_at(m.from()).kind() {
        Some(kind) => kind,
        None => return m.to_coordinate(),
    };
    let (df, dr) = m.from().delta(m.to());
    if kind == PieceKind::King && dr == 0 && df.abs() == 2 {
        return if df > 0 {
            "Castles King Side".to_string()
        } else {
            "Castles Queen Side".to_string()
        };
    }
    format!("{} to {}", kind, m.to())
}
