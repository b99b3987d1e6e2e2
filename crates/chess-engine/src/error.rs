//! Error types for move submission.
//!
//! All of these are recoverable: the caller reports the message and asks
//! the player for another move.

use chess_core::Square;
use thiserror::Error;

/// The notation parser could not read the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid move format '{0}' (try e2e4, Nf3 or e4)")]
    InvalidFormat(String),
}

/// Reasons a submitted move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    InvalidFormat(#[from] NotationError),

    /// No piece of the side to move can legally reach the destination.
    #[error("no legal move to {0}")]
    NoCandidate(Square),

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("illegal, king would be in check")]
    WouldExposeOwnKing,

    #[error("the game has ended; resign, quit or start a new game")]
    GameAlreadyEnded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(MoveError::NoCandidate(e4).to_string(), "no legal move to e4");
        assert_eq!(
            MoveError::WouldExposeOwnKing.to_string(),
            "illegal, king would be in check"
        );
        let notation: MoveError = NotationError::InvalidFormat("zz".into()).into();
        assert_eq!(
            notation.to_string(),
            "invalid move format 'zz' (try e2e4, Nf3 or e4)"
        );
    }
}
