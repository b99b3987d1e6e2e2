//! Chess rules and game sessions against a computer opponent.
//!
//! This crate provides:
//! - Move validation for each piece kind and king-safety checks
//! - [`terminal_state`] for checkmate and stalemate detection
//! - Player notation: coordinate (`e2e4`), piece shorthand (`Nf3`) and
//!   destination-only (`e4`)
//! - [`GreedyOpponent`], a capture-then-check-then-anything opponent
//! - [`GameSession`], the per-player game state machine
//!
//! The rules are a reduced chess: no castling, no en passant, no promotion
//! and no draws other than stalemate.
//!
//! # Example
//!
//! ```
//! use chess_engine::{GameSession, MoveOutcome};
//!
//! let mut session = GameSession::new(true);
//! let outcome = session.submit_move("e4").unwrap();
//! assert!(matches!(outcome, MoveOutcome::Applied { .. }));
//! assert_eq!(session.last_human_move(), Some("Pawn to e4"));
//! ```

mod error;
mod game;
pub mod movegen;
pub mod notation;
mod opponent;
pub mod rules;

pub use error::{MoveError, NotationError};
pub use game::{
    format_elapsed, human_is_white_for_slot, start_game, EndReason, GameSession, MoveOutcome,
    OpponentReply,
};
pub use movegen::{is_in_check, is_king_safe, is_legal, is_pseudo_legal, legal_moves};
pub use notation::{describe_move, parse, resolve, ParsedMove};
pub use opponent::{GreedyOpponent, Opponent, Phase};
pub use rules::{has_any_safe_legal_move, terminal_state, Terminal};
