//! Core types for the chess rules engine.
//!
//! This crate provides the plain data the engine works on:
//! - [`Piece`], [`PieceKind`] and [`Color`], using the 0-12 square encoding
//! - [`Square`], indexed 0-63 in row-major order
//! - [`Move`] for from/to pairs
//! - [`Board`], a fixed 64-square array, and FEN piece-placement parsing

mod board;
mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use board::Board;
pub use color::Color;
pub use fen::FenError;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
