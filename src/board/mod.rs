//! Chess board representation.
//!
//! Twelve bitboards, one per (color, kind), plus per-color occupancy and the
//! usual game-state fields. Moves are applied with coarse checks only; full
//! legality is left to an optional move authority installed on the session.
//!
//! # Example
//! ```
//! use fernbea::board::{Board, Move};
//!
//! let mut board = Board::new();
//! let mv: Move = "e2e4".parse().unwrap();
//! board.apply_move(mv).unwrap();
//! println!("{board}");
//! ```

mod error;
mod fen;
mod make_move;
mod render;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, InvariantError, MoveError, MoveParseError, SquareError};
pub use state::{start_bitboard, Board};
pub use types::{Bitboard, BitboardIter, CastlingRights, Color, Move, PieceKind, PieceSet, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
