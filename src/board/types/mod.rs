//! Core chess types.
//!
//! - `PieceKind`, `Color`, `PieceSet` - piece identity and per-kind bitboards
//! - `Square` - bit index of a board square (h1 = 0, a8 = 63)
//! - `Bitboard` - 64-bit occupancy set
//! - `Move` - UCI long algebraic move
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, PieceKind, PieceSet};
pub use square::Square;
