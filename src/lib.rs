//! A UCI chess-engine shell over a bitboard board.
//!
//! [`board`] holds the position, [`uci`] runs the protocol session and
//! [`engine`] defines the seams for move legality and search.

pub mod board;
pub mod engine;
pub mod uci;

pub use board::{Board, Color, Move, PieceKind, Square};
pub use uci::UciSession;

/// Name reported in `id name`.
pub const ENGINE_NAME: &str = "fernbea";

/// Author reported in `id author`.
pub const ENGINE_AUTHOR: &str = "rwsa";

/// UCI token for "no move".
pub const NULL_MOVE: &str = "0000";
