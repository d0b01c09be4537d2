//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `start_position.rs` - Canonical starting layout and its properties
//! - `apply_move.rs` - Coarse move application and state bookkeeping
//! - `edge_cases.rs` - Castling, en passant and promotion shapes
//! - `proptest.rs` - Property-based tests


use rand::prelude::*;

use crate::board::{Board, Move, PieceKind, Square};

/// Pick a random move that passes the board's coarse checks: a piece of
/// the side to move onto any square not holding one of its own pieces.
pub(super) fn random_coarse_move(board: &Board, rng: &mut StdRng) -> Option<Move> {
    let own = board.occupancy(board.side_to_move());
    let sources: Vec<Square> = own.iter().collect();
    let from = *sources.choose(rng)?;
    let targets: Vec<Square> = (0..64)
        .filter_map(Square::from_index)
        .filter(|sq| !own.contains(*sq))
        .collect();
    let to = *targets.choose(rng)?;

    let is_pawn = board
        .piece_at(from)
        .is_some_and(|(_, kind)| kind == PieceKind::Pawn);
    if is_pawn && (to.rank() == 0 || to.rank() == 7) {
        return Some(Move::new_promotion(from, to, PieceKind::Queen));
    }
    Some(Move::new(from, to))
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

pub(super) fn mv(token: &str) -> Move {
    token.parse().unwrap()
}
