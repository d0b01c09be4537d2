//! Collaborators the session consults but does not implement.

use crate::board::{Board, Move};

use super::SearchLimits;

/// Full move legality. The board itself only makes coarse checks.
pub trait MoveAuthority {
    /// Every legal move in `board`.
    fn legal_moves(&self, board: &Board) -> Vec<Move>;

    /// Whether `mv` is legal in `board`.
    fn is_legal(&self, board: &Board, mv: Move) -> bool {
        self.legal_moves(board).contains(&mv)
    }
}

/// Move selection for `go`.
pub trait Searcher {
    /// Pick a move for the side to move, or `None` when there is nothing to
    /// offer. The board is borrowed for the duration of the call only.
    fn choose_move(&mut self, board: &Board, limits: &SearchLimits) -> Option<Move>;

    /// Cancel a search in flight. Synchronous searchers have nothing to do.
    fn stop(&mut self) {}
}

/// A searcher that never has a move.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSearcher;

impl Searcher for NullSearcher {
    fn choose_move(&mut self, _board: &Board, _limits: &SearchLimits) -> Option<Move> {
        None
    }
}
