use super::error::MoveError;
use super::{Board, Color, Move, PieceKind, Square};

/// The castling right tied to a rook corner, if `sq` is one.
fn corner_right(sq: Square) -> Option<(Color, bool)> {
    let color = match sq.rank() {
        0 => Color::White,
        7 => Color::Black,
        _ => return None,
    };
    match sq.file() {
        0 => Some((color, false)),
        7 => Some((color, true)),
        _ => None,
    }
}

impl Board {
    /// Apply `mv` for the side to move.
    ///
    /// Only coarse checks are made: a piece of the side to move must stand on
    /// the source square, and the destination must not hold one of its own
    /// pieces. Anything on the destination belonging to the opponent is
    /// captured. Castling rook moves, en passant captures and promotions are
    /// carried out when the move has that shape. The null move is refused.
    /// On error the board is left untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if mv.is_null() {
            return Err(MoveError::NullMove);
        }
        let color = self.side_to_move;
        let from = mv.from();
        let to = mv.to();

        let (mover_color, kind) = self
            .piece_at(from)
            .ok_or(MoveError::EmptySource { square: from })?;
        if mover_color != color {
            return Err(MoveError::WrongColor {
                square: from,
                side_to_move: color,
            });
        }
        if self.occupancy(color).contains(to) {
            return Err(MoveError::OwnPieceOnTarget { square: to });
        }

        let mut captured = self.clear_opponent_on(to, color);

        if kind == PieceKind::Pawn
            && captured.is_none()
            && from.file() != to.file()
            && self.en_passant_target == Some(to)
        {
            if let Some(victim) = to.offset_rank(-color.pawn_direction()) {
                captured = self.clear_opponent_on(victim, color);
            }
        }

        self.remove_piece(from, color, kind);
        let placed = match mv.promotion() {
            Some(promo) if kind == PieceKind::Pawn => promo,
            _ => kind,
        };
        self.set_piece(to, color, placed);

        if kind == PieceKind::King
            && from.rank() == color.back_rank()
            && from.file() == 4
            && to.rank() == from.rank()
            && to.file().abs_diff(4) == 2
        {
            self.move_castling_rook(color, from, to);
        }

        if kind == PieceKind::King {
            self.castling_rights.remove_color(color);
        }
        for sq in [from, to] {
            if let Some((owner, kingside)) = corner_right(sq) {
                self.castling_rights.remove(owner, kingside);
            }
        }

        self.en_passant_target = None;
        let double_push = from.offset_rank(2 * color.pawn_direction()) == Some(to);
        if kind == PieceKind::Pawn && from.rank() == color.pawn_start_rank() && double_push {
            self.en_passant_target = from.offset_rank(color.pawn_direction());
        }

        if kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();

        debug_assert!(self.validate().is_ok(), "apply_move broke the board: {mv}");
        Ok(())
    }

    /// Clear `sq` from every piece set of `mover`'s opponent, returning the
    /// kind that was there.
    fn clear_opponent_on(&mut self, sq: Square, mover: Color) -> Option<PieceKind> {
        let opponent = mover.opponent();
        if !self.occupancy(opponent).contains(sq) {
            return None;
        }
        let mut captured = None;
        for kind in PieceKind::ALL {
            if self.pieces_of(opponent, kind).contains(sq) {
                self.remove_piece(sq, opponent, kind);
                captured = Some(kind);
            }
        }
        captured
    }

    fn move_castling_rook(&mut self, color: Color, king_from: Square, king_to: Square) {
        let (rook_from_file, rook_to_file) = if king_to.file() > king_from.file() {
            (7, 5)
        } else {
            (0, 3)
        };
        let (Some(rook_from), Some(rook_to)) = (
            king_from.with_file(rook_from_file),
            king_from.with_file(rook_to_file),
        ) else {
            return;
        };
        if self.pieces_of(color, PieceKind::Rook).contains(rook_from)
            && !self.all_occupied().contains(rook_to)
        {
            self.remove_piece(rook_from, color, PieceKind::Rook);
            self.set_piece(rook_to, color, PieceKind::Rook);
        }
    }
}
