use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::InvariantError;
use super::{Bitboard, BitboardIter, CastlingRights, Color, PieceKind, PieceSet, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Starting bitboard for every (color, kind), indexed `[color][kind]`.
static START_POSITION: Lazy<[[Bitboard; 6]; 2]> = Lazy::new(|| {
    let mut table = [[Bitboard::EMPTY; 6]; 2];
    for color in Color::BOTH {
        let c_idx = color.index();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            if let Some(sq) = Square::new(color.back_rank(), file) {
                table[c_idx][kind.index()] = table[c_idx][kind.index()].with(sq);
            }
        }
    }
    table[Color::White.index()][PieceKind::Pawn.index()] = Bitboard::RANK_2;
    table[Color::Black.index()][PieceKind::Pawn.index()] = Bitboard::RANK_7;
    table
});

/// Canonical starting bitboard of one piece set.
#[must_use]
pub fn start_bitboard(color: Color, kind: PieceKind) -> Bitboard {
    START_POSITION[color.index()][kind.index()]
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let pieces = *START_POSITION;
        let mut occupied = [Bitboard::EMPTY; 2];
        for color in Color::BOTH {
            occupied[color.index()] = pieces[color.index()]
                .iter()
                .fold(Bitboard::EMPTY, |acc, bb| acc.or(*bb));
        }

        Board {
            pieces,
            occupied,
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Bitboard of all pieces of one kind and color
    #[inline]
    #[must_use]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// One piece set as a tagged record
    #[must_use]
    pub fn piece_set(&self, color: Color, kind: PieceKind) -> PieceSet {
        PieceSet {
            kind,
            color,
            bitboard: self.pieces_of(color, kind),
        }
    }

    /// All 12 piece sets, White first, each color in `PieceKind::ALL` order
    pub fn piece_sets(&self) -> impl Iterator<Item = PieceSet> + '_ {
        Color::BOTH.into_iter().flat_map(move |color| {
            PieceKind::ALL
                .into_iter()
                .map(move |kind| self.piece_set(color, kind))
        })
    }

    /// Squares occupied by `set`, lowest index first.
    ///
    /// The iterator is lazy and finite; call again to start over.
    #[must_use]
    pub fn occupied_squares(&self, set: PieceSet) -> BitboardIter {
        set.squares()
    }

    /// Occupancy of one color
    #[inline]
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    /// Occupancy of both colors
    #[inline]
    #[must_use]
    pub fn all_occupied(&self) -> Bitboard {
        self.occupied[0].or(self.occupied[1])
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, PieceKind)> {
        let color = Color::BOTH
            .into_iter()
            .find(|c| self.occupied[c.index()].contains(sq))?;
        PieceKind::ALL
            .into_iter()
            .find(|k| self.pieces_of(color, *k).contains(sq))
            .map(|kind| (color, kind))
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, kind: PieceKind) {
        debug_assert!(
            !self.all_occupied().contains(sq),
            "set_piece on occupied square {sq}"
        );
        let c_idx = color.index();
        let k_idx = kind.index();
        self.pieces[c_idx][k_idx] = self.pieces[c_idx][k_idx].with(sq);
        self.occupied[c_idx] = self.occupied[c_idx].with(sq);
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, kind: PieceKind) {
        let c_idx = color.index();
        let k_idx = kind.index();
        self.pieces[c_idx][k_idx] = self.pieces[c_idx][k_idx].without(sq);
        self.occupied[c_idx] = self.occupied[c_idx].without(sq);
    }

    /// Check that no square is claimed by two piece sets and that the
    /// per-color occupancy matches the piece sets.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let mut seen = Bitboard::EMPTY;
        for set in self.piece_sets() {
            let overlap = seen.and(set.bitboard);
            if let Some(square) = overlap.iter().next() {
                return Err(InvariantError::Overlap { square });
            }
            seen = seen.or(set.bitboard);
        }

        for color in Color::BOTH {
            let expected = PieceKind::ALL
                .into_iter()
                .fold(Bitboard::EMPTY, |acc, k| acc.or(self.pieces_of(color, k)));
            if expected != self.occupied[color.index()] {
                return Err(InvariantError::StaleOccupancy { color });
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_table_literals() {
        use PieceKind::*;
        let white = [
            (Pawn, 0xFF00),
            (Knight, 0x42),
            (Bishop, 0x24),
            (Rook, 0x81),
            (Queen, 0x10),
            (King, 0x08),
        ];
        for (kind, bits) in white {
            assert_eq!(start_bitboard(Color::White, kind), Bitboard(bits), "{kind:?}");
            let black_shift = if kind == Pawn { 40 } else { 56 };
            assert_eq!(
                start_bitboard(Color::Black, kind),
                Bitboard(bits << black_shift),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn test_new_board_is_valid() {
        let board = Board::new();
        assert!(board.validate().is_ok());
        assert_eq!(board.all_occupied().popcount(), 32);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), CastlingRights::all());
    }

    #[test]
    fn test_piece_at_kings() {
        let board = Board::new();
        let e1: Square = "e1".parse().unwrap();
        let d8: Square = "d8".parse().unwrap();
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(board.piece_at(e1), Some((Color::White, PieceKind::King)));
        assert_eq!(board.piece_at(d8), Some((Color::Black, PieceKind::Queen)));
        assert_eq!(board.piece_at(e4), None);
    }

    #[test]
    fn test_piece_sets_enumerates_twelve() {
        let board = Board::new();
        let sets: Vec<PieceSet> = board.piece_sets().collect();
        assert_eq!(sets.len(), 12);
        assert_eq!(sets.iter().map(PieceSet::count).sum::<u32>(), 32);
    }

    #[test]
    fn test_occupied_squares_ascending_and_restartable() {
        let board = Board::new();
        let rooks = board.piece_set(Color::White, PieceKind::Rook);
        let first: Vec<String> = board.occupied_squares(rooks).map(|s| s.to_string()).collect();
        assert_eq!(first, vec!["h1", "a1"]);
        let again: Vec<String> = board.occupied_squares(rooks).map(|s| s.to_string()).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_validate_detects_overlap() {
        let mut board = Board::new();
        let e1: Square = "e1".parse().unwrap();
        board.pieces[Color::Black.index()][PieceKind::Queen.index()] =
            board.pieces_of(Color::Black, PieceKind::Queen).with(e1);
        assert_eq!(
            board.validate(),
            Err(InvariantError::Overlap { square: e1 })
        );
    }

    #[test]
    fn test_validate_detects_stale_occupancy() {
        let mut board = Board::new();
        board.occupied[Color::White.index()] = Bitboard::EMPTY;
        assert_eq!(
            board.validate(),
            Err(InvariantError::StaleOccupancy {
                color: Color::White
            })
        );
    }
}
