use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastlingRights, Color, PieceKind, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Placement, side to move, castling and en passant are required. The
    /// halfmove clock and fullmove number default to 0 and 1 when missing.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyParts { found: parts.len() });
        }

        let mut board = Board::empty();

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    file += skip as usize;
                } else {
                    let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if let Some(sq) = Square::new(rank, file) {
                        board.set_piece(sq, color, kind);
                    }
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::WrongFileCount {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = CastlingRights::from_fen(parts[2])
            .map_err(|c| FenError::InvalidCastling { char: c })?;

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            match parts[3].parse::<Square>() {
                Ok(sq) if sq.rank() == 2 || sq.rank() == 5 => Some(sq),
                _ => {
                    return Err(FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })
                }
            }
        };

        if let Some(field) = parts.get(4) {
            board.halfmove_clock = parse_counter(field, "halfmove clock")?;
        }
        if let Some(field) = parts.get(5) {
            board.fullmove_number = parse_counter(field, "fullmove number")?.max(1);
        }

        Ok(board)
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let piece = Square::new(rank, file).and_then(|sq| self.piece_at(sq));
                if let Some((color, kind)) = piece {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(kind.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_counter(field: &str, name: &'static str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        field: name,
        found: field.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
