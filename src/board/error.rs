//! Error types for board operations.

use std::fmt;

use super::{Color, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few fields (needs at least 4)
    TooFewParts { found: usize },
    /// FEN string has more than 6 fields
    TooManyParts { found: usize },
    /// Placement field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in placement field
    InvalidPiece { char: char },
    /// A rank does not resolve to exactly 8 squares
    WrongFileCount { rank: usize, files: usize },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { field: &'static str, found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::TooManyParts { found } => {
                write!(f, "FEN must have at most 6 parts, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} squares, expected 8")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { field, found } => {
                write!(f, "Invalid {field} '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move token parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Coarse move rejection. Full legality belongs to the move authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The null move `0000` cannot be played on a board
    NullMove,
    /// Nothing stands on the source square
    EmptySource { square: Square },
    /// The piece on the source square belongs to the side not on move
    WrongColor { square: Square, side_to_move: Color },
    /// The destination holds a piece of the mover's own color
    OwnPieceOnTarget { square: Square },
    /// The installed move authority refused the move
    RejectedByAuthority { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NullMove => write!(f, "The null move cannot be applied"),
            MoveError::EmptySource { square } => {
                write!(f, "No piece on source square {square}")
            }
            MoveError::WrongColor {
                square,
                side_to_move,
            } => {
                write!(f, "Piece on {square} does not belong to {side_to_move}")
            }
            MoveError::OwnPieceOnTarget { square } => {
                write!(f, "Destination {square} is occupied by the mover's own piece")
            }
            MoveError::RejectedByAuthority { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Board invariant violation reported by `Board::validate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Two piece sets claim the same square
    Overlap { square: Square },
    /// Cached occupancy of a color disagrees with its piece sets
    StaleOccupancy { color: Color },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::Overlap { square } => {
                write!(f, "More than one piece on {square}")
            }
            InvariantError::StaleOccupancy { color } => {
                write!(f, "{color} occupancy does not match its pieces")
            }
        }
    }
}

impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    // FenError tests
    #[test]
    fn test_fen_error_too_few_parts() {
        let err = FenError::TooFewParts { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_wrong_file_count() {
        let err = FenError::WrongFileCount { rank: 8, files: 9 };
        let msg = err.to_string();
        assert!(msg.contains("Rank 8"));
        assert!(msg.contains('9'));
    }

    #[test]
    fn test_fen_error_invalid_counter() {
        let err = FenError::InvalidCounter {
            field: "halfmove clock",
            found: "x".to_string(),
        };
        assert!(err.to_string().contains("halfmove clock"));
    }

    // MoveParseError tests
    #[test]
    fn test_move_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_move_error_invalid_square() {
        let err = MoveParseError::InvalidSquare {
            notation: "z9z9".to_string(),
        };
        assert!(err.to_string().contains("z9z9"));
    }

    // SquareError tests
    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    // MoveError tests
    #[test]
    fn test_illegal_move_messages_name_the_square() {
        let e4: Square = "e4".parse().unwrap();
        assert!(MoveError::EmptySource { square: e4 }
            .to_string()
            .contains("e4"));
        let msg = MoveError::WrongColor {
            square: e4,
            side_to_move: Color::Black,
        }
        .to_string();
        assert!(msg.contains("e4"));
        assert!(msg.contains("Black"));
    }
}
