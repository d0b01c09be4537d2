//! Move type in UCI long algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::{file_to_index, rank_to_index, Square};
use crate::board::error::MoveParseError;

/// A move from one square to another, with an optional promotion kind.
///
/// Moves carry no legality information; whether a move may be played is up
/// to the move authority. The board only checks that the mover is on the
/// source square (see [`Board::apply_move`](crate::board::Board::apply_move)).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a non-promoting move
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promotion move
    #[inline]
    #[must_use]
    pub const fn new_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// The null move ("no move selected"), printed as `0000`
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        let sq = Square::from_index_unchecked(0);
        Move::new(sq, sq)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.from.index() == self.to.index()
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the promotion kind, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str(crate::NULL_MOVE);
        }
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse a UCI move token (`e2e4`, `e7e8q`). The token `0000` parses as
    /// the null move.
    fn from_str(uci: &str) -> Result<Self, Self::Err> {
        if !uci.is_ascii() {
            return Err(MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            });
        }
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }
        if uci == crate::NULL_MOVE {
            return Ok(Move::null());
        }

        let chars: Vec<char> = uci.chars().collect();
        let square_at = |file: char, rank: char| {
            file_to_index(file)
                .zip(rank_to_index(rank))
                .and_then(|(f, r)| Square::new(r, f))
                .ok_or_else(|| MoveParseError::InvalidSquare {
                    notation: uci.to_string(),
                })
        };

        let from = square_at(chars[0], chars[1])?;
        let to = square_at(chars[2], chars[3])?;
        if from == to {
            return Err(MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            });
        }

        match chars.get(4) {
            None => Ok(Move::new(from, to)),
            Some(&c) => match PieceKind::from_char(c) {
                Some(kind) if kind.is_promotion_target() => Ok(Move::new_promotion(from, to, kind)),
                _ => Err(MoveParseError::InvalidPromotion { char: c }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quiet_move() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv.from().to_string(), "e2");
        assert_eq!(mv.to().to_string(), "e4");
        assert_eq!(mv.promotion(), None);
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_parse_promotion() {
        let mv: Move = "a7a8Q".parse().unwrap();
        assert_eq!(mv.promotion(), Some(PieceKind::Queen));
        assert_eq!(mv.to_string(), "a7a8q");
    }

    #[test]
    fn test_null_move() {
        let mv: Move = "0000".parse().unwrap();
        assert!(mv.is_null());
        assert_eq!(mv.to_string(), "0000");
        assert_eq!(Move::null().to_string(), "0000");
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            "e2".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 2 })
        );
        assert_eq!(
            "e2e4qq".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 6 })
        );
    }

    #[test]
    fn test_invalid_square() {
        assert!(matches!(
            "z9z9".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "e2e2".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "é2e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_invalid_promotion() {
        assert_eq!(
            "a7a8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
        assert_eq!(
            "a7a8x".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'x' })
        );
    }
}
