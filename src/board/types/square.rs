//! Square type and coordinate helpers.
//!
//! Squares are bit indices into a [`Bitboard`](super::Bitboard). Index 0 is
//! h1 and indices run from the h-file towards the a-file within a rank, then
//! up the board: h1 = 0, a1 = 7, h2 = 8, ..., h8 = 56, a8 = 63. Reading the
//! indices from 63 down to 0 therefore visits the board in display order
//! (a8, b8, ..., h1).

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) fn file_to_index(file: char) -> Option<usize> {
    match file {
        'a'..='h' => Some(file as usize - 'a' as usize),
        _ => None,
    }
}

pub(crate) fn rank_to_index(rank: char) -> Option<usize> {
    match rank {
        '1'..='8' => Some(rank as usize - '1' as usize),
        _ => None,
    }
}

/// A square on the board, stored as its bit index (0-63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from (rank, file), both zero-based from rank 1 / file a.
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank * 8 + (7 - file)) as u8))
        } else {
            None
        }
    }

    /// Create a square from a bit index (0-63).
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(idx: u8) -> Self {
        Square(idx & 63)
    }

    /// Bit index of this square
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 8) as usize
    }

    /// File (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        7 - (self.0 % 8) as usize
    }

    /// Row-major position of this square in the rendered grid (a8 = 0, h1 = 63).
    #[inline]
    #[must_use]
    pub const fn display_position(self) -> usize {
        63 - self.0 as usize
    }

    /// The square on the same file, `delta` ranks away.
    #[must_use]
    pub fn offset_rank(self, delta: isize) -> Option<Self> {
        let rank = self.rank() as isize + delta;
        if (0..8).contains(&rank) {
            Square::new(rank as usize, self.file())
        } else {
            None
        }
    }

    /// The square on the same rank at `file`.
    #[must_use]
    pub const fn with_file(self, file: usize) -> Option<Self> {
        Square::new(self.rank(), file)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Square::new(rank, file).ok_or(SquareError::RankOutOfBounds { rank })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = file_to_index(f).ok_or_else(invalid)?;
        let rank = rank_to_index(r).ok_or_else(invalid)?;
        Square::new(rank, file).ok_or_else(invalid)
    }
}
