//! Bitboard type and operations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A 64-bit bitboard; bit `i` is set when square index `i` is occupied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_2: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const RANK_7: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq.index())
    }

    /// Returns an iterator over the squares set in this bitboard, lowest index first
    #[inline]
    #[must_use]
    pub const fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq.index()) != 0
    }

    /// Returns a copy with `sq` set
    #[inline]
    #[must_use]
    pub const fn with(self, sq: Square) -> Self {
        Bitboard(self.0 | (1 << sq.index()))
    }

    /// Returns a copy with `sq` cleared
    #[inline]
    #[must_use]
    pub const fn without(self, sq: Square) -> Self {
        Bitboard(self.0 & !(1 << sq.index()))
    }

    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Bitboard(self.0 | other.0)
    }

    /// Shift every bit `n` ranks up the board
    #[inline]
    #[must_use]
    pub const fn shift_ranks_up(self, n: u32) -> Self {
        Bitboard(self.0 << (8 * n))
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#018x})", self.0)
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> Square {
    let idx = bb.0.trailing_zeros() as u8;
    bb.0 &= bb.0 - 1;
    Square::from_index_unchecked(idx)
}

/// Iterator over set bits in a Bitboard, in ascending index order.
///
/// The iterator owns a copy of the bitboard, so it never observes later
/// changes to the board it came from.
#[derive(Clone, Debug)]
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_from_square() {
        assert_eq!(Bitboard::from_square(sq("h1")).0, 1);
        assert_eq!(Bitboard::from_square(sq("a1")).0, 0x80);
        assert_eq!(Bitboard::from_square(sq("a8")).0, 1 << 63);
    }

    #[test]
    fn test_iter_ascending() {
        let bb = Bitboard(0b1010_0101);
        let indices: Vec<usize> = bb.iter().map(Square::index).collect();
        assert_eq!(indices, vec![0, 2, 5, 7]);
    }

    #[test]
    fn test_iter_restarts() {
        let bb = Bitboard(0x8000_0000_0000_0001);
        let first: Vec<Square> = bb.iter().collect();
        let second: Vec<Square> = bb.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_iter_empty() {
        assert_eq!(Bitboard::EMPTY.iter().count(), 0);
        assert_eq!(Bitboard::ALL.iter().len(), 64);
    }

    #[test]
    fn test_with_without() {
        let e4 = sq("e4");
        let bb = Bitboard::EMPTY.with(e4);
        assert!(bb.contains(e4));
        assert_eq!(bb.popcount(), 1);
        assert!(bb.without(e4).is_empty());
    }

    #[test]
    fn test_rank_masks() {
        assert_eq!(Bitboard::RANK_2.shift_ranks_up(5), Bitboard::RANK_7);
        assert!(Bitboard::RANK_1.iter().all(|s| s.rank() == 0));
        assert!(Bitboard::RANK_8.iter().all(|s| s.rank() == 7));
    }
}
