//! Board coordinates.

use std::fmt;

/// A zero-indexed `(file, rank)` coordinate.
///
/// File 0 is the leftmost column (`a`). Rank 0 is the top row, the first
/// rank listed in a FEN piece placement, so on a standard board rank 0 is
/// the eighth rank and rank 7 is the first. A `Square` does not know the
/// board size; bounds checks and algebraic names go through
/// [`Geometry`](crate::geometry::Geometry).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a square from a file and rank index.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Square {
        Square { file, rank }
    }

    /// Return the file index (0 = `a`).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Return the rank index (0 = top row).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Signed file distance from `self` to `other`.
    #[inline]
    pub const fn file_delta(self, other: Square) -> i32 {
        other.file as i32 - self.file as i32
    }

    /// Signed rank distance from `self` to `other`.
    #[inline]
    pub const fn rank_delta(self, other: Square) -> i32 {
        other.rank as i32 - self.rank as i32
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.file, self.rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}
