//! Board dimensions and the coordinate rules that depend on them.

use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::error::GeometryError;
use crate::square::Square;

/// Board dimensions, supplied by the caller independently of any FEN.
///
/// Every rule that would be a hard-coded rank or file on an 8x8 board
/// (pawn start ranks, promotion ranks, castling corners, algebraic names)
/// is derived from here, so 4x4 or 4x5 variants share the same rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    files: u8,
    ranks: u8,
}

impl Geometry {
    /// Upper bound on files: one letter per file, `a` through `z`.
    pub const MAX_FILES: usize = 26;
    /// Upper bound on ranks.
    pub const MAX_RANKS: usize = u8::MAX as usize;

    /// The standard 8x8 board.
    pub const STANDARD: Geometry = Geometry { files: 8, ranks: 8 };

    /// Create a geometry, rejecting empty or oversized boards.
    pub fn new(files: usize, ranks: usize) -> Result<Geometry, GeometryError> {
        if files == 0 || ranks == 0 {
            return Err(GeometryError::Empty { files, ranks });
        }
        if files > Self::MAX_FILES {
            return Err(GeometryError::TooManyFiles {
                files,
                max: Self::MAX_FILES,
            });
        }
        if ranks > Self::MAX_RANKS {
            return Err(GeometryError::TooManyRanks {
                ranks,
                max: Self::MAX_RANKS,
            });
        }
        Ok(Geometry {
            files: files as u8,
            ranks: ranks as u8,
        })
    }

    #[inline]
    pub const fn files(self) -> u8 {
        self.files
    }

    #[inline]
    pub const fn ranks(self) -> u8 {
        self.ranks
    }

    /// Total number of squares.
    #[inline]
    pub const fn square_count(self) -> usize {
        self.files as usize * self.ranks as usize
    }

    /// Return `true` if `sq` lies on the board.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        sq.file() < self.files && sq.rank() < self.ranks
    }

    /// Dense index of an on-board square, laid out `[file][rank]`.
    #[inline]
    pub(crate) const fn index(self, sq: Square) -> usize {
        sq.file() as usize * self.ranks as usize + sq.rank() as usize
    }

    /// Step from `sq` by a file and rank delta, returning `None` off the board.
    #[inline]
    pub fn offset(self, sq: Square, file_delta: i32, rank_delta: i32) -> Option<Square> {
        let file = i32::from(sq.file()) + file_delta;
        let rank = i32::from(sq.rank()) + rank_delta;
        if (0..i32::from(self.files)).contains(&file) && (0..i32::from(self.ranks)).contains(&rank) {
            Some(Square::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Iterate over all squares in FEN order: top rank first, files left to right.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.ranks).flat_map(move |rank| (0..self.files).map(move |file| Square::new(file, rank)))
    }

    /// Rank a pawn of `color` starts on and may double-push from.
    #[inline]
    pub const fn pawn_start_rank(self, color: Color) -> u8 {
        match color {
            Color::White => self.ranks.saturating_sub(2),
            Color::Black => 1,
        }
    }

    /// Far rank on which a pawn of `color` promotes.
    #[inline]
    pub const fn promotion_rank(self, color: Color) -> u8 {
        match color {
            Color::White => 0,
            Color::Black => self.ranks - 1,
        }
    }

    /// Back rank of `color`, where its king and castling rooks start.
    #[inline]
    pub const fn home_rank(self, color: Color) -> u8 {
        match color {
            Color::White => self.ranks - 1,
            Color::Black => 0,
        }
    }

    /// Edge file holding the castling rook for `side`.
    #[inline]
    pub const fn rook_file(self, side: CastleSide) -> u8 {
        match side {
            CastleSide::KingSide => self.files - 1,
            CastleSide::QueenSide => 0,
        }
    }

    /// Home square of the castling rook for `color` and `side`.
    #[inline]
    pub const fn rook_home(self, color: Color, side: CastleSide) -> Square {
        Square::new(self.rook_file(side), self.home_rank(color))
    }

    /// Algebraic name of `sq`: file letter followed by the rank number
    /// counted from the bottom of the board (`ranks - rank index`).
    pub fn algebraic(self, sq: Square) -> String {
        let file = (b'a' + sq.file()) as char;
        format!("{file}{}", u32::from(self.ranks) - u32::from(sq.rank()))
    }

    /// Parse an algebraic square name (`e3`, `b10`) that lies on this board.
    pub fn parse_square(self, s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        if !file_char.is_ascii_lowercase() {
            return None;
        }
        let file = file_char as u8 - b'a';

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: u32 = digits.parse().ok()?;
        if file >= self.files || number == 0 || number > u32::from(self.ranks) {
            return None;
        }
        Some(Square::new(file, (u32::from(self.ranks) - number) as u8))
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::STANDARD
    }
}
