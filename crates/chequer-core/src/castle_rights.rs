//! Castling rights stored as a 4-bit set of `(color, side)` pairs.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::geometry::Geometry;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the highest file.
    KingSide,
    /// Toward file `a`.
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File direction the king travels when castling to this side.
    #[inline]
    pub const fn file_step(self) -> i32 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }
}

/// The set of remaining castling rights: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
///
/// Rights only ever leave the set during play; nothing in the move executor
/// adds one back.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// White king-side castling.
    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    /// White queen-side castling.
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    /// Black king-side castling.
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    /// Black queen-side castling.
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Return new rights with all bits from `other` added.
    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// Return new rights with all bits from `other` removed.
    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Check whether `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    /// Remove both rights of `color`.
    #[inline]
    pub const fn remove_color(self, color: Color) -> CastleRights {
        self.remove(Self::flag(color, CastleSide::KingSide))
            .remove(Self::flag(color, CastleSide::QueenSide))
    }

    /// The single right for a color and side.
    #[inline]
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Rights lost when any move starts or ends on `sq`: the rook corners.
    ///
    /// A move away from a corner means the rook moved; a move onto it means
    /// the rook was captured. On a one-file board both sides share a corner.
    pub fn revoked_by(geometry: Geometry, sq: Square) -> CastleRights {
        let mut revoked = CastleRights::NONE;
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if geometry.rook_home(color, side) == sq {
                    revoked = revoked.insert(Self::flag(color, side));
                }
            }
        }
        revoked
    }

    /// Iterate over the rights held, in FEN order (`K`, `Q`, `k`, `q`).
    pub fn iter(self) -> impl Iterator<Item = (Color, CastleSide)> {
        Color::ALL
            .into_iter()
            .flat_map(|color| CastleSide::ALL.into_iter().map(move |side| (color, side)))
            .filter(move |&(color, side)| self.has(color, side))
    }

    /// Parse the FEN castling field (e.g. "KQkq", "Kq", "-").
    ///
    /// Letters may come in any order but each at most once; `-` must stand
    /// alone.
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            let flag = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            if rights.contains(flag) {
                return Err(FenError::DuplicateCastlingChar { character: c });
            }
            rights = rights.insert(flag);
        }
        Ok(rights)
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        self.iter()
            .map(|(color, side)| {
                let c = match side {
                    CastleSide::KingSide => 'k',
                    CastleSide::QueenSide => 'q',
                };
                match color {
                    Color::White => c.to_ascii_uppercase(),
                    Color::Black => c,
                }
            })
            .collect()
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
