//! A move request as a pair of squares, with coordinate notation.

use std::fmt;

use crate::error::NotationError;
use crate::geometry::Geometry;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move from one square to another.
///
/// Promotion is not part of the move: it is chosen afterwards through
/// [`Position::promote`](crate::position::Position::promote).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Create a move from `from` to `to`.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Coordinate notation on `geometry`, e.g. `e2e4` or `a9a10`.
    pub fn to_notation(self, geometry: Geometry) -> String {
        format!("{}{}", geometry.algebraic(self.from), geometry.algebraic(self.to))
    }

    /// Parse coordinate notation: two squares of `geometry` and an optional
    /// trailing promotion letter (`q`, `r`, `b` or `n`).
    ///
    /// # Errors
    ///
    /// Returns [`NotationError::InvalidMove`] if either square is malformed
    /// or off the board, or the suffix is not a promotion letter.
    pub fn parse(s: &str, geometry: Geometry) -> Result<(Move, Option<PieceKind>), NotationError> {
        let invalid = || NotationError::InvalidMove {
            found: s.to_string(),
        };

        // Squares are a letter then digits; the second square starts at the
        // first letter after the first square's digits.
        let split = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| c.is_ascii_alphabetic())
            .map(|(i, _)| i)
            .ok_or_else(invalid)?;
        let (first, rest) = s.split_at(split);

        let digits_end = rest
            .char_indices()
            .skip(1)
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        let (second, suffix) = rest.split_at(digits_end);

        let from = geometry.parse_square(first).ok_or_else(invalid)?;
        let to = geometry.parse_square(second).ok_or_else(invalid)?;

        let promotion = match suffix {
            "" => None,
            _ => {
                let mut chars = suffix.chars();
                let kind = chars
                    .next()
                    .and_then(PieceKind::from_fen_char)
                    .filter(|kind| kind.is_promotion_target())
                    .ok_or_else(invalid)?;
                if chars.next().is_some() || suffix.chars().any(|c| c.is_ascii_uppercase()) {
                    return Err(invalid());
                }
                Some(kind)
            }
        };

        Ok((Move::new(from, to), promotion))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
