//! Attack detection and check.

use crate::color::Color;
use crate::movegen::{GenMode, generate, pawn_attack_squares};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Return `true` if any piece not of `color` attacks `target`.
    ///
    /// Pieces attack what they reach in pseudo-legal mode, so a pinned piece
    /// still gives check. Pawns are the exception: they attack their two
    /// forward diagonals whether or not anything stands there, and never the
    /// square straight ahead.
    pub fn is_square_attacked(&self, target: Square, color: Color) -> bool {
        let geometry = self.geometry();
        self.occupied()
            .filter(|(_, piece)| piece.color() != color)
            .any(|(sq, piece)| match piece.kind() {
                PieceKind::Pawn => {
                    pawn_attack_squares(geometry, sq, piece.color()).any(|attacked| attacked == target)
                }
                _ => generate(self, sq, GenMode::Pseudo).contains(&target),
            })
    }

    /// Return `true` if the king of `color` is attacked.
    ///
    /// A side with no king on the board is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color))
    }
}
