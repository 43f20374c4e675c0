//! Pawn pushes and captures.

use crate::color::Color;
use crate::geometry::Geometry;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Pawn destinations: pushes first, then the two capture diagonals.
///
/// A double push needs the pawn on its start rank and both squares ahead
/// empty. A diagonal is only a destination onto an enemy piece, or onto the
/// en passant target when an enemy pawn stands beside the mover to be taken.
pub(super) fn gen_pawn(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    let geometry = position.geometry();
    let forward = color.forward();

    if let Some(single) = geometry.offset(from, 0, forward)
        && !position.is_occupied(single)
    {
        out.push(single);
        if from.rank() == geometry.pawn_start_rank(color)
            && let Some(double) = geometry.offset(from, 0, 2 * forward)
            && !position.is_occupied(double)
        {
            out.push(double);
        }
    }

    for target in attack_squares(geometry, from, color) {
        match position.piece_at(target) {
            Some(victim) if victim.color() != color => out.push(target),
            None if position.en_passant() == Some(target) => {
                let bypassed = Square::new(target.file(), from.rank());
                if position.piece_at(bypassed) == Some(Piece::new(PieceKind::Pawn, color.flip())) {
                    out.push(target);
                }
            }
            _ => {}
        }
    }
}

/// The squares a pawn of `color` on `from` attacks, left diagonal first.
///
/// Unlike [`gen_pawn`], this ignores occupancy: a pawn guards its diagonals
/// whether or not anything stands there, and never attacks straight ahead.
pub(crate) fn attack_squares(
    geometry: Geometry,
    from: Square,
    color: Color,
) -> impl Iterator<Item = Square> {
    [-1, 1]
        .into_iter()
        .filter_map(move |df| geometry.offset(from, df, color.forward()))
}
