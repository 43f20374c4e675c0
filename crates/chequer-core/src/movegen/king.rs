//! King steps and castling.

use tracing::trace;

use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::gen_steps;

/// Clockwise from up-left.
const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// One-step king destinations, without castling.
pub(super) fn gen_king(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    gen_steps(position, from, color, &KING_OFFSETS, out);
}

/// Append castling destinations for the king of `color` on `from`.
///
/// For each right still held: the king stands on its home rank, the rook
/// of that side is on its edge-file home square at least two files away,
/// every square between them is empty, and none of the squares the king
/// crosses (start, next, landing) is attacked. The landing square two files
/// toward the rook is pushed, followed by the rook's own square as an
/// alternative way to request the same castle.
pub(super) fn gen_castling(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    let geometry = position.geometry();
    if from.rank() != geometry.home_rank(color) {
        return;
    }

    for side in CastleSide::ALL {
        if !position.castling().has(color, side) {
            continue;
        }

        let rook_home = geometry.rook_home(color, side);
        if position.piece_at(rook_home) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }

        let step = side.file_step();
        let distance = from.file_delta(rook_home) * step;
        if distance < 2 {
            continue;
        }
        let Some(landing) = geometry.offset(from, 2 * step, 0) else {
            continue;
        };

        let path_clear = (1..distance)
            .filter_map(|i| geometry.offset(from, i * step, 0))
            .all(|sq| !position.is_occupied(sq));
        if !path_clear {
            trace!(?side, color = color.name(), "castling path blocked");
            continue;
        }

        let path_safe = (0..=2)
            .filter_map(|i| geometry.offset(from, i * step, 0))
            .all(|sq| !position.is_square_attacked(sq, color));
        if !path_safe {
            trace!(?side, color = color.name(), "castling path attacked");
            continue;
        }

        out.push(landing);
        if rook_home != landing {
            out.push(rook_home);
        }
    }
}
