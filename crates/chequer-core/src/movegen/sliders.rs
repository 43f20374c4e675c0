//! Rook, bishop and queen rays.

use crate::color::Color;
use crate::position::Position;
use crate::square::Square;

/// Up, right, down, left (rank index 0 is the top of the board).
pub(super) const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Up-right, down-right, down-left, up-left.
pub(super) const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// Orthogonals first, then diagonals.
pub(super) const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

/// Cast a ray along each direction until the edge, stopping before a piece
/// of `color` or on an enemy piece.
pub(super) fn gen_sliders(
    position: &Position,
    from: Square,
    color: Color,
    directions: &[(i32, i32)],
    out: &mut Vec<Square>,
) {
    let geometry = position.geometry();
    for &(df, dr) in directions {
        let mut current = from;
        while let Some(next) = geometry.offset(current, df, dr) {
            match position.piece_at(next) {
                None => out.push(next),
                Some(blocker) => {
                    if blocker.color() != color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
