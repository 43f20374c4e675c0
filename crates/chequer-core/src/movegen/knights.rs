//! Knight jumps.

use crate::color::Color;
use crate::position::Position;
use crate::square::Square;

use super::gen_steps;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

/// Knight destinations: nothing blocks a jump, only own pieces on the target.
pub(super) fn gen_knight(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    gen_steps(position, from, color, &KNIGHT_OFFSETS, out);
}
