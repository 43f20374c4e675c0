//! Destination generation for a single piece, pseudo-legal or legal.
//!
//! Legality is decided by trial: each pseudo-legal destination is played on
//! a throwaway copy of the position and rejected if the mover's king is then
//! attacked. Attack detection in turn runs pseudo-legal generation for the
//! enemy pieces, so the two recurse through [`Position::is_square_attacked`]
//! but never past one level: castling, the only generator that asks about
//! attacks, runs in legal mode alone.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::color::Color;

pub(crate) use self::pawns::attack_squares as pawn_attack_squares;

use self::king::{gen_castling, gen_king};
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, gen_sliders};

/// How much filtering [`generate`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenMode {
    /// Movement and occupancy rules only; self-check is ignored and castling
    /// is never produced.
    Pseudo,
    /// Pseudo-legal destinations that keep the mover's king safe, plus castling.
    Legal,
}

/// Generate the destinations of the piece on `from`.
///
/// Works for either color regardless of the side to move. Returns an empty
/// list for an empty square. The order is fixed: direction tables are walked
/// in declaration order, and castling destinations come last, king side
/// before queen side.
pub fn generate(position: &Position, from: Square, mode: GenMode) -> Vec<Square> {
    let Some(piece) = position.piece_at(from) else {
        return Vec::new();
    };
    let color = piece.color();

    let mut targets = Vec::new();
    match piece.kind() {
        PieceKind::King => gen_king(position, from, color, &mut targets),
        PieceKind::Queen => gen_sliders(position, from, color, &QUEEN_DIRECTIONS, &mut targets),
        PieceKind::Rook => gen_sliders(position, from, color, &ROOK_DIRECTIONS, &mut targets),
        PieceKind::Bishop => gen_sliders(position, from, color, &BISHOP_DIRECTIONS, &mut targets),
        PieceKind::Knight => gen_knight(position, from, color, &mut targets),
        PieceKind::Pawn => gen_pawn(position, from, color, &mut targets),
    }

    if mode == GenMode::Legal {
        targets.retain(|&to| leaves_king_safe(position, from, to));
        if piece.kind() == PieceKind::King {
            gen_castling(position, from, color, &mut targets);
        }
    }

    targets
}

/// Legal destinations of the piece on `from`, as offered to a player.
///
/// Empty when the square is empty, when the piece does not belong to the
/// side to move, or while a promotion choice is pending.
pub fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    if position.pending_promotion().is_some() {
        return Vec::new();
    }
    match position.piece_at(from) {
        Some(piece) if piece.color() == position.turn() => generate(position, from, GenMode::Legal),
        _ => Vec::new(),
    }
}

/// Square of the pawn removed if the pawn on `from` captures en passant on `to`.
pub(crate) fn en_passant_victim(position: &Position, from: Square, to: Square) -> Option<Square> {
    let pawn = position.piece_at(from)?;
    if pawn.kind() != PieceKind::Pawn
        || position.en_passant() != Some(to)
        || from.file() == to.file()
        || position.is_occupied(to)
    {
        return None;
    }
    Some(Square::new(to.file(), from.rank()))
}

/// Play `from -> to` on a copy and report whether the mover's king is safe.
fn leaves_king_safe(position: &Position, from: Square, to: Square) -> bool {
    let Some(piece) = position.piece_at(from) else {
        return false;
    };
    let mut scratch = position.clone();
    if let Some(victim) = en_passant_victim(position, from, to) {
        scratch.set_piece(victim, None);
    }
    scratch.relocate(from, to);
    !scratch.is_in_check(piece.color())
}

/// Single-step generation shared by kings and knights: every on-board offset
/// not occupied by a piece of `color`.
fn gen_steps(
    position: &Position,
    from: Square,
    color: Color,
    offsets: &[(i32, i32)],
    out: &mut Vec<Square>,
) {
    let geometry = position.geometry();
    out.extend(
        offsets
            .iter()
            .filter_map(|&(df, dr)| geometry.offset(from, df, dr))
            .filter(|&to| position.piece_at(to).is_none_or(|other| other.color() != color)),
    );
}
