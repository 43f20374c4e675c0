//! Move execution: relocation, en passant, castling, rights, counters, and
//! the promotion hand-off.
//!
//! Every request is validated against the legal destination set before the
//! position is touched, so a rejected call leaves it exactly as it was.

use tracing::{debug, warn};

use crate::castle_rights::{CastleRights, CastleSide};
use crate::color::Color;
use crate::error::MoveError;
use crate::movegen::{en_passant_victim, legal_destinations};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::{Phase, Position};
use crate::square::Square;

/// What an accepted move left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The turn passed to the other side.
    Completed,
    /// A pawn reached its far rank on this square. The turn stays with the
    /// mover until [`Position::promote`] is called.
    PromotionPending(Square),
}

impl Position {
    /// Play the piece on `from` to `to`.
    ///
    /// `to` must be one of [`legal_destinations`] for `from`. A king may be
    /// sent to its own rook's square to request the castle on that side.
    ///
    /// # Errors
    ///
    /// [`MoveError::PromotionPending`] while a promotion choice is
    /// outstanding, and [`MoveError::Illegal`] for any destination not in the
    /// legal set. The position is unchanged in both cases.
    pub fn apply(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if let Some(square) = self.pending_promotion() {
            warn!(?from, ?to, ?square, "move requested while a promotion is pending");
            return Err(MoveError::PromotionPending { square });
        }
        if !legal_destinations(self, from).contains(&to) {
            warn!(?from, ?to, "illegal move request");
            return Err(MoveError::Illegal { from, to });
        }
        Ok(self.play(from, to))
    }

    /// Choose the piece a pending pawn becomes, then complete the turn.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoPromotionPending`] when nothing awaits promotion,
    /// [`MoveError::PromotionSquare`] when `square` is not the pending one,
    /// and [`MoveError::InvalidPromotion`] for a king or pawn.
    pub fn promote(&mut self, square: Square, kind: PieceKind) -> Result<(), MoveError> {
        let Some(pending) = self.pending_promotion() else {
            return Err(MoveError::NoPromotionPending);
        };
        if square != pending {
            return Err(MoveError::PromotionSquare {
                expected: pending,
                found: square,
            });
        }
        if !kind.is_promotion_target() {
            return Err(MoveError::InvalidPromotion { kind });
        }
        if self.piece_at(square).is_none() {
            return Err(MoveError::NoPromotionPending);
        }

        self.finish_promotion(square, kind);
        Ok(())
    }

    /// Replace the pending pawn on `square` with `kind` and complete the
    /// turn. The request must already be validated.
    pub(crate) fn finish_promotion(&mut self, square: Square, kind: PieceKind) {
        debug_assert_eq!(self.pending_promotion(), Some(square));
        debug_assert!(kind.is_promotion_target());

        if let Some(pawn) = self.piece_at(square) {
            self.set_piece(square, Some(pawn.with_kind(kind)));
            debug!(
                square = %self.geometry().algebraic(square),
                piece = %pawn.with_kind(kind),
                "promoted"
            );
        }
        // Promotion only follows a pawn move, which always resets the clock.
        self.complete_turn(true);
    }

    /// Carry out an already validated move.
    pub(crate) fn play(&mut self, from: Square, to: Square) -> MoveOutcome {
        let Some(piece) = self.piece_at(from) else {
            return MoveOutcome::Completed;
        };
        let us = piece.color();
        let geometry = self.geometry();
        let own_rook = Piece::new(PieceKind::Rook, us);

        // A king sent onto its own rook asks for the castle on that side.
        let to = if piece.kind() == PieceKind::King && self.piece_at(to) == Some(own_rook) {
            let step = from.file_delta(to).signum();
            geometry.offset(from, 2 * step, 0).unwrap_or(to)
        } else {
            to
        };

        let castle_side = if piece.kind() == PieceKind::King
            && from.rank() == to.rank()
            && from.file_delta(to).abs() == 2
        {
            Some(if from.file_delta(to) > 0 {
                CastleSide::KingSide
            } else {
                CastleSide::QueenSide
            })
        } else {
            None
        };

        // Read everything that depends on the pre-move state first.
        let victim = en_passant_victim(self, from, to);
        let rook_jump = castle_side.map(|side| {
            let rook_from = geometry.rook_home(us, side);
            let rook_to = Square::new((i32::from(to.file()) - side.file_step()) as u8, to.rank());
            (rook_from, rook_to)
        });

        self.set_en_passant(None);

        // The rook leaves first: on narrow boards the king lands on its square.
        if let Some((rook_from, _)) = rook_jump {
            self.set_piece(rook_from, None);
        }
        let captured = self.relocate(from, to);
        if let Some((_, rook_to)) = rook_jump {
            self.set_piece(rook_to, Some(own_rook));
        }
        if let Some(victim) = victim {
            self.set_piece(victim, None);
        }
        let is_capture = captured.is_some() || victim.is_some();

        let is_pawn = piece.kind() == PieceKind::Pawn;
        if is_pawn && from.rank() == geometry.pawn_start_rank(us) && from.rank_delta(to).abs() == 2 {
            let skipped = (i32::from(from.rank()) + us.forward()) as u8;
            self.set_en_passant(Some(Square::new(from.file(), skipped)));
        }

        let mut rights = self.castling();
        if piece.kind() == PieceKind::King {
            rights = rights.remove_color(us);
        }
        rights = rights
            .remove(CastleRights::revoked_by(geometry, from))
            .remove(CastleRights::revoked_by(geometry, to));
        self.set_castling(rights);

        debug!(
            from = %geometry.algebraic(from),
            to = %geometry.algebraic(to),
            %piece,
            captured = ?captured.or(victim.map(|_| Piece::new(PieceKind::Pawn, us.flip()))),
            castle = ?castle_side,
            "applied move"
        );

        if is_pawn && to.rank() == geometry.promotion_rank(us) {
            self.set_phase(Phase::AwaitingPromotion(to));
            debug!(square = %geometry.algebraic(to), "awaiting promotion");
            return MoveOutcome::PromotionPending(to);
        }

        self.complete_turn(is_pawn || is_capture);
        MoveOutcome::Completed
    }

    /// Advance the counters and hand the move to the other side. Both
    /// counters stop at `u32::MAX`.
    fn complete_turn(&mut self, reset_clock: bool) {
        if reset_clock {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(self.halfmove_clock().saturating_add(1));
        }
        let us = self.turn();
        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }
        self.set_turn(us.flip());
        self.set_phase(Phase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::MoveOutcome;
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::fen::STARTING_FEN;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::{Phase, Position};
    use crate::square::Square;

    fn position(fen: &str) -> Position {
        Position::from_fen(fen, 8, 8).unwrap()
    }

    fn sq(position: &Position, name: &str) -> Square {
        position.geometry().parse_square(name).unwrap()
    }

    fn play(position: &mut Position, from: &str, to: &str) -> MoveOutcome {
        let (from, to) = (sq(position, from), sq(position, to));
        position.apply(from, to).unwrap()
    }

    #[test]
    fn pawn_push_sets_en_passant() {
        let mut p = position(STARTING_FEN);
        assert_eq!(play(&mut p, "e2", "e4"), MoveOutcome::Completed);
        assert_eq!(p.piece_at(sq(&p, "e4")), Some(Piece::WHITE_PAWN));
        assert_eq!(p.piece_at(sq(&p, "e2")), None);
        assert_eq!(p.en_passant(), Some(sq(&p, "e3")));
        assert_eq!(p.turn(), Color::Black);
        assert_eq!(p.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    }

    #[test]
    fn en_passant_lasts_one_move() {
        let mut p = position(STARTING_FEN);
        play(&mut p, "e2", "e4");
        play(&mut p, "g8", "f6");
        assert_eq!(p.en_passant(), None);
    }

    #[test]
    fn capture_resets_clock() {
        let mut p = position(STARTING_FEN);
        play(&mut p, "g1", "f3");
        assert_eq!(p.halfmove_clock(), 1);
        play(&mut p, "d7", "d5");
        assert_eq!(p.halfmove_clock(), 0);
        play(&mut p, "f3", "e5");
        play(&mut p, "b8", "c6");
        assert_eq!(p.halfmove_clock(), 2);
        play(&mut p, "e5", "c6");
        assert_eq!(p.halfmove_clock(), 0);
        assert_eq!(p.piece_at(sq(&p, "c6")).map(Piece::color), Some(Color::White));
    }

    #[test]
    fn fullmove_increments_after_black() {
        let mut p = position(STARTING_FEN);
        play(&mut p, "e2", "e4");
        assert_eq!(p.fullmove_number(), 1);
        play(&mut p, "e7", "e5");
        assert_eq!(p.fullmove_number(), 2);
    }

    #[test]
    fn en_passant_capture_removes_bypassed_pawn() {
        let mut p = position(STARTING_FEN);
        play(&mut p, "e2", "e4");
        play(&mut p, "a7", "a6");
        play(&mut p, "e4", "e5");
        play(&mut p, "d7", "d5");
        assert_eq!(p.en_passant(), Some(sq(&p, "d6")));

        play(&mut p, "e5", "d6");
        assert_eq!(p.piece_at(sq(&p, "d6")), Some(Piece::WHITE_PAWN));
        assert_eq!(p.piece_at(sq(&p, "d5")), None);
        assert_eq!(p.piece_at(sq(&p, "e5")), None);
        assert_eq!(p.halfmove_clock(), 0);
    }

    #[test]
    fn kingside_castling_via_landing_square() {
        let mut p = position("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        play(&mut p, "e1", "g1");
        assert_eq!(p.piece_at(sq(&p, "g1")), Some(Piece::WHITE_KING));
        assert_eq!(p.piece_at(sq(&p, "f1")), Some(Piece::WHITE_ROOK));
        assert_eq!(p.piece_at(sq(&p, "e1")), None);
        assert_eq!(p.piece_at(sq(&p, "h1")), None);
        assert_eq!(p.castling().to_fen(), "kq");
        assert_eq!(p.halfmove_clock(), 1);
    }

    #[test]
    fn queenside_castling_via_rook_square() {
        let mut p = position("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1");
        play(&mut p, "e8", "a8");
        assert_eq!(p.piece_at(sq(&p, "c8")), Some(Piece::BLACK_KING));
        assert_eq!(p.piece_at(sq(&p, "d8")), Some(Piece::BLACK_ROOK));
        assert_eq!(p.piece_at(sq(&p, "a8")), None);
        assert_eq!(p.piece_at(sq(&p, "e8")), None);
        assert_eq!(p.castling().to_fen(), "KQ");
        assert_eq!(p.fullmove_number(), 2);
    }

    #[test]
    fn rook_move_revokes_one_right() {
        let mut p = position("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        play(&mut p, "h1", "g1");
        assert!(!p.castling().contains(CastleRights::WHITE_KING));
        assert!(p.castling().contains(CastleRights::WHITE_QUEEN));
    }

    #[test]
    fn capturing_a_rook_revokes_its_right() {
        let mut p = position("r3k2r/8/8/8/8/8/8/R3K1BR w KQkq - 0 1");
        play(&mut p, "a1", "a8");
        assert_eq!(p.castling().to_fen(), "Kk");
    }

    #[test]
    fn promotion_defers_the_turn() {
        let mut p = position("3rk3/4P3/8/8/8/8/8/4K3 w - - 5 9");
        let d8 = sq(&p, "d8");
        let outcome = play(&mut p, "e7", "d8");
        assert_eq!(outcome, MoveOutcome::PromotionPending(d8));
        assert_eq!(p.phase(), Phase::AwaitingPromotion(d8));
        assert_eq!(p.turn(), Color::White);
        assert_eq!(p.halfmove_clock(), 5);
        assert_eq!(p.piece_at(d8), Some(Piece::WHITE_PAWN));

        p.promote(d8, PieceKind::Knight).unwrap();
        assert_eq!(p.piece_at(d8), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert_eq!(p.turn(), Color::Black);
        assert_eq!(p.halfmove_clock(), 0);
        assert_eq!(p.fullmove_number(), 9);
        assert_eq!(p.phase(), Phase::Idle);
    }

    #[test]
    fn promotion_errors() {
        let mut p = position("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let a8 = sq(&p, "a8");
        assert_eq!(p.promote(a8, PieceKind::Queen), Err(MoveError::NoPromotionPending));

        play(&mut p, "a7", "a8");
        let e1 = sq(&p, "e1");
        let d1 = sq(&p, "d1");
        assert_eq!(
            p.apply(e1, d1),
            Err(MoveError::PromotionPending { square: a8 })
        );
        assert_eq!(
            p.promote(e1, PieceKind::Queen),
            Err(MoveError::PromotionSquare { expected: a8, found: e1 })
        );
        assert_eq!(
            p.promote(a8, PieceKind::King),
            Err(MoveError::InvalidPromotion { kind: PieceKind::King })
        );
        assert_eq!(p.phase(), Phase::AwaitingPromotion(a8));
        p.promote(a8, PieceKind::Queen).unwrap();
        assert_eq!(p.to_fen(), "Q3k3/8/8/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn counters_saturate_at_the_ceiling() {
        let mut p = position("4k3/8/8/8/8/8/8/4K1N1 b - - 4294967295 4294967295");
        play(&mut p, "e8", "d8");
        assert_eq!(p.halfmove_clock(), u32::MAX);
        assert_eq!(p.fullmove_number(), u32::MAX);
        assert_eq!(p.turn(), Color::White);

        play(&mut p, "g1", "f3");
        assert_eq!(p.halfmove_clock(), u32::MAX);
        assert_eq!(p.to_fen(), "3k4/8/8/8/8/5N2/8/4K3 b - - 4294967295 4294967295");
    }

    #[test]
    fn illegal_request_is_a_no_op() {
        let mut p = position(STARTING_FEN);
        let before = p.clone();
        let e2 = sq(&p, "e2");
        let e5 = sq(&p, "e5");
        assert_eq!(p.apply(e2, e5), Err(MoveError::Illegal { from: e2, to: e5 }));
        let e7 = sq(&p, "e7");
        let e6 = sq(&p, "e6");
        assert!(p.apply(e7, e6).is_err());
        let e4 = sq(&p, "e4");
        assert!(p.apply(e4, e5).is_err());
        assert_eq!(p, before);
    }
}
