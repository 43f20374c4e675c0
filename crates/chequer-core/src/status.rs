//! Whole-position move listing and game status.

use std::fmt;

use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen::legal_destinations;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Halfmove clock value at which the fifty-move rule applies.
const FIFTY_MOVE_PLIES: u32 = 100;

/// Every legal move for the side to move, one per distinct outcome.
///
/// Castling is listed once, by its landing square; the alternative request
/// of the king moving onto its own rook is left out. Empty while a promotion
/// is pending.
pub fn legal_moves(position: &Position) -> Vec<Move> {
    let us = position.turn();
    let own_rook = Piece::new(PieceKind::Rook, us);

    position
        .pieces(us)
        .flat_map(|(from, piece)| {
            legal_destinations(position, from)
                .into_iter()
                .filter(move |&to| {
                    !(piece.kind() == PieceKind::King && position.piece_at(to) == Some(own_rook))
                })
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// The state of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move must choose a promotion piece before anything else.
    AwaitingPromotion,
    /// The side to move is in check with no legal move; `winner` delivered it.
    Checkmate {
        /// The side that gave mate.
        winner: Color,
    },
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// A hundred halfmoves passed without a capture or pawn move.
    FiftyMoveRule,
    /// The side to move is in check but can escape.
    Check,
    /// Nothing special.
    Ongoing,
}

impl GameStatus {
    /// Return `true` if no further moves can be played.
    pub const fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::FiftyMoveRule
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::AwaitingPromotion => write!(f, "awaiting promotion"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner.name()),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::FiftyMoveRule => write!(f, "draw by the fifty-move rule"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Ongoing => write!(f, "ongoing"),
        }
    }
}

impl Position {
    /// Classify the position.
    ///
    /// Checked in order: a pending promotion, checkmate, stalemate, the
    /// fifty-move rule, then plain check.
    pub fn status(&self) -> GameStatus {
        if self.pending_promotion().is_some() {
            return GameStatus::AwaitingPromotion;
        }

        let us = self.turn();
        let in_check = self.is_in_check(us);
        let has_move = self
            .pieces(us)
            .any(|(from, _)| !legal_destinations(self, from).is_empty());

        match (has_move, in_check) {
            (false, true) => GameStatus::Checkmate { winner: us.flip() },
            (false, false) => GameStatus::Stalemate,
            _ if self.halfmove_clock() >= FIFTY_MOVE_PLIES => GameStatus::FiftyMoveRule,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Ongoing,
        }
    }
}
