//! A game shared between threads.
//!
//! Every call holds the lock from start to finish, so other threads see a
//! position either before or after a move, never halfway through one.

use parking_lot::Mutex;

use crate::color::Color;
use crate::config::GameConfig;
use crate::error::{FenError, MoveError};
use crate::make_move::MoveOutcome;
use crate::movegen;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::status::GameStatus;

/// One game behind a lock.
#[derive(Debug)]
pub struct Session {
    position: Mutex<Position>,
}

impl Session {
    /// Wrap an existing position.
    pub fn new(position: Position) -> Session {
        Session {
            position: Mutex::new(position),
        }
    }

    /// Start a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FenError`] if the configuration does not describe a valid
    /// position.
    pub fn from_config(config: &GameConfig) -> Result<Session, FenError> {
        Ok(Session::new(config.new_game()?))
    }

    /// Replace the current game with a fresh one. On error the current game
    /// is kept.
    ///
    /// # Errors
    ///
    /// Returns [`FenError`] if the configuration is invalid.
    pub fn new_game(&self, config: &GameConfig) -> Result<(), FenError> {
        let fresh = config.new_game()?;
        *self.position.lock() = fresh;
        Ok(())
    }

    /// See [`Position::apply`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the request is rejected.
    pub fn apply(&self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.position.lock().apply(from, to)
    }

    /// See [`Position::promote`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if no matching promotion is pending.
    pub fn promote(&self, square: Square, kind: PieceKind) -> Result<(), MoveError> {
        self.position.lock().promote(square, kind)
    }

    /// See [`movegen::legal_destinations`].
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        movegen::legal_destinations(&self.position.lock(), from)
    }

    /// Current position in FEN.
    pub fn to_fen(&self) -> String {
        self.position.lock().to_fen()
    }

    /// See [`Position::is_in_check`].
    pub fn is_in_check(&self, color: Color) -> bool {
        self.position.lock().is_in_check(color)
    }

    /// See [`Position::status`].
    pub fn status(&self) -> GameStatus {
        self.position.lock().status()
    }

    /// A copy of the current position.
    pub fn snapshot(&self) -> Position {
        self.position.lock().clone()
    }

    /// Run `f` against the position while holding the lock.
    pub fn with_position<R>(&self, f: impl FnOnce(&Position) -> R) -> R {
        f(&self.position.lock())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::fen::STARTING_FEN;

    #[test]
    fn plays_through_the_lock() {
        let session = Session::from_config(&GameConfig::default()).unwrap();
        let geometry = session.with_position(Position::geometry);
        let e2 = geometry.parse_square("e2").unwrap();
        let e4 = geometry.parse_square("e4").unwrap();

        assert_eq!(session.legal_destinations(e2).len(), 2);
        assert_eq!(session.apply(e2, e4), Ok(MoveOutcome::Completed));
        assert_eq!(
            session.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
        assert!(!session.is_in_check(Color::Black));
        assert_eq!(session.status(), GameStatus::Ongoing);
    }

    #[test]
    fn rejected_new_game_keeps_the_old_one() {
        let session = Session::from_config(&GameConfig::silverman_4x4()).unwrap();
        let before = session.snapshot();
        let bad = GameConfig {
            fen: "not a fen".to_string(),
            ..GameConfig::default()
        };
        assert!(session.new_game(&bad).is_err());
        assert_eq!(session.snapshot(), before);

        session.new_game(&GameConfig::default()).unwrap();
        assert_eq!(session.to_fen(), STARTING_FEN);
    }

    #[test]
    fn promotion_through_the_session() {
        let position = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", 8, 8).unwrap();
        let session = Session::new(position);
        let geometry = session.snapshot().geometry();
        let a7 = geometry.parse_square("a7").unwrap();
        let a8 = geometry.parse_square("a8").unwrap();

        assert_eq!(session.apply(a7, a8), Ok(MoveOutcome::PromotionPending(a8)));
        assert_eq!(session.status(), GameStatus::AwaitingPromotion);
        session.promote(a8, PieceKind::Rook).unwrap();
        assert_eq!(session.to_fen(), "R3k3/8/8/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn concurrent_readers_see_whole_moves() {
        let session = Arc::new(Session::from_config(&GameConfig::default()).unwrap());
        let geometry = session.snapshot().geometry();
        let squares = |from: &str, to: &str| {
            (
                geometry.parse_square(from).unwrap(),
                geometry.parse_square(to).unwrap(),
            )
        };
        let moves = [
            squares("g1", "f3"),
            squares("g8", "f6"),
            squares("f3", "g1"),
            squares("f6", "g8"),
        ];

        let writer = {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                for _ in 0..25 {
                    for (from, to) in moves {
                        session.apply(from, to).unwrap();
                    }
                }
            })
        };
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let session = Arc::clone(&session);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let position = session.snapshot();
                        assert_eq!(position.occupied().count(), 32);
                        assert!(position.pending_promotion().is_none());
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        let end = session.snapshot();
        assert_eq!(end.halfmove_clock(), 100);
        assert_eq!(end.fullmove_number(), 51);
    }
}
