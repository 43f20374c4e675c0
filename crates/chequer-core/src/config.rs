//! Game setup: a FEN plus board dimensions, with presets for known variants.

use tracing::debug;

use crate::error::FenError;
use crate::fen::STARTING_FEN;
use crate::position::Position;

/// Silverman 4x4 starting position.
pub const SILVERMAN_4X4_FEN: &str = "rqkr/pppp/PPPP/RQKR w - - 0 1";

/// Silverman 4x5 starting position.
pub const SILVERMAN_4X5_FEN: &str = "rqkr/pppp/4/PPPP/RQKR w - - 0 1";

/// Everything needed to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Starting position in FEN.
    pub fen: String,
    /// Number of files (columns).
    pub files: usize,
    /// Number of ranks (rows).
    pub ranks: usize,
}

impl GameConfig {
    /// Silverman's 4x4 minichess.
    pub fn silverman_4x4() -> GameConfig {
        GameConfig {
            fen: SILVERMAN_4X4_FEN.to_string(),
            files: 4,
            ranks: 4,
        }
    }

    /// Silverman's 4x5 minichess.
    pub fn silverman_4x5() -> GameConfig {
        GameConfig {
            fen: SILVERMAN_4X5_FEN.to_string(),
            files: 4,
            ranks: 5,
        }
    }

    /// Build the starting position this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`FenError`] if the FEN does not describe a position on a
    /// `files` x `ranks` board.
    pub fn new_game(&self) -> Result<Position, FenError> {
        new_game(&self.fen, self.files, self.ranks)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            fen: STARTING_FEN.to_string(),
            files: 8,
            ranks: 8,
        }
    }
}

/// Start a game from `fen` on a `files` x `ranks` board.
///
/// # Errors
///
/// Returns [`FenError`] if the FEN or the dimensions are invalid.
pub fn new_game(fen: &str, files: usize, ranks: usize) -> Result<Position, FenError> {
    let position = Position::from_fen(fen, files, ranks)?;
    debug!(files, ranks, fen, "new game");
    Ok(position)
}
