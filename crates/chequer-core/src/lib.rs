//! Chess rules on boards of any size: FEN, move generation, move execution
//! and game status.

mod attacks;
mod castle_rights;
mod chess_move;
mod color;
mod config;
mod error;
mod fen;
mod geometry;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod session;
mod square;
mod status;

pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use config::{GameConfig, SILVERMAN_4X4_FEN, SILVERMAN_4X5_FEN, new_game};
pub use error::{FenError, GeometryError, MoveError, NotationError};
pub use fen::STARTING_FEN;
pub use geometry::Geometry;
pub use make_move::MoveOutcome;
pub use movegen::{GenMode, generate, legal_destinations};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Phase, Position, PrettyPosition};
pub use session::Session;
pub use square::Square;
pub use status::{GameStatus, legal_moves};
