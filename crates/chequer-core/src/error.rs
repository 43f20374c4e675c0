//! Error types for geometry, FEN parsing, move requests and move notation.

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors from [`Geometry::new`](crate::geometry::Geometry::new).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// One of the dimensions is zero.
    #[error("board dimensions must be positive, got {files}x{ranks}")]
    Empty {
        /// Requested number of files.
        files: usize,
        /// Requested number of ranks.
        ranks: usize,
    },
    /// More files than there are file letters.
    #[error("at most {max} files are supported, got {files}")]
    TooManyFiles {
        /// Requested number of files.
        files: usize,
        /// Largest supported number of files.
        max: usize,
    },
    /// More ranks than a square coordinate can hold.
    #[error("at most {max} ranks are supported, got {ranks}")]
    TooManyRanks {
        /// Requested number of ranks.
        ranks: usize,
        /// Largest supported number of ranks.
        max: usize,
    },
}

/// A malformed FEN string. Parsing is all-or-nothing: no partial position
/// is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement does not list one row per board rank.
    #[error("expected {expected} ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks on the board.
        expected: usize,
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer squares than the board has files.
    #[error("rank {rank_index} describes {length} squares, expected {expected}")]
    BadRankLength {
        /// Zero-based rank index (0 = first rank listed).
        rank_index: usize,
        /// Number of files on the board.
        expected: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// A run of empty squares is zero or too large to parse.
    #[error("invalid empty-square run: \"{run}\"")]
    InvalidEmptyRun {
        /// The digits of the run.
        run: String,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// A castling right is listed more than once.
    #[error("duplicate castling character: '{character}'")]
    DuplicateCastlingChar {
        /// The repeated character.
        character: char,
    },
    /// The en passant field is not "-" or a square on this board.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a non-negative integer, or exceeds `u32::MAX`.
    #[error("invalid {field}: \"{found}\" (expected 0 to {max})", max = u32::MAX)]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The requested board dimensions are unusable.
    #[error("invalid board geometry: {0}")]
    Geometry(#[from] GeometryError),
}

/// A rejected move or promotion request. The position is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// `to` is not among the legal destinations of the piece on `from`.
    #[error("illegal move request from {from} to {to}")]
    Illegal {
        /// Requested source square.
        from: Square,
        /// Requested destination square.
        to: Square,
    },
    /// A pawn is waiting to be promoted; no other move may be played first.
    #[error("a promotion is pending on {square}")]
    PromotionPending {
        /// Square of the pawn awaiting promotion.
        square: Square,
    },
    /// `promote` was called with no promotion pending.
    #[error("no promotion is pending")]
    NoPromotionPending,
    /// `promote` named a square other than the pending one.
    #[error("promotion is pending on {expected}, not {found}")]
    PromotionSquare {
        /// Square of the pawn awaiting promotion.
        expected: Square,
        /// Square named by the caller.
        found: Square,
    },
    /// The requested piece kind is not a promotion target.
    #[error("cannot promote to {kind}")]
    InvalidPromotion {
        /// The requested kind.
        kind: PieceKind,
    },
}

/// Errors from parsing coordinate move notation such as `e2e4` or `e7e8q`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The text is not two on-board squares plus an optional promotion letter.
    #[error("invalid move notation: \"{found}\"")]
    InvalidMove {
        /// The text that failed to parse.
        found: String,
    },
}
