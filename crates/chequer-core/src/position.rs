//! The position: piece placement, side to move, castling, en passant,
//! move counters, and the promotion phase of the move executor.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::geometry::Geometry;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Where the move executor stands between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Ready for the next move.
    Idle,
    /// A pawn reached its far rank on this square; the turn completes once
    /// a promotion piece is chosen.
    AwaitingPromotion(Square),
}

/// Complete game state for a board of any supported size.
///
/// A position is built once per game from a FEN string and a
/// [`Geometry`], then mutated in place by
/// [`apply`](Position::apply) and [`promote`](Position::promote).
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    geometry: Geometry,
    /// Square contents laid out `[file][rank]`; `None` is an empty square.
    squares: Vec<Option<Piece>>,
    turn: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    phase: Phase,
}

impl Position {
    /// An empty board: White to move, no rights, counters at `0` and `1`.
    pub fn empty(geometry: Geometry) -> Position {
        Position {
            geometry,
            squares: vec![None; geometry.square_count()],
            turn: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            phase: Phase::Idle,
        }
    }

    /// Return the standard 8x8 starting position.
    pub fn starting_position() -> Position {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut position = Position::empty(Geometry::STANDARD);
        for (file, kind) in (0u8..).zip(BACK_RANK) {
            position.set_piece(Square::new(file, 0), Some(Piece::new(kind, Color::Black)));
            position.set_piece(Square::new(file, 1), Some(Piece::BLACK_PAWN));
            position.set_piece(Square::new(file, 6), Some(Piece::WHITE_PAWN));
            position.set_piece(Square::new(file, 7), Some(Piece::new(kind, Color::White)));
        }
        position.castling = CastleRights::ALL;
        position
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Return the piece on `sq`, or `None` if it is empty or off the board.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if self.geometry.contains(sq) {
            self.squares[self.geometry.index(sq)]
        } else {
            None
        }
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Iterate over every occupied square, in FEN order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.geometry
            .squares()
            .filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the pieces of one side, in FEN order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the square of `color`'s king, if it has one.
    ///
    /// Variants and hand-written FENs may omit a king; such a side can never
    /// be in check.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Return the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Return the executor phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Return the square awaiting a promotion choice, if any.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        match self.phase {
            Phase::AwaitingPromotion(sq) => Some(sq),
            Phase::Idle => None,
        }
    }

    /// Overwrite the content of an on-board square.
    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        debug_assert!(self.geometry.contains(sq));
        let index = self.geometry.index(sq);
        self.squares[index] = piece;
    }

    /// Move whatever stands on `from` to `to`, emptying `from`.
    /// Returns the previous content of `to`.
    #[inline]
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.piece_at(from);
        let captured = self.piece_at(to);
        self.set_piece(from, None);
        self.set_piece(to, moving);
        captured
    }

    #[inline]
    pub(crate) fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
    }

    #[inline]
    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position(\"{}\", {}x{}, {:?})",
            self,
            self.geometry.files(),
            self.geometry.ranks(),
            self.phase
        )
    }
}

/// Wrapper for printing a position as a grid with rank numbers and file letters.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.0;
        let geometry = position.geometry();
        let width = geometry.ranks().to_string().len();

        for rank in 0..geometry.ranks() {
            let label = u32::from(geometry.ranks()) - u32::from(rank);
            write!(f, "{label:>width$}  ")?;
            for file in 0..geometry.files() {
                let c = position
                    .piece_at(Square::new(file, rank))
                    .map_or('.', Piece::fen_char);
                if file + 1 < geometry.files() {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "{:width$}  ", "")?;
        for file in 0..geometry.files() {
            let letter = (b'a' + file) as char;
            if file + 1 < geometry.files() {
                write!(f, "{letter} ")?;
            } else {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, Position};
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::geometry::Geometry;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_position_layout() {
        let position = Position::starting_position();
        assert_eq!(position.piece_at(Square::new(4, 7)), Some(Piece::WHITE_KING));
        assert_eq!(position.piece_at(Square::new(3, 0)), Some(Piece::BLACK_QUEEN));
        assert_eq!(position.piece_at(Square::new(0, 0)), Some(Piece::BLACK_ROOK));
        assert_eq!(position.piece_at(Square::new(4, 6)), Some(Piece::WHITE_PAWN));
        assert_eq!(position.piece_at(Square::new(4, 4)), None);
        assert_eq!(position.castling(), CastleRights::ALL);
        assert_eq!(position.turn(), Color::White);
        assert_eq!(position.phase(), Phase::Idle);
    }

    #[test]
    fn piece_counts() {
        let position = Position::starting_position();
        assert_eq!(position.occupied().count(), 32);
        assert_eq!(position.pieces(Color::White).count(), 16);
        assert_eq!(position.pieces(Color::Black).count(), 16);
    }

    #[test]
    fn king_square() {
        let position = Position::starting_position();
        assert_eq!(position.king_square(Color::White), Some(Square::new(4, 7)));
        assert_eq!(position.king_square(Color::Black), Some(Square::new(4, 0)));
        assert_eq!(Position::empty(Geometry::STANDARD).king_square(Color::White), None);
    }

    #[test]
    fn off_board_reads_as_empty() {
        let position = Position::empty(Geometry::new(4, 4).unwrap());
        assert_eq!(position.piece_at(Square::new(4, 0)), None);
        assert_eq!(position.piece_at(Square::new(0, 4)), None);
    }

    #[test]
    fn relocate_returns_capture() {
        let mut position = Position::starting_position();
        let e2 = Square::new(4, 6);
        let e7 = Square::new(4, 1);
        let captured = position.relocate(e2, e7);
        assert_eq!(captured, Some(Piece::BLACK_PAWN));
        assert_eq!(position.piece_at(e7), Some(Piece::WHITE_PAWN));
        assert!(!position.is_occupied(e2));
        assert_eq!(position.occupied().count(), 31);
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Position::starting_position().pretty());
        assert!(output.contains("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.ends_with("a b c d e f g h"));
    }

    #[test]
    fn pretty_print_small_board() {
        let position = Position::empty(Geometry::new(4, 5).unwrap());
        let output = format!("{}", position.pretty());
        assert_eq!(output.lines().count(), 6);
        assert!(output.starts_with("5  . . . ."));
        assert!(output.ends_with("a b c d"));
    }
}
