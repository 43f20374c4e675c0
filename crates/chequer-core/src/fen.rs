//! FEN parsing and serialization for [`Position`] on any board geometry.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::geometry::Geometry;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a FEN string onto a board of `files` x `ranks`.
    ///
    /// The geometry comes from the caller, not from the FEN: the placement
    /// must list exactly `ranks` rows of exactly `files` squares each.
    pub fn from_fen(fen: &str, files: usize, ranks: usize) -> Result<Position, FenError> {
        let geometry = Geometry::new(files, ranks)?;
        Self::from_fen_with(fen, geometry)
    }

    /// Parse a FEN string onto an already validated geometry.
    pub fn from_fen_with(fen: &str, geometry: Geometry) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut position = Position::empty(geometry);
        parse_placement(fields[0], &mut position)?;

        let turn = Color::from_fen(fields[1]).ok_or_else(|| FenError::InvalidColor {
            found: fields[1].to_string(),
        })?;
        position.set_turn(turn);

        position.set_castling(CastleRights::from_fen(fields[2])?);

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                geometry
                    .parse_square(fields[3])
                    .ok_or_else(|| FenError::InvalidEnPassant {
                        found: fields[3].to_string(),
                    })?,
            )
        };
        position.set_en_passant(en_passant);

        position.set_halfmove_clock(parse_counter(fields[4], "halfmove clock")?);
        position.set_fullmove_number(parse_counter(fields[5], "fullmove number")?);

        Ok(position)
    }

    /// Serialize to a FEN string. Same as the `Display` output.
    pub fn to_fen(&self) -> String {
        self.to_string()
    }
}

/// Fill `position` from the piece-placement field, top rank first.
fn parse_placement(field: &str, position: &mut Position) -> Result<(), FenError> {
    let geometry = position.geometry();
    let files = usize::from(geometry.files());

    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != usize::from(geometry.ranks()) {
        return Err(FenError::WrongRankCount {
            expected: usize::from(geometry.ranks()),
            found: rows.len(),
        });
    }

    for (rank, row) in (0u8..).zip(rows.iter()) {
        let rank_index = usize::from(rank);
        let mut file: usize = 0;
        let mut chars = row.chars().peekable();

        while let Some(c) = chars.next() {
            if c.is_ascii_digit() {
                // Boards wider than nine files need multi-digit runs.
                let mut run = String::from(c);
                while let Some(next) = chars.next_if(char::is_ascii_digit) {
                    run.push(next);
                }
                let count = match run.parse::<usize>() {
                    Ok(count) if count > 0 => count,
                    _ => return Err(FenError::InvalidEmptyRun { run }),
                };
                file = file.saturating_add(count);
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            if file >= files {
                return Err(FenError::BadRankLength {
                    rank_index,
                    expected: files,
                    length: file + 1,
                });
            }
            position.set_piece(Square::new(file as u8, rank), Some(piece));
            file += 1;
        }

        if file != files {
            return Err(FenError::BadRankLength {
                rank_index,
                expected: files,
                length: file,
            });
        }
    }

    Ok(())
}

/// Parse a move counter: ASCII digits only, no sign, at most `u32::MAX`.
fn parse_counter(field: &str, name: &'static str) -> Result<u32, FenError> {
    let invalid = || FenError::InvalidMoveCounter {
        field: name,
        found: field.to_string(),
    };
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    field.parse::<u32>().map_err(|_| invalid())
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let geometry = self.geometry();

        // Piece placement
        for rank in 0..geometry.ranks() {
            let mut empty_count = 0u32;

            for file in 0..geometry.files() {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank + 1 < geometry.ranks() {
                write!(f, "/")?;
            }
        }

        write!(f, " {}", self.turn())?;
        write!(f, " {}", self.castling())?;

        match self.en_passant() {
            Some(sq) => write!(f, " {}", geometry.algebraic(sq))?,
            None => write!(f, " -")?,
        }

        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::error::{FenError, GeometryError};
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;

    fn roundtrip(fen: &str, files: usize, ranks: usize) {
        let position = Position::from_fen(fen, files, ranks).unwrap();
        let output = position.to_fen();
        assert_eq!(output, fen, "FEN roundtrip failed");
        let reparsed = Position::from_fen(&output, files, ranks).unwrap();
        assert_eq!(position, reparsed);
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_FEN, 8, 8);
    }

    #[test]
    fn roundtrip_sicilian() {
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2", 8, 8);
    }

    #[test]
    fn roundtrip_kiwipete() {
        roundtrip(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            8,
            8,
        );
    }

    #[test]
    fn roundtrip_black_to_move_with_en_passant() {
        roundtrip("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1", 8, 8);
    }

    #[test]
    fn roundtrip_silverman() {
        roundtrip("rqkr/pppp/PPPP/RQKR w - - 0 1", 4, 4);
        roundtrip("rqkr/pppp/4/PPPP/RQKR w - - 0 1", 4, 5);
    }

    #[test]
    fn roundtrip_wide_board() {
        roundtrip("k11/12/11K b - - 7 31", 12, 3);
    }

    #[test]
    fn starting_position_matches_fen() {
        let from_fen = Position::from_fen(STARTING_FEN, 8, 8).unwrap();
        assert_eq!(from_fen, Position::starting_position());
    }

    #[test]
    fn parses_every_field() {
        let position =
            Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w Kq d6 3 17", 8, 8).unwrap();
        assert_eq!(position.turn(), Color::White);
        assert_eq!(
            position.castling(),
            CastleRights::WHITE_KING.insert(CastleRights::BLACK_QUEEN)
        );
        assert_eq!(position.en_passant(), Some(Square::new(3, 2)));
        assert_eq!(position.halfmove_clock(), 3);
        assert_eq!(position.fullmove_number(), 17);
        assert_eq!(position.piece_at(Square::new(4, 3)), Some(Piece::WHITE_PAWN));
    }

    #[test]
    fn en_passant_rank_uses_board_height() {
        let position = Position::from_fen("k3/4/4/4/3K w - b3 0 1", 4, 5).unwrap();
        assert_eq!(position.en_passant(), Some(Square::new(1, 2)));
        assert!(position.to_fen().contains(" b3 "));
    }

    #[test]
    fn error_wrong_field_count() {
        assert_eq!(
            Position::from_fen("e4 e5", 8, 8),
            Err(FenError::WrongFieldCount { found: 2 })
        );
    }

    #[test]
    fn error_invalid_piece_char() {
        let result =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1", 8, 8);
        assert_eq!(result, Err(FenError::InvalidPieceChar { character: 'X' }));
    }

    #[test]
    fn error_zero_run() {
        let result = Position::from_fen("4k3/8/8/8/8/8/08/4K3 w - - 0 1", 8, 8);
        assert!(matches!(result, Err(FenError::InvalidEmptyRun { .. })));
    }

    #[test]
    fn error_bad_rank_length() {
        let short =
            Position::from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 8, 8);
        assert!(matches!(
            short,
            Err(FenError::BadRankLength { rank_index: 1, length: 7, .. })
        ));
        let long =
            Position::from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 8, 8);
        assert!(matches!(long, Err(FenError::BadRankLength { rank_index: 2, .. })));
    }

    #[test]
    fn error_rank_count_must_match_geometry() {
        let result = Position::from_fen(STARTING_FEN, 8, 6);
        assert_eq!(
            result,
            Err(FenError::WrongRankCount { expected: 6, found: 8 })
        );
    }

    #[test]
    fn error_invalid_color() {
        let result =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1", 8, 8);
        assert!(matches!(result, Err(FenError::InvalidColor { .. })));
    }

    #[test]
    fn error_invalid_castling() {
        let result =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1", 8, 8);
        assert_eq!(result, Err(FenError::InvalidCastlingChar { character: 'X' }));
    }

    #[test]
    fn error_invalid_en_passant() {
        for ep in ["z9", "e", "e0", "e9", "-3"] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq {ep} 0 1");
            assert!(
                matches!(Position::from_fen(&fen, 8, 8), Err(FenError::InvalidEnPassant { .. })),
                "{ep} should be rejected"
            );
        }
    }

    #[test]
    fn error_invalid_move_counter() {
        for (half, full) in [("abc", "1"), ("-1", "1"), ("0", "x"), ("+2", "1")] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - {half} {full}");
            assert!(
                matches!(
                    Position::from_fen(&fen, 8, 8),
                    Err(FenError::InvalidMoveCounter { .. })
                ),
                "{half} {full} should be rejected"
            );
        }
    }

    #[test]
    fn move_counters_stop_at_u32_max() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w - - 4294967295 4294967295";
        let position = Position::from_fen(fen, 8, 8).unwrap();
        assert_eq!(position.halfmove_clock(), u32::MAX);
        assert_eq!(position.to_fen(), fen);

        let err = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 4294967296 1", 8, 8).unwrap_err();
        assert_eq!(
            err,
            FenError::InvalidMoveCounter {
                field: "halfmove clock",
                found: "4294967296".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid halfmove clock: \"4294967296\" (expected 0 to 4294967295)"
        );
    }

    #[test]
    fn error_invalid_geometry() {
        assert_eq!(
            Position::from_fen(STARTING_FEN, 0, 8),
            Err(FenError::Geometry(GeometryError::Empty { files: 0, ranks: 8 }))
        );
    }
}
