//! Perft (performance test) for move generation correctness verification.
//!
//! A promotion counts as four leaves, one per promotion piece, so totals
//! match the published reference numbers.

use crate::make_move::MoveOutcome;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::status::legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position).
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    legal_moves(position)
        .into_iter()
        .map(|mv| {
            let mut child = position.clone();
            match child.play(mv.from(), mv.to()) {
                MoveOutcome::Completed => perft(&child, depth - 1),
                MoveOutcome::PromotionPending(square) => PieceKind::PROMOTIONS
                    .iter()
                    .map(|&kind| {
                        let mut promoted = child.clone();
                        promoted.finish_promotion(square, kind);
                        perft(&promoted, depth - 1)
                    })
                    .sum(),
            }
        })
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs in coordinate notation sorted
/// alphabetically. Promotions appear once per piece, with the piece letter
/// appended (`a7a8q`).
pub fn divide(position: &Position, depth: usize) -> Vec<(String, u64)> {
    let geometry = position.geometry();
    let below = depth.saturating_sub(1);

    let mut results = Vec::new();
    for mv in legal_moves(position) {
        let notation = mv.to_notation(geometry);
        let mut child = position.clone();
        match child.play(mv.from(), mv.to()) {
            MoveOutcome::Completed => results.push((notation, perft(&child, below))),
            MoveOutcome::PromotionPending(square) => {
                for kind in PieceKind::PROMOTIONS {
                    let mut promoted = child.clone();
                    promoted.finish_promotion(square, kind);
                    results.push((format!("{notation}{kind}"), perft(&promoted, below)));
                }
            }
        }
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
