//! MVV-LVA move ordering.
//!
//! Sorting is stable, so moves with equal scores keep generation order and
//! search results stay reproducible.

use std::cmp::Reverse;

use crate::game_state::chess_types::*;

pub const PROMOTION_BONUS: i32 = 5;

/// Ordering weight of a piece, in pawns. The king's weight only matters here.
#[inline]
pub const fn ordering_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 1000,
    }
}

#[inline]
pub fn move_order_score(mv: &Move) -> i32 {
    let mut score = 0;
    if let Some(victim) = mv.captured {
        score += 10 * ordering_value(victim.kind) - ordering_value(mv.piece.kind);
    }
    if mv.is_promotion() {
        score += PROMOTION_BONUS;
    }
    score
}

/// Stable sort, highest score first.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(move_order_score(mv)));
}

/// Move `mv` to the front, keeping the relative order of everything else.
/// Returns whether it was found.
pub fn move_to_front(moves: &mut [Move], mv: Move) -> bool {
    match moves.iter().position(|&m| m == mv) {
        Some(idx) => {
            moves[..=idx].rotate_right(1);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Move {
        Move {
            from,
            to,
            piece,
            captured,
        }
    }

    const LIGHT_PAWN: Piece = Piece::new(Color::Light, PieceKind::Pawn);
    const LIGHT_QUEEN: Piece = Piece::new(Color::Light, PieceKind::Queen);
    const DARK_ROOK: Piece = Piece::new(Color::Dark, PieceKind::Rook);
    const DARK_PAWN: Piece = Piece::new(Color::Dark, PieceKind::Pawn);

    #[test]
    fn scores_follow_victim_then_attacker() {
        let pawn_takes_rook = mv(Square::at(4, 4), Square::at(3, 3), LIGHT_PAWN, Some(DARK_ROOK));
        let queen_takes_rook = mv(Square::at(4, 0), Square::at(3, 3), LIGHT_QUEEN, Some(DARK_ROOK));
        let queen_takes_pawn = mv(Square::at(4, 0), Square::at(4, 1), LIGHT_QUEEN, Some(DARK_PAWN));
        assert_eq!(move_order_score(&pawn_takes_rook), 49);
        assert_eq!(move_order_score(&queen_takes_rook), 41);
        assert_eq!(move_order_score(&queen_takes_pawn), 1);

        let promotion = mv(Square::at(1, 0), Square::at(0, 0), LIGHT_PAWN, None);
        assert_eq!(move_order_score(&promotion), PROMOTION_BONUS);
    }

    #[test]
    fn ordering_is_stable_for_equal_scores() {
        let quiet_a = mv(Square::at(6, 0), Square::at(5, 0), LIGHT_PAWN, None);
        let quiet_b = mv(Square::at(6, 1), Square::at(5, 1), LIGHT_PAWN, None);
        let capture = mv(Square::at(4, 4), Square::at(3, 3), LIGHT_PAWN, Some(DARK_PAWN));
        let mut moves = vec![quiet_a, quiet_b, capture];
        order_moves(&mut moves);
        assert_eq!(moves, vec![capture, quiet_a, quiet_b]);

        assert!(move_to_front(&mut moves, quiet_b));
        assert_eq!(moves, vec![quiet_b, capture, quiet_a]);
    }
}
