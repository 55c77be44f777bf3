use crate::chess_errors::EngineResult;
use crate::game_state::chess_rules::{
    KINGSIDE_KING_DEST_COL, KINGSIDE_ROOK_COL, QUEENSIDE_KING_DEST_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{expect_piece, generate_steps, KING_OFFSETS};

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) -> EngineResult<()> {
    let king = expect_piece(game_state, from, PieceKind::King)?;
    generate_steps(game_state, king, from, &KING_OFFSETS, out);
    generate_castling_moves(game_state, king, from, out);
    Ok(())
}

/// Castling is gated only on the right being held and the squares between
/// king and rook being empty. Passing through or landing on an attacked
/// square is not checked.
fn generate_castling_moves(game_state: &GameState, king: Piece, from: Square, out: &mut Vec<Move>) {
    let row = from.row();
    let between_empty = |cols: std::ops::Range<u8>| {
        cols.into_iter()
            .all(|col| game_state.is_empty(Square::at(row, col)))
    };

    if game_state.has_castling_right(kingside_right(king.color))
        && between_empty(from.col() + 1..KINGSIDE_ROOK_COL)
    {
        out.push(Move {
            from,
            to: Square::at(row, KINGSIDE_KING_DEST_COL),
            piece: king,
            captured: None,
        });
    }

    if game_state.has_castling_right(queenside_right(king.color))
        && between_empty(QUEENSIDE_ROOK_COL + 1..from.col())
    {
        out.push(Move {
            from,
            to: Square::at(row, QUEENSIDE_KING_DEST_COL),
            piece: king,
            captured: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::utils::fen_parser::parse_fen;

    fn king_targets(fen: &str) -> Vec<String> {
        let (game, side) = parse_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&game, game.king_square(side), &mut out).expect("king should generate");
        let mut targets: Vec<String> = out.iter().map(|m| m.to.to_string()).collect();
        targets.sort();
        targets
    }

    #[test]
    fn both_castles_offered_when_paths_are_clear() {
        let targets = king_targets("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(targets.contains(&"g1".to_owned()));
        assert!(targets.contains(&"c1".to_owned()));
        assert_eq!(targets.len(), 7);
    }

    #[test]
    fn blocked_path_or_missing_right_suppresses_castle() {
        let targets = king_targets("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
        assert!(!targets.contains(&"g1".to_owned()));
        assert!(!targets.contains(&"c1".to_owned()));

        let targets = king_targets("r3k2r/8/8/8/8/8/8/R3K2R w Q - 0 1");
        assert!(!targets.contains(&"g1".to_owned()));
        assert!(targets.contains(&"c1".to_owned()));
    }

    #[test]
    fn castling_ignores_attacked_transit_squares() {
        // The f1 square is covered by the rook on f8.
        let targets = king_targets("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(targets.contains(&"g1".to_owned()));
    }
}
