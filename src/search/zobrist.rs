//! Zobrist-style placement fingerprints.
//!
//! The key table is drawn from a fixed-seed generator so fingerprints are
//! deterministic across runs, which is useful for testing and debugging. A
//! fingerprint covers piece placement only: side to move and castling state
//! are not mixed in (the search cache keys on side separately).

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::*;

const TABLE_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[u64; 12]; 64],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(TABLE_SEED);
    let mut piece_square = [[0u64; 12]; 64];
    for square in &mut piece_square {
        for key in square {
            *key = rng.random();
        }
    }
    ZobristTables { piece_square }
}

/// Key for `piece` standing on `square`.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[square.index()][piece.index()]
}

/// Full recomputation over every occupied square.
pub fn compute_fingerprint(game_state: &GameState) -> u64 {
    game_state
        .pieces()
        .fold(0u64, |key, (square, piece)| key ^ piece_square_key(piece, square))
}

#[cfg(test)]
mod tests {
    use super::compute_fingerprint;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::long_algebraic::long_algebraic_to_squares;

    fn play(game: &mut GameState, moves: &[&str]) {
        for text in moves {
            let (from, to) = long_algebraic_to_squares(text).expect("move should parse");
            let _ = game.apply(from, to).expect("move should apply");
        }
    }

    #[test]
    fn starting_position_hash_is_deterministic() {
        let a = GameState::new_game();
        let b = GameState::new_game();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), 0);
    }

    #[test]
    fn transposed_move_orders_reach_the_same_fingerprint() {
        let mut a = GameState::new_game();
        let mut b = GameState::new_game();
        play(&mut a, &["g1f3", "g8f6", "b1c3", "b8c6"]);
        play(&mut b, &["b1c3", "b8c6", "g1f3", "g8f6"]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint(), compute_fingerprint(&a));
    }

    #[test]
    fn castling_state_does_not_affect_fingerprint() {
        let (with_rights, _) =
            parse_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let (without_rights, _) =
            parse_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert_eq!(with_rights.fingerprint(), without_rights.fingerprint());
    }

    #[test]
    fn single_square_change_alters_fingerprint() {
        let base = GameState::new_game();
        let mut edited = base.clone();
        let _ = edited.remove(Square::at(6, 0)).expect("pawn should be removable");
        assert_ne!(base.fingerprint(), edited.fingerprint());

        let mut swapped = edited.clone();
        swapped
            .place(Square::at(6, 0), Piece::new(Color::Dark, PieceKind::Pawn))
            .expect("square is empty");
        assert_ne!(base.fingerprint(), swapped.fingerprint());
        assert_eq!(swapped.fingerprint(), compute_fingerprint(&swapped));
    }
}
