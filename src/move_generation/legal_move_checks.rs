use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

impl GameState {
    /// Whether `king_color`'s king is attacked by the other color.
    #[inline]
    pub fn is_king_in_check(&self, king_color: Color) -> bool {
        self.is_square_attacked(self.king_square(king_color), king_color.opposite())
    }

    /// Whether any piece of `attacker_color` attacks `square`, regardless of
    /// whose turn it is.
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        let is_attacker = |sq: Square, kinds: &[PieceKind]| {
            self.piece_at(sq)
                .is_some_and(|p| p.color == attacker_color && kinds.contains(&p.kind))
        };

        // A pawn attacks one row ahead of itself, so look one row behind.
        let pawn_row = -attacker_color.pawn_direction();
        for d_col in [-1, 1] {
            if let Some(from) = square.offset(pawn_row, d_col) {
                if is_attacker(from, &[PieceKind::Pawn]) {
                    return true;
                }
            }
        }

        for (d_row, d_col) in KNIGHT_OFFSETS {
            if let Some(from) = square.offset(d_row, d_col) {
                if is_attacker(from, &[PieceKind::Knight]) {
                    return true;
                }
            }
        }

        for (d_row, d_col) in KING_OFFSETS {
            if let Some(from) = square.offset(d_row, d_col) {
                if is_attacker(from, &[PieceKind::King]) {
                    return true;
                }
            }
        }

        let diagonal = [PieceKind::Bishop, PieceKind::Queen];
        let straight = [PieceKind::Rook, PieceKind::Queen];
        for (directions, kinds) in [(BISHOP_DIRECTIONS, diagonal), (ROOK_DIRECTIONS, straight)] {
            for (d_row, d_col) in directions {
                let mut cursor = square;
                while let Some(next) = cursor.offset(d_row, d_col) {
                    if self.piece_at(next).is_some() {
                        if is_attacker(next, &kinds) {
                            return true;
                        }
                        break;
                    }
                    cursor = next;
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("square should parse")
    }

    #[test]
    fn pawns_attack_diagonally_forward_only() {
        let (game, _) = parse_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        // Light pawn on e4 covers d5 and f5.
        assert!(game.is_square_attacked(sq("d5"), Color::Light));
        assert!(game.is_square_attacked(sq("f5"), Color::Light));
        assert!(!game.is_square_attacked(sq("e5"), Color::Light));
        assert!(!game.is_square_attacked(sq("d3"), Color::Light));
        // Dark pawn on d5 covers c4 and e4.
        assert!(game.is_square_attacked(sq("e4"), Color::Dark));
        assert!(game.is_square_attacked(sq("c4"), Color::Dark));
        assert!(!game.is_square_attacked(sq("d6"), Color::Dark));
    }

    #[test]
    fn sliders_are_blocked_by_the_first_occupant() {
        let (game, _) = parse_fen("4k3/8/8/8/8/8/4P3/R3K2B w - - 0 1").expect("FEN should parse");
        assert!(game.is_square_attacked(sq("a8"), Color::Light));
        assert!(game.is_square_attacked(sq("d1"), Color::Light));
        assert!(game.is_square_attacked(sq("b7"), Color::Light));
        // The a1 rook is stopped by the king on e1.
        assert!(!game.is_square_attacked(sq("g1"), Color::Light));
        assert!(!game.is_square_attacked(sq("e3"), Color::Light));
    }

    #[test]
    fn detects_knight_and_king_contact_checks() {
        let (game, _) = parse_fen("4k3/8/3N4/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert!(game.is_king_in_check(Color::Dark));
        assert!(!game.is_king_in_check(Color::Light));

        let (game, _) = parse_fen("8/8/8/8/8/8/3k4/4K3 w - - 0 1").expect("FEN should parse");
        assert!(game.is_king_in_check(Color::Light));
    }

    #[test]
    fn queen_checks_along_both_lines() {
        let (game, _) = parse_fen("4k3/8/8/q7/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(game.is_king_in_check(Color::Light));
        let (game, _) = parse_fen("4k3/8/8/8/8/8/8/q3K3 w - - 0 1").expect("FEN should parse");
        assert!(game.is_king_in_check(Color::Light));
        let (game, _) = parse_fen("4k3/8/8/8/8/8/8/qN2K3 w - - 0 1").expect("FEN should parse");
        assert!(!game.is_king_in_check(Color::Light));
    }
}
