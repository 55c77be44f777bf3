//! Leaf-node counting over the legal move tree, used to validate generation.

use crate::chess_errors::EngineResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// Count leaves `depth` plies below the current position with `color` to move.
pub fn perft(game_state: &mut GameState, color: Color, depth: u8) -> EngineResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(game_state, color)? {
        let record = game_state.apply(mv.from, mv.to)?;

        let child = if depth == 1 {
            Ok(PerftCounts {
                nodes: 1,
                captures: u64::from(record.flags.captured),
                castles: u64::from(record.flags.castled),
                promotions: u64::from(record.flags.promoted),
                checks: u64::from(game_state.is_king_in_check(color.opposite())),
            })
        } else {
            perft(game_state, color.opposite(), depth - 1)
        };

        game_state.undo(record);
        total.merge(child?);
    }

    Ok(total)
}

/// Per-root-move node counts, handy for diffing against another generator.
pub fn perft_divide(game_state: &mut GameState, color: Color, depth: u8) -> EngineResult<Vec<(Move, u64)>> {
    let mut out = Vec::new();
    for mv in legal_moves(game_state, color)? {
        let record = game_state.apply(mv.from, mv.to)?;
        let child = perft(game_state, color.opposite(), depth.saturating_sub(1));
        game_state.undo(record);
        out.push((mv, child?.nodes));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn start_position_counts_match_reference() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let expected = [20u64, 400, 8902];
        for (i, nodes) in expected.iter().enumerate() {
            let counts = perft(&mut game, Color::Light, (i + 1) as u8).expect("perft should run");
            assert_eq!(counts.nodes, *nodes, "depth {}", i + 1);
        }
        let depth3 = perft(&mut game, Color::Light, 3).expect("perft should run");
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(game, before);
    }

    #[test]
    fn castles_and_promotions_are_counted() {
        let (mut game, side) =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let counts = perft(&mut game, side, 1).expect("perft should run");
        assert_eq!(counts.castles, 2);

        let (mut game, side) =
            parse_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let counts = perft(&mut game, side, 1).expect("perft should run");
        assert_eq!(counts.promotions, 1);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&mut game, Color::Light, 2).expect("divide should run");
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}
