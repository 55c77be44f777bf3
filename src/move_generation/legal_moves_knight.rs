use crate::chess_errors::EngineResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{expect_piece, generate_steps, KNIGHT_OFFSETS};

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) -> EngineResult<()> {
    let knight = expect_piece(game_state, from, PieceKind::Knight)?;
    generate_steps(game_state, knight, from, &KNIGHT_OFFSETS, out);
    Ok(())
}
