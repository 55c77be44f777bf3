use crate::chess_errors::EngineResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{expect_piece, generate_slides, ROOK_DIRECTIONS};

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) -> EngineResult<()> {
    let rook = expect_piece(game_state, from, PieceKind::Rook)?;
    generate_slides(game_state, rook, from, &ROOK_DIRECTIONS, out);
    Ok(())
}
