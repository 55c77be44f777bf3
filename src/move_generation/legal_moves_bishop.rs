use crate::chess_errors::EngineResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{expect_piece, generate_slides, BISHOP_DIRECTIONS};

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) -> EngineResult<()> {
    let bishop = expect_piece(game_state, from, PieceKind::Bishop)?;
    generate_slides(game_state, bishop, from, &BISHOP_DIRECTIONS, out);
    Ok(())
}
