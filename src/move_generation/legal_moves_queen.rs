use crate::chess_errors::EngineResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    expect_piece, generate_slides, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};

pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) -> EngineResult<()> {
    let queen = expect_piece(game_state, from, PieceKind::Queen)?;
    generate_slides(game_state, queen, from, &BISHOP_DIRECTIONS, out);
    generate_slides(game_state, queen, from, &ROOK_DIRECTIONS, out);
    Ok(())
}
