//! Legal move generation by apply/test/undo filtering of pseudo-legal moves.

use crate::chess_errors::EngineResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Dispatch to the generator matching the piece on `from`.
pub fn generate_piece_moves(game_state: &GameState, piece: Piece, from: Square, out: &mut Vec<Move>) -> EngineResult<()> {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, out),
        PieceKind::King => generate_king_moves(game_state, from, out),
    }
}

/// Every move obeying piece movement and occupancy rules for `color`,
/// including those that leave its own king attacked.
pub fn pseudo_legal_moves(game_state: &GameState, color: Color) -> EngineResult<Vec<Move>> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in game_state.pieces() {
        if piece.color == color {
            generate_piece_moves(game_state, piece, from, &mut out)?;
        }
    }
    Ok(out)
}

/// Pseudo-legal moves that do not leave `color`'s king in check.
///
/// Each candidate is applied, tested and undone; the state is unchanged on
/// return.
pub fn legal_moves(game_state: &mut GameState, color: Color) -> EngineResult<Vec<Move>> {
    let candidates = pseudo_legal_moves(game_state, color)?;
    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        let record = game_state.apply(mv.from, mv.to)?;
        let safe = !game_state.is_king_in_check(color);
        game_state.undo(record);
        if safe {
            legal.push(mv);
        }
    }
    Ok(legal)
}

/// Moves whose destination was occupied when they were generated.
pub fn capture_subset(moves: &[Move]) -> Vec<Move> {
    moves.iter().copied().filter(Move::is_capture).collect()
}
