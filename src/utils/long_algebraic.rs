use crate::chess_errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Split "e2e4" into its from and to squares.
///
/// A trailing promotion letter ("e7e8q") is accepted; pawns always become
/// queens so the letter carries no information.
pub fn long_algebraic_to_squares(long_algebraic: &str) -> EngineResult<(Square, Square)> {
    let invalid = || EngineError::InvalidAlgebraic(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() {
        return Err(invalid());
    }
    match long_algebraic.len() {
        4 => {}
        5 if long_algebraic.ends_with(['q', 'Q']) => {}
        _ => return Err(invalid()),
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| invalid())?;
    Ok((from, to))
}

pub fn squares_to_long_algebraic(from: Square, to: Square) -> String {
    let mut out = square_to_algebraic(from);
    out.push_str(&square_to_algebraic(to));
    out
}

/// Match a typed move against `color`'s legal moves.
///
/// `Ok(None)` means the text was well formed but the move is not legal here.
pub fn find_legal_move(
    game_state: &mut GameState,
    color: Color,
    long_algebraic: &str,
) -> EngineResult<Option<Move>> {
    let (from, to) = long_algebraic_to_squares(long_algebraic)?;
    Ok(legal_moves(game_state, color)?
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to))
}
