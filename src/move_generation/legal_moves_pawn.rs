use crate::chess_errors::EngineResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::expect_piece;

/// Pushes (double push only from the starting row) and diagonal captures.
/// There is no en passant.
pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) -> EngineResult<()> {
    let pawn = expect_piece(game_state, from, PieceKind::Pawn)?;
    let dir = pawn.color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if game_state.is_empty(one) {
            out.push(Move {
                from,
                to: one,
                piece: pawn,
                captured: None,
            });

            if from.row() == pawn.color.pawn_start_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if game_state.is_empty(two) {
                        out.push(Move {
                            from,
                            to: two,
                            piece: pawn,
                            captured: None,
                        });
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };
        if let Some(victim) = game_state.piece_at(to) {
            if victim.color != pawn.color && victim.kind != PieceKind::King {
                out.push(Move {
                    from,
                    to,
                    piece: pawn,
                    captured: Some(victim),
                });
            }
        }
    }

    Ok(())
}
