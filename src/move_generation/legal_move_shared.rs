use crate::chess_errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Resolve the piece on `square` and insist it is a `kind`.
pub fn expect_piece(game_state: &GameState, square: Square, kind: PieceKind) -> EngineResult<Piece> {
    match game_state.piece_at(square) {
        Some(piece) if piece.kind == kind => Ok(piece),
        other => Err(EngineError::WrongPieceKind {
            square,
            expected: kind,
            found: other.map(|p| p.kind),
        }),
    }
}

/// Push `from -> to` unless `to` holds an own piece or a king.
///
/// Returns whether `to` was empty, which lets sliders continue their ray.
#[inline]
pub fn push_if_available(
    game_state: &GameState,
    piece: Piece,
    from: Square,
    to: Square,
    out: &mut Vec<Move>,
) -> bool {
    match game_state.piece_at(to) {
        None => {
            out.push(Move {
                from,
                to,
                piece,
                captured: None,
            });
            true
        }
        Some(occupant) => {
            if occupant.color != piece.color && occupant.kind != PieceKind::King {
                out.push(Move {
                    from,
                    to,
                    piece,
                    captured: Some(occupant),
                });
            }
            false
        }
    }
}

/// Single steps for knights and kings.
pub fn generate_steps(
    game_state: &GameState,
    piece: Piece,
    from: Square,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            push_if_available(game_state, piece, from, to, out);
        }
    }
}

/// Rays for bishops, rooks and queens, stopping at the first occupant.
pub fn generate_slides(
    game_state: &GameState,
    piece: Piece,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            if !push_if_available(game_state, piece, from, to, out) {
                break;
            }
            cursor = to;
        }
    }
}
