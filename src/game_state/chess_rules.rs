//! Canonical chess-rule constants.
//!
//! Starting layout and the fixed castling geometry shared by board mutation
//! and move generation.

use crate::game_state::chess_types::{PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the `a` file to the `h` file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_KING_DEST_COL: u8 = 6;
pub const QUEENSIDE_KING_DEST_COL: u8 = 2;

/// Rook relocation `(from, to)` for a king landing on `king_to` by castling.
#[inline]
pub fn castling_rook_squares(king_to: Square) -> Option<(Square, Square)> {
    let row = king_to.row();
    match king_to.col() {
        KINGSIDE_KING_DEST_COL => Some((
            Square::at(row, KINGSIDE_ROOK_COL),
            Square::at(row, KINGSIDE_KING_DEST_COL - 1),
        )),
        QUEENSIDE_KING_DEST_COL => Some((
            Square::at(row, QUEENSIDE_ROOK_COL),
            Square::at(row, QUEENSIDE_KING_DEST_COL + 1),
        )),
        _ => None,
    }
}
