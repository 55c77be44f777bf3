//! Core mutable board state.
//!
//! `GameState` is the central model of the engine: an 8x8 mailbox of optional
//! pieces plus castling rights, castling-completed flags, a king-position
//! cache and an incrementally maintained fingerprint. Search mutates a single
//! instance in place through `apply`/`undo` (see `legal_move_apply`).

use crate::chess_errors::{EngineError, EngineResult};
use crate::game_state::chess_rules::{BACK_RANK, KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::search::zobrist::piece_square_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Mailbox ---
    pub(crate) cells: [[Option<Piece>; 8]; 8],

    // --- Castling state ---
    pub(crate) castling_rights: CastlingRights,
    pub(crate) castled: [bool; 2],

    // --- Denormalized caches ---
    pub(crate) king_squares: [Square; 2],
    pub(crate) fingerprint: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            cells: [[None; 8]; 8],
            castling_rights: 0,
            castled: [false; 2],
            king_squares: [
                Square::at(Color::Light.home_row(), KING_HOME_COL),
                Square::at(Color::Dark.home_row(), KING_HOME_COL),
            ],
            fingerprint: 0,
        }
    }
}

impl GameState {
    /// Empty board without castling rights. Both kings must be placed before
    /// the state is handed to move generation or search.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position with all castling rights.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for color in [Color::Light, Color::Dark] {
                let pawn_row = color.pawn_start_row();
                state.put(Square::at(color.home_row(), col), Piece::new(color, *kind));
                state.put(Square::at(pawn_row, col), Piece::new(color, PieceKind::Pawn));
            }
        }
        state.king_squares = [
            Square::at(Color::Light.home_row(), KING_HOME_COL),
            Square::at(Color::Dark.home_row(), KING_HOME_COL),
        ];
        state.castling_rights = CASTLE_ALL;
        state
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    pub fn has_castled(&self, color: Color) -> bool {
        self.castled[color.index()]
    }

    /// Incrementally maintained placement hash; always equal to
    /// [`compute_fingerprint`](crate::search::zobrist::compute_fingerprint).
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Occupied squares together with their pieces, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Setup helper: place `piece` on an empty square.
    pub fn place(&mut self, square: Square, piece: Piece) -> EngineResult<()> {
        if !self.is_empty(square) {
            return Err(EngineError::SquareOccupied(square));
        }
        if piece.kind == PieceKind::King {
            if self.has_king(piece.color) {
                return Err(EngineError::DuplicateKing(piece.color));
            }
            self.king_squares[piece.color.index()] = square;
        }
        self.put(square, piece);
        Ok(())
    }

    /// Setup helper: clear a non-king square, dropping any right tied to it.
    pub fn remove(&mut self, square: Square) -> EngineResult<Option<Piece>> {
        if let Some(piece) = self.piece_at(square) {
            if piece.kind == PieceKind::King {
                return Err(EngineError::KingNotRemovable(square));
            }
        }
        self.castling_rights &= !rights_tied_to(square);
        Ok(self.take(square))
    }

    /// Setup helper: grant castling rights. Rights whose king or rook is not on
    /// its home square are dropped so the generator never offers them.
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        let mut granted = 0;
        for color in [Color::Light, Color::Dark] {
            let row = color.home_row();
            let king = Piece::new(color, PieceKind::King);
            let rook = Some(Piece::new(color, PieceKind::Rook));
            if self.piece_at(Square::at(row, KING_HOME_COL)) != Some(king) {
                continue;
            }
            if self.piece_at(Square::at(row, KINGSIDE_ROOK_COL)) == rook {
                granted |= rights & kingside_right(color);
            }
            if self.piece_at(Square::at(row, QUEENSIDE_ROOK_COL)) == rook {
                granted |= rights & queenside_right(color);
            }
        }
        self.castling_rights = granted;
    }

    #[inline]
    fn has_king(&self, color: Color) -> bool {
        self.piece_at(self.king_square(color)) == Some(Piece::new(color, PieceKind::King))
    }

    // --- Raw cell writes; every mutation goes through these two. ---

    #[inline]
    pub(crate) fn put(&mut self, square: Square, piece: Piece) {
        let cell = &mut self.cells[square.row() as usize][square.col() as usize];
        debug_assert!(cell.is_none(), "put onto occupied square {square}");
        *cell = Some(piece);
        self.fingerprint ^= piece_square_key(piece, square);
    }

    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        let taken = self.cells[square.row() as usize][square.col() as usize].take();
        if let Some(piece) = taken {
            self.fingerprint ^= piece_square_key(piece, square);
        }
        taken
    }
}

/// Castling rights that can no longer hold once `square` changes occupant.
#[inline]
pub(crate) fn rights_tied_to(square: Square) -> CastlingRights {
    let mut lost = 0;
    for color in [Color::Light, Color::Dark] {
        if square.row() != color.home_row() {
            continue;
        }
        match square.col() {
            KING_HOME_COL => lost |= both_rights(color),
            KINGSIDE_ROOK_COL => lost |= kingside_right(color),
            QUEENSIDE_ROOK_COL => lost |= queenside_right(color),
            _ => {}
        }
    }
    lost
}
