//! In-place move application and its exact inverse.

use crate::chess_errors::{EngineError, EngineResult};
use crate::game_state::chess_rules::castling_rook_squares;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::rights_tied_to;

impl GameState {
    /// Move the piece on `from` to `to` and return the record that undoes it.
    ///
    /// Captures whatever stands on `to`, promotes a pawn reaching its last
    /// rank to a queen, relocates the rook when a king moves two files, and
    /// keeps castling rights, castled flags, the king cache and the
    /// fingerprint in sync.
    pub fn apply(&mut self, from: Square, to: Square) -> EngineResult<MoveRecord> {
        let moved = self.piece_at(from).ok_or(EngineError::EmptySquare(from))?;
        if let Some(occupant) = self.piece_at(to) {
            if occupant.kind == PieceKind::King {
                return Err(EngineError::KingNotRemovable(to));
            }
        }

        let prev_castling_rights = self.castling_rights;
        let color = moved.color;

        // Actual motion.
        let _ = self.take(from);
        let captured_piece = self.take(to);
        let mut flags = MoveFlags {
            captured: captured_piece.is_some(),
            ..MoveFlags::default()
        };

        if moved.kind == PieceKind::Pawn && to.row() == color.promotion_row() {
            self.put(to, Piece::new(color, PieceKind::Queen));
            flags.promoted = true;
        } else {
            self.put(to, moved);
        }

        if moved.kind == PieceKind::King {
            self.king_squares[color.index()] = to;
            self.castling_rights &= !both_rights(color);

            if from.col().abs_diff(to.col()) == 2 {
                flags.castled = self.castle_rook(color, to);
            }
        }

        // Rook leaving (or being captured on) its corner, king leaving home.
        self.castling_rights &= !(rights_tied_to(from) | rights_tied_to(to));

        Ok(MoveRecord {
            from,
            to,
            moved_piece: moved,
            captured_piece,
            flags,
            prev_castling_rights,
        })
    }

    /// Exact inverse of [`apply`](Self::apply).
    ///
    /// `record` must be the most recent not-yet-undone record of this state.
    pub fn undo(&mut self, record: MoveRecord) {
        let color = record.moved_piece.color;

        let _ = self.take(record.to);
        if let Some(captured) = record.captured_piece {
            self.put(record.to, captured);
        }
        self.put(record.from, record.moved_piece);

        if record.moved_piece.kind == PieceKind::King {
            self.king_squares[color.index()] = record.from;

            if record.flags.castled {
                if let Some((rook_from, rook_to)) = castling_rook_squares(record.to) {
                    if let Some(rook) = self.take(rook_to) {
                        self.put(rook_from, rook);
                    }
                }
                self.castled[color.index()] = false;
            }
        }

        self.castling_rights = record.prev_castling_rights;
    }

    /// Relocate the castling rook for a king that just landed on `king_to`.
    /// Returns whether a rook was actually moved.
    fn castle_rook(&mut self, color: Color, king_to: Square) -> bool {
        let Some((rook_from, rook_to)) = castling_rook_squares(king_to) else {
            return false;
        };
        let rook = Piece::new(color, PieceKind::Rook);
        if self.piece_at(rook_from) != Some(rook) || !self.is_empty(rook_to) {
            return false;
        }
        let _ = self.take(rook_from);
        self.put(rook_to, rook);
        self.castled[color.index()] = true;
        true
    }
}
