use crate::game_state::chess_types::*;

/// Side effects observed while applying a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub captured: bool,
    pub promoted: bool,
    pub castled: bool,
    /// Reserved; `apply` never sets it.
    pub check: bool,
}

/// Single undo record returned by [`GameState::apply`].
///
/// A record is consumed by [`GameState::undo`] exactly once, in strict
/// last-applied-first-undone order, which is why it does not implement `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub flags: MoveFlags,
    pub prev_castling_rights: CastlingRights,
}

impl MoveRecord {
    /// The candidate move this record was produced from.
    #[inline]
    pub fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
            piece: self.moved_piece,
            captured: self.captured_piece,
        }
    }
}
