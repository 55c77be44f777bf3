//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! Scores are in hundredths of a pawn and always from Light's point of view.

use crate::chess_errors::EngineResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;

pub type Score = i32;

pub trait BoardScorer: Send + Sync {
    /// Static score of the position, positive when Light is better.
    ///
    /// Takes the state mutably because some terms need legal move generation;
    /// the state is unchanged on return.
    fn score(&self, game_state: &mut GameState) -> EngineResult<Score>;
}

pub const MOBILITY_WEIGHT: Score = 10;
pub const CASTLING_RIGHTS_BONUS: Score = 100;
pub const CASTLED_BONUS: Score = 300;

#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        // Both kings are always on the board, so they never move the balance.
        PieceKind::King => 0,
    }
}

#[inline]
fn signed(color: Color, value: Score) -> Score {
    match color {
        Color::Light => value,
        Color::Dark => -value,
    }
}

type SquareTable = [[Score; 8]; 8];

// Tables are written from Light's side: row 0 is the far rank, row 7 home.
const PAWN_TABLE: SquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, -50, -50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [0, 0, 10, 40, 40, 10, 0, 0],
    [0, 0, 10, 40, 40, 10, 0, 0],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [50, 50, 50, -50, -50, 50, 50, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: SquareTable = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_TABLE: SquareTable = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: SquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const QUEEN_TABLE: SquareTable = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

// Middle-game king safety.
const KING_TABLE: SquareTable = [
    [-60, -80, -80, -100, -100, -80, -80, -60],
    [-60, -80, -80, -100, -100, -80, -80, -60],
    [-60, -80, -80, -100, -100, -80, -80, -60],
    [-60, -80, -80, -100, -100, -80, -80, -60],
    [-40, -60, -60, -80, -80, -60, -60, -40],
    [-20, -40, -40, -40, -40, -40, -40, -20],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [40, 40, 20, 0, 0, 20, 40, 40],
];

#[inline]
fn square_table(kind: PieceKind) -> &'static SquareTable {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Square bonus for `piece` on `square`; Dark reads the table mirrored.
#[inline]
pub fn square_bonus(piece: Piece, square: Square) -> Score {
    let row = match piece.color {
        Color::Light => square.row(),
        Color::Dark => 7 - square.row(),
    };
    square_table(piece.kind)[row as usize][square.col() as usize]
}

pub fn material_score(game_state: &GameState) -> Score {
    game_state
        .pieces()
        .map(|(_, piece)| signed(piece.color, piece_value(piece.kind)))
        .sum()
}

pub fn positional_score(game_state: &GameState) -> Score {
    game_state
        .pieces()
        .map(|(square, piece)| signed(piece.color, square_bonus(piece, square)))
        .sum()
}

/// Legal-move count difference; runs full generation for both colors.
pub fn mobility_score(game_state: &mut GameState) -> EngineResult<Score> {
    let light = legal_moves(game_state, Color::Light)?.len() as Score;
    let dark = legal_moves(game_state, Color::Dark)?.len() as Score;
    Ok(MOBILITY_WEIGHT * (light - dark))
}

pub fn castling_score(game_state: &GameState) -> Score {
    [Color::Light, Color::Dark]
        .into_iter()
        .map(|color| {
            let mut bonus = 0;
            if game_state.has_castling_right(both_rights(color)) {
                bonus += CASTLING_RIGHTS_BONUS;
            }
            if game_state.has_castled(color) {
                bonus += CASTLED_BONUS;
            }
            signed(color, bonus)
        })
        .sum()
}

/// Material, square tables, mobility and castling incentive.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl BoardScorer for StandardScorer {
    fn score(&self, game_state: &mut GameState) -> EngineResult<Score> {
        Ok(material_score(game_state)
            + positional_score(game_state)
            + mobility_score(game_state)?
            + castling_score(game_state))
    }
}

/// Material balance only; cheap enough for deep tests and benches.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &mut GameState) -> EngineResult<Score> {
        Ok(material_score(game_state))
    }
}
