//! FEN-to-GameState parser.
//!
//! Builds a position from a Forsyth-Edwards Notation string. Placement, side
//! to move and castling are required. En-passant and the two clocks are
//! accepted for compatibility and ignored, since the engine tracks neither.

use crate::chess_errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> EngineResult<(GameState, Color)> {
    let invalid = |reason: &str| EngineError::InvalidFen(format!("{reason}: {fen}"));
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;

    if parts.by_ref().take(3).count() == 3 && parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;

    for color in [Color::Light, Color::Dark] {
        let king = Piece::new(color, PieceKind::King);
        if game_state.piece_at(game_state.king_square(color)) != Some(king) {
            return Err(invalid("each side needs exactly one king"));
        }
    }

    let side_to_move = parse_side_to_move(side_part)?;
    game_state.set_castling_rights(parse_castling_rights(castling_part)?);

    Ok((game_state, side_to_move))
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> EngineResult<()> {
    let invalid = |reason: String| EngineError::InvalidFen(reason);

    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks".to_owned()));
    }

    // FEN lists rank 8 first, which is row 0 of the mailbox.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            let square = Square::new(row as u8, col)
                .map_err(|_| invalid(format!("rank {} has too many files", 8 - row)))?;
            game_state
                .place(square, piece)
                .map_err(|err| invalid(err.to_string()))?;
            col += 1;
        }

        if col != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> EngineResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(EngineError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> EngineResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => {
                return Err(EngineError::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}
