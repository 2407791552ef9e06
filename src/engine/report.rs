//! Position report for game front ends.

use serde::Serialize;
use serde_json::Value;

use crate::board::{Color, LegalMoves, Position};

/// Everything a front end needs to render the game after a move: the new
/// FEN, whose turn it is, the legal moves as JSON, and the game-over
/// flags. Checkmate is check with no legal moves; a draw is either no
/// legal moves without check (stalemate) or the position's own draw test.
#[derive(Clone, Debug, Serialize)]
pub struct PositionReport {
    pub fen: String,
    pub last_move: String,
    pub turn: String,
    pub legal: Value,
    pub in_check: bool,
    pub in_checkmate: bool,
    pub in_draw: bool,
}

impl PositionReport {
    #[must_use]
    pub fn new(p: &Position, last_move: &str) -> Self {
        let legal_moves = LegalMoves::new(p);
        let in_check = p.is_active_color_in_check();
        let no_moves = legal_moves.is_empty();

        PositionReport {
            fen: p.to_fen(),
            last_move: last_move.to_string(),
            turn: match p.active_color() {
                Color::White => "w".to_string(),
                Color::Black => "b".to_string(),
            },
            legal: legal_moves.to_json(),
            in_check,
            in_checkmate: in_check && no_moves,
            in_draw: (!in_check && no_moves) || p.is_draw(),
        }
    }
}
