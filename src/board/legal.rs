//! Legal move set: pseudo-legal moves filtered by check.

use std::collections::BTreeMap;

use rand::Rng;
use serde_json::{Map, Value};

use super::movegen::possible_moves;
use super::types::{Color, Piece, PieceMove, PieceMoves, PieceOnSquare, Square, PROMOTION_PIECES};
use super::Position;

/// All legal moves in a position, keyed by the moving piece and its square.
///
/// Construction speculatively applies every pseudo-legal candidate to a
/// copy of the position and discards those that leave the mover in check.
/// A pawn move onto the last rank expands into the four promotion choices,
/// queen first.
#[derive(Clone, Debug)]
pub struct LegalMoves {
    legal_moves: BTreeMap<PieceOnSquare, Vec<PieceMove>>,
    active_color: Color,
}

impl LegalMoves {
    #[must_use]
    pub fn new(p: &Position) -> Self {
        let mut legal_moves = BTreeMap::new();
        for (piece_on_square, move_board) in possible_moves(p) {
            let mut targets = Vec::new();
            for move_square in move_board.iter() {
                // Try the move on a copy; the promotion choice can't affect
                // check, so the trial always promotes to a queen
                let mut trial = p.clone();
                if trial
                    .apply_move(piece_on_square.square, move_square, Some(Piece::Queen))
                    .is_err()
                {
                    continue;
                }
                if trial.is_active_color_in_check() {
                    continue;
                }
                if piece_on_square.can_promote() {
                    for promote_to in PROMOTION_PIECES {
                        targets.push(PieceMove::promoting(move_square, promote_to));
                    }
                } else {
                    targets.push(PieceMove::new(move_square));
                }
            }
            if p.active_color() == Color::Black {
                // Destination lists run from nearest to furthest square
                targets.reverse();
            }
            if !targets.is_empty() {
                legal_moves.insert(piece_on_square, targets);
            }
        }
        LegalMoves {
            legal_moves,
            active_color: p.active_color(),
        }
    }

    /// Number of pieces with at least one legal move
    #[must_use]
    pub fn len(&self) -> usize {
        self.legal_moves.len()
    }

    /// True when the side to move has no legal move at all (checkmate or
    /// stalemate, depending on check)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legal_moves.is_empty()
    }

    /// Iterate over the pieces and their legal moves in (piece, square)
    /// order
    pub fn iter(&self) -> impl Iterator<Item = (&PieceOnSquare, &Vec<PieceMove>)> {
        self.legal_moves.iter()
    }

    /// The legal moves of one piece, if it has any
    #[must_use]
    pub fn moves_of(&self, piece_on_square: PieceOnSquare) -> Option<&Vec<PieceMove>> {
        self.legal_moves.get(&piece_on_square)
    }

    /// All piece move lists, most valuable piece first; within a piece
    /// type, the piece furthest from its home rank first.
    #[must_use]
    pub fn sorted(&self) -> Vec<PieceMoves> {
        let mut sorted_legal_moves: Vec<PieceMoves> = self
            .legal_moves
            .iter()
            .map(|(piece_on_square, moves)| PieceMoves::new(*piece_on_square, moves.clone()))
            .collect();
        sorted_legal_moves.sort_by(|left, right| {
            right
                .piece_on_square
                .piece
                .cmp(&left.piece_on_square.piece)
                .then_with(|| match self.active_color {
                    Color::White => right.piece_on_square.square.cmp(&left.piece_on_square.square),
                    Color::Black => left.piece_on_square.square.cmp(&right.piece_on_square.square),
                })
        });
        sorted_legal_moves
    }

    /// Membership test, ignoring the promotion choice
    #[must_use]
    pub fn is_legal(&self, piece_on_square: PieceOnSquare, to_square: Square) -> bool {
        self.legal_moves
            .get(&piece_on_square)
            .is_some_and(|moves| moves.iter().any(|m| m.square == to_square))
    }

    /// A uniformly random piece, then a uniformly random move of that piece
    /// (not uniform over all moves). `None` when there are no legal moves.
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<PieceMoves> {
        if self.legal_moves.is_empty() {
            return None;
        }
        let piece_index = rng.gen_range(0..self.legal_moves.len());
        let (piece_on_square, moves) = self.legal_moves.iter().nth(piece_index)?;
        let move_index = rng.gen_range(0..moves.len());
        Some(PieceMoves::new(*piece_on_square, vec![moves[move_index]]))
    }

    /// JSON map from source square to the list of destinations, with
    /// promotion letters appended where they apply
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut legal = Map::new();
        for (piece_on_square, moves) in &self.legal_moves {
            let targets: Vec<Value> = moves
                .iter()
                .map(|m| Value::String(m.to_string()))
                .collect();
            legal.insert(piece_on_square.square.to_string(), Value::Array(targets));
        }
        Value::Object(legal)
    }
}
