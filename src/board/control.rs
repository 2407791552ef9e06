//! Square-control evaluation.
//!
//! For every square, decide which side controls it and with what minimum
//! piece value. "Defenders" are active-side pieces whose pseudo-legal
//! moves cover the square, "attackers" the opponent's. Because pieces only
//! generate capture moves onto squares that actually hold a target, empty
//! squares are probed by placing a hypothetical pawn there and regenerating
//! the other side's moves.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::movegen::possible_moves;
use super::types::{Bitboard, ColoredPiece, Piece, PieceMove, PieceMoves, PieceOnSquare, Square};
use super::Position;

/// Who holds a square, and how cheaply.
///
/// `safe_piece` is the value of the most valuable friendly piece that can
/// stand on the square without being lost; `safe_move` the most valuable
/// piece that can move there this turn. Both are negative when the
/// opponent holds the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlValues {
    pub safe_piece: i32,
    pub safe_move: i32,
}

/// Control evaluation of a whole position, from the active side's
/// perspective. Squares touched by neither side have no entry.
pub struct ControlSquares {
    position: Position,
    control_squares: BTreeMap<Square, ControlValues>,
}

impl ControlSquares {
    #[must_use]
    pub fn new(p: &Position) -> Self {
        let active_moves = possible_moves(p);
        let opponent_moves = possible_moves(&p.for_opponent());

        let active_pieces = p.occupancy(p.active_color());
        let opponent_pieces = p.occupancy(p.active_color().opponent());

        let active_pawn = ColoredPiece::new(p.active_color(), Piece::Pawn);
        let opponent_pawn = ColoredPiece::new(p.active_color().opponent(), Piece::Pawn);

        let mut control_squares = BTreeMap::new();

        for square_index in 0..64 {
            let square = Square::from_index(square_index);
            let mask = square.mask();

            // No active piece here: give the opponent a target to attack,
            // removing whatever of theirs occupies the square
            let rebuilt_opponent_moves = (mask & active_pieces == 0).then(|| {
                let mut probe = p.clone();
                probe.bitboards[active_pawn.index()].0 |= mask;
                for piece in ColoredPiece::for_color(p.active_color().opponent()) {
                    probe.bitboards[piece.index()].0 &= !mask;
                }
                possible_moves(&probe.for_opponent())
            });
            let opponent_view = rebuilt_opponent_moves.as_ref().unwrap_or(&opponent_moves);

            // Symmetrically, give the active side a target
            let rebuilt_active_moves = (mask & opponent_pieces == 0).then(|| {
                let mut probe = p.clone();
                probe.bitboards[opponent_pawn.index()].0 |= mask;
                for piece in ColoredPiece::for_color(p.active_color()) {
                    probe.bitboards[piece.index()].0 &= !mask;
                }
                possible_moves(&probe)
            });
            let active_view = rebuilt_active_moves.as_ref().unwrap_or(&active_moves);

            let (defenders, min_defender_value) = count_coverage(active_view, mask);
            let (attackers, min_attacker_value) = count_coverage(opponent_view, mask);

            if attackers == 0 && defenders == 0 {
                continue;
            }

            let defended = defenders >= attackers;
            let mut safe_piece = if defended {
                min_attacker_value
            } else {
                -min_defender_value
            };
            if !defended && min_defender_value < min_attacker_value {
                // The cheapest defender survives the exchange
                safe_piece = min_defender_value;
            }

            let can_move = defenders > attackers;
            let mut safe_move = if can_move {
                min_attacker_value
            } else {
                -min_defender_value
            };
            if !can_move && defenders == attackers && min_defender_value != Piece::Pawn.value() {
                // Even coverage: a pawn may still step in safely
                safe_move = Piece::Pawn.value();
            }

            control_squares.insert(
                square,
                ControlValues {
                    safe_piece,
                    safe_move,
                },
            );
        }

        ControlSquares {
            position: p.clone(),
            control_squares,
        }
    }

    /// The control entry for a square, if either side touches it
    #[must_use]
    pub fn values(&self, square: Square) -> Option<ControlValues> {
        self.control_squares.get(&square).copied()
    }

    /// How valuable a piece may move onto the square; uncontested squares
    /// accept anything
    fn move_control(&self, square: Square) -> i32 {
        self.control_squares
            .get(&square)
            .map_or(Piece::King.value(), |control| control.safe_move)
    }

    /// Whether the piece may enter the square without losing material
    #[must_use]
    pub fn is_safe_to_move(&self, piece: ColoredPiece, square: Square) -> bool {
        self.move_control(square) >= piece.value()
    }

    /// Whether the piece stands on a square it would be lost on
    #[must_use]
    pub fn is_piece_attacked(&self, piece_on_square: PieceOnSquare) -> bool {
        self.control_squares
            .get(&piece_on_square.square)
            .is_some_and(|control| control.safe_piece < piece_on_square.piece.value())
    }

    /// The value of the opponent piece on a square, or 0 when it is empty
    fn opponent_piece_value(&self, square: Square) -> i32 {
        let mask = square.mask();
        ColoredPiece::for_color(self.position.active_color().opponent())
            .into_iter()
            .find(|piece| self.position.bitboards[piece.index()].0 & mask != 0)
            .map_or(0, ColoredPiece::value)
    }

    /// Among the destinations this piece may keep, the one with the most
    /// room above its value; `None` when no destination is safe
    #[must_use]
    pub fn safest_move(&self, piece: ColoredPiece, moves: &[PieceMove]) -> Option<PieceMove> {
        let mut max_control = -1;
        let mut max_control_square = None;
        for &candidate in moves {
            let control = self.move_control(candidate.square);
            if control >= piece.value() && control > max_control {
                max_control = control;
                max_control_square = Some(candidate);
            }
        }
        max_control_square
    }

    /// The destination holding the most valuable opponent piece, provided
    /// the capture is an up-trade or the square is safe to enter
    #[must_use]
    pub fn best_take(&self, piece: ColoredPiece, moves: &[PieceMove]) -> Option<PieceMove> {
        let mut max_value = 0;
        let mut max_value_square = None;
        let mut max_value_square_control = -1;
        for &candidate in moves {
            let value = self.opponent_piece_value(candidate.square);
            if value > max_value {
                max_value = value;
                max_value_square = Some(candidate);
                max_value_square_control = self.move_control(candidate.square);
            }
        }
        if max_value >= piece.value() || max_value_square_control >= piece.value() {
            max_value_square
        } else {
            None
        }
    }

    /// The destination holding the most valuable opponent piece, ignoring
    /// safety; `None` when no capture is available
    #[must_use]
    pub fn best_sack(&self, moves: &[PieceMove]) -> Option<PieceMove> {
        let mut max_value = 0;
        let mut max_value_square = None;
        for &candidate in moves {
            let value = self.opponent_piece_value(candidate.square);
            if value > max_value {
                max_value = value;
                max_value_square = Some(candidate);
            }
        }
        max_value_square
    }

    /// The first destination, in the given order, that wins material:
    /// either a strictly more valuable victim, or any victim on a square
    /// this piece can safely enter
    #[must_use]
    pub fn first_hanging(&self, piece: ColoredPiece, moves: &[PieceMove]) -> Option<PieceMove> {
        moves.iter().copied().find(|candidate| {
            let value = self.opponent_piece_value(candidate.square);
            value > piece.value()
                || (value > 0 && self.move_control(candidate.square) >= piece.value())
        })
    }

    /// All destinations holding an opponent piece of exactly the moving
    /// piece's value
    #[must_use]
    pub fn trades(&self, piece_on_square: PieceOnSquare, moves: &[PieceMove]) -> PieceMoves {
        let trades = moves
            .iter()
            .copied()
            .filter(|candidate| {
                self.opponent_piece_value(candidate.square) == piece_on_square.piece.value()
            })
            .collect();
        PieceMoves::new(piece_on_square, trades)
    }

    /// JSON map from algebraic square to its `safe_piece` value
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut control = Map::new();
        for (square, values) in &self.control_squares {
            control.insert(square.to_string(), Value::from(values.safe_piece));
        }
        Value::Object(control)
    }
}

/// Count the pieces in a move map covering `mask`, and the cheapest of
/// them; the minimum defaults to the king's value when nothing covers the
/// square.
fn count_coverage(
    moves: &BTreeMap<PieceOnSquare, Bitboard>,
    mask: u64,
) -> (i32, i32) {
    let mut count = 0;
    let mut min_value = Piece::King.value();
    for (piece_on_square, move_board) in moves {
        if move_board.0 & mask != 0 {
            count += 1;
            min_value = min_value.min(piece_on_square.piece.value());
        }
    }
    (count, min_value)
}
