//! Move application.
//!
//! Moves arrive as UCI strings (two algebraic squares plus an optional
//! promotion letter). Application rewrites the position in place: capture,
//! en passant, promotion, the castling rook jump, castling-right upkeep,
//! and the move counters. Legality is not checked here - illegal shapes
//! are filtered out at the `LegalMoves` layer before they ever reach this
//! code.

use log::warn;

use super::error::MoveError;
use super::types::{CastlingRight, Color, ColoredPiece, Piece, Square};
use super::Position;

impl Position {
    /// Parse a UCI move string ("e2e4", "g7g8q"), apply it, and flip the
    /// side to move.
    ///
    /// An unknown promotion letter degrades to "no promotion". Returns an
    /// error, leaving the position untouched, when the string is malformed
    /// or no piece of the active color stands on the source square.
    pub fn apply_uci_move(&mut self, uci: &str) -> Result<(), MoveError> {
        if !uci.is_ascii() || uci.len() < 4 {
            return Err(MoveError::InvalidLength { len: uci.chars().count() });
        }

        let parse = |notation: &str| {
            notation
                .parse::<Square>()
                .map_err(|_| MoveError::InvalidSquare {
                    notation: uci.to_string(),
                })
        };
        let from_square = parse(&uci[0..2])?;
        let to_square = parse(&uci[2..4])?;

        let promote_to = uci
            .chars()
            .nth(4)
            .and_then(Piece::from_promotion_char);

        self.apply_move(from_square, to_square, promote_to)?;
        self.active_color = self.active_color.opponent();
        Ok(())
    }

    /// Apply a move without changing the side to move.
    ///
    /// The legality filter calls this on trial copies; `apply_uci_move`
    /// wraps it for real moves.
    pub(crate) fn apply_move(
        &mut self,
        from_square: Square,
        to_square: Square,
        promote_to: Option<Piece>,
    ) -> Result<(), MoveError> {
        let from_mask = from_square.mask();
        let to_mask = to_square.mask();

        // Find which piece moved
        let Some(piece) = ColoredPiece::for_color(self.active_color)
            .into_iter()
            .find(|piece| self.bitboards[piece.index()].0 & from_mask != 0)
        else {
            warn!(
                "failed to find a piece for {} on square {from_square}",
                self.active_color
            );
            return Err(MoveError::NoPieceToMove {
                color: self.active_color,
                square: from_square,
            });
        };
        self.halfmove_clock += 1;

        // Capture any opponent piece on the target square
        let opponent = self.active_color.opponent();
        if let Some(captured) = ColoredPiece::for_color(opponent)
            .into_iter()
            .find(|piece| self.bitboards[piece.index()].0 & to_mask != 0)
        {
            self.bitboards[captured.index()].0 &= !to_mask;
            self.halfmove_clock = 0;
            // A rook captured on its home square takes the castling right
            // with it
            match (captured, to_square.as_index()) {
                (ColoredPiece::WhiteRook, 7) => self.clear_castling(CastlingRight::WhiteShort),
                (ColoredPiece::WhiteRook, 0) => self.clear_castling(CastlingRight::WhiteLong),
                (ColoredPiece::BlackRook, 63) => self.clear_castling(CastlingRight::BlackShort),
                (ColoredPiece::BlackRook, 56) => self.clear_castling(CastlingRight::BlackLong),
                _ => {}
            }
        }

        // En passant capture removes the pawn behind the target square
        if piece.piece() == Piece::Pawn && self.en_passant_target == Some(to_square) {
            let captured_square = match self.active_color {
                Color::White => to_square.as_index() - 8,
                Color::Black => to_square.as_index() + 8,
            };
            let victim = ColoredPiece::new(opponent, Piece::Pawn);
            self.bitboards[victim.index()].0 &= !(1u64 << captured_square);
            self.halfmove_clock = 0;
        }
        self.en_passant_target = None;

        // Remove the from square from the piece's board
        self.bitboards[piece.index()].0 &= !from_mask;

        // Place the piece (or its promotion) on the target square
        let last_rank = to_square.as_index() >= 56 || to_square.as_index() <= 7;
        if piece.piece() == Piece::Pawn && last_rank {
            let placed = match promote_to {
                Some(promotion) => ColoredPiece::new(self.active_color, promotion),
                None => piece,
            };
            self.bitboards[placed.index()].0 |= to_mask;
        } else {
            self.bitboards[piece.index()].0 |= to_mask;
        }

        // A king moving two files is castling: the rook jumps to the square
        // between origin and destination
        if piece.piece() == Piece::King && from_square.as_index().abs_diff(to_square.as_index()) == 2
        {
            let rook = ColoredPiece::new(self.active_color, Piece::Rook);
            let rook_from = if to_square < from_square {
                from_square.as_index() - 4 // O-O-O
            } else {
                from_square.as_index() + 3 // O-O
            };
            let rook_to = (from_square.as_index() + to_square.as_index()) / 2;
            self.bitboards[rook.index()].0 &= !(1u64 << rook_from);
            self.bitboards[rook.index()].0 |= 1u64 << rook_to;
        }

        // Update castling availability, en passant, and the halfmove clock
        match piece {
            ColoredPiece::WhitePawn => {
                self.halfmove_clock = 0;
                if to_square.as_index() == from_square.as_index() + 16 {
                    self.en_passant_target = Some(Square::from_index(from_square.as_index() + 8));
                }
            }
            ColoredPiece::BlackPawn => {
                self.halfmove_clock = 0;
                if to_square.as_index() + 16 == from_square.as_index() {
                    self.en_passant_target = Some(Square::from_index(from_square.as_index() - 8));
                }
            }
            ColoredPiece::WhiteRook => {
                if from_square.as_index() == 0 {
                    self.clear_castling(CastlingRight::WhiteLong);
                } else if from_square.as_index() == 7 {
                    self.clear_castling(CastlingRight::WhiteShort);
                }
            }
            ColoredPiece::BlackRook => {
                if from_square.as_index() == 56 {
                    self.clear_castling(CastlingRight::BlackLong);
                } else if from_square.as_index() == 63 {
                    self.clear_castling(CastlingRight::BlackShort);
                }
            }
            ColoredPiece::WhiteKing => {
                self.clear_castling(CastlingRight::WhiteShort);
                self.clear_castling(CastlingRight::WhiteLong);
            }
            ColoredPiece::BlackKing => {
                self.clear_castling(CastlingRight::BlackShort);
                self.clear_castling(CastlingRight::BlackLong);
            }
            _ => {}
        }

        if self.active_color == Color::Black {
            self.fullmove_number += 1;
        }

        Ok(())
    }

    fn clear_castling(&mut self, right: CastlingRight) {
        self.castling[right.index()] = false;
    }
}
