//! Position state: bitboards plus the game-state scalars.

use super::types::{Bitboard, CastlingRight, Color, ColoredPiece, Piece, Square};

/// A chess position.
///
/// One bitboard per `ColoredPiece`, the side to move, castling rights,
/// the en-passant target, and the two move counters. Cloning is cheap
/// (twelve words plus a few scalars), which the legality filter and the
/// control evaluation rely on for speculative move trials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) bitboards: [Bitboard; 12],
    pub(crate) active_color: Color,
    pub(crate) castling: [bool; 4],
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    pub(crate) fn empty() -> Self {
        Position {
            bitboards: [Bitboard::EMPTY; 12],
            active_color: Color::White,
            castling: [false; 4],
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The side to move
    #[inline]
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Halfmoves since the last capture or pawn move
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Incremented after every Black move
    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The square a pawn would land on to capture en passant this move
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Whether the given castling right is still available
    #[inline]
    #[must_use]
    pub fn can_castle(&self, right: CastlingRight) -> bool {
        self.castling[right.index()]
    }

    /// The bitboard for one colored piece
    #[inline]
    #[must_use]
    pub fn bitboard(&self, piece: ColoredPiece) -> Bitboard {
        self.bitboards[piece.index()]
    }

    /// All squares occupied by the given color
    #[must_use]
    pub(crate) fn occupancy(&self, color: Color) -> u64 {
        ColoredPiece::for_color(color)
            .iter()
            .fold(0u64, |acc, piece| acc | self.bitboards[piece.index()].0)
    }

    /// The colored piece standing on a square, if any
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        ColoredPiece::ALL
            .into_iter()
            .find(|piece| self.bitboards[piece.index()].contains(square))
    }

    /// A copy of this placement with the other side to move.
    ///
    /// The en-passant target is cleared: it belongs to the side whose turn
    /// it really is. Used for check detection and control evaluation.
    #[must_use]
    pub fn for_opponent(&self) -> Position {
        let mut flipped = self.clone();
        flipped.active_color = self.active_color.opponent();
        flipped.en_passant_target = None;
        flipped
    }

    /// Fifty-move rule, or bare kings.
    ///
    /// Reports a draw when the halfmove clock reaches 100 or when no piece
    /// besides the two kings remains. Stalemate is not detected here; the
    /// caller derives it from an empty move set while not in check.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        if self.halfmove_clock >= 100 {
            return true;
        }
        ColoredPiece::ALL
            .into_iter()
            .all(|piece| piece.piece() == Piece::King || self.bitboards[piece.index()].is_empty())
    }
}
