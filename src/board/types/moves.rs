//! Move building blocks: a piece on its square, and where it may go.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::piece::{Color, ColoredPiece, Piece};
use super::square::Square;

/// A piece of one color standing on a particular square.
///
/// Ordered by (piece, square) so that map iteration is deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceOnSquare {
    pub piece: ColoredPiece,
    pub square: Square,
}

impl PieceOnSquare {
    #[inline]
    #[must_use]
    pub const fn new(piece: ColoredPiece, square: Square) -> Self {
        PieceOnSquare { piece, square }
    }

    /// True when any forward move of this pawn lands on the last rank
    #[inline]
    #[must_use]
    pub(crate) fn can_promote(self) -> bool {
        if self.piece.piece() != Piece::Pawn {
            return false;
        }
        match self.piece.color() {
            Color::White => self.square.rank() == 6,
            Color::Black => self.square.rank() == 1,
        }
    }
}

impl fmt::Display for PieceOnSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.piece, self.square)
    }
}

/// A destination square, together with a promotion choice for pawn moves
/// that reach the last rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceMove {
    pub square: Square,
    pub promotion: Option<Piece>,
}

impl PieceMove {
    #[inline]
    #[must_use]
    pub const fn new(square: Square) -> Self {
        PieceMove {
            square,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn promoting(square: Square, piece: Piece) -> Self {
        PieceMove {
            square,
            promotion: Some(piece),
        }
    }
}

impl fmt::Display for PieceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.square)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

/// A piece and the ordered list of moves it may make.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceMoves {
    pub piece_on_square: PieceOnSquare,
    pub moves: Vec<PieceMove>,
}

impl PieceMoves {
    #[inline]
    #[must_use]
    pub fn new(piece_on_square: PieceOnSquare, moves: Vec<PieceMove>) -> Self {
        PieceMoves {
            piece_on_square,
            moves,
        }
    }
}
