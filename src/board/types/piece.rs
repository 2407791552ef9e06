//! Piece, color, and colored-piece types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// Parse a promotion letter from a UCI move string.
    ///
    /// Accepts `n`, `b`, `r`, `q` in either case; anything else means
    /// "no promotion".
    #[must_use]
    pub fn from_promotion_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Material value on the evaluation scale used throughout the policy.
    ///
    /// Pawn=1, Knight=3, Bishop=3, Rook=5, Queen=9, King=10.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Pawn => 1,
            Piece::Knight => 3,
            Piece::Bishop => 3,
            Piece::Rook => 5,
            Piece::Queen => 9,
            Piece::King => 10,
        }
    }
}

/// Promotion piece choices in order of preference (queen first)
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// FEN piece letters in `ColoredPiece` index order.
const FEN_PIECES: [char; 12] =
    ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'];

/// The twelve (color, piece) combinations, in bitboard index order.
///
/// White occupies indices 0..6, Black mirrors at 6..12, so
/// `index() % 6` recovers the piece and `index() / 6` the color.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum ColoredPiece {
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

impl ColoredPiece {
    /// All colored pieces in index order
    pub const ALL: [ColoredPiece; 12] = [
        ColoredPiece::WhitePawn,
        ColoredPiece::WhiteKnight,
        ColoredPiece::WhiteBishop,
        ColoredPiece::WhiteRook,
        ColoredPiece::WhiteQueen,
        ColoredPiece::WhiteKing,
        ColoredPiece::BlackPawn,
        ColoredPiece::BlackKnight,
        ColoredPiece::BlackBishop,
        ColoredPiece::BlackRook,
        ColoredPiece::BlackQueen,
        ColoredPiece::BlackKing,
    ];

    /// Pair a color with a piece type
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> ColoredPiece {
        let offset = match color {
            Color::White => 0,
            Color::Black => 6,
        };
        ColoredPiece::ALL[offset + piece.index()]
    }

    /// The six pieces of one color, in index order
    #[inline]
    #[must_use]
    pub const fn for_color(color: Color) -> [ColoredPiece; 6] {
        match color {
            Color::White => [
                ColoredPiece::WhitePawn,
                ColoredPiece::WhiteKnight,
                ColoredPiece::WhiteBishop,
                ColoredPiece::WhiteRook,
                ColoredPiece::WhiteQueen,
                ColoredPiece::WhiteKing,
            ],
            Color::Black => [
                ColoredPiece::BlackPawn,
                ColoredPiece::BlackKnight,
                ColoredPiece::BlackBishop,
                ColoredPiece::BlackRook,
                ColoredPiece::BlackQueen,
                ColoredPiece::BlackKing,
            ],
        }
    }

    /// Bitboard index (0-11)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        if self.index() < 6 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        Piece::ALL[self.index() % 6]
    }

    /// Material value of the underlying piece type
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        self.piece().value()
    }

    /// Parse a FEN placement character (uppercase = White)
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<ColoredPiece> {
        FEN_PIECES
            .iter()
            .position(|&fen| fen == c)
            .map(|i| ColoredPiece::ALL[i])
    }

    /// The FEN placement character (uppercase for White)
    #[inline]
    #[must_use]
    pub const fn to_fen_char(self) -> char {
        FEN_PIECES[self.index()]
    }
}

impl fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}
