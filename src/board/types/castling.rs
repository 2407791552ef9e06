//! Castling rights.

use super::piece::Color;

/// The four castling rights, in the order they index `Position::castling`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CastlingRight {
    WhiteShort,
    WhiteLong,
    BlackShort,
    BlackLong,
}

impl CastlingRight {
    pub const ALL: [CastlingRight; 4] = [
        CastlingRight::WhiteShort,
        CastlingRight::WhiteLong,
        CastlingRight::BlackShort,
        CastlingRight::BlackLong,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kingside right for the given color
    #[inline]
    #[must_use]
    pub const fn short(color: Color) -> CastlingRight {
        match color {
            Color::White => CastlingRight::WhiteShort,
            Color::Black => CastlingRight::BlackShort,
        }
    }

    /// Queenside right for the given color
    #[inline]
    #[must_use]
    pub const fn long(color: Color) -> CastlingRight {
        match color {
            Color::White => CastlingRight::WhiteLong,
            Color::Black => CastlingRight::BlackLong,
        }
    }

    /// The FEN castling-field character (`K`, `Q`, `k`, `q`)
    #[inline]
    #[must_use]
    pub const fn to_fen_char(self) -> char {
        match self {
            CastlingRight::WhiteShort => 'K',
            CastlingRight::WhiteLong => 'Q',
            CastlingRight::BlackShort => 'k',
            CastlingRight::BlackLong => 'q',
        }
    }

    /// Parse a FEN castling-field character
    #[must_use]
    pub const fn from_fen_char(c: char) -> Option<CastlingRight> {
        match c {
            'K' => Some(CastlingRight::WhiteShort),
            'Q' => Some(CastlingRight::WhiteLong),
            'k' => Some(CastlingRight::BlackShort),
            'q' => Some(CastlingRight::BlackLong),
            _ => None,
        }
    }
}
