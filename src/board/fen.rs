//! FEN parsing and emission.

use std::str::FromStr;

use super::error::FenError;
use super::types::{CastlingRight, Color, ColoredPiece, Square};
use super::Position;

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The placement, side-to-move, castling, and en-passant fields are
    /// required; the halfmove clock and fullmove number are optional and
    /// default to 0 and 1. Structural correctness is all that is checked:
    /// the position is trusted to be reachable from a legal game start.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let fields: Vec<&str> = fen.split_whitespace().collect();

        if fields.len() < 4 {
            return Err(FenError::TooFewFields {
                found: fields.len(),
            });
        }

        // Piece placement, rank 8 first
        for (rank_idx, rank_str) in fields[0].split('/').enumerate().take(8) {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit as usize;
                } else {
                    let piece =
                        ColoredPiece::from_fen_char(c).ok_or(FenError::InvalidPiece { piece: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles { rank: 8 - rank_idx });
                    }
                    let square = Square::new(7 - rank_idx, file);
                    position.bitboards[piece.index()].0 |= square.mask();
                    file += 1;
                }
            }
        }

        // Side to move
        position.active_color = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Castling rights
        for c in fields[2].chars() {
            match CastlingRight::from_fen_char(c) {
                Some(right) => position.castling[right.index()] = true,
                None if c == '-' => {}
                None => return Err(FenError::InvalidCastling { castling: c }),
            }
        }

        // En passant target
        position.en_passant_target = if fields[3] == "-" {
            None
        } else {
            let square = fields[3]
                .parse::<Square>()
                .map_err(|_| FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                })?;
            Some(square)
        };

        // Optional move counters
        if let Some(halfmove) = fields.get(4) {
            position.halfmove_clock = halfmove.parse().unwrap_or(0);
        }
        if let Some(fullmove) = fields.get(5) {
            position.fullmove_number = fullmove.parse().unwrap_or(1);
        }

        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Emit the position as FEN notation.
    ///
    /// Round-trips byte-identically through `try_from_fen` for any FEN this
    /// engine produced.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty_files = 0;
            for file in 0..8 {
                if let Some(piece) = self.piece_at(Square::new(rank, file)) {
                    if empty_files > 0 {
                        row.push_str(&empty_files.to_string());
                        empty_files = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty_files += 1;
                }
            }
            if empty_files > 0 {
                row.push_str(&empty_files.to_string());
            }
            rows.push(row);
        }

        let active = match self.active_color {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for right in CastlingRight::ALL {
            if self.castling[right.index()] {
                castling.push(right.to_fen_char());
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |square| square.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
