//! Scripted opening and development moves.
//!
//! Each entry is a piece on its expected square and the destinations it
//! should try, in preference order. The policy plays the first entry that
//! is both legal and safe.

use once_cell::sync::Lazy;

use crate::board::{Color, ColoredPiece, Piece, PieceOnSquare, Square};

pub(super) type PresetMoves = Vec<(PieceOnSquare, Vec<Square>)>;

fn parse_preset(entries: &[(Piece, &str, &[&str])], color: Color) -> PresetMoves {
    entries
        .iter()
        .map(|(piece, from, tos)| {
            let piece_on_square = PieceOnSquare::new(
                ColoredPiece::new(color, *piece),
                from.parse().expect("preset square notation"),
            );
            let targets = tos
                .iter()
                .map(|to| to.parse().expect("preset square notation"))
                .collect();
            (piece_on_square, targets)
        })
        .collect()
}

static INITIAL_MOVES_WHITE: Lazy<PresetMoves> = Lazy::new(|| {
    parse_preset(
        &[
            (Piece::Pawn, "e2", &["e4"]),
            (Piece::Pawn, "d2", &["d4"]),
        ],
        Color::White,
    )
});

static INITIAL_MOVES_BLACK: Lazy<PresetMoves> = Lazy::new(|| {
    parse_preset(
        &[
            (Piece::Pawn, "e7", &["e5"]),
            (Piece::Pawn, "d7", &["d5"]),
        ],
        Color::Black,
    )
});

static DEVELOPING_MOVES_WHITE: Lazy<PresetMoves> = Lazy::new(|| {
    parse_preset(
        &[
            (Piece::King, "e1", &["g1", "c1"]),
            (Piece::Knight, "g1", &["f3", "e2"]),
            (Piece::Knight, "b1", &["c3", "d2"]),
            (Piece::Bishop, "f1", &["c4", "d3", "e2", "b5"]),
            (Piece::Pawn, "d2", &["d3", "d4"]),
            (Piece::Rook, "f1", &["e1"]),
            (Piece::Bishop, "c1", &["f4", "e3", "d2", "g5"]),
            (Piece::Pawn, "e2", &["e4", "e3"]),
            (Piece::Queen, "d1", &["d2", "e2"]),
            (Piece::Rook, "a1", &["d1", "c1"]),
            (Piece::Pawn, "h2", &["h3"]),
        ],
        Color::White,
    )
});

static DEVELOPING_MOVES_BLACK: Lazy<PresetMoves> = Lazy::new(|| {
    parse_preset(
        &[
            (Piece::King, "e8", &["g8", "c8"]),
            (Piece::Knight, "b8", &["c6", "d7"]),
            (Piece::Knight, "g8", &["f6", "e7"]),
            (Piece::Bishop, "f8", &["c5", "d6", "e7", "b4"]),
            (Piece::Pawn, "d7", &["d6", "d5"]),
            (Piece::Rook, "f8", &["e8"]),
            (Piece::Bishop, "c8", &["f5", "e6", "d7", "g4"]),
            (Piece::Pawn, "e7", &["e5", "e6"]),
            (Piece::Queen, "d8", &["d7", "e7"]),
            (Piece::Rook, "a8", &["d8", "c8"]),
            (Piece::Pawn, "h7", &["h6"]),
        ],
        Color::Black,
    )
});

/// Preferred first pawn moves (1.e4 over 1.d4)
pub(super) fn initial_moves(color: Color) -> &'static PresetMoves {
    match color {
        Color::White => &INITIAL_MOVES_WHITE,
        Color::Black => &INITIAL_MOVES_BLACK,
    }
}

/// Castling, minor-piece deployment, and connecting moves
pub(super) fn developing_moves(color: Color) -> &'static PresetMoves {
    match color {
        Color::White => &DEVELOPING_MOVES_WHITE,
        Color::Black => &DEVELOPING_MOVES_BLACK,
    }
}
