//! Pseudo-legal move generation.
//!
//! `possible_moves` maps every piece of the active color that can go
//! anywhere to a bitboard of its destinations. The moves obey piece
//! movement rules but are not yet filtered for leaving the own king in
//! check; that happens in the `LegalMoves` layer.

mod kings;
mod knights;
mod pawns;
mod sliders;

use std::collections::BTreeMap;

use super::types::{Bitboard, ColoredPiece, Piece, PieceOnSquare};
use super::Position;

// TIP: to view bitboards, see https://tearth.dev/bitboard-viewer/ (Layout 1)

pub(crate) const FILE_A: u64 = 0x0101010101010101;
pub(crate) const RANK_1: u64 = 0xff;
pub(crate) const AB_FILES: u64 = FILE_A | (FILE_A << 1);
pub(crate) const GH_FILES: u64 = (FILE_A << 7) | (FILE_A << 6);
pub(crate) const RANK_12: u64 = RANK_1 | (RANK_1 << 8);
pub(crate) const RANK_78: u64 = (RANK_1 << 56) | (RANK_1 << 48);

/// Determine the possible moves for the active color in the position.
///
/// Keys are the active color's pieces and their current squares, values are
/// bitboards of all destinations for the piece on that square. Pieces with
/// no destinations are absent. `BTreeMap` keeps iteration in
/// (piece, square) order, which the policy depends on.
pub(crate) fn possible_moves(p: &Position) -> BTreeMap<PieceOnSquare, Bitboard> {
    let mut moves = BTreeMap::new();

    let active_pieces = p.occupancy(p.active_color);
    let opponent_pieces = p.occupancy(p.active_color.opponent());
    let all_pieces = active_pieces | opponent_pieces;
    let open_squares = !all_pieces;

    // Pawns may capture opponent pieces and the en-passant target square
    let mut pawn_attack = opponent_pieces;
    if let Some(target) = p.en_passant_target {
        pawn_attack |= target.mask();
    }

    for piece in ColoredPiece::for_color(p.active_color) {
        for square in p.bitboards[piece.index()].iter() {
            let move_board = match piece.piece() {
                Piece::Pawn => pawns::pawn_moves(piece.color(), square, open_squares, pawn_attack),
                Piece::Knight => knights::knight_moves(square, active_pieces),
                Piece::Bishop => sliders::diagonal_moves(square, active_pieces, opponent_pieces),
                Piece::Rook => sliders::orthogonal_moves(square, active_pieces, opponent_pieces),
                Piece::Queen => {
                    sliders::orthogonal_moves(square, active_pieces, opponent_pieces)
                        | sliders::diagonal_moves(square, active_pieces, opponent_pieces)
                }
                Piece::King => kings::king_moves(p, piece, square, active_pieces, all_pieces),
            };
            if move_board != 0 {
                moves.insert(PieceOnSquare::new(piece, square), Bitboard(move_board));
            }
        }
    }
    moves
}

impl Position {
    /// Whether the side to move is currently in check.
    ///
    /// Computed by generating the opponent's pseudo-legal moves from the
    /// same placement and testing whether any destination hits the active
    /// king.
    #[must_use]
    pub fn is_active_color_in_check(&self) -> bool {
        let king = ColoredPiece::new(self.active_color, Piece::King);
        let king_board = self.bitboards[king.index()];
        possible_moves(&self.for_opponent())
            .values()
            .any(|move_board| move_board.intersects(king_board))
    }
}
