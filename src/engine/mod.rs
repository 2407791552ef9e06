//! The move-selection policy.
//!
//! No search tree: the engine picks a move by running a fixed rule ladder
//! over the legal moves and the square-control evaluation. The first rule
//! that produces a move wins, and a seeded random move is the final
//! fallback.

mod presets;
mod report;

pub use report::PositionReport;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{
    ColoredPiece, ControlSquares, LegalMoves, PieceOnSquare, Position, Square,
};

use presets::PresetMoves;

/// Coarse game phase. Only ever advances, never rewinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Initial,
    Developing,
    Midgame,
    Endgame,
}

/// Per-game policy state: the stage, the opponent's last move, and the
/// random source for the fallback rule.
pub struct Game {
    stage: Stage,
    last_opponent_move: String,
    rng: StdRng,
}

impl Game {
    /// A fresh game at the opening stage
    #[must_use]
    pub fn new() -> Self {
        Game::with_stage(Stage::Initial)
    }

    /// A game starting at the given stage
    #[must_use]
    pub fn with_stage(stage: Stage) -> Self {
        Game {
            stage,
            last_opponent_move: String::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// A game whose random fallback is reproducible
    #[must_use]
    pub fn seeded(stage: Stage, seed: u64) -> Self {
        Game {
            stage,
            last_opponent_move: String::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The current game phase
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Record the opponent's last move string (kept for logging by game
    /// adapters; the policy itself does not consult it)
    pub fn record_opponent_move(&mut self, uci: &str) {
        self.last_opponent_move = uci.to_string();
    }

    /// The opponent's last recorded move
    #[must_use]
    pub fn last_opponent_move(&self) -> &str {
        &self.last_opponent_move
    }

    /// Pick a move for the side to move.
    ///
    /// Returns `None` only when there is no legal move at all; the caller
    /// is expected to have handled checkmate and stalemate already.
    pub fn best_move(&mut self, p: &Position) -> Option<String> {
        // Know how all the pieces move
        let legal_moves = LegalMoves::new(p);
        let control_squares = ControlSquares::new(p);

        let mut sorted_legal_moves = legal_moves.sorted();

        // 1. Don't hang free pieces: move attacked pieces away, the most
        // valuable and furthest advanced first
        for piece_moves in &sorted_legal_moves {
            let piece_on_square = piece_moves.piece_on_square;
            if !control_squares.is_piece_attacked(piece_on_square) {
                continue;
            }

            if let Some(best_take) =
                control_squares.best_take(piece_on_square.piece, &piece_moves.moves)
            {
                info!(
                    "moving attacked piece {piece_on_square} to take piece on {best_take}"
                );
                return Some(format!("{}{best_take}", piece_on_square.square));
            }

            if let Some(safest) =
                control_squares.safest_move(piece_on_square.piece, &piece_moves.moves)
            {
                info!("moving attacked piece {piece_on_square} to safest square {safest}");
                return Some(format!("{}{safest}", piece_on_square.square));
            }

            if let Some(best_sack) = control_squares.best_sack(&piece_moves.moves) {
                info!("sacking attacked piece {piece_on_square} to take on {best_sack}");
                return Some(format!("{}{best_sack}", piece_on_square.square));
            }
        }
        // Need to consider moving other pieces to defend (block or take
        // attackers).

        // 2. Take free pieces. Reverse sort so we attack with the lowest
        // value pieces first.
        sorted_legal_moves.reverse();
        for piece_moves in &sorted_legal_moves {
            let piece_on_square = piece_moves.piece_on_square;
            if let Some(first_hanging) =
                control_squares.first_hanging(piece_on_square.piece, &piece_moves.moves)
            {
                info!("taking free piece with {piece_on_square} to {first_hanging}");
                return Some(format!("{}{first_hanging}", piece_on_square.square));
            }
        }

        // 3. Capture pieces of equal value whenever possible, trading the
        // highest value piece first
        let trades: Vec<_> = sorted_legal_moves
            .iter()
            .map(|piece_moves| {
                control_squares.trades(piece_moves.piece_on_square, &piece_moves.moves)
            })
            .filter(|piece_trades| !piece_trades.moves.is_empty())
            .collect();
        if let Some(piece_trades) = trades.last() {
            info!(
                "trading pieces with {} to {}",
                piece_trades.piece_on_square, piece_trades.moves[0]
            );
            return Some(format!(
                "{}{}",
                piece_trades.piece_on_square.square, piece_trades.moves[0]
            ));
        }

        // 4. Always attack a bishop or knight on b4/g4 (b5/g5) with the
        // a or h pawn immediately
        if let Some(push) = flank_attack(p, &legal_moves) {
            info!("pushing rook pawn {push} at a flanking minor piece");
            return Some(push);
        }

        if self.stage == Stage::Initial {
            if let Some(preset) = search_preset_moves(
                &legal_moves,
                &control_squares,
                presets::initial_moves(p.active_color()),
            ) {
                return Some(preset);
            }
            self.stage = Stage::Developing;
        }

        // 5. Castle as soon as possible.
        // 6. Make an escape square for the king once finished development.
        if self.stage == Stage::Developing {
            if let Some(preset) = search_preset_moves(
                &legal_moves,
                &control_squares,
                presets::developing_moves(p.active_color()),
            ) {
                return Some(preset);
            }
            self.stage = Stage::Midgame;
        }

        // Nothing else? make a random move.
        let random_move = legal_moves.random_move(&mut self.rng)?;
        info!(
            "randomly moving {} to {}",
            random_move.piece_on_square, random_move.moves[0]
        );
        Some(format!(
            "{}{}",
            random_move.piece_on_square.square, random_move.moves[0]
        ))
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// The first scripted move that is both legal and safe to play
fn search_preset_moves(
    legal_moves: &LegalMoves,
    control_squares: &ControlSquares,
    preset_moves: &PresetMoves,
) -> Option<String> {
    for (piece_on_square, targets) in preset_moves {
        for to_square in targets {
            if legal_moves.is_legal(*piece_on_square, *to_square)
                && control_squares.is_safe_to_move(piece_on_square.piece, *to_square)
            {
                info!("found preset move of {piece_on_square} to {to_square}");
                return Some(format!("{}{to_square}", piece_on_square.square));
            }
        }
    }
    None
}

/// An opponent bishop or knight has camped on a rook-pawn flank square:
/// chase it with the one-square rook-pawn push if that push is legal.
fn flank_attack(p: &Position, legal_moves: &LegalMoves) -> Option<String> {
    let minors = |bishop: ColoredPiece, knight: ColoredPiece| {
        p.bitboard(bishop).0 | p.bitboard(knight).0
    };
    let black_minors = minors(ColoredPiece::BlackBishop, ColoredPiece::BlackKnight);
    let white_minors = minors(ColoredPiece::WhiteBishop, ColoredPiece::WhiteKnight);

    let cases: [(u64, ColoredPiece, &str, &str); 4] = [
        (black_minors, ColoredPiece::WhitePawn, "a2", "a3"),
        (black_minors, ColoredPiece::WhitePawn, "h2", "h3"),
        (white_minors, ColoredPiece::BlackPawn, "a7", "a6"),
        (white_minors, ColoredPiece::BlackPawn, "h7", "h6"),
    ];
    let flank_squares = ["b4", "g4", "b5", "g5"];

    for ((minor_board, pawn, pawn_from, pawn_to), flank) in cases.into_iter().zip(flank_squares) {
        let flank_square: Square = flank.parse().ok()?;
        let from_square: Square = pawn_from.parse().ok()?;
        let to_square: Square = pawn_to.parse().ok()?;
        if minor_board & flank_square.mask() != 0
            && legal_moves.is_legal(PieceOnSquare::new(pawn, from_square), to_square)
        {
            return Some(format!("{pawn_from}{pawn_to}"));
        }
    }
    None
}
