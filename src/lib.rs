//! Chess engine driven by a rule ladder instead of search.
//!
//! Provides a complete playing engine with:
//! - Bitboard-based position representation with FEN parse/emit
//! - Full legal move generation (castling, en passant, promotion)
//! - A square-control evaluation (who holds each square, and how cheaply)
//! - A deterministic rule-based move policy with scripted openings
//!
//! # Quick Start
//!
//! ```
//! use rulebook_chess::board::{LegalMoves, Position};
//! use rulebook_chess::engine::Game;
//!
//! // Create a new game from the starting position
//! let mut position = Position::from_fen(
//!     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
//! );
//!
//! // Generate all legal moves
//! let moves = LegalMoves::new(&position);
//! println!("Movable pieces: {}", moves.len());
//!
//! // Ask the policy for a move and play it
//! let mut game = Game::new();
//! if let Some(best) = game.best_move(&position) {
//!     position.apply_uci_move(&best).unwrap();
//!     println!("Played: {best}");
//! }
//! ```
//!
//! # Driving a game from the outside
//!
//! ```
//! use rulebook_chess::board::Position;
//! use rulebook_chess::engine::PositionReport;
//!
//! let mut position = Position::from_fen(
//!     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
//! );
//! position.apply_uci_move("e2e4").unwrap();
//!
//! // The report carries everything a front end needs after a move
//! let report = PositionReport::new(&position, "e2e4");
//! assert!(!report.in_check);
//! assert!(!report.in_draw);
//! ```
//!
//! Diagnostics go through the `log` facade; embedders that want to see the
//! policy's reasoning install any logger implementation.

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod engine;
