//! Move application tests.

use crate::board::error::MoveError;
use crate::board::{CastlingRight, Color, ColoredPiece, Position};

#[test]
fn test_simple_push_sets_en_passant_target() {
    let mut p = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    p.apply_uci_move("e2e4").unwrap();

    assert_eq!(
        p.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn test_en_passant_capture_removes_the_passed_pawn() {
    let mut p = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    for mv in ["e2e4", "c7c5", "e4e5", "d7d5"] {
        p.apply_uci_move(mv).unwrap();
    }
    assert_eq!(p.en_passant_target(), Some("d6".parse().unwrap()));

    p.apply_uci_move("e5d6").unwrap();

    // The white pawn landed on d6 and the black pawn on d5 is gone
    assert!(p.bitboard(ColoredPiece::WhitePawn).contains("d6".parse().unwrap()));
    assert!(!p.bitboard(ColoredPiece::BlackPawn).contains("d5".parse().unwrap()));
    assert_eq!(p.en_passant_target(), None);
}

#[test]
fn test_promotion_on_capture() {
    let mut p = Position::from_fen("3k1n2/6P1/8/8/8/8/p7/1R4K1 w - - 0 30");

    p.apply_uci_move("g7g8q").unwrap();
    assert_eq!(p.to_fen(), "3k1nQ1/8/8/8/8/8/p7/1R4K1 b - - 0 30");

    p.apply_uci_move("a2a1n").unwrap();
    assert_eq!(p.to_fen(), "3k1nQ1/8/8/8/8/8/8/nR4K1 w - - 0 31");
}

#[test]
fn test_promotion_letter_is_tolerant() {
    // An unknown promotion letter degrades to no promotion at all
    let mut p = Position::from_fen("3k4/6P1/8/8/8/8/8/6K1 w - - 0 30");
    p.apply_uci_move("g7g8x").unwrap();
    assert!(p.bitboard(ColoredPiece::WhitePawn).contains("g8".parse().unwrap()));
    assert!(p.bitboard(ColoredPiece::WhiteQueen).is_empty());
}

#[test]
fn test_castling_moves_the_rook() {
    let mut p = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    p.apply_uci_move("e1g1").unwrap();
    assert_eq!(p.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");

    p.apply_uci_move("e8c8").unwrap();
    assert_eq!(p.to_fen(), "2kr4/8/8/8/8/8/8/R4RK1 w - - 2 2");
}

#[test]
fn test_rook_departure_clears_one_right() {
    let mut p = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    p.apply_uci_move("a1a2").unwrap();

    assert!(!p.can_castle(CastlingRight::WhiteLong));
    assert!(p.can_castle(CastlingRight::WhiteShort));
    assert!(p.can_castle(CastlingRight::BlackShort));
    assert!(p.can_castle(CastlingRight::BlackLong));
}

#[test]
fn test_rook_capture_clears_the_opponent_right() {
    // The white rook runs up the h-file and takes the black rook at home
    let mut p = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    p.apply_uci_move("h1h8").unwrap();

    assert!(!p.can_castle(CastlingRight::BlackShort));
    assert!(p.can_castle(CastlingRight::BlackLong));
    // The moving rook also spent its own right
    assert!(!p.can_castle(CastlingRight::WhiteShort));
    assert!(p.can_castle(CastlingRight::WhiteLong));
}

#[test]
fn test_halfmove_clock_counts_and_resets() {
    let mut p = Position::from_fen("r3k2r/8/8/8/8/8/4P3/R3K2R w KQkq - 10 20");

    // Piece moves only increment the clock
    p.apply_uci_move("a1b1").unwrap();
    assert_eq!(p.halfmove_clock(), 11);
    p.apply_uci_move("a8a1").unwrap();
    assert_eq!(p.halfmove_clock(), 12);

    // A capture resets it
    p.apply_uci_move("b1a1").unwrap();
    assert_eq!(p.halfmove_clock(), 0);

    // As does a pawn move
    p.apply_uci_move("e8e7").unwrap();
    assert_eq!(p.halfmove_clock(), 1);
    p.apply_uci_move("e2e3").unwrap();
    assert_eq!(p.halfmove_clock(), 0);
}

#[test]
fn test_fullmove_number_increments_after_black() {
    let mut p = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 3");
    p.apply_uci_move("e2e4").unwrap();
    assert_eq!(p.fullmove_number(), 3);
    p.apply_uci_move("e7e5").unwrap();
    assert_eq!(p.fullmove_number(), 4);
}

#[test]
fn test_empty_source_square_is_an_error() {
    let mut p = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let before = p.clone();

    let result = p.apply_uci_move("e4e5");
    assert!(matches!(result, Err(MoveError::NoPieceToMove { color: Color::White, .. })));
    // The position is untouched so the caller can recover
    assert_eq!(p, before);
}

#[test]
fn test_malformed_move_strings_are_errors() {
    let mut p = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert!(matches!(
        p.apply_uci_move("e2"),
        Err(MoveError::InvalidLength { len: 2 })
    ));
    assert!(matches!(
        p.apply_uci_move("z9z9"),
        Err(MoveError::InvalidSquare { .. })
    ));
}
