//! Pseudo-legal move generation tests, one scenario per piece type.

use crate::board::{possible_moves, Position, Square};

/// The generated destinations for the piece on `from`, sorted
/// alphabetically; empty when the piece has no moves.
fn targets(p: &Position, from: &str) -> Vec<String> {
    let from_square: Square = from.parse().unwrap();
    let mut found: Vec<String> = possible_moves(p)
        .iter()
        .find(|(piece_on_square, _)| piece_on_square.square == from_square)
        .map(|(_, move_board)| move_board.iter().map(|sq| sq.to_string()).collect())
        .unwrap_or_default();
    found.sort();
    found
}

fn sorted(expected: &[&str]) -> Vec<String> {
    let mut expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
    expected.sort();
    expected
}

#[test]
fn test_white_pawn_moves() {
    let p = Position::from_fen("8/3p4/8/6Pp/8/1p2K2p/P3P2P/8 w - h6 0 1");

    // Single push, double push, and a capture
    assert_eq!(targets(&p, "a2"), sorted(&["a3", "a4", "b3"]));
    // Blocked by the own king ahead
    assert_eq!(targets(&p, "e2"), sorted(&[]));
    // Blocked by an opponent pawn ahead
    assert_eq!(targets(&p, "h2"), sorted(&[]));
    // Push plus the en passant capture
    assert_eq!(targets(&p, "g5"), sorted(&["g6", "h6"]));
}

#[test]
fn test_black_pawn_moves() {
    let p = Position::from_fen("8/3p4/8/8/Pp6/2P5/P7/8 b - a3 0 1");

    assert_eq!(targets(&p, "d7"), sorted(&["d6", "d5"]));
    // Capture, push, and the en passant capture
    assert_eq!(targets(&p, "b4"), sorted(&["a3", "b3", "c3"]));
}

#[test]
fn test_knight_moves() {
    let p = Position::from_fen("7N/8/3P1P2/2P3P1/4N3/N7/8/8 w - - 0 1");

    // Corner-adjacent knights must not wrap across the board edge
    assert_eq!(targets(&p, "a3"), sorted(&["b1", "c2", "c4", "b5"]));
    assert_eq!(targets(&p, "h8"), sorted(&["g6", "f7"]));
    // Friendly pawns occupy half the destinations
    assert_eq!(targets(&p, "e4"), sorted(&["d2", "c3", "f2", "g3"]));
}

#[test]
fn test_rook_moves() {
    let p = Position::from_fen("4Q2R/8/p3RP1p/8/p7/8/8/R3R3 w - - 0 1");

    assert_eq!(
        targets(&p, "a1"),
        sorted(&["a2", "a3", "a4", "b1", "c1", "d1"])
    );
    assert_eq!(
        targets(&p, "e1"),
        sorted(&["e2", "e3", "e4", "e5", "f1", "g1", "h1", "b1", "c1", "d1"])
    );
    assert_eq!(
        targets(&p, "e6"),
        sorted(&["e7", "e2", "e3", "e4", "e5", "a6", "b6", "c6", "d6"])
    );
    assert_eq!(targets(&p, "h8"), sorted(&["h6", "h7", "g8", "f8"]));
}

#[test]
fn test_bishop_moves() {
    let p = Position::from_fen("1B4B1/2r4n/3n4/4B3/2B5/1R4R1/4n3/B6B w - - 0 1");

    assert_eq!(targets(&p, "a1"), sorted(&["b2", "c3", "d4"]));
    assert_eq!(
        targets(&p, "h1"),
        sorted(&["g2", "f3", "e4", "d5", "c6", "b7", "a8"])
    );
    assert_eq!(
        targets(&p, "c4"),
        sorted(&["d5", "e6", "f7", "d3", "e2", "b5", "a6"])
    );
    assert_eq!(
        targets(&p, "e5"),
        sorted(&["f6", "g7", "h8", "d4", "c3", "b2", "f4", "d6"])
    );
    assert_eq!(targets(&p, "b8"), sorted(&["a7", "c7"]));
    assert_eq!(targets(&p, "g8"), sorted(&["f7", "e6", "d5", "h7"]));
}

#[test]
fn test_queen_moves() {
    let p = Position::from_fen("Qr1RRR1Q/r2RQR2/3RrR2/8/4R3/2rQ4/8/Q1R2Q2 w - - 0 1");

    assert_eq!(
        targets(&p, "a1"),
        sorted(&["b2", "c3", "b1", "a2", "a3", "a4", "a5", "a6", "a7"])
    );
    assert_eq!(
        targets(&p, "f1"),
        sorted(&["g1", "h1", "e1", "d1", "f2", "f3", "f4", "f5", "g2", "h3", "e2"])
    );
    assert_eq!(
        targets(&p, "d3"),
        sorted(&[
            "d4", "d5", "d2", "d1", "c3", "e3", "f3", "g3", "h3", "c2", "b1", "e2", "c4", "b5",
            "a6"
        ])
    );
    assert_eq!(targets(&p, "e7"), sorted(&["e6"]));
    assert_eq!(targets(&p, "a8"), sorted(&["a7", "b8", "b7", "c6", "d5"]));
    assert_eq!(
        targets(&p, "h8"),
        sorted(&["g8", "g7", "h7", "h6", "h5", "h4", "h3", "h2", "h1"])
    );
}

#[test]
fn test_white_king_moves() {
    let p = Position::from_fen("1n1K3K/2p1PPP1/4PKP1/4PPP1/pn6/Kn6/nn6/R3K2R w - - 0 1");

    assert_eq!(
        targets(&p, "a3"),
        sorted(&["a2", "a4", "b2", "b3", "b4"])
    );
    // No castling rights in this position
    assert_eq!(targets(&p, "e1"), sorted(&["d1", "d2", "e2", "f2", "f1"]));
    // Completely boxed in by friendly pawns
    assert_eq!(targets(&p, "f6"), sorted(&[]));
    assert_eq!(targets(&p, "d8"), sorted(&["c8", "c7", "d7", "e8"]));
    assert_eq!(targets(&p, "h8"), sorted(&["h7", "g8"]));
}

#[test]
fn test_white_castling() {
    // Both transits clear: castling both ways
    let p = Position::from_fen("8/8/8/8/8/8/1Q1N1NP1/R3K2R w KQ - 0 1");
    assert_eq!(
        targets(&p, "e1"),
        sorted(&["e2", "d1", "f1", "c1", "g1"])
    );

    // Knights on b1 and g1 block both castles
    let p = Position::from_fen("8/8/8/8/8/8/1Q1N1NP1/RN2K1NR w KQ - 0 1");
    assert_eq!(targets(&p, "e1"), sorted(&["e2", "d1", "f1"]));
}

#[test]
fn test_black_castling() {
    // No rights: no castling destinations
    let p = Position::from_fen("r3k2r/2qn1n2/8/8/8/8/1Q1N1NP1/RN2K1NR b - - 0 1");
    assert_eq!(targets(&p, "e8"), sorted(&["e7", "d8", "f8"]));

    // Rights restored: both castles appear
    let p = Position::from_fen("r3k2r/2qn1n2/8/8/8/8/1Q1N1NP1/RN2K1NR b kq - 0 1");
    assert_eq!(
        targets(&p, "e8"),
        sorted(&["e7", "d8", "f8", "c8", "g8"])
    );

    // Own knights on d8 and g8 block both castles
    let p = Position::from_fen("r2nk1nr/2qn1n2/8/8/8/8/1Q1N1NP1/RN2K1NR b KQkq - 0 1");
    assert_eq!(targets(&p, "e8"), sorted(&["e7", "f8"]));
}

#[test]
fn test_castling_through_check_is_excluded() {
    // The black rook on f8 covers f1: the white king may not pass through
    let p = Position::from_fen("5r2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!targets(&p, "e1").contains(&"g1".to_string()));
    // The queenside transit is not covered, so O-O-O survives
    assert!(targets(&p, "e1").contains(&"c1".to_string()));
}

#[test]
fn test_check_detection() {
    let p = Position::from_fen(
        "rnbqkbnr/1ppp1Qp1/p6p/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 2 4",
    );
    assert!(p.is_active_color_in_check());

    let p = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert!(!p.is_active_color_in_check());
}
