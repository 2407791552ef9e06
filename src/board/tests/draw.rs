//! Draw detection tests.

use crate::board::Position;

#[test]
fn test_material_left_is_not_a_draw() {
    let p = Position::from_fen("8/7k/7P/8/8/8/8/4K3 b - - 56 199");
    assert!(!p.is_draw());
}

#[test]
fn test_bare_kings_are_a_draw() {
    let p = Position::from_fen("8/8/7k/8/8/8/8/4K3 w - - 56 199");
    assert!(p.is_draw());
}

#[test]
fn test_fifty_move_rule() {
    let p = Position::from_fen("8/7k/7P/8/8/8/8/4K3 b - - 100 199");
    assert!(p.is_draw());

    let p = Position::from_fen("8/7k/7P/8/8/8/8/4K3 b - - 99 199");
    assert!(!p.is_draw());
}

#[test]
fn test_halfmove_clock_advances_toward_the_draw() {
    let mut p = Position::from_fen("8/7k/8/8/8/8/R7/4K3 w - - 98 199");
    assert!(!p.is_draw());

    p.apply_uci_move("a2a3").unwrap();
    p.apply_uci_move("h7h6").unwrap();
    assert_eq!(p.halfmove_clock(), 100);
    assert!(p.is_draw());
}

#[test]
fn test_single_minor_piece_is_not_a_draw() {
    // The simplified material test only recognizes bare kings
    let p = Position::from_fen("8/8/8/8/8/8/6N1/K1k5 w - - 0 1");
    assert!(!p.is_draw());
}
