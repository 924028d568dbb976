use super::*;

#[test]
fn fen_letters_carry_color_in_case() {
    assert_eq!(
        piece_from_fen_char('K'),
        Some((PieceKind::King, PieceColor::White))
    );
    assert_eq!(
        piece_from_fen_char('n'),
        Some((PieceKind::Knight, PieceColor::Black))
    );
    assert_eq!(piece_from_fen_char('x'), None);
    assert_eq!(piece_from_fen_char('3'), None);
}

#[test]
fn promotion_accepts_only_minor_and_major_pieces() {
    assert_eq!(PieceKind::parse_promotion("q").unwrap(), PieceKind::Queen);
    assert_eq!(PieceKind::parse_promotion("N").unwrap(), PieceKind::Knight);
    assert!(PieceKind::parse_promotion("k").is_err());
    assert!(PieceKind::parse_promotion("p").is_err());
    assert!(PieceKind::parse_promotion("qq").is_err());
    assert!(PieceKind::parse_promotion("").is_err());
}

#[test]
fn color_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&PieceColor::White).unwrap(),
        "\"white\""
    );
    let c: PieceColor = serde_json::from_str("\"black\"").unwrap();
    assert_eq!(c, PieceColor::Black);
    assert_eq!(c.back_rank(), 7);
}
