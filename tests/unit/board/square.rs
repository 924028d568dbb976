use super::*;

#[test]
fn parse_and_display_agree() {
    let sq: Square = "e4".parse().unwrap();
    assert_eq!(sq.file(), 4);
    assert_eq!(sq.rank(), 3);
    assert_eq!(sq.to_string(), "e4");

    let upper: Square = "H8".parse().unwrap();
    assert_eq!(upper.to_string(), "h8");
}

#[test]
fn parse_rejects_off_board_and_malformed() {
    for bad in ["", "e", "e9", "i1", "e0", "e10", "44"] {
        assert!(bad.parse::<Square>().is_err(), "{bad} should not parse");
    }
}

#[test]
fn clamped_parse_pins_to_board_edges() {
    assert_eq!(Square::clamped("e4").to_string(), "e4");
    assert_eq!(Square::clamped("z4").to_string(), "a4");
    assert_eq!(Square::clamped("c9").to_string(), "c8");
    assert_eq!(Square::clamped("c0").to_string(), "c1");
    assert_eq!(Square::clamped("").to_string(), "a1");
}

#[test]
fn clamped_parse_survives_extreme_ranks() {
    assert_eq!(Square::clamped("a-9223372036854775808").to_string(), "a1");
    assert_eq!(Square::clamped("a99999999999999999999").to_string(), "a8");
    assert_eq!(Square::clamped("h-99999999999999999999").to_string(), "h1");
}

#[test]
fn with_file_keeps_rank() {
    let e1: Square = "e1".parse().unwrap();
    assert_eq!(e1.with_file(7).unwrap().to_string(), "h1");
    assert_eq!(e1.with_file(0).unwrap().to_string(), "a1");
    assert!(e1.with_file(8).is_none());
}

#[test]
fn ordering_is_rank_major() {
    let a1: Square = "a1".parse().unwrap();
    let h1: Square = "h1".parse().unwrap();
    let a2: Square = "a2".parse().unwrap();
    assert!(a1 < h1);
    assert!(h1 < a2);

    let all: Vec<Square> = Square::all().collect();
    assert_eq!(all.len(), 64);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(all[63].to_string(), "h8");
}

#[test]
fn serde_uses_algebraic_strings() {
    let sq: Square = "g1".parse().unwrap();
    assert_eq!(serde_json::to_string(&sq).unwrap(), "\"g1\"");
    let back: Square = serde_json::from_str("\"g1\"").unwrap();
    assert_eq!(back, sq);
    assert!(serde_json::from_str::<Square>("\"x1\"").is_err());
}
