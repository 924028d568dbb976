use super::*;

#[test]
fn parses_generator_output_and_ignores_unknown_fields() {
    let json = r#"
{
  "startFEN": "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
  "moves": [
    { "from_square": "e2", "to_square": "e4", "capture": false },
    { "from_square": "e1", "to_square": "g1", "capture": false, "castle": "king_side" },
    {
      "from_square": "b7", "to_square": "a8", "capture": true,
      "captured_piece_square": "a8",
      "promotion": "q", "promotion_square": "a8", "promotion_color": "white"
    }
  ]
}
"#;
    let doc = TimelineDocument::from_reader(json.as_bytes()).unwrap();
    assert!(doc.start_fen.as_deref().unwrap().starts_with("rnbqkbnr/"));
    assert_eq!(doc.moves.len(), 3);
    assert_eq!(doc.moves[0], MoveRecord::new("e2", "e4"));
    let promo = &doc.moves[2];
    assert!(promo.capture);
    assert_eq!(promo.promotion.as_deref(), Some("q"));
    assert_eq!(promo.promotion_color, Some(PieceColor::White));
    assert_eq!(doc.settings, TimelineSettings::default());
}

#[test]
fn partial_settings_keep_defaults() {
    let json = r#"{ "moves": [], "settings": { "timing": { "move_duration": 0.5 }, "orientation": "black" } }"#;
    let doc = TimelineDocument::from_reader(json.as_bytes()).unwrap();
    assert!(doc.start_fen.is_none());
    assert_eq!(doc.settings.timing.move_duration, 0.5);
    assert_eq!(doc.settings.timing.start_time, 2.0);
    assert_eq!(doc.settings.canvas, Canvas::default());
    assert_eq!(doc.settings.orientation, Orientation::Black);
    assert!(doc.settings.validate().is_ok());
}

#[test]
fn settings_validation_rejects_bad_values() {
    let mut s = TimelineSettings::default();
    s.timing.gap_between_moves = -1.0;
    assert!(s.validate().is_err());

    let mut s = TimelineSettings::default();
    s.canvas.width = 0;
    assert!(s.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = TimelineDocument::from_reader("{ moves: ".as_bytes()).unwrap_err();
    assert!(matches!(err, ChessmotionError::Serde(_)));
    let err = TimelineDocument::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, ChessmotionError::Validation(_)));
}
