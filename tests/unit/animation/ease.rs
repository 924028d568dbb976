use super::*;

#[test]
fn endpoints_are_fixed_and_input_is_clamped() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ] {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(7.0), 1.0, "{ease:?}");
    }
}

#[test]
fn in_out_curves_are_symmetric_at_midpoint() {
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
    assert_eq!(Ease::InOutCubic.apply(0.5), 0.5);
    assert!(Ease::InQuad.apply(0.25) < 0.25);
    assert!(Ease::OutQuad.apply(0.25) > 0.25);
}

#[test]
fn out_curves_mirror_in_curves() {
    for t in [0.1, 0.3, 0.5, 0.8] {
        assert!((Ease::OutQuad.apply(t) - (1.0 - Ease::InQuad.apply(1.0 - t))).abs() < 1e-12);
        assert!((Ease::OutCubic.apply(t) - (1.0 - Ease::InCubic.apply(1.0 - t))).abs() < 1e-12);
    }
    assert_eq!(Ease::InCubic.apply(0.5), 0.125);
    assert_eq!(Ease::InOutCubic.apply(0.25), 0.0625);
}

#[test]
fn serde_names_are_snake_case() {
    assert_eq!(
        serde_json::to_string(&Ease::InOutCubic).unwrap(),
        "\"in_out_cubic\""
    );
}
