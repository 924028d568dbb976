use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(1, 1).is_ok());
}

#[test]
fn canvas_min_side_and_center() {
    let c = Canvas::default();
    assert_eq!(c.min_side(), 1080.0);
    assert_eq!(c.center(), Point::new(540.0, 960.0));
}
