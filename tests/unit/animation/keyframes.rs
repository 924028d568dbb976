use super::*;

fn linear(keys: &[(f64, f64)]) -> Keyframes<f64> {
    let mut kf = Keyframes {
        keys: Vec::new(),
        mode: InterpMode::Linear,
        default: None,
    };
    for &(t, v) in keys {
        kf.push(t, v, Ease::Linear);
    }
    kf
}

#[test]
fn linear_sampling_holds_outside_keys() {
    let kf = linear(&[(1.0, 10.0), (2.0, 20.0)]);
    kf.validate().unwrap();
    assert_eq!(kf.sample(0.0).unwrap(), 10.0);
    assert_eq!(kf.sample(1.5).unwrap(), 15.0);
    assert_eq!(kf.sample(2.0).unwrap(), 20.0);
    assert_eq!(kf.sample(99.0).unwrap(), 20.0);
}

#[test]
fn hold_mode_steps() {
    let mut kf = linear(&[(0.0, 1.0), (1.0, 2.0)]);
    kf.mode = InterpMode::Hold;
    assert_eq!(kf.sample(0.99).unwrap(), 1.0);
    assert_eq!(kf.sample(1.0).unwrap(), 2.0);
}

#[test]
fn coincident_keys_jump_without_dividing_by_zero() {
    let kf = linear(&[(0.0, 0.0), (1.0, 0.0), (1.0, 5.0)]);
    assert_eq!(kf.sample(1.0).unwrap(), 5.0);
    assert_eq!(kf.sample(0.5).unwrap(), 0.0);
}

#[test]
fn constant_and_validation() {
    let kf = Keyframes::constant(Point::new(3.0, 4.0));
    assert_eq!(kf.sample(123.0).unwrap(), Point::new(3.0, 4.0));
    kf.validate().unwrap();

    let empty: Keyframes<f64> = linear(&[]);
    assert!(empty.validate().is_err());
    assert!(empty.sample(0.0).is_err());

    assert!(linear(&[(2.0, 0.0), (1.0, 0.0)]).validate().is_err());
    assert!(linear(&[(f64::NAN, 0.0)]).validate().is_err());
}

#[test]
fn points_interpolate_componentwise() {
    let mut kf = Keyframes::constant(Point::ZERO);
    kf.push(0.0, Point::new(0.0, 0.0), Ease::Linear);
    kf.push(2.0, Point::new(10.0, -20.0), Ease::Linear);
    assert_eq!(kf.sample(1.0).unwrap(), Point::new(5.0, -10.0));
}
