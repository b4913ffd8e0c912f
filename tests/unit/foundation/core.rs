use super::*;

#[test]
fn time_range_contains_is_inclusive() {
    let r = TimeRange::new(2.0, 4.0).unwrap();
    assert!(!r.contains(1.9));
    assert!(r.contains(2.0));
    assert!(r.contains(3.0));
    assert!(r.contains(4.0));
    assert!(!r.contains(4.1));
    assert_eq!(r.duration(), 2.0);
}

#[test]
fn time_range_rejects_invalid_pairs() {
    assert!(TimeRange::new(3.0, 3.0).unwrap_err().is_validation());
    assert!(TimeRange::new(3.0, 1.0).unwrap_err().is_validation());
    assert!(TimeRange::new(-0.5, 1.0).unwrap_err().is_validation());
    assert!(TimeRange::new(0.0, f64::INFINITY).unwrap_err().is_validation());
    assert!(TimeRange::new(f64::NAN, 1.0).unwrap_err().is_validation());
    assert!(TimeRange::new(0.0, 0.1).is_ok());
}

#[test]
fn size_must_be_positive_and_finite() {
    assert!(validate_size(Size::new(320.0, 240.0)).is_ok());
    assert!(validate_size(Size::new(0.0, 100.0)).is_err());
    assert!(validate_size(Size::new(-5.0, 100.0)).is_err());
    assert!(validate_size(Size::new(10.0, f64::NAN)).is_err());
}

#[test]
fn position_may_be_negative_but_finite() {
    assert!(validate_position(Point::new(-10.0, 5.0)).is_ok());
    assert!(validate_position(Point::new(f64::INFINITY, 5.0)).is_err());
}

#[test]
fn validate_within_caps_the_end_time() {
    let r = TimeRange::new(0.0, DEFAULT_MAX_TIMELINE_SECS).unwrap();
    assert!(r.validate_within(DEFAULT_MAX_TIMELINE_SECS).is_ok());

    let huge = TimeRange::new(0.0, 1e12).unwrap();
    let err = huge.validate_within(DEFAULT_MAX_TIMELINE_SECS).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("timeline limit"));

    let backwards = TimeRange { start: 3.0, end: 1.0 };
    assert!(backwards.validate_within(10.0).unwrap_err().is_validation());
}
