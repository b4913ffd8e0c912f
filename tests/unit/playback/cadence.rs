use super::*;

#[test]
fn counts_whole_intervals_and_carries_remainder() {
    let mut c = Cadence::new(Duration::from_millis(100));
    assert_eq!(c.due(Duration::from_millis(50)), 0);
    assert_eq!(c.due(Duration::from_millis(50)), 1);
    assert_eq!(c.due(Duration::from_millis(250)), 2);
    assert_eq!(c.due(Duration::from_millis(50)), 1);
}

#[test]
fn reset_drops_partial_interval() {
    let mut c = Cadence::new(Duration::from_millis(100));
    assert_eq!(c.due(Duration::from_millis(90)), 0);
    c.reset();
    assert_eq!(c.due(Duration::from_millis(90)), 0);
}

#[test]
fn zero_interval_is_clamped() {
    let c = Cadence::new(Duration::ZERO);
    assert_eq!(c.interval(), Duration::from_nanos(1));
}
