use super::*;
use crate::composition::model::{MediaKind, MediaPatch, MediaSource, NewMedia};
use crate::config::UploadDefaults;

fn comp_ending_at(end: f64) -> Composition {
    let mut comp = Composition::new();
    let id = comp
        .add(NewMedia::with_defaults(
            MediaKind::Video,
            MediaSource::new("v"),
            &UploadDefaults::default(),
        ))
        .unwrap();
    comp.update(id, &MediaPatch::time_range(0.0, end)).unwrap();
    comp
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn starts_idle_at_zero() {
    let clock = PlaybackClock::default();
    assert_eq!(clock.phase(), Phase::Idle);
    assert_eq!(clock.current_time(), 0.0);
    assert!(clock.active_token().is_none());
}

#[test]
fn start_is_idempotent() {
    let mut clock = PlaybackClock::default();
    let a = clock.start();
    let b = clock.start();
    assert_eq!(a, b);
    assert_eq!(clock.phase(), Phase::Playing);
    assert_eq!(clock.active_token(), Some(a));
}

#[test]
fn stop_from_idle_is_noop() {
    let mut clock = PlaybackClock::default();
    clock.seek(3.0).unwrap();
    assert!(!clock.stop());
    assert_eq!(clock.phase(), Phase::Idle);
    assert_eq!(clock.current_time(), 3.0);
}

#[test]
fn tick_advances_by_step() {
    let comp = Composition::new();
    let mut clock = PlaybackClock::default();
    let token = clock.start();
    assert_eq!(clock.tick(token, &comp), TickOutcome::Advanced(0.1));
    clock.tick(token, &comp);
    assert_close(clock.current_time(), 0.2);
    assert!(clock.is_playing());
}

#[test]
fn loop_uses_ten_second_floor_not_item_end() {
    let comp = comp_ending_at(5.0);
    let mut clock = PlaybackClock::default();
    assert_eq!(clock.loop_point(&comp), 10.0);

    clock.seek(4.95).unwrap();
    let token = clock.start();
    assert!(matches!(clock.tick(token, &comp), TickOutcome::Advanced(_)));
    assert!(clock.is_playing());

    clock.seek(9.95).unwrap();
    assert_eq!(clock.tick(token, &comp), TickOutcome::Looped);
    assert_eq!(clock.phase(), Phase::Idle);
    assert_eq!(clock.current_time(), 0.0);
}

#[test]
fn loop_point_follows_latest_end() {
    let comp = comp_ending_at(20.0);
    let mut clock = PlaybackClock::default();
    let token = clock.start();
    clock.seek(19.85).unwrap();
    assert!(matches!(clock.tick(token, &comp), TickOutcome::Advanced(_)));
    assert_eq!(clock.tick(token, &comp), TickOutcome::Looped);
}

#[test]
fn stale_token_cannot_advance_after_stop() {
    let comp = Composition::new();
    let mut clock = PlaybackClock::default();
    let token = clock.start();
    clock.stop();
    assert_eq!(clock.tick(token, &comp), TickOutcome::Stale);
    assert_eq!(clock.current_time(), 0.0);

    // A new run gets a fresh token; the old one stays dead.
    let fresh = clock.start();
    assert_ne!(fresh, token);
    assert_eq!(clock.tick(token, &comp), TickOutcome::Stale);
    assert_eq!(clock.tick(fresh, &comp), TickOutcome::Advanced(0.1));
}

#[test]
fn reset_stops_and_rewinds() {
    let comp = Composition::new();
    let mut clock = PlaybackClock::default();
    let token = clock.start();
    clock.tick(token, &comp);
    clock.reset();
    assert_eq!(clock.phase(), Phase::Idle);
    assert_eq!(clock.current_time(), 0.0);
    assert_eq!(clock.tick(token, &comp), TickOutcome::Stale);
}

#[test]
fn seek_validates_and_keeps_phase() {
    let mut clock = PlaybackClock::default();
    let token = clock.start();
    clock.seek(2.5).unwrap();
    assert_eq!(clock.active_token(), Some(token));
    assert!(clock.seek(-1.0).unwrap_err().is_validation());
    assert!(clock.seek(f64::NAN).unwrap_err().is_validation());
    assert_eq!(clock.current_time(), 2.5);
}

#[test]
fn seek_past_the_limit_is_rejected() {
    let mut clock = PlaybackClock::default();
    assert!(clock.seek(1e16).unwrap_err().is_validation());
    assert_eq!(clock.current_time(), 0.0);
    clock.seek(SessionOpts::default().max_timeline_secs).unwrap();
}

#[test]
fn ticks_near_the_limit_still_reach_the_loop_point() {
    let max = SessionOpts::default().max_timeline_secs;
    let comp = comp_ending_at(max);
    let mut clock = PlaybackClock::default();
    clock.seek(max - 1.0).unwrap();
    let token = clock.start();

    let mut previous = clock.current_time();
    let mut ticks = 0;
    loop {
        match clock.tick(token, &comp) {
            TickOutcome::Advanced(t) => {
                assert!(t > previous, "clock stalled at {previous}");
                previous = t;
            }
            TickOutcome::Looped => break,
            TickOutcome::Stale => panic!("live token went stale"),
        }
        ticks += 1;
        assert!(ticks <= 20, "clock never looped");
    }
    assert_eq!(clock.phase(), Phase::Idle);
    assert_eq!(clock.current_time(), 0.0);
}

#[test]
fn step_too_small_to_move_time_loops_instead_of_stalling() {
    let opts = SessionOpts {
        tick_step_secs: 1e-12,
        ..SessionOpts::default()
    };
    let comp = comp_ending_at(opts.max_timeline_secs);
    let mut clock = PlaybackClock::new(&opts);
    clock.seek(80_000.0).unwrap();
    let token = clock.start();
    assert_eq!(clock.tick(token, &comp), TickOutcome::Looped);
    assert_eq!(clock.current_time(), 0.0);
}
