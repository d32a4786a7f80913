use std::time::Duration;

use gesture_shooter::entities::*;
use gesture_shooter::round::*;
use gesture_shooter::tuning::RoundTuning;

fn make_state(score: u32) -> GameState {
    let tuning = RoundTuning::default();
    GameState {
        targets: Vec::new(),
        projectiles: Default::default(),
        hit_markers: Vec::new(),
        score,
        outcome: Outcome::Running,
        elapsed: Duration::ZERO,
        remaining: tuning.round_duration,
        frame: 0,
        width: 640,
        height: 480,
        tuning,
    }
}

fn secs(n: f64) -> Duration {
    Duration::from_secs_f64(n)
}

#[test]
fn remaining_time_saturates_at_zero() {
    assert_eq!(remaining_time(secs(60.0), secs(15.0)), secs(45.0));
    assert_eq!(remaining_time(secs(60.0), secs(75.0)), Duration::ZERO);
}

#[test]
fn stays_running_before_expiry() {
    let s = evaluate_round(&make_state(100), secs(59.9));
    assert_eq!(s.outcome, Outcome::Running);
    assert_eq!(s.elapsed, secs(59.9));
    assert!(s.remaining > Duration::ZERO);
}

#[test]
fn expiry_is_exactly_at_duration() {
    let s = evaluate_round(&make_state(0), secs(60.0));
    assert_eq!(s.remaining, Duration::ZERO);
    assert_eq!(s.outcome, Outcome::Lost);
}

#[test]
fn score_above_threshold_wins() {
    let s = evaluate_round(&make_state(41), secs(61.0));
    assert_eq!(s.outcome, Outcome::Won);
}

#[test]
fn score_at_threshold_loses() {
    let s = evaluate_round(&make_state(40), secs(61.0));
    assert_eq!(s.outcome, Outcome::Lost);
}

#[test]
fn outcome_never_changes_once_set() {
    let lost = evaluate_round(&make_state(3), secs(60.0));
    assert_eq!(lost.outcome, Outcome::Lost);

    let mut later = lost.clone();
    later.score = 100;
    let later = evaluate_round(&later, secs(90.0));
    assert_eq!(later.outcome, Outcome::Lost);
    assert_eq!(later.elapsed, lost.elapsed);

    let won = evaluate_round(&make_state(50), secs(60.0));
    let mut later = won.clone();
    later.score = 0;
    assert_eq!(evaluate_round(&later, secs(120.0)).outcome, Outcome::Won);
}
